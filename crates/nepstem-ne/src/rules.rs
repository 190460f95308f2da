// Static Nepali suffix tables and the stopword list.
//
// Suffixes are grouped by morphological category; each entry carries a
// hand-assigned frequency weight. Higher weight means the marker is a
// more reliable signal that stripping it yields a real root. The
// categories are merged into one priority-ordered table at engine
// construction and never modified afterwards.

use std::cmp::Ordering;

use hashbrown::{HashMap, HashSet};

/// A single suffix rule: the suffix text and its frequency weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Suffix {
    pub text: &'static str,
    pub weight: f64,
}

impl Suffix {
    /// Selection priority: `weight × length(suffix)` in chars.
    /// Longer, heavier suffixes are more specific morphological
    /// markers and are tried first.
    pub fn priority(&self) -> f64 {
        self.weight * self.text.chars().count() as f64
    }
}

/// A named group of suffix rules.
#[derive(Debug, Clone, Copy)]
pub struct SuffixCategory {
    pub name: &'static str,
    pub entries: &'static [(&'static str, f64)],
}

/// Postpositional case markers, including the fused plural+case forms.
const CASE_MARKERS: &[(&str, f64)] = &[
    ("हरूलाई", 5.0),
    ("हरूको", 5.0),
    ("हरूमा", 5.0),
    ("हरूबाट", 5.0),
    ("हरूसँग", 5.0),
    ("लाई", 4.0),
    ("को", 4.0),
    ("मा", 4.0),
    ("बाट", 4.0),
    ("सँग", 4.0),
    ("द्वारा", 4.0),
    ("का", 3.5),
    ("की", 3.5),
    ("ले", 3.5),
];

/// Plural markers (both spellings of haru).
const PLURAL_MARKERS: &[(&str, f64)] = &[("हरू", 4.5), ("हरु", 4.5)];

/// Verbal inflections: participles, tense and agreement endings.
const VERBAL_SUFFIXES: &[(&str, f64)] = &[
    ("एका", 4.0),
    ("एको", 4.0),
    ("एकी", 4.0),
    ("इएको", 3.8),
    ("दैछ", 3.5),
    ("दैछन्", 3.5),
    ("दछ", 3.5),
    ("दछन्", 3.5),
    ("यो", 3.5),
    ("थियो", 3.5),
    ("थिए", 3.5),
    ("न्छ", 3.0),
    ("न्छन्", 3.0),
    ("ने", 3.0),
    ("नु", 3.0),
    ("ला", 3.0),
    ("उ", 2.5),
    ("छ", 2.5),
    ("छन्", 2.5),
    ("छु", 2.5),
    ("औं", 2.5),
    ("ओ", 2.5),
];

/// Adjectival derivation endings.
const ADJECTIVAL_SUFFIXES: &[(&str, f64)] = &[
    ("इलो", 3.0),
    ("इली", 3.0),
    ("इला", 3.0),
    ("पूर्ण", 2.5),
    ("हीन", 2.5),
];

/// Nominal derivation endings.
const NOMINAL_SUFFIXES: &[(&str, f64)] = &[
    ("पन", 3.0),
    ("पना", 3.0),
    ("ता", 2.5),
    ("त्व", 2.5),
    ("इक", 2.5),
    ("वाला", 2.5),
    ("दार", 2.5),
];

/// All suffix categories in merge order.
pub const CATEGORIES: &[SuffixCategory] = &[
    SuffixCategory { name: "case", entries: CASE_MARKERS },
    SuffixCategory { name: "plural", entries: PLURAL_MARKERS },
    SuffixCategory { name: "verbal", entries: VERBAL_SUFFIXES },
    SuffixCategory { name: "adjectival", entries: ADJECTIVAL_SUFFIXES },
    SuffixCategory { name: "nominal", entries: NOMINAL_SUFFIXES },
];

/// Function words and pronouns that must never be stemmed. Many are
/// themselves identical to suffix strings (को, ले, लाई, ...), so the
/// engine checks this set before consulting the suffix table.
const STOPWORDS: &[&str] = &[
    "छ", "छन्", "हो", "होइन", "हुन्", "थियो", "थिए",
    "र", "वा", "तर", "पनि", "नि", "त", "भने",
    "को", "का", "की", "ले", "लाई", "मा", "बाट",
    "यो", "यी", "त्यो", "ती", "उ", "उनी",
    "म", "हामी", "तिमी", "तपाईं", "उनीहरू",
];

/// Build the stopword set consulted by the engine.
pub fn stopword_set() -> HashSet<&'static str> {
    STOPWORDS.iter().copied().collect()
}

/// Error raised while building the merged suffix table.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// The same suffix text appears in two categories. The merged
    /// table would have to pick one weight silently, so this is
    /// rejected at construction time instead.
    #[error("suffix {suffix:?} appears in both {first:?} and {second:?} categories")]
    DuplicateSuffix {
        suffix: &'static str,
        first: &'static str,
        second: &'static str,
    },
}

/// The merged, priority-ordered suffix table.
#[derive(Debug, Clone)]
pub struct SuffixTable {
    suffixes: Vec<Suffix>,
}

impl SuffixTable {
    /// Merge the shipped categories into one table. The shipped data
    /// is collision-free, so this only fails if the tables are edited
    /// into a conflicting state.
    pub fn build() -> Result<Self, RuleError> {
        Self::from_categories(CATEGORIES)
    }

    /// Merge arbitrary categories, rejecting duplicate suffix text.
    /// Entries are sorted by descending priority; the sort is stable,
    /// so ties keep their category insertion order.
    pub fn from_categories(categories: &[SuffixCategory]) -> Result<Self, RuleError> {
        let mut seen: HashMap<&'static str, &'static str> = HashMap::new();
        let mut suffixes = Vec::new();

        for category in categories {
            for &(text, weight) in category.entries {
                if let Some(first) = seen.insert(text, category.name) {
                    return Err(RuleError::DuplicateSuffix {
                        suffix: text,
                        first,
                        second: category.name,
                    });
                }
                suffixes.push(Suffix { text, weight });
            }
        }

        suffixes.sort_by(|a, b| {
            b.priority()
                .partial_cmp(&a.priority())
                .unwrap_or(Ordering::Equal)
        });

        Ok(SuffixTable { suffixes })
    }

    /// All suffixes, highest priority first.
    pub fn by_priority(&self) -> &[Suffix] {
        &self.suffixes
    }
}
