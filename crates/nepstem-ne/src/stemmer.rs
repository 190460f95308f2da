// The stemming engine.
//
// Stemming a word runs four stages: normalize, trivial exits (short
// words and stopwords), a scored scan over the priority-ordered suffix
// table, and the fallback to the unmodified word when nothing valid
// was found. The engine owns its tables for its whole lifetime and
// every call is a pure function of the input word, so callers may
// share one engine across threads or batch words however they like.

use hashbrown::HashSet;
use serde::Serialize;

use nepstem_core::devanagari;
use nepstem_core::distance::levenshtein;

use crate::rules::{self, RuleError, SuffixTable};
use crate::sandhi;
use crate::validate;

/// Words of this length or shorter are returned untouched.
const MIN_WORD_LENGTH: usize = 2;

/// Diagnostic record for one stemming call.
///
/// `suffix_removed` is the textual difference between the normalized
/// word and the stem. When the gemination correction altered trailing
/// characters it is not necessarily the literal suffix that matched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StemResult {
    pub original: String,
    pub normalized: String,
    pub stem: String,
    pub suffix_removed: String,
    pub edit_distance: usize,
    pub stem_length: usize,
    pub original_length: usize,
}

/// Rule-based Nepali stemmer.
pub struct NepaliStemmer {
    table: SuffixTable,
    stopwords: HashSet<&'static str>,
}

impl NepaliStemmer {
    /// Build an engine over the shipped rule tables. Fails only if
    /// the tables are edited into a state with a duplicate suffix.
    pub fn new() -> Result<Self, RuleError> {
        Ok(NepaliStemmer {
            table: SuffixTable::build()?,
            stopwords: rules::stopword_set(),
        })
    }

    /// Stem a word, keeping only candidates that pass validation.
    /// Falls back to the normalized word when no suffix rule applies
    /// or no candidate validates; never fails on well-formed text.
    pub fn stem(&self, word: &str) -> String {
        self.stem_word(word, true)
    }

    /// Stem without validation: the first suffix match in priority
    /// order wins, however implausible the remainder.
    pub fn stem_unvalidated(&self, word: &str) -> String {
        self.stem_word(word, false)
    }

    fn stem_word(&self, word: &str, apply_validation: bool) -> String {
        let normalized = devanagari::normalize(word);
        let chars: Vec<char> = normalized.chars().collect();

        if chars.len() <= MIN_WORD_LENGTH {
            return normalized;
        }
        if self.stopwords.contains(normalized.as_str()) {
            return normalized;
        }

        if !apply_validation {
            for suffix in self.table.by_priority() {
                if let Some(stripped) = strip_suffix(&chars, suffix.text) {
                    return sandhi::correct(&stripped).into_iter().collect();
                }
            }
            return normalized;
        }

        // Scan every suffix and keep the best-scoring valid candidate;
        // strict improvement means the first find wins score ties.
        let (best, _) = self
            .table
            .by_priority()
            .iter()
            .filter_map(|suffix| {
                let stripped = strip_suffix(&chars, suffix.text)?;
                let candidate = sandhi::correct(&stripped);
                validate::is_valid(&chars, &candidate)
                    .then(|| (candidate, suffix.priority()))
            })
            .fold((None, 0.0_f64), |(best, best_score), (candidate, score)| {
                if score > best_score {
                    (Some(candidate), score)
                } else {
                    (best, best_score)
                }
            });

        match best {
            Some(stem) => stem.into_iter().collect(),
            None => normalized,
        }
    }

    /// Detailed record of one stemming call: normalized form, stem,
    /// removed trailing text, lengths, and edit distance.
    pub fn suffix_info(&self, word: &str) -> StemResult {
        let normalized = devanagari::normalize(word);
        let stem = self.stem(&normalized);

        let normalized_chars: Vec<char> = normalized.chars().collect();
        let stem_chars: Vec<char> = stem.chars().collect();

        let suffix_removed: String = if stem != normalized {
            normalized_chars
                .get(stem_chars.len()..)
                .unwrap_or(&[])
                .iter()
                .collect()
        } else {
            String::new()
        };

        StemResult {
            original: word.to_string(),
            normalized: normalized.clone(),
            edit_distance: levenshtein(&normalized_chars, &stem_chars),
            stem_length: stem_chars.len(),
            original_length: normalized_chars.len(),
            stem,
            suffix_removed,
        }
    }
}

/// Remove `suffix` from the end of `word`, if present.
fn strip_suffix(word: &[char], suffix: &str) -> Option<Vec<char>> {
    let suffix: Vec<char> = suffix.chars().collect();
    if suffix.len() > word.len() {
        return None;
    }
    let split = word.len() - suffix.len();
    (word[split..] == suffix[..]).then(|| word[..split].to_vec())
}
