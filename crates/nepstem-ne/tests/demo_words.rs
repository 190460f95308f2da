// Table test over a demonstration vocabulary of inflected Nepali
// words, checking the exact stem for each and the engine-wide
// properties (non-expansion, stopword and short-word identity).

use nepstem_core::devanagari;
use nepstem_ne::NepaliStemmer;

/// (word, expected stem) pairs. Words the validator refuses to stem
/// expect themselves back.
const EXPECTED: &[(&str, &str)] = &[
    ("किताबहरू", "किताब"),
    ("किताबलाई", "किताब"),
    ("किताबको", "किताब"),
    ("किताबबाट", "किताब"),
    ("घरको", "घर"),
    // distance to घर exceeds the threshold for a five-char word
    ("घरहरू", "घरहरू"),
    ("लेख्यो", "लेख्"),
    ("लेख्छु", "लेख्"),
    ("बोल्दै", "बोल्दै"),
    ("बोल्नेछ", "बोल्ने"),
    ("खानेछ", "खाने"),
    ("हिँड्नेछ", "हिँड्ने"),
    ("सफलता", "सफल"),
    ("गरिबी", "गरिबी"),
    ("विद्यार्थीहरू", "विद्यार्थी"),
    ("विद्यार्थीलाई", "विद्यार्थी"),
    ("नेपाललाई", "नेपाल"),
    ("फूलको", "फूल"),
    ("कालेले", "काले"),
    ("सुन्दरता", "सुन्दर"),
    ("साहसिकता", "साहसिक"),
    ("शिक्षकको", "शिक्षक"),
    ("किसानको", "किसान"),
    ("लेखकको", "लेखक"),
    ("पढिरहेको", "पढिरहे"),
    ("मिठास", "मिठास"),
    ("सेवक", "सेवक"),
    ("मान्छेहरू", "मान्छे"),
    ("मान्छेको", "मान्छे"),
    ("राष्ट्रमा", "राष्ट्र"),
    ("सम्पदाको", "सम्पदा"),
    ("सम्पदाहरू", "सम्पदा"),
    ("तिमी", "तिमी"),
    ("लिँदै", "लिँदै"),
    ("गारेकी", "गारे"),
    ("रोएको", "रोए"),
    ("गर्यो", "गर्"),
    ("गुलियो", "गुलि"),
    ("गर्नेछ", "गर्ने"),
    ("चिप्लनु", "चिप्ल"),
    ("बहिनीलाई", "बहिनी"),
    ("केटीकी", "केटी"),
    ("सेविकाकी", "सेविका"),
];

#[test]
fn demo_vocabulary_stems() {
    let stemmer = NepaliStemmer::new().expect("shipped tables build");
    for &(word, expected) in EXPECTED {
        assert_eq!(stemmer.stem(word), expected, "stem of {word:?}");
    }
}

#[test]
fn demo_vocabulary_never_expands() {
    let stemmer = NepaliStemmer::new().unwrap();
    for &(word, _) in EXPECTED {
        let stem = stemmer.stem(word);
        assert!(
            stem.chars().count() <= word.chars().count(),
            "stem of {word:?} grew to {stem:?}"
        );
    }
}

#[test]
fn demo_vocabulary_suffix_info_is_consistent() {
    let stemmer = NepaliStemmer::new().unwrap();
    for &(word, _) in EXPECTED {
        let info = stemmer.suffix_info(word);
        assert_eq!(info.stem, stemmer.stem(word), "info mismatch for {word:?}");
        assert_eq!(info.stem_length, info.stem.chars().count());
        assert_eq!(info.original_length, info.normalized.chars().count());
        // The removed text is the trailing slice beyond the stem.
        if info.suffix_removed.is_empty() {
            assert_eq!(info.stem, info.normalized);
        } else {
            let reassembled = format!("{}{}", info.stem, info.suffix_removed);
            // Holds whenever the stem is a prefix of the normalized
            // word, which is the case for plain suffix removal.
            if info.normalized.starts_with(&info.stem) {
                assert_eq!(reassembled, info.normalized);
            }
        }
    }
}

#[test]
fn second_pass_never_expands() {
    // A produced stem may still carry a listed ending (e.g. बोल्ने),
    // so a second pass can shorten it further, but never grow it.
    let stemmer = NepaliStemmer::new().unwrap();
    for &(_, expected) in EXPECTED {
        let restemmed = stemmer.stem(expected);
        assert!(
            restemmed.chars().count() <= expected.chars().count(),
            "second pass expanded {expected:?}"
        );
    }
}

#[test]
fn normalization_matches_engine_view() {
    let stemmer = NepaliStemmer::new().unwrap();
    for &(word, _) in EXPECTED {
        let info = stemmer.suffix_info(word);
        assert_eq!(info.normalized, devanagari::normalize(word));
    }
}
