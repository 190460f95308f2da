// nepstem-ne: rule-based suffix-stripping stemmer for Nepali.
//
// The engine removes inflectional and derivational suffixes (case
// markers, plural markers, verb endings, adjectival and nominal
// endings) from Devanagari words using a weighted, priority-ordered
// rule table, a gemination correction at the morpheme boundary, and a
// validation filter that guards against over-stemming.

pub mod rules;
pub mod sandhi;
pub mod stemmer;
pub mod validate;

pub use rules::{RuleError, Suffix, SuffixTable};
pub use stemmer::{NepaliStemmer, StemResult};
