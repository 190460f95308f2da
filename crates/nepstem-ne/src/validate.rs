// Stem acceptance policy.
//
// A candidate produced by suffix stripping is only accepted when it is
// still recognizably the same word: long enough on its own, close
// enough to the original in edit distance, and retaining enough of the
// original's length. Any failed criterion rejects the candidate; the
// engine then falls back to other suffixes or to the unmodified word.

use nepstem_core::distance::levenshtein;

/// Minimum stem length in chars.
pub const MIN_STEM_LENGTH: usize = 2;

/// Maximum edit distance between original and stem, as a fraction of
/// the original's length.
pub const EDIT_DISTANCE_THRESHOLD: f64 = 0.4;

/// The stem must retain at least this fraction of the original length.
pub const MIN_LENGTH_RATIO: f64 = 0.3;

/// Largest acceptable edit distance for a word of `original_len`
/// chars. Rounded to the nearest integer so that stripping a
/// two-char case marker from a four-char word (e.g. घरको → घर)
/// stays acceptable.
pub fn max_edit_distance(original_len: usize) -> usize {
    (original_len as f64 * EDIT_DISTANCE_THRESHOLD).round() as usize
}

/// Accept or reject a candidate stem for `original`. Both slices are
/// normalized char sequences.
pub fn is_valid(original: &[char], candidate: &[char]) -> bool {
    if candidate.len() < MIN_STEM_LENGTH {
        return false;
    }
    if levenshtein(original, candidate) > max_edit_distance(original.len()) {
        return false;
    }
    if (candidate.len() as f64) < original.len() as f64 * MIN_LENGTH_RATIO {
        return false;
    }
    true
}
