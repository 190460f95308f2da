// Boundary-phonology correction applied after suffix removal.
//
// Suffixation can geminate the stem-final consonant; stripping the
// suffix then leaves a doubled character that was not part of the
// root. The single correction here undoes that doubling.

/// Consonants whose geminates are legitimate stem-final clusters
/// (written त्त, द्द, न्न) and must not be reduced.
const GEMINATE_KEEP: &[char] = &['त', 'द', 'न'];

/// Reduce a doubled final character unless the doubled consonant is
/// one of the [`GEMINATE_KEEP`] set. Returns the corrected stem.
pub fn correct(stem: &[char]) -> Vec<char> {
    if stem.len() >= 2 {
        let last = stem[stem.len() - 1];
        if last == stem[stem.len() - 2] && !GEMINATE_KEEP.contains(&last) {
            return stem[..stem.len() - 1].to_vec();
        }
    }
    stem.to_vec()
}
