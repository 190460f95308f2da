// Levenshtein distance and the edit-distance accuracy derived from it.
//
// All lengths and positions are in Unicode scalar values, never bytes.
// Devanagari words routinely mix base consonants with combining signs,
// so byte-based distances would be meaningless here.

/// Minimum number of single-character insertions, deletions, or
/// substitutions needed to transform `a` into `b`.
///
/// Standard dynamic-programming formulation over two char sequences of
/// length m and n: `dp[i][0] = i`, `dp[0][j] = j`, and
/// `dp[i][j] = dp[i-1][j-1]` when the characters match, otherwise
/// `1 + min(delete, insert, substitute)`. Only two rows are kept live.
pub fn levenshtein(a: &[char], b: &[char]) -> usize {
    let (m, n) = (a.len(), b.len());
    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr: Vec<usize> = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            curr[j] = if a[i - 1] == b[j - 1] {
                prev[j - 1]
            } else {
                1 + prev[j - 1].min(prev[j]).min(curr[j - 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Convenience wrapper over [`levenshtein`] for `&str` inputs.
pub fn levenshtein_str(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    levenshtein(&a, &b)
}

/// Edit-distance accuracy between two strings:
/// `1 - distance / max(len(a), len(b))`.
///
/// Two empty strings compare as fully accurate (1.0); the denominator
/// is otherwise always positive.
pub fn edit_distance_accuracy(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let max_len = a.len().max(b.len());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - levenshtein(&a, &b) as f64 / max_len as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_identity() {
        assert_eq!(levenshtein_str("", ""), 0);
        assert_eq!(levenshtein_str("abc", "abc"), 0);
        assert_eq!(levenshtein_str("किताब", "किताब"), 0);
    }

    #[test]
    fn distance_against_empty() {
        assert_eq!(levenshtein_str("", "abc"), 3);
        assert_eq!(levenshtein_str("abc", ""), 3);
        // घर is two scalar values
        assert_eq!(levenshtein_str("घर", ""), 2);
    }

    #[test]
    fn distance_known_values() {
        assert_eq!(levenshtein_str("kitten", "sitting"), 3);
        assert_eq!(levenshtein_str("flaw", "lawn"), 2);
        assert_eq!(levenshtein_str("abc", "abd"), 1);
    }

    #[test]
    fn distance_counts_scalar_values() {
        // हरू is three scalar values: ह र ू
        assert_eq!(levenshtein_str("किताबहरू", "किताब"), 3);
        // को is two scalar values: क ो
        assert_eq!(levenshtein_str("घरको", "घर"), 2);
    }

    #[test]
    fn distance_symmetry() {
        for (a, b) in [
            ("kitten", "sitting"),
            ("घरको", "घर"),
            ("", "नेपाल"),
            ("किताबहरू", "किताबलाई"),
        ] {
            assert_eq!(levenshtein_str(a, b), levenshtein_str(b, a));
        }
    }

    #[test]
    fn distance_triangle_inequality() {
        let words = ["घर", "घरको", "घरहरू", "किताब", ""];
        for a in words {
            for b in words {
                for c in words {
                    assert!(
                        levenshtein_str(a, c)
                            <= levenshtein_str(a, b) + levenshtein_str(b, c),
                        "triangle violated for ({a}, {b}, {c})"
                    );
                }
            }
        }
    }

    #[test]
    fn accuracy_identical_strings() {
        assert_eq!(edit_distance_accuracy("किताब", "किताब"), 1.0);
        assert_eq!(edit_distance_accuracy("abc", "abc"), 1.0);
    }

    #[test]
    fn accuracy_both_empty_is_one() {
        assert_eq!(edit_distance_accuracy("", ""), 1.0);
    }

    #[test]
    fn accuracy_disjoint_strings_is_zero() {
        assert_eq!(edit_distance_accuracy("abc", "xyz"), 0.0);
    }

    #[test]
    fn accuracy_partial_overlap() {
        // distance 3, max length 8
        let acc = edit_distance_accuracy("किताबहरू", "किताब");
        assert!((acc - 0.625).abs() < 1e-9);
    }
}
