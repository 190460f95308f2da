// Evaluation metrics for stemmer output against a gold-standard
// answer list.
//
// Pure computation over already-loaded line lists; reading the files
// (and the recoverable missing-file policy) is the CLI's concern.
// Lists are aligned by line index up to the shorter of the answer and
// output lists. Every ratio with a zero denominator is defined as 0
// rather than an error, so an empty evaluation produces an all-zero
// report.

use serde::Serialize;

use crate::distance::edit_distance_accuracy;

/// Mean length-reduction ratios, available only when the original
/// input words were supplied alongside the gold and produced stems.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReductionStats {
    /// Mean reduction from original word to gold stem, in percent.
    pub gold: f64,
    /// Mean reduction from original word to produced stem, in percent.
    pub produced: f64,
    /// Absolute difference between the two means, in percent.
    pub difference: f64,
}

/// Summary of a stemmer evaluation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvalReport {
    /// Number of line pairs compared (`min` of the two list lengths).
    pub total: usize,
    /// Lines where the produced stem equals the gold stem exactly.
    pub exact_matches: usize,
    /// Exact matches as a percentage of `total`.
    pub exact_accuracy: f64,
    /// Mean edit-distance accuracy as a percentage.
    pub edit_accuracy: f64,
    /// Exact match counts as one true positive; any mismatch counts as
    /// one false positive and one false negative, which makes
    /// precision and recall coincide here.
    pub precision: f64,
    pub recall: f64,
    pub f_measure: f64,
    /// Length-reduction statistics, when input words were provided.
    pub reduction: Option<ReductionStats>,
}

/// Compare gold stems with produced stems line by line.
///
/// `inputs`, when given, supplies the original inflected words and
/// enables the length-reduction statistics. Lists shorter than `total`
/// contribute empty strings for the missing positions.
pub fn compute_metrics(
    answers: &[String],
    outputs: &[String],
    inputs: Option<&[String]>,
) -> EvalReport {
    let total = answers.len().min(outputs.len());

    let mut exact_matches = 0usize;
    let mut edit_accuracy_sum = 0.0f64;
    let mut gold_reduction_sum = 0.0f64;
    let mut produced_reduction_sum = 0.0f64;

    for i in 0..total {
        let gold = answers[i].as_str();
        let produced = outputs[i].as_str();

        if gold == produced {
            exact_matches += 1;
        }
        edit_accuracy_sum += edit_distance_accuracy(gold, produced);

        if let Some(inputs) = inputs {
            let original = inputs.get(i).map(String::as_str).unwrap_or("");
            let original_len = original.chars().count();
            if original_len > 0 {
                gold_reduction_sum += reduction_percent(original_len, gold);
                produced_reduction_sum += reduction_percent(original_len, produced);
            }
        }
    }

    let mismatches = total - exact_matches;
    // true positives = exact matches; every mismatch is one false
    // positive and one false negative
    let precision = ratio(exact_matches, exact_matches + mismatches);
    let recall = ratio(exact_matches, exact_matches + mismatches);
    let f_measure = if precision + recall > 0.0 {
        2.0 * precision * recall / (precision + recall)
    } else {
        0.0
    };

    let reduction = inputs.map(|_| {
        let gold = mean_percent(gold_reduction_sum, total);
        let produced = mean_percent(produced_reduction_sum, total);
        ReductionStats {
            gold,
            produced,
            difference: (gold - produced).abs(),
        }
    });

    EvalReport {
        total,
        exact_matches,
        exact_accuracy: 100.0 * ratio(exact_matches, total),
        edit_accuracy: if total > 0 {
            100.0 * edit_accuracy_sum / total as f64
        } else {
            0.0
        },
        precision,
        recall,
        f_measure,
        reduction,
    }
}

/// Percentage of the original length removed to reach `stem`.
fn reduction_percent(original_len: usize, stem: &str) -> f64 {
    let stem_len = stem.chars().count();
    (original_len as f64 - stem_len as f64) / original_len as f64 * 100.0
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator > 0 {
        numerator as f64 / denominator as f64
    } else {
        0.0
    }
}

fn mean_percent(sum: f64, total: usize) -> f64 {
    if total > 0 { sum / total as f64 } else { 0.0 }
}
