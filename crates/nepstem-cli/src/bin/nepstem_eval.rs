// nepstem-eval: score stemmer output against a gold-standard list.
//
// Compares two line-oriented files (gold stems and produced stems)
// aligned by line index, and optionally the original input words for
// length-reduction statistics. Missing files are reported and treated
// as empty, so the run always produces a report.
//
// Usage:
//   nepstem-eval ANSWER_FILE OUTPUT_FILE [INPUT_FILE] [--json]
//
// Options:
//   --json       Print the report as JSON instead of the summary text
//   -h, --help   Print help

use nepstem_core::metrics::{EvalReport, compute_metrics};

fn main() {
    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let json = nepstem_cli::take_flag(&mut args, "--json");

    if nepstem_cli::wants_help(&args) || args.len() < 2 || args.len() > 3 {
        println!("nepstem-eval: score stemmer output against a gold-standard list.");
        println!();
        println!("Usage: nepstem-eval ANSWER_FILE OUTPUT_FILE [INPUT_FILE] [--json]");
        println!();
        println!("Options:");
        println!("  --json       Print the report as JSON");
        println!("  -h, --help   Print this help");
        if nepstem_cli::wants_help(&args) {
            return;
        }
        std::process::exit(2);
    }

    let answers = nepstem_cli::load_lines(&args[0]);
    let outputs = nepstem_cli::load_lines(&args[1]);
    let inputs = args.get(2).map(|path| nepstem_cli::load_lines(path));

    let report = compute_metrics(&answers, &outputs, inputs.as_deref());

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(s) => println!("{s}"),
            Err(e) => nepstem_cli::fatal(&format!("could not serialize report: {e}")),
        }
    } else {
        print_report(&report);
    }
}

fn print_report(report: &EvalReport) {
    println!();
    println!("Results Summary");
    println!("===============");
    println!("Total lines compared: {}", report.total);
    println!("Exact matches: {}", report.exact_matches);
    println!("Exact match accuracy: {:.2}%", report.exact_accuracy);
    println!("Average edit distance accuracy: {:.2}%", report.edit_accuracy);
    println!("Precision: {:.4}", report.precision);
    println!("Recall: {:.4}", report.recall);
    println!("F-measure: {:.4}", report.f_measure);

    if let Some(reduction) = &report.reduction {
        println!("Average gold reduction ratio: {:.2}%", reduction.gold);
        println!("Average produced reduction ratio: {:.2}%", reduction.produced);
        println!("Reduction ratio difference: {:.2}%", reduction.difference);
    }
}
