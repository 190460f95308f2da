// nepstem-stem: stem Nepali words from stdin, one per line.
//
// By default each line produces one stemmed word on stdout, so the
// tool pipes into the evaluator (stems to one file, gold answers in
// another). `--info` prints an aligned diagnostic table instead, and
// `--json` emits one JSON record per word.
//
// Usage:
//   nepstem-stem [--info | --json] [--no-validate]
//
// Options:
//   --info         Print original, stem, and removed suffix per word
//   --json         Print one JSON diagnostic record per word
//   --no-validate  Take the first suffix match without validation
//   -h, --help     Print help

use std::io::{self, BufRead, Write};

use nepstem_ne::NepaliStemmer;

fn main() {
    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let info = nepstem_cli::take_flag(&mut args, "--info");
    let json = nepstem_cli::take_flag(&mut args, "--json");
    let no_validate = nepstem_cli::take_flag(&mut args, "--no-validate");

    if nepstem_cli::wants_help(&args) {
        println!("nepstem-stem: stem Nepali words from stdin, one per line.");
        println!();
        println!("Usage: nepstem-stem [--info | --json] [--no-validate]");
        println!();
        println!("Options:");
        println!("  --info         Print original, stem, and removed suffix per word");
        println!("  --json         Print one JSON diagnostic record per word");
        println!("  --no-validate  Take the first suffix match without validation");
        println!("  -h, --help     Print this help");
        return;
    }
    if let Some(unknown) = args.first() {
        nepstem_cli::fatal(&format!("unknown argument {unknown:?}"));
    }

    let stemmer = NepaliStemmer::new().unwrap_or_else(|e| nepstem_cli::fatal(&e.to_string()));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if info {
        let _ = writeln!(out, "{:<25} {:<20} {:<15}", "Original", "Stem", "Suffix removed");
        let _ = writeln!(out, "{}", "-".repeat(62));
    }

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let word = line.trim();
        if word.is_empty() {
            continue;
        }

        if json {
            let record = stemmer.suffix_info(word);
            match serde_json::to_string(&record) {
                Ok(s) => {
                    let _ = writeln!(out, "{s}");
                }
                Err(e) => eprintln!("error serializing record for {word:?}: {e}"),
            }
        } else if info {
            let record = stemmer.suffix_info(word);
            let _ = writeln!(
                out,
                "{:<25} {:<20} {:<15}",
                record.normalized, record.stem, record.suffix_removed
            );
        } else {
            let stem = if no_validate {
                stemmer.stem_unvalidated(word)
            } else {
                stemmer.stem(word)
            };
            let _ = writeln!(out, "{stem}");
        }
    }
}
