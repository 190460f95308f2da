// nepstem-cli: shared utilities for the command-line tools.

use std::process;

/// Load trimmed, non-empty lines from a text file.
///
/// A missing or unreadable file is reported to stderr and treated as
/// empty data, so evaluation degrades to zeroed metrics instead of
/// aborting.
pub fn load_lines(path: &str) -> Vec<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect(),
        Err(e) => {
            eprintln!("error: could not read {path}: {e}");
            Vec::new()
        }
    }
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

/// Remove `flag` from `args`, reporting whether it was present.
pub fn take_flag(args: &mut Vec<String>, flag: &str) -> bool {
    let before = args.len();
    args.retain(|a| a != flag);
    args.len() != before
}
