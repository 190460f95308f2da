// nepstem-core: shared pure utilities for Nepali stemming.
//
// Everything in this crate is deterministic and free of I/O: character
// classification and normalization for Devanagari text, Levenshtein
// distance, and the evaluation metrics computed over already-loaded
// line lists. File handling and reporting live in the CLI crate.

pub mod devanagari;
pub mod distance;
pub mod metrics;
