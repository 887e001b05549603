// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use ap_partitions::{evaluate, Mode, ProgressionLengths, Range, ResultSet};

/// Evaluate `[start..=end]` with the given lengths, panicking on invalid input.
pub fn run(start: i64, end: i64, p: usize, q: usize, mode: Mode) -> ResultSet {
    evaluate(
        Range::new(start, end).unwrap(),
        ProgressionLengths::new(p, q).unwrap(),
        mode,
    )
}

/// Reported labels as plain symbol strings, e.g. "0110".
pub fn labels(results: &ResultSet) -> Vec<String> {
    results
        .iter()
        .map(|entry| entry.label.iter().map(|side| side.to_char()).collect())
        .collect()
}
