// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search for bipartitions of an integer range without arithmetic progressions.
//!
//! For a range `[n, n + 1, ..., k]` and progression lengths `p` and `q`, the
//! search reports every partition of the range into two sides where side `1`
//! holds no arithmetic progression of length `p` and side `0` holds none of
//! length `q`.
//!
//! # Architecture
//!
//! - [`symmetry`]: generates the mirror-symmetric labels, one per
//!   complementary pair
//! - [`progression`]: decides whether a subset contains a progression of a
//!   given length
//! - [`evaluator`]: realizes each label over the range and checks it in both
//!   orientations, collecting the qualifying partitions
//!
//! The evaluator is a small program for the backtracking [`engine`]: a label
//! predicate offers one choice per generated label, an orientation predicate
//! offers the original and the inverted check, and a terminal predicate either
//! fails (exhaustive mode) or suspends (first-match mode).
//!
//! # Example
//!
//! ```
//! use ap_partitions::{evaluate, Mode, ProgressionLengths, Range};
//!
//! let results = evaluate(
//!     Range::new(1, 8).unwrap(),
//!     ProgressionLengths::uniform(3).unwrap(),
//!     Mode::FirstMatch,
//! );
//! assert_eq!(results.len(), 1);
//! ```

pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod evaluator;
pub mod partition;
pub mod predicates;
pub mod progression;
pub mod report;
pub mod state;
pub mod symmetry;

// Re-export commonly used types
pub use config::{EvaluationConfig, Mode, ProgressionLengths};
pub use error::{Error, Result};
pub use evaluator::{evaluate, EvaluatorState, PartitionEvaluator};
pub use partition::{Label, Range, Side, Split};
pub use progression::{contains_progression, find_progression, Progression, ProgressionChecker};
pub use report::Report;
pub use state::{Orientation, ResultEntry, ResultSet, Statistics};
pub use symmetry::PartitionGenerator;
