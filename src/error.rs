// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for input validation.
//!
//! The search itself cannot fail once its inputs are constructed; every
//! variant here is raised by a constructor or by misuse of an evaluator.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid range: end {end} is less than start {start}")]
    InvalidRange { start: i64, end: i64 },
    #[error("Range bounds must be greater than 0, got {value}")]
    NonPositiveBound { value: i64 },
    #[error("Progression length must be greater than 0, got {length}")]
    InvalidProgressionLength { length: usize },
    #[error("Range has {length} values, at most {max} are supported")]
    RangeTooLong { length: u64, max: usize },
    #[error("Invalid label: {0:?}")]
    InvalidLabel(String),
    #[error("Evaluator has already run; create a new one to evaluate again")]
    AlreadyEvaluated,
}

pub type Result<T> = std::result::Result<T, Error>;
