// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search predicates.
//!
//! An evaluation is the program
//!
//! ```text
//! LabelPredicate -> OrientationPredicate -> RecordPredicate -> Fail | Suspend
//! ```
//!
//! # Organization
//!
//! - `label`: LabelPredicate choosing each generated label in order
//! - `orientation`: OrientationPredicate checking a label both ways round
//! - `record`: RecordPredicate appending the accepted entry to the results
//! - Built-in terminals: `FailPredicate` (exhaust every choice) and
//!   `SuspendPredicate` (stop at the first result)

pub mod label;
pub mod orientation;
pub mod record;

pub use label::LabelPredicate;
pub use orientation::OrientationPredicate;
pub use record::RecordPredicate;

use crate::context::EvaluationContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};

/// Built-in fail predicate (Prolog's `fail.`).
///
/// Always fails, forcing the engine to backtrack into every remaining choice.
#[derive(Debug)]
pub struct FailPredicate;

impl Predicate for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut EvaluationContext, _round: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn retry_pred(
        &mut self,
        _ctx: &mut EvaluationContext,
        _round: usize,
        _choice: usize,
    ) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

impl TerminalPredicate for FailPredicate {}

/// Built-in suspend predicate.
///
/// Hands the engine back to the caller the first time it is reached.
#[derive(Debug)]
pub struct SuspendPredicate;

impl Predicate for SuspendPredicate {
    fn try_pred(&mut self, _ctx: &mut EvaluationContext, _round: usize) -> PredicateResult {
        PredicateResult::Suspend
    }

    fn name(&self) -> &str {
        "Suspend"
    }
}

impl TerminalPredicate for SuspendPredicate {}
