// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! RecordPredicate - appends the accepted entry to the result set.

use crate::context::EvaluationContext;
use crate::engine::{Predicate, PredicateResult};
use tracing::debug;

#[derive(Debug)]
pub struct RecordPredicate;

impl Predicate for RecordPredicate {
    fn try_pred(&mut self, ctx: &mut EvaluationContext, _round: usize) -> PredicateResult {
        let Some(entry) = ctx.accepted.take() else {
            return PredicateResult::Failure;
        };
        debug!(label = %entry.label, orientation = ?entry.orientation, "progression-free partition");
        ctx.results.push(entry);
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Record"
    }
}
