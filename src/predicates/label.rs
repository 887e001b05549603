// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! LabelPredicate - chooses each canonical label in generation order.

use crate::context::EvaluationContext;
use crate::engine::{Predicate, PredicateResult};
use crate::state::Counters;
use crate::symmetry::PartitionGenerator;
use tracing::trace;

/// Offers one choice per generated label; choice i selects label i.
#[derive(Debug)]
pub struct LabelPredicate {
    generator: PartitionGenerator,
}

impl LabelPredicate {
    pub fn new(length: usize) -> Self {
        Self {
            generator: PartitionGenerator::new(length),
        }
    }
}

impl Predicate for LabelPredicate {
    fn try_pred(&mut self, _ctx: &mut EvaluationContext, _round: usize) -> PredicateResult {
        match usize::try_from(self.generator.count()) {
            Ok(0) => PredicateResult::Failure,
            Ok(n) => PredicateResult::Choices(n),
            Err(_) => PredicateResult::Choices(usize::MAX),
        }
    }

    fn retry_pred(&mut self, ctx: &mut EvaluationContext, _round: usize, choice: usize) -> PredicateResult {
        let index = choice as u64;
        if index >= self.generator.count() {
            return PredicateResult::Failure;
        }
        let label = self.generator.label(index);
        trace!(index, %label, "label");
        ctx.select(label);
        ctx.statistics.increment_counter(Counters::LabelsVisited);
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Label"
    }
}
