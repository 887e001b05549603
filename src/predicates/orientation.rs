// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! OrientationPredicate - checks the selected label in both orientations.
//!
//! Choice 0 checks side `1` against `p` and side `0` against `q`, accepting the
//! label itself. Choice 1 checks side `1` against `q` and side `0` against `p`,
//! accepting the complement of the label. Together the two choices cover every
//! label the generator leaves out.

use crate::context::EvaluationContext;
use crate::engine::{Predicate, PredicateResult};
use crate::partition::Side;
use crate::progression::find_progression;
use crate::state::{Counters, Orientation, ResultEntry};
use tracing::trace;

#[derive(Debug)]
pub struct OrientationPredicate;

impl Predicate for OrientationPredicate {
    fn try_pred(&mut self, ctx: &mut EvaluationContext, _round: usize) -> PredicateResult {
        if ctx.current.is_none() {
            return PredicateResult::Failure;
        }
        PredicateResult::Choices(Orientation::ALL.len())
    }

    fn retry_pred(&mut self, ctx: &mut EvaluationContext, _round: usize, choice: usize) -> PredicateResult {
        let Some(&orientation) = Orientation::ALL.get(choice) else {
            return PredicateResult::Failure;
        };
        let Some(candidate) = ctx.current.as_ref() else {
            return PredicateResult::Failure;
        };
        ctx.statistics.increment_counter(Counters::OrientationsChecked);

        let (one_length, zero_length) = match orientation {
            Orientation::Original => (ctx.lengths.p(), ctx.lengths.q()),
            Orientation::Inverted => (ctx.lengths.q(), ctx.lengths.p()),
        };
        let ones = candidate.split.side(Side::One);
        let zeros = candidate.split.side(Side::Zero);
        let witness = find_progression(ones, one_length).or_else(|| find_progression(zeros, zero_length));
        if let Some(progression) = witness {
            trace!(label = %candidate.label, ?orientation, %progression, "rejected");
            ctx.statistics.increment_counter(Counters::OrientationsRejected);
            return PredicateResult::Failure;
        }

        let split = match orientation {
            Orientation::Original => candidate.split.clone(),
            Orientation::Inverted => candidate.split.swapped(),
        };
        ctx.accepted = Some(ResultEntry {
            label: orientation.apply(candidate.label),
            orientation,
            split,
        });
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Orientation"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProgressionLengths;
    use crate::partition::Range;

    fn selected(p: usize, q: usize, label: &str) -> EvaluationContext {
        let range = Range::new(1, label.len() as i64).unwrap();
        let mut ctx = EvaluationContext::new(range, ProgressionLengths::new(p, q).unwrap());
        ctx.select(label.parse().unwrap());
        ctx
    }

    #[test]
    fn test_fails_without_selection() {
        let range = Range::new(1, 4).unwrap();
        let mut ctx = EvaluationContext::new(range, ProgressionLengths::uniform(3).unwrap());
        assert_eq!(OrientationPredicate.try_pred(&mut ctx, 0), PredicateResult::Failure);
    }

    #[test]
    fn test_original_accepts_label() {
        let mut ctx = selected(6, 5, "0110");
        assert_eq!(OrientationPredicate.try_pred(&mut ctx, 0), PredicateResult::Choices(2));
        assert_eq!(OrientationPredicate.retry_pred(&mut ctx, 0, 0), PredicateResult::Success);
        let entry = ctx.accepted.as_ref().unwrap();
        assert_eq!(entry.label.to_string(), "[0 1 1 0]");
        assert_eq!(entry.split.side(Side::One), &[2, 3]);
    }

    #[test]
    fn test_inverted_accepts_complement_with_swapped_split() {
        let mut ctx = selected(6, 5, "0110");
        assert_eq!(OrientationPredicate.retry_pred(&mut ctx, 0, 1), PredicateResult::Success);
        let entry = ctx.accepted.as_ref().unwrap();
        assert_eq!(entry.orientation, Orientation::Inverted);
        assert_eq!(entry.label.to_string(), "[1 0 0 1]");
        assert_eq!(entry.split.side(Side::One), &[1, 4]);
        assert_eq!(entry.split.side(Side::Zero), &[2, 3]);
    }

    #[test]
    fn test_lengths_swap_between_orientations() {
        // Side 1 of 1110111 is {1,2,3,5,6,7}, side 0 is {4}.
        // p = 3 finds 1,2,3 on side 1; q = 7 is too long for either side.
        let mut ctx = selected(3, 7, "1110111");
        assert_eq!(OrientationPredicate.retry_pred(&mut ctx, 0, 0), PredicateResult::Failure);
        // Inverted: side 1 against q = 7 (too short), side 0 against p = 3 (single value).
        assert_eq!(OrientationPredicate.retry_pred(&mut ctx, 0, 1), PredicateResult::Success);
        assert_eq!(ctx.statistics.get(Counters::OrientationsChecked), 2);
        assert_eq!(ctx.statistics.get(Counters::OrientationsRejected), 1);
    }
}
