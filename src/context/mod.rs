// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Evaluation context shared by the predicates of one run.
//!
//! The context combines:
//! - Fixed inputs: the range and the progression lengths
//! - Per-label scratch state: the label currently being examined and the
//!   entry waiting to be recorded
//! - Accumulated output: the result set and statistics
//!
//! Scratch fields are overwritten by each choice, so backtracking needs no
//! restoration; the result set only ever grows.

use crate::config::{EvaluationConfig, ProgressionLengths};
use crate::partition::{Label, Range, Split};
use crate::state::{ResultEntry, ResultSet, Statistics};

/// A generated label together with the range split it induces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub label: Label,
    pub split: Split,
}

/// State passed to every predicate during an evaluation.
#[derive(Debug)]
pub struct EvaluationContext {
    pub range: Range,
    pub lengths: ProgressionLengths,
    /// Label chosen by the label predicate.
    pub current: Option<Candidate>,
    /// Entry accepted by the orientation predicate, not yet recorded.
    pub accepted: Option<ResultEntry>,
    pub results: ResultSet,
    pub statistics: Statistics,
}

impl EvaluationContext {
    pub fn new(range: Range, lengths: ProgressionLengths) -> Self {
        Self {
            range,
            lengths,
            current: None,
            accepted: None,
            results: ResultSet::new(),
            statistics: Statistics::new(),
        }
    }

    pub fn from_config(config: &EvaluationConfig) -> Self {
        Self::new(config.range, config.lengths)
    }

    /// Select a label, realizing its split over the range.
    pub fn select(&mut self, label: Label) {
        let split = self.range.split(label);
        self.current = Some(Candidate { label, split });
        self.accepted = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_realizes_split() {
        let range = Range::new(1, 4).unwrap();
        let mut ctx = EvaluationContext::new(range, ProgressionLengths::uniform(3).unwrap());
        assert!(ctx.current.is_none());

        ctx.select("0110".parse().unwrap());
        let candidate = ctx.current.as_ref().unwrap();
        assert_eq!(candidate.split, Split::new(vec![2, 3], vec![1, 4]));
        assert!(ctx.results.is_empty());
    }
}
