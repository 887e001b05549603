// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Partition evaluation.
//!
//! The evaluator runs the search program
//!
//! ```text
//! Label -> Orientation -> Record -> Count -> Fail      (exhaustive)
//! Label -> Orientation -> Record -> Count -> Suspend   (first match)
//! ```
//!
//! Every generated label is selected in order; for each, the orientation
//! predicate tries the original check and then the inverted one, and each
//! success is recorded. Failing at the end makes the engine backtrack into
//! the next orientation and then the next label, so the result set ends up in
//! discovery order. Suspending instead stops the run after the first recorded
//! entry, which is why first-match mode never returns two entries even when
//! one label qualifies both ways round.
//!
//! # Example
//!
//! ```
//! use ap_partitions::config::{EvaluationConfig, Mode};
//! use ap_partitions::evaluator::PartitionEvaluator;
//!
//! let config = EvaluationConfig::new(1, 4, 6, 5, Mode::Exhaustive).unwrap();
//! let mut evaluator = PartitionEvaluator::new(config);
//! let results = evaluator.evaluate().unwrap();
//!
//! let labels: Vec<String> = results.iter().map(|e| e.label.to_string()).collect();
//! assert_eq!(labels, ["[0 0 0 0]", "[1 1 1 1]", "[0 1 1 0]", "[1 0 0 1]"]);
//! ```

use crate::config::{EvaluationConfig, Mode, ProgressionLengths};
use crate::context::EvaluationContext;
use crate::engine::{EngineBuilder, SearchEngine};
use crate::error::{Error, Result};
use crate::partition::Range;
use crate::predicates::{
    FailPredicate, LabelPredicate, OrientationPredicate, RecordPredicate, SuspendPredicate,
};
use crate::state::{Counters, ResultSet, Statistics};
use tracing::info;

/// Lifecycle of a [`PartitionEvaluator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluatorState {
    /// Created, not yet run.
    Ready,
    /// Search in progress.
    Scanning,
    /// Finished; holds the final result set.
    Done(ResultSet),
}

/// Runs one evaluation; a new evaluator is needed to evaluate again.
#[derive(Debug)]
pub struct PartitionEvaluator {
    config: EvaluationConfig,
    state: EvaluatorState,
    statistics: Statistics,
}

impl PartitionEvaluator {
    pub fn new(config: EvaluationConfig) -> Self {
        Self {
            config,
            state: EvaluatorState::Ready,
            statistics: Statistics::new(),
        }
    }

    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    pub fn state(&self) -> &EvaluatorState {
        &self.state
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// The final result set, once evaluation is done.
    pub fn results(&self) -> Option<&ResultSet> {
        match &self.state {
            EvaluatorState::Done(results) => Some(results),
            _ => None,
        }
    }

    /// Search every canonical label and collect the progression-free partitions.
    ///
    /// # Errors
    ///
    /// [`Error::AlreadyEvaluated`] if this evaluator has already run.
    pub fn evaluate(&mut self) -> Result<&ResultSet> {
        if self.state != EvaluatorState::Ready {
            return Err(Error::AlreadyEvaluated);
        }
        self.state = EvaluatorState::Scanning;
        let (results, statistics) = run(&self.config);
        self.statistics = statistics;
        self.state = EvaluatorState::Done(results);
        match &self.state {
            EvaluatorState::Done(results) => Ok(results),
            _ => unreachable!("evaluator state was just set to Done"),
        }
    }
}

/// Run one evaluation and return its results.
pub fn evaluate(range: Range, lengths: ProgressionLengths, mode: Mode) -> ResultSet {
    run(&EvaluationConfig { range, lengths, mode }).0
}

fn program(config: &EvaluationConfig) -> SearchEngine {
    let builder = EngineBuilder::new()
        .add(Box::new(LabelPredicate::new(config.range.len())))
        .add(Box::new(OrientationPredicate))
        .add(Box::new(RecordPredicate))
        .add(Statistics::counting_predicate(Counters::PartitionsRecorded, None));
    match config.mode {
        Mode::Exhaustive => builder.terminal(Box::new(FailPredicate)).build(),
        Mode::FirstMatch => builder.terminal(Box::new(SuspendPredicate)).build(),
    }
}

fn run(config: &EvaluationConfig) -> (ResultSet, Statistics) {
    info!(
        range = %config.range,
        p = config.lengths.p(),
        q = config.lengths.q(),
        mode = %config.mode,
        "evaluating partitions"
    );
    let mut ctx = EvaluationContext::from_config(config);
    // A suspended engine means first-match mode found its entry; drop it.
    if let Some(engine) = program(config).search(&mut ctx) {
        let (tries, retries) = engine.statistics();
        info!(tries, retries, "stopped at first match");
    }
    info!(
        found = ctx.results.len(),
        statistics = %ctx.statistics,
        "evaluation finished"
    );
    (ctx.results, ctx.statistics)
}
