// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Non-deterministic search engine.
//!
//! This module implements a backtracking search engine that runs predicates
//! in sequence.
//!
//! # Architecture
//!
//! The engine maintains a stack of predicate execution states. Each stack entry tracks:
//! - Which predicate is executing
//! - Current round number (for predicates that execute multiple times)
//! - Choice mode state (whether we're trying alternatives)
//! - Current choice index (when in choice mode)
//!
//! Execution model:
//! 1. Call try_pred(round) on each predicate
//! 2. If Success: advance to next predicate
//! 3. If SuccessSamePredicate: increment round, stay at same predicate
//! 4. If Choices(n): enter choice mode, call retry_pred(round, 0..n-1)
//! 5. If Failure: backtrack to previous stack entry
//! 6. If Suspend: pause and return control to caller
//!
//! # Example
//!
//! ```
//! use ap_partitions::config::ProgressionLengths;
//! use ap_partitions::context::EvaluationContext;
//! use ap_partitions::engine::EngineBuilder;
//! use ap_partitions::partition::Range;
//! use ap_partitions::predicates::{LabelPredicate, SuspendPredicate};
//!
//! let range = Range::new(1, 4).unwrap();
//! let mut ctx = EvaluationContext::new(range, ProgressionLengths::uniform(3).unwrap());
//! let engine = EngineBuilder::new()
//!     .add(Box::new(LabelPredicate::new(range.len())))
//!     .terminal(Box::new(SuspendPredicate))
//!     .build();
//!
//! // Engine is consumed, returns Some(engine) if suspended
//! let engine = engine.search(&mut ctx);
//! assert!(engine.is_some());
//! assert!(ctx.current.is_some());
//! ```

pub mod predicate;

pub use predicate::{Predicate, PredicateResult, TerminalPredicate};

use crate::context::EvaluationContext;
use tracing::trace;

/// Expected maximum depth of the predicate stack.
const INITIAL_STACK_SIZE: usize = 16;

/// Stack entry tracking the state of one predicate execution.
#[derive(Debug)]
struct StackEntry {
    /// Index of the predicate in the predicates list.
    predicate_index: usize,

    /// Current round number (incremented by SuccessSamePredicate).
    round: usize,

    /// Whether try_pred has already run for this entry.
    called: bool,

    /// Whether we're in choice mode (exploring alternatives).
    in_choice_mode: bool,

    /// Current choice being tried (when in_choice_mode is true).
    current_choice: usize,

    /// Total number of choices (when in_choice_mode is true).
    num_choices: usize,
}

impl StackEntry {
    fn new(predicate_index: usize, round: usize) -> Self {
        Self {
            predicate_index,
            round,
            called: false,
            in_choice_mode: false,
            current_choice: 0,
            num_choices: 0,
        }
    }
}

/// Search engine that coordinates predicate execution and backtracking.
pub struct SearchEngine {
    /// List of predicates to execute in sequence.
    predicates: Vec<Box<dyn Predicate>>,

    /// Stack of predicate execution states.
    stack: Vec<StackEntry>,

    /// Statistics: number of try_pred calls.
    try_count: u64,

    /// Statistics: number of retry_pred calls (backtracks).
    retry_count: u64,
}

impl SearchEngine {
    /// Create a new search engine with the given predicates.
    ///
    /// Prefer [`EngineBuilder`], which requires a terminal predicate.
    pub fn new(predicates: Vec<Box<dyn Predicate>>) -> Self {
        Self {
            predicates,
            stack: Vec::with_capacity(INITIAL_STACK_SIZE),
            try_count: 0,
            retry_count: 0,
        }
    }

    /// Run the search.
    ///
    /// Consumes the engine and returns:
    /// - `Some(engine)` if suspended; call `resume()` to continue from the suspension point
    /// - `None` if exhausted (backtracked past first predicate)
    ///
    /// Results are delivered via side effects on `ctx`.
    ///
    /// # Panics
    ///
    /// Panics if the predicate sequence reaches its end without failing or
    /// suspending, or if retry_pred returns Choices or Suspend.
    pub fn search(mut self, ctx: &mut EvaluationContext) -> Option<Self> {
        self.stack.clear();
        self.try_count = 0;
        self.retry_count = 0;

        if self.predicates.is_empty() {
            return None;
        }

        self.stack.push(StackEntry::new(0, 0));
        self.run(ctx)
    }

    /// Continue a suspended search by backtracking into the suspending predicate.
    pub fn resume(mut self, ctx: &mut EvaluationContext) -> Option<Self> {
        self.stack.pop();
        self.run(ctx)
    }

    fn run(mut self, ctx: &mut EvaluationContext) -> Option<Self> {
        loop {
            let Some(entry) = self.stack.last_mut() else {
                return None; // Search exhausted
            };

            if !entry.in_choice_mode {
                if entry.called {
                    // Deterministic success earlier; nothing left to try here.
                    self.stack.pop();
                    continue;
                }
                entry.called = true;
                let pred_idx = entry.predicate_index;
                let round = entry.round;
                self.try_count += 1;
                let result = self.predicates[pred_idx].try_pred(ctx, round);
                trace!(
                    predicate = self.predicates[pred_idx].name(),
                    round,
                    ?result,
                    "try"
                );

                match result {
                    PredicateResult::Success => self.push_next_predicate(),
                    PredicateResult::SuccessSamePredicate => self.push_same_predicate(),
                    PredicateResult::Failure => {
                        self.stack.pop();
                    }
                    PredicateResult::Choices(n) => {
                        if let Some(entry) = self.stack.last_mut() {
                            entry.in_choice_mode = true;
                            entry.current_choice = 0;
                            entry.num_choices = n;
                        }
                    }
                    PredicateResult::Suspend => return Some(self),
                }
            } else {
                if entry.current_choice >= entry.num_choices {
                    self.stack.pop();
                    continue;
                }

                let pred_idx = entry.predicate_index;
                let round = entry.round;
                let choice = entry.current_choice;
                entry.current_choice += 1;
                self.retry_count += 1;
                let result = self.predicates[pred_idx].retry_pred(ctx, round, choice);

                match result {
                    PredicateResult::Success => self.push_next_predicate(),
                    PredicateResult::SuccessSamePredicate => self.push_same_predicate(),
                    PredicateResult::Failure => {
                        // Try next choice (loop continues)
                    }
                    PredicateResult::Choices(_) | PredicateResult::Suspend => {
                        panic!("retry_pred returned invalid result: {:?}", result);
                    }
                }
            }
        }
    }

    /// Push a new stack entry for the next predicate in sequence.
    fn push_next_predicate(&mut self) {
        let next_index = self.stack.last().map_or(0, |e| e.predicate_index + 1);

        if next_index >= self.predicates.len() {
            panic!(
                "Invalid predicate sequence: reached end without FAIL or SUSPEND. \
                 All programs must terminate with a FAIL or SUSPEND predicate."
            );
        }

        self.stack.push(StackEntry::new(next_index, 0));
    }

    /// Push a new stack entry for the same predicate with incremented round.
    fn push_same_predicate(&mut self) {
        if let Some(current) = self.stack.last() {
            let entry = StackEntry::new(current.predicate_index, current.round + 1);
            self.stack.push(entry);
        }
    }

    /// Returns (try_count, retry_count) showing how many times predicates
    /// were tried and retried.
    pub fn statistics(&self) -> (u64, u64) {
        (self.try_count, self.retry_count)
    }
}

/// Builder for a predicate sequence that must end with a terminal predicate.
#[derive(Default)]
pub struct EngineBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a predicate.
    pub fn add(mut self, predicate: Box<dyn Predicate>) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Append the terminal predicate, closing the sequence.
    pub fn terminal<T: TerminalPredicate + 'static>(mut self, predicate: Box<T>) -> TerminatedBuilder {
        self.predicates.push(predicate);
        TerminatedBuilder {
            predicates: self.predicates,
        }
    }
}

/// A predicate sequence closed by a terminal predicate.
pub struct TerminatedBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl TerminatedBuilder {
    pub fn build(self) -> SearchEngine {
        SearchEngine::new(self.predicates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProgressionLengths;
    use crate::partition::Range;
    use crate::predicates::{FailPredicate, SuspendPredicate};

    fn context() -> EvaluationContext {
        EvaluationContext::new(
            Range::new(1, 4).unwrap(),
            ProgressionLengths::uniform(3).unwrap(),
        )
    }

    /// Test predicate that always succeeds.
    #[derive(Debug)]
    struct AlwaysSucceed;

    impl Predicate for AlwaysSucceed {
        fn try_pred(&mut self, _ctx: &mut EvaluationContext, _round: usize) -> PredicateResult {
            PredicateResult::Success
        }
    }

    /// Test predicate offering `n` choices, counting retries.
    #[derive(Debug)]
    struct Choose(usize);

    impl Predicate for Choose {
        fn try_pred(&mut self, _ctx: &mut EvaluationContext, _round: usize) -> PredicateResult {
            PredicateResult::Choices(self.0)
        }

        fn retry_pred(&mut self, _ctx: &mut EvaluationContext, _round: usize, _choice: usize) -> PredicateResult {
            PredicateResult::Success
        }
    }

    /// Test predicate that runs three rounds.
    #[derive(Debug)]
    struct ThreeRounds;

    impl Predicate for ThreeRounds {
        fn try_pred(&mut self, _ctx: &mut EvaluationContext, round: usize) -> PredicateResult {
            if round < 2 {
                PredicateResult::SuccessSamePredicate
            } else {
                PredicateResult::Success
            }
        }
    }

    #[test]
    fn test_simple_success_with_suspend() {
        let mut ctx = context();
        let engine = EngineBuilder::new()
            .add(Box::new(AlwaysSucceed))
            .terminal(Box::new(SuspendPredicate))
            .build();

        let engine = engine.search(&mut ctx).unwrap();
        assert_eq!(engine.statistics(), (2, 0));
    }

    #[test]
    fn test_immediate_failure() {
        let mut ctx = context();
        let engine = EngineBuilder::new().terminal(Box::new(FailPredicate)).build();
        assert!(engine.search(&mut ctx).is_none());
    }

    #[test]
    fn test_empty_predicates() {
        let mut ctx = context();
        assert!(SearchEngine::new(vec![]).search(&mut ctx).is_none());
    }

    #[test]
    fn test_deterministic_success_is_not_retried() {
        let mut ctx = context();
        let engine = SearchEngine::new(vec![
            Box::new(Choose(3)),
            Box::new(AlwaysSucceed),
            Box::new(FailPredicate),
        ]);
        // Runs to exhaustion instead of looping on AlwaysSucceed.
        assert!(engine.search(&mut ctx).is_none());
    }

    #[test]
    fn test_resume_visits_every_choice() {
        let mut ctx = context();
        let mut engine = EngineBuilder::new()
            .add(Box::new(Choose(3)))
            .terminal(Box::new(SuspendPredicate))
            .build()
            .search(&mut ctx);
        let mut suspensions = 0;
        while let Some(suspended) = engine {
            suspensions += 1;
            engine = suspended.resume(&mut ctx);
        }
        assert_eq!(suspensions, 3);
    }

    #[test]
    fn test_multi_round_predicate() {
        let mut ctx = context();
        let engine = EngineBuilder::new()
            .add(Box::new(ThreeRounds))
            .terminal(Box::new(SuspendPredicate))
            .build();
        let engine = engine.search(&mut ctx).unwrap();
        assert_eq!(engine.statistics(), (4, 0));
    }

    #[test]
    #[should_panic(expected = "Invalid predicate sequence")]
    fn test_invalid_program_without_terminal() {
        let mut ctx = context();
        let engine = SearchEngine::new(vec![Box::new(AlwaysSucceed)]);
        let _ = engine.search(&mut ctx);
    }
}
