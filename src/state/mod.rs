// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable evaluation state.
//!
//! - ResultSet: qualifying partitions, append-only during a run
//! - Statistics: counters updated by the predicates

pub mod results;
pub mod statistics;

pub use results::{Orientation, ResultEntry, ResultSet};
pub use statistics::{Counters, Statistics};
