// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Bipartition types for integer ranges.
//!
//! This module contains the data model of the search:
//! - Range: the contiguous integers being partitioned
//! - Side: which half a value belongs to
//! - Label: bitset of sides, one per range position
//! - Split: the two integer subsets realized from a label

pub mod label;
pub mod range;
pub mod side;
pub mod split;

// Re-export for convenience
pub use label::{Label, MAX_LABEL_LENGTH};
pub use range::Range;
pub use side::Side;
pub use split::Split;
