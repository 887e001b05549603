// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The two integer subsets realized from a range and a label.

use crate::partition::Side;
use serde::Serialize;

/// Values of a range divided between side `1` and side `0`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Split {
    ones: Vec<i64>,
    zeros: Vec<i64>,
}

impl Split {
    pub fn new(ones: Vec<i64>, zeros: Vec<i64>) -> Self {
        Self { ones, zeros }
    }

    /// Values on the given side, in range order.
    pub fn side(&self, side: Side) -> &[i64] {
        match side {
            Side::One => &self.ones,
            Side::Zero => &self.zeros,
        }
    }

    /// The same split with the sides exchanged.
    pub fn swapped(&self) -> Self {
        Self {
            ones: self.zeros.clone(),
            zeros: self.ones.clone(),
        }
    }
}
