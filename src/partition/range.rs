// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Contiguous integer range `[start, start + 1, ..., end]`.

use crate::error::{Error, Result};
use crate::partition::label::MAX_LABEL_LENGTH;
use crate::partition::{Label, Side, Split};
use serde::Serialize;
use std::fmt;

/// A validated, immutable range of consecutive positive integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Range {
    start: i64,
    end: i64,
}

impl Range {
    /// Create the range `[start..=end]`.
    ///
    /// # Errors
    ///
    /// - [`Error::NonPositiveBound`] if either bound is not positive
    /// - [`Error::InvalidRange`] if `end < start`
    /// - [`Error::RangeTooLong`] if the range has more values than a label can hold
    pub fn new(start: i64, end: i64) -> Result<Self> {
        for value in [start, end] {
            if value <= 0 {
                return Err(Error::NonPositiveBound { value });
            }
        }
        if end < start {
            return Err(Error::InvalidRange { start, end });
        }
        let length = (end - start) as u64 + 1;
        if length > MAX_LABEL_LENGTH as u64 {
            return Err(Error::RangeTooLong {
                length,
                max: MAX_LABEL_LENGTH,
            });
        }
        Ok(Self { start, end })
    }

    pub fn start(self) -> i64 {
        self.start
    }

    pub fn end(self) -> i64 {
        self.end
    }

    /// Number of values in the range (never zero).
    pub fn len(self) -> usize {
        (self.end - self.start) as usize + 1
    }

    /// Always false: a validated range holds at least one value.
    pub fn is_empty(self) -> bool {
        false
    }

    /// Value at the given position.
    pub fn value(self, position: usize) -> i64 {
        self.start + position as i64
    }

    /// Iterate over the values in ascending order.
    pub fn values(self) -> impl Iterator<Item = i64> {
        self.start..=self.end
    }

    /// Split the range into its two sides according to a label.
    ///
    /// Range order is preserved within each side.
    ///
    /// # Panics
    ///
    /// Panics if the label length differs from the range length.
    pub fn split(self, label: Label) -> Split {
        assert_eq!(
            label.len(),
            self.len(),
            "Label length {} does not match range length {}",
            label.len(),
            self.len()
        );
        let mut ones = Vec::with_capacity(label.count(Side::One));
        let mut zeros = Vec::with_capacity(label.count(Side::Zero));
        for (value, side) in self.values().zip(label.iter()) {
            match side {
                Side::One => ones.push(value),
                Side::Zero => zeros.push(value),
            }
        }
        Split::new(ones, zeros)
    }
}

impl fmt::Display for Range {
    /// Format a range as "[1 2 3 4]".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for value in self.values() {
            if value > self.start {
                write!(f, " ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}
