// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mirror enumeration of bipartition labels.
//!
//! Only mirror-symmetric labels are generated. For a label of length n:
//!
//! - the first `n / 2` positions hold a counter `i`, most significant bit first
//! - when n is odd the middle position is always side `1`
//! - the last `n / 2` positions repeat the first half in reverse
//!
//! The counter runs over `0..k` with `k = 2^(n/2) / 2` for even n and
//! `k = 2^((n-1)/2)` for odd n. Labels that are complements of earlier ones
//! are never produced; the evaluator covers them by checking each label in
//! both orientations.

use crate::partition::{Label, Side};

/// Generator of the canonical labels for one range length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartitionGenerator {
    length: usize,
}

impl PartitionGenerator {
    /// Create a generator for labels of the given length.
    ///
    /// # Panics
    ///
    /// Panics if `length` exceeds [`crate::partition::MAX_LABEL_LENGTH`].
    pub fn new(length: usize) -> Self {
        assert!(
            length <= crate::partition::MAX_LABEL_LENGTH,
            "Label length out of range: {}",
            length
        );
        Self { length }
    }

    /// Length of every generated label.
    pub fn length(self) -> usize {
        self.length
    }

    /// Width of the counter written into each half.
    pub fn half(self) -> usize {
        self.length / 2
    }

    fn is_odd(self) -> bool {
        self.length % 2 == 1
    }

    /// Number of labels generated.
    ///
    /// `2^(n/2 - 1)` for even n (zero when n is zero), `2^((n-1)/2)` for odd n.
    pub fn count(self) -> u64 {
        if self.is_odd() {
            1u64 << self.half()
        } else {
            ((1u128 << self.half()) / 2) as u64
        }
    }

    /// The label for counter value `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.count()`.
    pub fn label(self, index: u64) -> Label {
        assert!(index < self.count(), "Label index out of range: {}", index);
        let half = self.half();
        let mut label = Label::zeros(self.length);
        for position in 0..half {
            let side = Side::from_bit((index >> (half - 1 - position)) as u128);
            label.set(position, side);
            label.set(self.length - 1 - position, side);
        }
        if self.is_odd() {
            label.set(half, Side::One);
        }
        label
    }

    /// Iterate over all labels in counter order.
    ///
    /// Each call starts a fresh pass over the same sequence.
    pub fn iter(self) -> Labels {
        Labels {
            generator: self,
            next: 0,
            end: self.count(),
        }
    }
}

impl IntoIterator for PartitionGenerator {
    type Item = Label;
    type IntoIter = Labels;

    fn into_iter(self) -> Labels {
        self.iter()
    }
}

/// Lazy iterator over the labels of a [`PartitionGenerator`].
#[derive(Debug, Clone)]
pub struct Labels {
    generator: PartitionGenerator,
    next: u64,
    end: u64,
}

impl Iterator for Labels {
    type Item = Label;

    fn next(&mut self) -> Option<Label> {
        if self.next >= self.end {
            return None;
        }
        let label = self.generator.label(self.next);
        self.next += 1;
        Some(label)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl ExactSizeIterator for Labels {}
