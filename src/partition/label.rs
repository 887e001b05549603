// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Label type assigning every range position to a side.
//!
//! A Label is a compact representation of a bipartition pattern using a
//! bitset, where bit i is set if position i belongs to side `1`.
//!
//! # Examples
//!
//! ```
//! use ap_partitions::partition::{Label, Side};
//!
//! let mut label = Label::zeros(4);
//! label.set(1, Side::One);
//! label.set(2, Side::One);
//!
//! assert_eq!(format!("{}", label), "[0 1 1 0]");
//! assert_eq!(format!("{}", label.complement()), "[1 0 0 1]");
//! ```

use crate::error::{Error, Result};
use crate::partition::Side;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Longest label (and therefore longest range) that fits in the bitset.
pub const MAX_LABEL_LENGTH: usize = u128::BITS as usize;

/// A bipartition pattern of fixed length, one [`Side`] per position.
///
/// Bit i (counting from LSB) is set if position i is on side `One`.
/// Bits at or above `len` are always clear, so derived equality is exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Label {
    bits: u128,
    len: u8,
}

impl Label {
    /// Create a label of the given length with every position on side `Zero`.
    ///
    /// # Panics
    ///
    /// Panics if `len > MAX_LABEL_LENGTH`.
    pub fn zeros(len: usize) -> Self {
        assert!(len <= MAX_LABEL_LENGTH, "Label length out of range: {}", len);
        Self { bits: 0, len: len as u8 }
    }

    /// Create a label from a slice of sides.
    pub fn from_sides(sides: &[Side]) -> Self {
        let mut label = Self::zeros(sides.len());
        for (position, &side) in sides.iter().enumerate() {
            label.set(position, side);
        }
        label
    }

    /// Create a label from raw bits; bits at or above `len` are discarded.
    pub fn from_bits(bits: u128, len: usize) -> Self {
        let mut label = Self::zeros(len);
        label.bits = bits & label.mask();
        label
    }

    fn mask(self) -> u128 {
        if self.len() == MAX_LABEL_LENGTH {
            u128::MAX
        } else {
            (1u128 << self.len) - 1
        }
    }

    /// Number of positions.
    pub fn len(self) -> usize {
        self.len as usize
    }

    /// Check if the label has no positions.
    pub fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Side of the given position.
    ///
    /// # Panics
    ///
    /// Panics if `position >= len`.
    pub fn get(self, position: usize) -> Side {
        assert!(position < self.len(), "Label position out of range: {}", position);
        Side::from_bit(self.bits >> position)
    }

    /// Assign a position to a side.
    ///
    /// # Panics
    ///
    /// Panics if `position >= len`.
    pub fn set(&mut self, position: usize, side: Side) {
        assert!(position < self.len(), "Label position out of range: {}", position);
        match side {
            Side::One => self.bits |= 1u128 << position,
            Side::Zero => self.bits &= !(1u128 << position),
        }
    }

    /// The label with every position moved to the other side.
    pub fn complement(self) -> Self {
        Self {
            bits: !self.bits & self.mask(),
            len: self.len,
        }
    }

    /// Number of positions on the given side.
    pub fn count(self, side: Side) -> usize {
        let ones = self.bits.count_ones() as usize;
        match side {
            Side::One => ones,
            Side::Zero => self.len() - ones,
        }
    }

    /// Get the underlying bitset value.
    pub fn bits(self) -> u128 {
        self.bits
    }

    /// Iterate over the sides in position order.
    pub fn iter(self) -> impl Iterator<Item = Side> {
        (0..self.len()).map(move |position| Side::from_bit(self.bits >> position))
    }
}

impl fmt::Display for Label {
    /// Format a label as "[0 1 1 0]".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (position, side) in self.iter().enumerate() {
            if position > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", side)?;
        }
        write!(f, "]")
    }
}

impl FromStr for Label {
    type Err = Error;

    /// Parse "0110" or "[0 1 1 0]"; brackets and whitespace are ignored.
    fn from_str(s: &str) -> Result<Self> {
        let mut sides = Vec::with_capacity(s.len());
        for ch in s.chars() {
            match ch {
                '0' => sides.push(Side::Zero),
                '1' => sides.push(Side::One),
                '[' | ']' => {}
                c if c.is_whitespace() => {}
                _ => return Err(Error::InvalidLabel(s.to_string())),
            }
        }
        if sides.len() > MAX_LABEL_LENGTH {
            return Err(Error::InvalidLabel(s.to_string()));
        }
        Ok(Self::from_sides(&sides))
    }
}

impl Serialize for Label {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl From<&[Side]> for Label {
    fn from(sides: &[Side]) -> Self {
        Self::from_sides(sides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros() {
        let label = Label::zeros(5);
        assert_eq!(label.len(), 5);
        assert_eq!(label.count(Side::Zero), 5);
        assert_eq!(label.count(Side::One), 0);
        assert_eq!(label.bits(), 0);
    }

    #[test]
    fn test_empty() {
        let label = Label::zeros(0);
        assert!(label.is_empty());
        assert_eq!(format!("{}", label), "[]");
        assert_eq!(label.complement(), label);
    }

    #[test]
    fn test_set_get() {
        let mut label = Label::zeros(3);
        label.set(2, Side::One);
        assert_eq!(label.get(0), Side::Zero);
        assert_eq!(label.get(2), Side::One);

        label.set(2, Side::Zero);
        assert_eq!(label.get(2), Side::Zero);
    }

    #[test]
    #[should_panic(expected = "Label position out of range")]
    fn test_get_out_of_range() {
        Label::zeros(3).get(3);
    }

    #[test]
    fn test_complement_masks_to_length() {
        let label: Label = "0110".parse().unwrap();
        let inverse = label.complement();
        assert_eq!(format!("{}", inverse), "[1 0 0 1]");
        assert_eq!(inverse.bits(), 0b1001);
        assert_eq!(inverse.complement(), label);
    }

    #[test]
    fn test_complement_full_width() {
        let label = Label::zeros(MAX_LABEL_LENGTH);
        assert_eq!(label.complement().bits(), u128::MAX);
        assert_eq!(label.complement().count(Side::One), MAX_LABEL_LENGTH);
    }

    #[test]
    fn test_from_bits_discards_high_bits() {
        let label = Label::from_bits(0b1111_0110, 4);
        assert_eq!(label.bits(), 0b0110);
    }

    #[test]
    fn test_parse_forms() {
        let plain: Label = "1001".parse().unwrap();
        let bracketed: Label = "[1 0 0 1]".parse().unwrap();
        assert_eq!(plain, bracketed);
        assert!("10x1".parse::<Label>().is_err());
    }

    #[test]
    fn test_iter_order() {
        let label: Label = "110".parse().unwrap();
        let sides: Vec<_> = label.iter().collect();
        assert_eq!(sides, vec![Side::One, Side::One, Side::Zero]);
    }

    #[test]
    fn test_serialize_as_rendered_string() {
        let label: Label = "0110".parse().unwrap();
        assert_eq!(serde_json::to_string(&label).unwrap(), "\"[0 1 1 0]\"");
    }
}
