// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Side tag for one position of a bipartition.
//!
//! Every value of the range is assigned to exactly one of two sides,
//! rendered as the symbols `1` and `0`.

use serde::Serialize;
use std::fmt;

/// Which half of a bipartition a range position belongs to.
///
/// Side `One` is checked against the progression length `p` and side `Zero`
/// against `q` (in the original orientation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Side {
    Zero,
    One,
}

impl Side {
    /// The other side.
    pub fn flip(self) -> Self {
        match self {
            Side::Zero => Side::One,
            Side::One => Side::Zero,
        }
    }

    /// Build a side from a single bit (nonzero is `One`).
    pub fn from_bit(bit: u128) -> Self {
        if bit & 1 != 0 {
            Side::One
        } else {
            Side::Zero
        }
    }

    /// Symbol used when rendering labels.
    pub fn to_char(self) -> char {
        match self {
            Side::Zero => '0',
            Side::One => '1',
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip() {
        assert_eq!(Side::Zero.flip(), Side::One);
        assert_eq!(Side::One.flip(), Side::Zero);
        assert_eq!(Side::One.flip().flip(), Side::One);
    }

    #[test]
    fn test_from_bit() {
        assert_eq!(Side::from_bit(0), Side::Zero);
        assert_eq!(Side::from_bit(1), Side::One);
        assert_eq!(Side::from_bit(0b11), Side::One);
        assert_eq!(Side::from_bit(0b10), Side::Zero);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Side::Zero), "0");
        assert_eq!(format!("{}", Side::One), "1");
    }
}
