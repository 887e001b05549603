// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Validated parameters of one evaluation run.
//!
//! All input checking happens here. Once an [`EvaluationConfig`] exists the
//! search cannot fail.

use crate::error::{Error, Result};
use crate::partition::Range;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Progression length checked on each side.
///
/// `p` applies to side `1` and `q` to side `0` in the original orientation;
/// the inverted orientation swaps them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ProgressionLengths {
    p: usize,
    q: usize,
}

impl ProgressionLengths {
    /// # Errors
    ///
    /// [`Error::InvalidProgressionLength`] if either length is zero.
    pub fn new(p: usize, q: usize) -> Result<Self> {
        for length in [p, q] {
            if length == 0 {
                return Err(Error::InvalidProgressionLength { length });
            }
        }
        Ok(Self { p, q })
    }

    /// Same length on both sides.
    pub fn uniform(length: usize) -> Result<Self> {
        Self::new(length, length)
    }

    pub fn p(self) -> usize {
        self.p
    }

    pub fn q(self) -> usize {
        self.q
    }
}

/// Whether to collect every qualifying partition or stop at the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    #[default]
    Exhaustive,
    FirstMatch,
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, String> {
        match s {
            "exhaustive" | "all" => Ok(Mode::Exhaustive),
            "first-match" | "first" => Ok(Mode::FirstMatch),
            _ => Err(format!("unknown mode {:?} (expected exhaustive or first-match)", s)),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Exhaustive => write!(f, "exhaustive"),
            Mode::FirstMatch => write!(f, "first-match"),
        }
    }
}

/// Everything an evaluator needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EvaluationConfig {
    pub range: Range,
    pub lengths: ProgressionLengths,
    pub mode: Mode,
}

impl EvaluationConfig {
    /// Validate raw integers into a config.
    ///
    /// # Errors
    ///
    /// Any error from [`Range::new`] or [`ProgressionLengths::new`].
    pub fn new(start: i64, end: i64, p: usize, q: usize, mode: Mode) -> Result<Self> {
        Ok(Self {
            range: Range::new(start, end)?,
            lengths: ProgressionLengths::new(p, q)?,
            mode,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lengths() {
        let lengths = ProgressionLengths::new(6, 5).unwrap();
        assert_eq!((lengths.p(), lengths.q()), (6, 5));
        assert_eq!(ProgressionLengths::uniform(4).unwrap().q(), 4);
    }

    #[test]
    fn test_zero_length_rejected() {
        assert_eq!(
            ProgressionLengths::new(0, 3),
            Err(Error::InvalidProgressionLength { length: 0 })
        );
        assert!(ProgressionLengths::new(3, 0).is_err());
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!("exhaustive".parse::<Mode>(), Ok(Mode::Exhaustive));
        assert_eq!("first-match".parse::<Mode>(), Ok(Mode::FirstMatch));
        assert_eq!("first".parse::<Mode>(), Ok(Mode::FirstMatch));
        assert!("sometimes".parse::<Mode>().is_err());
        assert_eq!(Mode::FirstMatch.to_string(), "first-match");
    }

    #[test]
    fn test_config_validation_order() {
        assert!(matches!(
            EvaluationConfig::new(0, 5, 4, 4, Mode::Exhaustive),
            Err(Error::NonPositiveBound { value: 0 })
        ));
        assert!(matches!(
            EvaluationConfig::new(1, 5, 0, 4, Mode::Exhaustive),
            Err(Error::InvalidProgressionLength { length: 0 })
        ));
        let config = EvaluationConfig::new(1, 5, 3, 4, Mode::FirstMatch).unwrap();
        assert_eq!(config.range.len(), 5);
        assert_eq!(config.mode, Mode::FirstMatch);
    }
}
