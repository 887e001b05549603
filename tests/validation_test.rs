// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Input validation happens before any search runs.

use ap_partitions::{Error, EvaluationConfig, Mode, ProgressionLengths, Range};

#[test]
fn test_reversed_range() {
    assert_eq!(
        Range::new(10, 3),
        Err(Error::InvalidRange { start: 10, end: 3 })
    );
}

#[test]
fn test_non_positive_bounds() {
    assert_eq!(Range::new(0, 3), Err(Error::NonPositiveBound { value: 0 }));
    assert_eq!(Range::new(2, -1), Err(Error::NonPositiveBound { value: -1 }));
}

#[test]
fn test_zero_progression_length() {
    assert_eq!(
        ProgressionLengths::new(3, 0),
        Err(Error::InvalidProgressionLength { length: 0 })
    );
}

#[test]
fn test_config_surfaces_errors() {
    let err = EvaluationConfig::new(5, 1, 3, 3, Mode::Exhaustive).unwrap_err();
    assert_eq!(err.to_string(), "Invalid range: end 1 is less than start 5");
}

#[test]
fn test_too_long_range() {
    assert!(matches!(
        Range::new(1, 1000),
        Err(Error::RangeTooLong { length: 1000, max: 128 })
    ));
}
