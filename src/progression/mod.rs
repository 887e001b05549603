// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Detection of arithmetic progressions in a subset of integers.
//!
//! A progression of length m is `a, a + d, ..., a + (m - 1)d`. Every ordered
//! pair of stored positions `i < j` proposes `a = subset[i]` and
//! `d = subset[j] - subset[i]`; the subset contains a progression when all m
//! terms of some proposal are members. Pairs are visited in stored order, not
//! sorted order, and the first complete proposal is the witness.
//!
//! # Examples
//!
//! ```
//! use ap_partitions::progression::contains_progression;
//!
//! assert!(contains_progression(&[1, 2, 3, 4], 4));
//! assert!(!contains_progression(&[1, 2, 4, 8], 4));
//! assert!(contains_progression(&[1, 3, 5], 3));
//! ```

use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// A progression found in a subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progression {
    pub first: i64,
    pub step: i64,
    pub length: usize,
}

impl Progression {
    /// The terms `first + t * step` for `t` in `0..length`.
    ///
    /// Stops early if a term would overflow.
    pub fn terms(self) -> impl Iterator<Item = i64> {
        let Progression { first, step, length } = self;
        (0..length).map_while(move |t| {
            i64::try_from(t)
                .ok()
                .and_then(|t| step.checked_mul(t))
                .and_then(|offset| first.checked_add(offset))
        })
    }
}

impl fmt::Display for Progression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AP{}(", self.length)?;
        for (t, term) in self.terms().enumerate() {
            if t > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", term)?;
        }
        write!(f, ")")
    }
}

/// Check whether the subset holds an arithmetic progression of exactly
/// `target` terms.
///
/// Subsets with fewer than `target` values never do.
pub fn contains_progression(subset: &[i64], target: usize) -> bool {
    find_progression(subset, target).is_some()
}

/// Find the first progression of `target` terms, scanning pairs in stored order.
pub fn find_progression(subset: &[i64], target: usize) -> Option<Progression> {
    if subset.len() < target {
        return None;
    }
    let members: HashSet<i64> = subset.iter().copied().collect();
    for (i, &first) in subset.iter().enumerate() {
        for &next in &subset[i + 1..] {
            let Some(step) = next.checked_sub(first) else {
                continue;
            };
            let candidate = Progression {
                first,
                step,
                length: target,
            };
            if all_terms_present(candidate, &members) {
                return Some(candidate);
            }
        }
    }
    None
}

/// A term that cannot be represented is never a member.
fn all_terms_present(candidate: Progression, members: &HashSet<i64>) -> bool {
    let mut present = 0;
    for term in candidate.terms() {
        if !members.contains(&term) {
            return false;
        }
        present += 1;
    }
    present == candidate.length
}

/// Progression checker bound to one target length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressionChecker {
    target: usize,
}

impl ProgressionChecker {
    pub fn new(target: usize) -> Self {
        Self { target }
    }

    pub fn target(self) -> usize {
        self.target
    }

    pub fn contains(self, subset: &[i64]) -> bool {
        contains_progression(subset, self.target)
    }

    pub fn find(self, subset: &[i64]) -> Option<Progression> {
        find_progression(subset, self.target)
    }
}
