// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Symmetry reduction of the bipartition search space.
//!
//! A label and its complement describe the same unordered partition, so the
//! generator only materializes one representative of each complementary pair
//! among the mirror-symmetric labels.
//!
//! ## Module Structure
//!
//! - `mirror`: Canonical label enumeration by bit mirroring

pub mod mirror;

pub use mirror::{Labels, PartitionGenerator};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_no_label_is_complement_of_another() {
        for length in 2..=12 {
            let labels: HashSet<_> = PartitionGenerator::new(length).iter().collect();
            for label in &labels {
                assert!(
                    !labels.contains(&label.complement()),
                    "length {} generated both {} and its complement",
                    length,
                    label
                );
            }
        }
    }

    #[test]
    fn test_labels_and_complements_cover_all_palindromes() {
        // Palindromes of length n are determined by their first ceil(n/2) positions.
        for length in 1..=11usize {
            let mut covered = HashSet::new();
            for label in PartitionGenerator::new(length) {
                covered.insert(label);
                covered.insert(label.complement());
            }
            let expected = if length % 2 == 0 {
                1usize << (length / 2)
            } else {
                // The middle position is fixed to 1 before complementing.
                1usize << ((length - 1) / 2 + 1)
            };
            assert_eq!(covered.len(), expected, "length {}", length);
        }
    }
}
