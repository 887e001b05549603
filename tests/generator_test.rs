// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for label generation and progression detection.

use ap_partitions::{contains_progression, find_progression, Label, PartitionGenerator};

#[test]
fn test_length_four_fixture() {
    let labels: Vec<Label> = PartitionGenerator::new(4).iter().collect();
    let expected: Vec<Label> = ["0000", "0110"].iter().map(|s| s.parse().unwrap()).collect();
    assert_eq!(labels, expected);
}

#[test]
fn test_generation_is_restartable() {
    let generator = PartitionGenerator::new(11);
    assert!(generator.iter().eq(generator.iter()));
    assert!(PartitionGenerator::new(11).into_iter().eq(generator.iter()));
}

#[test]
fn test_generated_counts() {
    for length in [2usize, 4, 10, 16] {
        assert_eq!(PartitionGenerator::new(length).count(), 1 << (length / 2 - 1));
    }
    for length in [1usize, 3, 9, 15] {
        assert_eq!(PartitionGenerator::new(length).count(), 1 << ((length - 1) / 2));
    }
}

#[test]
fn test_every_label_has_generator_length() {
    for length in 0..=13 {
        assert!(PartitionGenerator::new(length).iter().all(|label| label.len() == length));
    }
}

#[test]
fn test_progression_ground_truth() {
    assert!(contains_progression(&[1, 2, 3, 4], 4));
    assert!(!contains_progression(&[1, 2, 4, 8], 4));
    assert!(contains_progression(&[1, 3, 5], 3));
}

#[test]
fn test_progression_witness_terms_are_members() {
    let subset = [2, 3, 5, 8, 11, 13, 14];
    let progression = find_progression(&subset, 4).unwrap();
    assert!(progression.terms().all(|term| subset.contains(&term)));
    assert_eq!(progression.terms().count(), 4);
}
