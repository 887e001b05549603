// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Qualifying partitions, in discovery order.

use crate::partition::{Label, Split};
use serde::Serialize;

/// Which of the two checks on a generated label produced an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Side `1` checked against `p`, side `0` against `q`; the label itself is reported.
    Original,
    /// Side `1` checked against `q`, side `0` against `p`; the complement is reported.
    Inverted,
}

impl Orientation {
    /// Orientations in the order they are tried for each label.
    pub const ALL: [Orientation; 2] = [Orientation::Original, Orientation::Inverted];

    /// The label reported when a generated label qualifies in this orientation.
    pub fn apply(self, label: Label) -> Label {
        match self {
            Orientation::Original => label,
            Orientation::Inverted => label.complement(),
        }
    }
}

/// One progression-free partition.
///
/// `split` is realized from `label`: its side `1` values are the positions
/// where `label` holds `1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultEntry {
    pub label: Label,
    pub orientation: Orientation,
    pub split: Split,
}

/// Append-only list of qualifying partitions.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ResultSet {
    entries: Vec<ResultEntry>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, entry: ResultEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn first(&self) -> Option<&ResultEntry> {
        self.entries.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResultEntry> {
        self.entries.iter()
    }

    /// Reported labels in discovery order.
    pub fn labels(&self) -> Vec<Label> {
        self.entries.iter().map(|entry| entry.label).collect()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a ResultEntry;
    type IntoIter = std::slice::Iter<'a, ResultEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
