// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Rendering of evaluation results as text or JSON.

use crate::config::EvaluationConfig;
use crate::partition::Side;
use crate::state::{ResultSet, Statistics};
use serde::Serialize;
use std::fmt;

/// Results of one evaluation together with the inputs that produced them.
#[derive(Debug, Clone, Serialize)]
pub struct Report<'a> {
    #[serde(flatten)]
    pub config: &'a EvaluationConfig,
    pub partitions: &'a ResultSet,
    pub statistics: &'a Statistics,
    /// Also list the values on each side of every partition (text only).
    #[serde(skip)]
    pub show_sides: bool,
}

impl<'a> Report<'a> {
    pub fn new(config: &'a EvaluationConfig, partitions: &'a ResultSet, statistics: &'a Statistics) -> Self {
        Self {
            config,
            partitions,
            statistics,
            show_sides: false,
        }
    }

    pub fn with_sides(mut self, show_sides: bool) -> Self {
        self.show_sides = show_sides;
        self
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn write_values(f: &mut fmt::Formatter<'_>, values: &[i64]) -> fmt::Result {
    write!(f, "{{")?;
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", value)?;
    }
    write!(f, "}}")
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let range = self.config.range;
        if self.partitions.is_empty() {
            return writeln!(
                f,
                "No partition without at least one arithmetic progression was found for the set {}.",
                range
            );
        }
        writeln!(
            f,
            "For {}, the following partitions did not have arithmetic progressions:",
            range
        )?;
        for entry in self.partitions {
            writeln!(f)?;
            write!(f, "{}", entry.label)?;
            if self.show_sides {
                write!(f, "  ")?;
                write_values(f, entry.split.side(Side::One))?;
                write!(f, " | ")?;
                write_values(f, entry.split.side(Side::Zero))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
