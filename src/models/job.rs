//! Job model.
//!
//! A job is one construction project (a building) that needs a full crew
//! for a single calendar day. Jobs are immutable once registered.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Class of construction job. Determines the staffing alternatives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobCategory {
    SingleStory,
    TwoStory,
    Commercial,
}

impl JobCategory {
    /// All categories, in declaration order.
    pub const ALL: [JobCategory; 3] = [
        JobCategory::SingleStory,
        JobCategory::TwoStory,
        JobCategory::Commercial,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            JobCategory::SingleStory => "single-story",
            JobCategory::TwoStory => "two-story",
            JobCategory::Commercial => "commercial",
        }
    }
}

impl fmt::Display for JobCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A job awaiting a crew.
///
/// The name is the display key; it need not be unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Display name (e.g. "Build 0").
    pub name: String,
    /// Job category.
    pub category: JobCategory,
}

impl Job {
    /// Creates a new job.
    pub fn new(name: impl Into<String>, category: JobCategory) -> Self {
        Self {
            name: name.into(),
            category,
        }
    }
}
