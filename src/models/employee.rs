//! Employee model.
//!
//! Employees are the crew members allocated to jobs. Each one belongs to a
//! single crew type (skill tier) and carries a weekly availability vector.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{available_days, Availability, Weekday};

/// Stable employee identifier for the duration of a run.
pub type EmployeeId = u32;

/// Skill tier of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrewType {
    /// Fully certified installer.
    CertifiedInstaller,
    /// Installer whose certification is still pending.
    PendingCertification,
    /// General laborer.
    Laborer,
}

impl CrewType {
    /// All crew types, in declaration order.
    pub const ALL: [CrewType; 3] = [
        CrewType::CertifiedInstaller,
        CrewType::PendingCertification,
        CrewType::Laborer,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            CrewType::CertifiedInstaller => "certified installer",
            CrewType::PendingCertification => "installer pending certification",
            CrewType::Laborer => "laborer",
        }
    }
}

impl fmt::Display for CrewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A crew member.
///
/// `availability` is the only field that changes after registration, and
/// only through the scheduler's availability update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique employee identifier.
    pub id: EmployeeId,
    /// Skill tier.
    pub crew_type: CrewType,
    /// Availability per work day.
    pub availability: Availability,
}

impl Employee {
    /// Creates a new employee.
    pub fn new(id: EmployeeId, crew_type: CrewType, availability: Availability) -> Self {
        Self {
            id,
            crew_type,
            availability,
        }
    }

    /// Whether the employee can work on `day`.
    #[inline]
    pub fn is_available(&self, day: Weekday) -> bool {
        self.availability[day.index()]
    }

    /// Number of days this employee can work.
    pub fn available_day_count(&self) -> usize {
        available_days(&self.availability)
    }
}
