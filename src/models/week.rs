//! Work week model.
//!
//! The planning horizon is a fixed five-day work week. Days are plain
//! indices `0..WORK_DAYS`; [`Weekday`] gives them names and ordering.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::SchedulerError;

/// Number of days in the planning horizon.
pub const WORK_DAYS: usize = 5;

/// Per-day availability flags, index-aligned with [`Weekday::ALL`].
pub type Availability = [bool; WORK_DAYS];

/// A day of the work week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// All work days in scheduling order.
    pub const ALL: [Weekday; WORK_DAYS] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Zero-based position within the week.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Day at the given position, if within the week.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Available every day of the week.
pub const ALWAYS_AVAILABLE: Availability = [true; WORK_DAYS];

/// Unavailable for the whole week.
pub const NEVER_AVAILABLE: Availability = [false; WORK_DAYS];

/// Converts a dynamically sized flag list into an [`Availability`].
///
/// # Errors
/// [`SchedulerError::InvalidAvailabilityLength`] unless `flags` has exactly
/// [`WORK_DAYS`] entries.
pub fn availability_from_slice(flags: &[bool]) -> Result<Availability, SchedulerError> {
    <Availability>::try_from(flags).map_err(|_| SchedulerError::InvalidAvailabilityLength {
        expected: WORK_DAYS,
        actual: flags.len(),
    })
}

/// Number of days flagged available.
pub fn available_days(availability: &Availability) -> usize {
    availability.iter().filter(|&&free| free).count()
}
