//! Crew scheduling domain models.
//!
//! Plain value records describing the problem and its solution.
//!
//! # Domain Mappings
//!
//! | u-crew | Construction | Field service |
//! |--------|--------------|---------------|
//! | Job | Building | Work order |
//! | Employee | Installer/Laborer | Technician |
//! | CrewType | Certification tier | Skill level |
//! | Schedule | Weekly build plan | Dispatch board |

mod employee;
mod job;
mod schedule;
mod week;

pub use employee::{CrewType, Employee, EmployeeId};
pub use job::{Job, JobCategory};
pub use schedule::{Assignment, Schedule};
pub use week::{
    availability_from_slice, available_days, Availability, Weekday, ALWAYS_AVAILABLE,
    NEVER_AVAILABLE, WORK_DAYS,
};
