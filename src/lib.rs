//! Crew allocation engine.
//!
//! Assigns work crews to construction jobs across a five-day work week.
//! Each employee has a crew type and a per-day availability vector; each
//! job category has an ordered list of alternative staffing requirements.
//! The engine walks the week day by day and greedily staffs pending jobs
//! from per-day availability pools.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Employee`, `CrewType`, `Job`,
//!   `JobCategory`, `Weekday`, `Schedule`, `Assignment`
//! - **`catalog`**: Ordered staffing alternatives per job category
//! - **`roster`**: Employee directory and `(crew type, day)` availability index
//! - **`scheduler`**: `CrewScheduler` allocation pass and `ScheduleKpi`
//! - **`validation`**: Input integrity checks (duplicate IDs, uncovered or
//!   unstaffable categories)
//! - **`fixture`**: JSON roster documents, canonical and seeded random rosters
//! - **`config`**, **`telemetry`**: Environment configuration and tracing setup
//!
//! # Determinism
//!
//! Pending jobs are visited in registration order, alternatives in catalog
//! order, and employees are consumed last-in-first-out from each pool. The
//! same inputs always produce the same schedule.

pub mod catalog;
pub mod config;
pub mod error;
pub mod fixture;
pub mod models;
pub mod roster;
pub mod scheduler;
pub mod telemetry;
pub mod validation;
