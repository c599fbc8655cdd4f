//! Crew allocation engine and KPI evaluation.
//!
//! # Algorithm
//!
//! `CrewScheduler` is a greedy, day-by-day matcher. Jobs are visited in
//! registration order, staffing alternatives in catalog order, and crew
//! members are popped from per-day pools in stack order. All three orders
//! are fixed, so a given input always yields the same schedule.
//!
//! # KPI
//!
//! `ScheduleKpi` summarizes placements, leftovers and crew utilization.

mod crew;
mod kpi;

pub use crew::CrewScheduler;
pub use kpi::ScheduleKpi;
