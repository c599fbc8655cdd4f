//! Error types.
//!
//! [`SchedulerError`] covers caller-contract violations of the allocation
//! engine. Running out of staff is not an error: unplaced jobs simply stay
//! pending. [`AppError`] aggregates everything the binary can hit.

use crate::config::ConfigError;
use crate::fixture::RosterError;
use crate::models::EmployeeId;
use crate::telemetry::TelemetryError;

/// A rejected engine call. The engine state is untouched when returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchedulerError {
    #[error("employee {0} is not registered")]
    UnknownEmployee(EmployeeId),
    #[error("availability must cover {expected} work days, got {actual}")]
    InvalidAvailabilityLength {
        /// Work days in the horizon.
        expected: usize,
        /// Length supplied by the caller.
        actual: usize,
    },
}

/// Top-level error for the command-line application.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("roster error: {0}")]
    Roster(#[from] RosterError),
    #[error("scheduler error: {0}")]
    Scheduler(#[from] SchedulerError),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
