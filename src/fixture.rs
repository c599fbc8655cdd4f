//! Roster documents.
//!
//! A [`Roster`] is the input a scheduler is loaded from: jobs, employees
//! and availability updates to apply afterwards, in that order. Rosters are
//! read from JSON, built from the canonical fixture, or generated from a
//! seeded RNG for demos and soak tests.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::SchedulerError;
use crate::models::{
    availability_from_slice, CrewType, Employee, EmployeeId, Job, JobCategory, WORK_DAYS,
};
use crate::scheduler::CrewScheduler;

/// Failure to read or decode a roster (or catalog) file.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Employee entry as it appears in a document.
///
/// Availability is kept as a plain list so length errors surface as
/// [`SchedulerError::InvalidAvailabilityLength`] when applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Employee identifier.
    pub id: EmployeeId,
    /// Skill tier.
    pub crew_type: CrewType,
    /// One flag per work day, Monday first.
    pub availability: Vec<bool>,
}

/// Availability change applied after registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityUpdate {
    /// Registered employee to update.
    pub id: EmployeeId,
    /// Replacement availability, one flag per work day.
    pub availability: Vec<bool>,
}

/// Scheduler input document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    /// Jobs in registration order.
    #[serde(default)]
    pub jobs: Vec<Job>,
    /// Employees in registration order.
    #[serde(default)]
    pub employees: Vec<EmployeeRecord>,
    /// Availability changes applied after all registrations.
    #[serde(default)]
    pub updates: Vec<AvailabilityUpdate>,
}

impl Roster {
    /// Parses a roster from JSON text.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reads a roster from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, RosterError> {
        read_json(path)
    }

    /// The canonical five-building, ten-employee week.
    pub fn canonical() -> Self {
        use CrewType::*;

        let jobs = [
            JobCategory::TwoStory,
            JobCategory::Commercial,
            JobCategory::TwoStory,
            JobCategory::SingleStory,
            JobCategory::SingleStory,
        ]
        .into_iter()
        .enumerate()
        .map(|(i, category)| Job::new(format!("Build {i}"), category))
        .collect();

        let employees = [
            (1, CertifiedInstaller, [true, true, true, true, true]),
            (2, CertifiedInstaller, [true, true, true, false, true]),
            (3, PendingCertification, [true, true, false, true, false]),
            (4, Laborer, [true, true, true, false, false]),
            (5, Laborer, [true, true, false, true, true]),
            (6, CertifiedInstaller, [false, true, true, false, true]),
            (7, Laborer, [true, true, true, false, true]),
            (8, Laborer, [true, true, true, false, true]),
            (9, PendingCertification, [true, false, true, false, true]),
            (10, PendingCertification, [true, true, true, true, true]),
        ]
        .into_iter()
        .map(|(id, crew_type, availability)| EmployeeRecord {
            id,
            crew_type,
            availability: availability.to_vec(),
        })
        .collect();

        Self {
            jobs,
            employees,
            updates: Vec::new(),
        }
    }

    /// Generates a reproducible random roster.
    ///
    /// Categories and crew types are drawn uniformly; each day is free with
    /// probability `availability_rate` (clamped to 0.0..=1.0). Employee ids
    /// start at 1.
    pub fn random(
        seed: u64,
        job_count: usize,
        employee_count: usize,
        availability_rate: f64,
    ) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let rate = availability_rate.clamp(0.0, 1.0);

        let jobs = (0..job_count)
            .map(|i| {
                let category = JobCategory::ALL[rng.random_range(0..JobCategory::ALL.len())];
                Job::new(format!("Build {i}"), category)
            })
            .collect();

        let employees = (1..=employee_count as EmployeeId)
            .map(|id| {
                let crew_type = CrewType::ALL[rng.random_range(0..CrewType::ALL.len())];
                let availability = (0..WORK_DAYS)
                    .map(|_| rng.random_bool(rate))
                    .collect();
                EmployeeRecord {
                    id,
                    crew_type,
                    availability,
                }
            })
            .collect();

        Self {
            jobs,
            employees,
            updates: Vec::new(),
        }
    }

    /// Employee records converted to model values.
    ///
    /// # Errors
    /// The first record whose availability has the wrong length.
    pub fn employee_models(&self) -> Result<Vec<Employee>, SchedulerError> {
        self.employees
            .iter()
            .map(|r| {
                Ok(Employee::new(
                    r.id,
                    r.crew_type,
                    availability_from_slice(&r.availability)?,
                ))
            })
            .collect()
    }

    /// Loads the roster into a scheduler: jobs, then employees, then updates.
    ///
    /// Availability vectors and update ids are checked before anything is
    /// registered, so a rejected roster leaves the scheduler untouched. An
    /// update may target an employee from this roster or one the scheduler
    /// already knows.
    pub fn apply(&self, scheduler: &mut CrewScheduler) -> Result<(), SchedulerError> {
        let employees = self.employee_models()?;
        let known: HashSet<EmployeeId> = employees.iter().map(|e| e.id).collect();
        let updates = self
            .updates
            .iter()
            .map(|u| {
                if !known.contains(&u.id) && scheduler.directory().get(u.id).is_none() {
                    return Err(SchedulerError::UnknownEmployee(u.id));
                }
                Ok((u.id, availability_from_slice(&u.availability)?))
            })
            .collect::<Result<Vec<_>, SchedulerError>>()?;

        for job in &self.jobs {
            scheduler.register_job(job.name.clone(), job.category);
        }
        for e in employees {
            scheduler.register_employee(e.id, e.crew_type, e.availability);
        }
        for (id, availability) in updates {
            scheduler.update_availability(id, availability)?;
        }
        Ok(())
    }
}

/// Reads and decodes a JSON document from disk.
pub fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, RosterError> {
    let text = fs::read_to_string(path).map_err(|source| RosterError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| RosterError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
