//! Day-by-day greedy crew scheduler.
//!
//! # Algorithm
//!
//! For each work day, Monday to Friday:
//! 1. Walk the pending jobs in registration order.
//! 2. For each job, try its category's alternatives in catalog order and
//!    take the first one the day's pools can satisfy in full.
//! 3. Pop the crew off the pools (stack order, need by need), record the
//!    assignment, and drop the job from the pending pool.
//! 4. Jobs with no satisfiable alternative wait for the next day.
//!
//! Whatever is still pending after Friday stays unscheduled. This is
//! greedy: it does not maximize the number of placed jobs.
//!
//! # Complexity
//! O(d * n * a) pool-size checks, where d=days, n=jobs, a=alternatives
//! per category, plus O(k) amortized to pop a crew of k.

use tracing::{debug, info};

use crate::catalog::{RequirementCatalog, RequirementSet};
use crate::error::SchedulerError;
use crate::models::{
    Assignment, Availability, CrewType, Employee, EmployeeId, Job, JobCategory, Schedule,
    Weekday,
};
use crate::roster::EmployeeDirectory;

use super::ScheduleKpi;

/// Crew allocation engine.
///
/// Owns the pending jobs, the employee directory with its availability
/// index, and the accumulated schedule. All mutation goes through the
/// methods below; the directory is only exposed read-only.
///
/// # Example
///
/// ```
/// use u_crew::models::{CrewType, JobCategory, Weekday};
/// use u_crew::scheduler::CrewScheduler;
///
/// let mut scheduler = CrewScheduler::new();
/// scheduler.register_job("Build 0", JobCategory::TwoStory);
/// scheduler.register_employee(1, CrewType::CertifiedInstaller, [true; 5]);
/// scheduler.register_employee(4, CrewType::Laborer, [false, true, true, true, true]);
///
/// assert_eq!(scheduler.schedule(), 1);
/// let (day, assignment) = scheduler.snapshot().assignment_for_job("Build 0").unwrap();
/// assert_eq!(day, Weekday::Tuesday);
/// assert_eq!(assignment.employee_ids, vec![1, 4]);
/// ```
#[derive(Debug, Clone)]
pub struct CrewScheduler {
    catalog: RequirementCatalog,
    pending: Vec<Job>,
    directory: EmployeeDirectory,
    schedule: Schedule,
}

impl CrewScheduler {
    /// Creates a scheduler using the standard catalog.
    pub fn new() -> Self {
        Self::with_catalog(RequirementCatalog::standard())
    }

    /// Creates a scheduler using a custom catalog.
    pub fn with_catalog(catalog: RequirementCatalog) -> Self {
        Self {
            catalog,
            pending: Vec::new(),
            directory: EmployeeDirectory::new(),
            schedule: Schedule::new(),
        }
    }

    /// Adds a job to the end of the pending pool.
    pub fn register_job(&mut self, name: impl Into<String>, category: JobCategory) {
        self.pending.push(Job::new(name, category));
    }

    /// Registers (or re-registers) an employee and indexes its free days.
    pub fn register_employee(
        &mut self,
        id: EmployeeId,
        crew_type: CrewType,
        availability: Availability,
    ) {
        self.directory
            .register(Employee::new(id, crew_type, availability));
    }

    /// Replaces an employee's availability, updating only the days that flip.
    ///
    /// # Errors
    /// [`SchedulerError::UnknownEmployee`] if the id was never registered.
    pub fn update_availability(
        &mut self,
        id: EmployeeId,
        availability: Availability,
    ) -> Result<(), SchedulerError> {
        self.directory.update_availability(id, availability)
    }

    /// Runs the allocation pass over the whole week.
    ///
    /// Appends to the existing schedule and returns how many jobs this pass
    /// placed. A second call on unchanged state places nothing.
    pub fn schedule(&mut self) -> usize {
        let mut placed = 0;

        for day in Weekday::ALL {
            let candidates = std::mem::take(&mut self.pending);
            for job in candidates {
                match self.staff(&job, day) {
                    Some(crew) => {
                        debug!(%day, job = %job.name, ?crew, "job scheduled");
                        self.schedule
                            .add_assignment(day, Assignment::new(job.name, crew));
                        placed += 1;
                    }
                    None => self.pending.push(job),
                }
            }
        }

        info!(
            placed,
            pending = self.pending.len(),
            total = self.schedule.total_jobs(),
            "allocation pass complete"
        );
        placed
    }

    /// Picks the first satisfiable alternative and consumes its crew.
    fn staff(&mut self, job: &Job, day: Weekday) -> Option<Vec<EmployeeId>> {
        let alternative: &RequirementSet = self
            .catalog
            .alternatives(job.category)
            .iter()
            .find(|set| self.directory.index().can_satisfy(set, day))?;

        Some(self.directory.index_mut().consume(alternative, day))
    }

    /// Accumulated schedule.
    pub fn snapshot(&self) -> &Schedule {
        &self.schedule
    }

    /// Jobs not yet placed, in registration order.
    pub fn pending_jobs(&self) -> &[Job] {
        &self.pending
    }

    /// Read-only view of the employees and their availability index.
    pub fn directory(&self) -> &EmployeeDirectory {
        &self.directory
    }

    /// The staffing catalog in use.
    pub fn catalog(&self) -> &RequirementCatalog {
        &self.catalog
    }

    /// Free employees of `crew_type` on `day` in the current index state.
    pub fn available_count(&self, crew_type: CrewType, day: Weekday) -> usize {
        self.directory.index().pool_len(crew_type, day)
    }

    /// Quality metrics of the current schedule.
    pub fn kpi(&self) -> ScheduleKpi {
        ScheduleKpi::calculate(
            &self.schedule,
            &self.directory.employees(),
            self.pending.len(),
        )
    }
}

impl Default for CrewScheduler {
    fn default() -> Self {
        Self::new()
    }
}
