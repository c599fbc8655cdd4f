//! Schedule (solution) model.
//!
//! A schedule holds, for each work day, the jobs placed on that day and
//! the crew assigned to each of them. It is append-only while the
//! allocation pass runs and read-only afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{EmployeeId, Weekday, WORK_DAYS};

/// A weekly schedule: one ordered list of assignments per work day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Assignments indexed by day (`Weekday::index`).
    pub days: [Vec<Assignment>; WORK_DAYS],
}

/// A job placed on a day together with its crew.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Name of the scheduled job.
    pub job_name: String,
    /// Assigned employees, in consumption order.
    pub employee_ids: Vec<EmployeeId>,
}

impl Assignment {
    /// Creates a new assignment.
    pub fn new(job_name: impl Into<String>, employee_ids: Vec<EmployeeId>) -> Self {
        Self {
            job_name: job_name.into(),
            employee_ids,
        }
    }

    /// Crew size.
    #[inline]
    pub fn crew_size(&self) -> usize {
        self.employee_ids.len()
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an assignment to the given day.
    pub fn add_assignment(&mut self, day: Weekday, assignment: Assignment) {
        self.days[day.index()].push(assignment);
    }

    /// Assignments placed on `day`.
    pub fn day(&self, day: Weekday) -> &[Assignment] {
        &self.days[day.index()]
    }

    /// Iterates `(day, assignment)` in day order, then placement order.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &Assignment)> {
        Weekday::ALL
            .into_iter()
            .flat_map(move |day| self.day(day).iter().map(move |a| (day, a)))
    }

    /// Total number of placed jobs across the week.
    pub fn total_jobs(&self) -> usize {
        self.days.iter().map(Vec::len).sum()
    }

    /// Whether no job has been placed.
    pub fn is_empty(&self) -> bool {
        self.total_jobs() == 0
    }

    /// Finds the first placement of a job by name.
    pub fn assignment_for_job(&self, job_name: &str) -> Option<(Weekday, &Assignment)> {
        self.iter().find(|(_, a)| a.job_name == job_name)
    }

    /// Days on which an employee works.
    pub fn days_for_employee(&self, employee_id: EmployeeId) -> Vec<Weekday> {
        Weekday::ALL
            .into_iter()
            .filter(|&day| {
                self.day(day)
                    .iter()
                    .any(|a| a.employee_ids.contains(&employee_id))
            })
            .collect()
    }

    /// Number of jobs placed on each day.
    pub fn jobs_per_day(&self) -> [usize; WORK_DAYS] {
        let mut counts = [0; WORK_DAYS];
        for (count, assignments) in counts.iter_mut().zip(&self.days) {
            *count = assignments.len();
        }
        counts
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "************ SCHEDULE ***************")?;
        for (day, assignment) in self.iter() {
            write!(f, "{day}: {} | Employees ->", assignment.job_name)?;
            for id in &assignment.employee_ids {
                write!(f, " [{id}]")?;
            }
            writeln!(f)?;
        }
        write!(f, "*************************************")
    }
}
