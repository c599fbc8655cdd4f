//! Schedule quality metrics (KPIs).
//!
//! Summarizes a completed allocation pass.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Scheduled jobs | Jobs placed on some day |
//! | Pending jobs | Jobs left unplaced after Friday |
//! | Placement rate | scheduled / (scheduled + pending) |
//! | Jobs per day | Placements per work day |
//! | Utilization | Days worked / days available, per employee |

use std::collections::BTreeMap;

use crate::models::{Employee, EmployeeId, Schedule, Weekday, WORK_DAYS};

/// Schedule performance indicators.
#[derive(Debug, Clone)]
pub struct ScheduleKpi {
    /// Number of placed jobs.
    pub scheduled_jobs: usize,
    /// Number of jobs still pending.
    pub pending_jobs: usize,
    /// Fraction of registered jobs that were placed (0.0..1.0).
    pub placement_rate: f64,
    /// Placed jobs per work day.
    pub jobs_per_day: [usize; WORK_DAYS],
    /// Per-employee utilization (0.0..1.0). Employees with no free day are omitted.
    pub utilization_by_employee: BTreeMap<EmployeeId, f64>,
    /// Mean of `utilization_by_employee` (0.0 if empty).
    pub avg_utilization: f64,
}

impl ScheduleKpi {
    /// Computes KPIs from a schedule, its employees and the pending count.
    pub fn calculate(schedule: &Schedule, employees: &[&Employee], pending_jobs: usize) -> Self {
        let scheduled_jobs = schedule.total_jobs();
        let registered = scheduled_jobs + pending_jobs;
        let placement_rate = if registered == 0 {
            1.0
        } else {
            scheduled_jobs as f64 / registered as f64
        };

        let mut worked: BTreeMap<EmployeeId, usize> = BTreeMap::new();
        for (_, assignment) in schedule.iter() {
            for &id in &assignment.employee_ids {
                *worked.entry(id).or_insert(0) += 1;
            }
        }

        let utilization_by_employee: BTreeMap<EmployeeId, f64> = employees
            .iter()
            .filter(|e| e.available_day_count() > 0)
            .map(|e| {
                let days = worked.get(&e.id).copied().unwrap_or(0);
                (e.id, days as f64 / e.available_day_count() as f64)
            })
            .collect();

        let avg_utilization = if utilization_by_employee.is_empty() {
            0.0
        } else {
            utilization_by_employee.values().sum::<f64>() / utilization_by_employee.len() as f64
        };

        Self {
            scheduled_jobs,
            pending_jobs,
            placement_rate,
            jobs_per_day: schedule.jobs_per_day(),
            utilization_by_employee,
            avg_utilization,
        }
    }

    /// Day with the most placements (earliest on ties), if any job was placed.
    pub fn busiest_day(&self) -> Option<Weekday> {
        let (index, &count) = self
            .jobs_per_day
            .iter()
            .enumerate()
            .max_by(|(ia, a), (ib, b)| a.cmp(b).then(ib.cmp(ia)))?;
        if count == 0 {
            return None;
        }
        Weekday::from_index(index)
    }

    /// Whether every registered job was placed.
    pub fn all_placed(&self) -> bool {
        self.pending_jobs == 0
    }
}
