//! Employee directory and availability index.
//!
//! The directory is the source of truth for employee records. It keeps an
//! [`AvailabilityIndex`] in sync on every registration and availability
//! update, so that the index holds an employee under `(crew type, day)`
//! iff the employee's crew type matches and it is available that day
//! (minus whoever an allocation pass has already consumed).

mod index;

pub use index::AvailabilityIndex;

use std::collections::HashMap;

use tracing::debug;

use crate::error::SchedulerError;
use crate::models::{Availability, CrewType, Employee, EmployeeId, Weekday};

/// Owns employee records and their availability index.
#[derive(Debug, Clone, Default)]
pub struct EmployeeDirectory {
    employees: HashMap<EmployeeId, Employee>,
    index: AvailabilityIndex,
}

impl EmployeeDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces an employee record and indexes its free days.
    ///
    /// If the id is already registered, its previous index entries are
    /// retracted first so the index reflects only the latest registration.
    /// Days on which the employee was already assigned stay unavailable.
    pub fn register(&mut self, employee: Employee) {
        if let Some(previous) = self.employees.remove(&employee.id) {
            debug!(employee_id = previous.id, "replacing employee registration");
            for day in Weekday::ALL {
                if previous.is_available(day) {
                    self.index.remove(previous.crew_type, previous.id, day);
                }
            }
        }

        for day in Weekday::ALL {
            if employee.is_available(day) {
                self.index.insert(employee.crew_type, employee.id, day);
            }
        }
        self.employees.insert(employee.id, employee);
    }

    /// Applies a new availability vector to a registered employee.
    ///
    /// Only days whose flag flips touch the index: false to true pushes the
    /// employee on top of that day's pool, true to false removes its entry.
    /// A day on which the employee was already assigned is never re-added.
    /// Runs in time proportional to the work week, not the pool sizes.
    ///
    /// # Errors
    /// [`SchedulerError::UnknownEmployee`] if `employee_id` was never
    /// registered. Nothing is changed in that case.
    pub fn update_availability(
        &mut self,
        employee_id: EmployeeId,
        availability: Availability,
    ) -> Result<(), SchedulerError> {
        let employee = self
            .employees
            .get_mut(&employee_id)
            .ok_or(SchedulerError::UnknownEmployee(employee_id))?;

        for day in Weekday::ALL {
            let was_free = employee.availability[day.index()];
            let is_free = availability[day.index()];
            match (was_free, is_free) {
                (false, true) => {
                    self.index.insert(employee.crew_type, employee_id, day);
                }
                (true, false) => {
                    self.index.remove(employee.crew_type, employee_id, day);
                }
                _ => {}
            }
        }

        employee.availability = availability;
        debug!(employee_id, ?availability, "availability updated");
        Ok(())
    }

    /// Looks up an employee.
    pub fn get(&self, employee_id: EmployeeId) -> Option<&Employee> {
        self.employees.get(&employee_id)
    }

    /// All employees, ordered by id.
    pub fn employees(&self) -> Vec<&Employee> {
        let mut all: Vec<&Employee> = self.employees.values().collect();
        all.sort_by_key(|e| e.id);
        all
    }

    /// Number of registered employees of a crew type.
    pub fn headcount(&self, crew_type: CrewType) -> usize {
        self.employees
            .values()
            .filter(|e| e.crew_type == crew_type)
            .count()
    }

    /// Number of registered employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Whether no employee is registered.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Read-only view of the availability index.
    pub fn index(&self) -> &AvailabilityIndex {
        &self.index
    }

    pub(crate) fn index_mut(&mut self) -> &mut AvailabilityIndex {
        &mut self.index
    }
}
