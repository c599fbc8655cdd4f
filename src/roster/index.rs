//! Availability index.
//!
//! For every `(crew type, day)` pair the index keeps a pool of employee
//! ids that are free that day. Pools are stacks: the most recently
//! inserted id is consumed first.
//!
//! A pool is a `Vec` of entries in insertion order. Removing an employee
//! by identity leaves a tombstone at its position, found through the
//! position map `(employee, day) -> position`, so insert, remove and pop
//! are O(1) amortized. Pools compact once tombstones outnumber live
//! entries.
//!
//! Pops are remembered per `(employee, day)`: an employee handed to a job
//! on some day never re-enters that day's pool, whatever later
//! availability updates say.
//!
//! The index only holds ids. Employee records live in the
//! [`EmployeeDirectory`](super::EmployeeDirectory).

use std::collections::{HashMap, HashSet};

use tracing::trace;

use crate::catalog::RequirementSet;
use crate::models::{CrewType, EmployeeId, Weekday, WORK_DAYS};

const MIN_COMPACT_TOMBSTONES: usize = 16;

/// Free employees of one crew type on one day, in stack order.
///
/// The top entry is never a tombstone.
#[derive(Debug, Clone, Default)]
struct AvailabilityPool {
    entries: Vec<Option<EmployeeId>>,
    live: usize,
}

impl AvailabilityPool {
    fn push(&mut self, employee_id: EmployeeId) -> usize {
        self.entries.push(Some(employee_id));
        self.live += 1;
        self.entries.len() - 1
    }

    fn take(&mut self, position: usize) -> Option<EmployeeId> {
        let employee_id = self.entries.get_mut(position)?.take()?;
        self.live -= 1;
        self.trim();
        Some(employee_id)
    }

    fn pop(&mut self) -> Option<EmployeeId> {
        let employee_id = self.entries.pop().flatten()?;
        self.live -= 1;
        self.trim();
        Some(employee_id)
    }

    fn trim(&mut self) {
        while matches!(self.entries.last(), Some(None)) {
            self.entries.pop();
        }
    }

    fn needs_compaction(&self) -> bool {
        let tombstones = self.entries.len() - self.live;
        tombstones > self.live.max(MIN_COMPACT_TOMBSTONES)
    }

    /// Drops tombstones and returns the new `(position, employee)` pairs.
    fn compact(&mut self) -> Vec<(usize, EmployeeId)> {
        self.entries.retain(Option::is_some);
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(position, entry)| entry.map(|id| (position, id)))
            .collect()
    }

    fn members(&self) -> impl Iterator<Item = EmployeeId> + '_ {
        self.entries.iter().flatten().copied()
    }
}

/// `(crew type, day) -> pool` view over the employee directory.
#[derive(Debug, Clone, Default)]
pub struct AvailabilityIndex {
    pools: HashMap<CrewType, [AvailabilityPool; WORK_DAYS]>,
    positions: HashMap<(EmployeeId, usize), usize>,
    consumed: HashSet<(EmployeeId, usize)>,
}

impl AvailabilityIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of free employees of `crew_type` on `day`.
    pub fn pool_len(&self, crew_type: CrewType, day: Weekday) -> usize {
        self.pools
            .get(&crew_type)
            .map_or(0, |days| days[day.index()].live)
    }

    /// Pool contents from bottom to top (the last id is consumed first).
    pub fn pool(&self, crew_type: CrewType, day: Weekday) -> Vec<EmployeeId> {
        self.pools
            .get(&crew_type)
            .map(|days| days[day.index()].members().collect())
            .unwrap_or_default()
    }

    /// Whether `employee_id` is in a pool for `day`.
    pub fn contains(&self, employee_id: EmployeeId, day: Weekday) -> bool {
        self.positions.contains_key(&(employee_id, day.index()))
    }

    /// Whether `employee_id` has already been assigned to a job on `day`.
    pub fn is_consumed(&self, employee_id: EmployeeId, day: Weekday) -> bool {
        self.consumed.contains(&(employee_id, day.index()))
    }

    /// Total number of entries across all pools.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether every pool is empty.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Whether every need of `set` can be met at once from the pools for `day`.
    ///
    /// Pure predicate over the current pool sizes; nothing is consumed.
    pub fn can_satisfy(&self, set: &RequirementSet, day: Weekday) -> bool {
        set.demand()
            .into_iter()
            .all(|(crew_type, count)| self.pool_len(crew_type, day) >= count)
    }

    /// Pushes an employee on top of the `(crew_type, day)` pool.
    ///
    /// Returns `false` without change if the employee is already indexed
    /// for that day or was already assigned to a job that day.
    pub(crate) fn insert(
        &mut self,
        crew_type: CrewType,
        employee_id: EmployeeId,
        day: Weekday,
    ) -> bool {
        let key = (employee_id, day.index());
        if self.positions.contains_key(&key) || self.consumed.contains(&key) {
            return false;
        }

        let position = self.pools.entry(crew_type).or_default()[day.index()].push(employee_id);
        self.positions.insert(key, position);
        trace!(employee_id, %crew_type, %day, "indexed");
        true
    }

    /// Removes an employee's entry from the `(crew_type, day)` pool.
    ///
    /// Returns `false` if there was no entry.
    pub(crate) fn remove(
        &mut self,
        crew_type: CrewType,
        employee_id: EmployeeId,
        day: Weekday,
    ) -> bool {
        let Some(position) = self.positions.remove(&(employee_id, day.index())) else {
            return false;
        };

        if let Some(days) = self.pools.get_mut(&crew_type) {
            let pool = &mut days[day.index()];
            pool.take(position);
            if pool.needs_compaction() {
                for (position, id) in pool.compact() {
                    self.positions.insert((id, day.index()), position);
                }
            }
        }
        trace!(employee_id, %crew_type, %day, "unindexed");
        true
    }

    /// Pops the most recently inserted employee from a pool and marks it
    /// consumed for that day.
    pub(crate) fn pop(&mut self, crew_type: CrewType, day: Weekday) -> Option<EmployeeId> {
        let employee_id = self.pools.get_mut(&crew_type)?[day.index()].pop()?;
        self.positions.remove(&(employee_id, day.index()));
        self.consumed.insert((employee_id, day.index()));
        Some(employee_id)
    }

    /// Consumes the crew for `set` on `day`.
    ///
    /// Needs are served in declaration order, each by popping `count` ids
    /// off its pool. Callers check [`can_satisfy`](Self::can_satisfy) first.
    pub(crate) fn consume(&mut self, set: &RequirementSet, day: Weekday) -> Vec<EmployeeId> {
        let mut crew = Vec::with_capacity(set.headcount());
        for need in &set.needs {
            for _ in 0..need.count {
                match self.pop(need.crew_type, day) {
                    Some(employee_id) => crew.push(employee_id),
                    None => break,
                }
            }
        }
        crew
    }
}
