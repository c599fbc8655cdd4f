//! Requirement catalog.
//!
//! Maps each job category to an ordered list of alternative staffing
//! requirement sets. Any single alternative is enough to staff a job; the
//! engine tries them strictly in declaration order and commits to the
//! first one the day's availability can satisfy.
//!
//! The catalog is an explicit ordered list rather than a multimap, so the
//! alternative order is part of the data and matching stays deterministic.

use serde::{Deserialize, Serialize};

use crate::models::{CrewType, JobCategory};

/// Minimum headcount of one crew type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewNeed {
    /// Required crew type.
    pub crew_type: CrewType,
    /// Minimum number of employees of that type.
    pub count: usize,
}

/// One staffing alternative: a list of crew needs that must all hold.
///
/// Need order governs consumption order when the alternative is committed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementSet {
    /// Crew needs in consumption order.
    pub needs: Vec<CrewNeed>,
}

impl RequirementSet {
    /// Creates an empty requirement set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a crew need.
    pub fn with(mut self, crew_type: CrewType, count: usize) -> Self {
        self.needs.push(CrewNeed { crew_type, count });
        self
    }

    /// Total headcount demanded per crew type, in first-mention order.
    ///
    /// Repeated crew types are summed so satisfiability is judged on the
    /// combined demand.
    pub fn demand(&self) -> Vec<(CrewType, usize)> {
        let mut demand: Vec<(CrewType, usize)> = Vec::with_capacity(self.needs.len());
        for need in &self.needs {
            match demand.iter_mut().find(|(t, _)| *t == need.crew_type) {
                Some((_, total)) => *total += need.count,
                None => demand.push((need.crew_type, need.count)),
            }
        }
        demand
    }

    /// Total crew size.
    pub fn headcount(&self) -> usize {
        self.needs.iter().map(|n| n.count).sum()
    }

    /// Whether the set has no needs.
    pub fn is_empty(&self) -> bool {
        self.needs.is_empty()
    }
}

/// Alternatives registered for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Job category the alternatives apply to.
    pub category: JobCategory,
    /// Alternatives in preference order.
    pub alternatives: Vec<RequirementSet>,
}

/// Static, read-only staffing catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementCatalog {
    /// One entry per covered category, in declaration order.
    pub entries: Vec<CatalogEntry>,
}

impl RequirementCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard construction catalog.
    ///
    /// | Category | Alternatives (in order) |
    /// |----------|-------------------------|
    /// | SingleStory | 1 certified |
    /// | TwoStory | 1 certified + 1 laborer; 1 certified + 1 pending |
    /// | Commercial | 2 certified + 2 pending + 4 laborers; 6 certified + 2 pending; 2 certified + 6 pending |
    pub fn standard() -> Self {
        use CrewType::*;

        Self::new()
            .with_alternative(
                JobCategory::SingleStory,
                RequirementSet::new().with(CertifiedInstaller, 1),
            )
            .with_alternative(
                JobCategory::TwoStory,
                RequirementSet::new()
                    .with(CertifiedInstaller, 1)
                    .with(Laborer, 1),
            )
            .with_alternative(
                JobCategory::TwoStory,
                RequirementSet::new()
                    .with(CertifiedInstaller, 1)
                    .with(PendingCertification, 1),
            )
            .with_alternative(
                JobCategory::Commercial,
                RequirementSet::new()
                    .with(CertifiedInstaller, 2)
                    .with(PendingCertification, 2)
                    .with(Laborer, 4),
            )
            .with_alternative(
                JobCategory::Commercial,
                RequirementSet::new()
                    .with(CertifiedInstaller, 6)
                    .with(PendingCertification, 2),
            )
            .with_alternative(
                JobCategory::Commercial,
                RequirementSet::new()
                    .with(CertifiedInstaller, 2)
                    .with(PendingCertification, 6),
            )
    }

    /// Appends an alternative for `category`, after any already declared.
    pub fn with_alternative(mut self, category: JobCategory, set: RequirementSet) -> Self {
        self.add_alternative(category, set);
        self
    }

    /// Appends an alternative for `category`, after any already declared.
    pub fn add_alternative(&mut self, category: JobCategory, set: RequirementSet) {
        match self.entries.iter_mut().find(|e| e.category == category) {
            Some(entry) => entry.alternatives.push(set),
            None => self.entries.push(CatalogEntry {
                category,
                alternatives: vec![set],
            }),
        }
    }

    /// Alternatives for a category in preference order (empty if none).
    pub fn alternatives(&self, category: JobCategory) -> &[RequirementSet] {
        self.entries
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.alternatives.as_slice())
            .unwrap_or(&[])
    }

    /// Whether at least one alternative exists for `category`.
    pub fn covers(&self, category: JobCategory) -> bool {
        !self.alternatives(category).is_empty()
    }

    /// Parses a catalog from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
