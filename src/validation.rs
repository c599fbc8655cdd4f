//! Input validation for crew scheduling problems.
//!
//! Checks a roster against a catalog before scheduling. Detects:
//! - Duplicate employee IDs
//! - Job categories without any staffing alternative
//! - Requirement sets with no crew needs
//! - Job categories that no alternative can staff with the registered headcount
//!
//! None of these stop the scheduler from running; they explain why some
//! jobs would stay pending or why a registration would be overwritten.

use std::collections::{HashMap, HashSet};

use crate::catalog::RequirementCatalog;
use crate::models::{CrewType, Employee, Job, JobCategory};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two employees share the same ID.
    DuplicateId,
    /// A job's category has no alternative in the catalog.
    MissingRequirements,
    /// An alternative lists no crew needs.
    EmptyRequirementSet,
    /// No alternative fits the registered headcount, even on a full week.
    Unstaffable,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a roster against a catalog.
///
/// Checks:
/// 1. No duplicate employee IDs
/// 2. Every job category in use has at least one alternative
/// 3. No alternative is empty
/// 4. Every job category in use has an alternative whose demand does not
///    exceed the number of registered employees per crew type
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    jobs: &[Job],
    employees: &[Employee],
    catalog: &RequirementCatalog,
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut ids = HashSet::new();
    let mut headcount: HashMap<CrewType, usize> = HashMap::new();
    for e in employees {
        if !ids.insert(e.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate employee ID: {}", e.id),
            ));
        }
        *headcount.entry(e.crew_type).or_insert(0) += 1;
    }

    for entry in &catalog.entries {
        for (i, set) in entry.alternatives.iter().enumerate() {
            if set.is_empty() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::EmptyRequirementSet,
                    format!("Alternative {i} for {} has no crew needs", entry.category),
                ));
            }
        }
    }

    // Categories in first-use order
    let mut seen = HashSet::new();
    let categories: Vec<JobCategory> = jobs
        .iter()
        .map(|j| j.category)
        .filter(|c| seen.insert(*c))
        .collect();

    for category in categories {
        let alternatives = catalog.alternatives(category);
        if alternatives.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingRequirements,
                format!("No staffing alternative for {category} jobs"),
            ));
            continue;
        }

        let staffable = alternatives.iter().any(|set| {
            set.demand()
                .into_iter()
                .all(|(t, n)| headcount.get(&t).copied().unwrap_or(0) >= n)
        });
        if !staffable {
            errors.push(ValidationError::new(
                ValidationErrorKind::Unstaffable,
                format!("No alternative for {category} jobs fits the registered crew"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
