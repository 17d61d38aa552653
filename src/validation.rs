//! Input validation for class scheduling.
//!
//! The schedulers accept any input and return an empty result for an empty
//! weekday set. Callers that persist a class run these checks first.
//! Detects:
//! - No class weekday selected
//! - Empty curriculum
//! - Duplicate mission IDs
//! - Missions without a title

use std::collections::HashSet;

use crate::models::{Curriculum, RecurrenceConfig};

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
    /// No weekday selected; both schedulers would return nothing.
    EmptyWeekdaySelection,
    /// Curriculum has no missions.
    EmptyCurriculum,
    /// Two missions share the same ID.
    DuplicateMissionId,
    /// A mission has a blank title.
    BlankMissionTitle,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates class input before scheduling and persisting.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
pub fn validate_class_input(
    config: &RecurrenceConfig,
    curriculum: &Curriculum,
) -> ValidationResult {
    let mut errors = Vec::new();

    if config.weekdays().is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyWeekdaySelection,
            "Select at least one class day",
        ));
    }

    if curriculum.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyCurriculum,
            "Curriculum has no missions",
        ));
    }

    let mut ids = HashSet::new();
    for (index, mission) in curriculum.iter().enumerate() {
        if !ids.insert(mission.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateMissionId,
                format!("Duplicate mission ID: {}", mission.id),
            ));
        }
        if mission.title.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankMissionTitle,
                format!("Mission '{}' (position {}) has no title", mission.id, index + 1),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
