//! Master-data integrity validation.
//!
//! Checks structural integrity of the administrative data before
//! generation. Detects:
//! - Duplicate identities (teacher codes, room/class/subject names,
//!   period slots, qualification pairs)
//! - Qualifications and constraints referencing unknown entities
//! - Non-positive capacities and caps
//!
//! These are data-entry mistakes, distinct from the scheduling conflicts
//! in [`crate::conflict`]: a snapshot that fails here describes an
//! inconsistent school, not an unschedulable one.

use std::collections::HashSet;

use crate::models::MasterData;

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
    /// Two entities share the same identity.
    DuplicateId,
    /// A qualification or constraint references an entity that doesn't exist.
    UnknownReference,
    /// A count or capacity that must be positive is zero.
    NonPositiveValue,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the master-data snapshot.
///
/// Checks:
/// 1. No duplicate teacher codes, room names, class names, or subject names
/// 2. No duplicate `(day, order)` period slots
/// 3. No duplicate `(teacher, subject)` qualification pairs
/// 4. All qualification references point to existing teachers and subjects
/// 5. All constraint references point to existing periods and teachers
/// 6. `max_periods_per_day`, `capacity`, and `strength` are positive
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_master_data(data: &MasterData) -> ValidationResult {
    let mut errors = Vec::new();

    let mut teacher_codes = HashSet::new();
    for t in &data.teachers {
        if !teacher_codes.insert(t.code.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate teacher code: {}", t.code),
            ));
        }
        if t.max_periods_per_day == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveValue,
                format!("Teacher '{}' has max_periods_per_day of 0", t.code),
            ));
        }
    }

    let mut room_names = HashSet::new();
    for r in &data.rooms {
        if !room_names.insert(r.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate room name: {}", r.name),
            ));
        }
        if r.capacity == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveValue,
                format!("Room '{}' has capacity 0", r.name),
            ));
        }
    }

    let mut class_names = HashSet::new();
    for c in &data.classes {
        if !class_names.insert(c.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate class name: {}", c.name),
            ));
        }
        if c.strength == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveValue,
                format!("Class '{}' has strength 0", c.name),
            ));
        }
    }

    let mut subject_names = HashSet::new();
    for s in &data.subjects {
        if !subject_names.insert(s.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate subject name: {}", s.name),
            ));
        }
    }

    let mut slots = HashSet::new();
    for p in &data.periods {
        if !slots.insert(p.slot) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate period slot: {}", p.slot),
            ));
        }
    }

    let mut qualification_pairs = HashSet::new();
    for q in &data.qualifications {
        if !qualification_pairs.insert((q.teacher.as_str(), q.subject.as_str())) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate qualification: {} / {}", q.teacher, q.subject),
            ));
        }
        if !teacher_codes.contains(q.teacher.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownReference,
                format!("Qualification references unknown teacher '{}'", q.teacher),
            ));
        }
        if !subject_names.contains(q.subject.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownReference,
                format!("Qualification references unknown subject '{}'", q.subject),
            ));
        }
    }

    for c in &data.constraints {
        if !slots.contains(&c.slot) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownReference,
                format!("Constraint references unknown period {}", c.slot),
            ));
        }
        if let Some(teacher) = &c.teacher {
            if !teacher_codes.contains(teacher.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownReference,
                    format!("Constraint references unknown teacher '{teacher}'"),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Constraint, Day, Period, PeriodSlot, Qualification, Room, SchoolClass, Subject, Teacher,
    };

    fn sample_data() -> MasterData {
        MasterData::new()
            .with_class(SchoolClass::new("10-A"))
            .with_period(Period::new(Day::Monday, 1))
            .with_room(Room::new("R101"))
            .with_subject(Subject::new("Mathematics"))
            .with_teacher(Teacher::new("MATH01"))
            .with_qualification(Qualification::new("MATH01", "Mathematics"))
    }

    #[test]
    fn test_valid_data() {
        assert!(validate_master_data(&sample_data()).is_ok());
    }

    #[test]
    fn test_duplicate_teacher_code() {
        let data = sample_data().with_teacher(Teacher::new("MATH01"));
        let errors = validate_master_data(&data).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("teacher")));
    }

    #[test]
    fn test_duplicate_period_slot() {
        let data = sample_data().with_period(Period::new(Day::Monday, 1));
        let errors = validate_master_data(&data).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("period")));
    }

    #[test]
    fn test_duplicate_qualification() {
        let data = sample_data().with_qualification(Qualification::new("MATH01", "Mathematics"));
        let errors = validate_master_data(&data).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId
                && e.message.contains("qualification")));
    }

    #[test]
    fn test_qualification_unknown_references() {
        let data = sample_data().with_qualification(Qualification::new("GHOST", "Alchemy"));
        let errors = validate_master_data(&data).unwrap_err();
        let unknown: Vec<_> = errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::UnknownReference)
            .collect();
        assert_eq!(unknown.len(), 2); // Teacher and subject both unknown
    }

    #[test]
    fn test_constraint_unknown_references() {
        let data = sample_data()
            .with_constraint(Constraint::teacher_block(
                "GHOST",
                PeriodSlot::new(Day::Friday, 9),
            ));
        let errors = validate_master_data(&data).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownReference
                && e.message.contains("period")));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownReference
                && e.message.contains("GHOST")));
    }

    #[test]
    fn test_non_positive_values() {
        let data = sample_data()
            .with_teacher(Teacher::new("T0").with_max_periods_per_day(0))
            .with_room(Room::new("R0").with_capacity(0))
            .with_class(SchoolClass::new("0-Z").with_strength(0));

        let errors = validate_master_data(&data).unwrap_err();
        let non_positive = errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::NonPositiveValue)
            .count();
        assert_eq!(non_positive, 3);
    }

    #[test]
    fn test_multiple_errors_collected() {
        let data = sample_data()
            .with_teacher(Teacher::new("MATH01"))
            .with_period(Period::new(Day::Monday, 1));
        let errors = validate_master_data(&data).unwrap_err();
        assert!(errors.len() >= 2);
    }
}
