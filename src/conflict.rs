//! Hard-constraint validation for timetable entries.
//!
//! Decides whether a candidate entry is legal against a snapshot of the
//! committed entry set, the master data, and the blocking constraints.
//! Used for both bulk generation and ad-hoc manual edits. Detects:
//! - Unqualified teacher (no teacher-subject qualification)
//! - Teacher double-booked in the same period
//! - Room double-booked in the same period
//! - Period blocked by a constraint (global or teacher-specific)
//! - Teacher's daily period cap exceeded
//!
//! All functions here are pure over the provided snapshot; nothing is
//! mutated. Checks never short-circuit, so a manual edit can surface
//! every violated rule at once.

use crate::models::{Day, EntryKey, MasterData, PeriodSlot, Teacher, TimetableEntry};

/// A violated scheduling rule.
#[derive(Debug, Clone, PartialEq)]
pub struct ConflictViolation {
    /// Violation category.
    pub kind: ConflictKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of scheduling conflicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConflictKind {
    /// The teacher has no qualification for the entry's subject.
    UnqualifiedTeacher,
    /// The teacher is already assigned to another class in this period.
    TeacherClash,
    /// The room is already assigned to another class in this period.
    RoomClash,
    /// The period is blocked by a constraint for this teacher.
    BlockedPeriod,
    /// The entry would exceed the teacher's daily period cap.
    DailyLoadExceeded,
}

impl ConflictViolation {
    fn new(kind: ConflictKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a candidate entry against the committed entry set.
///
/// `exclude` is the identity of the entry being updated, if any, so an
/// update does not conflict with its own prior state.
///
/// Checks performed, in order:
/// 1. Teacher is qualified for the subject.
/// 2. Teacher is not already teaching in this period.
/// 3. Room is not already occupied in this period.
/// 4. No active constraint blocks this teacher in this period.
/// 5. The teacher's daily cap is not exceeded.
///
/// The daily-load check is skipped when the teacher is unknown to the
/// master data (the cap cannot be read; the qualification check will
/// already have fired).
///
/// # Returns
/// All violations found; an empty vector means the entry is legal.
pub fn validate_entry(
    candidate: &TimetableEntry,
    entries: &[TimetableEntry],
    exclude: Option<&EntryKey>,
    data: &MasterData,
) -> Vec<ConflictViolation> {
    let mut violations = Vec::new();

    if !data.is_qualified(&candidate.teacher, &candidate.subject) {
        violations.push(ConflictViolation::new(
            ConflictKind::UnqualifiedTeacher,
            format!(
                "{} is not qualified to teach {}",
                candidate.teacher, candidate.subject
            ),
        ));
    }

    if teacher_clash(&candidate.teacher, candidate.slot, entries, exclude) {
        violations.push(ConflictViolation::new(
            ConflictKind::TeacherClash,
            format!(
                "{} is already assigned to another class in {}",
                candidate.teacher, candidate.slot
            ),
        ));
    }

    if room_clash(&candidate.room, candidate.slot, entries, exclude) {
        violations.push(ConflictViolation::new(
            ConflictKind::RoomClash,
            format!(
                "{} is already assigned to another class in {}",
                candidate.room, candidate.slot
            ),
        ));
    }

    if period_blocked(data, &candidate.teacher, candidate.slot) {
        violations.push(ConflictViolation::new(
            ConflictKind::BlockedPeriod,
            format!("{} is blocked by a timetable constraint", candidate.slot),
        ));
    }

    if let Some(teacher) = data.teacher(&candidate.teacher) {
        if daily_load_exceeded(teacher, candidate.slot.day, entries, exclude) {
            violations.push(ConflictViolation::new(
                ConflictKind::DailyLoadExceeded,
                format!(
                    "{} would exceed {} periods per day on {}",
                    candidate.teacher, teacher.max_periods_per_day, candidate.slot.day
                ),
            ));
        }
    }

    violations
}

/// Whether a committed entry (other than `exclude`) already has this
/// teacher in this slot.
pub fn teacher_clash(
    teacher: &str,
    slot: PeriodSlot,
    entries: &[TimetableEntry],
    exclude: Option<&EntryKey>,
) -> bool {
    entries
        .iter()
        .filter(|e| exclude.is_none_or(|k| e.key() != *k))
        .any(|e| e.teacher == teacher && e.slot == slot)
}

/// Whether a committed entry (other than `exclude`) already has this
/// room in this slot.
pub fn room_clash(
    room: &str,
    slot: PeriodSlot,
    entries: &[TimetableEntry],
    exclude: Option<&EntryKey>,
) -> bool {
    entries
        .iter()
        .filter(|e| exclude.is_none_or(|k| e.key() != *k))
        .any(|e| e.room == room && e.slot == slot)
}

/// Whether an active constraint (global or teacher-specific) blocks the
/// teacher in the given slot.
pub fn period_blocked(data: &MasterData, teacher: &str, slot: PeriodSlot) -> bool {
    data.constraints.iter().any(|c| c.applies_to(teacher, slot))
}

/// Whether one more entry on `day` would push the teacher past their
/// daily cap, counting committed entries other than `exclude`.
pub fn daily_load_exceeded(
    teacher: &Teacher,
    day: Day,
    entries: &[TimetableEntry],
    exclude: Option<&EntryKey>,
) -> bool {
    let committed = entries
        .iter()
        .filter(|e| exclude.is_none_or(|k| e.key() != *k))
        .filter(|e| e.teacher == teacher.code && e.slot.day == day)
        .count() as u32;
    committed + 1 > teacher.max_periods_per_day
}

/// Whether a teacher can take one more period in the given slot:
/// no clash, no blocking constraint, daily cap not exceeded.
///
/// This is the generation fast path; it composes the same checks as
/// [`validate_entry`] (rules 2, 4, and 5) so bulk generation and manual
/// edits can never disagree. Qualification is checked separately because
/// generation only considers teachers drawn from the qualification list.
pub fn teacher_is_available(
    data: &MasterData,
    teacher: &Teacher,
    slot: PeriodSlot,
    entries: &[TimetableEntry],
) -> bool {
    !teacher_clash(&teacher.code, slot, entries, None)
        && !period_blocked(data, &teacher.code, slot)
        && !daily_load_exceeded(teacher, slot.day, entries, None)
}

/// Whether a room has no committed entry in the given slot.
pub fn room_is_free(room: &str, slot: PeriodSlot, entries: &[TimetableEntry]) -> bool {
    !room_clash(room, slot, entries, None)
}
