//! Master-data snapshot.
//!
//! `MasterData` bundles every administrative entity the engine reads:
//! classes, periods, rooms, subjects, teachers, qualifications, and
//! blocking constraints. The engine treats it as a read-only snapshot —
//! edits happen in the administrative layer between generation runs.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{
    Constraint, Period, PeriodSlot, Qualification, Room, SchoolClass, Subject, Teacher,
};

/// Read-only input snapshot for validation and generation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MasterData {
    /// Classes to schedule.
    pub classes: Vec<SchoolClass>,
    /// Weekly period grid.
    pub periods: Vec<Period>,
    /// Available rooms.
    pub rooms: Vec<Room>,
    /// Taught subjects.
    pub subjects: Vec<Subject>,
    /// Teaching staff.
    pub teachers: Vec<Teacher>,
    /// Teacher-subject qualifications.
    pub qualifications: Vec<Qualification>,
    /// Period-blocking constraints.
    pub constraints: Vec<Constraint>,
}

impl MasterData {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a class.
    pub fn with_class(mut self, class: SchoolClass) -> Self {
        self.classes.push(class);
        self
    }

    /// Adds a period.
    pub fn with_period(mut self, period: Period) -> Self {
        self.periods.push(period);
        self
    }

    /// Adds a room.
    pub fn with_room(mut self, room: Room) -> Self {
        self.rooms.push(room);
        self
    }

    /// Adds a subject.
    pub fn with_subject(mut self, subject: Subject) -> Self {
        self.subjects.push(subject);
        self
    }

    /// Adds a teacher.
    pub fn with_teacher(mut self, teacher: Teacher) -> Self {
        self.teachers.push(teacher);
        self
    }

    /// Adds a teacher-subject qualification.
    pub fn with_qualification(mut self, qualification: Qualification) -> Self {
        self.qualifications.push(qualification);
        self
    }

    /// Adds a blocking constraint.
    pub fn with_constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Finds a teacher by code.
    pub fn teacher(&self, code: &str) -> Option<&Teacher> {
        self.teachers.iter().find(|t| t.code == code)
    }

    /// Finds a room by name.
    pub fn room(&self, name: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.name == name)
    }

    /// Finds a class by name.
    pub fn class(&self, name: &str) -> Option<&SchoolClass> {
        self.classes.iter().find(|c| c.name == name)
    }

    /// Finds a subject by name.
    pub fn subject(&self, name: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.name == name)
    }

    /// Whether a qualification exists for the given teacher and subject.
    pub fn is_qualified(&self, teacher: &str, subject: &str) -> bool {
        self.qualifications
            .iter()
            .any(|q| q.teacher == teacher && q.subject == subject)
    }

    /// All teachers qualified for a subject, in staff-list order.
    pub fn qualified_teachers(&self, subject: &str) -> Vec<&Teacher> {
        self.teachers
            .iter()
            .filter(|t| self.is_qualified(&t.code, subject))
            .collect()
    }

    /// Period slots sorted by day then order — the engine's walk sequence.
    pub fn slots_in_order(&self) -> Vec<PeriodSlot> {
        let mut slots: Vec<PeriodSlot> = self.periods.iter().map(|p| p.slot).collect();
        slots.sort();
        slots
    }

    /// Initial subject → periods-per-week map for one class.
    ///
    /// Every class takes every subject at its default weekly load; a
    /// per-class curriculum would refine this.
    pub fn default_subject_load(&self) -> HashMap<String, u32> {
        self.subjects
            .iter()
            .map(|s| (s.name.clone(), s.default_periods_per_week))
            .collect()
    }
}
