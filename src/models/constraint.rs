//! Period-blocking constraints.
//!
//! A constraint forbids scheduling in one period, either for every
//! teacher (global block — assemblies, breaks) or for one specific
//! teacher (personal unavailability).

use serde::{Deserialize, Serialize};

use super::PeriodSlot;

/// A rule blocking a period for all teachers or for one teacher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Constraint {
    /// Blocked teacher code; `None` blocks the period for everyone.
    pub teacher: Option<String>,
    /// The blocked period.
    pub slot: PeriodSlot,
    /// Whether the block is active (inactive rows are kept for audit).
    pub blocked: bool,
    /// Free-text note (e.g., "staff meeting").
    pub note: String,
}

impl Constraint {
    /// Creates an active block for every teacher in the given period.
    pub fn global_block(slot: PeriodSlot) -> Self {
        Self {
            teacher: None,
            slot,
            blocked: true,
            note: String::new(),
        }
    }

    /// Creates an active block for one teacher in the given period.
    pub fn teacher_block(teacher: impl Into<String>, slot: PeriodSlot) -> Self {
        Self {
            teacher: Some(teacher.into()),
            slot,
            blocked: true,
            note: String::new(),
        }
    }

    /// Sets the note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// Deactivates the block.
    pub fn inactive(mut self) -> Self {
        self.blocked = false;
        self
    }

    /// Whether this constraint blocks the given teacher in the given slot.
    ///
    /// A global block (no teacher set) applies to every teacher.
    pub fn applies_to(&self, teacher: &str, slot: PeriodSlot) -> bool {
        self.blocked
            && self.slot == slot
            && self.teacher.as_deref().map_or(true, |t| t == teacher)
    }
}
