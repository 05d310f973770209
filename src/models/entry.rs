//! Timetable entry (committed assignment) model.
//!
//! An entry assigns a subject, teacher, and room to one class for one
//! period. The `(class, slot)` pair is the entry's identity: a class is
//! never in two places in the same period.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::PeriodSlot;

/// Identity of a timetable entry: which class, which period.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryKey {
    /// Class name.
    pub class: String,
    /// Period slot.
    pub slot: PeriodSlot,
}

impl EntryKey {
    /// Creates a key.
    pub fn new(class: impl Into<String>, slot: PeriodSlot) -> Self {
        Self {
            class: class.into(),
            slot,
        }
    }
}

impl fmt::Display for EntryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.class, self.slot)
    }
}

/// A committed assignment of subject/teacher/room to one class for one period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimetableEntry {
    /// Class name.
    pub class: String,
    /// Period slot.
    pub slot: PeriodSlot,
    /// Subject name.
    pub subject: String,
    /// Teacher code.
    pub teacher: String,
    /// Room name.
    pub room: String,
    /// When the entry was committed.
    pub created_at: DateTime<Utc>,
}

impl TimetableEntry {
    /// Creates an entry timestamped now.
    pub fn new(
        class: impl Into<String>,
        slot: PeriodSlot,
        subject: impl Into<String>,
        teacher: impl Into<String>,
        room: impl Into<String>,
    ) -> Self {
        Self {
            class: class.into(),
            slot,
            subject: subject.into(),
            teacher: teacher.into(),
            room: room.into(),
            created_at: Utc::now(),
        }
    }

    /// The entry's identity.
    pub fn key(&self) -> EntryKey {
        EntryKey::new(self.class.clone(), self.slot)
    }
}

impl fmt::Display for TimetableEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} ({} in {})",
            self.class, self.slot, self.subject, self.teacher, self.room
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Day;

    #[test]
    fn test_entry_key() {
        let slot = PeriodSlot::new(Day::Monday, 1);
        let e = TimetableEntry::new("10-A", slot, "Mathematics", "MATH01", "R101");

        assert_eq!(e.key(), EntryKey::new("10-A", slot));
        assert_eq!(e.key().to_string(), "10-A @ Monday P1");
    }

    #[test]
    fn test_entry_serde_round_trip() {
        let slot = PeriodSlot::new(Day::Friday, 4);
        let e = TimetableEntry::new("10-A", slot, "Physics", "PHY01", "Lab 1");

        let json = serde_json::to_string(&e).unwrap();
        let back: TimetableEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back.class, "10-A");
        assert_eq!(back.slot, slot);
        assert_eq!(back.teacher, "PHY01");
    }
}
