//! Weekly period model.
//!
//! A period is a recurring weekly time slot identified by day and
//! order-within-day (e.g., Monday, 2nd period). Wall-clock start/end
//! times are optional display metadata; identity and ordering are
//! entirely determined by `(day, order)`.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Day of the teaching week (Monday through Saturday).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Day {
    /// All teaching days in week order.
    pub const ALL: [Day; 6] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
    ];

    /// Day number (1 = Monday .. 6 = Saturday).
    pub fn number(self) -> u8 {
        match self {
            Day::Monday => 1,
            Day::Tuesday => 2,
            Day::Wednesday => 3,
            Day::Thursday => 4,
            Day::Friday => 5,
            Day::Saturday => 6,
        }
    }

    /// Parses a day number (1 = Monday .. 6 = Saturday).
    pub fn from_number(n: u8) -> Option<Day> {
        Day::ALL.get(n.checked_sub(1)? as usize).copied()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
        };
        f.write_str(name)
    }
}

/// The value-type identity of a period: day plus order-within-day.
///
/// Entries, constraints, and availability checks all reference periods
/// by slot. Ordering is by `(day, order)` — the sequence the allocation
/// engine walks.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct PeriodSlot {
    /// Day of week.
    pub day: Day,
    /// Position within the day (1-based).
    pub order: u32,
}

impl PeriodSlot {
    /// Creates a slot.
    pub fn new(day: Day, order: u32) -> Self {
        Self { day, order }
    }
}

impl fmt::Display for PeriodSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} P{}", self.day, self.order)
    }
}

/// A weekly recurring time slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Period {
    /// Identity: `(day, order)` is unique across the period set.
    pub slot: PeriodSlot,
    /// Optional wall-clock start.
    pub start_time: Option<NaiveTime>,
    /// Optional wall-clock end.
    pub end_time: Option<NaiveTime>,
}

impl Period {
    /// Creates a period without wall-clock times.
    pub fn new(day: Day, order: u32) -> Self {
        Self {
            slot: PeriodSlot::new(day, order),
            start_time: None,
            end_time: None,
        }
    }

    /// Sets the wall-clock start and end times.
    pub fn with_times(mut self, start: NaiveTime, end: NaiveTime) -> Self {
        self.start_time = Some(start);
        self.end_time = Some(end);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_numbering() {
        assert_eq!(Day::Monday.number(), 1);
        assert_eq!(Day::Saturday.number(), 6);
        assert_eq!(Day::from_number(3), Some(Day::Wednesday));
        assert_eq!(Day::from_number(0), None);
        assert_eq!(Day::from_number(7), None);
    }

    #[test]
    fn test_slot_ordering() {
        let mon2 = PeriodSlot::new(Day::Monday, 2);
        let mon10 = PeriodSlot::new(Day::Monday, 10);
        let tue1 = PeriodSlot::new(Day::Tuesday, 1);

        // Day dominates, then order (numeric, not lexicographic)
        assert!(mon2 < mon10);
        assert!(mon10 < tue1);
    }

    #[test]
    fn test_slot_display() {
        let s = PeriodSlot::new(Day::Friday, 3);
        assert_eq!(s.to_string(), "Friday P3");
    }

    #[test]
    fn test_period_with_times() {
        let start = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        let end = NaiveTime::from_hms_opt(9, 40, 0).unwrap();
        let p = Period::new(Day::Monday, 1).with_times(start, end);

        assert_eq!(p.slot, PeriodSlot::new(Day::Monday, 1));
        assert_eq!(p.start_time, Some(start));
        assert_eq!(p.end_time, Some(end));
    }
}
