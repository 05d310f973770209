//! Pluggable teacher and room selection policies.
//!
//! When several qualified, available teachers (or several suitable free
//! rooms) exist for a slot, the choice among them is a policy decision,
//! not a correctness concern. Policies only ever see candidates the
//! engine has already filtered for availability, so any choice yields a
//! legal entry — the policy controls tie-breaking, and with it
//! determinism and load spread.

use std::fmt::Debug;
use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::models::{Room, Teacher, TimetableEntry};

/// Chooses among pre-filtered teacher and room candidates.
pub trait SelectionPolicy: Send + Sync + Debug {
    /// Policy name (e.g., "first-fit").
    fn name(&self) -> &'static str;

    /// Picks a teacher from the available, qualified candidates.
    ///
    /// `entries` is the committed entry set, for load-aware policies.
    /// Returns `None` only when `candidates` is empty.
    fn pick_teacher<'a>(
        &self,
        candidates: &[&'a Teacher],
        entries: &[TimetableEntry],
    ) -> Option<&'a Teacher>;

    /// Picks a room from the free, capacity-sufficient candidates.
    fn pick_room<'a>(&self, candidates: &[&'a Room]) -> Option<&'a Room>;
}

/// Takes the first candidate in input order.
///
/// Matches the simplest possible room search: scan rooms in their
/// administrative listing order, take the first that fits.
#[derive(Debug, Clone, Default)]
pub struct FirstFit;

impl SelectionPolicy for FirstFit {
    fn name(&self) -> &'static str {
        "first-fit"
    }

    fn pick_teacher<'a>(
        &self,
        candidates: &[&'a Teacher],
        _entries: &[TimetableEntry],
    ) -> Option<&'a Teacher> {
        candidates.first().copied()
    }

    fn pick_room<'a>(&self, candidates: &[&'a Room]) -> Option<&'a Room> {
        candidates.first().copied()
    }
}

/// Prefers the teacher with the fewest committed entries and the
/// smallest room that fits.
///
/// Deterministic (ties resolve to input order), spreads teaching load
/// across staff, and keeps large rooms free for large classes. The
/// engine's default.
#[derive(Debug, Clone, Default)]
pub struct LeastLoaded;

impl SelectionPolicy for LeastLoaded {
    fn name(&self) -> &'static str {
        "least-loaded"
    }

    fn pick_teacher<'a>(
        &self,
        candidates: &[&'a Teacher],
        entries: &[TimetableEntry],
    ) -> Option<&'a Teacher> {
        candidates
            .iter()
            .min_by_key(|t| entries.iter().filter(|e| e.teacher == t.code).count())
            .copied()
    }

    fn pick_room<'a>(&self, candidates: &[&'a Room]) -> Option<&'a Room> {
        candidates.iter().min_by_key(|r| r.capacity).copied()
    }
}

/// Uniform random choice among candidates.
///
/// Seedable for reproducible runs; `new()` seeds from the OS.
#[derive(Debug)]
pub struct Random {
    rng: Mutex<StdRng>,
}

impl Random {
    /// Creates a policy seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Creates a policy with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionPolicy for Random {
    fn name(&self) -> &'static str {
        "random"
    }

    fn pick_teacher<'a>(
        &self,
        candidates: &[&'a Teacher],
        _entries: &[TimetableEntry],
    ) -> Option<&'a Teacher> {
        let mut rng = self.rng.lock().unwrap();
        candidates.choose(&mut *rng).copied()
    }

    fn pick_room<'a>(&self, candidates: &[&'a Room]) -> Option<&'a Room> {
        let mut rng = self.rng.lock().unwrap();
        candidates.choose(&mut *rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, PeriodSlot};

    fn teachers() -> Vec<Teacher> {
        vec![Teacher::new("T1"), Teacher::new("T2"), Teacher::new("T3")]
    }

    fn rooms() -> Vec<Room> {
        vec![
            Room::new("Big").with_capacity(60),
            Room::new("Small").with_capacity(20),
            Room::new("Medium").with_capacity(40),
        ]
    }

    #[test]
    fn test_first_fit_takes_input_order() {
        let teachers = teachers();
        let refs: Vec<&Teacher> = teachers.iter().collect();
        let picked = FirstFit.pick_teacher(&refs, &[]).unwrap();
        assert_eq!(picked.code, "T1");

        let rooms = rooms();
        let refs: Vec<&Room> = rooms.iter().collect();
        assert_eq!(FirstFit.pick_room(&refs).unwrap().name, "Big");
    }

    #[test]
    fn test_least_loaded_prefers_idle_teacher() {
        let teachers = teachers();
        let refs: Vec<&Teacher> = teachers.iter().collect();
        let slot = PeriodSlot::new(Day::Monday, 1);
        let entries = vec![
            TimetableEntry::new("10-A", slot, "Math", "T1", "R1"),
            TimetableEntry::new("10-B", slot, "Math", "T2", "R2"),
            TimetableEntry::new("10-C", PeriodSlot::new(Day::Monday, 2), "Math", "T1", "R1"),
        ];

        // T1 has 2 entries, T2 has 1, T3 has 0.
        let picked = LeastLoaded.pick_teacher(&refs, &entries).unwrap();
        assert_eq!(picked.code, "T3");
    }

    #[test]
    fn test_least_loaded_prefers_smallest_room() {
        let rooms = rooms();
        let refs: Vec<&Room> = rooms.iter().collect();
        assert_eq!(LeastLoaded.pick_room(&refs).unwrap().name, "Small");
    }

    #[test]
    fn test_empty_candidates() {
        assert!(FirstFit.pick_teacher(&[], &[]).is_none());
        assert!(LeastLoaded.pick_room(&[]).is_none());
        assert!(Random::seeded(7).pick_teacher(&[], &[]).is_none());
    }

    #[test]
    fn test_seeded_random_is_reproducible() {
        let teachers = teachers();
        let refs: Vec<&Teacher> = teachers.iter().collect();

        let picks_a: Vec<String> = {
            let policy = Random::seeded(42);
            (0..10)
                .map(|_| policy.pick_teacher(&refs, &[]).unwrap().code.clone())
                .collect()
        };
        let picks_b: Vec<String> = {
            let policy = Random::seeded(42);
            (0..10)
                .map(|_| policy.pick_teacher(&refs, &[]).unwrap().code.clone())
                .collect()
        };
        assert_eq!(picks_a, picks_b);
    }
}
