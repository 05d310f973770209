//! Greedy timetable generation with single-step backtracking.
//!
//! # Algorithm
//!
//! For each class, walk the periods in day-then-order sequence:
//!
//! 1. Rank subjects that still need periods by remaining count,
//!    descending — subjects furthest behind schedule go first so none
//!    starves.
//! 2. For the best subject with a qualified, available teacher and a
//!    free room of sufficient capacity, commit an entry and move on.
//! 3. On a dead end, undo the most recent commitment for this class and
//!    re-enqueue the failed period at the back of the walk.
//!
//! Classes share one entry store, so a teacher or room taken by an
//! earlier class stays taken; commit order decides contested slots.
//! Backtracking is single-step (undo one decision, not a chronological
//! search) and capped per class, so the engine is fast and always
//! terminates, but may report a class incomplete even when a full
//! schedule exists.
//!
//! # Complexity
//! O(classes × periods × subjects × (teachers + rooms) × entries) per
//! attempt, times at most `backtrack_limit` retries per class.

use std::collections::{HashMap, VecDeque};

use log::{debug, info, warn};
use thiserror::Error;

use super::store::EntryStore;
use crate::conflict;
use crate::models::{EntryKey, MasterData, PeriodSlot, SchoolClass, TimetableEntry};
use crate::selection::{LeastLoaded, SelectionPolicy};

/// Default per-class cap on backtracking steps.
pub const DEFAULT_BACKTRACK_LIMIT: usize = 64;

/// Fatal precondition failure: generation cannot start.
///
/// Reported before any entry is produced; existing timetables are left
/// untouched by a run that fails here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// No classes to schedule.
    #[error("no classes defined; create classes before generating")]
    NoClasses,
    /// No periods to fill.
    #[error("no periods defined; create periods before generating")]
    NoPeriods,
    /// No rooms to teach in.
    #[error("no rooms defined; create rooms before generating")]
    NoRooms,
}

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    /// The full committed entry set, replacing any prior timetable.
    pub entries: Vec<TimetableEntry>,
    /// Names of classes that ended the run with at least one unfilled period.
    pub incomplete_classes: Vec<String>,
}

impl GenerationOutcome {
    /// Whether every class was fully scheduled.
    pub fn is_complete(&self) -> bool {
        self.incomplete_classes.is_empty()
    }
}

/// The timetable allocation engine.
///
/// Produces a best-effort conflict-free assignment of every
/// `(class, period)` pair from a master-data snapshot. Each run starts
/// from an empty entry set — generation replaces, never appends.
///
/// # Example
///
/// ```
/// use school_timetable::engine::TimetableEngine;
/// use school_timetable::models::{
///     Day, MasterData, Period, Qualification, Room, SchoolClass, Subject, Teacher,
/// };
///
/// let data = MasterData::new()
///     .with_class(SchoolClass::new("10-A").with_strength(20))
///     .with_period(Period::new(Day::Monday, 1))
///     .with_room(Room::new("R101").with_capacity(25))
///     .with_subject(Subject::new("Mathematics").with_periods_per_week(1))
///     .with_teacher(Teacher::new("MATH01"))
///     .with_qualification(Qualification::new("MATH01", "Mathematics"));
///
/// let outcome = TimetableEngine::new().generate(&data).unwrap();
/// assert_eq!(outcome.entries.len(), 1);
/// assert!(outcome.is_complete());
/// ```
#[derive(Debug)]
pub struct TimetableEngine {
    policy: Box<dyn SelectionPolicy>,
    backtrack_limit: usize,
}

impl TimetableEngine {
    /// Creates an engine with the deterministic least-loaded policy.
    pub fn new() -> Self {
        Self {
            policy: Box::new(LeastLoaded),
            backtrack_limit: DEFAULT_BACKTRACK_LIMIT,
        }
    }

    /// Sets the teacher/room selection policy.
    pub fn with_policy<P: SelectionPolicy + 'static>(mut self, policy: P) -> Self {
        self.policy = Box::new(policy);
        self
    }

    /// Sets the per-class cap on backtracking steps.
    ///
    /// A class that exhausts its cap is reported incomplete rather than
    /// retried further.
    pub fn with_backtrack_limit(mut self, limit: usize) -> Self {
        self.backtrack_limit = limit;
        self
    }

    /// Generates a full timetable from the snapshot.
    ///
    /// Classes are processed in listing order against a shared entry
    /// set, so earlier classes win contested teachers and rooms. Each
    /// class starts from every subject's `default_periods_per_week`.
    ///
    /// # Errors
    /// [`GenerationError`] if classes, periods, or rooms are empty; no
    /// entries are produced in that case.
    pub fn generate(&self, data: &MasterData) -> Result<GenerationOutcome, GenerationError> {
        if data.classes.is_empty() {
            return Err(GenerationError::NoClasses);
        }
        if data.periods.is_empty() {
            return Err(GenerationError::NoPeriods);
        }
        if data.rooms.is_empty() {
            return Err(GenerationError::NoRooms);
        }

        info!(
            "starting timetable generation: {} classes, {} periods, {} rooms ({} policy)",
            data.classes.len(),
            data.periods.len(),
            data.rooms.len(),
            self.policy.name(),
        );

        let slots = data.slots_in_order();
        let mut store = EntryStore::new();
        let mut incomplete = Vec::new();

        for class in &data.classes {
            let mut remaining = data.default_subject_load();
            if !self.fill_class(class, &slots, &mut remaining, data, &mut store) {
                warn!("could not fully schedule class {}", class.name);
                incomplete.push(class.name.clone());
            }
        }

        if incomplete.is_empty() {
            info!("timetable generation completed: {} entries", store.len());
        } else {
            warn!(
                "timetable generation finished with {} incomplete classes",
                incomplete.len()
            );
        }

        Ok(GenerationOutcome {
            entries: store.into_entries(),
            incomplete_classes: incomplete,
        })
    }

    /// Fills every period for one class. Returns `false` if the class
    /// could not be fully scheduled.
    fn fill_class(
        &self,
        class: &SchoolClass,
        slots: &[PeriodSlot],
        remaining: &mut HashMap<String, u32>,
        data: &MasterData,
        store: &mut EntryStore,
    ) -> bool {
        let mut queue: VecDeque<PeriodSlot> = slots.iter().copied().collect();
        // Undo trail for this class: (slot, subject) of each commit.
        let mut trail: Vec<(PeriodSlot, String)> = Vec::new();
        let mut backtracks = 0usize;

        while let Some(slot) = queue.pop_front() {
            let mut candidates: Vec<(String, u32)> = remaining
                .iter()
                .filter(|(_, &count)| count > 0)
                .map(|(name, &count)| (name.clone(), count))
                .collect();
            if candidates.is_empty() {
                // Nothing left to teach: an intentional free period.
                continue;
            }
            // Most-behind subject first; name breaks ties so runs are stable.
            candidates.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

            let placed = candidates
                .iter()
                .find_map(|(subject, _)| self.try_place(class, slot, subject, data, store));

            if let Some(entry) = placed {
                let subject = entry.subject.clone();
                if store.commit(entry).is_ok() {
                    if let Some(count) = remaining.get_mut(&subject) {
                        *count -= 1;
                    }
                    trail.push((slot, subject));
                    continue;
                }
                // Duplicate key cannot arise from the queue discipline;
                // fall through to backtracking if it somehow does.
            }

            // Dead end for this period.
            if backtracks >= self.backtrack_limit {
                warn!(
                    "class {}: backtrack limit ({}) reached at {}",
                    class.name, self.backtrack_limit, slot
                );
                return false;
            }
            let Some((last_slot, last_subject)) = trail.pop() else {
                // Nothing to undo.
                return false;
            };
            backtracks += 1;
            debug!(
                "class {}: no assignment fits {}; undoing {} at {} and retrying",
                class.name, slot, last_subject, last_slot
            );
            store.remove(&EntryKey::new(class.name.clone(), last_slot));
            if let Some(count) = remaining.get_mut(&last_subject) {
                *count += 1;
            }
            queue.push_back(slot);
        }

        true
    }

    /// Builds a legal entry for `(class, slot, subject)`, or `None` if
    /// no teacher/room combination works.
    ///
    /// Candidate teachers and rooms are filtered through the same
    /// checks [`conflict::validate_entry`] applies, then handed to the
    /// selection policy; the final entry is validated once more so a
    /// committed entry can never disagree with a manual-edit check.
    fn try_place(
        &self,
        class: &SchoolClass,
        slot: PeriodSlot,
        subject: &str,
        data: &MasterData,
        store: &EntryStore,
    ) -> Option<TimetableEntry> {
        let available: Vec<_> = data
            .qualified_teachers(subject)
            .into_iter()
            .filter(|t| conflict::teacher_is_available(data, t, slot, store.entries()))
            .collect();
        let teacher = self.policy.pick_teacher(&available, store.entries())?;

        let fitting: Vec<_> = data
            .rooms
            .iter()
            .filter(|r| r.fits(class.strength) && conflict::room_is_free(&r.name, slot, store.entries()))
            .collect();
        let room = self.policy.pick_room(&fitting)?;

        let entry = TimetableEntry::new(&class.name, slot, subject, &teacher.code, &room.name);
        if conflict::validate_entry(&entry, store.entries(), None, data).is_empty() {
            Some(entry)
        } else {
            None
        }
    }
}

impl Default for TimetableEngine {
    fn default() -> Self {
        Self::new()
    }
}
