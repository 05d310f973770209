//! Timetable allocation engine.
//!
//! Orchestrates per-class, per-period greedy assignment with limited
//! backtracking over a shared entry store, using the conflict checks in
//! [`crate::conflict`] as the constraint oracle.
//!
//! # Algorithm
//!
//! `TimetableEngine` walks each class's periods in week order, placing
//! the most-behind subject that has a qualified, available teacher and
//! a free room of sufficient capacity. A dead end undoes the class's
//! most recent placement and re-enqueues the failed period, up to a
//! per-class backtrack budget. Fast and explainable, not complete: an
//! unlucky instance can end with classes reported incomplete.

mod generator;
mod store;

pub use generator::{
    GenerationError, GenerationOutcome, TimetableEngine, DEFAULT_BACKTRACK_LIMIT,
};
pub use store::{DuplicateEntry, EntryStore};
