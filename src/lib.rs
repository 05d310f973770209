//! School timetabling engine.
//!
//! Given master data (teachers, rooms, classes, subjects, periods),
//! qualifications, and blocking constraints, produces a conflict-free
//! assignment of `(class, period) → (subject, teacher, room)` and
//! validates ad-hoc manual edits against the same hard constraints.
//! Persistence, HTTP, and rendering are left to the surrounding
//! application — this crate is the domain core only.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Teacher`, `Room`, `SchoolClass`,
//!   `Subject`, `Qualification`, `Period`, `Constraint`,
//!   `TimetableEntry`, bundled as a `MasterData` snapshot
//! - **`validation`**: Master-data integrity checks (duplicate IDs,
//!   dangling references, non-positive capacities)
//! - **`conflict`**: Hard-constraint checks on a single candidate entry
//! - **`selection`**: Pluggable teacher/room tie-breaking policies
//! - **`engine`**: Greedy allocation with capped single-step backtracking
//!
//! # Example
//!
//! ```
//! use school_timetable::engine::TimetableEngine;
//! use school_timetable::models::{
//!     Day, MasterData, Period, Qualification, Room, SchoolClass, Subject, Teacher,
//! };
//!
//! let data = MasterData::new()
//!     .with_class(SchoolClass::new("10-A").with_strength(28))
//!     .with_period(Period::new(Day::Monday, 1))
//!     .with_period(Period::new(Day::Monday, 2))
//!     .with_room(Room::new("R101").with_capacity(30))
//!     .with_subject(Subject::new("Mathematics").with_periods_per_week(2))
//!     .with_teacher(Teacher::new("MATH01").with_name("A. Verma"))
//!     .with_qualification(Qualification::new("MATH01", "Mathematics"));
//!
//! let outcome = TimetableEngine::new().generate(&data).unwrap();
//! assert!(outcome.is_complete());
//! assert_eq!(outcome.entries.len(), 2);
//! ```
//!
//! # Reference
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod conflict;
pub mod engine;
pub mod models;
pub mod selection;
pub mod validation;
