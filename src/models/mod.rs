//! Timetabling domain models.
//!
//! One file per entity. Master data (teachers, rooms, classes, subjects,
//! qualifications, periods, constraints) is administrative input, bundled
//! into a [`MasterData`] snapshot; [`TimetableEntry`] is the engine's
//! output — one committed assignment per class per period.

mod class;
mod constraint;
mod entry;
mod master;
mod period;
mod qualification;
mod room;
mod subject;
mod teacher;

pub use class::SchoolClass;
pub use constraint::Constraint;
pub use entry::{EntryKey, TimetableEntry};
pub use master::MasterData;
pub use period::{Day, Period, PeriodSlot};
pub use qualification::Qualification;
pub use room::Room;
pub use subject::Subject;
pub use teacher::Teacher;
