//! Teacher-subject qualification model.
//!
//! A qualification records that a teacher may teach a subject. At most
//! one record exists per `(teacher, subject)` pair; every committed
//! timetable entry must be backed by one.

use serde::{Deserialize, Serialize};

/// A teacher's registered ability to teach a subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Qualification {
    /// Teacher code.
    pub teacher: String,
    /// Subject name.
    pub subject: String,
}

impl Qualification {
    /// Creates a qualification.
    pub fn new(teacher: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            teacher: teacher.into(),
            subject: subject.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualification() {
        let q = Qualification::new("MATH01", "Mathematics");
        assert_eq!(q.teacher, "MATH01");
        assert_eq!(q.subject, "Mathematics");
    }
}
