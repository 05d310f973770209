//! Teacher model.

use serde::{Deserialize, Serialize};

/// A teacher. Identified by code (e.g., "MATH01").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    /// Unique teacher code.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Hard cap on periods taught per day.
    pub max_periods_per_day: u32,
}

impl Teacher {
    /// Creates a teacher with the default daily cap of 6 periods.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: String::new(),
            max_periods_per_day: 6,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the daily period cap.
    pub fn with_max_periods_per_day(mut self, max: u32) -> Self {
        self.max_periods_per_day = max;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_teacher_builder() {
        let t = Teacher::new("MATH01")
            .with_name("A. Verma")
            .with_max_periods_per_day(4);

        assert_eq!(t.code, "MATH01");
        assert_eq!(t.name, "A. Verma");
        assert_eq!(t.max_periods_per_day, 4);
    }

    #[test]
    fn test_default_daily_cap() {
        assert_eq!(Teacher::new("T1").max_periods_per_day, 6);
    }
}
