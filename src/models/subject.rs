//! Subject model.

use serde::{Deserialize, Serialize};

/// A taught subject. Identified by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    /// Subject name (e.g., "Mathematics").
    pub name: String,
    /// Optional short code (e.g., "MATH").
    pub code: Option<String>,
    /// How many periods per week each class needs by default.
    pub default_periods_per_week: u32,
    /// Optional hex display color (e.g., "#81E6D9").
    pub color: Option<String>,
}

impl Subject {
    /// Creates a subject with the default weekly load of 5 periods.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: None,
            default_periods_per_week: 5,
            color: None,
        }
    }

    /// Sets the short code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Sets the weekly period requirement.
    pub fn with_periods_per_week(mut self, periods: u32) -> Self {
        self.default_periods_per_week = periods;
        self
    }

    /// Sets the display color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_builder() {
        let s = Subject::new("Mathematics")
            .with_code("MATH")
            .with_periods_per_week(6)
            .with_color("#81E6D9");

        assert_eq!(s.name, "Mathematics");
        assert_eq!(s.code.as_deref(), Some("MATH"));
        assert_eq!(s.default_periods_per_week, 6);
        assert_eq!(s.color.as_deref(), Some("#81E6D9"));
    }

    #[test]
    fn test_default_weekly_load() {
        assert_eq!(Subject::new("Art").default_periods_per_week, 5);
    }
}
