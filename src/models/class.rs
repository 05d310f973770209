//! School class (grade-section) model.

use serde::{Deserialize, Serialize};

/// A class of students, e.g., a grade-section combination like "10-A".
/// Identified by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchoolClass {
    /// Class name.
    pub name: String,
    /// Number of students; determines which rooms fit.
    pub strength: u32,
}

impl SchoolClass {
    /// Creates a class with the default strength of 30.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            strength: 30,
        }
    }

    /// Sets the student count.
    pub fn with_strength(mut self, strength: u32) -> Self {
        self.strength = strength;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_builder() {
        let c = SchoolClass::new("10-A").with_strength(42);
        assert_eq!(c.name, "10-A");
        assert_eq!(c.strength, 42);
    }
}
