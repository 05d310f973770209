//! Room model.

use serde::{Deserialize, Serialize};

/// A teaching room. Identified by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Room name (e.g., "R101", "Physics Lab").
    pub name: String,
    /// Seating capacity; a class fits only if its strength is within capacity.
    pub capacity: u32,
}

impl Room {
    /// Creates a room with the default capacity of 30.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            capacity: 30,
        }
    }

    /// Sets the seating capacity.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Whether a class of the given strength fits in this room.
    pub fn fits(&self, strength: u32) -> bool {
        self.capacity >= strength
    }
}
