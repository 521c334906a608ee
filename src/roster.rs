//! Registered players
//!
//! Kept in memory for the lifetime of the process only.

use serde::{Deserialize, Serialize};

/// Maximum number of registered players
pub const ROSTER_CAPACITY: usize = 5;

/// Ordered list of player names with a selection cursor
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    names: Vec<String>,
    cursor: usize,
}

impl Roster {
    /// Create empty roster
    pub fn new() -> Self {
        Self {
            names: Vec::with_capacity(ROSTER_CAPACITY),
            cursor: 0,
        }
    }

    /// Create a roster pre-filled with the given names (extra names and
    /// empty ones are skipped)
    pub fn with_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut roster = Self::new();
        for name in names {
            roster.register(name.as_ref());
        }
        roster
    }

    /// Append a player. Returns false for an empty name or a full roster.
    pub fn register(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.is_full() {
            return false;
        }
        self.names.push(name.to_string());
        log::info!("Registered player '{}' ({}/{})", name, self.len(), ROSTER_CAPACITY);
        true
    }

    /// Delete the player at `index` and pull the cursor back into range
    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index >= self.names.len() {
            return None;
        }
        let name = self.names.remove(index);
        self.cursor = self.cursor.min(self.names.len().saturating_sub(1));
        log::info!("Removed player '{}'", name);
        Some(name)
    }

    /// Point the cursor at `index`. Returns false if out of range.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.names.len() {
            return false;
        }
        self.cursor = index;
        true
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Name under the cursor
    pub fn selected(&self) -> Option<&str> {
        self.names.get(self.cursor).map(String::as_str)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.names.len() >= ROSTER_CAPACITY
    }
}
