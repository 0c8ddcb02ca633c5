//! Roster entries and players.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::error::RosterError;

/// A player as entered on the setup screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    /// Optional caller-provided id. Synthesized when absent.
    pub id: Option<String>,
    /// Display name.
    pub name: String,
}

impl RosterEntry {
    /// Creates an entry without an id.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    /// Sets an explicit id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

impl From<&str> for RosterEntry {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// A player in a running match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Unique id within the match.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Countdown target.
    pub starting_score: u32,
    /// `false` once the player has checked out.
    pub active: bool,
}

/// Checks a roster and returns the trimmed names in order.
///
/// # Errors
///
/// Returns an error if the roster is empty, a name is blank, two names match
/// ignoring case, or two explicit ids are equal.
pub fn validate_roster(roster: &[RosterEntry]) -> Result<Vec<String>, RosterError> {
    if roster.is_empty() {
        return Err(RosterError::Empty);
    }

    let mut names: Vec<String> = Vec::with_capacity(roster.len());
    let mut folded: Vec<String> = Vec::with_capacity(roster.len());
    let mut ids: Vec<&str> = Vec::new();

    for entry in roster {
        let name = entry.name.trim();
        if name.is_empty() {
            return Err(RosterError::BlankName);
        }

        let key = name.to_lowercase();
        if folded.contains(&key) {
            return Err(RosterError::DuplicateName);
        }

        if let Some(id) = entry.id.as_deref() {
            if ids.contains(&id) {
                return Err(RosterError::DuplicateId);
            }
            ids.push(id);
        }

        folded.push(key);
        names.push(name.to_string());
    }

    Ok(names)
}
