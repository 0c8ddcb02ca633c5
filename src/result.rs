//! Result types for match operations.

use crate::game::TurnStatus;
use crate::score::ScoreEvent;

/// Outcome of recording one throw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThrowResult {
    /// Roster index of the player who threw.
    pub player: usize,
    /// Zero-based index of the throw within its turn.
    pub throw_index: usize,
    /// Status of the turn after the throw.
    pub status: TurnStatus,
    /// The player's remaining score after the throw.
    ///
    /// After a bust this is the score the player had before the turn.
    pub remaining: u32,
    /// Whether this throw ended the match.
    pub game_over: bool,
}

/// What an undo changed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Undo {
    /// Nothing to undo.
    Nothing,
    /// The latest throw of the open turn was removed.
    Throw(ScoreEvent),
    /// The latest closed turn was reopened.
    Turn {
        /// Roster index of the turn's player.
        player: usize,
        /// Status the turn had before it was reopened.
        status: TurnStatus,
    },
}

/// What a redo changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redo {
    /// Nothing to redo.
    Nothing,
    /// An undone turn was closed again.
    Turn {
        /// Roster index of the turn's player.
        player: usize,
        /// Status the turn closed with.
        status: TurnStatus,
    },
}

impl Undo {
    /// Returns whether the undo changed anything.
    #[must_use]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }
}

impl Redo {
    /// Returns whether the redo changed anything.
    #[must_use]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }
}
