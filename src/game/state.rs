//! Match snapshot types.

use alloc::vec::Vec;

use crate::player::Player;

use super::turn::Turn;

/// A player together with their derived remaining score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    /// The player.
    pub player: Player,
    /// Starting score minus every counted throw, including the open turn.
    ///
    /// Only negative while a bust turn is reopened for review.
    pub remaining: i64,
}

/// Everything a front end needs to render a match.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Players in roster order.
    pub standings: Vec<Standing>,
    /// Roster index of the player due to throw.
    pub current_player: Option<usize>,
    /// Turn of the current player, possibly still empty.
    pub open_turn: Option<Turn>,
    /// Closed turns, most recent first.
    pub closed_turns: Vec<Turn>,
    /// Undone turns available to redo, most recent first.
    pub redo_turns: Vec<Turn>,
    /// Whether every player has checked out.
    pub game_over: bool,
}

impl GameState {
    /// Returns the standing of the player due to throw.
    #[must_use]
    pub fn current(&self) -> Option<&Standing> {
        self.current_player
            .and_then(|index| self.standings.get(index))
    }

    /// Returns the number of players still in the match.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.standings
            .iter()
            .filter(|standing| standing.player.active)
            .count()
    }

    /// Returns the closed turns of one player, most recent first.
    pub fn turns_of(&self, player: usize) -> impl Iterator<Item = &Turn> {
        self.closed_turns
            .iter()
            .filter(move |turn| turn.player() == player)
    }
}
