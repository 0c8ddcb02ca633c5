//! Event log and replay.
//!
//! The log of applied score events is the only record of play. Turns,
//! remaining scores, active flags, rotation and game over are all produced
//! by [`Ledger::replay`], a single fold over that log.
//!
//! A turn normally closes on the throw that wins, busts or is the third. A
//! throw added to a reopened turn is logged as an extension, and the throw
//! before it then no longer closes the turn.

use alloc::vec::Vec;

use crate::player::Player;
use crate::result::ThrowResult;
use crate::score::ScoreEvent;

use super::session::next_active;
use super::turn::{THROWS_PER_TURN, Turn, TurnStatus};

/// Remaining score for a player.
///
/// `scored` is the sum of the player's non-bust closed turns and `pending`
/// the subtotal of their open turn. This is the only place remaining scores
/// are computed.
pub(crate) fn remaining(starting_score: u32, scored: u32, pending: u32) -> i64 {
    i64::from(starting_score) - i64::from(scored) - i64::from(pending)
}

/// Decides whether a turn closes after its latest throw.
///
/// Returns the closing status and the remaining score to record, or `None`
/// if the turn stays open.
fn evaluate(before: i64, turn: &Turn) -> Option<(TurnStatus, u32)> {
    let after = before - i64::from(turn.subtotal());
    let to_u32 = |value: i64| u32::try_from(value).unwrap_or(0);

    if after == 0 {
        Some((TurnStatus::Win, 0))
    } else if after < 0 {
        Some((TurnStatus::Bust, to_u32(before)))
    } else if turn.len() >= THROWS_PER_TURN {
        Some((TurnStatus::Complete, to_u32(after)))
    } else {
        None
    }
}

/// One applied throw.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Entry {
    pub(crate) event: ScoreEvent,
    /// Added to a reopened turn; the previous throw does not close it.
    pub(crate) extends: bool,
}

/// A closed turn taken back by undo, kept for redo.
#[derive(Debug, Clone)]
pub(crate) struct Undone {
    pub(crate) turn: Turn,
    /// The log entries the turn was built from.
    pub(crate) entries: Vec<Entry>,
}

/// Engine state: the roster, the log, and the redo buffer.
#[derive(Debug, Clone, Default)]
pub(crate) struct Ledger {
    /// Players as seeded at game start; `active` is always `true` here.
    pub(crate) players: Vec<Player>,
    /// Every applied throw, oldest first.
    pub(crate) log: Vec<Entry>,
    /// The last closed turn is held open after being undone.
    pub(crate) hold: bool,
    /// Undone closed turns, most recent last.
    pub(crate) redo: Vec<Undone>,
}

/// State derived from the log.
#[derive(Debug, Clone)]
pub(crate) struct Replay {
    pub(crate) active: Vec<bool>,
    pub(crate) scored: Vec<u32>,
    /// Closed turns, oldest first.
    pub(crate) closed: Vec<Turn>,
    /// Turn of the player due to throw; `None` when nobody is.
    pub(crate) open: Option<Turn>,
}

impl Replay {
    /// Returns the roster index of the player due to throw.
    pub(crate) fn current(&self) -> Option<usize> {
        self.open.as_ref().map(Turn::player)
    }

    /// Returns a player's remaining score, counting the open turn.
    pub(crate) fn remaining_for(&self, starting_score: u32, player: usize) -> i64 {
        let pending = self
            .open
            .as_ref()
            .filter(|turn| turn.player() == player)
            .map_or(0, Turn::subtotal);
        remaining(starting_score, self.scored[player], pending)
    }

    /// Previews the effect of adding a throw to the open turn.
    ///
    /// Returns `None` when nobody is due to throw.
    pub(crate) fn landing(&self, starting_score: u32, event: ScoreEvent) -> Option<ThrowResult> {
        let mut turn = self.open.clone()?;
        let player = turn.player();
        let before = remaining(starting_score, self.scored[player], 0);
        turn.push(event);

        let (status, remaining_score) = evaluate(before, &turn).unwrap_or_else(|| {
            let after = before - i64::from(turn.subtotal());
            (TurnStatus::Open, u32::try_from(after).unwrap_or(0))
        });

        let others_active = self
            .active
            .iter()
            .enumerate()
            .any(|(index, &active)| active && index != player);

        Some(ThrowResult {
            player,
            throw_index: turn.len() - 1,
            status,
            remaining: remaining_score,
            game_over: status == TurnStatus::Win && !others_active,
        })
    }
}

impl Ledger {
    /// Creates a ledger for a validated roster.
    pub(crate) const fn new(players: Vec<Player>) -> Self {
        Self {
            players,
            log: Vec::new(),
            hold: false,
            redo: Vec::new(),
        }
    }

    pub(crate) fn is_started(&self) -> bool {
        !self.players.is_empty()
    }

    pub(crate) fn starting_score(&self, player: usize) -> u32 {
        self.players.get(player).map_or(0, |p| p.starting_score)
    }

    /// Folds the log into turns and player state.
    ///
    /// While `hold` is set the final turn is left open whether or not its
    /// last throw closed it.
    pub(crate) fn replay(&self) -> Replay {
        let count = self.players.len();
        let mut active = alloc::vec![true; count];
        let mut scored = alloc::vec![0_u32; count];
        let mut closed = Vec::new();
        let mut open = (count > 0).then(|| Turn::new(0));
        let last = self.log.len().checked_sub(1);

        for (position, entry) in self.log.iter().enumerate() {
            let Some(turn) = open.as_mut() else {
                break;
            };
            let player = turn.player();
            turn.push(entry.event);

            if self.hold && Some(position) == last {
                break;
            }
            if self.log.get(position + 1).is_some_and(|next| next.extends) {
                continue;
            }

            let before = remaining(self.starting_score(player), scored[player], 0);
            let Some((status, remaining_after)) = evaluate(before, turn) else {
                continue;
            };

            turn.close(status, remaining_after);
            if status != TurnStatus::Bust {
                scored[player] += turn.subtotal();
            }
            if status == TurnStatus::Win {
                active[player] = false;
            }

            if let Some(finished) = open.take() {
                closed.push(finished);
            }
            open = next_active(&active, player).map(Turn::new);
        }

        Replay {
            active,
            scored,
            closed,
            open,
        }
    }
}
