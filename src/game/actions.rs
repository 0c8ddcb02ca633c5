use crate::error::ThrowError;
use crate::result::{Redo, ThrowResult, Undo};
use crate::score::ScoreEvent;

use super::Match;
use super::ledger::{Entry, Undone};
use super::turn::{THROWS_PER_TURN, TurnStatus};

impl Match {
    /// Records a classified throw for the player due to throw.
    ///
    /// Closes the turn on a win (exactly zero), a bust (below zero) or a
    /// third throw, then passes the throw to the next active player. Clears
    /// the redo buffer.
    ///
    /// A turn reopened by [`Match::undo`] keeps its owner: the throw is added
    /// to it and the whole turn is scored again, so a throw after a reopened
    /// check-out can turn it into a bust.
    ///
    /// # Errors
    ///
    /// Returns [`ThrowError::NotStarted`] before [`Match::start_game`],
    /// [`ThrowError::GameOver`] once every player has checked out, and
    /// [`ThrowError::TurnFull`] when the reopened turn already has three
    /// throws. Nothing changes on error.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "lock is held for entire operation"
    )]
    pub fn add_throw(&self, event: ScoreEvent) -> Result<ThrowResult, ThrowError> {
        let mut ledger = self.ledger.lock();
        if !ledger.is_started() {
            return Err(ThrowError::NotStarted);
        }

        let replay = ledger.replay();
        let Some(open) = replay.open.as_ref() else {
            return Err(ThrowError::GameOver);
        };
        if open.len() >= THROWS_PER_TURN {
            return Err(ThrowError::TurnFull);
        }
        let player = open.player();
        let result = replay
            .landing(ledger.starting_score(player), event)
            .ok_or(ThrowError::GameOver)?;

        let extends = ledger.hold;
        ledger.redo.clear();
        ledger.hold = false;
        ledger.log.push(Entry { event, extends });

        match result.status {
            TurnStatus::Open => log::debug!(
                "player {player} threw {event}, {} remaining",
                result.remaining
            ),
            TurnStatus::Complete => log::debug!(
                "player {player} threw {event}, turn complete on {}",
                result.remaining
            ),
            TurnStatus::Bust => log::debug!(
                "player {player} threw {event} and busted, back to {}",
                result.remaining
            ),
            TurnStatus::Win => log::info!("player {player} checked out with {event}"),
        }
        if result.game_over {
            log::info!("game over");
        }

        Ok(result)
    }

    /// Classifies a tap with the configured geometry and records it.
    ///
    /// Returns the classified event along with the throw result.
    ///
    /// # Errors
    ///
    /// Same as [`Match::add_throw`].
    pub fn tap(
        &self,
        x: f64,
        y: f64,
        center_x: f64,
        center_y: f64,
        board_radius: f64,
        now: u64,
    ) -> Result<(ScoreEvent, ThrowResult), ThrowError> {
        let event = self
            .options
            .geometry
            .classify(x, y, center_x, center_y, board_radius, now);
        self.add_throw(event).map(|result| (event, result))
    }

    /// Steps back one action.
    ///
    /// Removes the latest throw of the open turn if it has any. Otherwise
    /// reopens the latest closed turn with its throws intact, giving the throw
    /// back to its player (a winner becomes active again), and makes that
    /// turn available to [`Match::redo`].
    ///
    /// Removing a throw that was added to a reopened turn leaves that turn
    /// reopened, as it was before the throw.
    pub fn undo(&self) -> Undo {
        let mut ledger = self.ledger.lock();
        let replay = ledger.replay();

        if replay.open.as_ref().is_some_and(|turn| !turn.is_empty()) {
            if let Some(entry) = ledger.log.pop() {
                ledger.hold = entry.extends;
                log::debug!("undo: removed {}", entry.event);
                return Undo::Throw(entry.event);
            }
        }

        let Some(turn) = replay.closed.last() else {
            log::debug!("undo: nothing to undo");
            return Undo::Nothing;
        };

        // With the open turn empty, the log ends with this turn's throws.
        let start = ledger.log.len().saturating_sub(turn.len());
        let entries = ledger.log[start..].to_vec();
        let (player, status) = (turn.player(), turn.status());
        ledger.hold = true;
        ledger.redo.push(Undone {
            turn: turn.clone(),
            entries,
        });
        log::debug!("undo: reopened {status:?} turn of player {player}");

        Undo::Turn { player, status }
    }

    /// Re-applies the most recently undone turn.
    ///
    /// The open turn is discarded and the undone turn is closed again with
    /// the throws it had, re-applying any win or game over it caused.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "lock is held for entire operation"
    )]
    pub fn redo(&self) -> Redo {
        let mut ledger = self.ledger.lock();
        let Some(undone) = ledger.redo.pop() else {
            log::debug!("redo: nothing to redo");
            return Redo::Nothing;
        };

        let pending = ledger.replay().open.map_or(0, |open| open.len());
        let keep = ledger.log.len().saturating_sub(pending);
        ledger.log.truncate(keep);
        ledger.hold = false;
        ledger.log.extend(undone.entries);

        let (player, status) = (undone.turn.player(), undone.turn.status());
        log::debug!("redo: closed {status:?} turn of player {player} again");

        Redo::Turn { player, status }
    }
}
