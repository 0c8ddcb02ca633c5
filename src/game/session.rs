//! Roster setup and rotation.

use alloc::string::String;
use alloc::vec::Vec;

use rand::RngCore;

use crate::error::RosterError;
use crate::player::{Player, RosterEntry, validate_roster};

use super::Match;
use super::ledger::Ledger;

/// Returns the next active player after `from` in roster order, wrapping.
///
/// `from` itself is considered last, so a sole remaining player keeps the
/// throw. Returns `None` when no player is active.
pub(crate) fn next_active(active: &[bool], from: usize) -> Option<usize> {
    let len = active.len();
    (1..=len)
        .map(|offset| (from + offset) % len)
        .find(|&index| active[index])
}

impl Match {
    /// Starts a new game, discarding all previous history.
    ///
    /// Every player starts active with `starting_score`, and the first roster
    /// entry throws first. Missing ids are synthesized.
    ///
    /// # Errors
    ///
    /// Returns an error if `starting_score` is zero or the roster is invalid
    /// (see [`validate_roster`]). The current game is left untouched.
    pub fn start_game(
        &self,
        roster: &[RosterEntry],
        starting_score: u32,
    ) -> Result<(), RosterError> {
        if starting_score == 0 {
            return Err(RosterError::InvalidStartingScore);
        }
        let names = validate_roster(roster)?;

        let mut ids: Vec<String> = roster.iter().filter_map(|e| e.id.clone()).collect();
        let mut players = Vec::with_capacity(roster.len());

        for (entry, name) in roster.iter().zip(names) {
            let id = match &entry.id {
                Some(id) => id.clone(),
                None => {
                    let id = self.synthesize_id(&ids);
                    ids.push(id.clone());
                    id
                }
            };

            players.push(Player {
                id,
                name,
                starting_score,
                active: true,
            });
        }

        log::info!(
            "starting game for {} player(s) from {starting_score}",
            players.len()
        );
        *self.ledger.lock() = Ledger::new(players);

        Ok(())
    }

    /// Starts a new game using [`crate::MatchOptions::starting_score`].
    ///
    /// # Errors
    ///
    /// Same as [`Match::start_game`].
    pub fn start_default(&self, roster: &[RosterEntry]) -> Result<(), RosterError> {
        self.start_game(roster, self.options.starting_score)
    }

    /// Restarts the current roster from scratch.
    ///
    /// All players become active again and history, redo buffer and game over
    /// are cleared. Does nothing if no game was started.
    pub fn reset(&self) {
        let mut ledger = self.ledger.lock();
        let players = core::mem::take(&mut ledger.players);
        log::debug!("resetting game for {} player(s)", players.len());
        *ledger = Ledger::new(players);
    }

    fn synthesize_id(&self, taken: &[String]) -> String {
        let mut rng = self.rng.lock();
        loop {
            let id = alloc::format!("pl-{:08x}", rng.next_u32());
            if !taken.contains(&id) {
                return id;
            }
        }
    }
}
