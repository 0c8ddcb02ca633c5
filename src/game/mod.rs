//! Match engine and state management.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::options::MatchOptions;

mod actions;
mod ledger;
mod session;
pub mod state;
pub mod turn;

pub use state::{GameState, Standing};
pub use turn::{THROWS_PER_TURN, Throw, Turn, TurnStatus};

use ledger::Ledger;

/// A countdown darts match.
///
/// The match owns the roster, the throw log and the redo buffer behind one
/// lock; every operation holds it for its whole duration, so operations are
/// applied one at a time and either fully apply or change nothing.
pub struct Match {
    /// Match options.
    pub options: MatchOptions,
    /// Roster, throw log and redo buffer.
    ledger: Mutex<Ledger>,
    /// Random number generator for synthesized player ids.
    rng: Mutex<ChaCha8Rng>,
}

impl Match {
    /// Creates a match with the given seed. No game is started yet.
    ///
    /// # Example
    ///
    /// ```
    /// use dartrs::{Match, MatchOptions, RosterEntry};
    ///
    /// let game = Match::new(MatchOptions::default(), 42);
    /// game.start_game(&[RosterEntry::new("Gwen"), RosterEntry::new("LA")], 301)
    ///     .unwrap();
    /// assert_eq!(game.current_player(), Some(0));
    /// ```
    #[must_use]
    pub fn new(options: MatchOptions, seed: u64) -> Self {
        Self {
            options,
            ledger: Mutex::new(Ledger::default()),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Returns whether a game has been started.
    pub fn is_started(&self) -> bool {
        self.ledger.lock().is_started()
    }

    /// Returns the number of players in the roster.
    pub fn player_count(&self) -> usize {
        self.ledger.lock().players.len()
    }

    /// Returns the roster index of the player due to throw.
    ///
    /// Returns `None` before a game starts and once it is over.
    pub fn current_player(&self) -> Option<usize> {
        self.ledger.lock().replay().current()
    }

    /// Returns a player's remaining score, counting their open turn.
    pub fn remaining(&self, player: usize) -> Option<i64> {
        let ledger = self.ledger.lock();
        let starting_score = ledger.players.get(player)?.starting_score;
        Some(ledger.replay().remaining_for(starting_score, player))
    }

    /// Returns whether every player has checked out.
    pub fn is_game_over(&self) -> bool {
        let ledger = self.ledger.lock();
        ledger.is_started() && ledger.replay().current().is_none()
    }

    /// Returns whether [`Match::undo`] would change anything.
    pub fn can_undo(&self) -> bool {
        !self.ledger.lock().log.is_empty()
    }

    /// Returns whether [`Match::redo`] would change anything.
    pub fn can_redo(&self) -> bool {
        !self.ledger.lock().redo.is_empty()
    }

    /// Returns the number of throws in the log.
    pub fn throw_count(&self) -> usize {
        self.ledger.lock().log.len()
    }

    /// Returns a full snapshot of the match.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "lock is held for entire operation"
    )]
    pub fn snapshot(&self) -> GameState {
        let ledger = self.ledger.lock();
        let replay = ledger.replay();

        let standings: Vec<Standing> = ledger
            .players
            .iter()
            .enumerate()
            .map(|(index, player)| {
                let mut player = player.clone();
                player.active = replay.active[index];
                let remaining = replay.remaining_for(player.starting_score, index);
                Standing { player, remaining }
            })
            .collect();

        let current_player = replay.current();
        let game_over = ledger.is_started() && current_player.is_none();
        let redo_turns = ledger
            .redo
            .iter()
            .rev()
            .map(|undone| undone.turn.clone())
            .collect();

        let mut closed_turns = replay.closed;
        closed_turns.reverse();

        GameState {
            standings,
            current_player,
            open_turn: replay.open,
            closed_turns,
            redo_turns,
            game_over,
        }
    }
}
