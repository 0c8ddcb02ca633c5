//! Throws and turns.

use alloc::vec::Vec;

use crate::score::ScoreEvent;

/// Maximum number of throws in one turn.
pub const THROWS_PER_TURN: usize = 3;

/// Turn status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnStatus {
    /// Turn is accepting throws.
    Open,
    /// Turn closed after its third throw.
    Complete,
    /// Turn would have taken the player below zero; its throws do not count.
    Bust,
    /// Turn brought the player to exactly zero.
    Win,
}

impl TurnStatus {
    /// Returns whether the turn is closed.
    #[must_use]
    pub const fn is_closed(self) -> bool {
        !matches!(self, Self::Open)
    }
}

/// A score event tagged with its position inside a turn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Throw {
    /// The classified score.
    pub event: ScoreEvent,
    /// Zero-based index within the turn.
    pub index: usize,
}

/// Up to three consecutive throws by one player.
#[derive(Debug, Clone, PartialEq)]
pub struct Turn {
    player: usize,
    throws: Vec<Throw>,
    status: TurnStatus,
    remaining_after: Option<u32>,
}

impl Turn {
    /// Creates an empty open turn for a roster index.
    #[must_use]
    pub const fn new(player: usize) -> Self {
        Self {
            player,
            throws: Vec::new(),
            status: TurnStatus::Open,
            remaining_after: None,
        }
    }

    pub(crate) fn push(&mut self, event: ScoreEvent) {
        let index = self.throws.len();
        self.throws.push(Throw { event, index });
    }

    pub(crate) const fn close(&mut self, status: TurnStatus, remaining_after: u32) {
        self.status = status;
        self.remaining_after = Some(remaining_after);
    }

    /// Returns the roster index of the player who owns this turn.
    #[must_use]
    pub const fn player(&self) -> usize {
        self.player
    }

    /// Returns the throws in the order they were made.
    #[must_use]
    pub fn throws(&self) -> &[Throw] {
        &self.throws
    }

    /// Returns the current status of the turn.
    #[must_use]
    pub const fn status(&self) -> TurnStatus {
        self.status
    }

    /// Returns whether the turn is still open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !self.status.is_closed()
    }

    /// Returns whether the turn busted.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.status == TurnStatus::Bust
    }

    /// Returns whether the turn checked the player out.
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.status == TurnStatus::Win
    }

    /// Returns the player's remaining score once the turn closed.
    ///
    /// `None` while the turn is open. After a bust this is the score the
    /// player had before the turn.
    #[must_use]
    pub const fn remaining_after(&self) -> Option<u32> {
        self.remaining_after
    }

    /// Returns the sum of the throw totals, bust or not.
    #[must_use]
    pub fn subtotal(&self) -> u32 {
        self.throws.iter().map(|throw| throw.event.total).sum()
    }

    /// Returns the number of throws.
    #[must_use]
    pub fn len(&self) -> usize {
        self.throws.len()
    }

    /// Returns whether no throws have been made yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.throws.is_empty()
    }
}
