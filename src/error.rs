//! Error types for match operations.

use thiserror::Error;

/// Errors that can occur when building a board geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// Ring radii are not in strictly increasing order.
    #[error("ring radii are not strictly increasing")]
    NotIncreasing,
    /// A radius lies outside the board (`0 < r <= 1`).
    #[error("ring radius out of range")]
    OutOfRange,
}

/// Errors that can occur when building or parsing a score event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// Sector is missing or outside 1..=20.
    #[error("invalid sector")]
    InvalidSector,
    /// Input is not a recognised shorthand.
    #[error("unrecognized score")]
    Unrecognized,
}

/// Errors that can occur when starting a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RosterError {
    /// The roster has no players.
    #[error("roster is empty")]
    Empty,
    /// A player name is empty or whitespace.
    #[error("player name is blank")]
    BlankName,
    /// Two players share a name (case-insensitive).
    #[error("duplicate player name")]
    DuplicateName,
    /// Two players share an explicit id.
    #[error("duplicate player id")]
    DuplicateId,
    /// Starting score is zero.
    #[error("starting score must be positive")]
    InvalidStartingScore,
}

/// Errors that can occur when recording a throw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ThrowError {
    /// No game has been started.
    #[error("no game has been started")]
    NotStarted,
    /// Every player has finished.
    #[error("game is over")]
    GameOver,
    /// The reopened turn already has three throws; undo one first.
    #[error("reopened turn already has three throws")]
    TurnFull,
}
