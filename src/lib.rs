//! A darts scoring engine with optional `no_std` support.
//!
//! The crate has two halves. [`BoardGeometry::classify`] turns a point on a
//! drawn board into a [`ScoreEvent`]. [`Match`] collects those events into
//! turns of up to three throws for a countdown game (501, 301, ...), handling
//! busts, check-outs, player rotation, and undo/redo.
//!
//! # Example
//!
//! ```
//! use dartrs::{Match, MatchOptions, RosterEntry, ScoreEvent, TurnStatus};
//!
//! let game = Match::new(MatchOptions::default(), 42);
//! game.start_game(&[RosterEntry::new("Gwen")], 40).unwrap();
//!
//! let result = game.add_throw(ScoreEvent::parse("D20", 0).unwrap()).unwrap();
//! assert_eq!(result.status, TurnStatus::Win);
//! assert!(game.is_game_over());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod board;
pub mod classify;
pub mod error;
pub mod game;
pub mod options;
pub mod player;
pub mod result;
pub mod score;
mod sync;

// Re-export main types
pub use board::{BoardGeometry, SECTOR_ANGLE, SECTOR_COUNT, SECTOR_ORDER};
pub use classify::classify;
pub use error::{GeometryError, RosterError, ScoreError, ThrowError};
pub use game::{GameState, Match, Standing, THROWS_PER_TURN, Throw, Turn, TurnStatus};
pub use options::{DEFAULT_STARTING_SCORE, MatchOptions};
pub use player::{Player, RosterEntry};
pub use result::{Redo, ThrowResult, Undo};
pub use score::{Ring, ScoreEvent};
