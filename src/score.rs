//! Score types produced by the classifier.

extern crate alloc;

use alloc::string::String;
use core::fmt;

use crate::error::ScoreError;

/// Scoring zone of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ring {
    /// Outside the double ring, or off the board entirely.
    Miss,
    /// Single band between the outer bull and the triple ring.
    SingleInner,
    /// Single band between the triple ring and the double ring.
    SingleOuter,
    /// Triple ring.
    Triple,
    /// Double ring.
    Double,
    /// Outer bull (25).
    OuterBull,
    /// Inner bull (50).
    InnerBull,
}

impl Ring {
    /// Returns the multiplier applied to the base value.
    #[must_use]
    pub const fn multiplier(self) -> u8 {
        match self {
            Self::Miss => 0,
            Self::SingleInner | Self::SingleOuter | Self::OuterBull | Self::InnerBull => 1,
            Self::Double => 2,
            Self::Triple => 3,
        }
    }

    /// Returns whether hits in this ring carry a sector number.
    #[must_use]
    pub const fn has_sector(self) -> bool {
        matches!(
            self,
            Self::SingleInner | Self::SingleOuter | Self::Triple | Self::Double
        )
    }
}

/// The classified result of one throw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreEvent {
    /// Sector face value (1..=20), or `None` for bulls and misses.
    pub sector: Option<u8>,
    /// Multiplier (0, 1, 2 or 3).
    pub multiplier: u8,
    /// Base value: 0, 25, 50, or the sector face value.
    pub base: u8,
    /// `base * multiplier`.
    pub total: u32,
    /// Ring that was hit.
    pub ring: Ring,
    /// Raw x coordinate of the input.
    pub x: f64,
    /// Raw y coordinate of the input.
    pub y: f64,
    /// Caller-supplied timestamp.
    pub timestamp: u64,
}

impl ScoreEvent {
    /// Builds an event for a ring and sector without input coordinates.
    ///
    /// `sector` is required for single, double and triple rings and ignored
    /// for bulls and misses.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::InvalidSector`] if a sector ring is given a
    /// sector outside `1..=20` (or none at all).
    pub fn new(ring: Ring, sector: Option<u8>, timestamp: u64) -> Result<Self, ScoreError> {
        let (sector, base) = match ring {
            Ring::Miss => (None, 0),
            Ring::OuterBull => (None, 25),
            Ring::InnerBull => (None, 50),
            Ring::SingleInner | Ring::SingleOuter | Ring::Triple | Ring::Double => {
                let value = sector
                    .filter(|value| (1..=20).contains(value))
                    .ok_or(ScoreError::InvalidSector)?;
                (Some(value), value)
            }
        };

        Ok(Self::from_parts(ring, sector, base, 0.0, 0.0, timestamp))
    }

    /// Builds a miss at the given coordinates.
    #[must_use]
    pub const fn miss(x: f64, y: f64, timestamp: u64) -> Self {
        Self::from_parts(Ring::Miss, None, 0, x, y, timestamp)
    }

    pub(crate) const fn from_parts(
        ring: Ring,
        sector: Option<u8>,
        base: u8,
        x: f64,
        y: f64,
        timestamp: u64,
    ) -> Self {
        let multiplier = ring.multiplier();
        Self {
            sector,
            multiplier,
            base,
            total: base as u32 * multiplier as u32,
            ring,
            x,
            y,
            timestamp,
        }
    }

    /// Parses a shorthand such as `T20`, `D16`, `S5`, `7`, `OB`, `B` or `-`.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace. Bulls
    /// may also be written `50` and `25`, misses `M`, `MISS` or `0`.
    ///
    /// ```
    /// use dartrs::{Ring, ScoreEvent};
    ///
    /// let event = ScoreEvent::parse("t20", 0).unwrap();
    /// assert_eq!(event.ring, Ring::Triple);
    /// assert_eq!(event.total, 60);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::InvalidSector`] for an out-of-range sector and
    /// [`ScoreError::Unrecognized`] for anything else that is not a shorthand.
    pub fn parse(input: &str, timestamp: u64) -> Result<Self, ScoreError> {
        let token = input.trim().to_ascii_uppercase();

        let ring = match token.as_str() {
            "-" | "M" | "MISS" | "0" => return Self::new(Ring::Miss, None, timestamp),
            "B" | "DB" | "BULL" | "50" => return Self::new(Ring::InnerBull, None, timestamp),
            "OB" | "25" => return Self::new(Ring::OuterBull, None, timestamp),
            _ => token.chars().next().ok_or(ScoreError::Unrecognized)?,
        };

        let (ring, digits) = match ring {
            'T' => (Ring::Triple, &token[1..]),
            'D' => (Ring::Double, &token[1..]),
            'S' => (Ring::SingleOuter, &token[1..]),
            _ => (Ring::SingleOuter, token.as_str()),
        };

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ScoreError::Unrecognized);
        }
        let sector = digits.parse::<u8>().map_err(|_| ScoreError::InvalidSector)?;

        Self::new(ring, Some(sector), timestamp)
    }

    /// Returns the compact text form of this event.
    #[must_use]
    pub fn shorthand(&self) -> String {
        alloc::format!("{self}")
    }
}

impl fmt::Display for ScoreEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.ring, self.sector) {
            (Ring::InnerBull, _) => f.write_str("B"),
            (Ring::OuterBull, _) => f.write_str("OB"),
            (Ring::Triple, Some(sector)) => write!(f, "T{sector}"),
            (Ring::Double, Some(sector)) => write!(f, "D{sector}"),
            (Ring::SingleInner | Ring::SingleOuter, Some(sector)) => write!(f, "{sector}"),
            _ => f.write_str("-"),
        }
    }
}
