//! Match configuration options.

use crate::board::BoardGeometry;

/// Starting score used by [`MatchOptions::default`].
pub const DEFAULT_STARTING_SCORE: u32 = 501;

/// Configuration options for a match.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use dartrs::{BoardGeometry, MatchOptions};
///
/// let geometry = BoardGeometry::new(0.06, 0.12, 0.51, 0.57, 0.92, 0.99).unwrap();
/// let options = MatchOptions::default()
///     .with_geometry(geometry)
///     .with_starting_score(301);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchOptions {
    /// Ring layout used to classify taps.
    pub geometry: BoardGeometry,
    /// Starting score used by [`crate::Match::start_default`].
    pub starting_score: u32,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            geometry: BoardGeometry::STANDARD,
            starting_score: DEFAULT_STARTING_SCORE,
        }
    }
}

impl MatchOptions {
    /// Sets the board geometry.
    ///
    /// # Example
    ///
    /// ```
    /// use dartrs::{BoardGeometry, MatchOptions};
    ///
    /// let options = MatchOptions::default().with_geometry(BoardGeometry::STANDARD);
    /// assert_eq!(options.geometry, BoardGeometry::default());
    /// ```
    #[must_use]
    pub const fn with_geometry(mut self, geometry: BoardGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Sets the default starting score.
    ///
    /// # Example
    ///
    /// ```
    /// use dartrs::MatchOptions;
    ///
    /// let options = MatchOptions::default().with_starting_score(301);
    /// assert_eq!(options.starting_score, 301);
    /// ```
    #[must_use]
    pub const fn with_starting_score(mut self, starting_score: u32) -> Self {
        self.starting_score = starting_score;
        self
    }
}
