//! Board geometry and sector layout.

use crate::error::GeometryError;
use crate::score::Ring;

/// Number of numbered sectors on the board.
pub const SECTOR_COUNT: usize = 20;

/// Angular width of one sector, in degrees.
pub const SECTOR_ANGLE: f64 = 18.0;

/// Sector face values read clockwise, starting with the sector at 12 o'clock.
pub const SECTOR_ORDER: [u8; SECTOR_COUNT] = [
    20, 1, 18, 4, 13, 6, 10, 15, 2, 17, 3, 19, 7, 16, 8, 11, 14, 9, 12, 5,
];

/// Ring boundaries of a board, each a fraction of the total board radius.
///
/// A point whose normalized radius lies exactly on a boundary belongs to the
/// inner ring of that boundary.
///
/// ```
/// use dartrs::{BoardGeometry, Ring};
///
/// let geometry = BoardGeometry::default();
/// assert_eq!(geometry.ring_at(0.0), Ring::InnerBull);
/// assert_eq!(geometry.ring_at(geometry.triple_outer()), Ring::Triple);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardGeometry {
    inner_bull: f64,
    outer_bull: f64,
    triple_inner: f64,
    triple_outer: f64,
    double_inner: f64,
    double_outer: f64,
}

impl BoardGeometry {
    /// The geometry used by [`Default`].
    pub const STANDARD: Self = Self {
        inner_bull: 0.05,
        outer_bull: 0.10,
        triple_inner: 0.47,
        triple_outer: 0.53,
        double_inner: 0.86,
        double_outer: 0.94,
    };

    /// Creates a geometry from its six boundary radii, innermost first.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NotIncreasing`] if the radii are not strictly
    /// increasing, and [`GeometryError::OutOfRange`] if the innermost radius is
    /// not positive or the outermost exceeds `1.0`.
    pub fn new(
        inner_bull: f64,
        outer_bull: f64,
        triple_inner: f64,
        triple_outer: f64,
        double_inner: f64,
        double_outer: f64,
    ) -> Result<Self, GeometryError> {
        let radii = [
            inner_bull,
            outer_bull,
            triple_inner,
            triple_outer,
            double_inner,
            double_outer,
        ];

        // Written so that NaN fails every check.
        if !(inner_bull > 0.0 && double_outer <= 1.0) {
            return Err(GeometryError::OutOfRange);
        }
        if !radii.windows(2).all(|pair| pair[0] < pair[1]) {
            return Err(GeometryError::NotIncreasing);
        }

        Ok(Self {
            inner_bull,
            outer_bull,
            triple_inner,
            triple_outer,
            double_inner,
            double_outer,
        })
    }

    /// Outer edge of the inner bull (50).
    #[must_use]
    pub const fn inner_bull(&self) -> f64 {
        self.inner_bull
    }

    /// Outer edge of the outer bull (25).
    #[must_use]
    pub const fn outer_bull(&self) -> f64 {
        self.outer_bull
    }

    /// Inner edge of the triple ring.
    #[must_use]
    pub const fn triple_inner(&self) -> f64 {
        self.triple_inner
    }

    /// Outer edge of the triple ring.
    #[must_use]
    pub const fn triple_outer(&self) -> f64 {
        self.triple_outer
    }

    /// Inner edge of the double ring.
    #[must_use]
    pub const fn double_inner(&self) -> f64 {
        self.double_inner
    }

    /// Outer edge of the double ring; anything beyond scores nothing.
    #[must_use]
    pub const fn double_outer(&self) -> f64 {
        self.double_outer
    }

    /// Returns the ring containing a normalized radius.
    ///
    /// Comparisons are non-strict and ascending, so a value exactly on a
    /// boundary resolves to the inner ring. Values that compare false against
    /// every boundary (such as NaN) resolve to [`Ring::Miss`].
    #[must_use]
    pub fn ring_at(&self, norm_r: f64) -> Ring {
        if norm_r <= self.inner_bull {
            Ring::InnerBull
        } else if norm_r <= self.outer_bull {
            Ring::OuterBull
        } else if norm_r <= self.triple_inner {
            Ring::SingleInner
        } else if norm_r <= self.triple_outer {
            Ring::Triple
        } else if norm_r <= self.double_inner {
            Ring::SingleOuter
        } else if norm_r <= self.double_outer {
            Ring::Double
        } else {
            Ring::Miss
        }
    }
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Returns the sector index (into [`SECTOR_ORDER`]) for a bearing.
///
/// `bearing` is in degrees, measured clockwise from 12 o'clock, and must lie
/// in `0.0..360.0`. A bearing exactly on a sector boundary belongs to the
/// clockwise-next sector.
#[must_use]
pub fn sector_index_at_bearing(bearing: f64) -> usize {
    let shifted = bearing + SECTOR_ANGLE / 2.0;
    let index = crate::classify::floor(shifted / SECTOR_ANGLE) as usize;
    index % SECTOR_COUNT
}

/// Returns the sector face value for a bearing.
///
/// ```
/// use dartrs::board::sector_at_bearing;
///
/// assert_eq!(sector_at_bearing(0.0), 20);
/// // 9 degrees is the boundary between 20 and 1; clockwise wins.
/// assert_eq!(sector_at_bearing(9.0), 1);
/// ```
#[must_use]
pub fn sector_at_bearing(bearing: f64) -> u8 {
    SECTOR_ORDER[sector_index_at_bearing(bearing)]
}
