//! Geometric classification of a point on the board.

use crate::board::{BoardGeometry, SECTOR_ORDER, sector_index_at_bearing};
use crate::score::{Ring, ScoreEvent};

#[cfg(feature = "std")]
fn hypot(dx: f64, dy: f64) -> f64 {
    dx.hypot(dy)
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn hypot(dx: f64, dy: f64) -> f64 {
    libm::hypot(dx, dy)
}

#[cfg(feature = "std")]
fn atan2(y: f64, x: f64) -> f64 {
    y.atan2(x)
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn atan2(y: f64, x: f64) -> f64 {
    libm::atan2(y, x)
}

#[cfg(feature = "std")]
pub(crate) fn floor(value: f64) -> f64 {
    value.floor()
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
pub(crate) fn floor(value: f64) -> f64 {
    libm::floor(value)
}

/// Returns the bearing of an offset from the board centre, in degrees.
///
/// The bearing is `0.0` at 12 o'clock and grows clockwise, in screen
/// coordinates where `y` grows downward. The result lies in `0.0..360.0`.
#[must_use]
pub fn bearing(dx: f64, dy: f64) -> f64 {
    let degrees = atan2(dx, -dy).to_degrees();
    if degrees < 0.0 {
        let wrapped = degrees + 360.0;
        // -0.0 and tiny negatives can round up to exactly 360.
        if wrapped >= 360.0 { 0.0 } else { wrapped }
    } else {
        degrees
    }
}

impl BoardGeometry {
    /// Classifies a point against a board drawn at `(center_x, center_y)`
    /// with radius `board_radius`, all in the same unit space.
    ///
    /// Every input produces a result: points outside the board are a
    /// [`Ring::Miss`]. A point exactly on the rim is on the board.
    ///
    /// ```
    /// use dartrs::{BoardGeometry, Ring};
    ///
    /// let geometry = BoardGeometry::default();
    /// let hit = geometry.classify(100.0, 100.0, 100.0, 100.0, 80.0, 0);
    /// assert_eq!(hit.ring, Ring::InnerBull);
    /// assert_eq!(hit.total, 50);
    /// ```
    #[must_use]
    pub fn classify(
        &self,
        x: f64,
        y: f64,
        center_x: f64,
        center_y: f64,
        board_radius: f64,
        now: u64,
    ) -> ScoreEvent {
        let dx = x - center_x;
        let dy = y - center_y;
        let r = hypot(dx, dy);

        if r > board_radius {
            log::trace!("({x}, {y}) is outside the board (r = {r})");
            return ScoreEvent::miss(x, y, now);
        }

        let norm_r = if board_radius == 0.0 {
            0.0
        } else {
            r / board_radius
        };
        let ring = self.ring_at(norm_r);

        let event = match ring {
            Ring::InnerBull => ScoreEvent::from_parts(ring, None, 50, x, y, now),
            Ring::OuterBull => ScoreEvent::from_parts(ring, None, 25, x, y, now),
            Ring::Miss => ScoreEvent::miss(x, y, now),
            Ring::SingleInner | Ring::SingleOuter | Ring::Triple | Ring::Double => {
                let sector = SECTOR_ORDER[sector_index_at_bearing(bearing(dx, dy))];
                ScoreEvent::from_parts(ring, Some(sector), sector, x, y, now)
            }
        };

        log::trace!("({x}, {y}) classified as {event} (norm_r = {norm_r})");
        event
    }
}

/// Classifies a point using [`BoardGeometry::STANDARD`].
#[must_use]
pub fn classify(
    x: f64,
    y: f64,
    center_x: f64,
    center_y: f64,
    board_radius: f64,
    now: u64,
) -> ScoreEvent {
    BoardGeometry::STANDARD.classify(x, y, center_x, center_y, board_radius, now)
}
