//! Classifier integration tests.

#![allow(clippy::float_cmp)]

use dartrs::board::{sector_at_bearing, sector_index_at_bearing};
use dartrs::classify::bearing;
use dartrs::{
    BoardGeometry, GeometryError, Ring, SECTOR_ORDER, ScoreError, ScoreEvent, classify,
};
use proptest::prelude::*;

const CENTER: f64 = 200.0;
const RADIUS: f64 = 100.0;

/// Classifies a point `distance` board units straight above the centre.
fn above(distance: f64) -> ScoreEvent {
    classify(CENTER, CENTER - distance, CENTER, CENTER, RADIUS, 0)
}

#[test]
fn sector_order_is_a_permutation() {
    let mut sorted = SECTOR_ORDER;
    sorted.sort_unstable();
    let expected: Vec<u8> = (1..=20).collect();
    assert_eq!(sorted.to_vec(), expected);
    assert_eq!(SECTOR_ORDER.iter().map(|&v| u32::from(v)).sum::<u32>(), 210);
    assert_eq!(SECTOR_ORDER[0], 20);
}

#[test]
fn geometry_rejects_bad_radii() {
    assert_eq!(
        BoardGeometry::new(0.10, 0.05, 0.47, 0.53, 0.86, 0.94).unwrap_err(),
        GeometryError::NotIncreasing
    );
    assert_eq!(
        BoardGeometry::new(0.05, 0.10, 0.53, 0.53, 0.86, 0.94).unwrap_err(),
        GeometryError::NotIncreasing
    );
    assert_eq!(
        BoardGeometry::new(0.0, 0.10, 0.47, 0.53, 0.86, 0.94).unwrap_err(),
        GeometryError::OutOfRange
    );
    assert_eq!(
        BoardGeometry::new(0.05, 0.10, 0.47, 0.53, 0.86, 1.2).unwrap_err(),
        GeometryError::OutOfRange
    );
    assert_eq!(
        BoardGeometry::new(f64::NAN, 0.10, 0.47, 0.53, 0.86, 0.94).unwrap_err(),
        GeometryError::OutOfRange
    );
    assert_eq!(
        BoardGeometry::new(0.05, 0.10, f64::NAN, 0.53, 0.86, 0.94).unwrap_err(),
        GeometryError::NotIncreasing
    );
    assert!(BoardGeometry::new(0.05, 0.10, 0.47, 0.53, 0.86, 1.0).is_ok());
}

#[test]
fn ring_boundaries_belong_to_the_inner_ring() {
    let g = BoardGeometry::default();
    assert_eq!(g.ring_at(g.inner_bull()), Ring::InnerBull);
    assert_eq!(g.ring_at(g.outer_bull()), Ring::OuterBull);
    assert_eq!(g.ring_at(g.triple_inner()), Ring::SingleInner);
    assert_eq!(g.ring_at(g.triple_outer()), Ring::Triple);
    assert_eq!(g.ring_at(g.double_inner()), Ring::SingleOuter);
    assert_eq!(g.ring_at(g.double_outer()), Ring::Double);

    assert_eq!(g.ring_at(0.0), Ring::InnerBull);
    assert_eq!(g.ring_at(0.5), Ring::Triple);
    assert_eq!(g.ring_at(0.531), Ring::SingleOuter);
    assert_eq!(g.ring_at(0.95), Ring::Miss);
    assert_eq!(g.ring_at(f64::NAN), Ring::Miss);
}

#[test]
fn point_on_triple_outer_edge_is_a_triple() {
    let hit = classify(0.0, -0.53, 0.0, 0.0, 1.0, 0);
    assert_eq!(hit.ring, Ring::Triple);
    assert_eq!(hit.sector, Some(20));
    assert_eq!(hit.total, 60);
}

#[test]
fn sector_boundaries_go_clockwise() {
    assert_eq!(sector_at_bearing(0.0), 20);
    assert_eq!(sector_at_bearing(8.999), 20);
    assert_eq!(sector_at_bearing(9.0), 1);
    assert_eq!(sector_at_bearing(351.0), 20);
    assert_eq!(sector_at_bearing(350.999), 5);

    for index in 0..20 {
        let boundary = index as f64 * 18.0 + 9.0;
        assert_eq!(
            sector_at_bearing(boundary),
            SECTOR_ORDER[(index + 1) % 20],
            "boundary at {boundary}"
        );
        // Same answer every time.
        assert_eq!(
            sector_index_at_bearing(boundary),
            sector_index_at_bearing(boundary)
        );
    }
}

#[test]
fn bearing_is_clockwise_from_twelve() {
    assert_eq!(bearing(0.0, -1.0), 0.0);
    assert!((bearing(1.0, 0.0) - 90.0).abs() < 1e-9);
    assert!((bearing(0.0, 1.0) - 180.0).abs() < 1e-9);
    assert!((bearing(-1.0, 0.0) - 270.0).abs() < 1e-9);
    assert!((0.0..360.0).contains(&bearing(-1e-300, -1.0)));
}

#[test]
fn cardinal_points_hit_expected_sectors() {
    let sector_at = |x: f64, y: f64| classify(x, y, CENTER, CENTER, RADIUS, 0).sector;
    assert_eq!(sector_at(CENTER, CENTER - 70.0), Some(20));
    assert_eq!(sector_at(CENTER + 70.0, CENTER), Some(6));
    assert_eq!(sector_at(CENTER, CENTER + 70.0), Some(3));
    assert_eq!(sector_at(CENTER - 70.0, CENTER), Some(11));
}

#[test]
fn rings_along_the_twenty() {
    assert_eq!(above(3.0).ring, Ring::InnerBull);
    assert_eq!(above(8.0).ring, Ring::OuterBull);
    assert_eq!(above(8.0).total, 25);
    assert_eq!(above(8.0).sector, None);
    assert_eq!(above(30.0).ring, Ring::SingleInner);
    assert_eq!(above(50.0).ring, Ring::Triple);
    assert_eq!(above(70.0).ring, Ring::SingleOuter);
    assert_eq!(above(90.0).ring, Ring::Double);
    assert_eq!(above(90.0).total, 40);
    assert_eq!(above(97.0).ring, Ring::Miss);
    assert_eq!(above(97.0).total, 0);
}

#[test]
fn center_hit_is_inner_bull() {
    for radius in [0.0, 1.0, 80.0, 1e6] {
        let hit = classify(5.0, 5.0, 5.0, 5.0, radius, 0);
        assert_eq!(hit.ring, Ring::InnerBull);
        assert_eq!(hit.total, 50);
        assert_eq!(hit.multiplier, 1);
        assert_eq!(hit.sector, None);
    }
}

#[test]
fn zero_radius_board_misses_off_centre() {
    let hit = classify(1.0, 0.0, 0.0, 0.0, 0.0, 0);
    assert_eq!(hit.ring, Ring::Miss);
}

#[test]
fn just_beyond_the_rim_is_a_miss() {
    let hit = classify(0.0, -(1.0 + f64::EPSILON), 0.0, 0.0, 1.0, 0);
    assert_eq!(hit.ring, Ring::Miss);
    assert_eq!(hit.total, 0);
    assert_eq!(hit.multiplier, 0);
    assert_eq!(hit.sector, None);
}

#[test]
fn rim_is_on_the_board() {
    let full = BoardGeometry::new(0.05, 0.10, 0.47, 0.53, 0.86, 1.0).unwrap();
    let hit = full.classify(0.0, -1.0, 0.0, 0.0, 1.0, 0);
    assert_eq!(hit.ring, Ring::Double);
    assert_eq!(hit.total, 40);
}

#[test]
fn raw_input_is_kept() {
    let hit = classify(213.5, 140.25, CENTER, CENTER, RADIUS, 77);
    assert_eq!(hit.x, 213.5);
    assert_eq!(hit.y, 140.25);
    assert_eq!(hit.timestamp, 77);
}

#[test]
fn shorthand_round_trips_display() {
    assert_eq!(above(3.0).shorthand(), "B");
    assert_eq!(above(8.0).shorthand(), "OB");
    assert_eq!(above(50.0).shorthand(), "T20");
    assert_eq!(above(90.0).shorthand(), "D20");
    assert_eq!(above(70.0).shorthand(), "20");
    assert_eq!(above(150.0).shorthand(), "-");
}

#[test]
fn manual_events_validate_sectors() {
    assert_eq!(
        ScoreEvent::new(Ring::Triple, None, 0).unwrap_err(),
        ScoreError::InvalidSector
    );
    assert_eq!(
        ScoreEvent::new(Ring::Double, Some(21), 0).unwrap_err(),
        ScoreError::InvalidSector
    );
    assert_eq!(ScoreEvent::new(Ring::OuterBull, Some(7), 0).unwrap().sector, None);

    assert_eq!(ScoreEvent::parse("T21", 0).unwrap_err(), ScoreError::InvalidSector);
    assert_eq!(ScoreEvent::parse("X5", 0).unwrap_err(), ScoreError::Unrecognized);
    assert_eq!(ScoreEvent::parse("D", 0).unwrap_err(), ScoreError::Unrecognized);
    assert_eq!(ScoreEvent::parse("", 0).unwrap_err(), ScoreError::Unrecognized);
}

proptest! {
    #[test]
    fn classification_is_consistent(
        x in -50.0_f64..450.0,
        y in -50.0_f64..450.0,
    ) {
        let hit = classify(x, y, CENTER, CENTER, RADIUS, 0);

        prop_assert_eq!(hit.total, u32::from(hit.base) * u32::from(hit.multiplier));
        prop_assert_eq!(hit.multiplier, hit.ring.multiplier());
        prop_assert_eq!(hit.sector.is_some(), hit.ring.has_sector());
        if let Some(sector) = hit.sector {
            prop_assert!((1..=20).contains(&sector));
            prop_assert_eq!(hit.base, sector);
        }

        let r = (x - CENTER).hypot(y - CENTER);
        if r > RADIUS {
            prop_assert_eq!(hit.ring, Ring::Miss);
        }
        prop_assert_eq!(hit, classify(x, y, CENTER, CENTER, RADIUS, 0));
    }

    #[test]
    fn parse_accepts_its_own_shorthand(
        x in 100.0_f64..300.0,
        y in 100.0_f64..300.0,
    ) {
        let hit = classify(x, y, CENTER, CENTER, RADIUS, 0);
        let parsed = ScoreEvent::parse(&hit.shorthand(), 0).unwrap();
        prop_assert_eq!(parsed.total, hit.total);
        prop_assert_eq!(parsed.sector, hit.sector);
    }
}
