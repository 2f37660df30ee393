// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
//! Integration tests for echo-geom static and swept box tests.

use echo_geom::{BlockFace, BoundingBox, SweepResult, Vec3};
use proptest::prelude::*;

fn unit() -> BoundingBox {
    BoundingBox::new(1.0, 1.0, 1.0).expect("unit box")
}

fn sweep(
    target_pos: Vec3,
    start: Vec3,
    displacement: Vec3,
    result: &mut SweepResult,
) -> bool {
    unit().intersect_box_swept(&start, &displacement, &target_pos, &unit(), result)
}

#[test]
fn head_on_sweep_reports_entry_fraction_and_leading_face() {
    let mut r = SweepResult::default();
    assert!(sweep(
        Vec3::new(3.0, 0.0, 0.0),
        Vec3::ZERO,
        Vec3::new(5.0, 0.0, 0.0),
        &mut r
    ));
    // Leading face travels 0.5 -> 2.5, i.e. 2 of 5 units.
    assert!((r.res() - 0.4).abs() < 1e-12, "res = {}", r.res());
    assert_eq!(r.face(), Some(BlockFace::East));
    assert_eq!(r.normal().to_array(), [-1.0, 0.0, 0.0]);
    assert!((r.collided_position().x() - 2.0).abs() < 1e-12);
}

#[test]
fn negative_travel_reports_opposite_face() {
    let mut r = SweepResult::default();
    assert!(sweep(
        Vec3::new(0.0, -4.0, 0.0),
        Vec3::ZERO,
        Vec3::new(0.0, -6.0, 0.0),
        &mut r
    ));
    // Mover bottom at y=0 meets target top at y=-3.
    assert!((r.res() - 0.5).abs() < 1e-12);
    assert_eq!(r.face(), Some(BlockFace::Bottom));
    assert_eq!(r.normal().to_array(), [0.0, 1.0, 0.0]);
}

#[test]
fn diagonal_entry_uses_the_last_axis_to_enter() {
    let mut r = SweepResult::default();
    // X slab entered at t=0.25, Z slab at t=0.5.
    assert!(sweep(
        Vec3::new(2.0, 0.0, 3.0),
        Vec3::ZERO,
        Vec3::new(4.0, 0.0, 4.0),
        &mut r
    ));
    assert!((r.res() - 0.5).abs() < 1e-12);
    assert_eq!(r.face(), Some(BlockFace::South));
}

#[test]
fn zero_displacement_never_sweeps() {
    let mut r = SweepResult::default();
    assert!(!sweep(Vec3::new(0.5, 0.0, 0.0), Vec3::ZERO, Vec3::ZERO, &mut r));
    assert_eq!(r, SweepResult::default());
}

#[test]
fn interpenetrating_start_is_left_to_the_static_test() {
    let mut r = SweepResult::default();
    assert!(unit().intersect_box(&Vec3::new(0.5, 0.0, 0.0), &unit()));
    assert!(!sweep(
        Vec3::new(0.5, 0.0, 0.0),
        Vec3::ZERO,
        Vec3::new(1.0, 0.0, 0.0),
        &mut r
    ));
}

#[test]
fn flush_start_moving_inward_hits_at_zero() {
    let mut r = SweepResult::default();
    assert!(sweep(
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::ZERO,
        Vec3::new(1.0, 0.0, 0.0),
        &mut r
    ));
    assert_eq!(r.res(), 0.0);
    assert!(!unit().intersect_box(&Vec3::new(1.0, 0.0, 0.0), &unit()));
}

#[test]
fn flush_start_on_a_negative_axis_reports_positive_zero() {
    for (target, displacement, face) in [
        (Vec3::new(-1.0, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0), BlockFace::West),
        (Vec3::new(0.0, -1.0, 0.0), Vec3::new(0.0, -1.0, 0.0), BlockFace::Bottom),
        (Vec3::new(0.0, 0.0, -1.0), Vec3::new(0.0, 0.0, -1.0), BlockFace::North),
    ] {
        let mut r = SweepResult::default();
        assert!(sweep(target, Vec3::ZERO, displacement, &mut r));
        assert_eq!(r.res().to_bits(), 0.0_f64.to_bits());
        assert_eq!(r.face(), Some(face));
    }
}

#[test]
fn flush_start_moving_away_misses() {
    let mut r = SweepResult::default();
    assert!(!sweep(
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::ZERO,
        Vec3::new(-1.0, 0.0, 0.0),
        &mut r
    ));
}

#[test]
fn sliding_flush_along_a_face_is_not_contact() {
    let mut r = SweepResult::default();
    // Target directly below the mover; move sideways across its top face.
    assert!(!sweep(
        Vec3::new(1.0, -1.0, 0.0),
        Vec3::ZERO,
        Vec3::new(3.0, 0.0, 0.0),
        &mut r
    ));
}

#[test]
fn lateral_offset_misses() {
    let mut r = SweepResult::default();
    assert!(!sweep(
        Vec3::new(3.0, 0.0, 2.0),
        Vec3::ZERO,
        Vec3::new(5.0, 0.0, 0.0),
        &mut r
    ));
}

#[test]
fn contact_exactly_at_full_displacement_is_reported_as_one() {
    let mut r = SweepResult::default();
    assert!(sweep(
        Vec3::new(3.0, 0.0, 0.0),
        Vec3::ZERO,
        Vec3::new(2.0, 0.0, 0.0),
        &mut r
    ));
    assert_eq!(r.res(), 1.0);
    assert!(!r.hit_within_step());
}

#[test]
fn out_of_reach_target_is_not_recorded() {
    let mut r = SweepResult::default();
    assert!(!sweep(
        Vec3::new(3.0, 0.0, 0.0),
        Vec3::ZERO,
        Vec3::new(1.0, 0.0, 0.0),
        &mut r
    ));
    assert_eq!(r.res(), SweepResult::NO_HIT);
}

#[test]
fn seeded_bound_rejects_later_contacts() {
    let mut r = SweepResult::new(0.3);
    assert!(!sweep(
        Vec3::new(3.0, 0.0, 0.0),
        Vec3::ZERO,
        Vec3::new(5.0, 0.0, 0.0),
        &mut r
    ));
    assert_eq!(r.res(), 0.3);

    let mut r = SweepResult::new(0.5);
    assert!(sweep(
        Vec3::new(3.0, 0.0, 0.0),
        Vec3::ZERO,
        Vec3::new(5.0, 0.0, 0.0),
        &mut r
    ));
    assert!(r.res() < 0.5);
}

#[test]
fn tall_target_is_hit_from_above_its_anchor() {
    let tall = BoundingBox::new(1.0, 4.0, 1.0).expect("tall box");
    let mut r = SweepResult::default();
    assert!(tall.intersect_box_swept(
        &Vec3::new(0.0, 2.0, 0.0),
        &Vec3::new(4.0, 0.0, 0.0),
        &Vec3::new(3.0, 0.0, 0.0),
        &unit(),
        &mut r,
    ));
    assert!((r.res() - 0.5).abs() < 1e-12);
}

fn coord() -> impl Strategy<Value = f64> {
    -20.0f64..20.0
}

fn vec3() -> impl Strategy<Value = Vec3> {
    (coord(), coord(), coord()).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

proptest! {
    #[test]
    fn recorded_hits_stay_within_the_step(target in vec3(), displacement in vec3()) {
        let mut r = SweepResult::default();
        if sweep(target, Vec3::ZERO, displacement, &mut r) {
            prop_assert!((0.0..=1.0).contains(&r.res()));
            prop_assert!(r.face().is_some());
            let expected = displacement.scale(r.res());
            prop_assert_eq!(r.collided_position(), expected);
        } else {
            prop_assert_eq!(r, SweepResult::default());
        }
    }

    #[test]
    fn sweep_is_deterministic(target in vec3(), displacement in vec3()) {
        let mut a = SweepResult::default();
        let mut b = SweepResult::default();
        let hit_a = sweep(target, Vec3::ZERO, displacement, &mut a);
        let hit_b = sweep(target, Vec3::ZERO, displacement, &mut b);
        prop_assert_eq!(hit_a, hit_b);
        prop_assert_eq!(a, b);
    }
}
