// Host-side tests for the ambient effect schedules and scatters.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod scroll {
        include!("../src/core/scroll.rs");
    }
    pub mod pose {
        include!("../src/core/pose.rs");
    }
    pub mod effects {
        include!("../src/core/effects.rs");
    }
}

use crate::core::constants::*;
use crate::core::effects::*;

#[test]
fn ring_orientations_follow_absolute_time() {
    let zero = ring_orientations(0.0);
    assert_eq!(zero[0], glam::Vec3::ZERO);
    assert_eq!(zero[1], glam::Vec3::ZERO);

    let t = 12.5;
    let [inner, outer] = ring_orientations(t);
    assert!((inner.x - t * RING_INNER_X_RATE).abs() < 1e-5);
    assert_eq!(inner.y, 0.0);
    assert!((inner.z - t * RING_INNER_Z_RATE).abs() < 1e-5);
    assert!((outer.x - t * RING_OUTER_X_RATE).abs() < 1e-5);
    assert!((outer.y - t * RING_OUTER_Y_RATE).abs() < 1e-5);
    assert_eq!(outer.z, 0.0);
}

#[test]
fn effect_schedules_are_stateless_in_time() {
    // Absolute schedules: the value at 2t is twice the value at t, so a
    // skipped frame cannot leave residue.
    let t = 3.3;
    let a = ring_orientations(t);
    let b = ring_orientations(2.0 * t);
    assert!((b[0].x - 2.0 * a[0].x).abs() < 1e-5);
    assert!((b[1].y - 2.0 * a[1].y).abs() < 1e-5);

    let c = cloud_orientation(t);
    let d = cloud_orientation(2.0 * t);
    assert!((d.x - 2.0 * c.x).abs() < 1e-5);
    assert!((d.y - 2.0 * c.y).abs() < 1e-5);

    assert!((star_orientation(2.0 * t).y - 2.0 * star_orientation(t).y).abs() < 1e-5);
}

#[test]
fn cloud_and_star_spin_on_their_own_axes() {
    let c = cloud_orientation(9.0);
    assert!((c.x - 9.0 * CLOUD_PITCH_RATE).abs() < 1e-6);
    assert!((c.y - 9.0 * CLOUD_YAW_RATE).abs() < 1e-6);
    assert_eq!(c.z, 0.0);

    let s = star_orientation(9.0);
    assert_eq!(s.x, 0.0);
    assert!((s.y - 9.0 * STAR_SPIN_RATE).abs() < 1e-6);
    assert_eq!(s.z, 0.0);
}

#[test]
fn float_sway_stays_gentle() {
    for i in 0..500 {
        let t = i as f32 * 0.217;
        let sway = float_sway(t);
        assert_eq!(sway.position.x, 0.0);
        assert_eq!(sway.position.z, 0.0);
        assert!(sway.position.y.abs() <= SWAY_FLOAT_INTENSITY / 10.0 + 1e-6);
        assert!(sway.rotation.x.abs() <= SWAY_ROT_INTENSITY / 8.0 + 1e-6);
        assert!(sway.rotation.y.abs() <= SWAY_ROT_INTENSITY / 8.0 + 1e-6);
        assert!(sway.rotation.z.abs() <= SWAY_ROT_INTENSITY / 20.0 + 1e-6);
    }
}

#[test]
fn cloud_scatter_is_reproducible_and_bounded() {
    let a = scatter_cloud(&mut cloud_rng(), CLOUD_COUNT, CLOUD_EXTENT);
    let b = scatter_cloud(&mut cloud_rng(), CLOUD_COUNT, CLOUD_EXTENT);
    assert_eq!(a.len(), CLOUD_COUNT);
    assert_eq!(a, b, "same seed must scatter identically");

    let half = CLOUD_EXTENT * 0.5;
    for p in &a {
        assert!(p.x.abs() <= half && p.y.abs() <= half && p.z.abs() <= half);
    }

    // Not degenerate: particles actually spread out
    let spread = a
        .iter()
        .map(|p| p.length())
        .fold(0.0f32, |acc, l| acc.max(l));
    assert!(spread > half * 0.5);
}

#[test]
fn star_scatter_fills_the_shell() {
    let stars = scatter_shell(&mut star_rng(), STAR_COUNT, STAR_RADIUS_MIN, STAR_RADIUS_MAX);
    assert_eq!(stars.len(), STAR_COUNT);
    for p in &stars {
        let r = p.length();
        assert!(
            r >= STAR_RADIUS_MIN - 1e-2 && r <= STAR_RADIUS_MAX + 1e-2,
            "star at radius {r} escaped the shell"
        );
    }

    // Both hemispheres get stars
    let above = stars.iter().filter(|p| p.y > 0.0).count();
    assert!(above > STAR_COUNT / 4 && above < 3 * STAR_COUNT / 4);

    // Reproducible under the same seed
    let again = scatter_shell(&mut star_rng(), STAR_COUNT, STAR_RADIUS_MIN, STAR_RADIUS_MAX);
    assert_eq!(stars, again);
}

#[test]
fn star_stream_is_decorrelated_from_the_cloud() {
    let cloud = scatter_cloud(&mut cloud_rng(), 8, CLOUD_EXTENT);
    let mut mixed = star_rng();
    let from_star_stream = scatter_cloud(&mut mixed, 8, CLOUD_EXTENT);
    assert_ne!(cloud, from_star_stream);
}
