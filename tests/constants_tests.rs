// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn choreography_constants_are_within_bounds() {
    // Frequencies and amplitudes are positive
    assert!(BOB_FREQ > 0.0 && BOB_AMP > 0.0);
    assert!(HEAD_NOD_FREQ > 0.0 && HEAD_NOD_AMP > 0.0);
    assert!(HEAD_TILT_FREQ > 0.0 && HEAD_TILT_AMP > 0.0);
    assert!(ARM_POINT_WAVE_FREQ > 0.0 && ARM_POINT_WAVE_AMP > 0.0);
    assert!(ARM_POINT_SWING_FREQ > 0.0 && ARM_POINT_SWING_AMP > 0.0);
    assert!(ARM_REST_WAVE_FREQ > 0.0 && ARM_REST_WAVE_AMP > 0.0);
    assert!(SWAY_SPEED > 0.0);

    // The yaw sweep stays well under a half-turn
    assert!(YAW_SPAN > 0.0 && YAW_SPAN < std::f32::consts::PI);

    // Smoothing time constant is positive
    assert!(YAW_SMOOTH_TAU_SEC > 0.0);

    // Section trigger is a viewport fraction
    assert!(SECTION_TRIGGER_FRACTION > 0.0 && SECTION_TRIGGER_FRACTION < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn yaw_smoothing_covers_two_percent_per_frame_at_60hz() {
    // The time constant is chosen so one 60 Hz frame closes ~2% of the
    // remaining distance to the yaw target.
    let dt = 1.0 / 60.0;
    let step_fraction = 1.0 - (-dt / YAW_SMOOTH_TAU_SEC).exp();
    assert!(
        (step_fraction - 0.02).abs() < 0.002,
        "per-frame fraction {step_fraction} drifted from 2%"
    );
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_layer_constants_are_consistent() {
    assert!(CLOUD_COUNT > 0);
    assert!(CLOUD_EXTENT > 0.0);
    assert!(STAR_COUNT > 0);

    // Star shell is a proper annulus behind the figure
    assert!(STAR_RADIUS_MIN > 0.0);
    assert!(STAR_RADIUS_MAX > STAR_RADIUS_MIN);

    // Point sizing and opacity
    assert!(CLOUD_POINT_SIZE > 0.0);
    assert!(STAR_POINT_SIZE > 0.0);
    assert!(CLOUD_POINT_ALPHA > 0.0 && CLOUD_POINT_ALPHA <= 1.0);
    assert!(STAR_POINT_ALPHA > 0.0 && STAR_POINT_ALPHA <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_covers_the_star_shell() {
    assert!(CAMERA_ZNEAR > 0.0);
    assert!(CAMERA_ZFAR > CAMERA_ZNEAR);
    assert!(CAMERA_FOVY_RADIANS > 0.0 && CAMERA_FOVY_RADIANS < std::f32::consts::PI);

    // The far plane must reach past the farthest star from the eye
    assert!(CAMERA_ZFAR >= STAR_RADIUS_MAX + CAMERA_EYE.length());
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scene_constants_have_logical_relationships() {
    // Outer ring encloses the inner ring
    assert!(RING_OUTER_RADIUS > RING_INNER_RADIUS);
    assert!(RING_INNER_TUBE > 0.0 && RING_OUTER_TUBE > 0.0);
    assert!(RING_INNER_OPACITY > 0.0 && RING_INNER_OPACITY < 1.0);
    assert!(RING_OUTER_OPACITY > 0.0 && RING_OUTER_OPACITY < 1.0);

    // Palette channels are normalized
    for c in BODY_COLOR.iter().chain(GLOW_COLOR.iter()).chain(ACCENT_COLOR.iter()) {
        assert!((0.0..=1.0).contains(c));
    }

    assert!(ROOT_SCALE > 0.0);
    assert!(DT_CLAMP_SEC > 0.0);
    assert!(AMBIENT_INTENSITY > 0.0);

    // Tessellation leaves no degenerate primitives
    assert!(SPHERE_SEGMENTS >= 3 && SPHERE_RINGS >= 2);
    assert!(TORUS_RADIAL_SEGMENTS >= 3 && TORUS_TUBULAR_SEGMENTS >= 3);
    assert!(CONE_SEGMENTS >= 3);
}

#[test]
fn breakpoint_and_canvas_ids_are_wired() {
    assert!(VIEW_MEDIA_QUERY.contains("min-width"));
    assert!(!CANVAS_ID.is_empty());
}
