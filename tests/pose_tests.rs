// Host-side tests for the procedural pose and yaw smoothing.
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
}

use crate::core::constants::*;
use crate::core::pose::*;
use crate::core::scroll::{ScrollState, Section};

#[test]
fn idle_pose_is_pure_in_its_inputs() {
    let a = idle_pose(12.25, 0.4, 0.1);
    let b = idle_pose(12.25, 0.4, 0.1);
    assert_eq!(a, b);
}

#[test]
fn pose_stays_inside_its_amplitude_envelope() {
    for i in 0..400 {
        let t = i as f32 * 0.173;
        let pose = idle_pose(t, 0.5, 0.2);

        assert!(pose.root.position.y.abs() <= BOB_AMP + 1e-6);
        assert!(pose.head.rotation.x.abs() <= HEAD_NOD_AMP + 1e-6);
        assert!(pose.head.rotation.z.abs() <= HEAD_TILT_AMP + 1e-6);
        assert!(pose.arm_right.rotation.x.abs() <= ARM_POINT_SWING_AMP + 1e-6);

        // Pointing arm: base plus progress lift plus bounded waver
        let center = ARM_POINT_BASE + 0.5 * ARM_POINT_PROGRESS_GAIN;
        assert!((pose.arm_right.rotation.z - center).abs() <= ARM_POINT_WAVE_AMP + 1e-6);

        // Resting arm wavers around its base angle
        assert!((pose.arm_left.rotation.z - ARM_REST_BASE).abs() <= ARM_REST_WAVE_AMP + 1e-6);
    }
}

#[test]
fn root_yaw_is_the_supplied_smoothed_value() {
    let pose = idle_pose(3.0, 0.7, 0.123);
    assert_eq!(pose.root.rotation.y, 0.123);
    // Yaw does not leak into any other channel
    assert_eq!(pose.root.rotation.x, 0.0);
    assert_eq!(pose.root.rotation.z, 0.0);
}

#[test]
fn scroll_progress_lifts_the_pointing_arm() {
    let t = 7.7;
    let rest = idle_pose(t, 0.0, 0.0);
    let full = idle_pose(t, 1.0, 0.0);
    let lift = full.arm_right.rotation.z - rest.arm_right.rotation.z;
    assert!((lift - ARM_POINT_PROGRESS_GAIN).abs() < 1e-5);
    // The resting arm ignores progress entirely
    assert_eq!(rest.arm_left, full.arm_left);
}

#[test]
fn yaw_target_spans_the_configured_arc() {
    assert_eq!(yaw_target(0.0), 0.0);
    assert!((yaw_target(1.0) - YAW_SPAN).abs() < 1e-6);
    assert!((yaw_target(0.5) - YAW_SPAN * 0.5).abs() < 1e-6);
}

#[test]
fn smooth_toward_is_identity_at_zero_dt() {
    assert_eq!(smooth_toward(0.3, 1.0, 0.0, YAW_SMOOTH_TAU_SEC), 0.3);
    assert_eq!(smooth_toward(0.3, 1.0, -0.01, YAW_SMOOTH_TAU_SEC), 0.3);
}

#[test]
fn smooth_toward_approaches_monotonically_without_overshoot() {
    let target = 0.5f32;
    let mut yaw = 0.0;
    let mut prev_gap = (target - yaw).abs();
    for _ in 0..600 {
        yaw = smooth_toward(yaw, target, 1.0 / 60.0, YAW_SMOOTH_TAU_SEC);
        let gap = (target - yaw).abs();
        assert!(gap <= prev_gap, "distance to target grew");
        assert!(yaw <= target + 1e-6, "overshot the target");
        prev_gap = gap;
    }
    // Ten seconds is plenty to settle within a milliradian
    assert!((target - yaw).abs() < 1e-3);
}

#[test]
fn smooth_toward_handles_irregular_frame_times() {
    // Alternating short and long frames, as a busy tab delivers
    let target = -0.4f32;
    let mut yaw = 0.2;
    let dts = [0.004, 0.05, 0.016, 0.1, 0.008, 0.033];
    let mut prev_gap = (target - yaw).abs();
    for i in 0..300 {
        yaw = smooth_toward(yaw, target, dts[i % dts.len()], YAW_SMOOTH_TAU_SEC);
        let gap = (target - yaw).abs();
        assert!(gap <= prev_gap);
        assert!(yaw >= target - 1e-6);
        prev_gap = gap;
    }
}

#[test]
fn smoothing_depends_on_elapsed_time_not_frame_count() {
    // Covering the same wall-clock span in different step sizes must
    // land at the same yaw: the decay is exponential in time.
    let target = 1.0;
    let mut coarse = 0.0f32;
    for _ in 0..60 {
        coarse = smooth_toward(coarse, target, 1.0 / 60.0, YAW_SMOOTH_TAU_SEC);
    }
    let mut fine = 0.0f32;
    for _ in 0..240 {
        fine = smooth_toward(fine, target, 1.0 / 240.0, YAW_SMOOTH_TAU_SEC);
    }
    assert!(
        (coarse - fine).abs() < 1e-4,
        "coarse {coarse} and fine {fine} diverged"
    );
}

#[test]
fn animator_settles_on_the_scroll_target() {
    let mut animator = Animator::new();
    let scroll = ScrollState {
        progress: 1.0,
        section: Section::Contact,
    };
    let mut t = 0.0;
    for _ in 0..1200 {
        t += 1.0 / 60.0;
        let pose = animator.advance(t, 1.0 / 60.0, &scroll);
        // The smoothed yaw is what the pose carries
        assert_eq!(pose.root.rotation.y, animator.yaw());
        assert!(animator.yaw() <= YAW_SPAN + 1e-6);
    }
    assert!((animator.yaw() - YAW_SPAN).abs() < 1e-3);
}

#[test]
fn animator_tracks_a_moving_target_smoothly() {
    let mut animator = Animator::new();
    let mut t = 0.0;
    // Scroll to the bottom, then jump back to the top
    for _ in 0..600 {
        t += 1.0 / 60.0;
        let scroll = ScrollState {
            progress: 1.0,
            section: Section::Contact,
        };
        animator.advance(t, 1.0 / 60.0, &scroll);
    }
    let near_full = animator.yaw();
    assert!(near_full > YAW_SPAN * 0.9);

    let top = ScrollState {
        progress: 0.0,
        section: Section::Hero,
    };
    animator.advance(t + 1.0 / 60.0, 1.0 / 60.0, &top);
    let after_jump = animator.yaw();
    // One frame later the yaw has barely moved; no snap
    assert!(after_jump < near_full);
    assert!(near_full - after_jump < YAW_SPAN * 0.05);
}
