use glam::Vec3;

use super::constants::*;
use super::scroll::ScrollState;

/// Translation plus XYZ Euler rotation for one figure part.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PartTransform {
    pub position: Vec3,
    pub rotation: Vec3,
}

/// Per-frame pose of the articulated parts. Rigid children (torso,
/// visor, legs, feet) hang off these pivots with fixed local offsets.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GuidePose {
    pub root: PartTransform,
    pub head: PartTransform,
    pub arm_right: PartTransform,
    pub arm_left: PartTransform,
}

/// Closed-form pose at time `t` under scroll progress `progress`, with
/// the smoothed yaw supplied by the caller. Pure in all three inputs.
pub fn idle_pose(t: f32, progress: f32, yaw: f32) -> GuidePose {
    // Pointing arm: progress lift and idle waver are additive terms on
    // the same axis.
    let point_z = ARM_POINT_BASE
        + progress * ARM_POINT_PROGRESS_GAIN
        + (t * ARM_POINT_WAVE_FREQ).sin() * ARM_POINT_WAVE_AMP;

    GuidePose {
        root: PartTransform {
            position: Vec3::new(0.0, (t * BOB_FREQ).sin() * BOB_AMP, 0.0),
            rotation: Vec3::new(0.0, yaw, 0.0),
        },
        head: PartTransform {
            position: Vec3::ZERO,
            rotation: Vec3::new(
                (t * HEAD_NOD_FREQ).sin() * HEAD_NOD_AMP,
                0.0,
                (t * HEAD_TILT_FREQ).sin() * HEAD_TILT_AMP,
            ),
        },
        arm_right: PartTransform {
            position: Vec3::ZERO,
            rotation: Vec3::new(
                (t * ARM_POINT_SWING_FREQ).sin() * ARM_POINT_SWING_AMP,
                0.0,
                point_z,
            ),
        },
        arm_left: PartTransform {
            position: Vec3::ZERO,
            rotation: Vec3::new(
                0.0,
                0.0,
                ARM_REST_BASE + (t * ARM_REST_WAVE_FREQ).sin() * ARM_REST_WAVE_AMP,
            ),
        },
    }
}

/// Yaw the figure settles toward at a given scroll progress.
pub fn yaw_target(progress: f32) -> f32 {
    progress * YAW_SPAN
}

/// Move `current` toward `target` by exponential decay over `dt`
/// seconds. Never overshoots; `dt = 0` is the identity.
pub fn smooth_toward(current: f32, target: f32, dt: f32, tau: f32) -> f32 {
    if dt <= 0.0 {
        return current;
    }
    let alpha = 1.0 - (-dt / tau).exp();
    current + (target - current) * alpha
}

/// Owns the one piece of cross-frame animation state: the smoothed root
/// yaw chasing its scroll-driven target.
#[derive(Clone, Copy, Debug, Default)]
pub struct Animator {
    yaw: f32,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    /// One tick: update the smoothed yaw, then evaluate the pose.
    pub fn advance(&mut self, t: f32, dt: f32, scroll: &ScrollState) -> GuidePose {
        self.yaw = smooth_toward(self.yaw, yaw_target(scroll.progress), dt, YAW_SMOOTH_TAU_SEC);
        idle_pose(t, scroll.progress, self.yaw)
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }
}
