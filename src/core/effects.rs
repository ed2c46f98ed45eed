use glam::Vec3;
use rand::{rngs::StdRng, Rng, SeedableRng};

use super::constants::*;
use super::pose::PartTransform;

/// Orientations of the two orbit rings at time `t`. Each ring spins on
/// its own pair of axes; absolute values, no accumulated state.
pub fn ring_orientations(t: f32) -> [Vec3; 2] {
    [
        Vec3::new(t * RING_INNER_X_RATE, 0.0, t * RING_INNER_Z_RATE),
        Vec3::new(t * RING_OUTER_X_RATE, t * RING_OUTER_Y_RATE, 0.0),
    ]
}

/// Whole-cloud drift for the ambient particles. Individual particle
/// positions never change; only this layer orientation does.
pub fn cloud_orientation(t: f32) -> Vec3 {
    Vec3::new(t * CLOUD_PITCH_RATE, t * CLOUD_YAW_RATE, 0.0)
}

/// Slow spin of the background star shell.
pub fn star_orientation(t: f32) -> Vec3 {
    Vec3::new(0.0, t * STAR_SPIN_RATE, 0.0)
}

/// Gentle whole-figure drift layered above the root pose.
pub fn float_sway(t: f32) -> PartTransform {
    let s = t * SWAY_SPEED / 4.0;
    PartTransform {
        position: Vec3::new(0.0, s.sin() / 10.0 * SWAY_FLOAT_INTENSITY, 0.0),
        rotation: Vec3::new(
            s.cos() / 8.0 * SWAY_ROT_INTENSITY,
            s.sin() / 8.0 * SWAY_ROT_INTENSITY,
            s.sin() / 20.0 * SWAY_ROT_INTENSITY,
        ),
    }
}

/// Deterministic RNG for the cloud scatter.
pub fn cloud_rng() -> StdRng {
    StdRng::seed_from_u64(SCATTER_SEED)
}

/// Deterministic RNG for the star scatter, decorrelated from the cloud.
pub fn star_rng() -> StdRng {
    StdRng::seed_from_u64(SCATTER_SEED ^ SCATTER_STREAM_MIX)
}

/// Uniform particle positions inside a centered cube of side `extent`.
/// Called once at scene build; the result is uploaded and never touched
/// again.
pub fn scatter_cloud(rng: &mut StdRng, count: usize, extent: f32) -> Vec<Vec3> {
    let half = extent * 0.5;
    (0..count)
        .map(|_| {
            Vec3::new(
                rng.gen_range(-half..half),
                rng.gen_range(-half..half),
                rng.gen_range(-half..half),
            )
        })
        .collect()
}

/// Uniform directions at uniform radii in `[r_min, r_max)`: the distant
/// star shell behind the figure.
pub fn scatter_shell(rng: &mut StdRng, count: usize, r_min: f32, r_max: f32) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            let y: f32 = rng.gen_range(-1.0..1.0);
            let theta: f32 = rng.gen_range(0.0..std::f32::consts::TAU);
            let ring = (1.0 - y * y).sqrt();
            let radius = rng.gen_range(r_min..r_max);
            Vec3::new(ring * theta.cos(), y, ring * theta.sin()) * radius
        })
        .collect()
}
