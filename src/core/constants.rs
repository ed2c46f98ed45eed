/// Choreography tuning constants.
///
/// Every frequency, amplitude, and gain that shapes the figure's motion
/// lives here so the pose and effects code reads as formulas, not as
/// magic numbers. Frequencies are radians per second, angles radians.
// Root bob (gentle vertical idle)
pub const BOB_FREQ: f32 = 0.5;
pub const BOB_AMP: f32 = 0.1;

// Root yaw follows scroll progress across a fifth of a half-turn
pub const YAW_SPAN: f32 = std::f32::consts::PI * 0.2;
// Time constant for the yaw chase; one 60 Hz frame covers ~2% of the
// remaining distance.
pub const YAW_SMOOTH_TAU_SEC: f32 = 0.825;

// Head idle (nod about x, tilt about z)
pub const HEAD_NOD_FREQ: f32 = 0.3;
pub const HEAD_NOD_AMP: f32 = 0.1;
pub const HEAD_TILT_FREQ: f32 = 0.5;
pub const HEAD_TILT_AMP: f32 = 0.05;

// Pointing arm (right): raised base angle, lifts further with progress,
// wavers on top
pub const ARM_POINT_BASE: f32 = -std::f32::consts::FRAC_PI_6;
pub const ARM_POINT_PROGRESS_GAIN: f32 = 0.5;
pub const ARM_POINT_WAVE_FREQ: f32 = 2.0;
pub const ARM_POINT_WAVE_AMP: f32 = 0.2;
pub const ARM_POINT_SWING_FREQ: f32 = 1.5;
pub const ARM_POINT_SWING_AMP: f32 = 0.1;

// Resting arm (left)
pub const ARM_REST_BASE: f32 = std::f32::consts::FRAC_PI_8;
pub const ARM_REST_WAVE_FREQ: f32 = 1.2;
pub const ARM_REST_WAVE_AMP: f32 = 0.1;

// Whole-figure sway layered above the root pose
pub const SWAY_SPEED: f32 = 2.0;
pub const SWAY_ROT_INTENSITY: f32 = 0.2;
pub const SWAY_FLOAT_INTENSITY: f32 = 0.5;

// Orbit ring spin rates (radians per second, absolute schedules)
pub const RING_INNER_X_RATE: f32 = 0.3;
pub const RING_INNER_Z_RATE: f32 = 0.2;
pub const RING_OUTER_X_RATE: f32 = -0.2;
pub const RING_OUTER_Y_RATE: f32 = 0.3;

// Ambient particle cloud: slow whole-cloud drift only
pub const CLOUD_YAW_RATE: f32 = 0.02;
pub const CLOUD_PITCH_RATE: f32 = 0.01;
pub const CLOUD_COUNT: usize = 100;
pub const CLOUD_EXTENT: f32 = 10.0; // side of the centered cube

// Background star shell
pub const STAR_COUNT: usize = 1000;
pub const STAR_RADIUS_MIN: f32 = 100.0;
pub const STAR_RADIUS_MAX: f32 = 150.0;
pub const STAR_SPIN_RATE: f32 = 0.005;

// Scatter seeds; the star stream is decorrelated from the cloud stream
pub const SCATTER_SEED: u64 = 42;
pub const SCATTER_STREAM_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

// A section becomes active once its top crosses this fraction of the
// viewport height.
pub const SECTION_TRIGGER_FRACTION: f32 = 0.5;
