use glam::Vec3;

/// Presentation tuning constants: camera, lights, palette, layer sizing.
///
/// Choreography constants (frequencies, amplitudes, smoothing) live in
/// `core::constants`; this file holds everything the renderer and the
/// page wiring need.
// Canvas and breakpoint wiring
pub const CANVAS_ID: &str = "guide-canvas";
// The host page hides the view below its large breakpoint; the loop
// mounts and unmounts on the same query.
pub const VIEW_MEDIA_QUERY: &str = "(min-width: 1024px)";

// Frame timing
// Upper bound on the per-frame dt fed to smoothing (a tab restored from
// the background otherwise reports seconds of "elapsed frame").
pub const DT_CLAMP_SEC: f32 = 0.1;

// Camera
pub const CAMERA_EYE: Vec3 = Vec3::new(0.0, 0.0, 4.0);
pub const CAMERA_FOVY_RADIANS: f32 = 50.0 * std::f32::consts::PI / 180.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
// Far enough to keep the star shell (radius up to 150) in frustum.
pub const CAMERA_ZFAR: f32 = 200.0;

// Figure placement: the whole group sits a little below center so the
// camera frames the chest, not the face.
pub const ROOT_OFFSET: Vec3 = Vec3::new(0.0, -0.5, 0.0);
pub const ROOT_SCALE: f32 = 0.8;

// Palette (sRGB-ish triples)
pub const BODY_COLOR: [f32; 3] = [0.102, 0.102, 0.180]; // deep navy
pub const GLOW_COLOR: [f32; 3] = [0.0, 0.831, 1.0]; // cyan
pub const ACCENT_COLOR: [f32; 3] = [1.0, 0.624, 0.110]; // orange

// Light rig
pub const AMBIENT_INTENSITY: f32 = 0.3;
pub const KEY_LIGHT_POS: Vec3 = Vec3::new(5.0, 5.0, 5.0);
pub const KEY_LIGHT_INTENSITY: f32 = 1.0;
pub const FILL_LIGHT_POS: Vec3 = Vec3::new(-5.0, -5.0, 5.0);
pub const FILL_LIGHT_INTENSITY: f32 = 0.5;
// Soft cyan spot from above
pub const SPOT_LIGHT_POS: Vec3 = Vec3::new(0.0, 5.0, 0.0);
pub const SPOT_LIGHT_INTENSITY: f32 = 0.5;
pub const SPOT_CONE_ANGLE: f32 = 0.3; // radians, half-angle

// Orbit rings
pub const RING_INNER_RADIUS: f32 = 1.5;
pub const RING_INNER_TUBE: f32 = 0.02;
pub const RING_INNER_OPACITY: f32 = 0.4;
pub const RING_OUTER_RADIUS: f32 = 1.8;
pub const RING_OUTER_TUBE: f32 = 0.015;
pub const RING_OUTER_OPACITY: f32 = 0.3;

// Particle layers
pub const CLOUD_POINT_SIZE: f32 = 0.05;
pub const CLOUD_POINT_ALPHA: f32 = 0.6;
pub const STAR_POINT_SIZE: f32 = 2.0; // world units at shell distance
pub const STAR_POINT_ALPHA: f32 = 0.8;

// Mesh tessellation
pub const SPHERE_SEGMENTS: u32 = 24;
pub const SPHERE_RINGS: u32 = 16;
pub const TORUS_RADIAL_SEGMENTS: u32 = 12;
pub const TORUS_TUBULAR_SEGMENTS: u32 = 64;
pub const CONE_SEGMENTS: u32 = 16;
