pub mod camera;
pub mod constants;
pub mod effects;
pub mod pose;
pub mod scroll;

pub use camera::*;
pub use pose::*;
pub use scroll::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
pub static POINTS_WGSL: &str = include_str!("../../shaders/points.wgsl");
