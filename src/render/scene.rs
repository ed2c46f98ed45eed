use glam::{Mat4, Vec3};

use super::mesh::{MeshBank, MeshRange};
use crate::constants::*;

/// Animated attachment points. Every rigid part references one of these
/// plus a fixed local transform under it; the frame loop only ever
/// rewrites pivot transforms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pivot {
    Root,
    Head,
    ArmRight,
    ArmLeft,
    RingInner,
    RingOuter,
}

/// Opaque parts write depth; glow parts blend over them without it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    Opaque,
    Glow,
}

pub struct SceneNode {
    pub mesh: MeshRange,
    pub pivot: Pivot,
    pub local: Mat4,
    /// Albedo rgb + alpha.
    pub color: [f32; 4],
    /// Emissive rgb (intensity premultiplied); w carries metalness.
    pub emissive: [f32; 4],
    pub layer: Layer,
}

pub struct SceneBuild {
    pub bank: MeshBank,
    pub nodes: Vec<SceneNode>,
}

// Pivot anchor points in root space.
pub const HEAD_PIVOT: Vec3 = Vec3::new(0.0, 0.85, 0.0);
pub const ARM_RIGHT_PIVOT: Vec3 = Vec3::new(0.45, 0.3, 0.0);
pub const ARM_LEFT_PIVOT: Vec3 = Vec3::new(-0.45, 0.3, 0.0);

fn rgba(rgb: [f32; 3], alpha: f32) -> [f32; 4] {
    [rgb[0], rgb[1], rgb[2], alpha]
}

fn emissive(rgb: [f32; 3], intensity: f32, metalness: f32) -> [f32; 4] {
    [rgb[0] * intensity, rgb[1] * intensity, rgb[2] * intensity, metalness]
}

/// Assemble the whole figure plus the two orbit rings: geometry shared
/// where parts repeat (hands, legs, feet, shoulders reuse one mesh per
/// shape), one node per drawn part.
pub fn build() -> SceneBuild {
    let mut bank = MeshBank::new();

    let torso = bank.capsule(0.35, 0.8, SPHERE_SEGMENTS, SPHERE_RINGS);
    let core = bank.sphere(0.15, SPHERE_SEGMENTS, SPHERE_RINGS);
    let head = bank.sphere(0.25, SPHERE_SEGMENTS, SPHERE_RINGS);
    let visor = bank.cuboid(0.35, 0.1, 0.05);
    let arm = bank.capsule(0.08, 0.4, SPHERE_SEGMENTS, SPHERE_RINGS);
    let hand = bank.sphere(0.1, SPHERE_SEGMENTS, SPHERE_RINGS);
    let finger = bank.cone(0.03, 0.15, CONE_SEGMENTS);
    let leg = bank.capsule(0.1, 0.5, SPHERE_SEGMENTS, SPHERE_RINGS);
    let foot = bank.cuboid(0.12, 0.08, 0.2);
    let shoulder = bank.cuboid(0.15, 0.08, 0.15);
    let ring_inner = bank.torus(
        RING_INNER_RADIUS,
        RING_INNER_TUBE,
        TORUS_RADIAL_SEGMENTS,
        TORUS_TUBULAR_SEGMENTS,
    );
    let ring_outer = bank.torus(
        RING_OUTER_RADIUS,
        RING_OUTER_TUBE,
        TORUS_RADIAL_SEGMENTS,
        TORUS_TUBULAR_SEGMENTS,
    );

    // Material classes of the original palette: matte-metal body shell,
    // cyan glow trim, orange accents.
    let body_color = rgba(BODY_COLOR, 1.0);
    let body_emissive = emissive(BODY_COLOR, 0.0, 0.9);
    let glow_color = rgba(GLOW_COLOR, 1.0);
    let glow_emissive = emissive(GLOW_COLOR, 0.3, 0.8);
    let accent_color = rgba(ACCENT_COLOR, 1.0);
    let accent_emissive = emissive(ACCENT_COLOR, 0.4, 0.7);

    let mut nodes = Vec::new();
    let mut part = |mesh: MeshRange,
                    pivot: Pivot,
                    local: Mat4,
                    color: [f32; 4],
                    emissive: [f32; 4],
                    layer: Layer| {
        nodes.push(SceneNode {
            mesh,
            pivot,
            local,
            color,
            emissive,
            layer,
        });
    };

    part(
        torso,
        Pivot::Root,
        Mat4::IDENTITY,
        body_color,
        body_emissive,
        Layer::Opaque,
    );
    // Chest core: fully emissive, slightly translucent
    part(
        core,
        Pivot::Root,
        Mat4::from_translation(Vec3::new(0.0, 0.1, 0.2)),
        rgba(GLOW_COLOR, 0.8),
        emissive(GLOW_COLOR, 1.0, 0.0),
        Layer::Glow,
    );
    part(
        head,
        Pivot::Head,
        Mat4::IDENTITY,
        body_color,
        body_emissive,
        Layer::Opaque,
    );
    // Visor sits on the root, not the head: it holds still while the
    // head nods behind it.
    part(
        visor,
        Pivot::Root,
        Mat4::from_translation(Vec3::new(0.0, 0.88, 0.15))
            * Mat4::from_rotation_x(0.2),
        glow_color,
        glow_emissive,
        Layer::Opaque,
    );

    // Right arm: capsule, glowing hand, pointing finger cone
    part(
        arm,
        Pivot::ArmRight,
        Mat4::from_translation(Vec3::new(0.25, 0.0, 0.0))
            * Mat4::from_rotation_z(-std::f32::consts::FRAC_PI_2),
        body_color,
        body_emissive,
        Layer::Opaque,
    );
    part(
        hand,
        Pivot::ArmRight,
        Mat4::from_translation(Vec3::new(0.55, 0.0, 0.0)),
        glow_color,
        glow_emissive,
        Layer::Opaque,
    );
    part(
        finger,
        Pivot::ArmRight,
        Mat4::from_translation(Vec3::new(0.7, 0.0, 0.0))
            * Mat4::from_rotation_z(-std::f32::consts::FRAC_PI_2),
        accent_color,
        accent_emissive,
        Layer::Opaque,
    );

    // Left arm: capsule and hand only
    part(
        arm,
        Pivot::ArmLeft,
        Mat4::from_translation(Vec3::new(-0.25, 0.0, 0.0))
            * Mat4::from_rotation_z(std::f32::consts::FRAC_PI_2),
        body_color,
        body_emissive,
        Layer::Opaque,
    );
    part(
        hand,
        Pivot::ArmLeft,
        Mat4::from_translation(Vec3::new(-0.55, 0.0, 0.0)),
        glow_color,
        glow_emissive,
        Layer::Opaque,
    );

    // Legs, feet, shoulders mirror left/right
    for side in [1.0f32, -1.0] {
        part(
            leg,
            Pivot::Root,
            Mat4::from_translation(Vec3::new(0.15 * side, -0.7, 0.0)),
            body_color,
            body_emissive,
            Layer::Opaque,
        );
        part(
            foot,
            Pivot::Root,
            Mat4::from_translation(Vec3::new(0.15 * side, -1.1, 0.05)),
            glow_color,
            glow_emissive,
            Layer::Opaque,
        );
        part(
            shoulder,
            Pivot::Root,
            Mat4::from_translation(Vec3::new(0.4 * side, 0.45, 0.0)),
            accent_color,
            accent_emissive,
            Layer::Opaque,
        );
    }

    // Orbit rings: translucent, never depth-written
    part(
        ring_inner,
        Pivot::RingInner,
        Mat4::IDENTITY,
        rgba(GLOW_COLOR, RING_INNER_OPACITY),
        emissive(GLOW_COLOR, 0.5, 0.0),
        Layer::Glow,
    );
    part(
        ring_outer,
        Pivot::RingOuter,
        Mat4::IDENTITY,
        rgba(ACCENT_COLOR, RING_OUTER_OPACITY),
        emissive(ACCENT_COLOR, 0.5, 0.0),
        Layer::Glow,
    );

    SceneBuild { bank, nodes }
}
