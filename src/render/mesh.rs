use bytemuck::{Pod, Zeroable};

/// One vertex of the shared geometry buffers.
///
/// | offset | size | field    |
/// |--------|------|----------|
/// | 0      | 12   | position |
/// | 12     | 12   | normal   |
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Where one primitive lives inside the shared buffers.
#[derive(Copy, Clone, Debug)]
pub struct MeshRange {
    pub base_vertex: i32,
    pub index_start: u32,
    pub index_count: u32,
}

/// Accumulates every primitive into a single vertex/index pair so the
/// whole scene binds two buffers and draws by range.
#[derive(Default)]
pub struct MeshBank {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshBank {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, vertices: Vec<Vertex>, indices: Vec<u32>) -> MeshRange {
        let range = MeshRange {
            base_vertex: self.vertices.len() as i32,
            index_start: self.indices.len() as u32,
            index_count: indices.len() as u32,
        };
        self.vertices.extend(vertices);
        self.indices.extend(indices);
        range
    }

    /// UV sphere: `rings` latitude rows from pole to pole, `segments`
    /// longitude columns.
    pub fn sphere(&mut self, radius: f32, segments: u32, rings: u32) -> MeshRange {
        let mut vertices = Vec::new();
        for ring in 0..=rings {
            let phi = std::f32::consts::PI * ring as f32 / rings as f32;
            push_lat_ring(&mut vertices, phi, radius, 0.0, segments);
        }
        let indices = grid_indices(rings, segments);
        self.push(vertices, indices)
    }

    /// Capsule: a cylinder of height `length` capped by hemispheres of
    /// `radius` (total height `length + 2 * radius`), centered at the
    /// origin, axis along +y.
    pub fn capsule(&mut self, radius: f32, length: f32, segments: u32, rings: u32) -> MeshRange {
        let half = length * 0.5;
        let hemi = (rings / 2).max(1);
        let mut vertices = Vec::new();
        // Upper hemisphere ends on an equator row at +half, the lower
        // one starts on an equator row at -half; the quad strip between
        // the two duplicated equators is the cylinder wall.
        for ring in 0..=hemi {
            let phi = std::f32::consts::FRAC_PI_2 * ring as f32 / hemi as f32;
            push_lat_ring(&mut vertices, phi, radius, half, segments);
        }
        for ring in 0..=hemi {
            let phi =
                std::f32::consts::FRAC_PI_2 * (1.0 + ring as f32 / hemi as f32);
            push_lat_ring(&mut vertices, phi, radius, -half, segments);
        }
        let rows = 2 * hemi + 1;
        let indices = grid_indices(rows, segments);
        self.push(vertices, indices)
    }

    /// Axis-aligned box with the given full extents, four vertices per
    /// face so every face gets a flat normal.
    pub fn cuboid(&mut self, w: f32, h: f32, d: f32) -> MeshRange {
        let (hw, hh, hd) = (w * 0.5, h * 0.5, d * 0.5);
        // (normal, tangent, bitangent) per face; corners wound so the
        // cross of the edges points along the normal.
        let faces: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
            ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
            ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
            ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
            ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
            ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
            ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ];
        let half = [hw, hh, hd];
        let mut vertices = Vec::new();
        let mut indices = Vec::new();
        for (normal, tangent, bitangent) in faces {
            let base = vertices.len() as u32;
            for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
                let mut position = [0.0f32; 3];
                for axis in 0..3 {
                    position[axis] = (normal[axis]
                        + su * tangent[axis]
                        + sv * bitangent[axis])
                        * half[axis];
                }
                vertices.push(Vertex { position, normal });
            }
            indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }
        self.push(vertices, indices)
    }

    /// Cone with its apex at +height/2 and base at -height/2, base cap
    /// included.
    pub fn cone(&mut self, radius: f32, height: f32, segments: u32) -> MeshRange {
        let half = height * 0.5;
        let slant = (height * height + radius * radius).sqrt();
        let mut vertices = Vec::new();
        let mut indices = Vec::new();
        // Side: one apex vertex per segment so each slant quad keeps its
        // own normal.
        for seg in 0..=segments {
            let theta = std::f32::consts::TAU * seg as f32 / segments as f32;
            let (sin, cos) = theta.sin_cos();
            let normal = [height * cos / slant, radius / slant, height * sin / slant];
            vertices.push(Vertex {
                position: [0.0, half, 0.0],
                normal,
            });
            vertices.push(Vertex {
                position: [radius * cos, -half, radius * sin],
                normal,
            });
        }
        for seg in 0..segments {
            let a = seg * 2;
            indices.extend_from_slice(&[a, a + 3, a + 1]);
        }
        // Base cap fan
        let center = vertices.len() as u32;
        vertices.push(Vertex {
            position: [0.0, -half, 0.0],
            normal: [0.0, -1.0, 0.0],
        });
        for seg in 0..=segments {
            let theta = std::f32::consts::TAU * seg as f32 / segments as f32;
            vertices.push(Vertex {
                position: [radius * theta.cos(), -half, radius * theta.sin()],
                normal: [0.0, -1.0, 0.0],
            });
        }
        for seg in 0..segments {
            indices.extend_from_slice(&[center, center + 1 + seg, center + 2 + seg]);
        }
        self.push(vertices, indices)
    }

    /// Torus in the xy plane (the hole faces +z), matching the rings'
    /// rest orientation.
    pub fn torus(
        &mut self,
        radius: f32,
        tube: f32,
        radial_segments: u32,
        tubular_segments: u32,
    ) -> MeshRange {
        let mut vertices = Vec::new();
        for j in 0..=radial_segments {
            let v = std::f32::consts::TAU * j as f32 / radial_segments as f32;
            let (sv, cv) = v.sin_cos();
            for i in 0..=tubular_segments {
                let u = std::f32::consts::TAU * i as f32 / tubular_segments as f32;
                let (su, cu) = u.sin_cos();
                vertices.push(Vertex {
                    position: [(radius + tube * cv) * cu, (radius + tube * cv) * su, tube * sv],
                    normal: [cv * cu, cv * su, sv],
                });
            }
        }
        let indices = grid_indices(radial_segments, tubular_segments);
        self.push(vertices, indices)
    }
}

/// One latitude row of a sphere or hemisphere, `segments + 1` vertices
/// with the seam duplicated, offset vertically by `y_offset`.
fn push_lat_ring(vertices: &mut Vec<Vertex>, phi: f32, radius: f32, y_offset: f32, segments: u32) {
    let (sp, cp) = phi.sin_cos();
    for seg in 0..=segments {
        let theta = std::f32::consts::TAU * seg as f32 / segments as f32;
        let (st, ct) = theta.sin_cos();
        let normal = [sp * ct, cp, sp * st];
        vertices.push(Vertex {
            position: [normal[0] * radius, normal[1] * radius + y_offset, normal[2] * radius],
            normal,
        });
    }
}

/// Quad indices for a `(rows + 1) x (cols + 1)` vertex grid.
fn grid_indices(rows: u32, cols: u32) -> Vec<u32> {
    let stride = cols + 1;
    let mut indices = Vec::with_capacity((rows * cols * 6) as usize);
    for row in 0..rows {
        for col in 0..cols {
            let a = row * stride + col;
            let b = a + 1;
            let c = a + stride;
            let d = c + 1;
            indices.extend_from_slice(&[a, b, c, b, d, c]);
        }
    }
    indices
}
