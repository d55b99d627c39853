//! Subdivided plane mesh with triangle and wireframe index lists.

use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use crate::params::PlaneConfig;

/// Vertex data for the plane mesh (local position + UV coordinates)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

/// Flat grid in the local XY plane, normal +Z. Displacement happens on the GPU,
/// so the vertex data is uploaded once and never rewritten.
pub struct PlaneMesh {
    pub vertices: Vec<Vertex>,
    /// Triangle list (counter-clockwise seen from +Z)
    pub indices: Vec<u32>,
    /// Line list with every triangle edge exactly once
    pub line_indices: Vec<u32>,
    rotation_x: f32,
}

impl PlaneMesh {
    pub fn new(config: &PlaneConfig) -> Self {
        let columns = config.width_segments.max(1);
        let rows = config.height_segments.max(1);
        let stride = columns + 1;
        let half_width = config.width / 2.0;
        let half_height = config.height / 2.0;
        let segment_width = config.width / columns as f32;
        let segment_height = config.height / rows as f32;

        let index = |x: u32, y: u32| y * stride + x;

        // Rows run from +Y down to -Y, columns from -X to +X
        let mut vertices = Vec::with_capacity((stride * (rows + 1)) as usize);
        for y in 0..=rows {
            for x in 0..=columns {
                vertices.push(Vertex {
                    position: [
                        x as f32 * segment_width - half_width,
                        half_height - y as f32 * segment_height,
                        0.0,
                    ],
                    uv: [x as f32 / columns as f32, 1.0 - y as f32 / rows as f32],
                });
            }
        }

        let mut indices = Vec::with_capacity((columns * rows * 6) as usize);
        for y in 0..rows {
            for x in 0..columns {
                let a = index(x, y);
                let b = index(x, y + 1);
                let c = index(x + 1, y + 1);
                let d = index(x + 1, y);

                indices.extend_from_slice(&[a, b, d, b, c, d]);
            }
        }

        // Horizontal edges, vertical edges, then the shared b-d diagonal of each cell
        let mut line_indices = Vec::new();
        for y in 0..=rows {
            for x in 0..columns {
                line_indices.extend_from_slice(&[index(x, y), index(x + 1, y)]);
            }
        }
        for y in 0..rows {
            for x in 0..=columns {
                line_indices.extend_from_slice(&[index(x, y), index(x, y + 1)]);
            }
        }
        for y in 0..rows {
            for x in 0..columns {
                line_indices.extend_from_slice(&[index(x, y + 1), index(x + 1, y)]);
            }
        }

        Self {
            vertices,
            indices,
            line_indices,
            rotation_x: config.rotation_x,
        }
    }

    /// Local-to-world transform applied in the vertex shader
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_x(self.rotation_x)
    }
}
