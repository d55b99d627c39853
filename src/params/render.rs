//! Window, projection and plane geometry configuration.

use std::f32::consts::PI;

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Window width (pixels)
    pub window_width: u32,

    /// Window height (pixels)
    pub window_height: u32,

    /// Vertical field of view (degrees)
    pub fov_degrees: f32,

    /// Near clipping plane (units)
    pub near_plane: f32,

    /// Far clipping plane (units), matches the far end of the fog slider
    pub far_plane: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            fov_degrees: 75.0,
            near_plane: 0.1,
            far_plane: 100.0,
        }
    }
}

impl RenderConfig {
    pub fn aspect_ratio(&self) -> f32 {
        self.window_width as f32 / self.window_height.max(1) as f32
    }
}

/// Subdivided plane geometry
#[derive(Debug, Clone)]
pub struct PlaneConfig {
    /// Extent along local X (units)
    pub width: f32,

    /// Extent along local Y (units)
    pub height: f32,

    /// Segments along local X
    pub width_segments: u32,

    /// Segments along local Y
    pub height_segments: u32,

    /// Rotation about X applied by the model matrix (radians).
    /// 1.5π turns the local +Z normal into world +Y.
    pub rotation_x: f32,
}

impl Default for PlaneConfig {
    fn default() -> Self {
        Self {
            width: 5.0,
            height: 5.0,
            width_segments: 100,
            height_segments: 100,
            rotation_x: PI * 1.5,
        }
    }
}
