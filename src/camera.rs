//! Damped orbit camera around a fixed target.

use glam::{Mat4, Vec2, Vec3};

use crate::params::{OrbitParams, RenderConfig};

/// Per-frame camera output consumed by the uniform builder
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFrame {
    pub view_proj: Mat4,
    pub eye: Vec3,
}

/// Orbit controls: drag to rotate, scroll to zoom.
///
/// Drag input accumulates angular velocity; `update` applies it and removes
/// `damping` of it each frame, so rotation glides to a stop after release.
pub struct OrbitCamera {
    params: OrbitParams,
    target: Vec3,
    distance: f32,
    yaw: f32,
    pitch: f32,
    yaw_velocity: f32,
    pitch_velocity: f32,
    dragging: bool,
    last_cursor: Option<Vec2>,
}

impl OrbitCamera {
    pub fn new(params: OrbitParams) -> Self {
        let distance = params.distance.clamp(params.min_distance, params.max_distance);
        let pitch = params.pitch.clamp(-params.max_pitch, params.max_pitch);
        Self {
            target: Vec3::from_array(params.target),
            distance,
            yaw: params.yaw,
            pitch,
            yaw_velocity: 0.0,
            pitch_velocity: 0.0,
            dragging: false,
            last_cursor: None,
            params,
        }
    }

    /// Start or end a rotate drag (primary button)
    pub fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
        if !dragging {
            self.last_cursor = None;
        }
    }

    /// Feed a cursor position in physical pixels
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        let cursor = Vec2::new(x, y);
        if self.dragging {
            if let Some(last) = self.last_cursor {
                let delta = cursor - last;
                self.rotate(delta.x, delta.y);
            }
        }
        self.last_cursor = Some(cursor);
    }

    /// Add angular velocity for a drag of `dx`, `dy` pixels
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.yaw_velocity -= dx * self.params.rotate_speed;
        self.pitch_velocity += dy * self.params.rotate_speed;
    }

    /// Zoom by scroll lines; positive moves closer
    pub fn zoom(&mut self, lines: f32) {
        self.distance = (self.distance * self.params.zoom_step.powf(-lines))
            .clamp(self.params.min_distance, self.params.max_distance);
    }

    /// Apply and damp accumulated velocity (once per frame)
    pub fn update(&mut self) {
        self.yaw += self.yaw_velocity;
        self.pitch = (self.pitch + self.pitch_velocity)
            .clamp(-self.params.max_pitch, self.params.max_pitch);

        let keep = 1.0 - self.params.damping;
        self.yaw_velocity *= keep;
        self.pitch_velocity *= keep;
    }

    pub fn eye(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        let offset = Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw);
        self.target + offset * self.distance
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn angular_speed(&self) -> f32 {
        self.yaw_velocity.hypot(self.pitch_velocity)
    }

    /// View-projection for the given viewport aspect ratio
    pub fn frame(&self, aspect: f32, config: &RenderConfig) -> CameraFrame {
        let eye = self.eye();

        // Always keep Y as up vector (camera never rolls)
        let view = Mat4::look_at_rh(eye, self.target, Vec3::Y);
        let proj = Mat4::perspective_rh(
            config.fov_degrees.to_radians(),
            aspect,
            config.near_plane,
            config.far_plane,
        );

        CameraFrame {
            view_proj: proj * view,
            eye,
        }
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(OrbitParams::default())
    }
}
