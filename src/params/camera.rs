//! Orbit camera configuration.

/// Orbit controls around a fixed target
#[derive(Debug, Clone)]
pub struct OrbitParams {
    /// Point the camera orbits and looks at
    pub target: [f32; 3],

    /// Initial eye distance from the target (units)
    pub distance: f32,

    /// Initial azimuth around +Y (radians, 0 = looking down -Z)
    pub yaw: f32,

    /// Initial elevation above the XZ plane (radians)
    pub pitch: f32,

    /// Fraction of angular velocity removed each frame
    pub damping: f32,

    /// Radians of rotation per pixel dragged
    pub rotate_speed: f32,

    /// Distance scale per scroll line (> 1)
    pub zoom_step: f32,

    /// Closest allowed eye distance (units)
    pub min_distance: f32,

    /// Farthest allowed eye distance (units)
    pub max_distance: f32,

    /// Pitch limit away from the poles (radians)
    pub max_pitch: f32,
}

impl Default for OrbitParams {
    fn default() -> Self {
        Self {
            target: [0.0, 0.0, 0.0],
            distance: 4.0,
            yaw: 45_f32.to_radians(),
            pitch: 35_f32.to_radians(),
            damping: 0.05,
            rotate_speed: 0.005,
            zoom_step: 1.1,
            min_distance: 0.5,
            max_distance: 50.0,
            max_pitch: 89_f32.to_radians(),
        }
    }
}
