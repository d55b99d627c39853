//! Wave shape and surface coloring parameters.

use super::SrgbColor;

/// Large-scale wave parameters (also drive the color mix)
#[derive(Debug, Clone, PartialEq)]
pub struct WaveParams {
    /// Peak displacement of the large waves (local units)
    /// Panel range: [0, 1]
    pub elevation: f32,

    /// Spatial frequency along local X and Y (radians per unit)
    /// Panel range: [0, 10] each
    pub frequency: [f32; 2],

    /// Phase speed (radians per second)
    /// Panel range: [0, 10]
    pub speed: f32,

    /// Added to the elevation before it becomes a color mix factor
    /// Panel range: [0, 1]
    pub color_offset: f32,

    /// Scales the offset elevation into the color mix factor
    /// Panel range: [0, 10]
    pub color_multiplier: f32,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            elevation: 0.2,
            frequency: [4.0, 1.5],
            speed: 0.5,
            color_offset: 0.501,
            color_multiplier: 1.692,
        }
    }
}

/// Fine ripple parameters (iterated sum of sines)
#[derive(Debug, Clone, PartialEq)]
pub struct SmallWaveParams {
    /// Amplitude of the first ripple term; term `i` uses `elevation / i`
    /// Panel range: [0, 1]
    pub elevation: f32,

    /// Base spatial frequency; term `i` uses `frequency * i`
    /// Panel range: [0, 10]
    pub frequency: f32,

    /// Phase speed (radians per second)
    /// Panel range: [0, 4]
    pub speed: f32,

    /// Number of ripple terms summed
    /// Panel range: [1, 4]
    pub iterations: u32,
}

impl Default for SmallWaveParams {
    fn default() -> Self {
        Self {
            elevation: 0.622,
            frequency: 1.589,
            speed: 0.371,
            iterations: 4,
        }
    }
}

/// Interpolation endpoints for the fragment color
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceColors {
    /// Color at mix factor 0 (troughs)
    pub depth: SrgbColor,

    /// Color at mix factor 1 (crests)
    pub surface: SrgbColor,
}

impl Default for SurfaceColors {
    fn default() -> Self {
        Self {
            depth: SrgbColor::new(0x9d, 0x02, 0x02),
            surface: SrgbColor::new(0xbb, 0x84, 0x27),
        }
    }
}
