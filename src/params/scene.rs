//! Scene-level parameters: fog, lights and the owning parameter record.

use super::{SmallWaveParams, SrgbColor, SurfaceColors, WaveParams};

/// Linear distance fog
#[derive(Debug, Clone, PartialEq)]
pub struct FogParams {
    /// Distance where fog starts (units from the eye)
    /// Panel range: [1, 100]
    pub near: f32,

    /// Distance where fog is opaque
    /// Panel range: [1, 100]
    pub far: f32,

    /// Fog color, also used as the background clear color
    pub color: SrgbColor,
}

impl Default for FogParams {
    fn default() -> Self {
        Self {
            near: 1.0,
            far: 100.0,
            color: SrgbColor::new(0xa4, 0x8c, 0x5d),
        }
    }
}

/// One ambient light plus one white directional light
#[derive(Debug, Clone, PartialEq)]
pub struct LightingParams {
    /// Ambient intensity; at 1.0 the surface shows its unlit color
    pub ambient_intensity: f32,

    /// Directional light intensity
    pub directional_intensity: f32,

    /// Directional light position; the light shines from here toward the origin
    pub directional_position: [f32; 3],
}

impl Default for LightingParams {
    fn default() -> Self {
        Self {
            ambient_intensity: 1.0,
            directional_intensity: 1.0,
            directional_position: [10.0, 10.0, 10.0],
        }
    }
}

/// Every tunable value of the scene, owned in one place.
///
/// The panel writes into it through the binding table and the renderer reads
/// it once per frame to build the uniform block.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SceneParams {
    pub fog: FogParams,
    pub lighting: LightingParams,
    pub waves: WaveParams,
    pub small_waves: SmallWaveParams,
    pub colors: SurfaceColors,

    /// Draw the plane as triangle edges instead of filled
    pub wireframe: bool,
}
