//! Parameter definitions with units and documented semantics.
//!
//! All literal defaults live here:
//! - Scene values the panel edits (fog, waves, colors)
//! - Fixed setup values (lights, plane geometry, projection, orbit controls)

mod camera;
mod color;
mod render;
mod scene;
mod waves;

// Re-export all types
pub use camera::OrbitParams;
pub use color::SrgbColor;
pub use render::{PlaneConfig, RenderConfig};
pub use scene::{FogParams, LightingParams, SceneParams};
pub use waves::{SmallWaveParams, SurfaceColors, WaveParams};
