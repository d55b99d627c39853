//! Rendering with wgpu: uniform block, surface pipelines, window and snapshot output.

mod snapshot;
mod surface;
mod system;
mod uniforms;

// Re-export public types
pub use snapshot::render_snapshot;
pub use surface::{SurfaceRenderer, DEPTH_FORMAT};
pub use system::{RenderSystem, UiFrame};
pub use uniforms::SurfaceUniforms;
