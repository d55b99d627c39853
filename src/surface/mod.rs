//! The undulating plane: its mesh and the wave model the shader evaluates.

mod mesh;
pub mod waves;

// Re-export public types
pub use mesh::{PlaneMesh, Vertex};
