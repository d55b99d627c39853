//! Undulate library - shader-driven wave surface with a live tuning panel

pub mod animation;
pub mod binding;
pub mod camera;
pub mod cli;
pub mod error;
pub mod panel;
pub mod params;
pub mod rendering;
pub mod surface;
