//! Error types.

use std::path::PathBuf;

use thiserror::Error;

/// Failures while setting up the GPU or producing a frame
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable GPU adapter found")]
    NoAdapter,

    #[error("failed to request device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),

    #[error("surface has no supported texture format")]
    NoSurfaceFormat,

    #[error("failed to acquire frame: {0}")]
    Surface(#[from] wgpu::SurfaceError),

    #[error("failed to map readback buffer: {0}")]
    Readback(#[from] wgpu::BufferAsyncError),

    #[error("readback buffer was dropped before mapping finished")]
    ReadbackLost,

    #[error("failed to write {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Misuse of the parameter binding table
#[derive(Debug, Error, PartialEq)]
pub enum BindingError {
    #[error("parameter `{name}` expects a {expected} value")]
    KindMismatch {
        name: &'static str,
        expected: &'static str,
    },

    #[error("no parameter named `{0}`")]
    UnknownName(String),
}
