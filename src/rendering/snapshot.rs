//! Headless single-frame rendering to a PNG file.

use std::path::Path;

use super::{SurfaceRenderer, SurfaceUniforms};
use crate::camera::OrbitCamera;
use crate::error::RenderError;
use crate::params::{PlaneConfig, RenderConfig, SceneParams};
use crate::surface::PlaneMesh;

const SNAPSHOT_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

/// Render `params` at `time_s` from the default camera into `path`
pub async fn render_snapshot(
    params: &SceneParams,
    config: &RenderConfig,
    time_s: f32,
    path: &Path,
) -> Result<(), RenderError> {
    let width = config.window_width.max(1);
    let height = config.window_height.max(1);

    let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
        backends: wgpu::Backends::all(),
        ..Default::default()
    });

    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: None,
            force_fallback_adapter: false,
        })
        .await
        .ok_or(RenderError::NoAdapter)?;

    let (device, queue) = adapter
        .request_device(
            &wgpu::DeviceDescriptor {
                label: Some("Snapshot Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        )
        .await?;

    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Snapshot Target"),
        size: wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: SNAPSHOT_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::COPY_SRC,
        view_formats: &[],
    });
    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

    let mesh = PlaneMesh::new(&PlaneConfig::default());
    let renderer = SurfaceRenderer::new(&device, SNAPSHOT_FORMAT, width, height, &mesh);

    let camera = OrbitCamera::default().frame(width as f32 / height as f32, config);
    let uniforms = SurfaceUniforms::new(params, &camera, mesh.model_matrix(), time_s);
    renderer.update_uniforms(&queue, &uniforms);

    let bytes_per_pixel = 4; // RGBA8
    let unpadded_bytes_per_row = width * bytes_per_pixel;
    let padded_bytes_per_row = padded_row_bytes(unpadded_bytes_per_row);

    let buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Snapshot Readback Buffer"),
        size: (padded_bytes_per_row * height) as u64,
        usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
        mapped_at_creation: false,
    });

    let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
        label: Some("Snapshot Encoder"),
    });
    renderer.encode(&mut encoder, &view, params.fog.color.to_wgpu(), params.wireframe);
    encoder.copy_texture_to_buffer(
        wgpu::ImageCopyTexture {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        wgpu::ImageCopyBuffer {
            buffer: &buffer,
            layout: wgpu::ImageDataLayout {
                offset: 0,
                bytes_per_row: Some(padded_bytes_per_row),
                rows_per_image: Some(height),
            },
        },
        wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
    );
    queue.submit(std::iter::once(encoder.finish()));

    let buffer_slice = buffer.slice(..);
    let (sender, receiver) = std::sync::mpsc::channel();
    buffer_slice.map_async(wgpu::MapMode::Read, move |result| {
        let _ = sender.send(result);
    });
    device.poll(wgpu::Maintain::Wait);
    receiver.recv().map_err(|_| RenderError::ReadbackLost)??;

    let data = buffer_slice.get_mapped_range();
    let image_data = strip_row_padding(&data, unpadded_bytes_per_row, padded_bytes_per_row, height);
    drop(data);
    buffer.unmap();

    image::save_buffer(path, &image_data, width, height, image::ColorType::Rgba8).map_err(
        |source| RenderError::Image {
            path: path.to_path_buf(),
            source,
        },
    )?;

    log::info!("wrote {}x{} snapshot at t={}s to {}", width, height, time_s, path.display());
    Ok(())
}

/// Row pitch rounded up to wgpu's copy alignment
fn padded_row_bytes(unpadded: u32) -> u32 {
    let align = wgpu::COPY_BYTES_PER_ROW_ALIGNMENT;
    unpadded.div_ceil(align) * align
}

fn strip_row_padding(data: &[u8], unpadded: u32, padded: u32, height: u32) -> Vec<u8> {
    let (unpadded, padded) = (unpadded as usize, padded as usize);
    let mut image_data = Vec::with_capacity(unpadded * height as usize);
    for row in data.chunks(padded).take(height as usize) {
        image_data.extend_from_slice(&row[..unpadded]);
    }
    image_data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_padding() {
        assert_eq!(padded_row_bytes(256), 256);
        assert_eq!(padded_row_bytes(1280 * 4), 5120);
        assert_eq!(padded_row_bytes(100 * 4), 512);
    }

    #[test]
    fn test_strip_row_padding() {
        // Two rows of 3 bytes padded to 4
        let data = [1, 2, 3, 0, 4, 5, 6, 0];
        assert_eq!(strip_row_padding(&data, 3, 4, 2), vec![1, 2, 3, 4, 5, 6]);
    }
}
