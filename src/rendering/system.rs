//! Windowed rendering: surface setup, the plane pass and the panel overlay.

use std::sync::Arc;

use winit::window::Window;

use super::{SurfaceRenderer, SurfaceUniforms};
use crate::error::RenderError;
use crate::surface::PlaneMesh;

/// Tessellated panel output for one frame
pub struct UiFrame {
    pub paint_jobs: Vec<egui::ClippedPrimitive>,
    pub textures_delta: egui::TexturesDelta,
    pub pixels_per_point: f32,
}

/// Rendering system managing the wgpu device, window surface and renderers
pub struct RenderSystem {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    surface_renderer: SurfaceRenderer,
    egui_renderer: egui_wgpu::Renderer,
}

impl RenderSystem {
    /// Create new rendering system
    pub async fn new(window: Arc<Window>, mesh: &PlaneMesh) -> Result<Self, RenderError> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        // Create surface (window must have 'static lifetime via Arc)
        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(RenderError::NoAdapter)?;

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Main Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: Default::default(),
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first())
            .copied()
            .ok_or(RenderError::NoSurfaceFormat)?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let surface_renderer =
            SurfaceRenderer::new(&device, surface_format, config.width, config.height, mesh);
        let egui_renderer = egui_wgpu::Renderer::new(&device, surface_format, None, 1, false);

        log::info!(
            "GPU initialized: {} ({:?} backend), surface format {:?}",
            adapter.get_info().name,
            adapter.get_info().backend,
            surface_format
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            surface_renderer,
            egui_renderer,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.config.width = width.max(1);
        self.config.height = height.max(1);
        self.surface.configure(&self.device, &self.config);
        self.surface_renderer
            .resize(&self.device, self.config.width, self.config.height);
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.config.width as f32 / self.config.height as f32
    }

    /// Render one frame: the plane, then the panel on top.
    ///
    /// A lost or outdated surface is reconfigured and the frame skipped.
    pub fn render(
        &mut self,
        uniforms: &SurfaceUniforms,
        clear: wgpu::Color,
        wireframe: bool,
        ui: Option<UiFrame>,
    ) -> Result<(), RenderError> {
        let output = match self.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::debug!("surface lost or outdated, reconfiguring");
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.surface_renderer.update_uniforms(&self.queue, uniforms);

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.surface_renderer
            .encode(&mut encoder, &view, clear, wireframe);

        if let Some(ui) = ui {
            self.encode_ui(&mut encoder, &view, &ui);
            self.queue.submit(std::iter::once(encoder.finish()));
            for id in &ui.textures_delta.free {
                self.egui_renderer.free_texture(id);
            }
        } else {
            self.queue.submit(std::iter::once(encoder.finish()));
        }

        output.present();
        Ok(())
    }

    fn encode_ui(
        &mut self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        ui: &UiFrame,
    ) {
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.config.width, self.config.height],
            pixels_per_point: ui.pixels_per_point,
        };

        for (id, image_delta) in &ui.textures_delta.set {
            self.egui_renderer
                .update_texture(&self.device, &self.queue, *id, image_delta);
        }
        self.egui_renderer.update_buffers(
            &self.device,
            &self.queue,
            encoder,
            &ui.paint_jobs,
            &screen_descriptor,
        );

        let mut pass = encoder
            .begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Panel Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            })
            .forget_lifetime();
        self.egui_renderer
            .render(&mut pass, &ui.paint_jobs, &screen_descriptor);
    }
}
