//! Undulate - a wavy plane colored by its own elevation.
//!
//! Every wave, color and fog parameter is live-editable from the panel.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use undulate::animation::AnimationDriver;
use undulate::camera::OrbitCamera;
use undulate::cli::Args;
use undulate::panel::{ControlPanel, PanelStatus};
use undulate::params::{PlaneConfig, RenderConfig, SceneParams};
use undulate::rendering::{render_snapshot, RenderSystem, SurfaceUniforms, UiFrame};
use undulate::surface::PlaneMesh;

/// Lines of zoom per pixel of precise (touchpad) scrolling
const PIXELS_PER_SCROLL_LINE: f32 = 40.0;

/// Main application state
struct App {
    // Window and rendering
    window: Option<Arc<Window>>,
    render_system: Option<RenderSystem>,
    egui_ctx: egui::Context,
    egui_winit: Option<egui_winit::State>,

    // Scene
    params: SceneParams,
    mesh: PlaneMesh,
    camera: OrbitCamera,
    panel: ControlPanel,
    driver: AnimationDriver,

    // Configuration
    render_config: RenderConfig,
}

impl App {
    fn new(args: &Args) -> Self {
        Self {
            window: None,
            render_system: None,
            egui_ctx: egui::Context::default(),
            egui_winit: None,
            params: args.scene_params(),
            mesh: PlaneMesh::new(&PlaneConfig::default()),
            camera: OrbitCamera::default(),
            panel: ControlPanel::new(!args.hide_panel),
            driver: AnimationDriver::new(),
            render_config: args.render_config(),
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window_attributes = Window::default_attributes()
            .with_title("Undulate")
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.render_config.window_width,
                self.render_config.window_height,
            ));
        let window = Arc::new(event_loop.create_window(window_attributes)?);

        let render_system =
            pollster::block_on(RenderSystem::new(Arc::clone(&window), &self.mesh))?;

        let egui_winit = egui_winit::State::new(
            self.egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );

        self.window = Some(window);
        self.render_system = Some(render_system);
        self.egui_winit = Some(egui_winit);
        self.driver.start();

        log::info!("running; press Esc to quit");
        Ok(())
    }

    fn quit(&mut self, event_loop: &ActiveEventLoop) {
        self.driver.stop();
        event_loop.exit();
    }

    /// Run the panel for this frame and tessellate its output
    fn run_ui(&mut self, status: &PanelStatus) -> Option<UiFrame> {
        let (window, egui_winit) = (self.window.as_ref()?, self.egui_winit.as_mut()?);

        let raw_input = egui_winit.take_egui_input(window);
        let (panel, params) = (&self.panel, &mut self.params);
        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            panel.show(ctx, params, status);
        });
        egui_winit.handle_platform_output(window, full_output.platform_output);

        Some(UiFrame {
            paint_jobs: self
                .egui_ctx
                .tessellate(full_output.shapes, full_output.pixels_per_point),
            textures_delta: full_output.textures_delta,
            pixels_per_point: full_output.pixels_per_point,
        })
    }

    /// Render a single frame
    fn render_frame(&mut self) {
        let Some(tick) = self.driver.tick() else {
            return;
        };
        let Some(aspect) = self.render_system.as_ref().map(|r| r.aspect_ratio()) else {
            return;
        };

        // Per-frame scene bookkeeping
        self.camera.update();
        let stats = self.driver.stats();
        let status = PanelStatus {
            fps: stats.fps(),
            frame_ms: stats.mean_frame_ms(),
            elapsed_s: tick.elapsed_s,
            camera_distance: self.camera.distance(),
        };

        // Panel edits land in params before the uniforms are built
        let ui = self.run_ui(&status);

        let camera = self.camera.frame(aspect, &self.render_config);
        let uniforms =
            SurfaceUniforms::new(&self.params, &camera, self.mesh.model_matrix(), tick.elapsed_s);
        let clear = self.params.fog.color.to_wgpu();
        let wireframe = self.params.wireframe;

        if let Some(render_system) = self.render_system.as_mut() {
            if let Err(e) = render_system.render(&uniforms, clear, wireframe, ui) {
                log::error!("render error: {e}");
            }
        }
    }
}

impl ApplicationHandler for App {
    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if !self.driver.is_running() {
            return;
        }
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }
        if let Err(e) = self.init(event_loop) {
            log::error!("initialization failed: {e:#}");
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let (Some(window), Some(egui_winit)) = (&self.window, &mut self.egui_winit) {
            if egui_winit.on_window_event(window, &event).consumed {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => self.quit(event_loop),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(key),
                        repeat: false,
                        ..
                    },
                ..
            } => match key {
                KeyCode::Escape => self.quit(event_loop),
                KeyCode::F1 => self.panel.toggle(),
                _ => {}
            },
            WindowEvent::Resized(size) => {
                if let Some(render_system) = self.render_system.as_mut() {
                    render_system.resize(size.width, size.height);
                }
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => self.camera.set_dragging(state == ElementState::Pressed),
            WindowEvent::CursorMoved { position, .. } => {
                self.camera.pointer_moved(position.x as f32, position.y as f32);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(p) => p.y as f32 / PIXELS_PER_SCROLL_LINE,
                };
                self.camera.zoom(lines);
            }
            WindowEvent::RedrawRequested => self.render_frame(),
            _ => {}
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_filter()))
        .init();

    if let Some(path) = &args.snapshot {
        return Ok(pollster::block_on(render_snapshot(
            &args.scene_params(),
            &args.render_config(),
            args.time,
            path,
        ))?);
    }

    log::info!("Undulate starting");

    let mut app = App::new(&args);
    let event_loop = EventLoop::new()?;
    event_loop.run_app(&mut app)?;

    Ok(())
}
