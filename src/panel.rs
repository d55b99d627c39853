//! Floating control panel built from the binding table.

use crate::binding::{Accessor, Binding, BindingTable, Folder, ParamValue};
use crate::params::{SceneParams, SrgbColor};

/// Read-only values shown under the controls
#[derive(Debug, Clone, Copy, Default)]
pub struct PanelStatus {
    pub fps: f32,
    pub frame_ms: f32,
    pub elapsed_s: f32,
    pub camera_distance: f32,
}

/// Panel visibility plus the bindings it renders
pub struct ControlPanel {
    bindings: BindingTable,
    visible: bool,
}

impl ControlPanel {
    pub fn new(visible: bool) -> Self {
        Self {
            bindings: BindingTable::new(),
            visible,
        }
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Draw the panel; widget edits write straight into `params`
    pub fn show(&self, ctx: &egui::Context, params: &mut SceneParams, status: &PanelStatus) {
        if !self.visible {
            return;
        }

        egui::Window::new("Controls")
            .anchor(egui::Align2::RIGHT_TOP, [-10.0, 10.0])
            .default_width(280.0)
            .resizable(false)
            .show(ctx, |ui| {
                for folder in Folder::ALL {
                    if folder == Folder::Root {
                        for binding in self.bindings.in_folder(folder) {
                            bound_widget(ui, binding, params);
                        }
                        continue;
                    }
                    egui::CollapsingHeader::new(folder.title())
                        .default_open(true)
                        .show(ui, |ui| {
                            for binding in self.bindings.in_folder(folder) {
                                bound_widget(ui, binding, params);
                            }
                        });
                }

                ui.separator();
                if ui.button("Reset").clicked() {
                    log::info!("parameters reset to defaults");
                    *params = SceneParams::default();
                }

                ui.separator();
                ui.label(format!("{:.0} fps ({:.2} ms)", status.fps, status.frame_ms));
                ui.label(format!("Time: {:.2} s", status.elapsed_s));
                ui.label(format!("Camera distance: {:.2}", status.camera_distance));
                ui.small("F1: Toggle Panel | LMB: Orbit | Wheel: Zoom");
            });
    }
}

/// One widget for one binding; only a changed widget writes back
fn bound_widget(ui: &mut egui::Ui, binding: &Binding, params: &mut SceneParams) {
    let edited = match binding.accessor {
        Accessor::Number { range, get, .. } => {
            let mut value = get(params);
            let mut slider = egui::Slider::new(&mut value, range.min..=range.max)
                .step_by(range.step as f64)
                .text(binding.label);
            if range.is_integral() {
                slider = slider.fixed_decimals(0);
            }
            ui.add(slider).changed().then_some(ParamValue::Number(value))
        }
        Accessor::Color { get, .. } => {
            let mut rgb = get(params).0;
            ui.horizontal(|ui| {
                let changed = ui.color_edit_button_srgb(&mut rgb).changed();
                ui.label(format!("{} {}", binding.label, SrgbColor(rgb).to_hex()));
                changed
            })
            .inner
            .then_some(ParamValue::Color(SrgbColor(rgb)))
        }
        Accessor::Flag { get, .. } => {
            let mut flag = get(params);
            ui.checkbox(&mut flag, binding.label)
                .changed()
                .then_some(ParamValue::Flag(flag))
        }
    };

    if let Some(value) = edited {
        if let Err(e) = binding.set(params, value) {
            log::warn!("{e}");
        }
    }
}
