//! Binding table between panel widgets and `SceneParams` fields.
//!
//! Each entry maps a stable parameter name to a getter/setter pair, so the
//! panel never reaches into the parameter record directly. Setters clamp to
//! the configured range and snap to the configured step; beyond that no edit
//! is rejected.

use crate::error::BindingError;
use crate::params::{SceneParams, SrgbColor};

/// Panel section a binding is listed under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Folder {
    Fog,
    /// Top level, outside any collapsible section
    Root,
    Waves,
    SmallWaves,
}

impl Folder {
    pub const ALL: [Folder; 4] = [Folder::Fog, Folder::Root, Folder::Waves, Folder::SmallWaves];

    pub fn title(self) -> &'static str {
        match self {
            Folder::Fog => "Fog",
            Folder::Root => "",
            Folder::Waves => "Waves",
            Folder::SmallWaves => "Small Waves",
        }
    }
}

/// Slider bounds; `step` of 1 or more makes the value integral
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl Range {
    const fn new(min: f32, max: f32, step: f32) -> Self {
        Self { min, max, step }
    }

    /// Clamp into `[min, max]` and round to the nearest step from `min`
    pub fn apply(&self, value: f32) -> f32 {
        if value.is_nan() {
            return self.min;
        }
        let clamped = value.clamp(self.min, self.max);
        if self.step <= 0.0 {
            return clamped;
        }
        let steps = ((clamped - self.min) / self.step).round();
        (self.min + steps * self.step).clamp(self.min, self.max)
    }

    pub fn is_integral(&self) -> bool {
        self.step >= 1.0 && self.step.fract() == 0.0
    }
}

/// A value read from or written to a binding
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamValue {
    Number(f32),
    Color(SrgbColor),
    Flag(bool),
}

/// Typed access to one field of `SceneParams`
#[derive(Clone, Copy)]
pub enum Accessor {
    Number {
        range: Range,
        get: fn(&SceneParams) -> f32,
        set: fn(&mut SceneParams, f32),
    },
    Color {
        get: fn(&SceneParams) -> SrgbColor,
        set: fn(&mut SceneParams, SrgbColor),
    },
    Flag {
        get: fn(&SceneParams) -> bool,
        set: fn(&mut SceneParams, bool),
    },
}

/// Stable identifier of every bound parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamId {
    FogNear,
    FogFar,
    FogColor,
    Wireframe,
    Elevation,
    FrequencyX,
    FrequencyY,
    WaveSpeed,
    DepthColor,
    SurfaceColor,
    ColorOffset,
    ColorMultiplier,
    SmallElevation,
    SmallFrequency,
    SmallSpeed,
    SmallIterations,
}

/// One widget-to-field association
#[derive(Clone, Copy)]
pub struct Binding {
    pub id: ParamId,
    /// Stable dotted name, e.g. `waves.elevation`
    pub name: &'static str,
    /// Widget label
    pub label: &'static str,
    pub folder: Folder,
    pub accessor: Accessor,
}

impl Binding {
    pub fn get(&self, params: &SceneParams) -> ParamValue {
        match self.accessor {
            Accessor::Number { get, .. } => ParamValue::Number(get(params)),
            Accessor::Color { get, .. } => ParamValue::Color(get(params)),
            Accessor::Flag { get, .. } => ParamValue::Flag(get(params)),
        }
    }

    /// Write `value` through to the bound field and return what was stored
    pub fn set(
        &self,
        params: &mut SceneParams,
        value: ParamValue,
    ) -> Result<ParamValue, BindingError> {
        let applied = match (self.accessor, value) {
            (Accessor::Number { range, set, .. }, ParamValue::Number(v)) => {
                let v = range.apply(v);
                set(params, v);
                ParamValue::Number(v)
            }
            (Accessor::Color { set, .. }, ParamValue::Color(c)) => {
                set(params, c);
                ParamValue::Color(c)
            }
            (Accessor::Flag { set, .. }, ParamValue::Flag(b)) => {
                set(params, b);
                ParamValue::Flag(b)
            }
            (accessor, _) => {
                return Err(BindingError::KindMismatch {
                    name: self.name,
                    expected: match accessor {
                        Accessor::Number { .. } => "number",
                        Accessor::Color { .. } => "color",
                        Accessor::Flag { .. } => "flag",
                    },
                })
            }
        };
        log::debug!("{} = {:?}", self.name, applied);
        Ok(applied)
    }

    pub fn range(&self) -> Option<Range> {
        match self.accessor {
            Accessor::Number { range, .. } => Some(range),
            _ => None,
        }
    }
}

/// All bindings, in panel order
pub struct BindingTable {
    bindings: Vec<Binding>,
}

impl Default for BindingTable {
    fn default() -> Self {
        Self::new()
    }
}

impl BindingTable {
    pub fn new() -> Self {
        const DISTANCE: Range = Range::new(1.0, 100.0, 0.01);
        const UNIT: Range = Range::new(0.0, 1.0, 0.001);
        const TEN: Range = Range::new(0.0, 10.0, 0.001);

        let bindings = vec![
            Binding {
                id: ParamId::FogNear,
                name: "fog.near",
                label: "Near",
                folder: Folder::Fog,
                accessor: Accessor::Number {
                    range: DISTANCE,
                    get: |p| p.fog.near,
                    set: |p, v| p.fog.near = v,
                },
            },
            Binding {
                id: ParamId::FogFar,
                name: "fog.far",
                label: "Far",
                folder: Folder::Fog,
                accessor: Accessor::Number {
                    range: DISTANCE,
                    get: |p| p.fog.far,
                    set: |p, v| p.fog.far = v,
                },
            },
            Binding {
                id: ParamId::FogColor,
                name: "fog.color",
                label: "Color",
                folder: Folder::Fog,
                accessor: Accessor::Color {
                    get: |p| p.fog.color,
                    set: |p, c| p.fog.color = c,
                },
            },
            Binding {
                id: ParamId::Wireframe,
                name: "plane.wireframe",
                label: "Plane Wireframe",
                folder: Folder::Root,
                accessor: Accessor::Flag {
                    get: |p| p.wireframe,
                    set: |p, b| p.wireframe = b,
                },
            },
            Binding {
                id: ParamId::Elevation,
                name: "waves.elevation",
                label: "Elevation",
                folder: Folder::Waves,
                accessor: Accessor::Number {
                    range: UNIT,
                    get: |p| p.waves.elevation,
                    set: |p, v| p.waves.elevation = v,
                },
            },
            Binding {
                id: ParamId::FrequencyX,
                name: "waves.frequency_x",
                label: "Frequency X",
                folder: Folder::Waves,
                accessor: Accessor::Number {
                    range: TEN,
                    get: |p| p.waves.frequency[0],
                    set: |p, v| p.waves.frequency[0] = v,
                },
            },
            Binding {
                id: ParamId::FrequencyY,
                name: "waves.frequency_y",
                label: "Frequency Y",
                folder: Folder::Waves,
                accessor: Accessor::Number {
                    range: TEN,
                    get: |p| p.waves.frequency[1],
                    set: |p, v| p.waves.frequency[1] = v,
                },
            },
            Binding {
                id: ParamId::WaveSpeed,
                name: "waves.speed",
                label: "Wave Speed",
                folder: Folder::Waves,
                accessor: Accessor::Number {
                    range: TEN,
                    get: |p| p.waves.speed,
                    set: |p, v| p.waves.speed = v,
                },
            },
            Binding {
                id: ParamId::DepthColor,
                name: "waves.depth_color",
                label: "Depth Color",
                folder: Folder::Waves,
                accessor: Accessor::Color {
                    get: |p| p.colors.depth,
                    set: |p, c| p.colors.depth = c,
                },
            },
            Binding {
                id: ParamId::SurfaceColor,
                name: "waves.surface_color",
                label: "Surface Color",
                folder: Folder::Waves,
                accessor: Accessor::Color {
                    get: |p| p.colors.surface,
                    set: |p, c| p.colors.surface = c,
                },
            },
            Binding {
                id: ParamId::ColorOffset,
                name: "waves.color_offset",
                label: "Color Offset",
                folder: Folder::Waves,
                accessor: Accessor::Number {
                    range: UNIT,
                    get: |p| p.waves.color_offset,
                    set: |p, v| p.waves.color_offset = v,
                },
            },
            Binding {
                id: ParamId::ColorMultiplier,
                name: "waves.color_multiplier",
                label: "Color Multiplier",
                folder: Folder::Waves,
                accessor: Accessor::Number {
                    range: TEN,
                    get: |p| p.waves.color_multiplier,
                    set: |p, v| p.waves.color_multiplier = v,
                },
            },
            Binding {
                id: ParamId::SmallElevation,
                name: "small_waves.elevation",
                label: "Elevation",
                folder: Folder::SmallWaves,
                accessor: Accessor::Number {
                    range: UNIT,
                    get: |p| p.small_waves.elevation,
                    set: |p, v| p.small_waves.elevation = v,
                },
            },
            Binding {
                id: ParamId::SmallFrequency,
                name: "small_waves.frequency",
                label: "Frequency",
                folder: Folder::SmallWaves,
                accessor: Accessor::Number {
                    range: TEN,
                    get: |p| p.small_waves.frequency,
                    set: |p, v| p.small_waves.frequency = v,
                },
            },
            Binding {
                id: ParamId::SmallSpeed,
                name: "small_waves.speed",
                label: "Speed",
                folder: Folder::SmallWaves,
                accessor: Accessor::Number {
                    range: Range::new(0.0, 4.0, 0.001),
                    get: |p| p.small_waves.speed,
                    set: |p, v| p.small_waves.speed = v,
                },
            },
            Binding {
                id: ParamId::SmallIterations,
                name: "small_waves.iterations",
                label: "Iterations",
                folder: Folder::SmallWaves,
                accessor: Accessor::Number {
                    range: Range::new(1.0, 4.0, 1.0),
                    get: |p| p.small_waves.iterations as f32,
                    set: |p, v| p.small_waves.iterations = v as u32,
                },
            },
        ];

        Self { bindings }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.iter()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn get(&self, id: ParamId) -> &Binding {
        self.bindings
            .iter()
            .find(|b| b.id == id)
            .unwrap_or_else(|| unreachable!("every ParamId has a binding"))
    }

    pub fn by_name(&self, name: &str) -> Result<&Binding, BindingError> {
        self.bindings
            .iter()
            .find(|b| b.name == name)
            .ok_or_else(|| BindingError::UnknownName(name.to_string()))
    }

    /// Bindings listed under `folder`, in panel order
    pub fn in_folder(&self, folder: Folder) -> impl Iterator<Item = &Binding> {
        self.bindings.iter().filter(move |b| b.folder == folder)
    }
}
