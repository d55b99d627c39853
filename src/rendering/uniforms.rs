//! Uniform block shared by the vertex and fragment stages.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use crate::camera::CameraFrame;
use crate::params::SceneParams;

/// Uniform buffer for the surface shader (matches WGSL `SurfaceUniforms`).
///
/// Field order packs every `vec3` with a trailing scalar so the struct has no
/// implicit padding and the layout equals the WGSL uniform layout.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SurfaceUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    pub camera_pos: [f32; 3],
    pub time: f32,
    pub frequency: [f32; 2],
    pub elevation: f32,
    pub wave_speed: f32,
    pub small_elevation: f32,
    pub small_frequency: f32,
    pub small_speed: f32,
    pub small_iterations: f32,
    pub depth_color: [f32; 3],
    pub color_offset: f32,
    pub surface_color: [f32; 3],
    pub color_multiplier: f32,
    pub fog_color: [f32; 3],
    pub fog_near: f32,
    pub light_direction: [f32; 3],
    pub fog_far: f32,
    pub ambient_intensity: f32,
    pub directional_intensity: f32,
    pub _padding: [f32; 2],
}

impl SurfaceUniforms {
    /// Snapshot the parameter record for one frame
    pub fn new(params: &SceneParams, camera: &CameraFrame, model: Mat4, time_s: f32) -> Self {
        let light_direction = Vec3::from_array(params.lighting.directional_position)
            .try_normalize()
            .unwrap_or(Vec3::Y);

        Self {
            view_proj: camera.view_proj.to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            camera_pos: camera.eye.to_array(),
            time: time_s,
            frequency: params.waves.frequency,
            elevation: params.waves.elevation,
            wave_speed: params.waves.speed,
            small_elevation: params.small_waves.elevation,
            small_frequency: params.small_waves.frequency,
            small_speed: params.small_waves.speed,
            small_iterations: params.small_waves.iterations as f32,
            depth_color: params.colors.depth.to_linear(),
            color_offset: params.waves.color_offset,
            surface_color: params.colors.surface.to_linear(),
            color_multiplier: params.waves.color_multiplier,
            fog_color: params.fog.color.to_linear(),
            fog_near: params.fog.near,
            light_direction: light_direction.to_array(),
            fog_far: params.fog.far,
            ambient_intensity: params.lighting.ambient_intensity,
            directional_intensity: params.lighting.directional_intensity,
            _padding: [0.0; 2],
        }
    }
}

#[cfg(test)]
mod tests {
    use std::mem::{offset_of, size_of};
    use std::ops::Range;

    use super::*;
    use crate::binding::{BindingTable, ParamId, ParamValue};
    use crate::camera::OrbitCamera;
    use crate::params::{PlaneConfig, RenderConfig, SrgbColor};
    use crate::surface::PlaneMesh;

    const FLOATS: usize = size_of::<SurfaceUniforms>() / 4;

    fn build(params: &SceneParams) -> SurfaceUniforms {
        let config = RenderConfig::default();
        let camera = OrbitCamera::default().frame(config.aspect_ratio(), &config);
        let model = PlaneMesh::new(&PlaneConfig::default()).model_matrix();
        SurfaceUniforms::new(params, &camera, model, 1.25)
    }

    fn floats(u: &SurfaceUniforms) -> [f32; FLOATS] {
        bytemuck::cast(*u)
    }

    /// Float slots of a uniform field, from its byte offset and width
    fn slots(offset: usize, width: usize) -> Range<usize> {
        offset / 4..offset / 4 + width
    }

    fn expected_slots(id: ParamId) -> Range<usize> {
        match id {
            ParamId::FogNear => slots(offset_of!(SurfaceUniforms, fog_near), 1),
            ParamId::FogFar => slots(offset_of!(SurfaceUniforms, fog_far), 1),
            ParamId::FogColor => slots(offset_of!(SurfaceUniforms, fog_color), 3),
            ParamId::Elevation => slots(offset_of!(SurfaceUniforms, elevation), 1),
            ParamId::FrequencyX => slots(offset_of!(SurfaceUniforms, frequency), 1),
            ParamId::FrequencyY => slots(offset_of!(SurfaceUniforms, frequency) + 4, 1),
            ParamId::WaveSpeed => slots(offset_of!(SurfaceUniforms, wave_speed), 1),
            ParamId::DepthColor => slots(offset_of!(SurfaceUniforms, depth_color), 3),
            ParamId::SurfaceColor => slots(offset_of!(SurfaceUniforms, surface_color), 3),
            ParamId::ColorOffset => slots(offset_of!(SurfaceUniforms, color_offset), 1),
            ParamId::ColorMultiplier => slots(offset_of!(SurfaceUniforms, color_multiplier), 1),
            ParamId::SmallElevation => slots(offset_of!(SurfaceUniforms, small_elevation), 1),
            ParamId::SmallFrequency => slots(offset_of!(SurfaceUniforms, small_frequency), 1),
            ParamId::SmallSpeed => slots(offset_of!(SurfaceUniforms, small_speed), 1),
            ParamId::SmallIterations => slots(offset_of!(SurfaceUniforms, small_iterations), 1),
            ParamId::Wireframe => 0..0,
        }
    }

    /// A value different from the default that survives clamping
    fn edited(value: ParamValue) -> ParamValue {
        match value {
            ParamValue::Number(v) if v >= 2.0 => ParamValue::Number(v - 1.0),
            ParamValue::Number(v) => ParamValue::Number(v + 0.25),
            ParamValue::Color(_) => ParamValue::Color(SrgbColor::new(0x12, 0x34, 0x56)),
            ParamValue::Flag(b) => ParamValue::Flag(!b),
        }
    }

    #[test]
    fn test_layout_has_no_implicit_padding() {
        assert_eq!(size_of::<SurfaceUniforms>(), 256);
        assert_eq!(offset_of!(SurfaceUniforms, camera_pos), 128);
        assert_eq!(offset_of!(SurfaceUniforms, frequency), 144);
        assert_eq!(offset_of!(SurfaceUniforms, depth_color), 176);
        assert_eq!(offset_of!(SurfaceUniforms, light_direction), 224);
        assert_eq!(offset_of!(SurfaceUniforms, ambient_intensity), 240);
    }

    #[test]
    fn test_each_binding_changes_only_its_uniform() {
        let table = BindingTable::new();
        let baseline = floats(&build(&SceneParams::default()));

        for binding in table.iter() {
            let mut params = SceneParams::default();
            let value = edited(binding.get(&params));
            binding.set(&mut params, value).unwrap();

            let changed: Vec<usize> = floats(&build(&params))
                .iter()
                .zip(baseline.iter())
                .enumerate()
                .filter(|(_, (a, b))| a != b)
                .map(|(i, _)| i)
                .collect();

            let allowed = expected_slots(binding.id);
            assert!(
                changed.iter().all(|i| allowed.contains(i)),
                "{} changed slots {:?}, expected within {:?}",
                binding.name,
                changed,
                allowed
            );
            if binding.id != ParamId::Wireframe {
                assert!(!changed.is_empty(), "{} changed no uniform", binding.name);
            }
        }
    }

    #[test]
    fn test_defaults_reach_the_shader() {
        let u = build(&SceneParams::default());

        assert_eq!(u.time, 1.25);
        assert_eq!(u.frequency, [4.0, 1.5]);
        assert_eq!(u.elevation, 0.2);
        assert_eq!(u.small_iterations, 4.0);
        assert_eq!(u.fog_near, 1.0);
        assert_eq!(u.fog_far, 100.0);
        assert_eq!(u.depth_color, SrgbColor::new(0x9d, 0x02, 0x02).to_linear());

        let light = Vec3::from_array(u.light_direction);
        assert!((light.length() - 1.0).abs() < 1e-5);
        assert!((light - Vec3::ONE.normalize()).length() < 1e-5);
    }
}
