//! CPU mirror of the wave displacement and coloring in `shader.wgsl`.
//!
//! Every function here evaluates the same formula as its WGSL counterpart so
//! the surface can be sampled and checked without a GPU:
//!
//! ```text
//! big   = E · sin(x·fx + t·s) · sin(y·fy + t·s)
//! small = −Σ_{i=1..n} (e / i) · |sin(x·f·i + t·ss) · cos(y·f·i − t·ss)|
//! k     = clamp((big + small + offset) · multiplier, 0, 1)
//! color = mix(depth, surface, k)
//! ```
//!
//! `x` and `y` are local plane coordinates; the height is applied along local +Z.

use crate::params::{FogParams, SmallWaveParams, SurfaceColors, WaveParams};

/// Large-scale displacement at local `(x, y)` and time `time_s`
pub fn big_wave(x: f32, y: f32, time_s: f32, waves: &WaveParams) -> f32 {
    let phase = time_s * waves.speed;
    waves.elevation
        * (x * waves.frequency[0] + phase).sin()
        * (y * waves.frequency[1] + phase).sin()
}

/// Magnitude of ripple term `i` (1-based); subtracted from the height
pub fn small_wave_term(i: u32, x: f32, y: f32, time_s: f32, small: &SmallWaveParams) -> f32 {
    let i = i as f32;
    let phase = time_s * small.speed;
    let frequency = small.frequency * i;
    small.elevation / i * ((x * frequency + phase).sin() * (y * frequency - phase).cos()).abs()
}

/// Fine ripple displacement: the first `iterations` terms, subtracted
pub fn small_waves(x: f32, y: f32, time_s: f32, small: &SmallWaveParams) -> f32 {
    -(1..=small.iterations)
        .map(|i| small_wave_term(i, x, y, time_s, small))
        .sum::<f32>()
}

/// Combined height applied along the plane normal
pub fn elevation(
    x: f32,
    y: f32,
    time_s: f32,
    waves: &WaveParams,
    small: &SmallWaveParams,
) -> f32 {
    big_wave(x, y, time_s, waves) + small_waves(x, y, time_s, small)
}

/// Depth-to-surface interpolation factor, always in [0, 1]
pub fn mix_factor(height: f32, waves: &WaveParams) -> f32 {
    let k = (height + waves.color_offset) * waves.color_multiplier;
    if k.is_nan() {
        return 0.0;
    }
    k.clamp(0.0, 1.0)
}

/// Unlit surface color in linear RGB for a given height
pub fn surface_color(height: f32, waves: &WaveParams, colors: &SurfaceColors) -> [f32; 3] {
    let k = mix_factor(height, waves);
    let depth = colors.depth.to_linear();
    let surface = colors.surface.to_linear();
    std::array::from_fn(|c| depth[c] + (surface[c] - depth[c]) * k)
}

/// Fog blend weight for a fragment `distance` units from the eye
pub fn fog_factor(distance: f32, fog: &FogParams) -> f32 {
    if fog.far <= fog.near {
        return if distance >= fog.far { 1.0 } else { 0.0 };
    }
    let t = ((distance - fog.near) / (fog.far - fog.near)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::SrgbColor;

    /// Sample points covering the plane, both signs of each coordinate
    fn samples() -> impl Iterator<Item = (f32, f32, f32)> {
        (0..9).flat_map(|ix| {
            (0..9).flat_map(move |iy| {
                let (x, y) = (-2.5 + ix as f32 * 0.625, -2.5 + iy as f32 * 0.625);
                [0.0, 0.7, 3.3].map(move |t| (x, y, t))
            })
        })
    }

    #[test]
    fn test_big_wave_magnitude_grows_with_elevation() {
        let mut waves = WaveParams::default();
        for (x, y, t) in samples() {
            let mut previous = 0.0_f32;
            for step in 0..=10 {
                waves.elevation = step as f32 * 0.1;
                let magnitude = big_wave(x, y, t, &waves).abs();
                assert!(
                    magnitude >= previous,
                    "|big| fell from {} to {} at ({}, {}, {})",
                    previous,
                    magnitude,
                    x,
                    y,
                    t
                );
                previous = magnitude;
            }
        }
    }

    #[test]
    fn test_big_wave_period_follows_frequency() {
        let waves = WaveParams {
            speed: 0.0,
            ..WaveParams::default()
        };
        let period_x = std::f32::consts::TAU / waves.frequency[0];
        let a = big_wave(0.3, 0.9, 0.0, &waves);
        let b = big_wave(0.3 + period_x, 0.9, 0.0, &waves);
        assert!((a - b).abs() < 1e-5);
    }

    #[test]
    fn test_zero_iterations_adds_nothing() {
        let small = SmallWaveParams {
            iterations: 0,
            ..SmallWaveParams::default()
        };
        for (x, y, t) in samples() {
            assert_eq!(small_waves(x, y, t, &small), 0.0);
        }
    }

    #[test]
    fn test_small_waves_sum_exactly_iterations_terms() {
        let small = SmallWaveParams::default();
        assert_eq!(small.iterations, 4);

        let (x, y, t) = (0.4, -1.1, 2.0);
        let expected: f32 = (1..=4).map(|i| small_wave_term(i, x, y, t, &small)).sum();
        assert!((small_waves(x, y, t, &small) + expected).abs() < 1e-6);

        // A fifth term would change the result
        let fifth = small_wave_term(5, x, y, t, &small);
        assert!(fifth > 0.0);
    }

    #[test]
    fn test_small_wave_depth_monotonic_in_iterations() {
        for (x, y, t) in samples() {
            let mut previous = 0.0_f32;
            for iterations in 0..=4 {
                let small = SmallWaveParams {
                    iterations,
                    ..SmallWaveParams::default()
                };
                let depth = -small_waves(x, y, t, &small);
                assert!(depth >= previous);
                previous = depth;
            }
        }
    }

    #[test]
    fn test_mix_factor_always_clamped() {
        let extremes = [-1.0e6, -10.0, -1.0, 0.0, 0.5, 1.0, 10.0, 1.0e6];
        for &height in &extremes {
            for &offset in &extremes {
                for &multiplier in &extremes {
                    let waves = WaveParams {
                        color_offset: offset,
                        color_multiplier: multiplier,
                        ..WaveParams::default()
                    };
                    let k = mix_factor(height, &waves);
                    assert!((0.0..=1.0).contains(&k), "k = {}", k);
                }
            }
        }

        let waves = WaveParams {
            color_multiplier: f32::INFINITY,
            color_offset: 0.0,
            ..WaveParams::default()
        };
        assert_eq!(mix_factor(0.0, &waves), 0.0);
    }

    #[test]
    fn test_equal_endpoints_give_uniform_color() {
        let colors = SurfaceColors {
            depth: SrgbColor::new(0x33, 0x66, 0x99),
            surface: SrgbColor::new(0x33, 0x66, 0x99),
        };
        let waves = WaveParams::default();
        let small = SmallWaveParams::default();
        let reference = colors.depth.to_linear();

        for (x, y, t) in samples() {
            let h = elevation(x, y, t, &waves, &small);
            assert_eq!(surface_color(h, &waves, &colors), reference);
        }
    }

    #[test]
    fn test_defaults_at_origin_equal_big_wave_term() {
        let waves = WaveParams::default();
        let small = SmallWaveParams::default();

        let combined = elevation(0.0, 0.0, 0.0, &waves, &small);
        assert_eq!(combined, big_wave(0.0, 0.0, 0.0, &waves));
        assert_eq!(combined, 0.0);

        // At the origin the mix factor is the offset scaled by the multiplier
        let k = mix_factor(combined, &waves);
        assert!((k - 0.501 * 1.692).abs() < 1e-6);
    }

    #[test]
    fn test_elevation_fixture() {
        let waves = WaveParams::default();
        let small = SmallWaveParams::default();
        let (x, y, t) = (1.0_f32, 0.5_f32, 2.0_f32);

        let big = 0.2 * (4.0 * x + 1.0).sin() * (1.5 * y + 1.0).sin();
        let phase = t * 0.371;
        let small_sum: f32 = (1..=4)
            .map(|i| {
                let f = 1.589 * i as f32;
                0.622 / i as f32 * ((x * f + phase).sin() * (y * f - phase).cos()).abs()
            })
            .sum();

        let h = elevation(x, y, t, &waves, &small);
        assert!((h - (big - small_sum)).abs() < 1e-6);
    }

    #[test]
    fn test_fog_factor_range() {
        let fog = FogParams::default();
        assert_eq!(fog_factor(0.5, &fog), 0.0);
        assert_eq!(fog_factor(1.0, &fog), 0.0);
        assert_eq!(fog_factor(100.0, &fog), 1.0);
        assert_eq!(fog_factor(500.0, &fog), 1.0);
        assert!((fog_factor(50.5, &fog) - 0.5).abs() < 1e-6);

        let collapsed = FogParams {
            near: 20.0,
            far: 10.0,
            ..FogParams::default()
        };
        assert_eq!(fog_factor(9.0, &collapsed), 0.0);
        assert_eq!(fog_factor(10.0, &collapsed), 1.0);
    }
}
