//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::params::{RenderConfig, SceneParams};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "undulate")]
#[command(about = "Shader-driven undulating plane with a live tuning panel", long_about = None)]
pub struct Args {
    /// Window (or snapshot) width in pixels
    #[arg(long, value_name = "PIXELS", default_value_t = 1280)]
    pub width: u32,

    /// Window (or snapshot) height in pixels
    #[arg(long, value_name = "PIXELS", default_value_t = 720)]
    pub height: u32,

    /// Start with the plane drawn as wireframe
    #[arg(long)]
    pub wireframe: bool,

    /// Start with the control panel hidden (F1 toggles it)
    #[arg(long)]
    pub hide_panel: bool,

    /// Render a single frame offscreen to this PNG file and exit
    #[arg(long, value_name = "PATH")]
    pub snapshot: Option<PathBuf>,

    /// Elapsed time used for --snapshot (seconds)
    #[arg(long, value_name = "SECONDS", default_value_t = 0.0)]
    pub time: f32,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            window_width: self.width.max(1),
            window_height: self.height.max(1),
            ..RenderConfig::default()
        }
    }

    /// Literal defaults plus the startup flags
    pub fn scene_params(&self) -> SceneParams {
        SceneParams {
            wireframe: self.wireframe,
            ..SceneParams::default()
        }
    }

    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["undulate"]).unwrap();
        assert_eq!(args.width, 1280);
        assert_eq!(args.height, 720);
        assert!(args.snapshot.is_none());
        assert_eq!(args.log_filter(), "info");
        assert_eq!(args.scene_params(), SceneParams::default());
    }

    #[test]
    fn test_snapshot_flags() {
        let args = Args::try_parse_from([
            "undulate",
            "--snapshot",
            "out.png",
            "--time",
            "2.5",
            "--width",
            "640",
            "--height",
            "0",
            "--wireframe",
            "-v",
        ])
        .unwrap();

        assert_eq!(args.snapshot, Some(PathBuf::from("out.png")));
        assert_eq!(args.time, 2.5);
        assert!(args.scene_params().wireframe);
        assert_eq!(args.log_filter(), "debug");

        let config = args.render_config();
        assert_eq!(config.window_width, 640);
        assert_eq!(config.window_height, 1);
    }
}
