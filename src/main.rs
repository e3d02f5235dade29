use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use hand_snake::game::GameConfig;
use hand_snake::modes::{GestureMode, GestureOptions};

#[derive(Parser)]
#[command(name = "hand_snake")]
#[command(version, about = "Snake steered by hand gestures from a webcam")]
struct Cli {
    /// Camera device index
    #[arg(long, default_value = "0")]
    camera: i32,

    /// Game window width in pixels
    #[arg(long, default_value = "600")]
    width: u32,

    /// Game window height in pixels
    #[arg(long, default_value = "600")]
    height: u32,

    /// Path to the MediaPipe bridge script
    #[arg(long, default_value = "hand_detect.py")]
    detector_script: PathBuf,

    /// Minimum detection confidence accepted from the detector
    #[arg(long, default_value = "0.5")]
    confidence: f32,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = GameConfig::new(cli.width as f32, cli.height as f32);
    let options = GestureOptions {
        camera_index: cli.camera,
        detector_script: cli.detector_script,
        detection_confidence: cli.confidence,
    };

    let mut mode = GestureMode::new(config, &options)?;
    mode.run()
}
