//! Gesture-controlled play mode
//!
//! One synchronous loop paced by the camera: read a frame, estimate the
//! hand position, map it to a direction, advance the game, draw both
//! surfaces, poll for the quit key. Frames with no detected hand leave
//! the direction untouched, so the snake coasts on its last input.

use std::path::PathBuf;

use anyhow::{Context, Result};
use log::{debug, info, warn};

use crate::game::{GameConfig, GameEngine, GameState};
use crate::input::{GestureMapper, KeyAction, NormalizedPoint};
use crate::metrics::GameMetrics;
use crate::render::Renderer;
use crate::tracking::{self, Camera, HandTracker};

/// Capture and detection settings not covered by [`GameConfig`]
#[derive(Debug, Clone)]
pub struct GestureOptions {
    /// Camera device index
    pub camera_index: i32,
    /// Path to the MediaPipe bridge script
    pub detector_script: PathBuf,
    /// Minimum confidence accepted from the detector
    pub detection_confidence: f32,
}

impl Default for GestureOptions {
    fn default() -> Self {
        Self {
            camera_index: 0,
            detector_script: tracking::tracker::default_script_path(),
            detection_confidence: 0.5,
        }
    }
}

/// The process-wide context for a gesture-controlled session
///
/// Owns every resource the loop touches; teardown runs on every exit
/// path, including the fatal frame-read path.
pub struct GestureMode {
    engine: GameEngine,
    state: GameState,
    mapper: GestureMapper,
    camera: Camera,
    tracker: HandTracker,
    renderer: Renderer,
    metrics: GameMetrics,
}

impl GestureMode {
    pub fn new(config: GameConfig, options: &GestureOptions) -> Result<Self> {
        let camera =
            Camera::open(options.camera_index).context("failed to open capture device")?;
        let tracker = HandTracker::spawn(&options.detector_script, options.detection_confidence)
            .context("failed to start hand detector")?;
        let renderer = Renderer::create(&config).context("failed to create display windows")?;

        let engine = GameEngine::new(config);
        let state = engine.reset();

        Ok(Self {
            engine,
            state,
            mapper: GestureMapper::new(),
            camera,
            tracker,
            renderer,
            metrics: GameMetrics::new(),
        })
    }

    pub fn run(&mut self) -> Result<()> {
        let result = self.run_loop();
        self.shutdown();
        result
    }

    fn run_loop(&mut self) -> Result<()> {
        info!("entering game loop, press q to quit");

        loop {
            let frame = self.camera.read().context("camera frame read failed")?;
            let observation = self.tracker.detect(&frame)?;

            if let Some(observation) = &observation {
                let (x, y) = observation.center();
                self.state.snake.direction = self
                    .mapper
                    .map(NormalizedPoint::new(x, y), self.state.snake.direction);
            }

            let step = self.engine.advance(&mut self.state);
            if step.ate_food {
                self.metrics.on_food_eaten();
                debug!(
                    "food eaten, snake now {} segments long",
                    self.state.snake.segments.len()
                );
            }
            self.metrics.on_frame(observation.is_some());
            self.metrics.update();

            self.renderer.draw(&self.state, &self.metrics)?;
            self.renderer
                .show_camera(&frame, observation.as_ref().map(|o| o.landmarks.as_slice()))?;

            match self.renderer.poll_key()? {
                KeyAction::Quit => break,
                KeyAction::None => {}
            }
            if !self.renderer.is_open()? {
                info!("game window closed");
                break;
            }
        }

        Ok(())
    }

    fn shutdown(&mut self) {
        if let Err(err) = self.camera.release() {
            warn!("camera release failed: {err}");
        }
        if let Err(err) = self.renderer.close() {
            warn!("window teardown failed: {err}");
        }
        info!(
            "session over: {} food eaten in {}, hand seen in {:.0}% of {} frames",
            self.metrics.food_eaten,
            self.metrics.format_time(),
            self.metrics.detection_rate() * 100.0,
            self.metrics.frames
        );
    }
}
