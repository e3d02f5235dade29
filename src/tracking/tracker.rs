//! Hand tracking using the MediaPipe hand landmarker via a Python bridge
//!
//! The bridge script (`hand_detect.py`) receives frames on stdin as a
//! small binary header plus raw BGR bytes and answers with one JSON line
//! per frame. Running MediaPipe out of process keeps the detector's heavy
//! runtime out of this crate while the tracker stays a thin, synchronous
//! client.
//!
//! # Setup
//!
//! python3 -m venv .venv && .venv/bin/pip install mediapipe numpy

use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

use log::{debug, info, warn};
use opencv::core::{Mat, Size};
use opencv::imgproc;
use opencv::prelude::*;
use serde::Deserialize;

use super::TrackingError;

/// Resolution frames are downscaled to before detection
const DETECT_WIDTH: i32 = 320;
const DETECT_HEIGHT: i32 = 240;

/// One hand landmark, normalized to [0, 1] over the frame
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
}

/// A detected hand for one frame
#[derive(Debug, Clone)]
pub struct HandObservation {
    /// All landmarks reported by the detector, normalized to the frame
    pub landmarks: Vec<Landmark>,
    /// Detection confidence in [0, 1]
    pub confidence: f32,
}

impl HandObservation {
    /// Arithmetic mean of all landmark positions
    ///
    /// This is the single 2D point the direction mapper consumes.
    pub fn center(&self) -> (f32, f32) {
        let n = self.landmarks.len() as f32;
        let (sx, sy) = self
            .landmarks
            .iter()
            .fold((0.0, 0.0), |(sx, sy), lm| (sx + lm.x, sy + lm.y));
        (sx / n, sy / n)
    }
}

#[derive(Debug, Deserialize)]
struct HandJson {
    score: f32,
    landmarks: Vec<Landmark>,
}

#[derive(Debug, Deserialize)]
struct DetectionJson {
    #[serde(default)]
    hands: Vec<HandJson>,
    #[serde(default)]
    error: Option<String>,
}

/// Hand-pose estimator backed by a MediaPipe bridge subprocess
pub struct HandTracker {
    child: Child,
    stdout: BufReader<std::process::ChildStdout>,
    confidence_threshold: f32,
    /// Scratch buffer for the downscaled detection frame
    resized: Mat,
}

impl HandTracker {
    /// Start the bridge subprocess and wait for its READY handshake
    pub fn spawn(script: &Path, confidence_threshold: f32) -> Result<Self, TrackingError> {
        if !script.exists() {
            return Err(TrackingError::DetectorUnavailable(format!(
                "bridge script not found at {}",
                script.display()
            )));
        }

        info!("starting hand detector bridge {}", script.display());
        let mut child = Command::new(python_interpreter())
            .arg(script)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| TrackingError::DetectorUnavailable("no stdout pipe".into()))?;
        let mut stdout = BufReader::new(stdout);

        let mut ready = String::new();
        stdout.read_line(&mut ready)?;
        if ready.trim() != "READY" {
            let _ = child.kill();
            return Err(TrackingError::DetectorUnavailable(format!(
                "bridge did not signal ready, got {ready:?}"
            )));
        }
        info!("hand detector ready");

        Ok(Self {
            child,
            stdout,
            confidence_threshold: confidence_threshold.clamp(0.0, 1.0),
            resized: Mat::default(),
        })
    }

    /// Detect a hand in the frame
    ///
    /// Returns `Ok(None)` when no hand clears the confidence threshold;
    /// that is a normal per-frame condition, not an error.
    pub fn detect(&mut self, frame: &Mat) -> Result<Option<HandObservation>, TrackingError> {
        if frame.empty() {
            return Ok(None);
        }

        imgproc::resize(
            frame,
            &mut self.resized,
            Size::new(DETECT_WIDTH, DETECT_HEIGHT),
            0.0,
            0.0,
            imgproc::INTER_LINEAR,
        )?;

        self.send_frame()?;
        let response = self.read_response()?;

        let result: DetectionJson = serde_json::from_str(&response)
            .map_err(|err| TrackingError::DetectorProtocol(format!("{err}: {response}")))?;

        if let Some(error) = result.error {
            warn!("detector reported: {error}");
            return Ok(None);
        }

        Ok(pick_hand(result.hands, self.confidence_threshold))
    }

    /// Stream the downscaled frame to the bridge: width, height, channel
    /// count as little-endian u32s, then the raw pixel bytes
    fn send_frame(&mut self) -> Result<(), TrackingError> {
        let width = self.resized.cols() as u32;
        let height = self.resized.rows() as u32;
        let channels = self.resized.channels() as u32;
        let data = self.resized.data_bytes()?;

        let stdin = self
            .child
            .stdin
            .as_mut()
            .ok_or_else(|| TrackingError::DetectorProtocol("stdin pipe closed".into()))?;
        stdin.write_all(&width.to_le_bytes())?;
        stdin.write_all(&height.to_le_bytes())?;
        stdin.write_all(&channels.to_le_bytes())?;
        stdin.write_all(data)?;
        stdin.flush()?;
        Ok(())
    }

    fn read_response(&mut self) -> Result<String, TrackingError> {
        let mut response = String::new();
        let read = self.stdout.read_line(&mut response)?;
        if read == 0 {
            return Err(TrackingError::DetectorProtocol(
                "bridge closed its output".into(),
            ));
        }
        Ok(response)
    }
}

impl Drop for HandTracker {
    fn drop(&mut self) {
        let _ = self.child.kill();
    }
}

/// Pick the first reported hand that clears the confidence threshold
fn pick_hand(hands: Vec<HandJson>, threshold: f32) -> Option<HandObservation> {
    for hand in hands {
        if hand.score < threshold || hand.landmarks.is_empty() {
            continue;
        }
        let observation = HandObservation {
            landmarks: hand.landmarks,
            confidence: hand.score,
        };
        let (x, y) = observation.center();
        debug!(
            "hand detected (confidence {:.2}) at ({x:.3}, {y:.3})",
            observation.confidence
        );
        return Some(observation);
    }
    None
}

/// Default location of the bridge script, relative to the working directory
pub fn default_script_path() -> PathBuf {
    PathBuf::from("hand_detect.py")
}

/// Prefer a project-local virtualenv interpreter when one exists
fn python_interpreter() -> PathBuf {
    let venv = PathBuf::from(".venv/bin/python");
    if venv.exists() {
        venv
    } else {
        PathBuf::from("python3")
    }
}
