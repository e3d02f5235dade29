//! Webcam capture and hand-pose estimation
//!
//! The capture side wraps an OpenCV `VideoCapture`; the estimation side
//! talks to a MediaPipe hand-landmarker running in a Python bridge
//! subprocess. The rest of the crate only ever sees normalized landmark
//! positions, never raw detector output.

pub mod capture;
pub mod tracker;

pub use capture::Camera;
pub use tracker::{HandObservation, HandTracker, Landmark};

use thiserror::Error;

/// Failures raised by the capture and detection layer
///
/// A frame with no detected hand is not an error: `HandTracker::detect`
/// returns `Ok(None)` and the game coasts on its last direction.
#[derive(Debug, Error)]
pub enum TrackingError {
    /// The camera could not be opened; fatal at startup
    #[error("camera {index} could not be opened")]
    CaptureUnavailable { index: i32 },

    /// A frame read failed or produced an empty frame; fatal
    #[error("camera frame read failed")]
    FrameRead,

    /// The detector bridge could not be started; fatal at startup
    #[error("hand detector unavailable: {0}")]
    DetectorUnavailable(String),

    /// The detector bridge produced output the tracker cannot parse
    #[error("hand detector protocol error: {0}")]
    DetectorProtocol(String),

    #[error(transparent)]
    Vision(#[from] opencv::Error),

    #[error("detector i/o failed: {0}")]
    Io(#[from] std::io::Error),
}
