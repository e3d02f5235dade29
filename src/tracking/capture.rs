use log::info;
use opencv::core::Mat;
use opencv::prelude::*;
use opencv::videoio;

use super::TrackingError;

/// Pull-based webcam wrapper
///
/// Frames are read on demand; no pacing is imposed beyond whatever rate
/// the camera delivers.
pub struct Camera {
    inner: videoio::VideoCapture,
    index: i32,
}

impl Camera {
    /// Open the capture device with the given index
    pub fn open(index: i32) -> Result<Self, TrackingError> {
        let inner = videoio::VideoCapture::new(index, videoio::CAP_ANY)?;
        if !inner.is_opened()? {
            return Err(TrackingError::CaptureUnavailable { index });
        }
        info!("camera {index} opened");
        Ok(Self { inner, index })
    }

    /// Block until the next frame arrives
    ///
    /// A failed or empty read is fatal; the capture device owns no retry
    /// policy.
    pub fn read(&mut self) -> Result<Mat, TrackingError> {
        let mut frame = Mat::default();
        if !self.inner.read(&mut frame)? || frame.empty() {
            return Err(TrackingError::FrameRead);
        }
        Ok(frame)
    }

    /// Release the capture device
    ///
    /// Called from the game loop's teardown path; dropping the camera
    /// also releases it, so a failed explicit release is not fatal.
    pub fn release(&mut self) -> Result<(), TrackingError> {
        info!("releasing camera {}", self.index);
        self.inner.release()?;
        Ok(())
    }
}
