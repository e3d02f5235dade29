use std::time::{Duration, Instant};

/// Counters for one play session
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    /// Frames processed so far
    pub frames: u64,
    /// Frames in which a hand was detected
    pub detections: u64,
    /// Food items eaten; equals the snake's segment count
    pub food_eaten: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            frames: 0,
            detections: 0,
            food_eaten: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    pub fn on_frame(&mut self, hand_detected: bool) {
        self.frames += 1;
        if hand_detected {
            self.detections += 1;
        }
    }

    pub fn on_food_eaten(&mut self) {
        self.food_eaten += 1;
    }

    /// Fraction of frames with a detected hand
    pub fn detection_rate(&self) -> f64 {
        if self.frames == 0 {
            0.0
        } else {
            self.detections as f64 / self.frames as f64
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
