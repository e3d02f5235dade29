use anyhow::{Context, Result};
use opencv::core::{self, Mat, Rect, Scalar, Size};
use opencv::prelude::*;
use opencv::{highgui, imgproc};

use crate::game::{GameConfig, GameState, Point};
use crate::input::{key_action, KeyAction};
use crate::metrics::GameMetrics;
use crate::tracking::Landmark;

const GAME_WINDOW: &str = "Hand Snake";
const CAMERA_WINDOW: &str = "Video";

/// Side length of a body square, in pixels
const SEGMENT_SIZE: i32 = 20;
/// Radius of the food circle, in pixels
const FOOD_RADIUS: i32 = 10;
/// Radius of a landmark dot on the camera surface, in pixels
const LANDMARK_RADIUS: i32 = 3;

fn white() -> Scalar {
    Scalar::new(255.0, 255.0, 255.0, 0.0)
}

fn red() -> Scalar {
    // BGR
    Scalar::new(0.0, 0.0, 255.0, 0.0)
}

fn green() -> Scalar {
    Scalar::new(0.0, 255.0, 0.0, 0.0)
}

/// Draws the game field and the annotated camera feed, each in its own
/// window, and polls the UI event queue for key presses
pub struct Renderer {
    width: i32,
    height: i32,
    half_width: f32,
    half_height: f32,
}

impl Renderer {
    /// Create both display windows
    pub fn create(config: &GameConfig) -> Result<Self> {
        highgui::named_window(GAME_WINDOW, highgui::WINDOW_AUTOSIZE)
            .context("failed to create game window")?;
        highgui::named_window(CAMERA_WINDOW, highgui::WINDOW_AUTOSIZE)
            .context("failed to create camera window")?;

        Ok(Self {
            width: config.width() as i32,
            height: config.height() as i32,
            half_width: config.half_width,
            half_height: config.half_height,
        })
    }

    /// Draw the current game state: white squares for the snake, a red
    /// circle for the food, and a stats line across the top
    pub fn draw(&self, state: &GameState, metrics: &GameMetrics) -> Result<()> {
        let mut canvas = Mat::new_rows_cols_with_default(
            self.height,
            self.width,
            core::CV_8UC3,
            Scalar::all(0.0),
        )?;

        for segment in &state.snake.segments {
            self.draw_square(&mut canvas, *segment)?;
        }
        self.draw_square(&mut canvas, state.snake.head)?;

        let food = game_to_pixel(state.food, self.half_width, self.half_height);
        imgproc::circle(
            &mut canvas,
            food,
            FOOD_RADIUS,
            red(),
            imgproc::FILLED,
            imgproc::LINE_8,
            0,
        )?;

        let stats = format!(
            "Score: {}   Time: {}",
            metrics.food_eaten,
            metrics.format_time()
        );
        imgproc::put_text(
            &mut canvas,
            &stats,
            core::Point::new(10, 24),
            imgproc::FONT_HERSHEY_SIMPLEX,
            0.6,
            white(),
            1,
            imgproc::LINE_AA,
            false,
        )?;

        highgui::imshow(GAME_WINDOW, &canvas)?;
        Ok(())
    }

    /// Show the camera frame, with landmark dots when a hand was detected
    pub fn show_camera(&self, frame: &Mat, landmarks: Option<&[Landmark]>) -> Result<()> {
        match landmarks {
            Some(landmarks) => {
                let mut annotated = frame.try_clone()?;
                let size: Size = annotated.size()?;
                for lm in landmarks {
                    let center = core::Point::new(
                        (lm.x * size.width as f32).round() as i32,
                        (lm.y * size.height as f32).round() as i32,
                    );
                    imgproc::circle(
                        &mut annotated,
                        center,
                        LANDMARK_RADIUS,
                        green(),
                        imgproc::FILLED,
                        imgproc::LINE_8,
                        0,
                    )?;
                }
                highgui::imshow(CAMERA_WINDOW, &annotated)?;
            }
            None => highgui::imshow(CAMERA_WINDOW, frame)?,
        }
        Ok(())
    }

    /// Pump the UI event queue for one millisecond and report the pressed key
    pub fn poll_key(&self) -> Result<KeyAction> {
        let code = highgui::wait_key(1)?;
        Ok(key_action(code))
    }

    /// Whether the game window is still on screen
    ///
    /// The user closing the window is a clean shutdown signal, not an error.
    pub fn is_open(&self) -> Result<bool> {
        let visible = highgui::get_window_property(GAME_WINDOW, highgui::WND_PROP_VISIBLE)?;
        Ok(visible >= 1.0)
    }

    /// Tear down both windows
    pub fn close(&self) -> Result<()> {
        highgui::destroy_all_windows()?;
        Ok(())
    }

    fn draw_square(&self, canvas: &mut Mat, position: Point) -> Result<()> {
        let center = game_to_pixel(position, self.half_width, self.half_height);
        let rect = Rect::new(
            center.x - SEGMENT_SIZE / 2,
            center.y - SEGMENT_SIZE / 2,
            SEGMENT_SIZE,
            SEGMENT_SIZE,
        );
        imgproc::rectangle(canvas, rect, white(), imgproc::FILLED, imgproc::LINE_8, 0)?;
        Ok(())
    }
}

/// Map a game-space point (origin at the center, +y up) to pixel space
/// (origin at the top-left, +y down)
fn game_to_pixel(p: Point, half_width: f32, half_height: f32) -> core::Point {
    core::Point::new(
        (p.x + half_width).round() as i32,
        (half_height - p.y).round() as i32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_maps_to_window_center() {
        let px = game_to_pixel(Point::ORIGIN, 300.0, 300.0);
        assert_eq!((px.x, px.y), (300, 300));
    }

    #[test]
    fn test_corners() {
        let top_left = game_to_pixel(Point::new(-300.0, 300.0), 300.0, 300.0);
        assert_eq!((top_left.x, top_left.y), (0, 0));

        let bottom_right = game_to_pixel(Point::new(300.0, -300.0), 300.0, 300.0);
        assert_eq!((bottom_right.x, bottom_right.y), (600, 600));
    }

    #[test]
    fn test_positive_y_is_up() {
        let above_center = game_to_pixel(Point::new(0.0, 100.0), 300.0, 300.0);
        assert_eq!((above_center.x, above_center.y), (300, 200));
    }
}
