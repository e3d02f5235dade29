use serde::{Deserialize, Serialize};

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Half extent of the playfield on the x axis
    pub half_width: f32,
    /// Half extent of the playfield on the y axis
    pub half_height: f32,
    /// Distance the head travels per frame
    pub step_size: f32,
    /// Head-to-food distance below which the food is eaten
    pub eat_radius: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            half_width: 300.0,
            half_height: 300.0,
            step_size: 12.0,
            eat_radius: 20.0,
        }
    }
}

impl GameConfig {
    /// Create a configuration for a window of the given full extents
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            half_width: width / 2.0,
            half_height: height / 2.0,
            ..Default::default()
        }
    }

    /// Create a small playfield for testing
    pub fn small() -> Self {
        Self::new(200.0, 200.0)
    }

    /// Full window width in logical units
    pub fn width(&self) -> f32 {
        self.half_width * 2.0
    }

    /// Full window height in logical units
    pub fn height(&self) -> f32 {
        self.half_height * 2.0
    }
}
