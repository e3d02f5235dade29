use super::{
    config::GameConfig,
    state::{GameState, Point, Snake},
};
use rand::Rng;

/// Where the food starts, relative to the window center
const INITIAL_FOOD: Point = Point { x: 0.0, y: 100.0 };

/// Information about a single advance step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepInfo {
    /// Whether the snake ate food this step
    pub ate_food: bool,
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: rand::rngs::ThreadRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: rand::thread_rng(),
        }
    }

    /// Produce the initial state: a stopped snake at the center, food above it
    pub fn reset(&self) -> GameState {
        GameState::new(Snake::new(Point::ORIGIN), INITIAL_FOOD)
    }

    /// Advance the game by one frame
    ///
    /// Performs, in order: head translation, boundary wrap, eat check, and
    /// the body-segment shift. The order matters: segments must take their
    /// predecessors' pre-frame positions, so the previous head position is
    /// captured before the translation runs.
    pub fn advance(&mut self, state: &mut GameState) -> StepInfo {
        let prev_head = state.snake.head;

        // Translate: a no-op while the snake is stopped
        let (dx, dy) = state.snake.direction.delta();
        state.snake.head.x += dx * self.config.step_size;
        state.snake.head.y += dy * self.config.step_size;

        // Wrap around the screen edges (teleport, not bounce)
        state.snake.head.x = wrap_axis(state.snake.head.x, self.config.half_width);
        state.snake.head.y = wrap_axis(state.snake.head.y, self.config.half_height);

        // Eat check: grow by one and relocate the food
        let ate_food = state.snake.head.distance_to(state.food) < self.config.eat_radius;
        if ate_food {
            state.food = self.spawn_food();
            // The appended segment's position is overwritten by the shift
            // chain, so its starting value does not matter
            state.snake.segments.push(Point::ORIGIN);
        }

        // Shift the body from tail toward head so each segment reads its
        // predecessor's position before it is overwritten
        for i in (1..state.snake.segments.len()).rev() {
            state.snake.segments[i] = state.snake.segments[i - 1];
        }
        if let Some(first) = state.snake.segments.first_mut() {
            *first = prev_head;
        }

        StepInfo { ate_food }
    }

    /// Pick a uniformly random food position within the playfield
    fn spawn_food(&mut self) -> Point {
        Point::new(
            self.rng
                .gen_range(-self.config.half_width..=self.config.half_width),
            self.rng
                .gen_range(-self.config.half_height..=self.config.half_height),
        )
    }
}

/// Teleport a coordinate to the opposite edge once it leaves the playfield
fn wrap_axis(value: f32, half_extent: f32) -> f32 {
    if value > half_extent {
        -half_extent
    } else if value < -half_extent {
        half_extent
    } else {
        value
    }
}
