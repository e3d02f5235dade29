use crate::game::Direction;

/// A hand position normalized to the camera frame
///
/// Both axes run over [0, 1] with (0, 0) at the frame's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedPoint {
    pub x: f32,
    pub y: f32,
}

impl NormalizedPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Maps a normalized hand position to a movement direction
///
/// The frame is split into three vertical bands: the left band steers
/// left, the right band steers right, and the middle band steers down
/// when the hand sits in the upper part of the frame and up otherwise.
/// A direction that would reverse the snake onto itself is rejected and
/// the current direction kept instead.
#[derive(Debug, Clone)]
pub struct GestureMapper {
    /// Hands left of this x steer left
    pub left_threshold: f32,
    /// Hands right of this x steer right
    pub right_threshold: f32,
    /// Within the middle band, hands above this y steer down
    pub down_threshold: f32,
}

impl Default for GestureMapper {
    fn default() -> Self {
        Self {
            left_threshold: 0.35,
            right_threshold: 0.65,
            down_threshold: 0.35,
        }
    }
}

impl GestureMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a hand position to the direction the snake should take
    ///
    /// Pure function; always returns a valid direction. Callers skip the
    /// mapper entirely on frames with no detected hand, so the snake
    /// coasts on its last direction rather than stopping.
    pub fn map(&self, point: NormalizedPoint, current: Direction) -> Direction {
        let proposed = if point.x < self.left_threshold {
            Direction::Left
        } else if point.x > self.right_threshold {
            Direction::Right
        } else if point.y < self.down_threshold {
            Direction::Down
        } else {
            Direction::Up
        };

        if proposed.is_opposite(current) {
            current
        } else {
            proposed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_horizontal_bands() {
        let mapper = GestureMapper::new();

        assert_eq!(
            mapper.map(NormalizedPoint::new(0.1, 0.5), Direction::Stopped),
            Direction::Left
        );
        assert_eq!(
            mapper.map(NormalizedPoint::new(0.9, 0.5), Direction::Stopped),
            Direction::Right
        );
    }

    #[test]
    fn test_vertical_bands() {
        let mapper = GestureMapper::new();

        // A hand high in the frame steers down, everything else up
        assert_eq!(
            mapper.map(NormalizedPoint::new(0.5, 0.1), Direction::Stopped),
            Direction::Down
        );
        assert_eq!(
            mapper.map(NormalizedPoint::new(0.5, 0.9), Direction::Stopped),
            Direction::Up
        );
    }

    #[test]
    fn test_thresholds_are_strict() {
        let mapper = GestureMapper::new();

        // Exactly on a threshold falls through to the next band
        assert_eq!(
            mapper.map(NormalizedPoint::new(0.35, 0.5), Direction::Stopped),
            Direction::Up
        );
        assert_eq!(
            mapper.map(NormalizedPoint::new(0.65, 0.35), Direction::Stopped),
            Direction::Up
        );
    }

    #[test]
    fn test_reversal_guard_each_axis() {
        let mapper = GestureMapper::new();

        // Proposed Left while moving Right keeps Right, and so on
        assert_eq!(
            mapper.map(NormalizedPoint::new(0.1, 0.5), Direction::Right),
            Direction::Right
        );
        assert_eq!(
            mapper.map(NormalizedPoint::new(0.9, 0.5), Direction::Left),
            Direction::Left
        );
        assert_eq!(
            mapper.map(NormalizedPoint::new(0.5, 0.1), Direction::Up),
            Direction::Up
        );
        assert_eq!(
            mapper.map(NormalizedPoint::new(0.5, 0.9), Direction::Down),
            Direction::Down
        );
    }

    #[test]
    fn test_perpendicular_turns_allowed() {
        let mapper = GestureMapper::new();

        assert_eq!(
            mapper.map(NormalizedPoint::new(0.1, 0.5), Direction::Up),
            Direction::Left
        );
        assert_eq!(
            mapper.map(NormalizedPoint::new(0.5, 0.9), Direction::Right),
            Direction::Up
        );
    }

    #[test]
    fn test_never_returns_opposite_of_current() {
        let mapper = GestureMapper::new();
        let mut rng = rand::thread_rng();
        let directions = [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
            Direction::Stopped,
        ];

        for _ in 0..10_000 {
            let point = NormalizedPoint::new(rng.gen_range(0.0..=1.0), rng.gen_range(0.0..=1.0));
            let current = directions[rng.gen_range(0..directions.len())];

            let mapped = mapper.map(point, current);

            assert!(
                !mapped.is_opposite(current),
                "map({point:?}, {current:?}) returned the opposite {mapped:?}"
            );
            assert_ne!(mapped, Direction::Stopped);
        }
    }
}
