//! Session counters shown in the game window's stats line

pub mod game_metrics;

pub use game_metrics::GameMetrics;
