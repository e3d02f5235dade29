//! Input handling: gesture-to-direction mapping and keyboard polling

pub mod keys;
pub mod mapper;

pub use keys::{key_action, KeyAction};
pub use mapper::{GestureMapper, NormalizedPoint};
