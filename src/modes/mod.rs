pub mod gesture;

pub use gesture::{GestureMode, GestureOptions};
