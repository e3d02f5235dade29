//! Window rendering for the game field and the camera feed

pub mod renderer;

pub use renderer::Renderer;
