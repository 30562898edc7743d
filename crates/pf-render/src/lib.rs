/// Pipeline orchestrator for petsciify.
///
/// Selects and sequences the rendering stages for a given configuration
/// and input, and holds the optional last-image slot.
pub mod renderer;

pub use renderer::{RenderInput, Renderer, render};
