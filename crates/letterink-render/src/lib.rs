//! Letterink Render Library
//!
//! Renderer abstraction and the SVG implementation that turns a finished
//! doodle into a self-contained image resource, plus the compose glue that
//! hands that resource to the letter board.

pub mod compose;
mod renderer;
pub mod svg;

pub use compose::add_doodle;
pub use renderer::{DoodleRenderer, RenderError, RenderResult};
pub use svg::SvgRenderer;
