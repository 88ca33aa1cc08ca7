//! Renderer trait abstraction.

use letterink_core::DoodleSheet;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Degenerate surface: {width}x{height}")]
    DegenerateSurface { width: f64, height: f64 },
    #[error("Render failed: {0}")]
    RenderFailed(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Trait for doodle export backends.
///
/// Implementations turn a finished drawing into a self-contained,
/// non-editable image resource identified by an opaque locator string.
pub trait DoodleRenderer {
    /// Render the sheet and return the resource locator.
    fn render(&self, sheet: &DoodleSheet) -> RenderResult<String>;
}
