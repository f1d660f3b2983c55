//! Font abstraction for text rasterization
//!
//! Font loading and selection belong to the application; the texture
//! resource only needs something that turns a string into a pixel surface.

use crate::assets::Surface;
use crate::render::context::ContextResult;
use crate::render::types::Color;

/// A loaded font capable of rasterizing text
pub trait Font {
    /// Rasterize `text` in the given color to a host surface
    fn render_text(&self, text: &str, color: Color) -> ContextResult<Surface>;
}
