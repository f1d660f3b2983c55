//! Rendering interface
//!
//! The [`Texture`] resource and the collaborator traits it draws through.

pub mod context;
pub mod font;
pub mod texture;
pub mod types;

pub use context::{ContextError, ContextResult, RenderContext, TextureHandle};
pub use font::Font;
pub use texture::{DrawOptions, Texture, TextureError};
pub use types::{BlendMode, Color, Flip, Point, Rect};
