//! Backend abstraction for the rendering system
//!
//! This module defines the trait a render backend must implement for the
//! texture resource to upload, modulate, draw, and destroy GPU textures.
//! The backend (window, device, renderer) is owned by the application; the
//! texture resource only talks to it through this seam.

use thiserror::Error;

use crate::assets::Surface;
use crate::render::types::{BlendMode, Flip, Point, Rect};

/// Result type for context operations
pub type ContextResult<T> = Result<T, ContextError>;

/// Handle to a texture resource stored in the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u64);

/// Diagnostic reported by a render backend or font collaborator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct ContextError(pub String);

impl ContextError {
    /// Create a context error from any displayable diagnostic
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Main rendering context trait
///
/// Implementations own the GPU device and the draw target. All calls are
/// immediate and must be made from the thread that owns the graphics
/// context; the texture resource adds no synchronization of its own.
pub trait RenderContext {
    /// Upload a host surface to a new GPU texture and return its handle
    fn create_texture_from_surface(&mut self, surface: &Surface) -> ContextResult<TextureHandle>;

    /// Destroy a texture previously created by this context
    ///
    /// The handle is invalid after this call.
    fn destroy_texture(&mut self, handle: TextureHandle);

    /// Draw a texture region to the target
    ///
    /// `src` selects the sampled sub-rectangle (the whole texture when
    /// `None`), `dst` places and sizes the result, `angle` rotates in
    /// degrees clockwise around `pivot` (relative to `dst`'s top-left
    /// corner), and `flip` mirrors the result.
    fn draw_texture(
        &mut self,
        handle: TextureHandle,
        src: Option<Rect>,
        dst: Rect,
        angle: f64,
        pivot: Point,
        flip: Flip,
    );

    /// Set the color modulation applied when the texture is drawn
    fn set_color_mod(&mut self, handle: TextureHandle, r: u8, g: u8, b: u8);

    /// Set the alpha modulation applied when the texture is drawn
    fn set_alpha_mod(&mut self, handle: TextureHandle, alpha: u8);

    /// Set the blend mode used when the texture is drawn
    fn set_blend_mode(&mut self, handle: TextureHandle, mode: BlendMode);
}
