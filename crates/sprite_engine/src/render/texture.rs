//! GPU texture resource
//!
//! [`Texture`] owns at most one GPU texture handle at a time. Loading
//! replaces the held handle, `free` releases it, and drop guarantees the
//! release even when the caller forgets. All GPU work goes through the
//! [`RenderContext`] injected at construction; the resource itself only
//! tracks the handle and its dimensions.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use thiserror::Error;

use crate::assets::Surface;
use crate::config::TextureSettings;
use crate::render::context::{RenderContext, TextureHandle};
use crate::render::font::Font;
use crate::render::types::{BlendMode, Color, Flip, Point, Rect};

/// Texture loading errors
///
/// Every variant is local and non-fatal: the resource is left empty and the
/// caller decides whether to retry or abort.
#[derive(Error, Debug)]
pub enum TextureError {
    /// The image file could not be decoded
    #[error("Unable to load image {path:?}: {reason}")]
    Decode {
        /// Path of the image that failed to decode
        path: PathBuf,
        /// Decoder diagnostic
        reason: String,
    },

    /// The transparency color key could not be applied
    #[error("Unable to color key image {path:?}: {reason}")]
    ColorKey {
        /// Path of the image being keyed
        path: PathBuf,
        /// Surface diagnostic
        reason: String,
    },

    /// The render context could not create a GPU texture
    #[error("Unable to create texture from {origin}: {reason}")]
    TextureCreation {
        /// Human-readable description of the pixel source
        origin: String,
        /// Context diagnostic
        reason: String,
    },

    /// The font could not rasterize the requested text
    #[error("Unable to render text surface: {reason}")]
    TextRender {
        /// Font diagnostic
        reason: String,
    },
}

/// Parameters for a single draw call
///
/// `render_with` draws the full texture at its native size by default;
/// the builder methods select a clip, rotation, pivot, and mirroring.
#[derive(Debug, Clone, Copy, Default)]
pub struct DrawOptions {
    /// Source sub-rectangle to sample; the destination takes its size
    pub clip: Option<Rect>,
    /// Rotation in degrees, clockwise
    pub angle: f64,
    /// Pivot for rotation and flipping, relative to the destination's
    /// top-left corner; the origin when `None`
    pub center: Option<Point>,
    /// Mirroring applied after rotation
    pub flip: Flip,
}

impl DrawOptions {
    /// Draw only the given source sub-rectangle
    #[must_use]
    pub const fn with_clip(mut self, clip: Rect) -> Self {
        self.clip = Some(clip);
        self
    }

    /// Rotate by `angle` degrees clockwise around the pivot
    #[must_use]
    pub const fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    /// Rotate and flip around `center` instead of the destination origin
    #[must_use]
    pub const fn with_center(mut self, center: Point) -> Self {
        self.center = Some(center);
        self
    }

    /// Mirror the drawn texture
    #[must_use]
    pub const fn with_flip(mut self, flip: Flip) -> Self {
        self.flip = flip;
        self
    }
}

/// An owning wrapper around a single GPU texture
///
/// Starts empty; `load_from_file` and `load_from_rendered_text` replace the
/// held handle, releasing the previous one first. The handle is destroyed
/// through the render context on `free()` and on drop, so a `Texture` never
/// outlives its pixels on the GPU.
///
/// Single-threaded by design: the context is shared via `Rc<RefCell<_>>`
/// and all calls must happen on the thread that owns the graphics context.
pub struct Texture<C: RenderContext> {
    context: Rc<RefCell<C>>,
    settings: TextureSettings,
    handle: Option<TextureHandle>,
    width: u32,
    height: u32,
}

impl<C: RenderContext> Texture<C> {
    /// Create an empty texture bound to a render context
    #[must_use]
    pub fn new(context: Rc<RefCell<C>>) -> Self {
        Self::with_settings(context, TextureSettings::default())
    }

    /// Create an empty texture with explicit load settings
    #[must_use]
    pub fn with_settings(context: Rc<RefCell<C>>, settings: TextureSettings) -> Self {
        Self {
            context,
            settings,
            handle: None,
            width: 0,
            height: 0,
        }
    }

    /// Load the texture from an image file, replacing any held handle
    ///
    /// The image is decoded to RGBA8, the configured color key is applied
    /// (cyan pixels become transparent by default), and the result is
    /// uploaded through the render context. The intermediate surface is
    /// dropped on every path.
    ///
    /// # Errors
    /// [`TextureError::Decode`], [`TextureError::ColorKey`], or
    /// [`TextureError::TextureCreation`]; on any of them the resource is
    /// left empty.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), TextureError> {
        self.free();

        let path = path.as_ref();

        let mut surface = Surface::from_file(path).map_err(|e| {
            log::error!("Unable to load image {:?}! {}", path, e);
            TextureError::Decode {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
        })?;

        if self.settings.color_key_enabled {
            surface.set_color_key(self.settings.color_key).map_err(|e| {
                log::error!("Unable to color key image {:?}! {}", path, e);
                TextureError::ColorKey {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                }
            })?;
        }

        self.upload(&surface, &path.display().to_string())
    }

    /// Load the texture from rasterized text, replacing any held handle
    ///
    /// # Errors
    /// [`TextureError::TextRender`] when the font fails, or
    /// [`TextureError::TextureCreation`] when the upload fails; on either
    /// the resource is left empty.
    pub fn load_from_rendered_text(
        &mut self,
        font: &dyn Font,
        text: &str,
        color: Color,
    ) -> Result<(), TextureError> {
        self.free();

        let surface = font.render_text(text, color).map_err(|e| {
            log::error!("Unable to render text surface! Font error: {}", e);
            TextureError::TextRender {
                reason: e.to_string(),
            }
        })?;

        self.upload(&surface, "rendered text")
    }

    /// Load the texture from an already-prepared surface
    ///
    /// Skips decoding and color keying; useful when the caller builds pixel
    /// data procedurally.
    ///
    /// # Errors
    /// [`TextureError::TextureCreation`] when the upload fails.
    pub fn load_from_surface(&mut self, surface: &Surface) -> Result<(), TextureError> {
        self.free();
        self.upload(surface, "surface")
    }

    /// Upload a surface and take ownership of the resulting handle.
    ///
    /// Callers must have freed the previous handle already.
    fn upload(&mut self, surface: &Surface, origin: &str) -> Result<(), TextureError> {
        let handle = self
            .context
            .borrow_mut()
            .create_texture_from_surface(surface)
            .map_err(|e| {
                log::error!("Unable to create texture from {}! Context error: {}", origin, e);
                TextureError::TextureCreation {
                    origin: origin.to_string(),
                    reason: e.to_string(),
                }
            })?;

        self.handle = Some(handle);
        self.width = surface.width;
        self.height = surface.height;

        if self.settings.default_blend_mode != BlendMode::None {
            self.context
                .borrow_mut()
                .set_blend_mode(handle, self.settings.default_blend_mode);
        }

        log::debug!(
            "Created {}x{} texture {:?} from {}",
            self.width,
            self.height,
            handle,
            origin
        );

        Ok(())
    }

    /// Release the held GPU texture, if any
    ///
    /// Idempotent; also runs on drop. After this call the resource is empty
    /// and `width()`/`height()` return 0.
    pub fn free(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.context.borrow_mut().destroy_texture(handle);
            self.width = 0;
            self.height = 0;
        }
    }

    /// Set the color modulation applied when this texture is drawn
    ///
    /// No-op when no texture is loaded.
    pub fn set_color(&mut self, r: u8, g: u8, b: u8) {
        match self.handle {
            Some(handle) => self.context.borrow_mut().set_color_mod(handle, r, g, b),
            None => log::debug!("set_color on an empty texture, ignoring"),
        }
    }

    /// Set the alpha modulation applied when this texture is drawn
    ///
    /// No-op when no texture is loaded.
    pub fn set_alpha(&mut self, alpha: u8) {
        match self.handle {
            Some(handle) => self.context.borrow_mut().set_alpha_mod(handle, alpha),
            None => log::debug!("set_alpha on an empty texture, ignoring"),
        }
    }

    /// Set the blend mode used when this texture is drawn
    ///
    /// No-op when no texture is loaded.
    pub fn set_blend_mode(&mut self, mode: BlendMode) {
        match self.handle {
            Some(handle) => self.context.borrow_mut().set_blend_mode(handle, mode),
            None => log::debug!("set_blend_mode on an empty texture, ignoring"),
        }
    }

    /// Draw the texture with its top-left corner at `(x, y)`
    pub fn render(&self, x: i32, y: i32) {
        self.render_with(x, y, DrawOptions::default());
    }

    /// Draw the texture at `(x, y)` with clip, rotation, pivot, and flip
    ///
    /// With a clip the destination takes the clip's size and only that
    /// sub-rectangle of the texture is sampled; otherwise the native size is
    /// drawn. Rendering an empty resource issues no draw call and logs a
    /// warning.
    pub fn render_with(&self, x: i32, y: i32, options: DrawOptions) {
        let Some(handle) = self.handle else {
            log::warn!("render on an empty texture, skipping draw");
            return;
        };

        let mut dst = Rect::new(x, y, self.width, self.height);
        if let Some(clip) = options.clip {
            dst.w = clip.w;
            dst.h = clip.h;
        }

        let pivot = options.center.unwrap_or_default();

        self.context
            .borrow_mut()
            .draw_texture(handle, options.clip, dst, options.angle, pivot, options.flip);
    }

    /// Width of the loaded texture in pixels, 0 when empty
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height of the loaded texture in pixels, 0 when empty
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Whether a texture is currently loaded
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.handle.is_some()
    }
}

impl<C: RenderContext> Drop for Texture<C> {
    fn drop(&mut self) {
        self.free();
    }
}
