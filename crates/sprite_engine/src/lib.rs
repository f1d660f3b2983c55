//! # Sprite Engine
//!
//! 2D texture resource management with pluggable render backends.
//!
//! The central type is [`render::Texture`], an owning wrapper around a single
//! GPU texture handle. It loads pixel data from image files or rasterized
//! text, applies color/alpha/blend modulation, and issues draw calls through
//! a [`render::RenderContext`] supplied by the surrounding application. The
//! handle is released deterministically: on `free()`, on reload, and on drop.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use sprite_engine::prelude::*;
//!
//! fn run(context: Rc<RefCell<impl RenderContext>>) -> Result<(), TextureError> {
//!     let mut sprite = Texture::new(Rc::clone(&context));
//!     sprite.load_from_file("assets/player.png")?;
//!     sprite.set_alpha(192);
//!     sprite.render(64, 48);
//!     Ok(())
//! }
//! ```
//!
//! Window creation, the event loop, and font loading belong to the
//! application; this crate only consumes the [`render::RenderContext`] and
//! [`render::Font`] collaborator traits they implement.

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod assets;
pub mod config;
pub mod foundation;
pub mod render;

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        assets::{AssetError, Surface},
        config::{Config, ConfigError, TextureSettings},
        render::{
            BlendMode, Color, ContextError, DrawOptions, Flip, Font, Point, Rect,
            RenderContext, Texture, TextureError, TextureHandle,
        },
    };
}
