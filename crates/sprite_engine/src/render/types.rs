//! Shared value types for the rendering interface
//!
//! Plain-data colors, points, and rectangles exchanged between the texture
//! resource and its render context, plus the blend and flip modes a context
//! must understand.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// An RGBA color with 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel (255 = opaque)
    pub a: u8,
}

impl Color {
    /// Create an opaque color from RGB channels
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color from RGBA channels
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// An integer point in screen space
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Point {
    /// Horizontal coordinate
    pub x: i32,
    /// Vertical coordinate
    pub y: i32,
}

impl Point {
    /// Create a point
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in pixel coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Width in pixels
    pub w: u32,
    /// Height in pixels
    pub h: u32,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size
    #[must_use]
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }
}

/// How texture pixels combine with the pixels already in the target
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlendMode {
    /// Overwrite destination pixels
    #[default]
    None,
    /// Alpha blending
    Blend,
    /// Additive blending
    Add,
    /// Color modulation
    Modulate,
}

bitflags! {
    /// Mirroring applied to a texture during a draw call
    ///
    /// Horizontal and vertical flips combine.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct Flip: u32 {
        /// Mirror across the vertical axis
        const HORIZONTAL = 1 << 0;
        /// Mirror across the horizontal axis
        const VERTICAL = 1 << 1;
    }
}
