//! Fonts for rendering short labels onto RGB canvases.
//!
//! A [`LabelFont`] is either a scalable outline font resolved from the
//! filesystem by name, or the built-in 8x8 bitmap font which is always
//! available. Both can measure the ink extents of a string with
//! [`LabelFont::text_bounds`] and draw it with [`LabelFont::draw_text`].

mod bitmap;
pub mod lookup;
mod outline;

use std::path::PathBuf;

use ab_glyph::{FontVec, PxScale};
use image::{Rgb, RgbImage};

pub use lookup::find_font_file;

/// Errors that can occur while loading a scalable font.
#[derive(Debug, thiserror::Error)]
pub enum FontError {
    #[error("font {0:?} was not found in the working directory or any system font directory")]
    NotFound(String),
    #[error("failed to read font file {}: {source}", .path.display())]
    Io {
        path:   PathBuf,
        source: std::io::Error,
    },
    #[error("invalid font data: {0}")]
    Invalid(#[from] ab_glyph::InvalidFont),
    #[error("font pixel size must be greater than zero")]
    ZeroSize,
}

/// Pixel extents of the ink of a rendered string, relative to the layout
/// origin. The origin is the top left corner of the line box, so `top` is
/// usually positive for outline fonts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextBounds {
    pub left:   i32,
    pub top:    i32,
    pub right:  i32,
    pub bottom: i32,
}

impl TextBounds {
    /// Width of the ink, `right - left`.
    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    /// Height of the ink, `bottom - top`.
    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// True if no pixel is covered.
    pub const fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Smallest box containing both `self` and `other`.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            left:   self.left.min(other.left),
            top:    self.top.min(other.top),
            right:  self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }
}

/// The font used to render a label.
pub enum LabelFont {
    /// An outline font rendered at a pixel height of `scale`.
    Scalable { font: FontVec, scale: PxScale },
    /// The embedded fixed size 8x8 bitmap font.
    Fallback,
}

impl std::fmt::Debug for LabelFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scalable { scale, .. } => f
                .debug_struct("Scalable")
                .field("px", &scale.y)
                .finish_non_exhaustive(),
            Self::Fallback => f.write_str("Fallback"),
        }
    }
}

impl LabelFont {
    /// Resolve the font file `name` with [`find_font_file`] and load it at a
    /// pixel height of `px`.
    ///
    /// # Errors
    ///
    /// Returns a [`FontError`] if `px` is zero, the font cannot be found or
    /// read, or the file is not a parsable font.
    pub fn load(name: &str, px: u32) -> Result<Self, FontError> {
        if px == 0 {
            return Err(FontError::ZeroSize);
        }
        let path = find_font_file(name).ok_or_else(|| FontError::NotFound(name.to_owned()))?;
        let bytes = std::fs::read(&path).map_err(|source| FontError::Io {
            path: path.clone(),
            source,
        })?;
        let font = Self::from_bytes(bytes, px)?;
        tracing::debug!(path = %path.display(), px, "loaded scalable font");
        Ok(font)
    }

    /// Like [`LabelFont::load`], but any failure silently selects
    /// [`LabelFont::Fallback`].
    pub fn load_or_fallback(name: &str, px: u32) -> Self {
        Self::load(name, px).unwrap_or(Self::Fallback)
    }

    /// Parse in-memory TrueType/OpenType data at a pixel height of `px`.
    ///
    /// # Errors
    ///
    /// Returns [`FontError::ZeroSize`] if `px` is zero and
    /// [`FontError::Invalid`] if `bytes` is not a font.
    #[allow(clippy::cast_precision_loss)]
    pub fn from_bytes(bytes: Vec<u8>, px: u32) -> Result<Self, FontError> {
        if px == 0 {
            return Err(FontError::ZeroSize);
        }
        let font = FontVec::try_from_vec(bytes)?;
        Ok(Self::Scalable {
            font,
            scale: PxScale::from(px as f32),
        })
    }

    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback)
    }

    /// Ink extents of `text` laid out at the origin. Text without any ink,
    /// such as an empty string, gives an empty box at the origin.
    pub fn text_bounds(&self, text: &str) -> TextBounds {
        match self {
            Self::Scalable { font, scale } => outline::text_bounds(font, *scale, text),
            Self::Fallback => bitmap::text_bounds(text),
        }
    }

    /// Draw `text` with its layout origin at `(x, y)`. Pixels falling outside
    /// the canvas are clipped.
    pub fn draw_text(&self, canvas: &mut RgbImage, color: Rgb<u8>, x: i32, y: i32, text: &str) {
        match self {
            Self::Scalable { font, scale } => {
                outline::draw_text(canvas, color, x, y, font, *scale, text);
            }
            Self::Fallback => bitmap::draw_text(canvas, color, x, y, text),
        }
    }
}

/// Convert signed canvas coordinates into pixel indices, or `None` if the
/// point lies outside the canvas.
fn pixel_index(canvas: &RgbImage, x: i32, y: i32) -> Option<(u32, u32)> {
    let x = u32::try_from(x).ok()?;
    let y = u32::try_from(y).ok()?;
    (x < canvas.width() && y < canvas.height()).then_some((x, y))
}
