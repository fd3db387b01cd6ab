//! Square placeholder logos for the frontend: the label `CMPT 370` centered in
//! navy on a light blue canvas, written as PNG.

pub mod cli;

use std::{
    num::NonZeroU32,
    path::{Path, PathBuf},
};

use image::{ImageFormat, Rgb, RgbImage};
use label_font::{LabelFont, TextBounds};
use serde::{Deserialize, Serialize};

/// Text rendered on every icon.
pub const LABEL: &str = "CMPT 370";
/// CSS `lightblue`.
pub const BACKGROUND: Rgb<u8> = Rgb([173, 216, 230]);
/// CSS `navy`.
pub const TEXT_COLOR: Rgb<u8> = Rgb([0, 0, 128]);
/// Scalable font looked up before falling back to the built-in bitmap font.
pub const FONT_NAME: &str = "arial.ttf";
/// Where the frontend serves its static assets from.
pub const PUBLIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../frontend/public");

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("failed to write icon to {}: {source}", .path.display())]
    Write {
        path:   PathBuf,
        source: image::ImageError,
    },
}

/// A single icon to generate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct IconSpec {
    /// Width and height of the square canvas in pixels.
    pub size:        NonZeroU32,
    pub destination: PathBuf,
}

impl IconSpec {
    pub fn new(size: NonZeroU32, destination: impl Into<PathBuf>) -> Self {
        Self {
            size,
            destination: destination.into(),
        }
    }

    /// Render and write this icon, see [`generate_icon`].
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Write`] if the PNG cannot be written.
    pub fn generate(&self) -> Result<(), GenerateError> {
        generate_icon(self.size, &self.destination)
    }
}

/// The icons generated by the binary, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconSet {
    #[serde(rename = "icon")]
    pub icons: Vec<IconSpec>,
}

impl Default for IconSet {
    fn default() -> Self {
        Self {
            icons: default_icons().to_vec(),
        }
    }
}

const fn px(size: u32) -> NonZeroU32 {
    match NonZeroU32::new(size) {
        Some(size) => size,
        None => panic!("icon size must be non-zero"),
    }
}

/// Sizes and file names of the logos under [`PUBLIC_DIR`].
pub const LOGOS: [(NonZeroU32, &str); 2] = [(px(192), "logo192.png"), (px(512), "logo512.png")];

/// The 192x192 and 512x512 logos under [`PUBLIC_DIR`].
pub fn default_icons() -> [IconSpec; 2] {
    let public = Path::new(PUBLIC_DIR);
    LOGOS.map(|(size, file_name)| IconSpec::new(size, public.join(file_name)))
}

/// Top left corner of a `bounds` sized ink box centered on a `size` square
/// canvas. Odd leftover space is split with floor division, so the extra
/// pixel goes to the right and bottom.
pub fn centered_origin(size: u32, bounds: TextBounds) -> (i32, i32) {
    let size = i32::try_from(size).unwrap_or(i32::MAX);
    (
        (size - bounds.width()).div_euclid(2),
        (size - bounds.height()).div_euclid(2),
    )
}

/// Draw an icon of `size` with the label set in `font`.
pub fn render_icon(size: NonZeroU32, font: &LabelFont) -> RgbImage {
    let size = size.get();
    let mut canvas = RgbImage::from_pixel(size, size, BACKGROUND);

    let bounds = font.text_bounds(LABEL);
    let (x, y) = centered_origin(size, bounds);
    tracing::debug!(size, ?font, ?bounds, x, y, "placing label");

    // shift the layout origin so the ink, not the line box, lands on (x, y)
    font.draw_text(&mut canvas, TEXT_COLOR, x - bounds.left, y - bounds.top, LABEL);

    canvas
}

/// Render an icon of `size` with `font` and write it to `destination` as
/// PNG, replacing any existing file.
///
/// # Errors
///
/// Returns [`GenerateError::Write`] if the file cannot be created or encoded,
/// e.g. because the parent directory does not exist.
pub fn write_icon(
    size: NonZeroU32,
    destination: impl AsRef<Path>,
    font: &LabelFont,
) -> Result<(), GenerateError> {
    let destination = destination.as_ref();
    render_icon(size, font)
        .save_with_format(destination, ImageFormat::Png)
        .map_err(|source| GenerateError::Write {
            path: destination.to_path_buf(),
            source,
        })?;

    tracing::info!(size = size.get(), path = %destination.display(), "wrote icon");
    Ok(())
}

/// Generate one icon: [`FONT_NAME`] at a pixel size of `size / 6`, or the
/// built-in font if it cannot be loaded.
///
/// # Errors
///
/// Returns [`GenerateError::Write`] if the PNG cannot be written.
pub fn generate_icon(size: NonZeroU32, destination: impl AsRef<Path>) -> Result<(), GenerateError> {
    let font = LabelFont::load_or_fallback(FONT_NAME, size.get() / 6);
    write_icon(size, destination, &font)
}

/// Generate `icons` one after the other.
///
/// # Errors
///
/// Stops at, and returns, the first failure. Later icons are not attempted.
pub fn generate_all(icons: &[IconSpec]) -> Result<(), GenerateError> {
    icons.iter().try_for_each(IconSpec::generate)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn bounds(width: i32, height: i32) -> TextBounds {
        TextBounds {
            left:   0,
            top:    0,
            right:  width,
            bottom: height,
        }
    }

    #[test]
    fn origin_centers_even_leftover() {
        assert_eq!(centered_origin(192, bounds(60, 8)), (66, 92));
    }

    #[test]
    fn origin_floors_odd_leftover() {
        assert_eq!(centered_origin(192, bounds(61, 7)), (65, 92));
        assert_eq!(centered_origin(5, bounds(2, 2)), (1, 1));
    }

    #[test]
    fn origin_of_text_wider_than_canvas_is_negative() {
        assert_eq!(centered_origin(10, bounds(14, 4)), (-2, 3));
        assert_eq!(centered_origin(10, bounds(15, 4)), (-3, 3));
    }

    #[test]
    fn default_icons_are_the_two_logos() {
        let [small, large] = default_icons();
        assert_eq!(small.size.get(), 192);
        assert_eq!(large.size.get(), 512);
        assert_eq!(small.destination.file_name().unwrap(), "logo192.png");
        assert_eq!(large.destination.file_name().unwrap(), "logo512.png");
        assert!(small.destination.is_absolute());
        assert!(large.destination.is_absolute());
        assert!(small.destination.ends_with("frontend/public/logo192.png"));
    }

    #[test]
    fn icon_set_dumps_as_toml() {
        let toml = toml::to_string_pretty(&IconSet::default()).unwrap();
        assert_eq!(toml.matches("[[icon]]").count(), 2);
        assert!(toml.contains("size = 192"));
        assert!(toml.contains("size = 512"));
        assert!(toml.contains("logo512.png"));
    }

    #[test]
    fn rendered_icon_is_square() {
        for size in [1, 6, 7, 192, 513] {
            let size = NonZeroU32::new(size).unwrap();
            let icon = render_icon(size, &LabelFont::Fallback);
            assert_eq!(icon.dimensions(), (size.get(), size.get()));
        }
    }

    #[test]
    fn rendering_is_deterministic() {
        let size = NonZeroU32::new(192).unwrap();
        let font = LabelFont::load_or_fallback(FONT_NAME, 32);
        assert_eq!(
            render_icon(size, &font).into_raw(),
            render_icon(size, &font).into_raw()
        );
    }

    #[test]
    fn label_ink_is_centered() {
        for size in [192, 512] {
            let icon = render_icon(NonZeroU32::new(size).unwrap(), &LabelFont::Fallback);

            let ink: Vec<(u32, u32)> = icon
                .enumerate_pixels()
                .filter(|(_, _, pixel)| **pixel != BACKGROUND)
                .map(|(x, y, _)| (x, y))
                .collect();
            assert!(!ink.is_empty());

            let min_x = ink.iter().map(|p| p.0).min().unwrap();
            let max_x = ink.iter().map(|p| p.0).max().unwrap();
            let min_y = ink.iter().map(|p| p.1).min().unwrap();
            let max_y = ink.iter().map(|p| p.1).max().unwrap();

            let center = (f64::from(size) - 1.0) / 2.0;
            let ink_x = f64::from(min_x + max_x) / 2.0;
            let ink_y = f64::from(min_y + max_y) / 2.0;
            assert!((ink_x - center).abs() <= 1.0, "x {ink_x} vs {center}");
            assert!((ink_y - center).abs() <= 1.0, "y {ink_y} vs {center}");
        }
    }

    #[test]
    fn label_is_drawn_in_text_color() {
        let icon = render_icon(NonZeroU32::new(192).unwrap(), &LabelFont::Fallback);
        assert!(icon.pixels().any(|pixel| *pixel == TEXT_COLOR));
        assert!(icon
            .pixels()
            .all(|pixel| *pixel == TEXT_COLOR || *pixel == BACKGROUND));
    }
}
