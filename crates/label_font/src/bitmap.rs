//! The built-in fallback font: fixed size 8x8 glyphs from `font8x8`.
//! Every character advances by one cell, characters without a glyph render
//! as blank cells.

use font8x8::{UnicodeFonts, BASIC_FONTS};
use image::{Rgb, RgbImage};

use crate::{pixel_index, TextBounds};

/// Width and height of a glyph cell in pixels.
pub const CELL: i32 = 8;

/// Positions of every set bit of `text`, relative to the layout origin.
fn ink(text: &str) -> impl Iterator<Item = (i32, i32)> + '_ {
    text.chars()
        .zip((0..).step_by(CELL as usize))
        .flat_map(|(c, advance)| {
            let rows = BASIC_FONTS.get(c).unwrap_or_default();
            (0..CELL).flat_map(move |row| {
                // bit 0 is the leftmost pixel of a row
                (0..CELL)
                    .filter(move |&col| rows[row as usize] & (1 << col) != 0)
                    .map(move |col| (advance + col, row))
            })
        })
}

pub fn text_bounds(text: &str) -> TextBounds {
    ink(text)
        .map(|(x, y)| TextBounds {
            left:   x,
            top:    y,
            right:  x + 1,
            bottom: y + 1,
        })
        .reduce(TextBounds::union)
        .unwrap_or_default()
}

pub fn draw_text(canvas: &mut RgbImage, color: Rgb<u8>, x: i32, y: i32, text: &str) {
    for (dx, dy) in ink(text) {
        if let Some((px, py)) = pixel_index(canvas, x + dx, y + dy) {
            canvas.put_pixel(px, py, color);
        }
    }
}
