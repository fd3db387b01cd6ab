use ab_glyph::{point, Font, FontVec, GlyphId, OutlinedGlyph, PxScale, Rect, ScaleFont};
use image::{Rgb, RgbImage};
use imageproc::pixelops::interpolate;

use crate::{pixel_index, TextBounds};

/// Lay out `text` on a single line with the top of the line box at y = 0.
fn layout(font: &FontVec, scale: PxScale, text: &str) -> Vec<OutlinedGlyph> {
    let scaled = font.as_scaled(scale);
    let mut caret = 0.0;
    let mut previous: Option<GlyphId> = None;
    let mut glyphs = Vec::with_capacity(text.len());

    for c in text.chars() {
        let id = scaled.glyph_id(c);
        if let Some(previous) = previous {
            caret += scaled.kern(previous, id);
        }
        let glyph = id.with_scale_and_position(scale, point(caret, scaled.ascent()));
        caret += scaled.h_advance(id);
        previous = Some(id);

        // whitespace has no outline
        if let Some(outlined) = font.outline_glyph(glyph) {
            glyphs.push(outlined);
        }
    }

    glyphs
}

/// `px_bounds` is already aligned to whole pixels.
#[allow(clippy::cast_possible_truncation)]
fn to_bounds(rect: Rect) -> TextBounds {
    TextBounds {
        left:   rect.min.x.floor() as i32,
        top:    rect.min.y.floor() as i32,
        right:  rect.max.x.ceil() as i32,
        bottom: rect.max.y.ceil() as i32,
    }
}

pub fn text_bounds(font: &FontVec, scale: PxScale, text: &str) -> TextBounds {
    layout(font, scale, text)
        .iter()
        .map(|glyph| to_bounds(glyph.px_bounds()))
        .reduce(TextBounds::union)
        .unwrap_or_default()
}

/// Coverage is blended over whatever is already on the canvas.
#[allow(clippy::cast_possible_wrap)]
pub fn draw_text(
    canvas: &mut RgbImage,
    color: Rgb<u8>,
    x: i32,
    y: i32,
    font: &FontVec,
    scale: PxScale,
    text: &str,
) {
    for glyph in layout(font, scale, text) {
        let bounds = to_bounds(glyph.px_bounds());
        glyph.draw(|gx, gy, coverage| {
            let Some((px, py)) =
                pixel_index(canvas, x + bounds.left + gx as i32, y + bounds.top + gy as i32)
            else {
                return;
            };
            let under = *canvas.get_pixel(px, py);
            canvas.put_pixel(px, py, interpolate(color, under, coverage.clamp(0.0, 1.0)));
        });
    }
}
