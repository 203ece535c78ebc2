//! Labels drawn with SDL2_gfx's built-in 8x8 bitmap font. Needs no font
//! file, so it is the default labeler.

use super::{anchored, sdl_color, Label, Labeler};

use sdl2::gfx::primitives::DrawRenderer;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::error::{Error, Result};

/// Cell size of the built-in font, in pixels.
pub const GLYPH: u32 = 8;

pub struct GfxLabeler;

/// Splits a label into `(x, y, run)` string draws. The bitmap font cannot
/// turn, so rotated labels are stacked one character per row.
fn layout(label: &Label) -> Vec<(i16, i16, String)> {
    let n = label.text.chars().count() as u32;
    if label.angle == 0.0 {
        let r = anchored(label.at, label.anchor, n * GLYPH, GLYPH);
        vec![(r.x() as i16, r.y() as i16, label.text.to_string())]
    } else {
        let r = anchored(label.at, label.anchor, GLYPH, n * GLYPH);
        label.text
            .chars()
            .enumerate()
            .map(|(i, c)| (r.x() as i16, (r.y() + (i as u32 * GLYPH) as i32) as i16, c.to_string()))
            .collect()
    }
}

impl Labeler<Canvas<Window>> for GfxLabeler {
    fn label(&mut self, canvas: &mut Canvas<Window>, label: &Label) -> Result<()> {
        let color = sdl_color(label.color);
        for (x, y, run) in layout(label) {
            canvas.string(x, y, &run, color).map_err(Error::Sdl)?;
        }
        Ok(())
    }
}
