//! Labels rendered from a TrueType font given with `--font`.

use super::{anchored, sdl_color, Label, Labeler};

use sdl2::render::Canvas;
use sdl2::ttf::Font;
use sdl2::video::Window;

use crate::error::{Error, Result};

pub const POINT_SIZE: u16 = 14;

pub struct TtfLabeler<'ttf> {
    pub font: Font<'ttf, 'static>,
}

impl<'ttf> Labeler<Canvas<Window>> for TtfLabeler<'ttf> {
    fn label(&mut self, canvas: &mut Canvas<Window>, label: &Label) -> Result<()> {
        let surface = self.font
            .render(label.text)
            .blended(sdl_color(label.color))
            .map_err(|e| Error::Sdl(e.to_string()))?;
        let creator = canvas.texture_creator();
        let texture = creator
            .create_texture_from_surface(&surface)
            .map_err(|e| Error::Sdl(e.to_string()))?;

        // Rotation is about the box center and SDL turns clockwise.
        let dst = anchored(label.at, label.anchor, surface.width(), surface.height());
        canvas
            .copy_ex(&texture, None, Some(dst), -label.angle as f64, None, false, false)
            .map_err(Error::Sdl)
    }
}
