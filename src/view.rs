pub mod gfx;
pub mod wave;
#[cfg(feature = "ttf")]
pub mod label;

use sdl2::pixels;
use sdl2::rect::Rect;

use crate::error::Result;
use crate::plot::{Anchor, Color, Plot, Point, Primitive};

pub trait View {
    fn render(&mut self, plot: &Plot) -> Result<()>;
}

/// One text primitive of a plot, borrowed for drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Label<'p> {
    pub at: Point,
    pub anchor: Anchor,
    pub text: &'p str,
    pub color: Color,
    /// Degrees, counter-clockwise.
    pub angle: f32,
}

/// Draws the text primitives of a plot onto a `C`. Lines are the view's own
/// business.
pub trait Labeler<C> {
    fn label(&mut self, canvas: &mut C, label: &Label) -> Result<()>;
}

/// Hands every text primitive of `plot` to `labeler`, in plot order.
pub fn draw_labels<C, L: Labeler<C>>(canvas: &mut C, labeler: &mut L, plot: &Plot) -> Result<()> {
    for prim in plot.texts() {
        if let Primitive::Text { at, anchor, text, color, angle } = prim {
            labeler.label(canvas, &Label {
                at: *at,
                anchor: *anchor,
                text: text.as_str(),
                color: *color,
                angle: *angle,
            })?;
        }
    }
    Ok(())
}

fn sdl_color(c: Color) -> pixels::Color {
    pixels::Color::RGB(c.r, c.g, c.b)
}

fn pixel(p: Point) -> sdl2::rect::Point {
    sdl2::rect::Point::new(p.x.round() as i32, p.y.round() as i32)
}

/// Places a `width` x `height` box so that its `anchor` lands on `at`.
fn anchored(at: Point, anchor: Anchor, width: u32, height: u32) -> Rect {
    let at = pixel(at);
    let (w, h) = (width as i32, height as i32);
    let (x, y) = match anchor {
        Anchor::Center => (at.x() - w / 2, at.y() - h / 2),
        Anchor::West => (at.x(), at.y() - h / 2),
        Anchor::NorthEast => (at.x() - w, at.y()),
    };
    Rect::new(x, y, width, height)
}
