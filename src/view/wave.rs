use super::{draw_labels, pixel, sdl_color, Labeler, View};

use sdl2::rect::Point as Pixel;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::error::{Error, Result};
use crate::plot::{Color, Plot, Primitive};

pub struct WaveView<L> {
    pub view: Canvas<Window>,
    pub labeler: L,
}

/// Groups line primitives into runs where each segment starts at the
/// previous one's end, so a channel goes out as one `draw_lines` call.
fn polylines(plot: &Plot) -> Vec<(Color, Vec<Pixel>)> {
    let mut runs: Vec<(Color, Vec<Pixel>)> = Vec::new();
    let mut last_end = None;
    for prim in plot.lines() {
        if let Primitive::Line { from, to, color } = prim {
            let (from, to) = (pixel(*from), pixel(*to));
            let joined = last_end == Some(from) && matches!(runs.last(), Some((c, _)) if c == color);
            match runs.last_mut() {
                Some((_, pts)) if joined => pts.push(to),
                _ => runs.push((*color, vec![from, to])),
            }
            last_end = Some(to);
        }
    }
    runs
}

impl<L: Labeler<Canvas<Window>>> View for WaveView<L> {
    fn render(&mut self, plot: &Plot) -> Result<()> {
        let _g = hprof::enter("WaveView::render");
        self.view.set_draw_color(sdl_color(plot.background));
        self.view.clear();

        for (color, pts) in polylines(plot) {
            self.view.set_draw_color(sdl_color(color));
            self.view.draw_lines(&pts[..]).map_err(Error::Sdl)?;
        }

        draw_labels(&mut self.view, &mut self.labeler, plot)?;

        self.view.present();
        Ok(())
    }
}
