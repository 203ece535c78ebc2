//! Application context: owns the run configuration and walks one file from
//! selection to the closed plot window. SDL is only brought up once there is
//! a plot to show.

use std::path::{Path, PathBuf};

use sdl2::event::{Event, WindowEvent};
use sdl2::messagebox::{show_simple_message_box, MessageBoxFlag};
use sdl2::render::Canvas;
use sdl2::video::Window;
use sdl2::{Sdl, VideoSubsystem};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::plot::{self, Plot};
use crate::view::gfx::GfxLabeler;
use crate::view::wave::WaveView;
use crate::view::{Labeler, View};
use crate::wav;

pub const TITLE: &str = "Waveform Plot";

pub struct App {
    config: Config,
}

struct Screen {
    sdl: Sdl,
    video: VideoSubsystem,
}

/// Resolves the file to plot: `input` if given, else whatever `pick`
/// returns. Only `*.wav` names are accepted.
pub fn select_wav<F>(input: Option<&Path>, pick: F) -> Result<PathBuf>
where
    F: FnOnce() -> Option<PathBuf>,
{
    let path = match input {
        Some(p) => p.to_path_buf(),
        None => pick().ok_or(Error::NoFileSelected)?,
    };
    let is_wav = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| ext.eq_ignore_ascii_case("wav"));
    if !is_wav {
        warn!("{} is not a .wav file", path.display());
        return Err(Error::NoFileSelected);
    }
    Ok(path)
}

#[cfg(feature = "dialog")]
fn pick_wav() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Select a .wav file")
        .add_filter("WAV files", &["wav"])
        .pick_file()
}

#[cfg(not(feature = "dialog"))]
fn pick_wav() -> Option<PathBuf> {
    None
}

/// Shows a terminal error to the user. Falls back to the log if no dialog
/// can be opened.
pub fn report(err: &Error) {
    tracing::error!("{}", err);
    if let Err(e) = show_simple_message_box(MessageBoxFlag::ERROR, TITLE, &err.to_string(), None) {
        debug!("message box unavailable: {:?}", e);
    }
}

impl App {
    pub fn new(config: Config) -> App {
        App { config }
    }

    pub fn run(&self) -> Result<()> {
        let path = select_wav(self.config.input.as_deref(), pick_wav)?;
        let wave = wav::decode(&path)?;
        info!(
            "{}: {} frames at {} Hz",
            path.display(),
            wave.num_frames,
            wave.frame_rate
        );
        let plot = plot::plot(&wave);
        self.show(&self.open()?, &plot)
    }

    fn open(&self) -> Result<Screen> {
        let sdl = sdl2::init().map_err(Error::Sdl)?;
        let video = sdl.video().map_err(Error::Sdl)?;
        Ok(Screen { sdl, video })
    }

    fn canvas(&self, screen: &Screen, plot: &Plot) -> Result<Canvas<Window>> {
        let win = screen.video
            .window(TITLE, self.config.width, self.config.height)
            .position_centered()
            .resizable()
            .build()
            .map_err(|e| Error::Sdl(e.to_string()))?;
        let mut can = win.into_canvas().build().map_err(|e| Error::Sdl(e.to_string()))?;
        can.set_logical_size(plot.width as u32, plot.height as u32)
            .map_err(|e| Error::Sdl(e.to_string()))?;
        Ok(can)
    }

    /// Labels use `--font` when built with ttf, the built-in bitmap font
    /// otherwise.
    fn show(&self, screen: &Screen, plot: &Plot) -> Result<()> {
        #[cfg(feature = "ttf")]
        {
            use crate::view::label::{TtfLabeler, POINT_SIZE};

            if let Some(font_path) = &self.config.font {
                let ttf = sdl2::ttf::init().map_err(|e| Error::Sdl(e.to_string()))?;
                let font = ttf.load_font(font_path, POINT_SIZE).map_err(Error::Sdl)?;
                return self.event_loop(screen, plot, TtfLabeler { font });
            }
        }
        #[cfg(not(feature = "ttf"))]
        {
            if self.config.font.is_some() {
                warn!("built without the ttf feature, ignoring --font");
            }
        }
        self.event_loop(screen, plot, GfxLabeler)
    }

    /// Draws once, then redraws on expose/resize until the window closes.
    fn event_loop<L: Labeler<Canvas<Window>>>(&self, screen: &Screen, plot: &Plot, labeler: L) -> Result<()> {
        let mut view = WaveView {
            view: self.canvas(screen, plot)?,
            labeler,
        };
        let mut eloop = screen.sdl.event_pump().map_err(Error::Sdl)?;

        view.render(plot)?;
        loop {
            match eloop.wait_event() {
                Event::Quit { .. } => break,
                Event::Window {
                    win_event: WindowEvent::Exposed | WindowEvent::SizeChanged(..),
                    ..
                } => view.render(plot)?,
                _ => (),
            }
        }
        debug!("window closed");
        Ok(())
    }
}
