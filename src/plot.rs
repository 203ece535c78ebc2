//! Maps a decoded waveform onto a fixed logical canvas as a list of line
//! segments and text labels.

use tracing::debug;

use crate::wav::Waveform;

pub const CANVAS_WIDTH: f32 = 800.0;
pub const CANVAS_HEIGHT: f32 = 400.0;
pub const VERTICAL_PADDING: f32 = 50.0;
pub const TEXT_PAD: f32 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255 };
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    pub const BLUE: Color = Color { r: 0, g: 0, b: 255 };
    pub const RED: Color = Color { r: 255, g: 0, b: 0 };
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Point {
        Point { x, y }
    }
}

/// Which point of the text's bounding box sits on `at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Center,
    West,
    NorthEast,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Line {
        from: Point,
        to: Point,
        color: Color,
    },
    Text {
        at: Point,
        anchor: Anchor,
        text: String,
        color: Color,
        /// Degrees, counter-clockwise.
        angle: f32,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Plot {
    pub width: f32,
    pub height: f32,
    pub background: Color,
    pub primitives: Vec<Primitive>,
}

impl Plot {
    pub fn lines(&self) -> impl Iterator<Item = &Primitive> {
        self.primitives.iter().filter(|p| matches!(p, Primitive::Line { .. }))
    }

    pub fn texts(&self) -> impl Iterator<Item = &Primitive> {
        self.primitives.iter().filter(|p| matches!(p, Primitive::Text { .. }))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub x_scale: f32,
    pub y_scale_left: f32,
    pub y_scale_right: f32,
}

impl Geometry {
    pub fn new(wave: &Waveform) -> Geometry {
        Geometry {
            x_scale: CANVAS_WIDTH / wave.num_frames.max(1) as f32,
            y_scale_left: y_scale(&wave.left),
            y_scale_right: y_scale(&wave.right),
        }
    }
}

/// Largest of the channel's maximum and its minimum's magnitude. Empty or
/// silent channels report 1 so the scale stays finite.
pub fn peak_magnitude(samples: &[f32]) -> f32 {
    let max = samples.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
    let min = samples.iter().cloned().fold(f32::INFINITY, f32::min);
    let peak = max.max(min.abs());
    if peak.is_finite() && peak > 0.0 {
        peak
    } else {
        1.0
    }
}

/// Puts a channel's peak one eighth of the canvas away from its baseline.
fn y_scale(samples: &[f32]) -> f32 {
    (CANVAS_HEIGHT / 8.0) / peak_magnitude(samples)
}

fn polyline(samples: &[f32], x_scale: f32, baseline: f32, y_scale: f32, color: Color, out: &mut Vec<Primitive>) {
    let point = |i: usize, samp: f32| Point::new(i as f32 * x_scale, baseline - samp * y_scale);
    out.extend(samples.windows(2).enumerate().map(|(i, pair)| Primitive::Line {
        from: point(i, pair[0]),
        to: point(i + 1, pair[1]),
        color,
    }));
}

fn text(at: Point, anchor: Anchor, text: String, color: Color) -> Primitive {
    Primitive::Text {
        at,
        anchor,
        text,
        color,
        angle: 0.0,
    }
}

pub fn plot(wave: &Waveform) -> Plot {
    let _g = hprof::enter("plot");

    let geom = Geometry::new(wave);
    debug!("plot geometry {:?}", geom);

    let adjusted = CANVAS_HEIGHT - 2.0 * VERTICAL_PADDING;
    let left_base = VERTICAL_PADDING + adjusted / 4.0;
    let right_base = VERTICAL_PADDING + 3.0 * adjusted / 4.0;

    let mut primitives = Vec::with_capacity(2 * wave.num_frames + 6);
    polyline(&wave.left, geom.x_scale, left_base, geom.y_scale_left, Color::BLUE, &mut primitives);
    polyline(&wave.right, geom.x_scale, right_base, geom.y_scale_right, Color::RED, &mut primitives);

    primitives.push(text(
        Point::new(TEXT_PAD, VERTICAL_PADDING / 2.0),
        Anchor::West,
        "Left Channel".into(),
        Color::BLUE,
    ));
    // Sits in the gap between the bands, clear of the amplitude label.
    primitives.push(text(
        Point::new(TEXT_PAD, VERTICAL_PADDING + adjusted / 2.0 + VERTICAL_PADDING / 2.0),
        Anchor::West,
        "Right Channel".into(),
        Color::RED,
    ));
    primitives.push(text(
        Point::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT - TEXT_PAD),
        Anchor::Center,
        "Time (samples)".into(),
        Color::BLACK,
    ));
    primitives.push(Primitive::Text {
        at: Point::new(TEXT_PAD / 2.0, CANVAS_HEIGHT / 2.0),
        anchor: Anchor::Center,
        text: "Amplitude".into(),
        color: Color::BLACK,
        angle: 90.0,
    });
    primitives.push(text(
        Point::new(CANVAS_WIDTH - TEXT_PAD, TEXT_PAD),
        Anchor::NorthEast,
        format!("Sample Rate: {} Hz", wave.frame_rate),
        Color::BLACK,
    ));
    primitives.push(text(
        Point::new(CANVAS_WIDTH - TEXT_PAD, TEXT_PAD * 2.0),
        Anchor::NorthEast,
        format!("Number of Samples: {}", wave.num_frames),
        Color::BLACK,
    ));

    Plot {
        width: CANVAS_WIDTH,
        height: CANVAS_HEIGHT,
        background: Color::WHITE,
        primitives,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wave(left: Vec<f32>, right: Vec<f32>) -> Waveform {
        let num_frames = left.len();
        Waveform {
            left,
            right,
            frame_rate: 44100,
            num_frames,
        }
    }

    fn lines_of(plot: &Plot, color: Color) -> Vec<(Point, Point)> {
        plot.primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Line { from, to, color: c } if *c == color => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }

    fn text_of<'p>(plot: &'p Plot, needle: &str) -> &'p Primitive {
        plot.texts()
            .find(|p| matches!(p, Primitive::Text { text, .. } if text.starts_with(needle)))
            .expect("label present")
    }

    #[test]
    fn geometry_scales_each_channel_to_its_own_peak() {
        let g = Geometry::new(&wave(vec![0.0, 0.5, -0.25, 0.1], vec![0.0, -0.625, 0.2, 0.0]));
        assert_eq!(g.x_scale, 200.0);
        assert_eq!(g.y_scale_left, 100.0);
        assert_eq!(g.y_scale_right, 80.0);
    }

    #[test]
    fn peak_uses_magnitude_of_minimum() {
        assert_eq!(peak_magnitude(&[-0.5, -0.2]), 0.5);
        assert_eq!(peak_magnitude(&[0.25, -0.1]), 0.25);
    }

    #[test]
    fn silent_and_empty_channels_fall_back_to_unit_peak() {
        assert_eq!(peak_magnitude(&[0.0, 0.0]), 1.0);
        assert_eq!(peak_magnitude(&[]), 1.0);

        let g = Geometry::new(&wave(vec![], vec![]));
        assert_eq!(g.x_scale, CANVAS_WIDTH);
        assert_eq!(g.y_scale_left, 50.0);
        assert!(g.y_scale_right.is_finite());
    }

    #[test]
    fn empty_waveform_has_labels_only() {
        let p = plot(&wave(vec![], vec![]));
        assert_eq!(p.lines().count(), 0);
        assert_eq!(p.texts().count(), 6);
    }

    #[test]
    fn silent_waveform_is_flat_on_baselines() {
        let p = plot(&wave(vec![0.0; 3], vec![0.0; 3]));
        for (from, to) in lines_of(&p, Color::BLUE) {
            assert_eq!(from.y, 125.0);
            assert_eq!(to.y, 125.0);
        }
        for (from, to) in lines_of(&p, Color::RED) {
            assert_eq!(from.y, 275.0);
            assert_eq!(to.y, 275.0);
        }
    }

    #[test]
    fn consecutive_samples_are_joined() {
        let p = plot(&wave(vec![0.0, 1.0, -1.0, 0.5], vec![0.5, 0.0, -0.5, 0.0]));
        let left = lines_of(&p, Color::BLUE);
        assert_eq!(left.len(), 3);
        assert_eq!(left[0], (Point::new(0.0, 125.0), Point::new(200.0, 75.0)));
        assert_eq!(left[1], (Point::new(200.0, 75.0), Point::new(400.0, 175.0)));
        assert_eq!(left[2], (Point::new(400.0, 175.0), Point::new(600.0, 100.0)));

        let right = lines_of(&p, Color::RED);
        assert_eq!(right.len(), 3);
        assert_eq!(right[0].0, Point::new(0.0, 225.0));
        assert_eq!(right[2].1, Point::new(600.0, 275.0));
    }

    #[test]
    fn channels_stay_in_their_own_band() {
        let left: Vec<f32> = (0..64).map(|i| ((i as f32) * 0.3).sin()).collect();
        let right: Vec<f32> = (0..64).map(|i| ((i as f32) * 0.7).cos() * 0.01).collect();
        let p = plot(&wave(left, right));
        for (from, to) in lines_of(&p, Color::BLUE) {
            assert!(from.y >= 75.0 - 1e-3 && from.y <= 175.0 + 1e-3);
            assert!(to.y >= 75.0 - 1e-3 && to.y <= 175.0 + 1e-3);
        }
        for (from, to) in lines_of(&p, Color::RED) {
            assert!(from.y >= 225.0 - 1e-3 && from.y <= 325.0 + 1e-3);
            assert!(to.y >= 225.0 - 1e-3 && to.y <= 325.0 + 1e-3);
        }
    }

    #[test]
    fn single_frame_draws_no_segments() {
        let p = plot(&wave(vec![0.3], vec![-0.3]));
        assert_eq!(p.lines().count(), 0);
    }

    #[test]
    fn labels_carry_metadata_and_positions() {
        let p = plot(&wave(vec![0.0; 10], vec![0.0; 10]));
        assert_eq!(p.background, Color::WHITE);
        assert_eq!((p.width, p.height), (800.0, 400.0));

        match text_of(&p, "Sample Rate") {
            Primitive::Text { text, at, anchor, .. } => {
                assert_eq!(text, "Sample Rate: 44100 Hz");
                assert_eq!(*at, Point::new(780.0, 20.0));
                assert_eq!(*anchor, Anchor::NorthEast);
            }
            _ => unreachable!(),
        }
        match text_of(&p, "Number of Samples") {
            Primitive::Text { text, at, .. } => {
                assert_eq!(text, "Number of Samples: 10");
                assert_eq!(*at, Point::new(780.0, 40.0));
            }
            _ => unreachable!(),
        }
        match text_of(&p, "Amplitude") {
            Primitive::Text { angle, at, .. } => {
                assert_eq!(*angle, 90.0);
                assert_eq!(*at, Point::new(10.0, 200.0));
            }
            _ => unreachable!(),
        }
        match text_of(&p, "Right Channel") {
            Primitive::Text { color, at, .. } => {
                assert_eq!(*color, Color::RED);
                assert_eq!(*at, Point::new(20.0, 225.0));
            }
            _ => unreachable!(),
        }
        match text_of(&p, "Left Channel") {
            Primitive::Text { color, .. } => assert_eq!(*color, Color::BLUE),
            _ => unreachable!(),
        }
        match text_of(&p, "Time") {
            Primitive::Text { at, .. } => assert_eq!(*at, Point::new(400.0, 380.0)),
            _ => unreachable!(),
        }
    }
}
