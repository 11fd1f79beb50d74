//! Turns a set of [`NetworkParameters`] into a plotted graph.
//!
//! A render is a pure function of the parameters: fill the canvas, draw the
//! axes with their ticks, then draw the sampled curve on top. Nothing is
//! cached between calls.

use egui::{Color32, ColorImage};
use tracing::{debug, warn};

use crate::canvas::Canvas;
use crate::coords::{CANVAS_SIZE, PixelPoint, to_pixel};
use crate::formula::formula;
use crate::model::NetworkParameters;

/// Number of curve samples over [-1, 1).
pub const SAMPLE_COUNT: usize = 200;

/// Distance between consecutive sample x values.
pub const SAMPLE_STEP: f32 = 0.01;

/// Ticks per half axis; ticks sit at every `1 / TICKS_PER_UNIT`.
const TICKS_PER_UNIT: i32 = 10;

/// One point of the function graph in math space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePoint {
    pub x: f32,
    pub y: f32,
}

/// Colors and tick geometry of the rendered graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphStyle {
    pub background: Color32,
    pub axis: Color32,
    pub curve: Color32,
    /// Pixels a tick extends to each side of its axis.
    pub tick_half_length: i32,
}

impl Default for GraphStyle {
    fn default() -> Self {
        Self {
            background: Color32::from_rgba_unmultiplied(0, 0, 0, 200),
            axis: Color32::from_rgba_unmultiplied(255, 255, 255, 10),
            curve: Color32::from_rgba_unmultiplied(0, 255, 0, 200),
            tick_half_length: 3,
        }
    }
}

/// A rendered graph and the formula it plots. The caller owns both.
#[derive(Clone)]
pub struct Plot {
    pub image: ColorImage,
    pub formula: String,
}

/// Samples the network output at `x = -1 + i * 0.01` for `i` in `0..200`.
///
/// x is computed from the index rather than accumulated, so the last sample
/// stays below 1.
pub fn sample_curve(params: &NetworkParameters) -> Vec<SamplePoint> {
    (0..SAMPLE_COUNT)
        .map(|i| {
            let x = -1.0 + i as f32 * SAMPLE_STEP;
            SamplePoint { x, y: params.evaluate(x) }
        })
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct CurveRenderer {
    style: GraphStyle,
}

impl CurveRenderer {
    pub fn new(style: GraphStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &GraphStyle {
        &self.style
    }

    pub fn render(&self, params: NetworkParameters) -> Plot {
        if !params.is_finite() {
            warn!(?params, "non-finite network parameters, curve will be incomplete");
        }

        let mut canvas = Canvas::new(self.style.background);
        self.draw_axes(&mut canvas);
        let samples = sample_curve(&params);
        let drawn = self.draw_curve(&mut canvas, &samples);
        debug!(samples = samples.len(), drawn, "rendered network curve");

        let image = canvas.into_image().unwrap_or_else(|err| {
            warn!(%err, "rasterizing the graph failed, showing a blank canvas");
            ColorImage::new([CANVAS_SIZE, CANVAS_SIZE], self.style.background)
        });
        Plot {
            image,
            formula: formula(&params),
        }
    }

    /// Cross through the origin plus a tick at every tenth of a unit on both axes.
    fn draw_axes(&self, canvas: &mut Canvas) {
        let color = self.style.axis;
        let half = self.style.tick_half_length;
        let centre = to_pixel(0.0, 0.0);
        let top_left = to_pixel(-1.0, 1.0);
        let bottom_right = to_pixel(1.0, -1.0);

        canvas.draw_line(
            PixelPoint::new(top_left.x, centre.y),
            PixelPoint::new(bottom_right.x, centre.y),
            color,
        );

        // Integer steps scaled down, so the outermost ticks land on the axis ends.
        for step in -TICKS_PER_UNIT..=TICKS_PER_UNIT {
            let unit = step as f32 / TICKS_PER_UNIT as f32;

            let on_x = to_pixel(unit, 0.0);
            canvas.draw_line(on_x.offset(0, -half), on_x.offset(0, half), color);

            let on_y = to_pixel(0.0, unit);
            canvas.draw_line(on_y.offset(-half, 0), on_y.offset(half, 0), color);
        }

        canvas.draw_line(
            PixelPoint::new(centre.x, top_left.y),
            PixelPoint::new(centre.x, bottom_right.y),
            color,
        );
    }

    /// Draws the samples as one polyline, broken only at non-finite samples.
    /// Returns the number of samples plotted.
    fn draw_curve(&self, canvas: &mut Canvas, samples: &[SamplePoint]) -> usize {
        let mut drawn = 0;
        for run in samples.split(|s| !s.y.is_finite()) {
            let points: Vec<PixelPoint> = run.iter().map(|s| to_pixel(s.x, s.y)).collect();
            canvas.draw_polyline(&points, self.style.curve);
            drawn += points.len();
        }
        drawn
    }
}

/// Renders with the default style.
pub fn render(params: NetworkParameters) -> Plot {
    CurveRenderer::default().render(params)
}
