use egui::{Color32, ColorImage};
use plotters::prelude::*;

use crate::coords::{CANVAS_SIZE, PixelPoint};
use crate::error::{Result, VisualizerError};

/// One 1px stroke through consecutive pixel positions.
struct Stroke {
    points: Vec<(i32, i32)>,
    color: Color32,
}

/// Square RGBA raster the graph is drawn into.
///
/// Strokes are recorded in order and rasterized by plotters on
/// [`Canvas::into_image`]. The bitmap backend only has RGB, so the scene is
/// painted twice: once in color over the premultiplied background, once in
/// white over the background alpha. Blending the same strokes in both passes
/// yields premultiplied source-over for every channel.
pub struct Canvas {
    background: Color32,
    strokes: Vec<Stroke>,
}

impl Canvas {
    /// A canvas cleared to `background`. The clear replaces pixels, it does not blend.
    pub fn new(background: Color32) -> Self {
        Self {
            background,
            strokes: Vec::new(),
        }
    }

    pub fn draw_line(&mut self, from: PixelPoint, to: PixelPoint, color: Color32) {
        self.draw_polyline(&[from, to], color);
    }

    /// Connected path through `points`. Fewer than two points draw nothing.
    pub fn draw_polyline(&mut self, points: &[PixelPoint], color: Color32) {
        if points.len() < 2 {
            return;
        }
        self.strokes.push(Stroke {
            points: points.iter().map(|p| (p.x, p.y)).collect(),
            color,
        });
    }

    pub fn into_image(self) -> Result<ColorImage> {
        let len = CANVAS_SIZE * CANVAS_SIZE * 3;
        let [r, g, b, a] = self.background.to_array();

        let mut color = vec![0u8; len];
        self.paint(&mut color, RGBColor(r, g, b), unmultiplied)?;

        let mut alpha = vec![0u8; len];
        self.paint(&mut alpha, RGBColor(a, a, a), |c| {
            RGBAColor(255, 255, 255, f64::from(c.a()) / 255.0)
        })?;

        let rgba: Vec<u8> = color
            .chunks_exact(3)
            .zip(alpha.chunks_exact(3))
            .flat_map(|(c, coverage)| {
                let a = coverage[0];
                [c[0].min(a), c[1].min(a), c[2].min(a), a]
            })
            .collect();
        Ok(ColorImage::from_rgba_premultiplied([CANVAS_SIZE, CANVAS_SIZE], &rgba))
    }

    fn paint(
        &self,
        buffer: &mut [u8],
        background: RGBColor,
        ink: impl Fn(Color32) -> RGBAColor,
    ) -> Result<()> {
        let side = CANVAS_SIZE as u32;
        let root = BitMapBackend::with_buffer(buffer, (side, side)).into_drawing_area();
        root.fill(&background).map_err(draw_error)?;
        for stroke in &self.strokes {
            root.draw(&PathElement::new(
                stroke.points.clone(),
                ink(stroke.color).stroke_width(1),
            ))
            .map_err(draw_error)?;
        }
        root.present().map_err(draw_error)?;
        Ok(())
    }
}

/// Straight-alpha form of a premultiplied color, as plotters expects.
fn unmultiplied(color: Color32) -> RGBAColor {
    let [r, g, b, a] = color.to_array();
    if a == 0 {
        return RGBAColor(0, 0, 0, 0.0);
    }
    let channel = |c: u8| ((u32::from(c) * 255 + u32::from(a) / 2) / u32::from(a)).min(255) as u8;
    RGBAColor(channel(r), channel(g), channel(b), f64::from(a) / 255.0)
}

fn draw_error(err: impl std::fmt::Display) -> VisualizerError {
    VisualizerError::Draw(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HALF_RED: Color32 = Color32::from_rgba_premultiplied(100, 0, 0, 100);

    #[test]
    fn new_canvas_is_filled() {
        let bg = Color32::from_rgba_unmultiplied(0, 0, 0, 200);
        let image = Canvas::new(bg).into_image().unwrap();
        assert_eq!(image.size, [CANVAS_SIZE, CANVAS_SIZE]);
        assert_eq!(image[(0, 0)], bg);
        assert_eq!(image[(399, 399)], bg);
    }

    #[test]
    fn transparent_background_stays_transparent() {
        let image = Canvas::new(Color32::TRANSPARENT).into_image().unwrap();
        assert!(image.pixels.iter().all(|p| *p == Color32::TRANSPARENT));
    }

    #[test]
    fn opaque_stroke_replaces() {
        let mut canvas = Canvas::new(Color32::TRANSPARENT);
        canvas.draw_line(PixelPoint::new(2, 5), PixelPoint::new(6, 5), Color32::RED);
        let image = canvas.into_image().unwrap();
        for x in 2..=6 {
            assert_eq!(image[(x, 5)], Color32::RED);
        }
        assert_eq!(image[(1, 5)], Color32::TRANSPARENT);
        assert_eq!(image[(7, 5)], Color32::TRANSPARENT);
    }

    #[test]
    fn translucent_stroke_blends_over_background() {
        let mut canvas = Canvas::new(Color32::BLACK);
        canvas.draw_line(PixelPoint::new(10, 0), PixelPoint::new(10, 20), HALF_RED);
        let image = canvas.into_image().unwrap();
        let pixel = image[(10, 10)];
        assert!((95..=105).contains(&pixel.r()), "{pixel:?}");
        assert_eq!(pixel.g(), 0);
        assert!(pixel.a() >= 250, "{pixel:?}");
        assert_eq!(image[(11, 10)], Color32::BLACK);
    }

    #[test]
    fn translucent_stroke_raises_background_alpha() {
        let bg = Color32::from_rgba_unmultiplied(0, 0, 0, 200);
        let mut canvas = Canvas::new(bg);
        canvas.draw_line(PixelPoint::new(0, 3), PixelPoint::new(30, 3), HALF_RED);
        let pixel = canvas.into_image().unwrap()[(15, 3)];
        assert!(pixel.a() > bg.a());
        assert!(pixel.r() > 0 && pixel.r() <= pixel.a());
    }

    #[test]
    fn off_canvas_parts_are_clipped() {
        let mut canvas = Canvas::new(Color32::BLACK);
        canvas.draw_line(PixelPoint::new(-5, 0), PixelPoint::new(2, 0), Color32::WHITE);
        canvas.draw_line(PixelPoint::new(500, 500), PixelPoint::new(600, 500), Color32::WHITE);
        let image = canvas.into_image().unwrap();
        assert_eq!(image[(0, 0)], Color32::WHITE);
        assert_eq!(image[(2, 0)], Color32::WHITE);
        assert_eq!(image[(3, 0)], Color32::BLACK);
    }

    #[test]
    fn diagonal_polyline_is_drawn() {
        let mut canvas = Canvas::new(Color32::BLACK);
        let path = [
            PixelPoint::new(0, 0),
            PixelPoint::new(40, 30),
            PixelPoint::new(80, 0),
        ];
        canvas.draw_polyline(&path, Color32::GREEN);
        let image = canvas.into_image().unwrap();
        for p in path {
            assert!(image[(p.x as usize, p.y as usize)].g() > 0, "{p:?}");
        }
        assert_eq!(image[(40, 100)], Color32::BLACK);
    }

    #[test]
    fn unmultiply_restores_straight_color() {
        let RGBAColor(r, g, b, a) = unmultiplied(HALF_RED);
        assert_eq!((r, g, b), (255, 0, 0));
        assert!((a - 100.0 / 255.0).abs() < 1e-9);

        let RGBAColor(_, _, _, a) = unmultiplied(Color32::TRANSPARENT);
        assert_eq!(a, 0.0);
    }

    #[test]
    fn short_polylines_draw_nothing() {
        let mut canvas = Canvas::new(Color32::BLACK);
        canvas.draw_polyline(&[PixelPoint::new(7, 8)], Color32::WHITE);
        canvas.draw_polyline(&[], Color32::WHITE);
        let image = canvas.into_image().unwrap();
        assert!(image.pixels.iter().all(|p| *p == Color32::BLACK));
    }
}
