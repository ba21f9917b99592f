//! Per-tick frame drawing against an abstract 2D sink.
//!
//! `render_frame` paints the sky gradient for the current day weight, the sun/moon
//! glow in the top-left corner and then every star, scaled by the night weight of
//! the same `FrameScalars` snapshot the hit-tester uses.

use rand::Rng;

use crate::clock::FrameScalars;
use crate::color::{DAY_PALETTE, NIGHT_PALETTE, Rgb, SKY_BAND_OFFSETS, SkyPalette};
use crate::config::GameConfig;
use crate::geometry::Vector2;
use crate::star::{STAR_SHAPE, Star, StarStatus};

/// Radial glow: fully coloured inside `GLOW_INNER_RADIUS`, fading out by `GLOW_OUTER_RADIUS`.
pub const GLOW_INNER_RADIUS: f64 = 240.0;
pub const GLOW_OUTER_RADIUS: f64 = 250.0;

const BLINK_COLOR: Rgb = Rgb::WHITE;
const SPIN_COLOR: Rgb = Rgb::new(255.0, 236.0, 150.0);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Rgb,
    pub alpha: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Gradient {
    Linear {
        from: Vector2,
        to: Vector2,
        stops: Vec<GradientStop>,
    },
    Radial {
        center: Vector2,
        inner_radius: f64,
        outer_radius: f64,
        stops: Vec<GradientStop>,
    },
}

impl Gradient {
    pub fn stops(&self) -> &[GradientStop] {
        match self {
            Gradient::Linear { stops, .. } | Gradient::Radial { stops, .. } => stops,
        }
    }
}

/// Stroke + fill style of a closed polygon.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeStyle {
    pub line_width: f64,
    pub stroke: Rgb,
    pub fill: Rgb,
}

/// Drawing surface consumed by the renderer (a canvas 2D context in the browser).
pub trait RenderSink {
    /// Surface size `(width, height)`, queried every frame.
    fn surface_size(&self) -> (f64, f64);
    /// Fill the whole `width x height` rectangle at the origin with a gradient.
    fn fill_gradient_rect(&mut self, width: f64, height: f64, gradient: &Gradient);
    /// Stroke and fill the closed polygon through `points` in order.
    fn draw_polygon(&mut self, points: &[Vector2], style: &ShapeStyle);
    /// Stroke a circle outline (debug overlay).
    fn stroke_circle(&mut self, center: Vector2, radius: f64, line_width: f64, color: Rgb);
}

/// Transform the shape template: scale, translate to `pivot`, rotate around it.
pub fn shape_points(
    pivot: Vector2,
    template: &[Vector2],
    x_scale: f64,
    y_scale: f64,
    rotation: f64,
) -> Vec<Vector2> {
    template
        .iter()
        .map(|local| {
            let p = Vector2::new(pivot.x + local.x * x_scale, pivot.y + local.y * y_scale);
            if rotation == 0.0 {
                p
            } else {
                Vector2::rotate_point(p, rotation, pivot)
            }
        })
        .collect()
}

pub fn sky_gradient(palette: &SkyPalette, width: f64, height: f64) -> Gradient {
    Gradient::Linear {
        from: Vector2::ZERO,
        to: Vector2::new(width, height),
        stops: SKY_BAND_OFFSETS
            .iter()
            .zip(palette.bands.iter())
            .map(|(&offset, &color)| GradientStop {
                offset,
                color,
                alpha: 1.0,
            })
            .collect(),
    }
}

pub fn glow_gradient(color: Rgb) -> Gradient {
    Gradient::Radial {
        center: Vector2::ZERO,
        inner_radius: GLOW_INNER_RADIUS,
        outer_radius: GLOW_OUTER_RADIUS,
        stops: vec![
            GradientStop {
                offset: 0.0,
                color,
                alpha: 1.0,
            },
            GradientStop {
                offset: 1.0,
                color: Rgb::WHITE,
                alpha: 0.0,
            },
        ],
    }
}

/// Draw one star. Blinking stars flicker their stroke width; spinning stars are
/// drawn larger, rotated, in the solved colour. Stroke width scales with the
/// drawn size.
pub fn draw_star<S: RenderSink + ?Sized, R: Rng>(
    sink: &mut S,
    star: &Star,
    frame: &FrameScalars,
    config: &GameConfig,
    rng: &mut R,
) {
    let scale = frame.night_weight;
    let (draw_scale, base_width, color, rotation) = match star.status() {
        StarStatus::Spinning => (
            scale * config.spin_scale,
            config.spin_stroke_width,
            SPIN_COLOR,
            star.rotation,
        ),
        StarStatus::Blinking | StarStatus::None => {
            let flicker = rng.random_range(config.blink_width_min..=config.blink_width_max);
            (scale, flicker as f64 * scale, BLINK_COLOR, 0.0)
        }
    };
    let points = shape_points(star.position(), &STAR_SHAPE, draw_scale, draw_scale, rotation);
    let style = ShapeStyle {
        line_width: base_width * draw_scale,
        stroke: color,
        fill: color,
    };
    sink.draw_polygon(&points, &style);
}

/// Paint one full frame.
pub fn render_frame<S: RenderSink + ?Sized, R: Rng>(
    sink: &mut S,
    frame: &FrameScalars,
    stars: &[Star],
    config: &GameConfig,
    rng: &mut R,
) {
    let (width, height) = sink.surface_size();
    let palette = SkyPalette::blend(&NIGHT_PALETTE, &DAY_PALETTE, frame.day_weight);

    sink.fill_gradient_rect(width, height, &sky_gradient(&palette, width, height));
    sink.fill_gradient_rect(width, height, &glow_gradient(palette.glow));

    for star in stars {
        draw_star(sink, star, frame, config, rng);
        if config.show_hit_circles && star.is_blinking() {
            sink.stroke_circle(star.position(), frame.hit_radius, 1.0, BLINK_COLOR);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[derive(Default)]
    struct Recorder {
        rects: Vec<Gradient>,
        polygons: Vec<(Vec<Vector2>, ShapeStyle)>,
        circles: Vec<(Vector2, f64)>,
    }

    impl RenderSink for Recorder {
        fn surface_size(&self) -> (f64, f64) {
            (800.0, 600.0)
        }
        fn fill_gradient_rect(&mut self, _w: f64, _h: f64, gradient: &Gradient) {
            self.rects.push(gradient.clone());
        }
        fn draw_polygon(&mut self, points: &[Vector2], style: &ShapeStyle) {
            self.polygons.push((points.to_vec(), *style));
        }
        fn stroke_circle(&mut self, center: Vector2, radius: f64, _w: f64, _c: Rgb) {
            self.circles.push((center, radius));
        }
    }

    fn frame(night: f64) -> FrameScalars {
        FrameScalars {
            day_weight: 1.0 - night,
            night_weight: night,
            hit_radius: 25.0 * night,
        }
    }

    #[test]
    fn shape_points_without_rotation_scale_and_translate() {
        let pts = shape_points(Vector2::new(10.0, 20.0), &STAR_SHAPE, 2.0, 2.0, 0.0);
        assert_eq!(pts.len(), STAR_SHAPE.len());
        assert_eq!(pts[0], Vector2::new(6.0, 20.0));
        assert_eq!(pts[4], Vector2::new(10.0, 24.0));
    }

    #[test]
    fn shape_points_rotate_around_pivot() {
        let pivot = Vector2::new(50.0, 50.0);
        let pts = shape_points(pivot, &STAR_SHAPE, 1.0, 1.0, std::f64::consts::PI);
        // tip (-2, 0) ends up at (+2, 0)
        assert!((pts[0].x - 52.0).abs() < 1e-9 && (pts[0].y - 50.0).abs() < 1e-9);
        for p in &pts {
            let d = Vector2::distance(*p, pivot);
            assert!(d <= 2.0 + 1e-9);
        }
    }

    #[test]
    fn sky_gradient_has_five_ordered_stops() {
        let g = sky_gradient(&DAY_PALETTE, 100.0, 50.0);
        let offsets: Vec<f64> = g.stops().iter().map(|s| s.offset).collect();
        assert_eq!(offsets, vec![0.0, 0.5, 0.8, 0.9, 1.0]);
        assert_eq!(g.stops()[4].color, DAY_PALETTE.bands[4]);
    }

    #[test]
    fn frame_draws_sky_glow_and_every_star() {
        let mut sink = Recorder::default();
        let mut field = crate::star::StarField::new();
        field.set_all_blinking();
        let mut rng = Pcg32::seed_from_u64(1);
        render_frame(&mut sink, &frame(1.0), field.stars(), &GameConfig::default(), &mut rng);
        assert_eq!(sink.rects.len(), 2);
        assert!(matches!(sink.rects[0], Gradient::Linear { .. }));
        assert!(matches!(sink.rects[1], Gradient::Radial { .. }));
        assert_eq!(sink.polygons.len(), field.len());
        assert!(sink.circles.is_empty());
    }

    #[test]
    fn blink_width_stays_in_range() {
        let cfg = GameConfig::default();
        let mut rng = Pcg32::seed_from_u64(42);
        let mut star = Star::new(Vector2::new(100.0, 100.0));
        star.start_blinking();
        let mut sink = Recorder::default();
        for _ in 0..200 {
            draw_star(&mut sink, &star, &frame(1.0), &cfg, &mut rng);
        }
        for (_, style) in &sink.polygons {
            assert!((4.0..=6.0).contains(&style.line_width), "{}", style.line_width);
            assert_eq!(style.line_width.fract(), 0.0);
        }
    }

    #[test]
    fn spinning_star_is_larger_and_rotated() {
        let cfg = GameConfig::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let mut star = Star::new(Vector2::new(100.0, 100.0));
        star.start_spinning();
        star.rotation = std::f64::consts::FRAC_PI_2;
        let mut sink = Recorder::default();
        draw_star(&mut sink, &star, &frame(0.5), &cfg, &mut rng);
        let (pts, style) = &sink.polygons[0];
        // tip (-2, 0) * 0.6 rotated a quarter turn lands straight above/below pivot
        assert!((pts[0].x - 100.0).abs() < 1e-9);
        assert!((Vector2::distance(pts[0], star.position()) - 1.2).abs() < 1e-9);
        assert!((style.line_width - 5.0 * 0.6).abs() < 1e-12);
        assert_eq!(style.fill, SPIN_COLOR);
    }

    #[test]
    fn debug_overlay_strokes_hit_circles() {
        let cfg = GameConfig {
            show_hit_circles: true,
            ..GameConfig::default()
        };
        let mut field = crate::star::StarField::new();
        field.set_all_blinking();
        let mut sink = Recorder::default();
        let mut rng = Pcg32::seed_from_u64(9);
        render_frame(&mut sink, &frame(0.4), field.stars(), &cfg, &mut rng);
        assert_eq!(sink.circles.len(), field.len());
        assert!((sink.circles[0].1 - 10.0).abs() < 1e-12);
    }
}
