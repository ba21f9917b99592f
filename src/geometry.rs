//! Minimal 2D vector helpers used for star placement, rotation and hit-testing.

/// Point / offset in canvas pixel space (y grows downward like the canvas).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2::new(0.0, 0.0);
    pub const UP: Vector2 = Vector2::new(0.0, 1.0);
    pub const RIGHT: Vector2 = Vector2::new(1.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Rotate `point` by `angle` radians around `pivot`.
    pub fn rotate_point(point: Vector2, angle: f64, pivot: Vector2) -> Vector2 {
        let (sin, cos) = angle.sin_cos();
        // translate pivot to origin
        let px = point.x - pivot.x;
        let py = point.y - pivot.y;
        Vector2::new(px * cos - py * sin + pivot.x, px * sin + py * cos + pivot.y)
    }

    /// Euclidean distance between two points.
    pub fn distance(a: Vector2, b: Vector2) -> f64 {
        ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
    }
}
