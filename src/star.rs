//! Stars: fixed layout, per-star blink/spin state and pointer hit-testing.

use crate::geometry::Vector2;

/// Star spawn positions in canvas pixels, laid out on a 700x700 workspace.
pub const STAR_SPAWN_COORDINATES: [(f64, f64); 12] = [
    (229.0, 268.0),
    (451.0, 147.0),
    (268.0, 378.0),
    (53.0, 360.0),
    (117.0, 548.0),
    (225.0, 459.0),
    (358.0, 615.0),
    (561.0, 249.0),
    (601.0, 112.0),
    (497.0, 401.0),
    (381.0, 201.0),
    (400.0, 338.0),
];

/// Star outline in local units: eight tips alternating with eight inner notches,
/// traced in order and closed back to the first point.
pub const STAR_SHAPE: [Vector2; 16] = [
    Vector2::new(-2.0, 0.0),
    Vector2::new(-0.436781609, 0.275862069),
    Vector2::new(-0.7, 0.7),
    Vector2::new(-0.275862069, 0.436781609),
    Vector2::new(0.0, 2.0),
    Vector2::new(0.275862069, 0.436781609),
    Vector2::new(0.7, 0.7),
    Vector2::new(0.436781609, 0.275862069),
    Vector2::new(2.0, 0.0),
    Vector2::new(0.436781609, -0.275862069),
    Vector2::new(0.7, -0.7),
    Vector2::new(0.275862069, -0.436781609),
    Vector2::new(0.0, -2.0),
    Vector2::new(-0.275862069, -0.436781609),
    Vector2::new(-0.7, -0.7),
    Vector2::new(-0.436781609, -0.275862069),
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StarStatus {
    /// Not yet armed (before the first onset).
    #[default]
    None,
    /// Idle and clickable at night; drawn with a flickering stroke.
    Blinking,
    /// Solved; rotates continuously and ignores clicks.
    Spinning,
}

#[derive(Clone, Debug)]
pub struct Star {
    position: Vector2,
    status: StarStatus,
    /// Radians; only advances while spinning.
    pub rotation: f64,
    pub is_hovered: bool,
}

impl Star {
    pub fn new(position: Vector2) -> Self {
        Self {
            position,
            status: StarStatus::None,
            rotation: 0.0,
            is_hovered: false,
        }
    }

    pub fn position(&self) -> Vector2 {
        self.position
    }

    pub fn status(&self) -> StarStatus {
        self.status
    }

    pub fn is_blinking(&self) -> bool {
        self.status == StarStatus::Blinking
    }

    pub fn is_spinning(&self) -> bool {
        self.status == StarStatus::Spinning
    }

    pub fn start_blinking(&mut self) {
        self.status = StarStatus::Blinking;
    }

    pub fn start_spinning(&mut self) {
        self.status = StarStatus::Spinning;
        self.is_hovered = false;
    }

    /// Whether `point` lies strictly inside the hit circle of this star.
    pub fn contains(&self, point: Vector2, hit_radius: f64) -> bool {
        Vector2::distance(point, self.position) < hit_radius
    }
}

/// All stars of a session, created once from the spawn table.
#[derive(Clone, Debug)]
pub struct StarField {
    stars: Vec<Star>,
}

impl Default for StarField {
    fn default() -> Self {
        Self::new()
    }
}

impl StarField {
    pub fn new() -> Self {
        Self::from_positions(
            STAR_SPAWN_COORDINATES
                .iter()
                .map(|&(x, y)| Vector2::new(x, y)),
        )
    }

    pub fn from_positions(positions: impl IntoIterator<Item = Vector2>) -> Self {
        Self {
            stars: positions.into_iter().map(Star::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn get(&self, index: usize) -> Option<&Star> {
        self.stars.get(index)
    }

    /// Re-arm every star, solved or not.
    pub fn set_all_blinking(&mut self) {
        for star in &mut self.stars {
            star.start_blinking();
        }
    }

    /// Advance the rotation of spinning stars by one tick.
    pub fn advance_spin(&mut self, increment: f64) {
        for star in self.stars.iter_mut().filter(|s| s.is_spinning()) {
            star.rotation = (star.rotation + increment) % std::f64::consts::TAU;
        }
    }

    /// Start every star under `point` spinning. Already spinning stars are skipped.
    /// Returns the indices of the stars solved by this click.
    pub fn click(&mut self, point: Vector2, hit_radius: f64) -> Vec<usize> {
        let mut solved = Vec::new();
        for (idx, star) in self.stars.iter_mut().enumerate() {
            if !star.contains(point, hit_radius) || star.is_spinning() {
                continue;
            }
            star.start_spinning();
            solved.push(idx);
        }
        solved
    }

    /// Update hover flags of blinking stars; returns true if any star is hovered.
    pub fn hover(&mut self, point: Vector2, hit_radius: f64) -> bool {
        let mut any = false;
        for star in &mut self.stars {
            star.is_hovered = star.is_blinking() && star.contains(point, hit_radius);
            any |= star.is_hovered;
        }
        any
    }

    pub fn spinning_count(&self) -> usize {
        self.stars.iter().filter(|s| s.is_spinning()).count()
    }
}
