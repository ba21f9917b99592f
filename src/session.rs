//! Session controller: owns the clock, the day/night cycle, the stars and the
//! per-run game state, and runs the tick pipeline.
//!
//! A tick is split into a gameplay half (`step`) and a drawing half so the whole
//! game can be driven without a canvas. Input handlers (`click`, `hover`,
//! `handle_key`, `restart`) read the `FrameScalars` captured by the last tick.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::clock::{FrameScalars, PhaseClock};
use crate::config::GameConfig;
use crate::cycle::{DayNightCycle, Phase, Transition};
use crate::error::GameError;
use crate::geometry::Vector2;
use crate::render::{RenderSink, render_frame};
use crate::star::StarField;

/// Text shown by the remaining-star counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterText {
    /// Before the first onset.
    Pending,
    /// During the day the count is hidden.
    Unknown,
    Count(u32),
}

impl std::fmt::Display for CounterText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CounterText::Pending => write!(f, "?"),
            CounterText::Unknown => write!(f, "??"),
            CounterText::Count(n) => write!(f, "{}", n),
        }
    }
}

/// Presentation side effects outside the canvas (DOM overlays in the browser).
pub trait Presentation {
    fn show_win(&mut self);
    fn hide_win(&mut self);
    fn set_counter(&mut self, text: CounterText);
    /// Pointer cursor while hovering a clickable star.
    fn set_pointer_cursor(&mut self, pointer: bool);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GameState {
    pub remaining_stars: u32,
    pub is_paused: bool,
    pub can_restart: bool,
    /// One-shot flag consumed by the next tick to reset the clock.
    pub is_restarting: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Paused after a win; nothing happened.
    Paused,
    Advanced { transition: Option<Transition> },
}

pub struct Session<P: Presentation> {
    config: GameConfig,
    clock: PhaseClock,
    cycle: DayNightCycle,
    stars: StarField,
    state: GameState,
    frame: FrameScalars,
    rng: Pcg32,
    presentation: P,
}

impl<P: Presentation> Session<P> {
    /// Validate `config`, create the stars and enter the first day.
    /// `config.seed`, when set, takes precedence over `seed`.
    pub fn new(config: GameConfig, presentation: P, seed: u64) -> Result<Self, GameError> {
        config.validate()?;
        let clock = PhaseClock::new();
        let frame = FrameScalars::from_clock(&clock, config.unit_size);
        let rng = Pcg32::seed_from_u64(config.seed.unwrap_or(seed));
        let mut session = Self {
            cycle: DayNightCycle::new(config.night_day_ratio),
            config,
            clock,
            stars: StarField::new(),
            state: GameState::default(),
            frame,
            rng,
            presentation,
        };
        session.presentation.set_counter(CounterText::Pending);
        session.on_day_begins();
        Ok(session)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn clock(&self) -> &PhaseClock {
        &self.clock
    }

    pub fn phase(&self) -> Phase {
        self.cycle.phase()
    }

    pub fn stars(&self) -> &StarField {
        &self.stars
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Scalars captured by the last tick.
    pub fn frame(&self) -> FrameScalars {
        self.frame
    }

    pub fn total_stars(&self) -> u32 {
        self.stars.len() as u32
    }

    pub fn presentation(&self) -> &P {
        &self.presentation
    }

    pub fn presentation_mut(&mut self) -> &mut P {
        &mut self.presentation
    }

    /// Run one tick without drawing.
    pub fn step(&mut self) -> TickOutcome {
        let Some(frame) = self.begin_tick() else {
            return TickOutcome::Paused;
        };
        let transition = self.apply_threshold(frame);
        self.advance_clock();
        TickOutcome::Advanced { transition }
    }

    /// Run one full tick, drawing the frame into `sink`. Onset handlers run
    /// before the frame is drawn.
    pub fn tick<S: RenderSink + ?Sized>(&mut self, sink: &mut S) -> TickOutcome {
        let Some(frame) = self.begin_tick() else {
            return TickOutcome::Paused;
        };
        let transition = self.apply_threshold(frame);
        render_frame(sink, &frame, self.stars.stars(), &self.config, &mut self.rng);
        self.advance_clock();
        TickOutcome::Advanced { transition }
    }

    fn begin_tick(&mut self) -> Option<FrameScalars> {
        if self.state.is_paused {
            return None;
        }
        if self.state.is_restarting {
            self.clock.reset();
            self.state.is_restarting = false;
        }
        self.frame = FrameScalars::from_clock(&self.clock, self.config.unit_size);
        self.stars.advance_spin(self.config.spin_increment);
        Some(self.frame)
    }

    fn apply_threshold(&mut self, frame: FrameScalars) -> Option<Transition> {
        let transition = self.cycle.update(frame.day_weight);
        match transition {
            Some(Transition::NightBegins) => self.on_night_begins(),
            Some(Transition::DayBegins) => self.on_day_begins(),
            None => {}
        }
        transition
    }

    fn advance_clock(&mut self) {
        self.clock
            .advance(self.config.half_period_seconds, self.config.calls_per_second);
    }

    /// Stars become clickable; the counter is shown but not reset.
    fn on_night_begins(&mut self) {
        log::debug!("night begins ({} stars left)", self.state.remaining_stars);
        self.presentation
            .set_counter(CounterText::Count(self.state.remaining_stars));
        self.stars.set_all_blinking();
    }

    fn on_day_begins(&mut self) {
        log::debug!("day begins");
        self.presentation.set_counter(CounterText::Unknown);
        self.stars.set_all_blinking();
        self.state.remaining_stars = self.total_stars();
    }

    /// Click at `point` in surface coordinates. Ignored during the day and while
    /// paused. Returns true if at least one star was solved.
    pub fn click(&mut self, point: Vector2) -> bool {
        if self.state.is_paused || self.cycle.is_day() {
            return false;
        }
        let solved = self.stars.click(point, self.frame.hit_radius);
        for &idx in &solved {
            self.solve_star(idx);
        }
        !solved.is_empty()
    }

    fn solve_star(&mut self, idx: usize) {
        log::debug!("star {} solved", idx);
        if self.state.remaining_stars == 0 {
            return;
        }
        self.state.remaining_stars -= 1;
        if self.state.remaining_stars == 0 {
            self.win();
        }
        self.presentation
            .set_counter(CounterText::Count(self.state.remaining_stars));
    }

    /// Pointer moved to `point`; returns whether the pointer cursor should show.
    pub fn hover(&mut self, point: Vector2) -> bool {
        let any = self.stars.hover(point, self.frame.hit_radius);
        self.presentation.set_pointer_cursor(any);
        any
    }

    /// Key press; only the configured restart key does anything.
    pub fn handle_key(&mut self, key: &str) -> bool {
        key == self.config.restart_key && self.restart()
    }

    fn win(&mut self) {
        self.state.is_paused = true;
        self.state.can_restart = true;
        log::info!("you won");
        self.presentation.show_win();
    }

    /// Leave the win screen. Only honoured after a win; the clock is reset by the
    /// next tick. Returns whether the restart was accepted.
    pub fn restart(&mut self) -> bool {
        if !self.state.can_restart {
            log::debug!("restart ignored");
            return false;
        }
        self.presentation.hide_win();
        self.state.is_paused = false;
        self.state.can_restart = false;
        self.state.is_restarting = true;
        log::info!("restarting");
        true
    }
}
