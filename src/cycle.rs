//! Day / night state machine gating star interactivity.

/// Default `day_weight` threshold at which the cycle flips.
pub const NIGHT_DAY_RATIO: f64 = 0.75;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Day,
    Night,
}

/// Onset events, named after the phase being entered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Day -> Night: stars become clickable.
    NightBegins,
    /// Night -> Day: the star counter is reset.
    DayBegins,
}

#[derive(Clone, Debug)]
pub struct DayNightCycle {
    phase: Phase,
    threshold: f64,
}

impl DayNightCycle {
    pub fn new(threshold: f64) -> Self {
        Self {
            phase: Phase::Day,
            threshold,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_day(&self) -> bool {
        self.phase == Phase::Day
    }

    /// Check the threshold once for this tick. Returns the transition that fired,
    /// if any; repeated calls within the same regime return `None`.
    pub fn update(&mut self, day_weight: f64) -> Option<Transition> {
        match self.phase {
            Phase::Day if day_weight < self.threshold => {
                self.phase = Phase::Night;
                Some(Transition::NightBegins)
            }
            Phase::Night if day_weight > self.threshold => {
                self.phase = Phase::Day;
                Some(Transition::DayBegins)
            }
            _ => None,
        }
    }
}

impl Default for DayNightCycle {
    fn default() -> Self {
        Self::new(NIGHT_DAY_RATIO)
    }
}
