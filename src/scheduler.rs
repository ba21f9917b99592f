//! Fixed-rate tick sources.
//!
//! The browser build uses `web::IntervalScheduler` (`setInterval`). Headless
//! drivers and tests use [`ManualScheduler`], which only ticks when told to.

use crate::error::GameError;

pub type TickFn = Box<dyn FnMut()>;

pub trait Scheduler {
    /// Start calling `tick` every `delay_ms` milliseconds for the rest of the session.
    fn start(&mut self, delay_ms: i32, tick: TickFn) -> Result<(), GameError>;
}

/// Scheduler that runs its tick only when fired explicitly.
#[derive(Default)]
pub struct ManualScheduler {
    tick: Option<TickFn>,
    delay_ms: Option<i32>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delay_ms(&self) -> Option<i32> {
        self.delay_ms
    }

    /// Run one tick; false if nothing was started.
    pub fn fire(&mut self) -> bool {
        match self.tick.as_mut() {
            Some(tick) => {
                tick();
                true
            }
            None => false,
        }
    }

    /// Run up to `n` ticks, returning how many ran.
    pub fn fire_n(&mut self, n: usize) -> usize {
        (0..n).take_while(|_| self.fire()).count()
    }
}

impl Scheduler for ManualScheduler {
    fn start(&mut self, delay_ms: i32, tick: TickFn) -> Result<(), GameError> {
        if self.tick.is_some() {
            return Err(GameError::AlreadyStarted);
        }
        self.delay_ms = Some(delay_ms);
        self.tick = Some(tick);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn fires_only_after_start() {
        let mut s = ManualScheduler::new();
        assert!(!s.fire());
        assert_eq!(s.fire_n(3), 0);

        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        s.start(30, Box::new(move || c.set(c.get() + 1))).unwrap();
        assert_eq!(s.delay_ms(), Some(30));
        assert_eq!(s.fire_n(5), 5);
        assert_eq!(count.get(), 5);
    }

    #[test]
    fn cannot_start_twice() {
        let mut s = ManualScheduler::new();
        s.start(30, Box::new(|| {})).unwrap();
        assert_eq!(s.start(30, Box::new(|| {})), Err(GameError::AlreadyStarted));
    }
}
