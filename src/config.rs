//! Game tunables and DOM element ids.
//!
//! Defaults reproduce the shipped game: a 10 second day/night period ticked 33
//! times per second, 25px star units and a 0.75 day-weight threshold.

use std::f64::consts::TAU;

use crate::cycle::NIGHT_DAY_RATIO;
use crate::error::GameError;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Seconds from full day to full night.
    pub half_period_seconds: f64,
    /// Fixed tick rate.
    pub calls_per_second: u32,
    /// Pixel size of one star template unit; also the full-night hit radius.
    pub unit_size: f64,
    /// Day-weight threshold between Day and Night.
    pub night_day_ratio: f64,
    /// Inclusive range of the random blink stroke width.
    pub blink_width_min: u32,
    pub blink_width_max: u32,
    pub spin_stroke_width: f64,
    /// Draw scale of solved stars relative to blinking ones.
    pub spin_scale: f64,
    /// Radians added to a spinning star's rotation per tick.
    pub spin_increment: f64,
    pub canvas_border_px: u32,
    pub canvas_border_color: String,
    pub canvas_id: String,
    pub counter_id: String,
    pub win_panel_id: String,
    /// Optional restart button; skipped if absent from the page.
    pub restart_button_id: String,
    pub restart_key: String,
    /// Debug overlay: stroke each blinking star's hit circle.
    pub show_hit_circles: bool,
    /// Fixed RNG seed for reproducible blinking.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            half_period_seconds: 5.0,
            calls_per_second: 33,
            unit_size: 25.0,
            night_day_ratio: NIGHT_DAY_RATIO,
            blink_width_min: 4,
            blink_width_max: 6,
            spin_stroke_width: 5.0,
            spin_scale: 1.2,
            spin_increment: TAU * 0.1,
            canvas_border_px: 0,
            canvas_border_color: "black".to_string(),
            canvas_id: "main-canvas".to_string(),
            counter_id: "star-count".to_string(),
            win_panel_id: "win-panel".to_string(),
            restart_button_id: "restart-button".to_string(),
            restart_key: "r".to_string(),
            show_hit_circles: false,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Interval timer delay in whole milliseconds.
    pub fn tick_delay_ms(&self) -> i32 {
        (1000 / self.calls_per_second.max(1)) as i32
    }

    pub fn validate(&self) -> Result<(), GameError> {
        let invalid = |msg: &str| Err(GameError::InvalidConfig(msg.to_string()));
        if !(self.half_period_seconds.is_finite() && self.half_period_seconds > 0.0) {
            return invalid("half_period_seconds must be positive");
        }
        if self.calls_per_second == 0 {
            return invalid("calls_per_second must be positive");
        }
        if !(self.unit_size.is_finite() && self.unit_size > 0.0) {
            return invalid("unit_size must be positive");
        }
        if !(self.night_day_ratio > 0.0 && self.night_day_ratio < 1.0) {
            return invalid("night_day_ratio must lie in (0, 1)");
        }
        if self.blink_width_min == 0 || self.blink_width_min > self.blink_width_max {
            return invalid("blink width range must be non-empty and start above zero");
        }
        if !self.spin_increment.is_finite() {
            return invalid("spin_increment must be finite");
        }
        if !(self.spin_scale.is_finite() && self.spin_scale > 0.0) {
            return invalid("spin_scale must be positive");
        }
        if self.restart_key.is_empty() {
            return invalid("restart_key must not be empty");
        }
        Ok(())
    }

    /// Parse a (possibly partial) JSON config; missing fields take their defaults.
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let config: GameConfig = serde_json::from_str(json)
            .map_err(|e| GameError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn tick_delay_truncates() {
        assert_eq!(GameConfig::default().tick_delay_ms(), 30);
        let c = GameConfig {
            calls_per_second: 60,
            ..GameConfig::default()
        };
        assert_eq!(c.tick_delay_ms(), 16);
    }

    #[test]
    fn rejects_bad_values() {
        let bad = [
            GameConfig {
                half_period_seconds: 0.0,
                ..GameConfig::default()
            },
            GameConfig {
                calls_per_second: 0,
                ..GameConfig::default()
            },
            GameConfig {
                night_day_ratio: 1.0,
                ..GameConfig::default()
            },
            GameConfig {
                blink_width_min: 7,
                ..GameConfig::default()
            },
            GameConfig {
                spin_increment: f64::NAN,
                ..GameConfig::default()
            },
            GameConfig {
                restart_key: String::new(),
                ..GameConfig::default()
            },
        ];
        for cfg in bad {
            assert!(
                matches!(cfg.validate(), Err(GameError::InvalidConfig(_))),
                "accepted {cfg:?}"
            );
        }
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = GameConfig::from_json(r#"{ "half_period_seconds": 2.5, "seed": 7 }"#).unwrap();
        assert_eq!(cfg.half_period_seconds, 2.5);
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.canvas_id, "main-canvas");
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn json_is_validated() {
        assert!(GameConfig::from_json(r#"{ "unit_size": -1.0 }"#).is_err());
        assert!(GameConfig::from_json("not json").is_err());
    }
}
