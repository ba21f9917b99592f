//! Find The Stars core crate.
//!
//! A canvas sky cycles from sunrise to sunset on a cosine wave. Once night falls
//! the stars become clickable; solve every star before dawn to win. The gameplay
//! core (`clock`, `cycle`, `star`, `render`, `session`) is plain Rust and runs
//! headless; `web` binds it to a browser canvas and DOM.

use wasm_bindgen::prelude::*;

pub mod clock;
pub mod color;
pub mod config;
pub mod cycle;
pub mod error;
pub mod geometry;
pub mod render;
pub mod scheduler;
pub mod session;
pub mod star;
pub mod web;

pub use clock::{FrameScalars, PhaseClock};
pub use config::GameConfig;
pub use cycle::{DayNightCycle, Phase, Transition};
pub use error::GameError;
pub use geometry::Vector2;
pub use render::RenderSink;
pub use scheduler::{ManualScheduler, Scheduler};
pub use session::{CounterText, GameState, Presentation, Session, TickOutcome};
pub use star::{Star, StarField, StarStatus};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed.
    console_log::init_with_level(log::Level::Info).ok();
}

// -----------------------------------------------------------------------------
// JS entrypoints
// -----------------------------------------------------------------------------

/// Start the game with the default element ids and tuning.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    web::start(GameConfig::default())?;
    Ok(())
}

/// Start the game from a (partial) JSON `GameConfig`.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_game_with_config(json: &str) -> Result<(), JsValue> {
    web::start(GameConfig::from_json(json)?)?;
    Ok(())
}

/// Restart after a win (e.g. from a "play again" button). Same as pressing `r`.
#[wasm_bindgen]
pub fn restart_game() -> bool {
    web::restart()
}
