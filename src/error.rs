//! Startup errors. Gameplay itself has no failure modes: invalid input is ignored.

use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq)]
pub enum GameError {
    /// `window` is not available (not running in a browser main thread).
    NoWindow,
    NoDocument,
    /// A required DOM element id was not found.
    MissingElement(String),
    /// The element exists but has the wrong type (e.g. not a canvas).
    WrongElementType { id: String, expected: &'static str },
    NoContext2d,
    InvalidConfig(String),
    /// `start_game` was called while a session is already running.
    AlreadyStarted,
    /// Error thrown by a browser API.
    Js(String),
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoWindow => write!(f, "no window"),
            Self::NoDocument => write!(f, "no document"),
            Self::MissingElement(id) => write!(f, "missing element #{}", id),
            Self::WrongElementType { id, expected } => {
                write!(f, "element #{} is not a {}", id, expected)
            }
            Self::NoContext2d => write!(f, "canvas has no 2d context"),
            Self::InvalidConfig(reason) => write!(f, "invalid config: {}", reason),
            Self::AlreadyStarted => write!(f, "game already started"),
            Self::Js(msg) => write!(f, "browser error: {}", msg),
        }
    }
}

impl std::error::Error for GameError {}

impl From<JsValue> for GameError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<GameError> for JsValue {
    fn from(err: GameError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_element() {
        let e = GameError::MissingElement("main-canvas".into());
        assert_eq!(e.to_string(), "missing element #main-canvas");
        let e = GameError::WrongElementType {
            id: "star-count".into(),
            expected: "canvas",
        };
        assert_eq!(e.to_string(), "element #star-count is not a canvas");
    }

    #[test]
    fn invalid_config_message() {
        let e = GameError::InvalidConfig("unit_size must be positive".into());
        assert_eq!(e.to_string(), "invalid config: unit_size must be positive");
    }
}
