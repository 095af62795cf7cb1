//! Error type shared by setup, configuration and drawing

use std::fmt;

/// Everything that can go wrong outside of gameplay itself.
///
/// Falling through a gap is not an error; see `Game::user_failed`.
#[derive(Debug)]
pub enum GameError {
    /// `window` is not available (not running in a browser main thread)
    NoWindow,
    /// `window.document` is not available
    NoDocument,
    /// No element with the given id
    MissingElement(String),
    /// Element exists but has the wrong type (e.g. not a canvas)
    WrongElementType(String),
    /// Canvas refused to hand out a 2D context
    NoContext,
    /// A browser API call threw
    Js(String),
    /// Configuration values out of range
    InvalidConfig(String),
    /// Configuration JSON could not be parsed
    Config(serde_json::Error),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::NoWindow => write!(f, "no global window"),
            GameError::NoDocument => write!(f, "window has no document"),
            GameError::MissingElement(id) => write!(f, "no element with id '{}'", id),
            GameError::WrongElementType(id) => write!(f, "element '{}' has the wrong type", id),
            GameError::NoContext => write!(f, "canvas has no 2d rendering context"),
            GameError::Js(msg) => write!(f, "browser call failed: {}", msg),
            GameError::InvalidConfig(msg) => write!(f, "invalid config: {}", msg),
            GameError::Config(e) => write!(f, "malformed config: {}", e),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for GameError {
    fn from(e: serde_json::Error) -> Self {
        GameError::Config(e)
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for GameError {
    fn from(v: wasm_bindgen::JsValue) -> Self {
        GameError::Js(format!("{:?}", v))
    }
}
