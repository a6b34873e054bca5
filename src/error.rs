//! Crate error type.
//!
//! Classification, name resolution and polling are total and never return
//! errors. [`Error`] only shows up at the edges: converting raw ordinals or
//! strings into identifiers, validating joystick indices, and loading settings
//! or binding profiles.

use thiserror::Error;

/// Errors produced by conversions and configuration loading.
#[derive(Debug, Error)]
pub enum Error {
    /// The ordinal lies outside the identifier space.
    #[error("ordinal {0} is not a valid input identifier")]
    InvalidOrdinal(u8),

    /// A string did not name any identifier variant.
    #[error("`{0}` is not a known input identifier")]
    UnknownIdentifier(String),

    /// Joystick index outside `1..=MAX_JOYSTICKS`.
    #[error("joystick index {0} is out of range (expected 1..={})", crate::joystick::MAX_JOYSTICKS)]
    InvalidJoystick(u8),

    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
