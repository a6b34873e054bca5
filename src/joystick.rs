//! Device selector.
//!
//! A [`Joystick`] tells the name resolver which device an identifier should be
//! read from. It is passed per call and never stored by the core.
//!
//! - [`Joystick::All`] — wildcard, matches whichever device reports first.
//! - [`Joystick::Joy`] — one specific device, 1-based.
//! - [`Joystick::None`] — no device; polling is skipped and only mouse
//!   inputs resolve.
//!
//! ## Serialization
//! Selectors serialize as `"all"`, `"none"`, or the bare device index:
//! ```
//! use stickup_names::Joystick;
//!
//! let joy: Joystick = serde_json::from_str("3").unwrap();
//! assert_eq!(joy, Joystick::joy(3).unwrap());
//! let any: Joystick = serde_json::from_str("\"all\"").unwrap();
//! assert_eq!(any, Joystick::All);
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Highest supported joystick index.
pub const MAX_JOYSTICKS: u8 = 16;

/// Which device instance an identifier refers to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Joystick {
    /// No device. Polling returns nothing and joystick inputs do not resolve.
    /// Mouse inputs still resolve, since mice are not selected by device.
    None,
    /// Any device.
    #[default]
    All,
    /// A specific device, `1..=MAX_JOYSTICKS`.
    ///
    /// Prefer [`Joystick::joy`]. An index outside the range is not a device:
    /// it resolves to no name and is never cached.
    Joy(u8),
}

impl Joystick {
    /// Build a specific-device selector, validating the index.
    pub fn joy(index: u8) -> Result<Self> {
        if (1..=MAX_JOYSTICKS).contains(&index) {
            Ok(Joystick::Joy(index))
        } else {
            Err(Error::InvalidJoystick(index))
        }
    }

    /// Device index for [`Joystick::Joy`], `None` otherwise.
    pub fn index(self) -> Option<u8> {
        match self {
            Joystick::Joy(n) => Some(n),
            _ => None,
        }
    }

    /// `false` only for a `Joy(n)` whose index is outside `1..=MAX_JOYSTICKS`.
    #[inline]
    pub fn is_valid(self) -> bool {
        match self {
            Joystick::Joy(n) => (1..=MAX_JOYSTICKS).contains(&n),
            Joystick::None | Joystick::All => true,
        }
    }

    #[inline]
    pub fn is_none(self) -> bool {
        matches!(self, Joystick::None)
    }
}

impl fmt::Display for Joystick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Joystick::None => f.write_str("none"),
            Joystick::All => f.write_str("all"),
            Joystick::Joy(n) => write!(f, "joy{n}"),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum Repr {
    Index(u8),
    Name(String),
}

impl Serialize for Joystick {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Joystick::None => Repr::Name("none".into()),
            Joystick::All => Repr::Name("all".into()),
            Joystick::Joy(n) => Repr::Index(*n),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Joystick {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        use serde::de::Error as _;

        match Repr::deserialize(deserializer)? {
            Repr::Index(n) => Joystick::joy(n).map_err(D::Error::custom),
            Repr::Name(s) => match s.to_ascii_lowercase().as_str() {
                "none" => Ok(Joystick::None),
                "all" | "any" => Ok(Joystick::All),
                other => Err(D::Error::custom(format!(
                    "expected \"all\", \"none\" or a joystick index, got `{other}`"
                ))),
            },
        }
    }
}
