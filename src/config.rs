//! Poll settings.
//!
//! [`PollSettings`] bundles the per-call knobs of the axis/button pollers so a
//! host can keep them in its own config file. Loading only; the crate never
//! writes settings back.
//!
//! ```
//! use stickup_names::{Joystick, PollSettings};
//!
//! let settings = PollSettings::from_toml_str(r#"
//!     joystick = 2
//!     include_mouse_axes = true
//! "#).unwrap();
//!
//! assert_eq!(settings.joystick, Joystick::Joy(2));
//! assert!(settings.include_mouse_axes);
//! assert_eq!(settings.deadzone, stickup_names::DEFAULT_DEADZONE);
//! ```

use crate::error::Result;
use crate::joystick::Joystick;
use crate::poll::DEFAULT_DEADZONE;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollSettings {
    /// Device to poll. Defaults to any device.
    pub joystick: Joystick,
    /// Whether axis polling also scans mouse axes.
    pub include_mouse_axes: bool,
    /// Absolute value an axis must exceed to count as moved.
    pub deadzone: f32,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            joystick: Joystick::All,
            include_mouse_axes: false,
            deadzone: DEFAULT_DEADZONE,
        }
    }
}

impl PollSettings {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}
