//! Action bindings over input identifiers.
//!
//! A [`BindingProfile`] maps action names to `(InputId, Joystick)` pairs.
//! Resolving a profile reads each bound input through a [`Poller`], so the
//! profile never deals with backend channel names directly.
//!
//! ```
//! use stickup_names::{BindingProfile, ChannelState, NameCache, Poller};
//!
//! let profile = BindingProfile::from_toml_str(r#"
//!     name = "flight"
//!
//!     [[bindings]]
//!     action = "pitch"
//!     input = "Axis2"
//!     joystick = 1
//!     invert = true
//!
//!     [[bindings]]
//!     action = "fire"
//!     input = "Button0"
//! "#).unwrap();
//!
//! let mut state = ChannelState::default();
//! state.set_axis("Joy1-Axis02", 0.5);
//! state.set_button("JoyAll-Button00", true);
//!
//! let names = NameCache::new();
//! let out = profile.resolve(&Poller::new(&names, &state));
//! assert_eq!(out.axis["pitch"], -0.5);
//! assert!(out.buttons["fire"]);
//! ```

use crate::error::Result;
use crate::id::InputId;
use crate::joystick::Joystick;
use crate::poll::Poller;
use crate::source::InputSource;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Maps one input to a named action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Binding {
    pub action: String,
    pub input: InputId,
    #[serde(default)]
    pub joystick: Joystick,
    #[serde(default)]
    pub invert: bool,
    /// Axis values with a smaller magnitude resolve to `0.0`. Ignored for buttons.
    #[serde(default)]
    pub deadzone: f32,
}

/// Serializable profile of input bindings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BindingProfile {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub bindings: Vec<Binding>,
}

/// Action values produced by [`BindingProfile::resolve`].
#[derive(Default, Debug, Serialize, Deserialize)]
pub struct BindingOutput {
    pub axis: HashMap<String, f32>,
    pub buttons: HashMap<String, bool>,
}

impl BindingProfile {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Resolves bound actions from the poller's source.
    ///
    /// Axis bindings go to `axis` (inverted, then deadzoned), button bindings
    /// to `buttons`. Bindings on `Unknown` are skipped.
    pub fn resolve<S: InputSource + ?Sized>(&self, poller: &Poller<'_, S>) -> BindingOutput {
        let mut output = BindingOutput::default();

        for binding in &self.bindings {
            let id = binding.input;
            if id.is_axis() {
                let mut value = poller.axis(id, binding.joystick);
                if binding.invert {
                    value *= -1.0;
                }
                if value.abs() < binding.deadzone {
                    value = 0.0;
                }
                output.axis.insert(binding.action.clone(), value);
            } else if id.is_button() {
                let pressed = poller.button(id, binding.joystick);
                output.buttons.insert(binding.action.clone(), pressed);
            }
        }

        output
    }

    /// Bindings for `action`, in profile order.
    pub fn bindings_for<'a>(&'a self, action: &'a str) -> impl Iterator<Item = &'a Binding> + 'a {
        self.bindings.iter().filter(move |b| b.action == action)
    }
}
