//! Snapshot of named channel values.
//!
//! [`ChannelState`] is an owned map of channel name → value, keyed by the same
//! strings the [`NameCache`](crate::names::NameCache) produces. It is the
//! simplest [`InputSource`]: a host that already collects per-frame values
//! (from an event loop, a network feed, a replay file) fills one in and polls
//! against it.
//!
//! # Semantics
//! - Missing axes read `0.0`, missing buttons read released.
//! - A snapshot has no notion of frames, so `button_down`/`button_up` are
//!   always `false`. Use [`VirtualInput`](crate::backends::virtual_input::VirtualInput)
//!   when edges matter.
//!
//! # Example
//! ```
//! use stickup_names::{ChannelState, InputSource};
//!
//! let mut state = ChannelState::default();
//! state.set_axis("JoyAll-Axis02", -0.4);
//! state.set_button("MouseButton0", true);
//!
//! assert_eq!(state.axis("JoyAll-Axis02"), -0.4);
//! assert!(state.button("MouseButton0"));
//! assert!(!state.button("MouseButton1"));
//! ```

use crate::error::Result;
use crate::source::InputSource;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Current axis/button values by channel name.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelState {
    pub axes: HashMap<String, f32>,
    pub buttons: HashMap<String, bool>,
}

impl ChannelState {
    /// Parse a snapshot from JSON (`{"axes": {...}, "buttons": {...}}`).
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Gets the value of a named axis (0.0 if missing).
    pub fn get_axis(&self, name: &str) -> f32 {
        self.axes.get(name).copied().unwrap_or(0.0)
    }

    /// Gets the state of a named button (false if missing).
    pub fn get_button(&self, name: &str) -> bool {
        self.buttons.get(name).copied().unwrap_or(false)
    }

    pub fn set_axis(&mut self, name: impl Into<String>, value: f32) {
        self.axes.insert(name.into(), value);
    }

    pub fn set_button(&mut self, name: impl Into<String>, pressed: bool) {
        self.buttons.insert(name.into(), pressed);
    }

    /// Drop every value.
    pub fn clear(&mut self) {
        self.axes.clear();
        self.buttons.clear();
    }
}

impl InputSource for ChannelState {
    fn button(&self, channel: &str) -> bool {
        self.get_button(channel)
    }

    fn button_down(&self, _channel: &str) -> bool {
        false
    }

    fn button_up(&self, _channel: &str) -> bool {
        false
    }

    fn axis(&self, channel: &str) -> f32 {
        self.get_axis(channel)
    }
}
