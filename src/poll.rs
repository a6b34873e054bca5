//! Reading and polling identifiers through an [`InputSource`].
//!
//! [`Poller`] ties the [`NameCache`] to a source. It offers two kinds of
//! operation:
//!
//! - **Direct reads** (`button`, `button_down`, `button_up`, `axis`,
//!   `axis_raw`) for a single identifier on a given device.
//! - **Polling** (`poll_button`, `poll_axis`, `poll_axis_value`,
//!   `poll_all_axes`) which scan a range of identifiers in ascending ordinal
//!   order and report what is active. This is what "press a button to bind"
//!   screens use.
//!
//! ## Scan ranges
//! - Buttons: `Button0..=MouseButton6` (joystick buttons, then mouse buttons).
//! - Axes: `Axis1..=Axis28`, extended to `..=MouseAxis3` when mouse axes are
//!   included.
//!
//! The lowest ordinal wins when several inputs are active at once.
//! [`Joystick::None`] short-circuits every poll without touching the source.
//!
//! # Example
//! ```
//! use stickup_names::{ChannelState, InputId, Joystick, NameCache, Poller};
//!
//! let names = NameCache::new();
//! let mut state = ChannelState::default();
//! state.set_axis("JoyAll-Axis07", 0.6);
//! state.set_axis("JoyAll-Axis12", 0.9);
//!
//! let poller = Poller::new(&names, &state);
//! assert_eq!(poller.poll_axis(Joystick::All, false, 0.2), InputId::Axis7);
//! assert_eq!(poller.poll_button(Joystick::All), InputId::Unknown);
//! ```

use crate::config::PollSettings;
use crate::id::{
    InputId, JOYSTICK_AXIS_FIRST, JOYSTICK_AXIS_LAST, JOYSTICK_BUTTON_FIRST, MOUSE_AXIS_LAST,
    MOUSE_BUTTON_LAST,
};
use crate::joystick::Joystick;
use crate::names::NameCache;
use crate::source::InputSource;
use tracing::debug;

/// Default deadzone for axis polling.
pub const DEFAULT_DEADZONE: f32 = 0.15;

/// Threshold used by [`Poller::poll_all_axes`] (half of full scale).
pub const POLL_ALL_THRESHOLD: f32 = 0.5;

/// Borrowed view over a name cache and an input source.
///
/// Cheap to build; make one per tick or keep it around, it holds no state of
/// its own.
pub struct Poller<'a, S: ?Sized> {
    names: &'a NameCache,
    source: &'a S,
}

impl<'a, S: ?Sized> Clone for Poller<'a, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, S: ?Sized> Copy for Poller<'a, S> {}

impl<'a, S: InputSource + ?Sized> Poller<'a, S> {
    pub fn new(names: &'a NameCache, source: &'a S) -> Self {
        Self { names, source }
    }

    pub fn names(&self) -> &'a NameCache {
        self.names
    }

    pub fn source(&self) -> &'a S {
        self.source
    }

    // ---- direct reads ----------------------------------------------------

    /// Whether `button` is held on `joystick`. Unresolvable inputs read `false`.
    pub fn button(&self, button: InputId, joystick: Joystick) -> bool {
        self.names
            .resolve(button, joystick)
            .is_some_and(|name| self.source.button(&name))
    }

    /// Whether `button` went down this frame.
    pub fn button_down(&self, button: InputId, joystick: Joystick) -> bool {
        self.names
            .resolve(button, joystick)
            .is_some_and(|name| self.source.button_down(&name))
    }

    /// Whether `button` went up this frame.
    pub fn button_up(&self, button: InputId, joystick: Joystick) -> bool {
        self.names
            .resolve(button, joystick)
            .is_some_and(|name| self.source.button_up(&name))
    }

    /// Value of `axis` on `joystick`. Unresolvable inputs read `0.0`.
    pub fn axis(&self, axis: InputId, joystick: Joystick) -> f32 {
        self.names
            .resolve(axis, joystick)
            .map_or(0.0, |name| self.source.axis(&name))
    }

    pub fn axis_raw(&self, axis: InputId, joystick: Joystick) -> f32 {
        self.names
            .resolve(axis, joystick)
            .map_or(0.0, |name| self.source.axis_raw(&name))
    }

    // ---- polling ---------------------------------------------------------

    /// First held button, or [`InputId::Unknown`].
    pub fn poll_button(&self, joystick: Joystick) -> InputId {
        self.try_poll_button(joystick).unwrap_or(InputId::Unknown)
    }

    /// First held button, scanning joystick buttons then mouse buttons.
    pub fn try_poll_button(&self, joystick: Joystick) -> Option<InputId> {
        if joystick.is_none() {
            return None;
        }
        let hit = InputId::range(JOYSTICK_BUTTON_FIRST, MOUSE_BUTTON_LAST).find(|&id| {
            self.names
                .resolve(id, joystick)
                .is_some_and(|name| self.source.button(&name))
        });
        if let Some(id) = hit {
            debug!(?id, %joystick, "polled button");
        }
        hit
    }

    /// First axis whose absolute value exceeds `deadzone`, or [`InputId::Unknown`].
    pub fn poll_axis(&self, joystick: Joystick, include_mouse: bool, deadzone: f32) -> InputId {
        self.try_poll_axis(joystick, include_mouse, deadzone)
            .unwrap_or(InputId::Unknown)
    }

    pub fn try_poll_axis(
        &self,
        joystick: Joystick,
        include_mouse: bool,
        deadzone: f32,
    ) -> Option<InputId> {
        self.poll_axis_value(joystick, include_mouse, deadzone)
            .map(|(id, _)| id)
    }

    /// Like [`try_poll_axis`](Self::try_poll_axis), also returning the signed
    /// value that tripped the deadzone.
    pub fn poll_axis_value(
        &self,
        joystick: Joystick,
        include_mouse: bool,
        deadzone: f32,
    ) -> Option<(InputId, f32)> {
        if joystick.is_none() {
            return None;
        }
        let hit = axis_scan(include_mouse).find_map(|id| {
            let v = self.read_axis(id, joystick);
            (v.abs() > deadzone).then_some((id, v))
        });
        if let Some((id, value)) = hit {
            debug!(?id, %joystick, value, "polled axis");
        }
        hit
    }

    /// Every axis whose absolute value exceeds [`POLL_ALL_THRESHOLD`], ascending.
    ///
    /// Empty when nothing qualifies or `joystick` is [`Joystick::None`].
    pub fn poll_all_axes(&self, joystick: Joystick, include_mouse: bool) -> Vec<InputId> {
        if joystick.is_none() {
            return Vec::new();
        }
        axis_scan(include_mouse)
            .filter(|&id| self.read_axis(id, joystick).abs() > POLL_ALL_THRESHOLD)
            .collect()
    }

    // ---- settings-driven helpers ----------------------------------------

    pub fn poll_button_with(&self, settings: &PollSettings) -> InputId {
        self.poll_button(settings.joystick)
    }

    pub fn poll_axis_with(&self, settings: &PollSettings) -> InputId {
        self.poll_axis(settings.joystick, settings.include_mouse_axes, settings.deadzone)
    }

    pub fn poll_axis_value_with(&self, settings: &PollSettings) -> Option<(InputId, f32)> {
        self.poll_axis_value(settings.joystick, settings.include_mouse_axes, settings.deadzone)
    }

    pub fn poll_all_axes_with(&self, settings: &PollSettings) -> Vec<InputId> {
        self.poll_all_axes(settings.joystick, settings.include_mouse_axes)
    }

    fn read_axis(&self, id: InputId, joystick: Joystick) -> f32 {
        self.names
            .resolve(id, joystick)
            .map_or(0.0, |name| self.source.axis(&name))
    }
}

fn axis_scan(include_mouse: bool) -> impl Iterator<Item = InputId> {
    let last = if include_mouse {
        MOUSE_AXIS_LAST
    } else {
        JOYSTICK_AXIS_LAST
    };
    InputId::range(JOYSTICK_AXIS_FIRST, last)
}

/// First key in `keys` for which `is_pressed` holds.
///
/// Keyboards aren't part of the identifier space; the host supplies whatever
/// key enumeration its backend has.
pub fn poll_key<K, I, F>(keys: I, mut is_pressed: F) -> Option<K>
where
    I: IntoIterator<Item = K>,
    F: FnMut(&K) -> bool,
{
    keys.into_iter().find(|k| is_pressed(k))
}
