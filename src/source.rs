//! The input-read collaborator.
//!
//! The core never touches hardware. Everything it learns about the world comes
//! through an [`InputSource`], which answers questions about named channels
//! (the names produced by [`NameCache`](crate::names::NameCache)).
//!
//! Implementations live in [`state`](crate::state) (plain snapshot),
//! [`backends`](crate::backends) (frame-stepped virtual input) and
//! [`logger`](crate::logger) (tracing wrapper). Engine integrations implement
//! the trait over their own input query functions.

/// Reads named digital and analog channels from an input backend.
///
/// Reads are assumed infallible; a channel the backend doesn't know reads as
/// released / `0.0`.
pub trait InputSource {
    /// Whether the named digital channel is held.
    fn button(&self, channel: &str) -> bool;

    /// Whether the named digital channel went down this frame.
    fn button_down(&self, channel: &str) -> bool;

    /// Whether the named digital channel went up this frame.
    fn button_up(&self, channel: &str) -> bool;

    /// Current value of the named analog channel, roughly `[-1.0, 1.0]`.
    fn axis(&self, channel: &str) -> f32;

    /// Unsmoothed value of the named analog channel.
    ///
    /// Backends without smoothing can rely on the default.
    fn axis_raw(&self, channel: &str) -> f32 {
        self.axis(channel)
    }
}

impl<T: InputSource + ?Sized> InputSource for &T {
    fn button(&self, channel: &str) -> bool {
        (**self).button(channel)
    }
    fn button_down(&self, channel: &str) -> bool {
        (**self).button_down(channel)
    }
    fn button_up(&self, channel: &str) -> bool {
        (**self).button_up(channel)
    }
    fn axis(&self, channel: &str) -> f32 {
        (**self).axis(channel)
    }
    fn axis_raw(&self, channel: &str) -> f32 {
        (**self).axis_raw(channel)
    }
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn button(&self, channel: &str) -> bool {
        (**self).button(channel)
    }
    fn button_down(&self, channel: &str) -> bool {
        (**self).button_down(channel)
    }
    fn button_up(&self, channel: &str) -> bool {
        (**self).button_up(channel)
    }
    fn axis(&self, channel: &str) -> f32 {
        (**self).axis(channel)
    }
    fn axis_raw(&self, channel: &str) -> f32 {
        (**self).axis_raw(channel)
    }
}

impl<T: InputSource + ?Sized> InputSource for Box<T> {
    fn button(&self, channel: &str) -> bool {
        (**self).button(channel)
    }
    fn button_down(&self, channel: &str) -> bool {
        (**self).button_down(channel)
    }
    fn button_up(&self, channel: &str) -> bool {
        (**self).button_up(channel)
    }
    fn axis(&self, channel: &str) -> f32 {
        (**self).axis(channel)
    }
    fn axis_raw(&self, channel: &str) -> f32 {
        (**self).axis_raw(channel)
    }
}
