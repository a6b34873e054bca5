//! Tracing wrapper for input sources.
use crate::source::InputSource;
use tracing::trace;

/// Forwards every read to the inner source and emits a `TRACE` event with the
/// channel name and the value returned.
///
/// Nothing is printed unless the host installs a `tracing` subscriber with the
/// `stickup_names::logger` target enabled.
#[derive(Clone, Debug, Default)]
pub struct Logged<S> {
    inner: S,
}

impl<S> Logged<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: InputSource> InputSource for Logged<S> {
    fn button(&self, channel: &str) -> bool {
        let v = self.inner.button(channel);
        trace!(channel, pressed = v, "button");
        v
    }

    fn button_down(&self, channel: &str) -> bool {
        let v = self.inner.button_down(channel);
        trace!(channel, down = v, "button_down");
        v
    }

    fn button_up(&self, channel: &str) -> bool {
        let v = self.inner.button_up(channel);
        trace!(channel, up = v, "button_up");
        v
    }

    fn axis(&self, channel: &str) -> f32 {
        let v = self.inner.axis(channel);
        trace!(channel, value = v, "axis");
        v
    }

    fn axis_raw(&self, channel: &str) -> f32 {
        let v = self.inner.axis_raw(channel);
        trace!(channel, value = v, "axis_raw");
        v
    }
}
