//! Scripted input with frame edges.
//!
//! [`VirtualInput`] keeps the current frame's channel values plus the values
//! from the previous frame, which is enough to answer `button_down` /
//! `button_up`. Call [`VirtualInput::end_frame`] once per tick after the host
//! has read input.

use crate::source::InputSource;
use crate::state::ChannelState;

#[derive(Clone, Debug, Default)]
pub struct VirtualInput {
    current: ChannelState,
    previous: ChannelState,
}

impl VirtualInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing snapshot. The previous frame is empty, so held
    /// buttons report as pressed this frame.
    pub fn from_state(state: ChannelState) -> Self {
        Self {
            current: state,
            previous: ChannelState::default(),
        }
    }

    /// Convenience method to set an axis value.
    pub fn set_axis(&mut self, channel: &str, value: f32) {
        self.current.set_axis(channel, value);
    }

    pub fn press_button(&mut self, channel: &str) {
        self.current.set_button(channel, true);
    }

    pub fn release_button(&mut self, channel: &str) {
        self.current.set_button(channel, false);
    }

    /// Center every axis and release every button.
    pub fn reset(&mut self) {
        self.current.clear();
    }

    /// Advance one frame: the current values become the previous frame.
    pub fn end_frame(&mut self) {
        self.previous = self.current.clone();
    }

    /// Values for the frame in progress.
    pub fn state(&self) -> &ChannelState {
        &self.current
    }
}

impl InputSource for VirtualInput {
    fn button(&self, channel: &str) -> bool {
        self.current.get_button(channel)
    }

    fn button_down(&self, channel: &str) -> bool {
        self.current.get_button(channel) && !self.previous.get_button(channel)
    }

    fn button_up(&self, channel: &str) -> bool {
        !self.current.get_button(channel) && self.previous.get_button(channel)
    }

    fn axis(&self, channel: &str) -> f32 {
        self.current.get_axis(channel)
    }
}
