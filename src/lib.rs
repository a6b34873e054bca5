//! stickup-names — device-agnostic input identifiers for string-keyed input backends.
//!
//! Many engine input layers address channels by name (`"Joy2-Axis05"`,
//! `"MouseButton0"`). This crate gives those channels a small, typed
//! identifier space ([`InputId`]) plus a device selector ([`Joystick`]),
//! resolves identifiers to channel names through a memoizing [`NameCache`],
//! and answers "what is being pressed or moved right now" with [`Poller`].
//!
//! The crate never reads hardware. The host implements [`InputSource`] over
//! its backend (or uses [`ChannelState`] / [`VirtualInput`]).
//!
//! ```
//! use stickup_names::{InputId, Joystick, NameCache, Poller, VirtualInput};
//!
//! let names = NameCache::new();
//! let mut input = VirtualInput::new();
//! input.press_button("Joy1-Button04");
//!
//! let poller = Poller::new(&names, &input);
//! assert_eq!(poller.poll_button(Joystick::Joy(1)), InputId::Button4);
//! assert!(poller.button_down(InputId::Button4, Joystick::Joy(1)));
//! ```

pub mod backends;
pub mod binding;
pub mod config;
pub mod error;
pub mod id;
pub mod joystick;
pub mod logger;
pub mod names;
pub mod poll;
pub mod source;
pub mod state;

pub use backends::virtual_input::VirtualInput;
pub use binding::{Binding, BindingOutput, BindingProfile};
pub use config::PollSettings;
pub use error::{Error, Result};
pub use id::{InputClass, InputId};
pub use joystick::{Joystick, MAX_JOYSTICKS};
pub use logger::Logged;
pub use names::{derive_name, NameCache};
pub use poll::{poll_key, Poller, DEFAULT_DEADZONE, POLL_ALL_THRESHOLD};
pub use source::InputSource;
pub use state::ChannelState;
