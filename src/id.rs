//! Abstract input identifiers and their classification.
//!
//! [`InputId`] is a small ordinal space shared by every device:
//!
//! | range            | identifiers                      | ordinals |
//! |------------------|----------------------------------|----------|
//! | unknown          | `Unknown`                        | `0`      |
//! | joystick axes    | `Axis1` .. `Axis28`              | `1..=28` |
//! | mouse axes       | `MouseAxis1` .. `MouseAxis3`     | `29..=31`|
//! | joystick buttons | `Button0` .. `Button19`          | `32..=51`|
//! | mouse buttons    | `MouseButton0` .. `MouseButton6` | `52..=58`|
//!
//! The ranges are contiguous and disjoint. The `is_*` predicates below are the
//! only place range membership is decided; the name resolver and the poller
//! both go through them.
//!
//! # Example
//! ```
//! use stickup_names::InputId;
//!
//! assert!(InputId::Axis7.is_joystick_axis());
//! assert!(InputId::MouseButton0.is_button());
//! assert!(!InputId::Unknown.is_axis());
//! assert_eq!(InputId::from_ordinal(32), Some(InputId::Button0));
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! input_ids {
    ($($variant:ident = $ord:literal),+ $(,)?) => {
        /// Device-agnostic input identifier.
        ///
        /// Serialized by variant name (e.g. `"Axis3"`, `"MouseButton1"`).
        /// Deserialization goes through `FromStr`, so case is ignored.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[repr(u8)]
        pub enum InputId {
            $($variant = $ord,)+
        }

        impl InputId {
            /// Every identifier, indexed by ordinal.
            pub const ALL: &'static [InputId] = &[$(InputId::$variant,)+];

            /// Variant name, as used by `Display`, `FromStr` and serde.
            pub const fn name(self) -> &'static str {
                match self {
                    $(InputId::$variant => stringify!($variant),)+
                }
            }
        }
    };
}

input_ids! {
    Unknown = 0,

    Axis1 = 1, Axis2 = 2, Axis3 = 3, Axis4 = 4, Axis5 = 5, Axis6 = 6, Axis7 = 7,
    Axis8 = 8, Axis9 = 9, Axis10 = 10, Axis11 = 11, Axis12 = 12, Axis13 = 13, Axis14 = 14,
    Axis15 = 15, Axis16 = 16, Axis17 = 17, Axis18 = 18, Axis19 = 19, Axis20 = 20, Axis21 = 21,
    Axis22 = 22, Axis23 = 23, Axis24 = 24, Axis25 = 25, Axis26 = 26, Axis27 = 27, Axis28 = 28,

    MouseAxis1 = 29, MouseAxis2 = 30, MouseAxis3 = 31,

    Button0 = 32, Button1 = 33, Button2 = 34, Button3 = 35, Button4 = 36,
    Button5 = 37, Button6 = 38, Button7 = 39, Button8 = 40, Button9 = 41,
    Button10 = 42, Button11 = 43, Button12 = 44, Button13 = 45, Button14 = 46,
    Button15 = 47, Button16 = 48, Button17 = 49, Button18 = 50, Button19 = 51,

    MouseButton0 = 52, MouseButton1 = 53, MouseButton2 = 54, MouseButton3 = 55,
    MouseButton4 = 56, MouseButton5 = 57, MouseButton6 = 58,
}

/// First joystick axis.
pub const JOYSTICK_AXIS_FIRST: InputId = InputId::Axis1;
/// Last joystick axis.
pub const JOYSTICK_AXIS_LAST: InputId = InputId::Axis28;
pub const MOUSE_AXIS_FIRST: InputId = InputId::MouseAxis1;
pub const MOUSE_AXIS_LAST: InputId = InputId::MouseAxis3;
pub const JOYSTICK_BUTTON_FIRST: InputId = InputId::Button0;
pub const JOYSTICK_BUTTON_LAST: InputId = InputId::Button19;
pub const MOUSE_BUTTON_FIRST: InputId = InputId::MouseButton0;
pub const MOUSE_BUTTON_LAST: InputId = InputId::MouseButton6;

/// Which of the four usable ranges an identifier belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputClass {
    JoystickAxis,
    MouseAxis,
    JoystickButton,
    MouseButton,
}

#[inline]
const fn within(id: InputId, first: InputId, last: InputId) -> bool {
    let v = id as u8;
    v >= first as u8 && v <= last as u8
}

impl InputId {
    /// Ordinal value of this identifier.
    #[inline]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Look up an identifier by ordinal. `None` outside the space.
    #[inline]
    pub fn from_ordinal(ordinal: u8) -> Option<InputId> {
        Self::ALL.get(ordinal as usize).copied()
    }

    /// `true` for the `Unknown` sentinel.
    #[inline]
    pub const fn is_unknown(self) -> bool {
        matches!(self, InputId::Unknown)
    }

    #[inline]
    pub const fn is_joystick_axis(self) -> bool {
        within(self, JOYSTICK_AXIS_FIRST, JOYSTICK_AXIS_LAST)
    }

    #[inline]
    pub const fn is_mouse_axis(self) -> bool {
        within(self, MOUSE_AXIS_FIRST, MOUSE_AXIS_LAST)
    }

    /// Joystick or mouse axis.
    #[inline]
    pub const fn is_axis(self) -> bool {
        self.is_joystick_axis() || self.is_mouse_axis()
    }

    #[inline]
    pub const fn is_joystick_button(self) -> bool {
        within(self, JOYSTICK_BUTTON_FIRST, JOYSTICK_BUTTON_LAST)
    }

    #[inline]
    pub const fn is_mouse_button(self) -> bool {
        within(self, MOUSE_BUTTON_FIRST, MOUSE_BUTTON_LAST)
    }

    /// Joystick or mouse button.
    #[inline]
    pub const fn is_button(self) -> bool {
        self.is_joystick_button() || self.is_mouse_button()
    }

    /// The single range this identifier falls in, or `None` for `Unknown`.
    pub const fn class(self) -> Option<InputClass> {
        if self.is_joystick_axis() {
            Some(InputClass::JoystickAxis)
        } else if self.is_mouse_axis() {
            Some(InputClass::MouseAxis)
        } else if self.is_joystick_button() {
            Some(InputClass::JoystickButton)
        } else if self.is_mouse_button() {
            Some(InputClass::MouseButton)
        } else {
            None
        }
    }

    /// Identifiers from `first` to `last` inclusive, in ascending ordinal order.
    pub fn range(first: InputId, last: InputId) -> impl DoubleEndedIterator<Item = InputId> {
        let lo = first as usize;
        let hi = last as usize + 1;
        Self::ALL[lo..hi.max(lo)].iter().copied()
    }
}

/// Free-function form of [`InputId::is_joystick_axis`].
pub const fn is_joystick_axis(id: InputId) -> bool {
    id.is_joystick_axis()
}

/// Free-function form of [`InputId::is_mouse_axis`].
pub const fn is_mouse_axis(id: InputId) -> bool {
    id.is_mouse_axis()
}

/// Free-function form of [`InputId::is_axis`].
pub const fn is_axis(id: InputId) -> bool {
    id.is_axis()
}

/// Free-function form of [`InputId::is_joystick_button`].
pub const fn is_joystick_button(id: InputId) -> bool {
    id.is_joystick_button()
}

/// Free-function form of [`InputId::is_mouse_button`].
pub const fn is_mouse_button(id: InputId) -> bool {
    id.is_mouse_button()
}

/// Free-function form of [`InputId::is_button`].
pub const fn is_button(id: InputId) -> bool {
    id.is_button()
}

impl Default for InputId {
    fn default() -> Self {
        InputId::Unknown
    }
}

impl From<InputId> for u8 {
    fn from(id: InputId) -> u8 {
        id.ordinal()
    }
}

impl TryFrom<u8> for InputId {
    type Error = Error;

    fn try_from(ordinal: u8) -> Result<Self> {
        InputId::from_ordinal(ordinal).ok_or(Error::InvalidOrdinal(ordinal))
    }
}

impl fmt::Display for InputId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InputId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        InputId::ALL
            .iter()
            .copied()
            .find(|id| id.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownIdentifier(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for InputId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        use serde::de::Error as _;

        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}
