//! Backend channel names and the name cache.
//!
//! The input backend addresses channels by string. [`derive_name`] maps an
//! `(InputId, Joystick)` pair to that string, and [`NameCache`] memoizes the
//! result so the hot polling path doesn't re-format names every tick.
//!
//! ## Naming convention
//! | class          | `Joystick::All`      | `Joystick::Joy(n)`   |
//! |----------------|----------------------|----------------------|
//! | joystick axis  | `JoyAll-Axis{ord:02}`  | `Joy{n}-Axis{ord:02}`  |
//! | mouse axis     | `MouseAxis{k}`       | `MouseAxis{k}`       |
//! | joystick button| `JoyAll-Button{k:02}`| `Joy{n}-Button{k:02}`|
//! | mouse button   | `MouseButton{k}`     | `MouseButton{k}`     |
//!
//! Joystick axes carry the identifier's own ordinal (`Axis1` → `01`), while
//! joystick buttons carry the offset from `Button0`. Mouse axes are 1-based,
//! mouse buttons 0-based. Mice are never multiplexed by device index.
//!
//! `Unknown` has no name. Under [`Joystick::None`] joystick inputs have no
//! name while mouse inputs keep theirs. A `Joy(n)` outside
//! `1..=MAX_JOYSTICKS` resolves to nothing.
//!
//! # Example
//! ```
//! use stickup_names::{InputId, Joystick, NameCache};
//!
//! let names = NameCache::new();
//! assert_eq!(names.resolve(InputId::Axis3, Joystick::All).as_deref(), Some("JoyAll-Axis03"));
//! assert_eq!(names.resolve(InputId::Button2, Joystick::Joy(2)).as_deref(), Some("Joy2-Button02"));
//! assert_eq!(names.resolve(InputId::Unknown, Joystick::All), None);
//! ```

use crate::id::{InputClass, InputId, JOYSTICK_BUTTON_FIRST, MOUSE_AXIS_FIRST, MOUSE_BUTTON_FIRST};
use crate::joystick::Joystick;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::trace;

/// Derive the backend channel name for `id` on `joystick`, without caching.
pub fn derive_name(id: InputId, joystick: Joystick) -> Option<String> {
    if id.is_unknown() || !joystick.is_valid() {
        return None;
    }

    let ord = id.ordinal();
    let name = match id.class() {
        Some(InputClass::MouseAxis) => {
            format!("MouseAxis{}", ord - MOUSE_AXIS_FIRST.ordinal() + 1)
        }
        Some(InputClass::MouseButton) => {
            format!("MouseButton{}", ord - MOUSE_BUTTON_FIRST.ordinal())
        }
        Some(InputClass::JoystickAxis) => match joystick {
            Joystick::None => return None,
            Joystick::All => format!("JoyAll-Axis{ord:02}"),
            Joystick::Joy(n) => format!("Joy{n}-Axis{ord:02}"),
        },
        Some(InputClass::JoystickButton) => {
            let k = ord - JOYSTICK_BUTTON_FIRST.ordinal();
            match joystick {
                Joystick::None => return None,
                Joystick::All => format!("JoyAll-Button{k:02}"),
                Joystick::Joy(n) => format!("Joy{n}-Button{k:02}"),
            }
        }
        None => unreachable!("{id:?} falls outside every input range"),
    };
    Some(name)
}

/// Memoizing name resolver.
///
/// Construct one at startup and share it by reference. Entries are never
/// evicted: names depend only on the fixed identifier space, so the cache is
/// bounded by `InputId::ALL.len() * (MAX_JOYSTICKS + 2)`.
///
/// The map sits behind a mutex, so a `&NameCache` may be shared across
/// threads. Two threads missing on the same key both compute the same value.
#[derive(Debug, Default)]
pub struct NameCache {
    entries: Mutex<HashMap<(InputId, Joystick), Option<Arc<str>>>>,
}

impl NameCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the channel name for `id` on `joystick`.
    ///
    /// Returns `None` for `Unknown` and for out-of-range joystick indices,
    /// without touching the cache, and for joystick inputs under
    /// [`Joystick::None`]. The returned handle is cheap to clone.
    pub fn resolve(&self, id: InputId, joystick: Joystick) -> Option<Arc<str>> {
        if id.is_unknown() || !joystick.is_valid() {
            return None;
        }

        let key = (id, joystick);
        if let Some(hit) = self.entries.lock().get(&key) {
            return hit.clone();
        }

        let derived: Option<Arc<str>> = derive_name(id, joystick).map(Arc::from);
        trace!(?id, %joystick, name = ?derived.as_deref(), "name cache miss");

        self.entries
            .lock()
            .entry(key)
            .or_insert(derived)
            .clone()
    }

    /// Number of cached keys.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::joystick::MAX_JOYSTICKS;

    #[test]
    fn wildcard_names() {
        let cases = [
            (InputId::Axis1, "JoyAll-Axis01"),
            (InputId::Axis28, "JoyAll-Axis28"),
            (InputId::MouseAxis1, "MouseAxis1"),
            (InputId::MouseAxis3, "MouseAxis3"),
            (InputId::Button0, "JoyAll-Button00"),
            (InputId::Button19, "JoyAll-Button19"),
            (InputId::MouseButton0, "MouseButton0"),
            (InputId::MouseButton6, "MouseButton6"),
        ];
        for (id, expected) in cases {
            assert_eq!(derive_name(id, Joystick::All).as_deref(), Some(expected));
        }
    }

    #[test]
    fn specific_device_names() {
        let joy = Joystick::Joy(3);
        assert_eq!(derive_name(InputId::Axis7, joy).as_deref(), Some("Joy3-Axis07"));
        assert_eq!(derive_name(InputId::Button12, joy).as_deref(), Some("Joy3-Button12"));
        assert_eq!(
            derive_name(InputId::Axis2, Joystick::Joy(MAX_JOYSTICKS)).as_deref(),
            Some("Joy16-Axis02")
        );
        assert_eq!(derive_name(InputId::MouseAxis2, joy).as_deref(), Some("MouseAxis2"));
        assert_eq!(derive_name(InputId::MouseButton4, joy).as_deref(), Some("MouseButton4"));
    }

    #[test]
    fn unknown_and_no_device_joystick_inputs_have_no_name() {
        for joy in [Joystick::All, Joystick::None, Joystick::Joy(1)] {
            assert_eq!(derive_name(InputId::Unknown, joy), None);
        }
        assert_eq!(derive_name(InputId::Axis1, Joystick::None), None);
        assert_eq!(derive_name(InputId::Button0, Joystick::None), None);
    }

    #[test]
    fn mouse_names_ignore_the_selector() {
        let names = NameCache::new();
        for id in InputId::range(MOUSE_AXIS_FIRST, crate::id::MOUSE_AXIS_LAST)
            .chain(InputId::range(MOUSE_BUTTON_FIRST, crate::id::MOUSE_BUTTON_LAST))
        {
            let any = names.resolve(id, Joystick::All);
            assert!(any.is_some());
            assert_eq!(names.resolve(id, Joystick::None), any);
            assert_eq!(names.resolve(id, Joystick::Joy(4)), any);
        }
    }

    #[test]
    fn out_of_range_devices_have_no_name_and_are_not_cached() {
        let names = NameCache::new();
        for joy in [Joystick::Joy(0), Joystick::Joy(MAX_JOYSTICKS + 1), Joystick::Joy(200)] {
            assert_eq!(derive_name(InputId::Axis1, joy), None);
            assert_eq!(derive_name(InputId::MouseAxis1, joy), None);
            assert_eq!(names.resolve(InputId::Button0, joy), None);
        }
        assert!(names.is_empty());
    }

    #[test]
    fn every_usable_identifier_has_a_name() {
        for &id in InputId::ALL.iter().filter(|id| !id.is_unknown()) {
            assert!(derive_name(id, Joystick::All).is_some(), "{id} has no wildcard name");
            assert!(derive_name(id, Joystick::Joy(1)).is_some(), "{id} has no device name");
        }
    }

    #[test]
    fn joystick_forms_differ_only_by_device_prefix() {
        for &id in InputId::ALL.iter().filter(|id| !id.is_unknown()) {
            let any = derive_name(id, Joystick::All).unwrap();
            let one = derive_name(id, Joystick::Joy(5)).unwrap();
            if id.is_joystick_axis() || id.is_joystick_button() {
                assert_eq!(any.strip_prefix("JoyAll"), one.strip_prefix("Joy5"));
            } else {
                assert_eq!(any, one);
            }
        }
    }

    #[test]
    fn cache_is_idempotent_and_keyed_by_device() {
        let names = NameCache::new();
        assert!(names.is_empty());

        let a = names.resolve(InputId::Axis4, Joystick::All);
        let b = names.resolve(InputId::Axis4, Joystick::Joy(2));
        assert_eq!(names.len(), 2);

        let again = names.resolve(InputId::Axis4, Joystick::All);
        assert_eq!(a, again);
        assert!(Arc::ptr_eq(a.as_ref().unwrap(), again.as_ref().unwrap()));
        assert_eq!(names.resolve(InputId::Axis4, Joystick::Joy(2)), b);
        assert_eq!(names.len(), 2);
    }

    #[test]
    fn unknown_bypasses_cache_but_no_device_is_cached() {
        let names = NameCache::new();
        assert_eq!(names.resolve(InputId::Unknown, Joystick::All), None);
        assert!(names.is_empty());

        assert_eq!(names.resolve(InputId::Button1, Joystick::None), None);
        assert_eq!(names.len(), 1);
        assert_eq!(names.resolve(InputId::Button1, Joystick::None), None);
        assert_eq!(names.len(), 1);
        assert_eq!(
            names.resolve(InputId::MouseButton1, Joystick::None).as_deref(),
            Some("MouseButton1")
        );
        assert_eq!(names.len(), 2);
    }

    #[test]
    fn cached_output_matches_derivation() {
        let names = NameCache::new();
        for joy in [Joystick::All, Joystick::Joy(1), Joystick::Joy(9), Joystick::None] {
            for &id in InputId::ALL {
                let first = names.resolve(id, joy);
                let second = names.resolve(id, joy);
                assert_eq!(first, second);
                assert_eq!(first.as_deref(), derive_name(id, joy).as_deref());
            }
        }
    }

    #[test]
    fn shared_across_threads() {
        let names = Arc::new(NameCache::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let names = Arc::clone(&names);
                std::thread::spawn(move || {
                    for &id in InputId::ALL {
                        names.resolve(id, Joystick::All);
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(names.len(), InputId::ALL.len() - 1);
    }
}
