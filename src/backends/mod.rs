//! Input backends for `stickup-names`.
//!
//! Implementations of [`InputSource`](crate::source::InputSource) that the
//! crate ships itself. Engine bindings implement the trait in their own crates.
//!
//! - [`virtual_input`] — scripted, frame-stepped input for tests, demos and
//!   replay tooling.

pub mod virtual_input;
