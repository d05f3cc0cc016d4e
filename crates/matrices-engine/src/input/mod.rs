//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! `platform` translates platform keyboard events into `Key`s for the runtime.

mod frame;
mod types;

pub(crate) mod platform;

pub use frame::InputFrame;
pub use types::{Key, KeyState};
