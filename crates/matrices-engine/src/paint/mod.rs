//! Colour model for clear values.
//!
//! Shape colour is fixed in the scene shader; only the surface clear colour is
//! configurable from the CPU side.

mod color;

pub use color::Color;
