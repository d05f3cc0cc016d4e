//! Matrices engine crate.
//!
//! The scene core (`coords`, `scene`, `transform`) is pure and platform-free:
//! rectangles are generated into a flattened vertex buffer, whole-scene affine
//! transforms are baked into that buffer in place, and the batcher splits it
//! into per-shape draw instructions.
//!
//! The remaining modules are the native boundary: wgpu device and surface,
//! the winit runtime loop, the frame driver contract and the scene renderer.

pub mod coords;
pub mod scene;
pub mod transform;

pub mod core;
pub mod device;
pub mod input;
pub mod logging;
pub mod paint;
pub mod render;
pub mod window;
