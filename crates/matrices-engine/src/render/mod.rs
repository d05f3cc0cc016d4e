//! GPU rendering of the scene.
//!
//! The renderer consumes the scene's flattened vertex buffer plus the batcher's
//! draw instructions and issues one draw per instruction via wgpu.

mod ctx;
mod scene_renderer;

pub use ctx::{RenderCtx, RenderTarget};
pub use scene_renderer::SceneRenderer;
