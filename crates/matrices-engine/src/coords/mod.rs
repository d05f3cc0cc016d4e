//! Coordinate and geometry types shared by the scene core and the renderer.
//!
//! Canonical CPU space:
//! - Physical pixels of the drawable surface
//! - Origin at the centre of the screen
//! - +X right, +Y up
//!
//! The vertex shader converts to NDC using the screen-size uniform.

mod screen_size;
mod vertex;

pub use screen_size::ScreenSize;
pub use vertex::Vertex;
