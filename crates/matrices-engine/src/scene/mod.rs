//! Scene state and draw batching.
//!
//! Responsibilities:
//! - generate rectangle geometry (`generator`)
//! - store typed shapes alongside the flattened upload buffer (`Scene`)
//! - resolve per-shape primitive topology into draw instructions (`DrawBatcher`)

mod action;
mod batch;
mod generator;
mod shape;
mod state;

pub use action::SceneAction;
pub use batch::{DrawBatcher, DrawInstruction, Topology};
pub use generator::{make_filled_rect, make_outlined_rect, make_rect};
pub use shape::{RectStyle, Shape};
pub use state::Scene;
