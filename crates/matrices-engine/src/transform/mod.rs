//! Global affine transforms.
//!
//! Transforms are baked directly into stored geometry: each call rewrites the
//! current vertex positions, so repeated calls compound. There is no model
//! matrix, transform stack or undo.

mod global;

pub use global::{apply_matrix, GlobalTransform, ROTATE_ANGLE, SCALE_FACTOR, TRANSLATE_OFFSET};
