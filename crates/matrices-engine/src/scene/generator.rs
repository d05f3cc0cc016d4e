//! Rectangle geometry.
//!
//! All functions are pure. Zero or negative sizes are accepted and produce
//! degenerate (collapsed or mirrored) but well-defined geometry.

use crate::coords::Vertex;

use super::shape::{RectStyle, Shape};

/// Corners in generator order: bottom-left, bottom-right, top-right, top-left.
#[inline]
fn corners(center: Vertex, size: Vertex) -> [Vertex; 4] {
    let hw = size.x / 2.0;
    let hh = size.y / 2.0;
    [
        Vertex::new(center.x - hw, center.y - hh),
        Vertex::new(center.x + hw, center.y - hh),
        Vertex::new(center.x + hw, center.y + hh),
        Vertex::new(center.x - hw, center.y + hh),
    ]
}

/// Builds a closed outline: `BL, BR, TR, TL, BL`.
pub fn make_outlined_rect(center: Vertex, size: Vertex) -> Shape {
    let [bl, br, tr, tl] = corners(center, size);
    Shape::Outlined {
        vertices: [bl, br, tr, tl, bl],
    }
}

/// Builds a triangle-list quad: `BL, BR, TR, TR, TL, BL`.
pub fn make_filled_rect(center: Vertex, size: Vertex) -> Shape {
    let [bl, br, tr, tl] = corners(center, size);
    Shape::Filled {
        vertices: [bl, br, tr, tr, tl, bl],
    }
}

#[inline]
pub fn make_rect(style: RectStyle, center: Vertex, size: Vertex) -> Shape {
    match style {
        RectStyle::Outline => make_outlined_rect(center, size),
        RectStyle::Fill => make_filled_rect(center, size),
    }
}
