use crate::coords::{ScreenSize, Vertex};

use super::generator::make_rect;
use super::shape::{RectStyle, Shape};

/// Mutable scene state: typed shape records plus the flattened vertex buffer.
///
/// Invariant: `vertices` is always the in-order concatenation of every shape's
/// vertex list. Every mutating method keeps the two in lockstep.
///
/// The flattened buffer is the exact upload payload; the typed list only exists
/// so the batcher can recover per-shape topology and vertex ranges.
#[derive(Debug, Default, Clone)]
pub struct Scene {
    shapes: Vec<Shape>,
    vertices: Vec<Vertex>,
    screen_size: ScreenSize,
}

impl Scene {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_screen_size(screen_size: ScreenSize) -> Self {
        Self {
            screen_size,
            ..Self::default()
        }
    }

    /// Shapes in insertion (= paint) order.
    #[inline]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Flattened vertex buffer.
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline]
    pub fn screen_size(&self) -> ScreenSize {
        self.screen_size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Side length used for new rectangles: a square a third of the screen
    /// width. The screen height is deliberately not consulted.
    #[inline]
    pub fn default_rect_size(&self) -> Vertex {
        let side = self.screen_size.width / 3.0;
        Vertex::new(side, side)
    }

    /// Appends a rectangle centred at the origin, sized from the current screen width.
    pub fn add_rectangle(&mut self, style: RectStyle) {
        let shape = make_rect(style, Vertex::zero(), self.default_rect_size());
        self.push_shape(shape);
        log::debug!(
            "scene: added {:?} rectangle ({} shapes, {} vertices)",
            style,
            self.shapes.len(),
            self.vertices.len()
        );
    }

    fn push_shape(&mut self, shape: Shape) {
        self.vertices.extend_from_slice(shape.vertices());
        self.shapes.push(shape);
    }

    /// Removes every shape. Keeps allocated capacity and the screen size.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.vertices.clear();
        log::debug!("scene: cleared");
    }

    /// Records a new drawable size. Existing shapes are not moved or resized.
    pub fn on_resize(&mut self, screen_size: ScreenSize) {
        if self.screen_size != screen_size {
            log::debug!(
                "scene: screen size {}x{}",
                screen_size.width,
                screen_size.height
            );
        }
        self.screen_size = screen_size;
    }

    /// Rewrites every flattened vertex in place, then mirrors the result into
    /// each shape's own vertex list at the matching offset.
    pub(crate) fn map_vertices<F>(&mut self, mut f: F)
    where
        F: FnMut(Vertex) -> Vertex,
    {
        for v in &mut self.vertices {
            *v = f(*v);
        }
        self.sync_shapes();
    }

    fn sync_shapes(&mut self) {
        let mut offset = 0;
        for shape in &mut self.shapes {
            let dst = shape.vertices_mut();
            let end = offset + dst.len();
            dst.copy_from_slice(&self.vertices[offset..end]);
            offset = end;
        }
        debug_assert_eq!(offset, self.vertices.len());
    }
}

#[cfg(test)]
impl Scene {
    /// True when the flattened buffer equals the in-order concatenation of shape vertices.
    pub(crate) fn flattened_matches_shapes(&self) -> bool {
        let concat: Vec<Vertex> = self
            .shapes
            .iter()
            .flat_map(|s| s.vertices().iter().copied())
            .collect();
        concat == self.vertices
    }
}
