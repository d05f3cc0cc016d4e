use core::ops::Range;

use super::shape::Shape;
use super::state::Scene;

/// Primitive assembly mode for a vertex range.
///
/// Backend-agnostic; the renderer maps it to the GPU enum.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Topology {
    /// Connected polyline through every vertex.
    LineStrip,
    /// Independent triangles, one per 3 consecutive vertices.
    TriangleList,
}

impl Topology {
    #[inline]
    pub fn for_shape(shape: &Shape) -> Self {
        match shape {
            Shape::Outlined { .. } => Topology::LineStrip,
            Shape::Filled { .. } => Topology::TriangleList,
        }
    }
}

/// One draw call: a contiguous range of the flattened vertex buffer and the
/// topology to interpret it with.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DrawInstruction {
    pub topology: Topology,
    pub start: u32,
    pub count: u32,
}

impl DrawInstruction {
    #[inline]
    pub const fn new(topology: Topology, start: u32, count: u32) -> Self {
        Self { topology, start, count }
    }

    /// Vertex range in the form expected by `draw` calls.
    #[inline]
    pub fn vertex_range(&self) -> Range<u32> {
        self.start..self.start + self.count
    }
}

/// Splits a scene into per-shape draw instructions.
///
/// The instruction buffer is owned by the batcher and reused across frames;
/// no per-frame allocation once warmed.
#[derive(Debug, Default)]
pub struct DrawBatcher {
    instructions: Vec<DrawInstruction>,
}

impl DrawBatcher {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns one instruction per shape, in insertion order.
    ///
    /// `start` is a running offset into `scene.vertices()`. An empty scene
    /// yields an empty slice.
    pub fn produce(&mut self, scene: &Scene) -> &[DrawInstruction] {
        self.instructions.clear();

        let mut start = 0u32;
        for shape in scene.shapes() {
            let count = shape.vertex_count() as u32;
            self.instructions
                .push(DrawInstruction::new(Topology::for_shape(shape), start, count));
            start += count;
        }

        debug_assert_eq!(start as usize, scene.vertex_count());
        &self.instructions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::ScreenSize;
    use crate::scene::RectStyle;

    fn scene() -> Scene {
        Scene::with_screen_size(ScreenSize::new(300.0, 600.0))
    }

    #[test]
    fn empty_scene_has_no_draws() {
        let mut batcher = DrawBatcher::new();
        assert!(batcher.produce(&scene()).is_empty());
    }

    #[test]
    fn single_outline_is_one_line_strip() {
        let mut s = scene();
        s.add_rectangle(RectStyle::Outline);

        let mut batcher = DrawBatcher::new();
        assert_eq!(
            batcher.produce(&s),
            &[DrawInstruction::new(Topology::LineStrip, 0, 5)]
        );
    }

    #[test]
    fn mixed_shapes_keep_insertion_order_and_offsets() {
        let mut s = scene();
        s.add_rectangle(RectStyle::Fill);
        s.add_rectangle(RectStyle::Outline);

        let mut batcher = DrawBatcher::new();
        assert_eq!(
            batcher.produce(&s),
            &[
                DrawInstruction::new(Topology::TriangleList, 0, 6),
                DrawInstruction::new(Topology::LineStrip, 6, 5),
            ]
        );
    }

    #[test]
    fn ranges_cover_flattened_buffer_exactly() {
        let mut s = scene();
        for style in [RectStyle::Outline, RectStyle::Fill, RectStyle::Fill, RectStyle::Outline] {
            s.add_rectangle(style);
        }
        s.rotate();

        let mut batcher = DrawBatcher::new();
        let draws = batcher.produce(&s);
        assert_eq!(draws.len(), s.shapes().len());

        for (draw, shape) in draws.iter().zip(s.shapes()) {
            let range = draw.vertex_range();
            let slice = &s.vertices()[range.start as usize..range.end as usize];
            assert_eq!(slice, shape.vertices());
            assert_eq!(draw.topology, Topology::for_shape(shape));
        }
        assert_eq!(draws.last().map(|d| d.vertex_range().end), Some(22));
    }

    #[test]
    fn reuse_after_clear_yields_empty() {
        let mut s = scene();
        s.add_rectangle(RectStyle::Outline);

        let mut batcher = DrawBatcher::new();
        assert_eq!(batcher.produce(&s).len(), 1);

        s.clear();
        assert!(batcher.produce(&s).is_empty());
    }
}
