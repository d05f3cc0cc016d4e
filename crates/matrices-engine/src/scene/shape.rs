use crate::coords::Vertex;

/// Rectangle kind requested by the action layer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum RectStyle {
    /// Closed outline, drawn as a line strip.
    Outline,
    /// Solid rectangle, drawn as two independent triangles.
    Fill,
}

/// A shape record in the scene.
///
/// Vertex counts are fixed per kind:
/// - `Outlined`: BL, BR, TR, TL, BL (the repeat closes the loop)
/// - `Filled`: BL, BR, TR, TR, TL, BL (triangles `(BL,BR,TR)` and `(TR,TL,BL)`)
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Outlined { vertices: [Vertex; 5] },
    Filled { vertices: [Vertex; 6] },
}

impl Shape {
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        match self {
            Shape::Outlined { vertices } => vertices.as_slice(),
            Shape::Filled { vertices } => vertices.as_slice(),
        }
    }

    #[inline]
    pub(crate) fn vertices_mut(&mut self) -> &mut [Vertex] {
        match self {
            Shape::Outlined { vertices } => vertices.as_mut_slice(),
            Shape::Filled { vertices } => vertices.as_mut_slice(),
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    #[inline]
    pub fn style(&self) -> RectStyle {
        match self {
            Shape::Outlined { .. } => RectStyle::Outline,
            Shape::Filled { .. } => RectStyle::Fill,
        }
    }
}
