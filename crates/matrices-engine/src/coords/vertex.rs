use bytemuck::{Pod, Zeroable};

/// 2D vertex position.
///
/// This is both the CPU-side geometry unit and the GPU vertex layout: a slice of
/// `Vertex` is uploaded as-is with `bytemuck::cast_slice`.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub x: f32,
    pub y: f32,
}

impl Vertex {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

impl From<glam::Vec2> for Vertex {
    #[inline]
    fn from(v: glam::Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vertex> for glam::Vec2 {
    #[inline]
    fn from(v: Vertex) -> Self {
        glam::Vec2::new(v.x, v.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_two_packed_floats() {
        assert_eq!(std::mem::size_of::<Vertex>(), 8);
        let verts = [Vertex::new(1.0, 2.0), Vertex::new(3.0, 4.0)];
        let floats: &[f32] = bytemuck::cast_slice(&verts);
        assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn glam_round_trip_keeps_components() {
        let v = Vertex::new(-5.5, 7.25);
        let g: glam::Vec2 = v.into();
        assert_eq!(Vertex::from(g), v);
    }
}
