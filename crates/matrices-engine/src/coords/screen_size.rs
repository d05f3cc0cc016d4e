/// Drawable surface size in physical pixels.
///
/// Consumed by the shape generator for default rectangle sizing and uploaded as
/// the screen-size uniform every frame.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ScreenSize {
    pub width: f32,
    pub height: f32,
}

impl ScreenSize {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the 2-float uniform payload, clamped so the shader never divides by zero.
    #[inline]
    pub fn uniform(self) -> [f32; 2] {
        [self.width.max(1.0), self.height.max(1.0)]
    }
}

impl From<winit::dpi::PhysicalSize<u32>> for ScreenSize {
    #[inline]
    fn from(size: winit::dpi::PhysicalSize<u32>) -> Self {
        Self::new(size.width as f32, size.height as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_size_uniform_is_clamped() {
        let s = ScreenSize::default();
        assert_eq!(s.uniform(), [1.0, 1.0]);
    }

    #[test]
    fn from_physical_size() {
        let s = ScreenSize::from(winit::dpi::PhysicalSize::new(300u32, 600u32));
        assert_eq!(s, ScreenSize::new(300.0, 600.0));
        assert_eq!(s.uniform(), [300.0, 600.0]);
    }
}
