use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::coords::Vertex;
use crate::scene::Scene;

/// Offset applied by one translate step, in screen units.
pub const TRANSLATE_OFFSET: Vec3 = Vec3::new(10.0, 0.0, 0.0);

/// Angle applied by one rotate step, in radians about +Z.
pub const ROTATE_ANGLE: f32 = 5.0;

/// Uniform factor applied by one scale step.
pub const SCALE_FACTOR: f32 = 1.1;

/// One of the fixed whole-scene transforms.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GlobalTransform {
    Translate,
    Rotate,
    Scale,
}

impl GlobalTransform {
    /// Homogeneous 4x4 matrix for this step.
    pub fn matrix(self) -> Mat4 {
        match self {
            GlobalTransform::Translate => Mat4::from_translation(TRANSLATE_OFFSET),
            GlobalTransform::Rotate => Mat4::from_rotation_z(ROTATE_ANGLE),
            GlobalTransform::Scale => Mat4::from_scale(Vec3::splat(SCALE_FACTOR)),
        }
    }
}

/// Multiplies every scene vertex, as the point `(x, y, 0, 1)`, by `m` in place.
///
/// Both the flattened buffer and each shape's own vertices are updated.
/// An empty scene is left untouched.
pub fn apply_matrix(scene: &mut Scene, m: &Mat4) {
    if scene.is_empty() {
        return;
    }
    scene.map_vertices(|v| {
        let p: Vec4 = *m * Vec2::from(v).extend(0.0).extend(1.0);
        Vertex::from(p.truncate().truncate())
    });
}

impl Scene {
    /// Applies one fixed transform step to the whole scene.
    pub fn transform(&mut self, t: GlobalTransform) {
        apply_matrix(self, &t.matrix());
        log::debug!("scene: applied {:?} to {} vertices", t, self.vertex_count());
    }

    /// Moves everything by [`TRANSLATE_OFFSET`].
    #[inline]
    pub fn translate(&mut self) {
        self.transform(GlobalTransform::Translate);
    }

    /// Rotates everything about the origin by [`ROTATE_ANGLE`].
    #[inline]
    pub fn rotate(&mut self) {
        self.transform(GlobalTransform::Rotate);
    }

    /// Scales everything about the origin by [`SCALE_FACTOR`].
    #[inline]
    pub fn scale(&mut self) {
        self.transform(GlobalTransform::Scale);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::ScreenSize;
    use crate::scene::{make_outlined_rect, RectStyle};

    const EPS: f32 = 1e-4;

    fn near(v: Vertex, x: f32, y: f32) -> bool {
        Vec2::from(v).abs_diff_eq(Vec2::new(x, y), EPS)
    }

    /// Scene holding one degenerate outline collapsed onto `p`.
    fn scene_at(p: Vertex) -> Scene {
        let mut scene = Scene::new();
        scene.add_rectangle(RectStyle::Outline);
        scene.map_vertices(|_| p);
        scene
    }

    // ── translate ─────────────────────────────────────────────────────────

    #[test]
    fn translate_moves_origin_by_ten() {
        let mut scene = scene_at(Vertex::zero());
        scene.translate();
        assert_eq!(scene.vertices()[0], Vertex::new(10.0, 0.0));

        scene.translate();
        assert_eq!(scene.vertices()[0], Vertex::new(20.0, 0.0));
    }

    // ── scale ─────────────────────────────────────────────────────────────

    #[test]
    fn scale_compounds() {
        let mut scene = scene_at(Vertex::new(10.0, 10.0));
        scene.scale();
        assert!(near(scene.vertices()[0], 11.0, 11.0));

        scene.scale();
        assert!(near(scene.vertices()[0], 12.1, 12.1));
    }

    // ── rotate ────────────────────────────────────────────────────────────

    #[test]
    fn rotate_is_about_origin_in_radians() {
        let mut scene = scene_at(Vertex::new(1.0, 0.0));
        scene.rotate();
        assert!(near(scene.vertices()[0], ROTATE_ANGLE.cos(), ROTATE_ANGLE.sin()));
    }

    #[test]
    fn rotate_twice_is_sequential() {
        let mut scene = scene_at(Vertex::new(3.0, 4.0));
        scene.rotate();
        scene.rotate();

        let expected = Vec2::from_angle(2.0 * ROTATE_ANGLE).rotate(Vec2::new(3.0, 4.0));
        assert!(near(scene.vertices()[0], expected.x, expected.y));
    }

    #[test]
    fn rotation_preserves_distance_from_origin() {
        let mut scene = Scene::with_screen_size(ScreenSize::new(300.0, 600.0));
        scene.add_rectangle(RectStyle::Fill);
        scene.rotate();

        for v in scene.vertices() {
            assert!((Vec2::from(*v).length() - 50.0 * 2f32.sqrt()).abs() < 1e-3);
        }
    }

    // ── scene consistency ─────────────────────────────────────────────────

    #[test]
    fn shapes_follow_flattened_buffer() {
        let mut scene = Scene::with_screen_size(ScreenSize::new(300.0, 600.0));
        scene.add_rectangle(RectStyle::Outline);
        scene.add_rectangle(RectStyle::Fill);

        scene.scale();
        scene.translate();

        let first = scene.shapes()[0].vertices();
        let second = scene.shapes()[1].vertices();
        assert_eq!(first, &scene.vertices()[0..5]);
        assert_eq!(second, &scene.vertices()[5..11]);
        assert!(near(first[0], -45.0, -55.0));
    }

    #[test]
    fn outline_stays_closed_after_transforms() {
        let mut scene = Scene::with_screen_size(ScreenSize::new(300.0, 600.0));
        scene.add_rectangle(RectStyle::Outline);
        scene.rotate();
        scene.scale();
        scene.translate();

        let verts = scene.shapes()[0].vertices();
        assert_eq!(verts[0], verts[4]);
    }

    #[test]
    fn empty_scene_is_a_no_op() {
        let mut scene = Scene::new();
        for t in [GlobalTransform::Translate, GlobalTransform::Rotate, GlobalTransform::Scale] {
            scene.transform(t);
        }
        assert!(scene.is_empty());
        assert!(scene.vertices().is_empty());
    }

    #[test]
    fn apply_matrix_matches_generator_then_transform() {
        let mut scene = Scene::with_screen_size(ScreenSize::new(300.0, 600.0));
        scene.add_rectangle(RectStyle::Outline);
        apply_matrix(&mut scene, &Mat4::from_translation(Vec3::new(0.0, 50.0, 0.0)));

        let expected = make_outlined_rect(Vertex::new(0.0, 50.0), Vertex::new(100.0, 100.0));
        assert_eq!(scene.shapes()[0], expected);
    }
}
