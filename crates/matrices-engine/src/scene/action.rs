use super::shape::RectStyle;
use super::state::Scene;

/// A discrete user action on the scene.
///
/// The action layer never passes magnitudes; transform amounts are fixed
/// constants owned by `transform`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum SceneAction {
    AddRectangle(RectStyle),
    Clear,
    Translate,
    Rotate,
    Scale,
}

impl Scene {
    /// Applies one action. Every action completes before returning and none can fail.
    pub fn apply(&mut self, action: SceneAction) {
        match action {
            SceneAction::AddRectangle(style) => self.add_rectangle(style),
            SceneAction::Clear => self.clear(),
            SceneAction::Translate => self.translate(),
            SceneAction::Rotate => self.rotate(),
            SceneAction::Scale => self.scale(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{ScreenSize, Vertex};

    #[test]
    fn any_action_sequence_keeps_buffer_in_lockstep() {
        let actions = [
            SceneAction::AddRectangle(RectStyle::Outline),
            SceneAction::Rotate,
            SceneAction::AddRectangle(RectStyle::Fill),
            SceneAction::Scale,
            SceneAction::AddRectangle(RectStyle::Outline),
            SceneAction::Translate,
            SceneAction::Clear,
            SceneAction::AddRectangle(RectStyle::Fill),
            SceneAction::Translate,
            SceneAction::AddRectangle(RectStyle::Outline),
            SceneAction::Rotate,
        ];

        let mut scene = Scene::with_screen_size(ScreenSize::new(640.0, 480.0));
        for action in actions {
            scene.apply(action);
            let expected: usize = scene.shapes().iter().map(|s| s.vertex_count()).sum();
            assert_eq!(scene.vertex_count(), expected, "after {action:?}");
            assert!(scene.flattened_matches_shapes(), "after {action:?}");
        }
        assert_eq!(scene.shapes().len(), 2);
    }

    #[test]
    fn shape_added_after_transform_is_untransformed() {
        let mut scene = Scene::with_screen_size(ScreenSize::new(300.0, 600.0));
        scene.apply(SceneAction::AddRectangle(RectStyle::Outline));
        scene.apply(SceneAction::Translate);
        scene.apply(SceneAction::AddRectangle(RectStyle::Fill));

        assert_eq!(scene.vertices()[0], Vertex::new(-40.0, -50.0));
        assert_eq!(scene.vertices()[5], Vertex::new(-50.0, -50.0));
        assert!(scene.flattened_matches_shapes());
    }

    #[test]
    fn transforms_after_clear_leave_scene_empty() {
        let mut scene = Scene::with_screen_size(ScreenSize::new(300.0, 600.0));
        scene.apply(SceneAction::AddRectangle(RectStyle::Outline));
        scene.apply(SceneAction::Clear);
        scene.apply(SceneAction::Translate);
        scene.apply(SceneAction::Rotate);
        scene.apply(SceneAction::Scale);

        assert!(scene.is_empty());
        assert!(scene.vertices().is_empty());
    }

    #[test]
    fn translate_action_moves_geometry() {
        let mut scene = Scene::with_screen_size(ScreenSize::new(300.0, 600.0));
        scene.apply(SceneAction::AddRectangle(RectStyle::Outline));
        scene.apply(SceneAction::Translate);
        assert_eq!(scene.vertices()[0], Vertex::new(-40.0, -50.0));
    }
}
