use matrices_engine::coords::ScreenSize;
use matrices_engine::core::{App, AppControl, FrameCtx};
use matrices_engine::input::Key;
use matrices_engine::paint::Color;
use matrices_engine::render::SceneRenderer;
use matrices_engine::scene::{DrawBatcher, Scene};

use crate::bindings::{Binding, KeyBindings};

/// Interactive scene editor: key presses become scene actions, and every frame
/// uploads the scene and draws one call per shape.
pub struct StudioApp {
    scene: Scene,
    batcher: DrawBatcher,
    renderer: SceneRenderer,
    bindings: KeyBindings,
    clear_color: Color,
}

impl StudioApp {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            scene: Scene::new(),
            batcher: DrawBatcher::new(),
            renderer: SceneRenderer::new(),
            bindings,
            clear_color: Color::CREAM,
        }
    }

    /// Handles one key press. Returns `Exit` for the quit binding.
    fn handle_key(&mut self, key: Key) -> AppControl {
        match self.bindings.resolve(key) {
            Some(Binding::Scene(action)) => {
                self.scene.apply(action);
                log::info!(
                    "{action:?}: {} shapes, {} vertices",
                    self.scene.shapes().len(),
                    self.scene.vertex_count()
                );
                AppControl::Continue
            }
            Some(Binding::Quit) => AppControl::Exit,
            None => {
                log::trace!("unbound key {key}");
                AppControl::Continue
            }
        }
    }
}

impl App for StudioApp {
    fn on_resize(&mut self, size: ScreenSize) {
        self.scene.on_resize(size);
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        for &key in &ctx.input.keys_pressed {
            if self.handle_key(key) == AppControl::Exit {
                return AppControl::Exit;
            }
        }

        let draws = self.batcher.produce(&self.scene);
        let scene = &self.scene;
        let renderer = &mut self.renderer;

        ctx.render(self.clear_color, |rctx, target| {
            renderer.render(rctx, target, scene, draws);
        })
    }
}

#[cfg(test)]
mod tests {
    use matrices_engine::coords::Vertex;

    use super::*;

    fn app() -> StudioApp {
        let mut app = StudioApp::new(KeyBindings::default());
        app.on_resize(ScreenSize::new(300.0, 600.0));
        app
    }

    #[test]
    fn key_presses_drive_the_scene() {
        let mut app = app();
        app.handle_key(Key::Digit2);
        app.handle_key(Key::Digit1);
        app.handle_key(Key::M);

        assert_eq!(app.scene.shapes().len(), 2);
        assert_eq!(app.scene.vertices()[0], Vertex::new(-40.0, -50.0));
    }

    #[test]
    fn clear_key_empties_scene() {
        let mut app = app();
        app.handle_key(Key::Digit1);
        app.handle_key(Key::C);
        assert!(app.scene.is_empty());
    }

    #[test]
    fn escape_exits_and_unbound_continues() {
        let mut app = app();
        assert_eq!(app.handle_key(Key::Escape), AppControl::Exit);
        assert_eq!(app.handle_key(Key::Unknown(0)), AppControl::Continue);
    }
}
