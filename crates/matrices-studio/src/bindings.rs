use matrices_engine::input::Key;
use matrices_engine::scene::{RectStyle, SceneAction};

/// What a key press does.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Binding {
    Scene(SceneAction),
    Quit,
}

/// Key → action table.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    entries: Vec<(Key, Binding)>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        use Binding::{Quit, Scene};
        Self {
            entries: vec![
                (Key::Digit1, Scene(SceneAction::AddRectangle(RectStyle::Outline))),
                (Key::Digit2, Scene(SceneAction::AddRectangle(RectStyle::Fill))),
                (Key::C, Scene(SceneAction::Clear)),
                (Key::M, Scene(SceneAction::Translate)),
                (Key::T, Scene(SceneAction::Translate)),
                (Key::R, Scene(SceneAction::Rotate)),
                (Key::S, Scene(SceneAction::Scale)),
                (Key::Escape, Quit),
            ],
        }
    }
}

impl KeyBindings {
    pub fn resolve(&self, key: Key) -> Option<Binding> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, b)| *b)
    }

    /// One line per binding, for the startup help text.
    pub fn describe(&self) -> impl Iterator<Item = String> + '_ {
        self.entries.iter().map(|(key, binding)| {
            let what = match binding {
                Binding::Scene(SceneAction::AddRectangle(RectStyle::Outline)) => "add outlined rectangle",
                Binding::Scene(SceneAction::AddRectangle(RectStyle::Fill)) => "add filled rectangle",
                Binding::Scene(SceneAction::Clear) => "clear",
                Binding::Scene(SceneAction::Translate) => "move",
                Binding::Scene(SceneAction::Rotate) => "rotate",
                Binding::Scene(SceneAction::Scale) => "scale",
                Binding::Quit => "quit",
            };
            format!("{:>8}  {what}", key.to_string())
        })
    }
}
