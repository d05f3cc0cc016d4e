use super::types::{Key, KeyState};

/// Per-frame keyboard deltas.
///
/// Presses are kept in arrival order so that each press maps to exactly one
/// discrete action, even when several arrive between two frames.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Keys pressed this frame, in arrival order. OS auto-repeat is excluded.
    pub keys_pressed: Vec<Key>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.keys_pressed.clear();
    }

    /// Records a key transition. Releases and repeats are dropped.
    pub fn push_key(&mut self, key: Key, state: KeyState, repeat: bool) {
        if state == KeyState::Pressed && !repeat {
            self.keys_pressed.push(key);
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys_pressed.is_empty()
    }
}
