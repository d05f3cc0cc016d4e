use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::input::{Key, KeyState};

/// Translates a winit key event into `(key, state, repeat)`.
pub(crate) fn translate_key_event(event: &KeyEvent) -> (Key, KeyState, bool) {
    let state = match event.state {
        ElementState::Pressed => KeyState::Pressed,
        ElementState::Released => KeyState::Released,
    };
    (map_key(event.physical_key), state, event.repeat)
}

pub(crate) fn map_key(pk: PhysicalKey) -> Key {
    // NativeKeyCode has no stable numeric form; report it as code 0.
    let PhysicalKey::Code(code) = pk else {
        return Key::Unknown(0);
    };

    match code {
        KeyCode::Escape => Key::Escape,
        KeyCode::Digit1 | KeyCode::Numpad1 => Key::Digit1,
        KeyCode::Digit2 | KeyCode::Numpad2 => Key::Digit2,
        KeyCode::KeyC => Key::C,
        KeyCode::KeyM => Key::M,
        KeyCode::KeyR => Key::R,
        KeyCode::KeyS => Key::S,
        KeyCode::KeyT => Key::T,
        other => Key::Unknown(other as u32),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bound_keys_map() {
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::KeyR)), Key::R);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Digit1)), Key::Digit1);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Numpad2)), Key::Digit2);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Escape)), Key::Escape);
    }

    #[test]
    fn unmapped_code_is_unknown() {
        assert_eq!(
            map_key(PhysicalKey::Code(KeyCode::KeyQ)),
            Key::Unknown(KeyCode::KeyQ as u32)
        );
    }
}
