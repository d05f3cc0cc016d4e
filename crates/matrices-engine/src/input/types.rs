use core::fmt;

/// Platform-agnostic key identifier.
///
/// Only keys with an action are named; everything else is `Key::Unknown`
/// carrying the platform key code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Digit1,
    Digit2,
    C,
    M,
    R,
    S,
    T,
    Unknown(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum KeyState {
    Pressed,
    Released,
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Unknown(code) => write!(f, "Unknown({code:#x})"),
            other => write!(f, "{other:?}"),
        }
    }
}
