use serde::{Deserialize, Serialize};

/// Logical buttons of the handheld.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputEvent {
    Left,
    Right,
    Down,
    Up,
    /// Start / A.
    Confirm,
    /// Host asked to shut down.
    Quit,
}
