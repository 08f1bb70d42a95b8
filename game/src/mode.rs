use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Title,
    Menu,
    Playing,
    Paused,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModeEvent {
    Confirm,
    /// A new piece could not be placed.
    ToppedOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModeEffect {
    None,
    OpenMenu,
    StartSession,
    Pause,
    Resume,
    EndSession,
}

impl Mode {
    /// Pure transition function for the screen state machine.
    ///
    /// The caller applies the returned effect to the session (reset, music, sound).
    pub fn handle(self, event: ModeEvent) -> (Mode, ModeEffect) {
        match (self, event) {
            (Mode::Title, ModeEvent::Confirm) => (Mode::Menu, ModeEffect::OpenMenu),
            (Mode::Menu, ModeEvent::Confirm) => (Mode::Playing, ModeEffect::StartSession),
            (Mode::Playing, ModeEvent::Confirm) => (Mode::Paused, ModeEffect::Pause),
            (Mode::Paused, ModeEvent::Confirm) => (Mode::Playing, ModeEffect::Resume),
            (Mode::Playing, ModeEvent::ToppedOut) => (Mode::GameOver, ModeEffect::EndSession),
            (Mode::GameOver, ModeEvent::Confirm) => (Mode::Title, ModeEffect::None),

            // Ignore irrelevant events in the current state.
            (mode, _) => (mode, ModeEffect::None),
        }
    }

    /// Whether the field and pieces are on screen.
    pub fn shows_field(self) -> bool {
        matches!(self, Mode::Playing | Mode::Paused | Mode::GameOver)
    }
}
