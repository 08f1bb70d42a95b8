use engine::audio::SquareTone;
use serde::{Deserialize, Serialize};

/// Shared SFX volume constants (0.0..=1.0).
///
/// These are used by the tone table below and validated by tests.
pub const MOVE_SFX_VOLUME: f32 = 0.1;
pub const DROP_SFX_VOLUME: f32 = 0.2;
pub const LINE_CLEAR_SFX_VOLUME: f32 = 0.3;
pub const BIG_EVENT_SFX_VOLUME: f32 = 0.4;
pub const START_SFX_VOLUME: f32 = 0.3;

/// Volume of every melody note.
pub const MUSIC_VOLUME: f32 = 0.15;

const TETRIS_DUTY: f32 = 0.25;

/// One-shot sound effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sfx {
    Move,
    Rotate,
    Drop,
    LineClear,
    TetrisClear,
    GameOver,
    Start,
}

impl Sfx {
    pub const ALL: [Sfx; 7] = [
        Sfx::Move,
        Sfx::Rotate,
        Sfx::Drop,
        Sfx::LineClear,
        Sfx::TetrisClear,
        Sfx::GameOver,
        Sfx::Start,
    ];

    pub fn tone(self) -> SquareTone {
        match self {
            Sfx::Move => SquareTone::new(300, 50, MOVE_SFX_VOLUME),
            Sfx::Rotate => SquareTone::new(400, 50, MOVE_SFX_VOLUME),
            Sfx::Drop => SquareTone::new(150, 80, DROP_SFX_VOLUME),
            Sfx::LineClear => SquareTone::new(880, 200, LINE_CLEAR_SFX_VOLUME),
            Sfx::TetrisClear => {
                SquareTone::new(1200, 400, BIG_EVENT_SFX_VOLUME).with_duty(TETRIS_DUTY)
            }
            Sfx::GameOver => SquareTone::new(80, 500, BIG_EVENT_SFX_VOLUME),
            Sfx::Start => SquareTone::new(600, 400, START_SFX_VOLUME),
        }
    }
}
