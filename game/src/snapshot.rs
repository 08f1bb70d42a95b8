use serde::{Deserialize, Serialize};

use crate::field::Row;
use crate::mode::Mode;
use crate::music::MusicChoice;
use crate::piece::Piece;

/// Read-only view of a [`crate::game::Game`] handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub mode: Mode,
    pub grid: Vec<Row>,
    /// Present while the field is on screen.
    pub active: Option<Piece>,
    pub next: Option<Piece>,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub start_level: u32,
    pub music_choice: MusicChoice,
}
