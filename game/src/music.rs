//! Background melodies.

use serde::{Deserialize, Serialize};

/// Length of one duration unit.
pub const UNIT_MS: u32 = 70;

/// One melody step: pitch and length in [`UNIT_MS`] units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Note {
    pub frequency_hz: u32,
    pub units: u32,
}

const fn n(frequency_hz: u32, units: u32) -> Note {
    Note {
        frequency_hz,
        units,
    }
}

mod pitch {
    pub const GS4: u32 = 415;
    pub const A4: u32 = 440;
    pub const B4: u32 = 494;
    pub const C5: u32 = 523;
    pub const D5: u32 = 587;
    pub const E5: u32 = 659;
    pub const F5: u32 = 698;
    pub const G5: u32 = 784;
    pub const A5: u32 = 880;
}

use pitch::*;

/// Korobeiniki.
#[rustfmt::skip]
pub const TRACK_A: &[Note] = &[
    n(E5, 4), n(B4, 2), n(C5, 2), n(D5, 4), n(C5, 2), n(B4, 2),
    n(A4, 4), n(A4, 2), n(C5, 2), n(E5, 4), n(D5, 2), n(C5, 2),
    n(B4, 6), n(C5, 2), n(D5, 4), n(E5, 4), n(C5, 4), n(A4, 4),
    n(A4, 8), n(D5, 4), n(F5, 2), n(A5, 2), n(G5, 4), n(E5, 2),
    n(C5, 2), n(E5, 6), n(C5, 2), n(E5, 4), n(D5, 2), n(C5, 2),
    n(B4, 4), n(B4, 2), n(C5, 2), n(D5, 4), n(E5, 4), n(C5, 4),
    n(A4, 4), n(A4, 4),
];

/// Troika-style march.
#[rustfmt::skip]
pub const TRACK_B: &[Note] = &[
    n(E5, 4), n(C5, 2), n(D5, 2), n(B4, 4), n(C5, 2), n(A4, 2),
    n(GS4, 4), n(B4, 2), n(E5, 2), n(D5, 4), n(C5, 2), n(B4, 2),
    n(C5, 4), n(E5, 4), n(A5, 4), n(G5, 2), n(F5, 2), n(E5, 8),
    n(C5, 4), n(E5, 4), n(D5, 4), n(B4, 2), n(C5, 2), n(D5, 4),
    n(C5, 4), n(B4, 4), n(A4, 4), n(GS4, 4), n(A4, 8),
];

/// Minuet.
#[rustfmt::skip]
pub const TRACK_C: &[Note] = &[
    n(E5, 2), n(B4, 2), n(C5, 2), n(D5, 2), n(E5, 2), n(E5, 2),
    n(E5, 4), n(D5, 2), n(E5, 2), n(F5, 2), n(G5, 2), n(E5, 4),
    n(E5, 4), n(A4, 2), n(B4, 2), n(C5, 2), n(D5, 2), n(E5, 2),
    n(D5, 2), n(C5, 2), n(B4, 2), n(A4, 8),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MusicChoice {
    #[default]
    A,
    B,
    C,
    Off,
}

impl MusicChoice {
    pub const ALL: [MusicChoice; 4] = [
        MusicChoice::A,
        MusicChoice::B,
        MusicChoice::C,
        MusicChoice::Off,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MusicChoice::A => "A-TYPE",
            MusicChoice::B => "B-TYPE",
            MusicChoice::C => "C-TYPE",
            MusicChoice::Off => "OFF",
        }
    }

    /// The silent choice maps to an empty track.
    pub fn track(self) -> &'static [Note] {
        match self {
            MusicChoice::A => TRACK_A,
            MusicChoice::B => TRACK_B,
            MusicChoice::C => TRACK_C,
            MusicChoice::Off => &[],
        }
    }

    fn position(self) -> usize {
        self as usize
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}
