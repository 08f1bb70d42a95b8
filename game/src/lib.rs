pub mod audio;
pub mod bag;
pub mod console;
pub mod field;
pub mod game;
pub mod headful;
pub mod input;
pub mod mode;
pub mod music;
pub mod piece;
pub mod render;
pub mod scoring;
pub mod sequencer;
pub mod settings;
pub mod sfx;
pub mod shapes;
pub mod snapshot;
