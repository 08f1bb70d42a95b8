//! Windowed front-end: keyboard mapping, audio device and the `engine::app::GameApp` glue.

pub mod app;
pub mod audio_device;
pub mod input_adapter;
