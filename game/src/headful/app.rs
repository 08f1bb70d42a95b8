use engine::app::{AppContext, AppControl, GameApp, InputFrame};
use engine::graphics::Renderer2d;

use crate::audio::AudioService;
use crate::console::{Console, TickOutcome};
use crate::game::Game;
use crate::render;

use super::input_adapter::events_from_frame;

/// Windowed host for a [`Console`]. The console itself is the app state.
pub struct PocketBlocksApp {
    seed: u64,
    audio: Option<Box<dyn AudioService>>,
}

impl PocketBlocksApp {
    pub fn new(seed: u64, audio: Box<dyn AudioService>) -> Self {
        Self {
            seed,
            audio: Some(audio),
        }
    }
}

impl GameApp for PocketBlocksApp {
    type State = Console<Box<dyn AudioService>>;

    fn init_state(&mut self, _ctx: &mut AppContext) -> Self::State {
        let audio = self
            .audio
            .take()
            .unwrap_or_else(|| Box::new(crate::audio::NullAudio));
        Console::new(Game::new(self.seed), audio)
    }

    fn update_state(
        &mut self,
        state: &mut Self::State,
        input: &InputFrame,
        dt_ms: u32,
        _ctx: &mut AppContext,
    ) -> AppControl {
        let events = events_from_frame(input);
        match state.tick(&events, dt_ms) {
            TickOutcome::Continue => AppControl::Continue,
            TickOutcome::Quit => {
                log::info!("quit requested");
                AppControl::Exit
            }
        }
    }

    fn render(&mut self, state: &Self::State, renderer: &mut dyn Renderer2d) {
        render::draw(renderer, &state.snapshot(), state.clock_ms());
    }
}
