use std::marker::PhantomData;

use engine::GameLogic;

use crate::audio::{AudioService, RecordingAudio};
use crate::game::{Game, GameEffect, MusicCommand};
use crate::input::InputEvent;
use crate::sequencer::Sequencer;
use crate::snapshot::GameSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Quit,
}

/// Fixed-tick loop driver.
///
/// Per tick, in order: queued input, sequencer, gravity. Effects raised by the game are routed to
/// the audio service or the sequencer as soon as they are produced.
#[derive(Debug)]
pub struct Console<A> {
    game: Game,
    sequencer: Sequencer,
    audio: A,
    clock_ms: u64,
}

impl<A: AudioService> Console<A> {
    pub fn new(game: Game, audio: A) -> Self {
        Self {
            game,
            sequencer: Sequencer::new(),
            audio,
            clock_ms: 0,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    /// Milliseconds of simulated time since boot.
    pub fn clock_ms(&self) -> u64 {
        self.clock_ms
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.game.snapshot()
    }

    pub fn tick(&mut self, inputs: &[InputEvent], dt_ms: u32) -> TickOutcome {
        self.clock_ms += dt_ms as u64;

        for &input in inputs {
            if input == InputEvent::Quit {
                return TickOutcome::Quit;
            }
            self.game.handle_input(input);
            self.dispatch_effects();
        }

        self.sequencer.tick(self.clock_ms, &mut self.audio);

        self.game.update(dt_ms);
        self.dispatch_effects();
        TickOutcome::Continue
    }

    fn dispatch_effects(&mut self) {
        for effect in self.game.drain_effects() {
            match effect {
                GameEffect::Sfx(sfx) => self.audio.play_sfx(sfx),
                GameEffect::Music(MusicCommand::Start(choice)) => {
                    self.sequencer
                        .set_track(choice, self.clock_ms, &mut self.audio);
                }
                GameEffect::Music(MusicCommand::Suspend) => self.sequencer.suspend(),
                GameEffect::Music(MusicCommand::Resume) => self.sequencer.resume(),
            }
        }
    }
}

/// [`GameLogic`] adapter so a [`Console`] can be driven by [`engine::HeadlessRunner`].
#[derive(Debug)]
pub struct HeadlessConsole<A = RecordingAudio> {
    seed: u64,
    _audio: PhantomData<fn() -> A>,
}

impl<A> HeadlessConsole<A> {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            _audio: PhantomData,
        }
    }
}

impl<A: AudioService + Default> GameLogic for HeadlessConsole<A> {
    type State = Console<A>;
    type Input = InputEvent;

    fn initial_state(&self) -> Self::State {
        Console::new(Game::new(self.seed), A::default())
    }

    fn step(&self, state: &mut Self::State, inputs: &[Self::Input], dt_ms: u32) {
        state.tick(inputs, dt_ms);
    }
}
