pub mod app;
pub mod audio;
pub mod clock;
pub mod graphics;
pub mod pixels_renderer;
pub mod surface;
pub mod ui;

/// Simulation rate shared by the windowed host and headless runs.
pub const TICK_RATE_HZ: u32 = 60;

/// A deterministic, fixed-tick simulation.
///
/// `step` receives every input that arrived since the previous tick together with the elapsed
/// whole milliseconds, and mutates the state in place.
pub trait GameLogic {
    type State;
    type Input;

    fn initial_state(&self) -> Self::State;
    fn step(&self, state: &mut Self::State, inputs: &[Self::Input], dt_ms: u32);
}

#[derive(Debug)]
pub struct HeadlessRunner<G: GameLogic> {
    game: G,
    state: G::State,
    frame: usize,
}

impl<G: GameLogic> HeadlessRunner<G> {
    pub fn new(game: G) -> Self {
        let state = game.initial_state();
        Self {
            game,
            state,
            frame: 0,
        }
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn state(&self) -> &G::State {
        &self.state
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    /// Runs one tick with the given inputs.
    pub fn step(&mut self, inputs: &[G::Input], dt_ms: u32) -> usize {
        self.game.step(&mut self.state, inputs, dt_ms);
        self.frame += 1;
        self.frame
    }

    /// Runs `ticks` input-free ticks of `dt_ms` each.
    pub fn idle(&mut self, ticks: usize, dt_ms: u32) -> usize {
        for _ in 0..ticks {
            self.step(&[], dt_ms);
        }
        self.frame
    }

    /// Feeds each input on its own tick.
    pub fn run<I>(&mut self, inputs: I, dt_ms: u32) -> usize
    where
        I: IntoIterator<Item = G::Input>,
    {
        for input in inputs {
            self.step(std::slice::from_ref(&input), dt_ms);
        }
        self.frame
    }
}
