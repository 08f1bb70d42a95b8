use crate::bag::Bag;
use crate::field::{Field, LockOutcome, TETRIS_ROWS};
use crate::input::InputEvent;
use crate::mode::{Mode, ModeEffect, ModeEvent};
use crate::music::MusicChoice;
use crate::piece::Piece;
use crate::scoring::{self, MAX_START_LEVEL};
use crate::sfx::Sfx;
use crate::snapshot::GameSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusicCommand {
    /// Restart the sequencer on this choice.
    Start(MusicChoice),
    Suspend,
    Resume,
}

/// Side effects requested by the game, drained by the loop driver each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEffect {
    Sfx(Sfx),
    Music(MusicCommand),
}

/// The whole game session: screens, field, pieces and scoring.
#[derive(Debug, Clone)]
pub struct Game {
    mode: Mode,
    field: Field,
    bag: Bag,
    current: Piece,
    next: Piece,
    score: u32,
    lines: u32,
    level: u32,
    drop_interval_ms: u32,
    drop_timer_ms: u32,
    start_level: u32,
    music_choice: MusicChoice,
    effects: Vec<GameEffect>,
}

impl Game {
    pub fn new(seed: u64) -> Self {
        let mut bag = Bag::new(seed);
        bag.refill();
        let current = Piece::new(bag.next_shape());
        let next = Piece::new(bag.next_shape());
        Self {
            mode: Mode::Title,
            field: Field::new(),
            bag,
            current,
            next,
            score: 0,
            lines: 0,
            level: 0,
            drop_interval_ms: scoring::drop_interval_ms(0),
            drop_timer_ms: 0,
            start_level: 0,
            music_choice: MusicChoice::A,
            effects: Vec::new(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn current(&self) -> &Piece {
        &self.current
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn start_level(&self) -> u32 {
        self.start_level
    }

    pub fn music_choice(&self) -> MusicChoice {
        self.music_choice
    }

    /// Takes the effects queued since the last call, oldest first.
    pub fn drain_effects(&mut self) -> Vec<GameEffect> {
        std::mem::take(&mut self.effects)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let on_field = self.mode.shows_field();
        GameSnapshot {
            mode: self.mode,
            grid: self.field.rows().to_vec(),
            active: on_field.then_some(self.current),
            next: on_field.then_some(self.next),
            score: self.score,
            level: self.level,
            lines: self.lines,
            start_level: self.start_level,
            music_choice: self.music_choice,
        }
    }

    /// Applies one button press. `Quit` is handled by the loop driver and ignored here.
    pub fn handle_input(&mut self, input: InputEvent) {
        match self.mode {
            Mode::Title | Mode::Paused | Mode::GameOver => {
                if input == InputEvent::Confirm {
                    self.apply_mode_event(ModeEvent::Confirm);
                }
            }
            Mode::Menu => self.handle_menu_input(input),
            Mode::Playing => self.handle_play_input(input),
        }
    }

    /// Advances gravity by `dt_ms`. Only runs while playing.
    pub fn update(&mut self, dt_ms: u32) {
        if self.mode != Mode::Playing {
            return;
        }

        self.drop_timer_ms = self.drop_timer_ms.saturating_add(dt_ms);
        if self.drop_timer_ms > self.drop_interval_ms {
            self.drop_timer_ms = 0;
            if self.field.collides(&self.current, 0, 1) {
                self.lock_current();
            } else {
                self.current.y += 1;
            }
        }
    }

    fn handle_menu_input(&mut self, input: InputEvent) {
        let levels = MAX_START_LEVEL + 1;
        match input {
            InputEvent::Up => self.start_level = (self.start_level + 1) % levels,
            InputEvent::Down => self.start_level = (self.start_level + levels - 1) % levels,
            InputEvent::Right => self.music_choice = self.music_choice.next(),
            InputEvent::Left => self.music_choice = self.music_choice.prev(),
            InputEvent::Confirm => {
                self.apply_mode_event(ModeEvent::Confirm);
                return;
            }
            InputEvent::Quit => return,
        }
        self.effects.push(GameEffect::Sfx(Sfx::Move));
    }

    fn handle_play_input(&mut self, input: InputEvent) {
        match input {
            InputEvent::Left => self.try_shift(-1),
            InputEvent::Right => self.try_shift(1),
            InputEvent::Down => {
                if !self.field.collides(&self.current, 0, 1) {
                    self.current.y += 1;
                    self.score = self.score.saturating_add(1);
                }
            }
            InputEvent::Up => {
                let before = self.current.matrix;
                self.current.rotate();
                if self.field.collides(&self.current, 0, 0) {
                    self.current.matrix = before;
                } else {
                    self.effects.push(GameEffect::Sfx(Sfx::Rotate));
                }
            }
            InputEvent::Confirm => self.apply_mode_event(ModeEvent::Confirm),
            InputEvent::Quit => {}
        }
    }

    fn try_shift(&mut self, dx: i32) {
        if !self.field.collides(&self.current, dx, 0) {
            self.current.x += dx;
            self.effects.push(GameEffect::Sfx(Sfx::Move));
        }
    }

    fn apply_mode_event(&mut self, event: ModeEvent) {
        let (next_mode, effect) = self.mode.handle(event);
        if next_mode != self.mode {
            log::debug!("mode {:?} -> {:?}", self.mode, next_mode);
        }
        self.mode = next_mode;

        match effect {
            ModeEffect::None => {}
            ModeEffect::OpenMenu => self.effects.push(GameEffect::Sfx(Sfx::Start)),
            ModeEffect::StartSession => {
                self.reset_session();
                self.effects.push(GameEffect::Sfx(Sfx::Start));
                log::info!(
                    "session started at level {} with music {}",
                    self.start_level,
                    self.music_choice.label()
                );
            }
            ModeEffect::Pause => self.effects.push(GameEffect::Music(MusicCommand::Suspend)),
            ModeEffect::Resume => self.effects.push(GameEffect::Music(MusicCommand::Resume)),
            ModeEffect::EndSession => {
                self.effects.push(GameEffect::Sfx(Sfx::GameOver));
                self.effects.push(GameEffect::Music(MusicCommand::Suspend));
                log::info!(
                    "game over: score {} lines {} level {}",
                    self.score,
                    self.lines,
                    self.level
                );
            }
        }
    }

    fn reset_session(&mut self) {
        self.field.clear();
        self.score = 0;
        self.lines = 0;
        self.level = self.start_level;
        self.drop_interval_ms = scoring::drop_interval_ms(self.level);
        self.drop_timer_ms = 0;
        self.bag.refill();
        self.current = Piece::new(self.bag.next_shape());
        self.next = Piece::new(self.bag.next_shape());
        self.effects
            .push(GameEffect::Music(MusicCommand::Start(self.music_choice)));
    }

    fn lock_current(&mut self) {
        self.effects.push(GameEffect::Sfx(Sfx::Drop));
        if self.field.lock(&self.current) == LockOutcome::Overflow {
            self.apply_mode_event(ModeEvent::ToppedOut);
            return;
        }

        let rows = self.field.clear_full_rows();
        if rows > 0 {
            self.score = self
                .score
                .saturating_add(scoring::line_clear_points(rows, self.level));
            self.lines = self.lines.saturating_add(rows as u32);
            self.level = scoring::level_for(self.level, self.lines);
            self.drop_interval_ms = scoring::drop_interval_ms(self.level);
            let sfx = if rows == TETRIS_ROWS {
                Sfx::TetrisClear
            } else {
                Sfx::LineClear
            };
            self.effects.push(GameEffect::Sfx(sfx));
        }

        self.current = Piece::new(self.next.shape);
        self.next = Piece::new(self.bag.next_shape());
        if self.field.collides(&self.current, 0, 0) {
            self.apply_mode_event(ModeEvent::ToppedOut);
        }
    }

    #[cfg(test)]
    pub(crate) fn field_mut(&mut self) -> &mut Field {
        &mut self.field
    }

    #[cfg(test)]
    pub(crate) fn current_mut(&mut self) -> &mut Piece {
        &mut self.current
    }
}
