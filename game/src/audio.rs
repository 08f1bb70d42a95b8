use engine::audio::SquareTone;

use crate::sfx::Sfx;

/// Fire-and-forget sound output.
///
/// There is one music voice: a new `play_tone` replaces whatever note is sounding. Effects mix
/// on top of it.
pub trait AudioService {
    fn play_tone(&mut self, tone: SquareTone);
    fn stop_tone(&mut self);
    fn play_sfx(&mut self, sfx: Sfx);
}

impl<A: AudioService + ?Sized> AudioService for Box<A> {
    fn play_tone(&mut self, tone: SquareTone) {
        (**self).play_tone(tone);
    }

    fn stop_tone(&mut self) {
        (**self).stop_tone();
    }

    fn play_sfx(&mut self, sfx: Sfx) {
        (**self).play_sfx(sfx);
    }
}

/// Discards everything. Used when no output device is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioService for NullAudio {
    fn play_tone(&mut self, _tone: SquareTone) {}
    fn stop_tone(&mut self) {}
    fn play_sfx(&mut self, _sfx: Sfx) {}
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AudioCall {
    Tone(SquareTone),
    StopTone,
    Sfx(Sfx),
}

/// Keeps every request in order, for headless runs and tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingAudio {
    pub calls: Vec<AudioCall>,
}

impl RecordingAudio {
    pub fn sfx(&self) -> Vec<Sfx> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                AudioCall::Sfx(sfx) => Some(*sfx),
                _ => None,
            })
            .collect()
    }

    pub fn tones(&self) -> Vec<SquareTone> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                AudioCall::Tone(tone) => Some(*tone),
                _ => None,
            })
            .collect()
    }
}

impl AudioService for RecordingAudio {
    fn play_tone(&mut self, tone: SquareTone) {
        self.calls.push(AudioCall::Tone(tone));
    }

    fn stop_tone(&mut self) {
        self.calls.push(AudioCall::StopTone);
    }

    fn play_sfx(&mut self, sfx: Sfx) {
        self.calls.push(AudioCall::Sfx(sfx));
    }
}
