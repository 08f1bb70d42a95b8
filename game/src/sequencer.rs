use engine::audio::SquareTone;

use crate::audio::AudioService;
use crate::music::{MusicChoice, Note, UNIT_MS};
use crate::sfx::MUSIC_VOLUME;

/// Notes are held for 95% of their slot so repeated pitches stay distinct.
const NOTE_HOLD_PERCENT: u32 = 95;

/// Steps through a melody on its own millisecond schedule.
#[derive(Debug, Clone)]
pub struct Sequencer {
    track: &'static [Note],
    index: usize,
    next_due_ms: u64,
    playing: bool,
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl Sequencer {
    pub fn new() -> Self {
        Self {
            track: &[],
            index: 0,
            next_due_ms: 0,
            playing: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn next_due_ms(&self) -> u64 {
        self.next_due_ms
    }

    /// Starts `choice` from its first note on the next tick at or after `now_ms`.
    pub fn set_track(&mut self, choice: MusicChoice, now_ms: u64, audio: &mut dyn AudioService) {
        self.track = choice.track();
        self.index = 0;
        self.next_due_ms = now_ms;
        self.playing = true;
        audio.stop_tone();
    }

    /// Stops advancing; the position is kept for [`Sequencer::resume`].
    pub fn suspend(&mut self) {
        self.playing = false;
    }

    pub fn resume(&mut self) {
        self.playing = true;
    }

    pub fn tick(&mut self, now_ms: u64, audio: &mut dyn AudioService) {
        if !self.playing || self.track.is_empty() || now_ms < self.next_due_ms {
            return;
        }

        let note = self.track[self.index % self.track.len()];
        let slot_ms = note.units * UNIT_MS;
        audio.play_tone(SquareTone::new(
            note.frequency_hz,
            slot_ms * NOTE_HOLD_PERCENT / 100,
            MUSIC_VOLUME,
        ));
        self.index = (self.index + 1) % self.track.len();
        self.next_due_ms = now_ms + slot_ms as u64;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{AudioCall, RecordingAudio};
    use crate::music::TRACK_A;

    #[test]
    fn idle_sequencer_is_silent() {
        let mut seq = Sequencer::new();
        let mut audio = RecordingAudio::default();
        seq.tick(10_000, &mut audio);
        assert!(audio.calls.is_empty());
    }

    #[test]
    fn set_track_stops_voice_and_plays_immediately() {
        let mut seq = Sequencer::new();
        let mut audio = RecordingAudio::default();
        seq.set_track(MusicChoice::A, 1_000, &mut audio);
        seq.tick(1_000, &mut audio);

        // E5 for 4 units: 280ms slot, 266ms held.
        assert_eq!(
            audio.calls,
            vec![
                AudioCall::StopTone,
                AudioCall::Tone(SquareTone::new(659, 266, MUSIC_VOLUME)),
            ]
        );
        assert_eq!(seq.index(), 1);
        assert_eq!(seq.next_due_ms(), 1_280);
    }

    #[test]
    fn waits_for_the_slot_to_elapse() {
        let mut seq = Sequencer::new();
        let mut audio = RecordingAudio::default();
        seq.set_track(MusicChoice::A, 0, &mut audio);
        seq.tick(0, &mut audio);
        seq.tick(279, &mut audio);
        assert_eq!(audio.tones().len(), 1);
        seq.tick(280, &mut audio);
        assert_eq!(audio.tones().len(), 2);
        assert_eq!(audio.tones()[1].frequency_hz, 494);
    }

    #[test]
    fn index_wraps_at_track_end() {
        let mut seq = Sequencer::new();
        let mut audio = RecordingAudio::default();
        seq.set_track(MusicChoice::A, 0, &mut audio);
        let mut now = 0;
        for _ in 0..TRACK_A.len() {
            seq.tick(now, &mut audio);
            now = seq.next_due_ms();
        }
        assert_eq!(seq.index(), 0);
    }

    #[test]
    fn suspend_keeps_position() {
        let mut seq = Sequencer::new();
        let mut audio = RecordingAudio::default();
        seq.set_track(MusicChoice::C, 0, &mut audio);
        seq.tick(0, &mut audio);
        seq.tick(140, &mut audio);
        seq.suspend();
        seq.tick(5_000, &mut audio);
        assert_eq!(seq.index(), 2);
        assert_eq!(audio.tones().len(), 2);

        seq.resume();
        seq.tick(5_000, &mut audio);
        assert_eq!(seq.index(), 3);
    }

    #[test]
    fn switching_tracks_restarts_from_first_note() {
        let mut seq = Sequencer::new();
        let mut audio = RecordingAudio::default();
        seq.set_track(MusicChoice::A, 0, &mut audio);
        seq.tick(0, &mut audio);
        seq.set_track(MusicChoice::B, 100, &mut audio);
        assert_eq!(seq.index(), 0);
        seq.tick(100, &mut audio);
        assert_eq!(audio.calls.last(), Some(&AudioCall::Tone(SquareTone::new(659, 266, MUSIC_VOLUME))));
    }

    #[test]
    fn off_track_is_a_no_op() {
        let mut seq = Sequencer::new();
        let mut audio = RecordingAudio::default();
        seq.set_track(MusicChoice::Off, 0, &mut audio);
        for now in [0, 70, 10_000] {
            seq.tick(now, &mut audio);
        }
        assert_eq!(audio.calls, vec![AudioCall::StopTone]);
    }
}
