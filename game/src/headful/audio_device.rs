use std::sync::Arc;
use std::time::Duration;

use engine::audio::{SAMPLE_RATE, SquareTone, ToneCache};
use rodio::{OutputStream, OutputStreamHandle, Sink};

use crate::audio::AudioService;
use crate::settings::AudioSettings;
use crate::sfx::Sfx;

/// A cached mono tone played once.
#[derive(Debug, Clone)]
pub struct ToneSource {
    samples: Arc<[f32]>,
    pos: usize,
}

impl ToneSource {
    pub fn new(samples: Arc<[f32]>) -> Self {
        Self { samples, pos: 0 }
    }
}

impl Iterator for ToneSource {
    type Item = f32;

    fn next(&mut self) -> Option<Self::Item> {
        let sample = self.samples.get(self.pos).copied()?;
        self.pos += 1;
        Some(sample)
    }
}

impl rodio::Source for ToneSource {
    fn current_frame_len(&self) -> Option<usize> {
        Some(self.samples.len().saturating_sub(self.pos))
    }

    fn channels(&self) -> u16 {
        1
    }

    fn sample_rate(&self) -> u32 {
        SAMPLE_RATE
    }

    fn total_duration(&self) -> Option<Duration> {
        Some(Duration::from_secs_f64(
            self.samples.len() as f64 / SAMPLE_RATE as f64,
        ))
    }
}

/// Speaker output: one replaceable music voice plus fire-and-forget effects.
pub struct DeviceAudio {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    music_sink: Option<Sink>,
    cache: ToneCache,
    gain: f32,
}

impl DeviceAudio {
    pub fn open(settings: AudioSettings) -> Result<Self, Box<dyn std::error::Error>> {
        let (stream, handle) = OutputStream::try_default()?;
        Ok(Self {
            _stream: stream,
            handle,
            music_sink: None,
            cache: ToneCache::new(),
            gain: settings.effective_gain(),
        })
    }

    fn start(&mut self, tone: &SquareTone) -> Option<Sink> {
        if self.gain <= 0.0 {
            return None;
        }
        let sink = Sink::try_new(&self.handle).ok()?;
        sink.set_volume(self.gain);
        sink.append(ToneSource::new(self.cache.get_or_synthesize(tone)));
        Some(sink)
    }
}

impl AudioService for DeviceAudio {
    fn play_tone(&mut self, tone: SquareTone) {
        // Dropping the previous sink cuts its note.
        self.music_sink = self.start(&tone);
    }

    fn stop_tone(&mut self) {
        if let Some(sink) = self.music_sink.take() {
            sink.stop();
        }
    }

    fn play_sfx(&mut self, sfx: Sfx) {
        if let Some(sink) = self.start(&sfx.tone()) {
            sink.detach();
        }
    }
}

/// Opens the default device, or falls back to silence with a warning.
pub fn open_or_silent(settings: AudioSettings) -> Box<dyn AudioService> {
    match DeviceAudio::open(settings) {
        Ok(device) => Box::new(device),
        Err(err) => {
            log::warn!("audio disabled: {err}");
            Box::new(crate::audio::NullAudio)
        }
    }
}
