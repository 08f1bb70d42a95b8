//! Square-wave tone synthesis.
//!
//! Everything here is pure sample math: no device, no threads. Playback lives with whoever owns
//! an output stream.

use std::collections::HashMap;
use std::sync::Arc;

pub const SAMPLE_RATE: u32 = 44_100;

/// Envelope level at the end of a tone (linear decay from 1.0).
const ENVELOPE_END: f32 = 0.5;

/// One square-wave tone request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquareTone {
    pub frequency_hz: u32,
    pub duration_ms: u32,
    /// 0.0..=1.0
    pub volume: f32,
    /// Fraction of each period spent high, 0.0..=1.0.
    pub duty: f32,
}

impl SquareTone {
    pub const DEFAULT_DUTY: f32 = 0.5;

    pub fn new(frequency_hz: u32, duration_ms: u32, volume: f32) -> Self {
        Self {
            frequency_hz,
            duration_ms,
            volume,
            duty: Self::DEFAULT_DUTY,
        }
    }

    pub fn with_duty(mut self, duty: f32) -> Self {
        self.duty = duty;
        self
    }

    /// Hashable identity of the tone: volume and duty are quantized to 1/1000.
    pub fn key(&self) -> ToneKey {
        ToneKey {
            frequency_hz: self.frequency_hz,
            duration_ms: self.duration_ms,
            volume_milli: quantize_unit(self.volume),
            duty_milli: quantize_unit(self.duty),
        }
    }

    /// Number of mono samples, rounded up to an even count.
    pub fn sample_count(&self) -> usize {
        let n = (SAMPLE_RATE as u64 * self.duration_ms as u64 / 1000) as usize;
        n + (n % 2)
    }
}

fn quantize_unit(v: f32) -> u16 {
    (v.clamp(0.0, 1.0) * 1000.0).round() as u16
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToneKey {
    pub frequency_hz: u32,
    pub duration_ms: u32,
    pub volume_milli: u16,
    pub duty_milli: u16,
}

/// Renders `tone` as mono `f32` samples at [`SAMPLE_RATE`].
pub fn synthesize(tone: &SquareTone) -> Vec<f32> {
    let ns = tone.sample_count();
    if ns == 0 {
        return Vec::new();
    }

    let period = SAMPLE_RATE as f32 / tone.frequency_hz.max(1) as f32;
    let high_for = period * tone.duty.clamp(0.0, 1.0);
    let volume = tone.volume.clamp(0.0, 1.0);
    let last = (ns - 1).max(1) as f32;

    (0..ns)
        .map(|i| {
            let wave = if (i as f32 % period) < high_for { 1.0 } else { -1.0 };
            let envelope = 1.0 - (1.0 - ENVELOPE_END) * (i as f32 / last);
            wave * envelope * volume
        })
        .collect()
}

/// Memoizes synthesized tones so repeated effects and notes are rendered once.
#[derive(Debug, Default)]
pub struct ToneCache {
    entries: HashMap<ToneKey, Arc<[f32]>>,
}

impl ToneCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_synthesize(&mut self, tone: &SquareTone) -> Arc<[f32]> {
        self.entries
            .entry(tone.key())
            .or_insert_with(|| synthesize(tone).into())
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
