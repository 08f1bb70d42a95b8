use std::time::{Duration, Instant};

use crate::TICK_RATE_HZ;

/// Nominal spacing between ticks at [`TICK_RATE_HZ`].
pub const TICK_INTERVAL: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE_HZ as u64);

/// Longest step handed to the simulation after a stall (window drag, debugger, ...).
pub const MAX_TICK_MS: u32 = 250;

/// Turns wall-clock deltas into whole milliseconds.
///
/// The sub-millisecond remainder is carried into the next call, so the sum of returned values
/// never drifts from the real elapsed time by more than one millisecond.
#[derive(Debug, Clone, Copy, Default)]
pub struct MillisAccumulator {
    carry: Duration,
}

impl MillisAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        let total = self.carry.saturating_add(elapsed);
        let whole_ms = total.as_millis();
        self.carry = total.saturating_sub(Duration::from_millis(whole_ms as u64));
        whole_ms.min(MAX_TICK_MS as u128) as u32
    }
}

/// Paces a loop at the fixed tick rate and reports the elapsed milliseconds per tick.
#[derive(Debug, Clone, Copy)]
pub struct TickClock {
    last_tick: Instant,
    next_tick: Instant,
    millis: MillisAccumulator,
}

impl TickClock {
    pub fn new(now: Instant) -> Self {
        Self {
            last_tick: now,
            next_tick: now + TICK_INTERVAL,
            millis: MillisAccumulator::new(),
        }
    }

    pub fn next_tick(&self) -> Instant {
        self.next_tick
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_tick
    }

    /// Marks a tick at `now` and returns the whole milliseconds since the previous one.
    pub fn tick(&mut self, now: Instant) -> u32 {
        let elapsed = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;
        self.next_tick += TICK_INTERVAL;
        if self.next_tick < now {
            // Fell behind; resync instead of bursting to catch up.
            self.next_tick = now + TICK_INTERVAL;
        }
        self.millis.advance(elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulator_carries_sub_millisecond_remainder() {
        let mut acc = MillisAccumulator::new();
        let frame = Duration::from_micros(16_667);
        let total: u32 = (0..60).map(|_| acc.advance(frame)).sum();
        // 60 * 16.667ms = 1000.02ms
        assert_eq!(total, 1000);
    }

    #[test]
    fn accumulator_clamps_long_stalls() {
        let mut acc = MillisAccumulator::new();
        assert_eq!(acc.advance(Duration::from_secs(5)), MAX_TICK_MS);
    }

    #[test]
    fn tick_clock_schedules_at_fixed_interval() {
        let start = Instant::now();
        let mut clock = TickClock::new(start);
        assert!(!clock.is_due(start));
        assert!(clock.is_due(start + TICK_INTERVAL));

        let ms = clock.tick(start + Duration::from_millis(17));
        assert_eq!(ms, 17);
        assert_eq!(clock.next_tick(), start + TICK_INTERVAL * 2);
    }

    #[test]
    fn tick_clock_resyncs_after_falling_behind() {
        let start = Instant::now();
        let mut clock = TickClock::new(start);
        let late = start + Duration::from_millis(500);
        clock.tick(late);
        assert_eq!(clock.next_tick(), late + TICK_INTERVAL);
    }
}
