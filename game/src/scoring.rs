//! Score, level and gravity tables.

pub const MAX_START_LEVEL: u32 = 9;
pub const LINES_PER_LEVEL: u32 = 10;

const LINE_CLEAR_POINTS: [u32; 5] = [0, 40, 100, 300, 1200];

const BASE_DROP_INTERVAL_MS: u32 = 800;
const DROP_INTERVAL_STEP_MS: u32 = 70;
const MIN_DROP_INTERVAL_MS: u32 = 50;

/// Points for clearing `rows` at once on `level`.
pub fn line_clear_points(rows: usize, level: u32) -> u32 {
    let base = LINE_CLEAR_POINTS
        .get(rows)
        .copied()
        .unwrap_or(LINE_CLEAR_POINTS[4]);
    base.saturating_mul(level.saturating_add(1))
}

/// Gravity step for `level`: `max(50, 800 - 70 * level)`.
pub fn drop_interval_ms(level: u32) -> u32 {
    BASE_DROP_INTERVAL_MS
        .saturating_sub(level.saturating_mul(DROP_INTERVAL_STEP_MS))
        .max(MIN_DROP_INTERVAL_MS)
}

/// Level after `lines` total cleared lines. Never lower than `current`.
pub fn level_for(current: u32, lines: u32) -> u32 {
    current.max(lines / LINES_PER_LEVEL)
}
