//! Scoring module - classic console scoring and level progression
//!
//! - Line clears: `100 * lines * level`, using the level in effect when the
//!   rows were cleared.
//! - Drops: soft drop +1 per row, hard drop +2 per row.
//! - Level: `1 + lines / 10`.
//! - Gravity: 1000ms at level 1, 50ms faster per level, never below 50ms.

use crate::types::{
    BASE_DROP_MS, DROP_INTERVAL_MIN_MS, DROP_STEP_MS, HARD_DROP_POINTS, LINES_PER_LEVEL,
    LINE_CLEAR_POINTS, SOFT_DROP_POINTS,
};

/// Points for clearing `lines` rows at `level`
pub fn calculate_line_score(lines: u32, level: u32) -> u32 {
    lines.saturating_mul(LINE_CLEAR_POINTS).saturating_mul(level)
}

/// Calculate drop score
/// soft_drop: +1 per cell
/// hard_drop: +2 per cell
pub fn calculate_drop_score(cells: u32, is_hard_drop: bool) -> u32 {
    if is_hard_drop {
        cells * HARD_DROP_POINTS
    } else {
        cells * SOFT_DROP_POINTS
    }
}

/// Level for a cleared-line total (levels start at 1)
pub fn calculate_level(total_lines: u32) -> u32 {
    1 + total_lines / LINES_PER_LEVEL
}

/// Gravity interval for a level, in milliseconds
pub fn drop_interval_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(1).saturating_mul(DROP_STEP_MS);
    BASE_DROP_MS
        .saturating_sub(speedup)
        .max(DROP_INTERVAL_MIN_MS)
}
