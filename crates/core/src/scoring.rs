//! Scoring module - classic line-clear scoring and level/speed progression
//!
//! Only classic scoring applies: a lookup by lines cleared, scaled by level.
//! Level is always recomputed from the running line total, never incremented
//! on its own.

use crate::types::{BASE_DROP_MS, DROP_INTERVAL_MIN_MS, DROP_STEP_MS, LINES_PER_LEVEL, LINE_SCORES};

/// Calculate line clear score
/// lines: number of lines cleared in one lock (0-4)
/// level: current level (0-based)
///
/// More than four lines cannot happen in one lock; it scores 0.
pub fn calculate_score(lines: usize, level: u32) -> u32 {
    LINE_SCORES
        .get(lines)
        .map_or(0, |base| base.saturating_mul(level.saturating_add(1)))
}

/// Level management
/// Level increases every 10 lines cleared
pub fn calculate_level(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL
}

/// Get gravity interval for a level (in milliseconds)
/// 1000ms at level 0, 50ms faster per level, never below 50ms
pub fn get_drop_speed(level: u32) -> u32 {
    BASE_DROP_MS
        .saturating_sub(level.saturating_mul(DROP_STEP_MS))
        .max(DROP_INTERVAL_MIN_MS)
}
