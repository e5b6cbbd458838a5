//! Scoring module - line clear points, drop points, leveling and gravity speed
//!
//! Line clears use a fixed table scaled by the level that was in effect
//! before the clear was counted. There are no combo, back-to-back or T-spin
//! bonuses, and soft drops are free.

use crate::types::{
    GRAVITY_INTERVALS_MS, HARD_DROP_POINTS, LINES_PER_LEVEL, LINE_SCORES,
};

/// Calculate line clear score
/// lines: number of lines cleared at once (0-4)
/// level: level before the clear (1-based)
pub fn line_clear_score(lines: u32, level: u32) -> u32 {
    match LINE_SCORES.get(lines as usize) {
        Some(&base) => base.saturating_mul(level),
        None => 0,
    }
}

/// Points for a hard drop of `distance` rows
pub fn hard_drop_score(distance: u32) -> u32 {
    distance.saturating_mul(HARD_DROP_POINTS)
}

/// Level reached after `lines` total cleared lines (1-based)
pub fn level_for_lines(lines: u32) -> u32 {
    lines / LINES_PER_LEVEL + 1
}

/// Gravity interval for a level, clamped to the fastest entry
pub fn gravity_interval_ms(level: u32) -> u32 {
    let index = (level.max(1) - 1) as usize;
    GRAVITY_INTERVALS_MS[index.min(GRAVITY_INTERVALS_MS.len() - 1)]
}
