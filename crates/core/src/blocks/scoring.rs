//! Scoring module - line-clear points, levels and gravity speed
//!
//! - Clearing `k` rows in one lock awards `k * 100 * level`, using the level
//!   in effect before the clear.
//! - Level is `lines / 10 + 1`, so a game starts at level 1.
//! - Gravity interval shrinks by a fixed step per level down to a floor.

use crate::config::BlocksConfig;
use crate::types::{LINES_PER_LEVEL, LINE_CLEAR_POINTS};

/// Points for clearing `lines` rows at `level`
pub fn line_clear_score(lines: u32, level: u32) -> u32 {
    lines
        .saturating_mul(LINE_CLEAR_POINTS)
        .saturating_mul(level)
}

/// Level for a running total of cleared lines
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Gravity interval for a level (in milliseconds)
pub fn drop_interval_ms(level: u32, config: &BlocksConfig) -> u32 {
    let speedup = level.saturating_sub(1).saturating_mul(config.drop_step_ms);
    config
        .base_drop_ms
        .saturating_sub(speedup)
        .max(config.min_drop_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_score() {
        assert_eq!(line_clear_score(0, 1), 0);
        assert_eq!(line_clear_score(1, 1), 100);
        assert_eq!(line_clear_score(4, 1), 400);
        assert_eq!(line_clear_score(2, 3), 600);
    }

    #[test]
    fn test_level_calculation() {
        assert_eq!(level_for_lines(0), 1);
        assert_eq!(level_for_lines(9), 1);
        assert_eq!(level_for_lines(10), 2);
        assert_eq!(level_for_lines(29), 3);
        assert_eq!(level_for_lines(100), 11);
    }

    #[test]
    fn test_drop_intervals() {
        let config = BlocksConfig::default();
        assert_eq!(drop_interval_ms(1, &config), 1000);
        assert_eq!(drop_interval_ms(2, &config), 900);
        assert_eq!(drop_interval_ms(9, &config), 200);
        assert_eq!(drop_interval_ms(10, &config), 100);
        assert_eq!(drop_interval_ms(25, &config), 100); // Floor at 100
    }
}
