//! Interval Model
//!
//! Expected re-review delay for an entry, given its difficulty and history.
//!
//! Model:
//! - After a miss: a short fractional-day retry window that grows slightly
//!   with difficulty
//!   - `interval = baseDay * (difficulty * 0.1 + 0.1)`  (≈ 0.2-0.6 days)
//! - After a correct answer: a progressive step sequence scaled by difficulty
//!   - `interval = baseDay * steps[min(shownTimes, 6)] * max(0.5, 2 - difficulty * 0.3)`
//!   - steps (days): 1, 3, 7, 14, 30, 90, 180
//!   - easier entries get longer intervals (factor → 2.0), harder ones
//!     shorter (factor floors at 0.5)
//!
//! Pure function of its inputs; the returned duration is always positive
//! (minimum `baseDay * 0.2`).

use crate::sanitize::clamp_difficulty;
use crate::types::{
    BASE_DAY_MS, INTERVAL_FACTOR_BASE, INTERVAL_FACTOR_FLOOR, INTERVAL_FACTOR_SLOPE,
    RETRY_BASE_FACTOR, RETRY_DIFFICULTY_FACTOR, REVIEW_STEPS_DAYS,
};

/// 计算期望复习间隔 (毫秒)
///
/// # Arguments
/// * `difficulty` - 条目难度，越界值会被钳制到 [1.0, 5.0]
/// * `shown_times` - 已展示次数
/// * `was_correct` - 上一次展示是否答对 (不是正在调度的这一次)
pub fn expected_interval_ms(difficulty: f64, shown_times: u32, was_correct: bool) -> f64 {
    let difficulty = clamp_difficulty(difficulty);

    if !was_correct {
        return BASE_DAY_MS * (difficulty * RETRY_DIFFICULTY_FACTOR + RETRY_BASE_FACTOR);
    }

    let index = (shown_times as usize).min(REVIEW_STEPS_DAYS.len() - 1);
    let factor =
        (INTERVAL_FACTOR_BASE - difficulty * INTERVAL_FACTOR_SLOPE).max(INTERVAL_FACTOR_FLOOR);

    BASE_DAY_MS * REVIEW_STEPS_DAYS[index] * factor
}
