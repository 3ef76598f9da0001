//! Data Sanitization
//!
//! Hardening utilities for entries coming out of external storage.
//!
//! Functions:
//! - Difficulty clamping
//! - Entry field sanitization
//! - Entry validation

use crate::error::{SchedulerError, SchedulerResult};
use crate::types::{WordEntry, MAX_DIFFICULTY, MIN_DIFFICULTY};

/// 将难度钳制到 [1.0, 5.0]
///
/// 损坏的记录可能带有越界、NaN 或无穷大的难度值；
/// 统一替换为安全值而不是让无效分数向外传播。
pub fn clamp_difficulty(difficulty: f64) -> f64 {
    if difficulty.is_nan() || difficulty.is_infinite() {
        return MIN_DIFFICULTY;
    }
    difficulty.clamp(MIN_DIFFICULTY, MAX_DIFFICULTY)
}

/// 清理单个条目，确保字段处于合法范围
pub fn sanitize_entry(entry: &mut WordEntry) {
    entry.difficulty = clamp_difficulty(entry.difficulty);

    // 时间戳不允许为负
    if entry.last_shown_at < 0 {
        entry.last_shown_at = 0;
    }
    if entry.last_correct_at < 0 {
        entry.last_correct_at = 0;
    }
}

/// 校验条目是否可用于调度
pub fn validate_entry(entry: &WordEntry) -> SchedulerResult<()> {
    if entry.word.trim().is_empty() {
        return Err(SchedulerError::InvalidEntry(format!(
            "word 为空 (id: {})",
            entry.id
        )));
    }
    if entry.difficulty.is_nan() || entry.difficulty.is_infinite() {
        return Err(SchedulerError::InvalidEntry(format!(
            "difficulty 非法: {} (word: {})",
            entry.difficulty, entry.word
        )));
    }
    Ok(())
}
