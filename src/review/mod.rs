//! Review-Outcome Update
//!
//! Applies the result of one presentation to an entry and returns the updated
//! value for write-back by the caller. The scheduler never touches storage;
//! the caller persists the returned entry wholesale.
//!
//! State transition:
//! - `shown_times += 1`, `last_shown_at = now`
//! - correct: `last_correct_at = now`; once the entry is past the early stage
//!   (more than 3 prior presentations) difficulty drops by 0.1 (floor 1.0)
//! - incorrect: difficulty rises by 0.2 (cap 5.0); `last_correct_at` untouched

use crate::error::{SchedulerError, SchedulerResult};
use crate::sanitize::clamp_difficulty;
use crate::types::{
    WordEntry, DIFFICULTY_DECREASE_MIN_REVIEWS, DIFFICULTY_DECREASE_STEP,
    DIFFICULTY_INCREASE_STEP, MAX_DIFFICULTY, MIN_DIFFICULTY,
};

/// 应用一次复习结果，返回更新后的条目
///
/// 纯函数: 不修改输入。难度判定使用更新前的 `shown_times`。
pub fn apply_outcome(entry: &WordEntry, was_correct: bool, now_ms: i64) -> WordEntry {
    let prior_shown_times = entry.shown_times;

    let mut updated = entry.clone();
    updated.difficulty = clamp_difficulty(updated.difficulty);
    updated.shown_times = prior_shown_times.saturating_add(1);
    updated.last_shown_at = now_ms;

    if was_correct {
        updated.last_correct_at = now_ms;
        if prior_shown_times > DIFFICULTY_DECREASE_MIN_REVIEWS && updated.difficulty > MIN_DIFFICULTY
        {
            updated.difficulty =
                (updated.difficulty - DIFFICULTY_DECREASE_STEP).max(MIN_DIFFICULTY);
        }
    } else {
        updated.difficulty = (updated.difficulty + DIFFICULTY_INCREASE_STEP).min(MAX_DIFFICULTY);
    }

    updated
}

/// 按单词查找并更新集合中的条目 (大小写不敏感)
///
/// 集合中对应条目被原地替换，同时返回更新值供调用方写回存储。
/// 找不到时返回 [`SchedulerError::WordNotFound`]，集合保持不变。
pub fn apply_outcome_by_word(
    entries: &mut [WordEntry],
    word: &str,
    was_correct: bool,
    now_ms: i64,
) -> SchedulerResult<WordEntry> {
    let target = word.trim().to_lowercase();

    match entries
        .iter_mut()
        .find(|entry| entry.word.trim().to_lowercase() == target)
    {
        Some(entry) => {
            let updated = apply_outcome(entry, was_correct, now_ms);
            log::debug!(
                "review outcome applied: word={} correct={} shown_times={} difficulty={:.1}",
                updated.word,
                was_correct,
                updated.shown_times,
                updated.difficulty
            );
            *entry = updated.clone();
            Ok(updated)
        }
        None => Err(SchedulerError::WordNotFound(word.to_string())),
    }
}
