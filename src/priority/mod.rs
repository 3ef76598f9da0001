//! Priority Scoring
//!
//! Heuristic urgency score per entry: sorting by score descending yields the
//! review order. Deterministic weighted sum, all terms additive:
//!
//! - base: overdue ratio = elapsed since last shown / expected interval
//! - `+100` for entries never shown (new material always dominates)
//! - `+10` for entries shown fewer than 3 times
//! - `+ difficulty * 0.5`
//! - `+5` when the most recent presentation was missed
//! - `+2` when the entry has not been shown for over 180 days
//!
//! Intentionally a fixed-weight heuristic, not a probabilistic
//! forgetting-curve model.

use rayon::prelude::*;

use crate::interval::expected_interval_ms;
use crate::sanitize::clamp_difficulty;
use crate::types::{
    WordEntry, DIFFICULTY_WEIGHT, EARLY_STAGE_BONUS, EARLY_STAGE_THRESHOLD, NEVER_SHOWN_BONUS,
    RECENT_MISS_BONUS, STALE_BONUS, STALE_THRESHOLD_MS,
};

/// 计算单个条目的优先级得分
///
/// 得分只依赖条目自身与 `now_ms`，无任何隐藏状态。
pub fn priority_score(entry: &WordEntry, now_ms: i64) -> f64 {
    let difficulty = clamp_difficulty(entry.difficulty);
    let was_last_correct = entry.was_last_correct();

    // 期望间隔恒为正 (最小 baseDay * 0.2)，不存在除零
    let expected = expected_interval_ms(difficulty, entry.shown_times, was_last_correct);
    let elapsed = (now_ms - entry.last_shown_at) as f64;

    let mut priority = elapsed / expected;

    if entry.shown_times == 0 {
        priority += NEVER_SHOWN_BONUS;
    } else if entry.shown_times < EARLY_STAGE_THRESHOLD {
        priority += EARLY_STAGE_BONUS;
    }

    priority += difficulty * DIFFICULTY_WEIGHT;

    // 上次漏答，且最近一次答对早于最近一次展示
    if !was_last_correct && (now_ms - entry.last_correct_at) > (now_ms - entry.last_shown_at) {
        priority += RECENT_MISS_BONUS;
    }

    if now_ms - entry.last_shown_at > STALE_THRESHOLD_MS {
        priority += STALE_BONUS;
    }

    priority
}

/// 并行计算整个集合的优先级得分
///
/// 结果与输入集合等长、顺序一致。
pub fn score_collection(entries: &[WordEntry], now_ms: i64) -> Vec<f64> {
    entries
        .par_iter()
        .map(|entry| priority_score(entry, now_ms))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BASE_DAY_MS;

    // 固定的"当前时间": 2023-11-14 前后
    const NOW: i64 = 1_700_000_000_000;

    fn shown_entry(word: &str) -> WordEntry {
        let mut entry = WordEntry::new(word, "释义");
        entry.shown_times = 5;
        entry.difficulty = 2.0;
        // 一天前展示并答对
        entry.last_shown_at = NOW - BASE_DAY_MS as i64;
        entry.last_correct_at = entry.last_shown_at;
        entry
    }

    // ==================== 加成项 ====================

    #[test]
    fn test_never_shown_bonus() {
        let entry = WordEntry::new("apple", "苹果");
        let score = priority_score(&entry, NOW);
        // 过期比率巨大 (自 epoch 起从未展示)，加上 +100
        assert!(score > NEVER_SHOWN_BONUS);
    }

    #[test]
    fn test_never_shown_bonus_dominates_with_small_clock() {
        // 用较小的时钟隔离加成项本身: 其他条目刚刚展示过，比率为 0
        let now = BASE_DAY_MS as i64;
        let fresh = WordEntry::new("new", "新词");

        let mut reviewed = WordEntry::new("old", "旧词");
        reviewed.shown_times = 1;
        reviewed.difficulty = 5.0;
        reviewed.last_shown_at = now;
        reviewed.last_correct_at = 0;

        assert!(priority_score(&fresh, now) > priority_score(&reviewed, now));
    }

    #[test]
    fn test_early_stage_bonus() {
        let mut entry = shown_entry("apple");
        entry.shown_times = 2;
        let early = priority_score(&entry, NOW);

        entry.shown_times = 3;
        let mature = priority_score(&entry, NOW);

        // 展示次数 < 3 时有 +10 加成；间隔步长不同也会影响比率，
        // 但在一天的已过时间下加成占主导
        assert!(early > mature);
    }

    #[test]
    fn test_difficulty_term() {
        let mut easy = shown_entry("apple");
        easy.difficulty = 1.0;
        let mut hard = shown_entry("banana");
        hard.difficulty = 5.0;

        // 难词: 更短的期望间隔 (比率更大) 加上更大的难度项
        assert!(priority_score(&hard, NOW) > priority_score(&easy, NOW));
    }

    #[test]
    fn test_recent_miss_bonus() {
        let mut missed = shown_entry("apple");
        missed.last_correct_at = missed.last_shown_at - 1_000;

        let answered = shown_entry("apple");

        let miss_score = priority_score(&missed, NOW);
        let ok_score = priority_score(&answered, NOW);
        // 漏答: +5 加成且期望间隔切换为短重试窗口
        assert!(miss_score > ok_score + RECENT_MISS_BONUS - 1.0);
    }

    #[test]
    fn test_stale_bonus() {
        let mut fresh = shown_entry("apple");
        fresh.last_shown_at = NOW - STALE_THRESHOLD_MS + 1_000;
        fresh.last_correct_at = fresh.last_shown_at;

        let mut stale = fresh.clone();
        stale.last_shown_at = NOW - STALE_THRESHOLD_MS - 1_000;
        stale.last_correct_at = stale.last_shown_at;

        let diff = priority_score(&stale, NOW) - priority_score(&fresh, NOW);
        // 比率只差极小量，差值应接近 +2
        assert!((diff - STALE_BONUS).abs() < 0.01);
    }

    // ==================== 比率与确定性 ====================

    #[test]
    fn test_overdue_ratio_grows_with_elapsed_time() {
        let entry = shown_entry("apple");
        let later = priority_score(&entry, NOW + BASE_DAY_MS as i64);
        let sooner = priority_score(&entry, NOW);
        assert!(later > sooner);
    }

    #[test]
    fn test_deterministic() {
        let entry = shown_entry("apple");
        assert_eq!(priority_score(&entry, NOW), priority_score(&entry, NOW));
    }

    #[test]
    fn test_corrupted_difficulty_is_clamped() {
        let mut entry = shown_entry("apple");
        entry.difficulty = f64::NAN;
        let score = priority_score(&entry, NOW);
        assert!(score.is_finite());

        entry.difficulty = 1e9;
        let clamped = priority_score(&entry, NOW);
        entry.difficulty = 5.0;
        assert_eq!(clamped, priority_score(&entry, NOW));
    }

    // ==================== score_collection ====================

    #[test]
    fn test_score_collection_matches_single_scores() {
        let entries = vec![
            WordEntry::new("apple", "苹果"),
            shown_entry("banana"),
            shown_entry("cherry"),
        ];
        let scores = score_collection(&entries, NOW);
        assert_eq!(scores.len(), entries.len());
        for (entry, score) in entries.iter().zip(&scores) {
            assert_eq!(*score, priority_score(entry, NOW));
        }
    }

    #[test]
    fn test_score_collection_empty() {
        let scores = score_collection(&[], NOW);
        assert!(scores.is_empty());
    }
}
