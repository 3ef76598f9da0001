//! Common Types and Constants
//!
//! Shared data structures and scheduling constants used across all modules.

use std::collections::HashMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::SchedulerResult;

// ==================== Constants ====================

/// One day in milliseconds
pub const BASE_DAY_MS: f64 = 86_400_000.0;

/// Minimum difficulty value
pub const MIN_DIFFICULTY: f64 = 1.0;

/// Maximum difficulty value (5 = hardest)
pub const MAX_DIFFICULTY: f64 = 5.0;

/// Difficulty assigned to freshly created entries
pub const DEFAULT_DIFFICULTY: f64 = 1.0;

/// Progressive review step sequence (days), indexed by capped shown count
pub const REVIEW_STEPS_DAYS: [f64; 7] = [1.0, 3.0, 7.0, 14.0, 30.0, 90.0, 180.0];

/// Retry interval after a miss: baseDay * (difficulty * factor + base)
pub const RETRY_DIFFICULTY_FACTOR: f64 = 0.1;

/// Retry interval base term
pub const RETRY_BASE_FACTOR: f64 = 0.1;

/// Difficulty scaling of correct-answer intervals: max(floor, base - difficulty * slope)
pub const INTERVAL_FACTOR_BASE: f64 = 2.0;

/// Slope of the difficulty scaling factor
pub const INTERVAL_FACTOR_SLOPE: f64 = 0.3;

/// Floor of the difficulty scaling factor
pub const INTERVAL_FACTOR_FLOOR: f64 = 0.5;

/// Priority bonus for entries never shown before
pub const NEVER_SHOWN_BONUS: f64 = 100.0;

/// Priority bonus for entries still in the early learning stage
pub const EARLY_STAGE_BONUS: f64 = 10.0;

/// Shown-count threshold below which the early-stage bonus applies
pub const EARLY_STAGE_THRESHOLD: u32 = 3;

/// Weight of the difficulty term in the priority score
pub const DIFFICULTY_WEIGHT: f64 = 0.5;

/// Priority bonus when the most recent presentation was missed
pub const RECENT_MISS_BONUS: f64 = 5.0;

/// Priority bonus for entries not shown for a very long time
pub const STALE_BONUS: f64 = 2.0;

/// Staleness threshold (180 days in milliseconds)
pub const STALE_THRESHOLD_MS: i64 = 15_552_000_000;

/// Difficulty decrease applied after a correct answer in the mature stage
pub const DIFFICULTY_DECREASE_STEP: f64 = 0.1;

/// Difficulty increase applied after a miss
pub const DIFFICULTY_INCREASE_STEP: f64 = 0.2;

/// Minimum prior shown count before correct answers start lowering difficulty
pub const DIFFICULTY_DECREASE_MIN_REVIEWS: u32 = 3;

// ==================== WordEntry ====================

/// 一个待学习的词汇条目及其复习历史
///
/// 字段序列化为 camelCase，与前端/存储层的 JSON 快照保持一致。
/// 集合由调用方的存储层持有；调度器只接收快照并返回更新值，
/// 不负责持久化。
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordEntry {
    /// Unique, stable identifier
    pub id: String,
    /// The term being studied; unique within a collection (case-insensitive)
    pub word: String,
    /// Reference meaning text; may be empty until filled by the generator
    #[serde(default)]
    pub definition: String,
    /// Optional illustrative sentence; not scheduler-relevant
    #[serde(default)]
    pub example: Option<String>,
    /// Timestamp (ms since epoch) of the most recent presentation; 0 = never shown
    #[serde(default)]
    pub last_shown_at: i64,
    /// Timestamp of the most recent correct answer; 0 = never correct
    #[serde(default)]
    pub last_correct_at: i64,
    /// Number of presentations so far; monotonically non-decreasing
    #[serde(default)]
    pub shown_times: u32,
    /// Adaptive difficulty in [1.0, 5.0], 5 = hardest
    pub difficulty: f64,
}

impl WordEntry {
    /// 创建一个全新的词条（未展示过、未答对过）
    pub fn new(word: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            word: word.into(),
            definition: definition.into(),
            example: None,
            last_shown_at: 0,
            last_correct_at: 0,
            shown_times: 0,
            difficulty: DEFAULT_DIFFICULTY,
        }
    }

    /// 最近一次展示是否答对
    ///
    /// 派生值而非存储字段: 没有显式的"上次结果"标志，
    /// `last_correct_at >= last_shown_at` 的比较就是唯一事实来源。
    /// 从未展示过的条目 (两个时间戳均为 0) 视为"答对"。
    pub fn was_last_correct(&self) -> bool {
        self.last_correct_at >= self.last_shown_at
    }

    /// 序列化为 JSON 字符串
    pub fn to_json(&self) -> SchedulerResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// 从 JSON 字符串反序列化
    pub fn from_json(json: &str) -> SchedulerResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

// ==================== Collection helpers ====================

/// 解析存储层提供的集合快照 (JSON 数组)
pub fn parse_collection(json: &str) -> SchedulerResult<Vec<WordEntry>> {
    Ok(serde_json::from_str(json)?)
}

/// 将集合序列化为 JSON 数组，供调用方写回存储
pub fn collection_to_json(entries: &[WordEntry]) -> SchedulerResult<String> {
    Ok(serde_json::to_string(entries)?)
}

/// 查找集合中重复的单词 (大小写不敏感)
///
/// 返回每个重复单词的小写形式，按首次出现顺序排列。
/// 正常集合应返回空列表。
pub fn find_duplicate_words(entries: &[WordEntry]) -> Vec<String> {
    let mut seen: HashMap<String, u32> = HashMap::new();
    let mut duplicates = Vec::new();

    for entry in entries {
        let key = entry.word.trim().to_lowercase();
        let count = seen.entry(key.clone()).or_insert(0);
        *count += 1;
        if *count == 2 {
            duplicates.push(key);
        }
    }

    duplicates
}

/// 当前时间 (毫秒时间戳)
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

// ==================== Tests ====================
