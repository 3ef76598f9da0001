//! # danci-scheduler - 词汇复习调度核心库
//!
//! 本 crate 提供纯 Rust 实现的复习调度算法:
//!
//! - **Interval Model** - 根据难度与复习历史推算期望复习间隔
//! - **Priority Scoring** - 加权启发式紧迫度评分
//! - **Selection** - 从单词集合中选出下一个待复习条目
//! - **Review Update** - 根据答题结果更新复习状态与难度
//!
//! ## 设计理念
//!
//! 本 crate 的设计目标:
//! - **纯 Rust** - 无绑定依赖，可在任何 Rust 项目中使用
//! - **无全局状态** - 所有操作显式接收单词集合，调用方负责持久化
//! - **确定性** - 相同输入永远产生相同输出，便于测试与回放
//! - **充分测试** - 所有算法都有完整的单元测试与属性测试
//!
//! ## 模块结构
//!
//! - [`interval`] - 间隔模型 (渐进步长序列、难度缩放)
//! - [`priority`] - 优先级评分 (过期比率、新词/难词/漏答加成)
//! - [`selection`] - 选择 (最高优先级条目、确定性平局处理)
//! - [`review`] - 复习结果更新 (难度自适应、状态转移)
//! - [`answer`] - 释义答案比对 (自由回忆题型的判定)
//! - [`sanitize`] - 数据清洗 (难度钳制、条目校验)
//! - [`types`] - 公共类型和常量
//!
//! ## 使用示例
//!
//! ```rust
//! use danci_scheduler::{apply_outcome_by_word, now_ms, select_next, WordEntry};
//!
//! let mut words = vec![
//!     WordEntry::new("ephemeral", "短暂的"),
//!     WordEntry::new("serendipity", "机缘巧合"),
//! ];
//!
//! let now = now_ms();
//! let next = select_next(&words, now).expect("集合非空").word.clone();
//! let updated = apply_outcome_by_word(&mut words, &next, true, now).unwrap();
//! assert_eq!(updated.shown_times, 1);
//! ```

// ============================================================================
// 模块声明
// ============================================================================

pub mod answer;
pub mod error;
pub mod interval;
pub mod priority;
pub mod review;
pub mod sanitize;
pub mod selection;
pub mod types;

// ============================================================================
// 重新导出
// ============================================================================

/// 重新导出所有公共类型
pub use types::*;

/// 重新导出错误类型
pub use error::{SchedulerError, SchedulerResult};

/// 重新导出间隔模型
pub use interval::expected_interval_ms;

/// 重新导出优先级评分
pub use priority::{priority_score, score_collection};

/// 重新导出选择算法
pub use selection::{rank_collection, select_next, ScoredEntry};

/// 重新导出复习结果更新
pub use review::{apply_outcome, apply_outcome_by_word};

/// 重新导出答案比对
pub use answer::is_meaning_correct;
