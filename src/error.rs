//! 调度器错误类型

use thiserror::Error;

/// 调度模块错误类型
#[derive(Error, Debug)]
pub enum SchedulerError {
    #[error("单词未找到: {0}")]
    WordNotFound(String),

    #[error("无效的单词条目: {0}")]
    InvalidEntry(String),

    #[error("序列化错误: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type SchedulerResult<T> = Result<T, SchedulerError>;
