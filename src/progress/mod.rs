//! 学习进度模块
//!
//! 词组掌握状态与自定义词组的持久化：
//! - 键值存储后端（文件 / 内存）
//! - ProgressStore：读写、状态循环、重置
//! - Snapshot：导出/导入备份文件

pub mod backend;
pub mod errors;
pub mod snapshot;
pub mod store;

pub use backend::{FileStore, KeyValueStore, MemoryStore};
pub use errors::{ImportError, StorageError, StoreError, ValidationError};
pub use snapshot::{export_filename, ImportSummary, Snapshot};
pub use store::ProgressStore;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 持久化键
pub const WORD_STATUS_KEY: &str = "wordStatus";
pub const CUSTOM_WORDS_KEY: &str = "customWords";
pub const HAS_VISITED_KEY: &str = "hasVisited";

/// 词组标识 -> 掌握状态
pub type StatusMap = BTreeMap<String, WordStatus>;

// ═══════════════════════════════════════════════════════════════════
// 掌握状态
// ═══════════════════════════════════════════════════════════════════

/// 掌握状态，循环顺序：unknown → maybe → known → unknown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordStatus {
    /// 不会
    #[default]
    Unknown,
    /// 可能会
    Maybe,
    /// 已掌握
    Known,
}

impl WordStatus {
    pub const ALL: [WordStatus; 3] = [WordStatus::Unknown, WordStatus::Maybe, WordStatus::Known];

    /// 循环中的下一个状态
    pub fn next(self) -> Self {
        match self {
            WordStatus::Unknown => WordStatus::Maybe,
            WordStatus::Maybe => WordStatus::Known,
            WordStatus::Known => WordStatus::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WordStatus::Unknown => "unknown",
            WordStatus::Maybe => "maybe",
            WordStatus::Known => "known",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "unknown" => Some(WordStatus::Unknown),
            "maybe" => Some(WordStatus::Maybe),
            "known" => Some(WordStatus::Known),
            _ => None,
        }
    }

    /// 显示文字
    pub fn label(&self) -> &'static str {
        match self {
            WordStatus::Unknown => "不会",
            WordStatus::Maybe => "可能会",
            WordStatus::Known => "已掌握",
        }
    }
}

impl std::fmt::Display for WordStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for WordStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WordStatus::parse(s).ok_or_else(|| format!("invalid status: {}", s))
    }
}

/// 位置派生的词组标识："{课文序号}_{词组序号}"
pub fn status_key(lesson_idx: usize, word_idx: usize) -> String {
    format!("{}_{}", lesson_idx, word_idx)
}

/// 查询状态，缺省为 unknown
pub fn resolve_status(map: &StatusMap, key: &str) -> WordStatus {
    map.get(key).copied().unwrap_or_default()
}
