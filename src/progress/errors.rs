// Progress Errors
// 持久化、导入、输入校验的错误类型

use std::path::PathBuf;
use thiserror::Error;

/// 存储后端错误（读写失败、序列化失败、超出配额）
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error on key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode or decode '{key}': {source}")]
    Serde {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("storage quota exceeded writing '{key}' ({needed} bytes needed, {quota} allowed)")]
    QuotaExceeded {
        key: String,
        needed: usize,
        quota: usize,
    },
}

/// 输入校验错误（在边界处拒绝，不产生任何修改）
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("请填写词组")]
    EmptyWord,

    #[error("请填写拼音")]
    EmptyPinyin,

    #[error("请至少选择一个生字数量")]
    EmptySelection,

    #[error("“{status}”的生字只有 {available} 个，无法选择 {requested} 个")]
    ExceedsAvailable {
        status: &'static str,
        requested: usize,
        available: usize,
    },
}

/// 写入类操作的错误
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("failed to save '{0}'")]
    WriteFailed(&'static str),
}

/// 导入错误
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("无效的备份文件格式: {0}")]
    InvalidFormat(String),

    #[error("failed to read backup file {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to save '{0}' during import")]
    WriteFailed(&'static str),
}
