//! 导出/导入备份文件
//!
//! 格式：`{ wordStatus, customWords, exportTime, version, appName }`，UTF-8 JSON。
//! 导入时只读取 wordStatus 和 customWords，其余字段忽略。

use super::errors::ImportError;
use super::StatusMap;
use crate::lessons::WordEntry;
use chrono::{NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const SNAPSHOT_VERSION: &str = "1.0";
pub const APP_NAME: &str = "生字学习助手";

/// 备份文档
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_status: Option<StatusMap>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_words: Option<Vec<WordEntry>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,
}

/// 导入结果：各字段导入的条目数，None 表示该字段不在备份中
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub statuses: Option<usize>,
    pub custom_words: Option<usize>,
}

impl Snapshot {
    /// 以当前时间生成导出文档
    pub fn capture(word_status: StatusMap, custom_words: Vec<WordEntry>) -> Self {
        Self {
            word_status: Some(word_status),
            custom_words: Some(custom_words),
            export_time: Some(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
            version: Some(SNAPSHOT_VERSION.to_string()),
            app_name: Some(APP_NAME.to_string()),
        }
    }

    /// 解析备份文本，无法解析的文档视为格式错误
    pub fn parse(text: &str) -> Result<Self, ImportError> {
        serde_json::from_str(text).map_err(|e| ImportError::InvalidFormat(e.to_string()))
    }

    /// 读取并解析备份文件
    pub fn read_file(path: &Path) -> Result<Self, ImportError> {
        let content = std::fs::read_to_string(path).map_err(|source| ImportError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// 至少要有一个可识别字段
    pub fn validate(&self) -> Result<(), ImportError> {
        if self.word_status.is_none() && self.custom_words.is_none() {
            return Err(ImportError::InvalidFormat(
                "missing both wordStatus and customWords".to_string(),
            ));
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// 导出文件名：`生字学习进度_<日期>.json`，日期中的 `/` 替换为 `-`
pub fn export_filename(date: NaiveDate) -> String {
    let local = date.format("%Y/%-m/%-d").to_string();
    format!("生字学习进度_{}.json", local.replace('/', "-"))
}
