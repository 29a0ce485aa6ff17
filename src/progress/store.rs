//! ProgressStore - 掌握状态与自定义词组的持久化
//!
//! 每次读取都重新从后端获取，每次修改都同步写回，不保留内存缓存。
//! 后端错误（解析失败、写入失败）在这里被吸收：读取返回空默认值，
//! 写入返回 false，并记录日志。

use super::backend::{FileStore, KeyValueStore, MemoryStore};
use super::errors::{ImportError, StorageError, StoreError, ValidationError};
use super::snapshot::{ImportSummary, Snapshot};
use super::{
    resolve_status, StatusMap, WordStatus, CUSTOM_WORDS_KEY, HAS_VISITED_KEY, WORD_STATUS_KEY,
};
use crate::lessons::{all_lessons, normalize_entry, Lesson, WordEntry};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

pub struct ProgressStore {
    backend: Box<dyn KeyValueStore>,
}

impl ProgressStore {
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// 打开数据目录下的文件存储
    pub fn open(data_dir: &Path) -> Self {
        Self::new(FileStore::new(data_dir))
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    // ═══════════════════════════════════════════════════════════════
    // 安全读写
    // ═══════════════════════════════════════════════════════════════

    fn try_read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let Some(raw) = self.backend.get(key)? else {
            return Ok(None);
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StorageError::Serde {
                key: key.to_string(),
                source,
            })
    }

    fn read_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        match self.try_read(key) {
            Ok(value) => value.unwrap_or_default(),
            Err(e) => {
                log::warn!("读取 {} 失败: {}", key, e);
                T::default()
            }
        }
    }

    fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> bool {
        let result = serde_json::to_string(value)
            .map_err(|source| StorageError::Serde {
                key: key.to_string(),
                source,
            })
            .and_then(|json| self.backend.set(key, &json));

        match result {
            Ok(()) => true,
            Err(e) => {
                log::warn!("保存 {} 失败: {}", key, e);
                false
            }
        }
    }

    // ═══════════════════════════════════════════════════════════════
    // 掌握状态
    // ═══════════════════════════════════════════════════════════════

    /// 当前状态映射，缺失或损坏时为空
    pub fn get_status(&self) -> StatusMap {
        self.read_or_default(WORD_STATUS_KEY)
    }

    pub fn set_status(&self, map: &StatusMap) -> bool {
        self.write(WORD_STATUS_KEY, map)
    }

    /// 单个词组的状态，缺省为 unknown
    pub fn status_of(&self, key: &str) -> WordStatus {
        resolve_status(&self.get_status(), key)
    }

    /// 推进状态：unknown → maybe → known → unknown
    ///
    /// 即使写入失败也返回新状态（失败已记录日志）。
    pub fn cycle_status(&self, key: &str) -> WordStatus {
        let mut map = self.get_status();
        let next = resolve_status(&map, key).next();
        map.insert(key.to_string(), next);

        if !self.set_status(&map) {
            log::warn!("状态 {} -> {} 未能保存", key, next);
        }
        next
    }

    // ═══════════════════════════════════════════════════════════════
    // 自定义词组
    // ═══════════════════════════════════════════════════════════════

    pub fn get_custom_words(&self) -> Vec<WordEntry> {
        self.read_or_default(CUSTOM_WORDS_KEY)
    }

    pub fn set_custom_words(&self, words: &[WordEntry]) -> bool {
        self.write(CUSTOM_WORDS_KEY, words)
    }

    /// 添加自定义词组：校验非空、修正拼音后追加
    pub fn add_custom_word(&self, word: &str, pinyin: &str) -> Result<WordEntry, StoreError> {
        let word = word.trim();
        let pinyin = pinyin.trim();

        if word.is_empty() {
            return Err(ValidationError::EmptyWord.into());
        }
        if pinyin.is_empty() {
            return Err(ValidationError::EmptyPinyin.into());
        }

        let entry = normalize_entry(WordEntry::new(pinyin, word));
        let mut words = self.get_custom_words();
        words.push(entry.clone());

        if !self.set_custom_words(&words) {
            return Err(StoreError::WriteFailed(CUSTOM_WORDS_KEY));
        }
        Ok(entry)
    }

    /// 内置课文 + 自定义分组
    pub fn lessons(&self) -> Vec<Lesson> {
        all_lessons(&self.get_custom_words())
    }

    // ═══════════════════════════════════════════════════════════════
    // 重置 / 首次访问
    // ═══════════════════════════════════════════════════════════════

    /// 删除全部状态与自定义词组
    pub fn reset(&self) -> bool {
        let mut ok = true;
        for key in [WORD_STATUS_KEY, CUSTOM_WORDS_KEY] {
            if let Err(e) = self.backend.remove(key) {
                log::warn!("删除 {} 失败: {}", key, e);
                ok = false;
            }
        }
        if ok {
            log::info!("学习进度已重置");
        }
        ok
    }

    pub fn is_first_visit(&self) -> bool {
        !matches!(self.backend.get(HAS_VISITED_KEY), Ok(Some(_)))
    }

    pub fn mark_visited(&self) -> bool {
        self.write(HAS_VISITED_KEY, "true")
    }

    // ═══════════════════════════════════════════════════════════════
    // 导出 / 导入
    // ═══════════════════════════════════════════════════════════════

    pub fn export_snapshot(&self) -> Snapshot {
        Snapshot::capture(self.get_status(), self.get_custom_words())
    }

    /// 导入备份：至少包含 wordStatus 或 customWords 之一，存在的字段整体覆盖
    ///
    /// 两个字段要么都写入成功，要么都保持导入前的内容。
    pub fn import_snapshot(&self, snapshot: &Snapshot) -> Result<ImportSummary, ImportError> {
        snapshot.validate()?;

        let words: Option<Vec<WordEntry>> = snapshot
            .custom_words
            .as_ref()
            .map(|words| words.iter().cloned().map(normalize_entry).collect());

        // 第二个字段写入失败时用于回滚
        let previous_status = match (&snapshot.word_status, &words) {
            (Some(_), Some(_)) => Some(
                self.backend
                    .get(WORD_STATUS_KEY)
                    .map_err(|e| {
                        log::warn!("读取 {} 失败: {}", WORD_STATUS_KEY, e);
                        ImportError::WriteFailed(WORD_STATUS_KEY)
                    })?,
            ),
            _ => None,
        };

        let mut summary = ImportSummary::default();

        if let Some(map) = &snapshot.word_status {
            if !self.set_status(map) {
                return Err(ImportError::WriteFailed(WORD_STATUS_KEY));
            }
            summary.statuses = Some(map.len());
        }

        if let Some(words) = &words {
            if !self.set_custom_words(words) {
                if let Some(raw) = previous_status {
                    self.restore_raw(WORD_STATUS_KEY, raw);
                }
                return Err(ImportError::WriteFailed(CUSTOM_WORDS_KEY));
            }
            summary.custom_words = Some(words.len());
        }

        log::info!("导入完成: {:?}", summary);
        Ok(summary)
    }

    /// 写回原始文本，原来不存在的键直接删除
    fn restore_raw(&self, key: &str, raw: Option<String>) {
        let result = match raw {
            Some(raw) => self.backend.set(key, &raw),
            None => self.backend.remove(key),
        };
        if let Err(e) = result {
            log::warn!("回滚 {} 失败: {}", key, e);
        }
    }
}
