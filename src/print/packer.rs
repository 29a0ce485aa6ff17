//! 田字格排版
//!
//! 贪心单遍扫描，按输入顺序把词组装入行：每行最多 6 个词组，且累计字数不超过 14。
//! 空行遇到的第一个词组即使超过字数上限也独占一行，保证一定前进。

use crate::lessons::WordEntry;
use serde::{Deserialize, Serialize};

/// 每行容量限制
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackLimits {
    #[serde(default = "default_max_words")]
    pub max_words_per_row: usize,
    #[serde(default = "default_max_chars")]
    pub max_chars_per_row: usize,
}

fn default_max_words() -> usize {
    6
}

fn default_max_chars() -> usize {
    14
}

impl Default for PackLimits {
    fn default() -> Self {
        Self {
            max_words_per_row: default_max_words(),
            max_chars_per_row: default_max_chars(),
        }
    }
}

/// 一个田字格：汉字与对应音节
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    pub character: char,
    pub pinyin: String,
}

/// 一个词组展开后的格子组
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintWord {
    pub entry: WordEntry,
    pub cells: Vec<GridCell>,
}

impl PrintWord {
    /// 逐字配对音节，音节不足时用空串
    pub fn expand(entry: &WordEntry) -> Self {
        let syllables = entry.syllables();
        let cells = entry
            .word
            .chars()
            .enumerate()
            .map(|(idx, character)| GridCell {
                character,
                pinyin: syllables.get(idx).copied().unwrap_or("").to_string(),
            })
            .collect();

        Self {
            entry: entry.clone(),
            cells,
        }
    }
}

/// 一行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintRow {
    pub words: Vec<PrintWord>,
}

impl PrintRow {
    pub fn char_count(&self) -> usize {
        self.words.iter().map(|w| w.cells.len()).sum()
    }
}

/// 按容量把输入切分为连续的行（不重排、不丢失、不重复）
pub fn partition(entries: &[WordEntry], limits: PackLimits) -> Vec<&[WordEntry]> {
    let max_words = limits.max_words_per_row.max(1);
    let mut rows = Vec::new();
    let mut start = 0;

    while start < entries.len() {
        let mut end = start;
        let mut chars = 0;

        while end < entries.len() && end - start < max_words {
            let len = entries[end].char_count();
            if end > start && chars + len > limits.max_chars_per_row {
                break;
            }
            chars += len;
            end += 1;
        }

        if chars > limits.max_chars_per_row {
            log::debug!("超长词组独占一行: {}", entries[start].word);
        }

        rows.push(&entries[start..end]);
        start = end;
    }

    rows
}

/// 切分并展开为田字格行
pub fn pack(entries: &[WordEntry], limits: PackLimits) -> Vec<PrintRow> {
    partition(entries, limits)
        .into_iter()
        .map(|row| PrintRow {
            words: row.iter().map(PrintWord::expand).collect(),
        })
        .collect()
}
