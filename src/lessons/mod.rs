//! 课文与词组模块
//!
//! 定义 WordEntry / Lesson 数据结构，负责拼音与汉字的对齐修正，
//! 以及内置课文与自定义分组的组装。

pub mod dataset;
pub mod normalize;

pub use dataset::{builtin_lessons, LessonAssets};
pub use normalize::{normalize_entry, normalize_lessons, normalize_pinyin};

use serde::{Deserialize, Serialize};

/// 自定义分组的标题
pub const CUSTOM_LESSON_TITLE: &str = "自定义";

// ═══════════════════════════════════════════════════════════════════
// 数据结构
// ═══════════════════════════════════════════════════════════════════

/// 单个词组（汉字 + 拼音）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    /// 以空格分隔的拼音音节
    pub pinyin: String,
    /// 汉字序列
    pub word: String,
}

impl WordEntry {
    pub fn new(pinyin: impl Into<String>, word: impl Into<String>) -> Self {
        Self {
            pinyin: pinyin.into(),
            word: word.into(),
        }
    }

    /// 汉字个数（按 Unicode 标量计）
    pub fn char_count(&self) -> usize {
        self.word.chars().count()
    }

    /// 逐字对应的音节列表
    ///
    /// 对已经修正过的词组，返回长度恰好等于汉字个数（空音节以 "" 表示）。
    pub fn syllables(&self) -> Vec<&str> {
        if self.word.is_empty() {
            return vec![];
        }
        self.pinyin.split(' ').collect()
    }
}

/// 课文：有序的词组分组
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub title: String,
    pub words: Vec<WordEntry>,
}

impl Lesson {
    pub fn new(title: impl Into<String>, words: Vec<WordEntry>) -> Self {
        Self {
            title: title.into(),
            words,
        }
    }

    pub fn is_custom(&self) -> bool {
        self.title == CUSTOM_LESSON_TITLE
    }
}

// ═══════════════════════════════════════════════════════════════════
// 课文组装
// ═══════════════════════════════════════════════════════════════════

/// 组装全部课文：内置课文 + 自定义分组
///
/// 仅当存在自定义词组时才追加自定义分组；若内置列表中已有同名分组则原地替换其词组。
pub fn assemble_lessons(builtin: &[Lesson], custom_words: &[WordEntry]) -> Vec<Lesson> {
    let mut lessons = builtin.to_vec();

    if custom_words.is_empty() {
        return lessons;
    }

    match lessons.iter_mut().find(|l| l.is_custom()) {
        Some(existing) => existing.words = custom_words.to_vec(),
        None => lessons.push(Lesson::new(CUSTOM_LESSON_TITLE, custom_words.to_vec())),
    }

    lessons
}

/// 使用内置数据集组装全部课文
pub fn all_lessons(custom_words: &[WordEntry]) -> Vec<Lesson> {
    assemble_lessons(builtin_lessons(), custom_words)
}
