//! 内置课文数据集
//!
//! 使用 rust-embed 将 assets/lessons.json 编译进二进制，
//! 首次访问时解析并统一做一次拼音修正。

use super::{normalize_lessons, Lesson};
use anyhow::{anyhow, Context, Result};
use lazy_static::lazy_static;
use rust_embed::RustEmbed;

const LESSONS_FILE: &str = "lessons.json";

/// 内置资源（编译时嵌入）
#[derive(RustEmbed)]
#[folder = "assets/"]
pub struct LessonAssets;

impl LessonAssets {
    /// 解析内置课文（未修正）
    pub fn load_lessons() -> Result<Vec<Lesson>> {
        let file = Self::get(LESSONS_FILE)
            .ok_or_else(|| anyhow!("Embedded asset '{}' not found", LESSONS_FILE))?;

        serde_json::from_slice(file.data.as_ref())
            .with_context(|| format!("Failed to parse embedded {}", LESSONS_FILE))
    }
}

lazy_static! {
    static ref BUILTIN_LESSONS: Vec<Lesson> = {
        let mut lessons = LessonAssets::load_lessons().unwrap_or_else(|e| {
            log::error!("内置课文加载失败: {:#}", e);
            Vec::new()
        });
        normalize_lessons(&mut lessons);
        lessons
    };
}

/// 内置课文（已修正，进程内只解析一次）
pub fn builtin_lessons() -> &'static [Lesson] {
    &BUILTIN_LESSONS
}
