//! 打印内容组装
//!
//! 两种来源使用同一套排版：
//! - 打印当前筛选视图：每个课文分组一个区块
//! - 自定义生字本：随机选词后按课文分组，附带总数标题

use super::packer::{pack, PackLimits, PrintRow};
use super::selector::PracticeGroup;
use crate::view::View;

/// 没有任何选中词组时的提示
pub const EMPTY_PRACTICE_NOTICE: &str = "没有找到符合条件的生字";

/// 一个课文区块
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintSection {
    pub title: String,
    pub rows: Vec<PrintRow>,
}

impl PrintSection {
    pub fn word_count(&self) -> usize {
        self.rows.iter().map(|r| r.words.len()).sum()
    }
}

/// 完整的打印内容
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrintSheet {
    pub heading: Option<String>,
    pub sections: Vec<PrintSection>,
    /// 内容为空时显示的提示
    pub notice: Option<String>,
}

impl PrintSheet {
    /// 打印当前视图
    pub fn from_view(view: &View, limits: PackLimits) -> Self {
        let sections = view
            .lessons
            .iter()
            .map(|lesson| PrintSection {
                title: lesson.title.clone(),
                rows: pack(&lesson.entries(), limits),
            })
            .collect();

        Self {
            heading: None,
            sections,
            notice: None,
        }
    }

    /// 自定义生字本
    pub fn practice(groups: &[PracticeGroup], limits: PackLimits) -> Self {
        let total: usize = groups.iter().map(|g| g.words.len()).sum();

        if total == 0 {
            return Self {
                heading: None,
                sections: vec![],
                notice: Some(EMPTY_PRACTICE_NOTICE.to_string()),
            };
        }

        let sections = groups
            .iter()
            .filter(|g| !g.words.is_empty())
            .map(|g| PrintSection {
                title: format!("{} ({}个)", g.title, g.words.len()),
                rows: pack(&g.words, limits),
            })
            .collect();

        Self {
            heading: Some(format!("自定义生字本 (共{}个生字)", total)),
            sections,
            notice: None,
        }
    }

    pub fn word_count(&self) -> usize {
        self.sections.iter().map(|s| s.word_count()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
