//! 会话模块
//!
//! 一次使用过程中的界面状态（搜索关键词、状态过滤、拼音模式），
//! 以显式对象传给视图构建与打印，而不是全局变量。
//! 同时提供防抖和打印任务等异步边界。

pub mod debounce;
pub mod print_job;
pub mod schedule;

pub use debounce::{Debouncer, DEFAULT_DEBOUNCE};
pub use print_job::{PrintJob, PrintOutcome, PrintSurface, DEFAULT_PRINT_FALLBACK};
pub use schedule::ScheduledTask;

use crate::lessons::Lesson;
use crate::print::{PackLimits, PrintSheet};
use crate::progress::StatusMap;
use crate::view::{build_view, StatusFilter, View};

/// 界面会话状态
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub filter: StatusFilter,
    query: String,
    /// 拼音模式：只显示拼音
    pub pinyin_mode: bool,
}

impl Session {
    pub fn new(filter: StatusFilter, query: &str) -> Self {
        let mut session = Self {
            filter,
            ..Default::default()
        };
        session.set_query(query);
        session
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// 设置搜索关键词（去除首尾空白）
    pub fn set_query(&mut self, query: &str) {
        self.query = query.trim().to_string();
    }

    pub fn clear_search(&mut self) {
        self.query.clear();
    }

    pub fn toggle_pinyin_mode(&mut self) -> bool {
        self.pinyin_mode = !self.pinyin_mode;
        self.pinyin_mode
    }

    pub fn build_view(&self, lessons: &[Lesson], statuses: &StatusMap) -> View {
        build_view(lessons, statuses, self.filter, &self.query)
    }

    /// 打印当前筛选结果
    pub fn print_sheet(
        &self,
        lessons: &[Lesson],
        statuses: &StatusMap,
        limits: PackLimits,
    ) -> PrintSheet {
        PrintSheet::from_view(&self.build_view(lessons, statuses), limits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lessons::WordEntry;
    use crate::progress::WordStatus;

    fn lessons() -> Vec<Lesson> {
        vec![Lesson::new(
            "课文1",
            vec![
                WordEntry::new("shī gē", "诗歌"),
                WordEntry::new("chèn jī", "趁机"),
            ],
        )]
    }

    #[test]
    fn test_query_is_trimmed() {
        let session = Session::new(StatusFilter::All, "  shī ");
        assert_eq!(session.query(), "shī");
    }

    #[test]
    fn test_session_drives_view() {
        let mut statuses = StatusMap::new();
        statuses.insert("0_1".to_string(), WordStatus::Known);

        let mut session = Session::new(StatusFilter::Known, "");
        assert_eq!(session.build_view(&lessons(), &statuses).total(), 1);

        session.filter = StatusFilter::All;
        session.set_query("诗");
        let view = session.build_view(&lessons(), &statuses);
        assert_eq!(view.total(), 1);
        assert_eq!(view.lessons[0].items[0].key, "0_0");

        session.clear_search();
        assert_eq!(session.build_view(&lessons(), &statuses).total(), 2);
    }

    #[test]
    fn test_toggle_pinyin_mode() {
        let mut session = Session::default();
        assert!(session.toggle_pinyin_mode());
        assert!(!session.toggle_pinyin_mode());
    }

    #[test]
    fn test_print_sheet_uses_filter() {
        let session = Session::new(StatusFilter::Unknown, "");
        let sheet = session.print_sheet(&lessons(), &StatusMap::new(), PackLimits::default());
        assert_eq!(sheet.word_count(), 2);
    }
}
