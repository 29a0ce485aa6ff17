//! 视图构建模块
//!
//! 根据状态过滤和搜索关键词，从课文列表生成按课文分组的 (课文, 词组, 状态) 序列。
//! 纯函数，无副作用；渲染层（CLI 或其他界面）只消费这里产出的数据。

pub mod highlight;
pub mod stats;

pub use highlight::Highlighter;
pub use stats::{Recommendation, StudyStats};

use crate::lessons::{Lesson, WordEntry};
use crate::progress::{resolve_status, status_key, StatusMap, WordStatus};

// ═══════════════════════════════════════════════════════════════════
// 状态过滤
// ═══════════════════════════════════════════════════════════════════

/// 状态过滤条件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Unknown,
    Maybe,
    Known,
    /// 不会 + 可能会
    UnknownMaybe,
}

impl StatusFilter {
    pub fn matches(&self, status: WordStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Unknown => status == WordStatus::Unknown,
            StatusFilter::Maybe => status == WordStatus::Maybe,
            StatusFilter::Known => status == WordStatus::Known,
            StatusFilter::UnknownMaybe => {
                matches!(status, WordStatus::Unknown | WordStatus::Maybe)
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Unknown => "unknown",
            StatusFilter::Maybe => "maybe",
            StatusFilter::Known => "known",
            StatusFilter::UnknownMaybe => "unknown-maybe",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "all" => Some(StatusFilter::All),
            "unknown" => Some(StatusFilter::Unknown),
            "maybe" => Some(StatusFilter::Maybe),
            "known" => Some(StatusFilter::Known),
            "unknown-maybe" => Some(StatusFilter::UnknownMaybe),
            _ => None,
        }
    }
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatusFilter::parse(s).ok_or_else(|| {
            format!(
                "invalid filter '{}' (expected all, unknown, maybe, known, unknown-maybe)",
                s
            )
        })
    }
}

/// 搜索匹配：空关键词恒匹配，否则对词组或拼音做不区分大小写的子串匹配
pub fn matches_search(entry: &WordEntry, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let query = query.to_lowercase();
    entry.word.to_lowercase().contains(&query) || entry.pinyin.to_lowercase().contains(&query)
}

// ═══════════════════════════════════════════════════════════════════
// 视图数据
// ═══════════════════════════════════════════════════════════════════

/// 视图中的单个词组
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewItem {
    pub word_idx: usize,
    pub key: String,
    pub entry: WordEntry,
    pub status: WordStatus,
}

/// 一个课文分组（只包含匹配的词组）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonView {
    pub lesson_idx: usize,
    pub title: String,
    pub items: Vec<ViewItem>,
}

impl LessonView {
    pub fn entries(&self) -> Vec<WordEntry> {
        self.items.iter().map(|item| item.entry.clone()).collect()
    }
}

/// 过滤后的完整视图
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct View {
    pub lessons: Vec<LessonView>,
    pub query: String,
}

impl View {
    pub fn total(&self) -> usize {
        self.lessons.iter().map(|l| l.items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    /// 有搜索关键词但没有任何结果
    pub fn no_results(&self) -> bool {
        !self.query.is_empty() && self.is_empty()
    }

    pub fn items(&self) -> impl Iterator<Item = &ViewItem> {
        self.lessons.iter().flat_map(|l| l.items.iter())
    }
}

/// 构建视图，没有任何匹配词组的课文整体省略
pub fn build_view(
    lessons: &[Lesson],
    statuses: &StatusMap,
    filter: StatusFilter,
    query: &str,
) -> View {
    let lessons = lessons
        .iter()
        .enumerate()
        .filter_map(|(lesson_idx, lesson)| {
            let items: Vec<ViewItem> = lesson
                .words
                .iter()
                .enumerate()
                .filter_map(|(word_idx, entry)| {
                    let key = status_key(lesson_idx, word_idx);
                    let status = resolve_status(statuses, &key);

                    (filter.matches(status) && matches_search(entry, query)).then(|| ViewItem {
                        word_idx,
                        key,
                        entry: entry.clone(),
                        status,
                    })
                })
                .collect();

            (!items.is_empty()).then(|| LessonView {
                lesson_idx,
                title: lesson.title.clone(),
                items,
            })
        })
        .collect();

    View {
        lessons,
        query: query.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn lessons() -> Vec<Lesson> {
        vec![
            Lesson::new(
                "课文1",
                vec![
                    WordEntry::new("shī gē", "诗歌"),
                    WordEntry::new("chèn jī", "趁机"),
                    WordEntry::new("tóng nián", "童年"),
                ],
            ),
            Lesson::new(
                "课文2",
                vec![
                    WordEntry::new("zǐ xì", "仔细"),
                    WordEntry::new("xún zhǎo", "寻找"),
                ],
            ),
            Lesson::new("Custom", vec![WordEntry::new("OK", "好")]),
        ]
    }

    fn statuses() -> StatusMap {
        let mut map = StatusMap::new();
        map.insert("0_0".to_string(), WordStatus::Known);
        map.insert("0_1".to_string(), WordStatus::Maybe);
        map.insert("1_0".to_string(), WordStatus::Known);
        map.insert("1_1".to_string(), WordStatus::Known);
        map
    }

    fn keys(view: &View) -> HashSet<String> {
        view.items().map(|i| i.key.clone()).collect()
    }

    #[test]
    fn test_all_filter_keeps_everything() {
        let view = build_view(&lessons(), &statuses(), StatusFilter::All, "");
        assert_eq!(view.total(), 6);
        assert_eq!(view.lessons.len(), 3);
    }

    #[test]
    fn test_exact_filter_omits_empty_lessons() {
        let view = build_view(&lessons(), &statuses(), StatusFilter::Unknown, "");

        let titles: Vec<&str> = view.lessons.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["课文1", "Custom"]);
        assert_eq!(view.lessons[0].items[0].key, "0_2");
        assert_eq!(view.lessons[1].lesson_idx, 2);
    }

    #[test]
    fn test_unknown_maybe_is_union() {
        let unknown = keys(&build_view(&lessons(), &statuses(), StatusFilter::Unknown, ""));
        let maybe = keys(&build_view(&lessons(), &statuses(), StatusFilter::Maybe, ""));
        let combined = build_view(&lessons(), &statuses(), StatusFilter::UnknownMaybe, "");

        let expected: HashSet<String> = unknown.union(&maybe).cloned().collect();
        assert_eq!(keys(&combined), expected);
        assert!(combined.items().all(|i| i.status != WordStatus::Known));
    }

    #[test]
    fn test_search_matches_word_or_pinyin_case_insensitive() {
        let view = build_view(&lessons(), &statuses(), StatusFilter::All, "ok");
        assert_eq!(keys(&view), HashSet::from(["2_0".to_string()]));

        let view = build_view(&lessons(), &statuses(), StatusFilter::All, "童");
        assert_eq!(keys(&view), HashSet::from(["0_2".to_string()]));

        let view = build_view(&lessons(), &statuses(), StatusFilter::All, "ZHǍO");
        assert_eq!(keys(&view), HashSet::from(["1_1".to_string()]));
    }

    #[test]
    fn test_search_results_all_contain_query() {
        let query = "i";
        let view = build_view(&lessons(), &statuses(), StatusFilter::All, query);
        assert!(view.total() > 0);
        for item in view.items() {
            assert!(
                item.entry.word.to_lowercase().contains(query)
                    || item.entry.pinyin.to_lowercase().contains(query)
            );
        }
    }

    #[test]
    fn test_empty_query_is_identity() {
        for filter in [
            StatusFilter::All,
            StatusFilter::Unknown,
            StatusFilter::Maybe,
            StatusFilter::Known,
            StatusFilter::UnknownMaybe,
        ] {
            let view = build_view(&lessons(), &statuses(), filter, "");
            let expected = lessons()
                .iter()
                .enumerate()
                .flat_map(|(li, l)| (0..l.words.len()).map(move |wi| status_key(li, wi)))
                .filter(|k| filter.matches(resolve_status(&statuses(), k)))
                .count();
            assert_eq!(view.total(), expected);
        }
    }

    #[test]
    fn test_no_results_flag() {
        let view = build_view(&lessons(), &statuses(), StatusFilter::All, "不存在");
        assert!(view.no_results());

        let view = build_view(&lessons(), &statuses(), StatusFilter::Known, "");
        assert!(!view.no_results());
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!(
            "unknown-maybe".parse::<StatusFilter>().unwrap(),
            StatusFilter::UnknownMaybe
        );
        assert!("sometimes".parse::<StatusFilter>().is_err());
    }
}
