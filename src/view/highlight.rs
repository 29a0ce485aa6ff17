//! 搜索高亮
//!
//! 将文本中所有与关键词匹配（不区分大小写）的片段用标记包裹。

use regex::{Regex, RegexBuilder};

/// 搜索关键词高亮器
#[derive(Debug, Clone)]
pub struct Highlighter {
    pattern: Option<Regex>,
    open: String,
    close: String,
}

impl Highlighter {
    /// 创建高亮器，空关键词不做任何处理
    pub fn new(query: &str, open: impl Into<String>, close: impl Into<String>) -> Self {
        let pattern = if query.is_empty() {
            None
        } else {
            RegexBuilder::new(&regex::escape(query))
                .case_insensitive(true)
                .build()
                .ok()
        };

        Self {
            pattern,
            open: open.into(),
            close: close.into(),
        }
    }

    /// 用方括号标记
    pub fn brackets(query: &str) -> Self {
        Self::new(query, "[", "]")
    }

    pub fn apply(&self, text: &str) -> String {
        let Some(pattern) = &self.pattern else {
            return text.to_string();
        };

        pattern
            .replace_all(text, |caps: &regex::Captures| {
                format!("{}{}{}", self.open, &caps[0], self.close)
            })
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_returns_text() {
        assert_eq!(Highlighter::brackets("").apply("shī gē"), "shī gē");
    }

    #[test]
    fn test_highlight_all_matches_case_insensitive() {
        let hl = Highlighter::new("A", "<b>", "</b>");
        assert_eq!(hl.apply("banana"), "b<b>a</b>n<b>a</b>n<b>a</b>");
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let hl = Highlighter::brackets("a.b");
        assert_eq!(hl.apply("a.b axb"), "[a.b] axb");
    }

    #[test]
    fn test_highlight_chinese() {
        assert_eq!(Highlighter::brackets("童").apply("童年"), "[童]年");
    }
}
