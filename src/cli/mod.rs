//! CLI 命令实现
//!
//! 终端就是这里的渲染层：把视图、统计和打印内容格式化为文本输出。

pub mod commands;
pub mod study;

pub use commands::*;
pub use study::run_study;

use crate::config::AppConfig;
use crate::progress::{ProgressStore, WordStatus};
use crate::session::Session;
use crate::view::{Highlighter, StudyStats, View};
use colored::Colorize;

/// 一次运行所需的上下文
pub struct App {
    pub config: AppConfig,
    pub store: ProgressStore,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let store = ProgressStore::open(config.data_dir());
        Self { config, store }
    }

    pub fn stats(&self) -> StudyStats {
        StudyStats::collect(&self.store.lessons(), &self.store.get_status())
    }

    pub fn view(&self, session: &Session) -> View {
        session.build_view(&self.store.lessons(), &self.store.get_status())
    }
}

// ═══════════════════════════════════════════════════════════════════
// 文本格式化
// ═══════════════════════════════════════════════════════════════════

pub fn status_mark(status: WordStatus) -> String {
    match status {
        WordStatus::Unknown => "✗".red().to_string(),
        WordStatus::Maybe => "?".yellow().to_string(),
        WordStatus::Known => "✓".green().to_string(),
    }
}

fn highlighter(query: &str) -> Highlighter {
    if colored::control::SHOULD_COLORIZE.should_colorize() {
        Highlighter::new(query, "\u{1b}[7m", "\u{1b}[27m")
    } else {
        Highlighter::brackets(query)
    }
}

/// 视图文本：按课文分组，每个词组一行
pub fn format_view(view: &View, session: &Session) -> String {
    if view.no_results() {
        return format!(
            "🔍 没有找到包含 \"{}\" 的生字\n   请尝试其他关键词或检查拼写\n",
            view.query
        );
    }

    let hl = highlighter(&view.query);
    let mut out = String::new();

    for lesson in &view.lessons {
        out.push_str(&format!("{}\n", lesson.title.cyan().bold()));
        for item in &lesson.items {
            let text = if session.pinyin_mode {
                hl.apply(&item.entry.pinyin)
            } else {
                format!(
                    "{}  {}",
                    hl.apply(&item.entry.word),
                    hl.apply(&item.entry.pinyin).dimmed()
                )
            };
            out.push_str(&format!(
                "  {} {:<7} {}\n",
                status_mark(item.status),
                format!("[{}]", item.key),
                text
            ));
        }
    }

    out
}

/// 学习进度条
pub fn format_progress(stats: &StudyStats) -> String {
    const WIDTH: usize = 30;
    let pct = stats.progress_percent();
    let filled = ((pct / 100.0) * WIDTH as f64).round() as usize;

    format!(
        "总计: {}  已掌握: {}  模糊: {}  不会: {}\n[{}{}] {:.1}%",
        stats.total,
        stats.known.to_string().green(),
        stats.maybe.to_string().yellow(),
        stats.unknown.to_string().red(),
        "█".repeat(filled).green(),
        "░".repeat(WIDTH - filled.min(WIDTH)),
        pct
    )
}
