//! 交互式学习
//!
//! 逐行读取标准输入：普通文本作为搜索关键词，以防抖方式刷新视图；
//! 切换状态、添加词组立即生效；`print` 把当前筛选结果交给打印任务。

use super::{commands, format_progress, format_view, App};
use crate::print::render_text;
use crate::session::{Debouncer, PrintJob, PrintSurface, Session};
use crate::view::StatusFilter;
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

/// 交互命令
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Quit,
    Help,
    Toggle(String),
    Add { word: String, pinyin: String },
    Filter(StatusFilter),
    PinyinMode,
    ClearSearch,
    Print,
    Stats,
    Search(String),
    Invalid(String),
    Empty,
}

impl Input {
    fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Self::Empty;
        }

        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };

        match head {
            "q" | "quit" | "exit" => Self::Quit,
            "h" | "help" => Self::Help,
            "p" | "pinyin" => Self::PinyinMode,
            "c" | "clear" => Self::ClearSearch,
            "print" => Self::Print,
            "stats" => Self::Stats,
            "t" if !rest.is_empty() => Self::Toggle(rest.to_string()),
            "t" => Self::Invalid("用法: t <课文序号_词组序号>（搜索 t 请输入 / t）".to_string()),
            "f" => match rest.parse() {
                Ok(filter) => Self::Filter(filter),
                Err(e) => Self::Invalid(e),
            },
            "a" => match rest.split_once(char::is_whitespace) {
                Some((word, pinyin)) => Self::Add {
                    word: word.to_string(),
                    pinyin: pinyin.trim().to_string(),
                },
                None => Self::Invalid("用法: a <词组> <拼音>（搜索 a 请输入 / a）".to_string()),
            },
            "/" => Self::Search(rest.to_string()),
            _ => Self::Search(line.to_string()),
        }
    }
}

enum Event {
    Line(Option<String>),
    Refresh,
}

// ═══════════════════════════════════════════════════════════════════
// 终端显示区
// ═══════════════════════════════════════════════════════════════════

/// 终端显示区：替换内容即重绘，打印即写入 prints 目录
struct TerminalScreen {
    content: String,
    prints_dir: PathBuf,
    echo: bool,
}

impl TerminalScreen {
    fn new(prints_dir: PathBuf) -> Self {
        Self {
            content: String::new(),
            prints_dir,
            echo: true,
        }
    }

    fn draw(&self) {
        if self.echo {
            println!("{}", "─".repeat(40).dimmed());
            print!("{}", self.content);
            println!();
        }
    }
}

impl PrintSurface for TerminalScreen {
    fn replace(&mut self, content: String) -> String {
        let old = std::mem::replace(&mut self.content, content);
        self.draw();
        old
    }

    fn print(&mut self) -> Result<()> {
        fs::create_dir_all(&self.prints_dir)
            .with_context(|| format!("Failed to create {}", self.prints_dir.display()))?;

        let name = format!("练习纸_{}.txt", chrono::Local::now().format("%Y%m%d_%H%M%S"));
        let path = self.prints_dir.join(name);
        fs::write(&path, &self.content)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        log::info!("print sheet written to {}", path.display());
        if self.echo {
            println!("{} 已发送打印: {}", "🖨".cyan(), path.display());
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════
// 主循环
// ═══════════════════════════════════════════════════════════════════

fn render(app: &App, session: &Session) -> String {
    let view = app.view(session);
    let mode = if session.pinyin_mode { "拼音" } else { "词组" };

    format!(
        "{}\n{}\n过滤: {}  搜索: {}  模式: {}\n",
        format_view(&view, session),
        format_progress(&app.stats()),
        session.filter.as_str().yellow(),
        if session.query().is_empty() { "-" } else { session.query() },
        mode
    )
}

/// 单个字母会被当作命令，搜索它们需要 `/` 前缀
const PROMPT_HINT: &str = "输入文字搜索（搜索 a、t、p 等单个字母请输入 / a）| t <键> 切换 | a <词组> <拼音> 添加 | f <过滤> | p 拼音模式 | c 清除搜索 | print | stats | h | q";

fn prompt_hint() {
    println!("{}", PROMPT_HINT.dimmed());
}

/// 交互式学习主循环，标准输入结束或输入 q 时退出
pub async fn run_study(app: &App) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let (refresh_tx, mut refresh_rx) = mpsc::unbounded_channel::<()>();
    let mut debouncer = Debouncer::new(app.config.debounce());
    let mut session = Session::default();
    let mut screen = TerminalScreen::new(app.config.data_dir().join("prints"));

    screen.replace(render(app, &session));
    prompt_hint();

    loop {
        let event = tokio::select! {
            line = lines.next_line() => Event::Line(line?),
            Some(()) = refresh_rx.recv() => Event::Refresh,
        };

        let line = match event {
            Event::Refresh => {
                screen.replace(render(app, &session));
                continue;
            }
            Event::Line(None) => break,
            Event::Line(Some(line)) => line,
        };

        let immediate = match Input::parse(&line) {
            Input::Quit => break,
            Input::Empty => false,
            Input::Help => {
                commands::show_help()?;
                false
            }
            Input::Stats => {
                commands::stats(app)?;
                false
            }
            Input::Toggle(key) => report(commands::toggle(app, &key)),
            Input::Add { word, pinyin } => report(commands::add(app, &word, &pinyin)),
            Input::ClearSearch => {
                debouncer.cancel();
                session.clear_search();
                true
            }
            Input::Filter(filter) => {
                session.filter = filter;
                schedule_refresh(&mut debouncer, &refresh_tx);
                false
            }
            Input::PinyinMode => {
                session.toggle_pinyin_mode();
                schedule_refresh(&mut debouncer, &refresh_tx);
                false
            }
            Input::Search(query) => {
                session.set_query(&query);
                schedule_refresh(&mut debouncer, &refresh_tx);
                false
            }
            Input::Invalid(msg) => {
                println!("{}", msg.yellow());
                false
            }
            Input::Print => {
                debouncer.cancel();
                let sheet = session.print_sheet(
                    &app.store.lessons(),
                    &app.store.get_status(),
                    app.config.pack_limits(),
                );
                let job = PrintJob::new(app.config.print_fallback());
                println!(
                    "{}",
                    format!(
                        "打印完成后按回车返回（{} 秒后自动返回）",
                        app.config.print_fallback().as_secs()
                    )
                    .dimmed()
                );

                let completed = async {
                    let _ = lines.next_line().await;
                };
                match job.run(&mut screen, render_text(&sheet), completed).await {
                    Ok(outcome) => {
                        log::debug!("print job finished: {:?}", outcome);
                        false
                    }
                    Err(e) => {
                        println!("{} {:#}", "✗".red(), e);
                        false
                    }
                }
            }
        };

        if immediate {
            screen.replace(render(app, &session));
        }
    }

    debouncer.cancel();
    Ok(())
}

fn schedule_refresh(debouncer: &mut Debouncer, tx: &mpsc::UnboundedSender<()>) {
    let tx = tx.clone();
    debouncer.call(move || {
        let _ = tx.send(());
    });
}

/// 输出命令错误，成功时需要重绘
fn report(result: Result<()>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            println!("{} {:#}", "✗".red(), e);
            false
        }
    }
}
