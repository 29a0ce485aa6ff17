//! 一次性子命令

use super::{format_progress, format_view, status_mark, App};
use crate::lessons::WordEntry;
use crate::print::{render_text, select_practice, PracticeCounts, PrintSheet};
use crate::progress::{export_filename, Snapshot, WordStatus};
use crate::session::Session;
use crate::utils::write_json;
use crate::view::StatusFilter;
use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// 列出（筛选后的）词组
pub fn list(app: &App, filter: StatusFilter, query: &str, pinyin_mode: bool) -> Result<()> {
    let mut session = Session::new(filter, query);
    session.pinyin_mode = pinyin_mode;

    let view = app.view(&session);
    print!("{}", format_view(&view, &session));

    println!();
    println!("{}", format_progress(&app.stats()));
    Ok(())
}

/// 切换词组状态：unknown → maybe → known → unknown
pub fn toggle(app: &App, key: &str) -> Result<()> {
    let entry = find_word(app, key)
        .with_context(|| format!("No word with key '{}' (expected <lesson>_<word>)", key))?;

    let next = app.store.cycle_status(key);
    println!(
        "{} {} {} → {}",
        status_mark(next),
        entry.word.bold(),
        entry.pinyin.dimmed(),
        next.label()
    );
    Ok(())
}

fn find_word(app: &App, key: &str) -> Option<WordEntry> {
    let (lesson, word) = key.split_once('_')?;
    let lesson: usize = lesson.parse().ok()?;
    let word: usize = word.parse().ok()?;

    app.store
        .lessons()
        .get(lesson)
        .and_then(|l| l.words.get(word))
        .cloned()
}

/// 添加自定义词组
pub fn add(app: &App, word: &str, pinyin: &str) -> Result<()> {
    let entry = app.store.add_custom_word(word, pinyin)?;
    println!("{} 已添加\"{}\" ({})", "✓".green(), entry.word, entry.pinyin);
    Ok(())
}

/// 学习进度
pub fn stats(app: &App) -> Result<()> {
    println!("{}", "📊 学习进度".cyan().bold());
    println!();
    println!("{}", format_progress(&app.stats()));
    Ok(())
}

/// 学习分析报告
pub fn report(app: &App) -> Result<()> {
    let stats = app.stats();

    println!("{}", "📈 学习分析报告".cyan().bold());
    println!();
    println!("   已掌握: {}", stats.known.to_string().green());
    println!("   掌握率: {}%", stats.mastery_rate().to_string().cyan());
    println!("   模糊:   {}", stats.maybe.to_string().yellow());
    println!("   不会:   {}", stats.unknown.to_string().red());
    println!();
    println!("{}", "💡 学习建议".bold());

    for rec in stats.recommendations() {
        println!("   {}", rec.title().bold());
        println!("   {}", rec.message());
    }
    Ok(())
}

/// 重置全部学习状态
pub fn reset(app: &App, yes: bool) -> Result<()> {
    if !yes && !confirm("确定要重置所有学习状态吗？此操作不可撤销。")? {
        println!("已取消");
        return Ok(());
    }

    if !app.store.reset() {
        bail!("重置失败，请重试");
    }
    println!("{}", "✓ 重置完成！".green());
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

/// 导出学习进度
pub fn export(app: &App, output: Option<PathBuf>) -> Result<PathBuf> {
    let path = output
        .unwrap_or_else(|| PathBuf::from(export_filename(chrono::Local::now().date_naive())));

    let snapshot = app.store.export_snapshot();
    write_json(&path, &snapshot).context("导出失败，请重试")?;

    log::info!("exported progress to {}", path.display());
    println!("{} 导出成功！{}", "✓".green(), path.display().to_string().cyan());
    Ok(path)
}

/// 导入学习进度
pub fn import(app: &App, file: &Path) -> Result<()> {
    let summary = Snapshot::read_file(file)
        .and_then(|snapshot| app.store.import_snapshot(&snapshot))
        .context("文件格式错误！请选择正确的备份文件。")?;

    println!("{} 导入成功！", "✓".green());
    if let Some(n) = summary.statuses {
        println!("   掌握状态: {} 条", n);
    }
    if let Some(n) = summary.custom_words {
        println!("   自定义词组: {} 个", n);
    }
    Ok(())
}

/// 打印当前筛选结果
pub fn print_view(
    app: &App,
    filter: StatusFilter,
    query: &str,
    output: Option<&Path>,
) -> Result<()> {
    let session = Session::new(filter, query);
    let sheet = session.print_sheet(
        &app.store.lessons(),
        &app.store.get_status(),
        app.config.pack_limits(),
    );
    emit_sheet(&sheet, output)
}

/// 生成自定义生字本
pub fn practice(app: &App, counts: PracticeCounts, output: Option<&Path>) -> Result<()> {
    counts.validate(&app.stats())?;

    let groups = select_practice(
        &app.store.lessons(),
        &app.store.get_status(),
        counts,
        &mut rand::thread_rng(),
    );
    let sheet = PrintSheet::practice(&groups, app.config.pack_limits());
    emit_sheet(&sheet, output)
}

fn emit_sheet(sheet: &PrintSheet, output: Option<&Path>) -> Result<()> {
    let text = render_text(sheet);

    match output {
        Some(path) => {
            std::fs::write(path, &text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!(
                "{} 已生成 {} 个生字的练习纸: {}",
                "✓".green(),
                sheet.word_count(),
                path.display().to_string().cyan()
            );
        }
        None => print!("{}", text),
    }
    Ok(())
}

/// 使用帮助（首次运行时也会显示）
pub fn show_help() -> Result<()> {
    println!("{}", "📖 生字学习助手 使用帮助".cyan().bold());
    println!();
    println!("学习状态（点击/切换循环）：");
    let cycle: Vec<String> = WordStatus::ALL
        .iter()
        .chain([WordStatus::Unknown].iter())
        .map(|s| format!("{} {}", status_mark(*s), s.label()))
        .collect();
    println!("   {}", cycle.join(" → "));
    println!();
    println!("常用命令：");
    println!("   hanzi-cards list --filter unknown-maybe   # 只看不会和可能会的");
    println!("   hanzi-cards list --search shī             # 按汉字或拼音搜索");
    println!("   hanzi-cards toggle 0_1                    # 切换词组状态");
    println!("   hanzi-cards add 朋友 \"péng you\"           # 添加自定义词组");
    println!("   hanzi-cards print --filter unknown        # 打印田字格练习纸");
    println!("   hanzi-cards practice --unknown 10         # 随机生成自定义生字本");
    println!("   hanzi-cards export / import <file>        # 备份与恢复进度");
    println!("   hanzi-cards study                         # 交互式学习");
    Ok(())
}
