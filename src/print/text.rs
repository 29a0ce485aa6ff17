// Plain-text renderer
// 把 PrintSheet 渲染为终端/纯文本田字格

use super::packer::{PrintRow, PrintWord};
use super::sheet::PrintSheet;

/// 田字格半边宽度
const HALF: usize = 3;
/// 每个格子的显示宽度（含边框）
const CELL_WIDTH: usize = HALF * 2 + 3;
/// 词组之间的间隔
const WORD_GAP: &str = "  ";

/// 渲染整张练习纸
pub fn render_text(sheet: &PrintSheet) -> String {
    let mut out = String::new();

    if let Some(heading) = &sheet.heading {
        out.push_str(heading);
        out.push_str("\n\n");
    }

    if sheet.is_empty() {
        if let Some(notice) = &sheet.notice {
            out.push_str(notice);
            out.push('\n');
        }
        return out;
    }

    for section in &sheet.sections {
        out.push_str(&format!("【{}】\n", section.title));
        for row in &section.rows {
            render_row(row, &mut out);
        }
        out.push('\n');
    }

    out
}

/// 一行词组：拼音行 + 五行田字格
fn render_row(row: &PrintRow, out: &mut String) {
    let lines = [
        join_words(row, pinyin_line),
        join_words(row, |w| grid_line(w, '┌', '┬', '┐', '─')),
        join_words(row, |w| grid_line(w, '│', '┊', '│', ' ')),
        join_words(row, |w| grid_line(w, '├', '┼', '┤', '┄')),
        join_words(row, |w| grid_line(w, '│', '┊', '│', ' ')),
        join_words(row, |w| grid_line(w, '└', '┴', '┘', '─')),
    ];

    for line in lines {
        out.push_str(line.trim_end());
        out.push('\n');
    }
}

fn join_words(row: &PrintRow, line: impl Fn(&PrintWord) -> String) -> String {
    row.words.iter().map(line).collect::<Vec<_>>().join(WORD_GAP)
}

fn pinyin_line(word: &PrintWord) -> String {
    word.cells
        .iter()
        .map(|c| center(&c.pinyin, CELL_WIDTH))
        .collect()
}

fn grid_line(word: &PrintWord, left: char, mid: char, right: char, fill: char) -> String {
    let half: String = std::iter::repeat(fill).take(HALF).collect();
    word.cells
        .iter()
        .map(|_| format!("{left}{half}{mid}{half}{right}"))
        .collect()
}

fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lessons::WordEntry;
    use crate::print::packer::PackLimits;
    use crate::print::selector::PracticeGroup;

    #[test]
    fn test_render_practice_sheet() {
        let groups = vec![PracticeGroup {
            title: "课文1".to_string(),
            words: vec![WordEntry::new("shī gē", "诗歌")],
        }];
        let text = render_text(&PrintSheet::practice(&groups, PackLimits::default()));

        assert!(text.starts_with("自定义生字本 (共1个生字)"));
        assert!(text.contains("【课文1 (1个)】"));
        assert!(text.contains("shī"));
        assert!(text.contains("gē"));
        assert!(text.contains("┌───┬───┐┌───┬───┐"));
    }

    #[test]
    fn test_render_empty_notice() {
        let text = render_text(&PrintSheet::practice(&[], PackLimits::default()));
        assert_eq!(text.trim(), "没有找到符合条件的生字");
    }

    #[test]
    fn test_center() {
        assert_eq!(center("gē", 5), " gē  ");
        assert_eq!(center("zhuāng", 5), "zhuāng");
    }
}
