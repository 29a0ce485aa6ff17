//! 拼音/汉字对齐修正
//!
//! 保证每个词组的音节数等于汉字数：音节不足时重复最后一个音节补齐，
//! 音节过多时截断。任何输入都能得到合法的对齐结果，不会报错。

use super::{Lesson, WordEntry};

/// 按汉字个数修正拼音，返回以单个空格连接的音节串
pub fn normalize_pinyin(pinyin: &str, word: &str) -> String {
    let target = word.chars().count();
    let mut syllables: Vec<&str> = pinyin.split_whitespace().collect();

    if syllables.len() < target {
        let last = syllables.last().copied().unwrap_or("");
        syllables.resize(target, last);
    } else {
        syllables.truncate(target);
    }

    syllables.join(" ")
}

/// 修正单个词组
pub fn normalize_entry(entry: WordEntry) -> WordEntry {
    let pinyin = normalize_pinyin(&entry.pinyin, &entry.word);
    WordEntry {
        pinyin,
        word: entry.word,
    }
}

/// 原地修正全部课文
pub fn normalize_lessons(lessons: &mut [Lesson]) {
    for lesson in lessons.iter_mut() {
        for entry in lesson.words.iter_mut() {
            let fixed = normalize_pinyin(&entry.pinyin, &entry.word);
            if fixed != entry.pinyin {
                log::debug!(
                    "拼音已修正: {} [{}] -> [{}]",
                    entry.word,
                    entry.pinyin,
                    fixed
                );
                entry.pinyin = fixed;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_lengths_unchanged() {
        assert_eq!(normalize_pinyin("péng you", "朋友"), "péng you");
    }

    #[test]
    fn test_short_pinyin_repeats_last_syllable() {
        assert_eq!(normalize_pinyin("a", "你好吗"), "a a a");
    }

    #[test]
    fn test_long_pinyin_truncated() {
        assert_eq!(normalize_pinyin("a b c d", "你好"), "a b");
    }

    #[test]
    fn test_irregular_whitespace_collapsed() {
        assert_eq!(normalize_pinyin("  nǐ \t hǎo  ", "你好"), "nǐ hǎo");
    }

    #[test]
    fn test_malformed_input_is_absorbed() {
        // 空拼音不报错，用空音节补齐
        assert_eq!(normalize_pinyin("", "你好"), " ");
        assert_eq!(normalize_pinyin("", "你"), "");
        assert_eq!(normalize_pinyin("a b", ""), "");
    }

    #[test]
    fn test_alignment_invariant_for_all_lengths() {
        let words = ["", "你", "你好", "你好吗", "花草树木"];
        let pinyins = ["", "a", "a b", "a b c", "a b c d e f"];

        for word in words {
            for pinyin in pinyins {
                let entry = normalize_entry(WordEntry::new(pinyin, word));
                assert_eq!(
                    entry.syllables().len(),
                    entry.char_count(),
                    "pinyin={:?} word={:?}",
                    pinyin,
                    word
                );
            }
        }
    }

    #[test]
    fn test_normalize_lessons_in_place() {
        let mut lessons = vec![Lesson::new(
            "课文1",
            vec![
                WordEntry::new("huā", "花草树木"),
                WordEntry::new("shī gē", "诗歌"),
            ],
        )];

        normalize_lessons(&mut lessons);

        assert_eq!(lessons[0].words[0].pinyin, "huā huā huā huā");
        assert_eq!(lessons[0].words[1].pinyin, "shī gē");
    }
}
