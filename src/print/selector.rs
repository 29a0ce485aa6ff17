//! 自定义生字本选词
//!
//! 按状态分桶，每个桶内无放回随机抽取指定数量，再按来源课文重新分组。
//! 不要求可复现：每次调用可得到不同的样本。

use crate::lessons::{Lesson, WordEntry};
use crate::progress::{resolve_status, status_key, StatusMap, ValidationError, WordStatus};
use crate::view::StudyStats;
use rand::seq::SliceRandom;
use rand::Rng;

/// 各状态要抽取的数量
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PracticeCounts {
    pub unknown: usize,
    pub maybe: usize,
    pub known: usize,
}

impl PracticeCounts {
    pub fn new(unknown: usize, maybe: usize, known: usize) -> Self {
        Self {
            unknown,
            maybe,
            known,
        }
    }

    pub fn total(&self) -> usize {
        self.unknown + self.maybe + self.known
    }

    pub fn get(&self, status: WordStatus) -> usize {
        match status {
            WordStatus::Unknown => self.unknown,
            WordStatus::Maybe => self.maybe,
            WordStatus::Known => self.known,
        }
    }

    /// 输入校验：总数不能为 0，且各项不能超过现有数量
    pub fn validate(&self, stats: &StudyStats) -> Result<(), ValidationError> {
        if self.total() == 0 {
            return Err(ValidationError::EmptySelection);
        }

        for status in WordStatus::ALL {
            let requested = self.get(status);
            let available = stats.count(status);
            if requested > available {
                return Err(ValidationError::ExceedsAvailable {
                    status: status.label(),
                    requested,
                    available,
                });
            }
        }

        Ok(())
    }
}

/// 被选中的词组
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedWord {
    pub lesson_title: String,
    pub key: String,
    pub entry: WordEntry,
}

/// 按课文分组后的选词结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticeGroup {
    pub title: String,
    pub words: Vec<WordEntry>,
}

/// 随机选词（依次为 unknown、maybe、known 桶），数量超过桶容量时取全部
pub fn select_words<R: Rng + ?Sized>(
    lessons: &[Lesson],
    statuses: &StatusMap,
    counts: PracticeCounts,
    rng: &mut R,
) -> Vec<SelectedWord> {
    let mut buckets: [Vec<SelectedWord>; 3] = Default::default();

    for (lesson_idx, lesson) in lessons.iter().enumerate() {
        for (word_idx, entry) in lesson.words.iter().enumerate() {
            let key = status_key(lesson_idx, word_idx);
            let status = resolve_status(statuses, &key);
            buckets[bucket_index(status)].push(SelectedWord {
                lesson_title: lesson.title.clone(),
                key,
                entry: entry.clone(),
            });
        }
    }

    let mut selected = Vec::with_capacity(counts.total());
    for status in WordStatus::ALL {
        let mut bucket = std::mem::take(&mut buckets[bucket_index(status)]);
        bucket.shuffle(rng);
        bucket.truncate(counts.get(status));
        selected.extend(bucket);
    }

    log::debug!(
        "选中的生字总数: {} (unknown={}, maybe={}, known={})",
        selected.len(),
        counts.unknown,
        counts.maybe,
        counts.known
    );

    selected
}

fn bucket_index(status: WordStatus) -> usize {
    match status {
        WordStatus::Unknown => 0,
        WordStatus::Maybe => 1,
        WordStatus::Known => 2,
    }
}

/// 按来源课文重新分组，分组顺序为课文在选词结果中首次出现的顺序
pub fn group_by_lesson(selected: Vec<SelectedWord>) -> Vec<PracticeGroup> {
    let mut groups: Vec<PracticeGroup> = Vec::new();

    for word in selected {
        match groups.iter_mut().find(|g| g.title == word.lesson_title) {
            Some(group) => group.words.push(word.entry),
            None => groups.push(PracticeGroup {
                title: word.lesson_title,
                words: vec![word.entry],
            }),
        }
    }

    groups
}

/// 选词并分组
pub fn select_practice<R: Rng + ?Sized>(
    lessons: &[Lesson],
    statuses: &StatusMap,
    counts: PracticeCounts,
    rng: &mut R,
) -> Vec<PracticeGroup> {
    group_by_lesson(select_words(lessons, statuses, counts, rng))
}
