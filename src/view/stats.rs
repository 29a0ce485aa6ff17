// Study Statistics
// 学习统计与学习建议

use crate::lessons::Lesson;
use crate::progress::{resolve_status, status_key, StatusMap, WordStatus};

/// 各状态的词组数量
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StudyStats {
    pub total: usize,
    pub unknown: usize,
    pub maybe: usize,
    pub known: usize,
}

impl StudyStats {
    /// 统计全部课文（含自定义分组）
    pub fn collect(lessons: &[Lesson], statuses: &StatusMap) -> Self {
        let mut stats = Self::default();

        for (lesson_idx, lesson) in lessons.iter().enumerate() {
            for word_idx in 0..lesson.words.len() {
                stats.total += 1;
                match resolve_status(statuses, &status_key(lesson_idx, word_idx)) {
                    WordStatus::Unknown => stats.unknown += 1,
                    WordStatus::Maybe => stats.maybe += 1,
                    WordStatus::Known => stats.known += 1,
                }
            }
        }

        stats
    }

    pub fn count(&self, status: WordStatus) -> usize {
        match status {
            WordStatus::Unknown => self.unknown,
            WordStatus::Maybe => self.maybe,
            WordStatus::Known => self.known,
        }
    }

    /// 已掌握百分比，保留一位小数
    pub fn progress_percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let pct = self.known as f64 / self.total as f64 * 100.0;
        (pct * 10.0).round() / 10.0
    }

    /// 掌握率（取整百分比）
    pub fn mastery_rate(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.known as f64 / self.total as f64 * 100.0).round() as u32
    }

    pub fn recommendations(&self) -> Vec<Recommendation> {
        let rate = self.mastery_rate();
        let mut recs = vec![if rate >= 80 {
            Recommendation::Excellent(rate)
        } else if rate >= 60 {
            Recommendation::SteadyProgress(rate)
        } else {
            Recommendation::NeedsWork(rate)
        }];

        if self.maybe as f64 > self.total as f64 * 0.3 {
            recs.push(Recommendation::Consolidate(self.maybe));
        }

        recs
    }
}

/// 学习建议
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    /// 掌握率 >= 80%
    Excellent(u32),
    /// 掌握率 >= 60%
    SteadyProgress(u32),
    NeedsWork(u32),
    /// 模糊词组超过 30%
    Consolidate(usize),
}

impl Recommendation {
    pub fn title(&self) -> &'static str {
        match self {
            Recommendation::Excellent(_) => "🎉 表现优秀",
            Recommendation::SteadyProgress(_) => "📈 稳步提升",
            Recommendation::NeedsWork(_) => "💪 需要加强",
            Recommendation::Consolidate(_) => "🔄 巩固练习",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Recommendation::Excellent(rate) => {
                format!("掌握率达到{}%，继续保持！建议复习模糊的生字。", rate)
            }
            Recommendation::SteadyProgress(rate) => {
                format!("掌握率{}%，还有提升空间。建议每天练习不会的生字。", rate)
            }
            Recommendation::NeedsWork(rate) => {
                format!("掌握率{}%，建议每天重点练习不会的生字，制定学习计划。", rate)
            }
            Recommendation::Consolidate(count) => {
                format!("有{}个模糊的生字，建议多复习巩固。", count)
            }
        }
    }
}
