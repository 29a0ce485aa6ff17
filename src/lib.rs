// Hanzi Cards - Library Root
//
// 生字学习助手：词组掌握状态跟踪、筛选搜索、田字格练习纸排版

pub mod cli;
pub mod config;
pub mod lessons;
pub mod print;
pub mod progress;
pub mod session;
pub mod utils;
pub mod view;

// 重新导出常用类型
pub use config::AppConfig;
pub use lessons::{Lesson, WordEntry};
pub use print::{PackLimits, PrintSheet};
pub use progress::{ProgressStore, Snapshot, WordStatus};
pub use session::Session;
pub use view::{build_view, StatusFilter, View};
