//! 打印模块
//!
//! - packer：田字格行排版
//! - selector：自定义生字本随机选词
//! - sheet：打印内容组装
//! - text：纯文本渲染

pub mod packer;
pub mod selector;
pub mod sheet;
pub mod text;

pub use packer::{pack, partition, GridCell, PackLimits, PrintRow, PrintWord};
pub use selector::{group_by_lesson, select_practice, select_words, PracticeCounts, PracticeGroup};
pub use sheet::{PrintSection, PrintSheet};
pub use text::render_text;
