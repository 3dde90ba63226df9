//! Domain Layer - 领域层
//!
//! 纯函数部分，不做任何 I/O:
//! - Task Context: 任务种类、请求构造、结果整形
//! - 输入文本规范化

pub mod task;

mod text_input;
mod value_objects;

pub use text_input::{
    normalize_labels, normalize_lines, Normalized, DEFAULT_MAX_LABELS, DEFAULT_MAX_LINES,
};
pub use value_objects::{Checkpoint, Label, TextLine};
