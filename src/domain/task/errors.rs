//! Task Context - Errors

use thiserror::Error;

/// 提交前的输入校验失败
///
/// 只会被转换为用户可见的警告，不会向上传播
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TaskInputError {
    #[error("There is no keyphrases to classify")]
    EmptyInput,

    #[error("You have not added any labels, please add some!")]
    NoLabels,

    #[error("At least two labels are required for classification")]
    SingleLabel,
}
