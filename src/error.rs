//! 处理模板时的错误类型。

use crate::valuer::ValuerError;

pub type ProcessResult<T> = Result<T, ProcessError>;

/// 一次 `process` 调用中可能出现的错误；任何一种都会中止本次调用。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProcessError {
    /// 模板或行键中的占位符语法错误。
    #[error("{message} (at offset {offset})")]
    Syntax { offset: usize, message: String },
    /// 参数个数不匹配，或值列表为空。
    #[error("{0}")]
    Argument(String),
    /// 参数类型与修饰符不兼容。
    #[error("{0}")]
    Type(String),
    #[error(transparent)]
    Valuer(#[from] ValuerError),
    #[error("datetime formatting failed: {0}")]
    Format(String),
}

impl ProcessError {
    pub(crate) fn syntax(offset: usize, message: impl Into<String>) -> Self {
        Self::Syntax {
            offset,
            message: message.into(),
        }
    }

    pub(crate) fn argument(message: impl Into<String>) -> Self {
        Self::Argument(message.into())
    }

    pub(crate) fn type_error(message: impl Into<String>) -> Self {
        Self::Type(message.into())
    }
}

impl From<time::error::Format> for ProcessError {
    fn from(e: time::error::Format) -> Self {
        Self::Format(e.to_string())
    }
}
