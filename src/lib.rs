//! halo-sql-processor：类型化占位符的 SQL 模板处理器。
//!
//! 模板由字面量 SQL 与占位符（`%i`、`%s`、`%?dt`、`%i[]`、`%values`、`%values[]` 等）组成，
//! 位置参数按出现顺序绑定，经方言格式化器（[`SqlFormatter`]，内置实现为 [`Flavor`]）
//! 转义后拼成最终 SQL。`%values[]` 会把多行数据展开成带 `DEFAULT` 补位的 INSERT 值列表。

pub mod args;
pub mod error;
pub mod flavor;
#[cfg(test)]
mod flavor_tests;
pub mod formatter;
#[cfg(test)]
mod formatter_tests;
pub mod macros;
#[cfg(test)]
mod macros_tests;
pub mod modifier;
pub mod processor;
pub mod row;
pub mod scanner;
mod string_builder;
#[cfg(test)]
mod test_util;
pub mod value;
pub mod valuer;
mod values;

pub use crate::args::{Arg, list, rows};
pub use crate::error::{ProcessError, ProcessResult};
pub use crate::flavor::{
    DefaultFlavorGuard, Flavor, ParseFlavorError, default_flavor, set_default_flavor,
    set_default_flavor_scoped,
};
pub use crate::formatter::SqlFormatter;
pub use crate::modifier::{Modifier, ModifierSpec};
pub use crate::processor::SqlProcessor;
pub use crate::row::Row;
pub use crate::scanner::{Placeholder, Segment, Template, parse_column_key, scan, scan_with};
pub use crate::value::{SqlDateTime, SqlValue};
pub use crate::valuer::{SqlValuer, ValuerError};
