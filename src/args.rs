//! Arg：与模板占位符一一对应的位置参数。

use crate::row::Row;
use crate::value::{SqlDateTime, SqlValue};
use crate::valuer::SqlValuer;

/// 处理器使用的动态参数类型。
#[derive(Clone)]
pub enum Arg {
    Value(SqlValue),
    Valuer(Box<dyn SqlValuer>),
    /// `%i[]` 等数组修饰符的参数，展开成 `(a, b, c)`。
    List(Vec<SqlValue>),
    /// `%values` 的参数。
    Row(Row),
    /// `%values[]` 的参数。
    Rows(Vec<Row>),
}

impl Arg {
    /// 用于错误信息的参数形状描述。
    pub(crate) fn kind_name(&self) -> &'static str {
        match self {
            Self::Value(v) => v.kind_name(),
            Self::Valuer(_) => "valuer",
            Self::List(_) => "list",
            Self::Row(_) => "row",
            Self::Rows(_) => "row list",
        }
    }
}

impl std::fmt::Debug for Arg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Self::Valuer(_) => f.write_str("Valuer(..)"),
            Self::List(v) => f.debug_tuple("List").field(v).finish(),
            Self::Row(v) => f.debug_tuple("Row").field(v).finish(),
            Self::Rows(v) => f.debug_tuple("Rows").field(v).finish(),
        }
    }
}

impl PartialEq for Arg {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Value(a), Self::Value(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Row(a), Self::Row(b)) => a == b,
            (Self::Rows(a), Self::Rows(b)) => a == b,
            _ => false,
        }
    }
}

/// 构造数组参数。
pub fn list<T: Into<SqlValue>>(items: impl IntoIterator<Item = T>) -> Arg {
    Arg::List(items.into_iter().map(Into::into).collect())
}

/// 构造多行参数；`None` 表示整行 DEFAULT。
pub fn rows<T: Into<Row>>(items: impl IntoIterator<Item = T>) -> Arg {
    Arg::Rows(items.into_iter().map(Into::into).collect())
}

impl From<SqlValue> for Arg {
    fn from(v: SqlValue) -> Self {
        Self::Value(v)
    }
}

impl From<Box<dyn SqlValuer>> for Arg {
    fn from(v: Box<dyn SqlValuer>) -> Self {
        Self::Valuer(v)
    }
}

impl From<Row> for Arg {
    fn from(v: Row) -> Self {
        Self::Row(v)
    }
}

impl From<Vec<Row>> for Arg {
    fn from(v: Vec<Row>) -> Self {
        Self::Rows(v)
    }
}

impl From<i64> for Arg {
    fn from(v: i64) -> Self {
        SqlValue::I64(v).into()
    }
}
impl From<i32> for Arg {
    fn from(v: i32) -> Self {
        SqlValue::I64(v as i64).into()
    }
}
impl From<u64> for Arg {
    fn from(v: u64) -> Self {
        SqlValue::U64(v).into()
    }
}
impl From<u32> for Arg {
    fn from(v: u32) -> Self {
        SqlValue::U64(v as u64).into()
    }
}
impl From<bool> for Arg {
    fn from(v: bool) -> Self {
        SqlValue::Bool(v).into()
    }
}
impl From<f64> for Arg {
    fn from(v: f64) -> Self {
        SqlValue::F64(v).into()
    }
}
impl From<&'static str> for Arg {
    fn from(v: &'static str) -> Self {
        SqlValue::from(v).into()
    }
}
impl From<String> for Arg {
    fn from(v: String) -> Self {
        SqlValue::from(v).into()
    }
}
impl From<Vec<u8>> for Arg {
    fn from(v: Vec<u8>) -> Self {
        SqlValue::Bytes(v).into()
    }
}
impl From<SqlDateTime> for Arg {
    fn from(v: SqlDateTime) -> Self {
        SqlValue::DateTime(v).into()
    }
}
impl From<time::OffsetDateTime> for Arg {
    fn from(v: time::OffsetDateTime) -> Self {
        SqlValue::from(v).into()
    }
}

impl<T> From<Option<T>> for Arg
where
    T: Into<SqlValue>,
{
    fn from(v: Option<T>) -> Self {
        SqlValue::from_option(v).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn list_collects_values() {
        assert_eq!(
            list([1_i64, 2, 3]),
            Arg::List(vec![SqlValue::I64(1), SqlValue::I64(2), SqlValue::I64(3)])
        );
    }

    #[test]
    fn rows_maps_none_to_all_default() {
        let a = rows([Some(Row::new().set("id", 1_i64)), None]);
        assert_eq!(
            a,
            Arg::Rows(vec![Row::new().set("id", 1_i64), Row::AllDefault])
        );
    }

    #[test]
    fn option_none_is_null() {
        assert_eq!(Arg::from(None::<i64>), Arg::Value(SqlValue::Null));
    }
}
