//! Row：`%values` / `%values[]` 的一行数据。

use crate::value::SqlValue;

/// 值列表中的一行。
///
/// 键可以带行内修饰符（`"id%i"`）；同一行内键的顺序就是列首次出现的顺序。
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Row {
    Values(Vec<(String, SqlValue)>),
    /// 整行使用 `DEFAULT`。
    #[default]
    AllDefault,
}

impl Row {
    /// 空的 `Row::Values`；渲染效果与 `AllDefault` 相同。
    pub fn new() -> Self {
        Self::Values(Vec::new())
    }

    /// 链式追加一列。
    pub fn set(mut self, key: impl Into<String>, value: impl Into<SqlValue>) -> Self {
        self.push(key, value);
        self
    }

    /// 追加一列；键已存在时覆盖原值（保持原位置）。
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<SqlValue>) {
        let key = key.into();
        let value = value.into();
        match self {
            Self::Values(cells) => {
                if let Some(cell) = cells.iter_mut().find(|(k, _)| *k == key) {
                    cell.1 = value;
                } else {
                    cells.push((key, value));
                }
            }
            Self::AllDefault => *self = Self::Values(vec![(key, value)]),
        }
    }

    pub fn cells(&self) -> &[(String, SqlValue)] {
        match self {
            Self::Values(cells) => cells,
            Self::AllDefault => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.cells().len()
    }

    /// 没有任何列的行（`AllDefault` 或空的 `Values`）。
    pub fn is_empty(&self) -> bool {
        self.cells().is_empty()
    }
}

impl From<Option<Row>> for Row {
    fn from(v: Option<Row>) -> Self {
        v.unwrap_or(Self::AllDefault)
    }
}

impl<K, V> FromIterator<(K, V)> for Row
where
    K: Into<String>,
    V: Into<SqlValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Self::new();
        for (k, v) in iter {
            row.push(k, v);
        }
        row
    }
}
