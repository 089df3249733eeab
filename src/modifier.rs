//! 占位符修饰符：`%i`、`%?s`、`%i[]`、`%values[]` 等。
//!
//! 修饰符是一个封闭枚举；新增修饰符只能扩展 [`Modifier`]，处理器对它做穷尽匹配。

use std::fmt;

/// 修饰符种类。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    /// `%i`
    Int,
    /// `%f`
    Float,
    /// `%s`
    String,
    /// `%b`
    Bool,
    /// `%dt`
    DateTime,
    /// `%blob`
    Blob,
    /// `%any`：按值的变体自动选择格式化方法；行键不带修饰符时也使用它。
    Any,
    /// `%column`
    Column,
    /// `%table`
    Table,
    /// `%raw`：字符串原样拼入。
    Raw,
    /// `%values`：单行 INSERT 值列表。
    Values,
    /// `%values[]`：多行 INSERT 值列表。
    ValuesList,
}

impl Modifier {
    fn from_name(name: &str) -> Option<Self> {
        let m = match name {
            "i" => Self::Int,
            "f" => Self::Float,
            "s" => Self::String,
            "b" => Self::Bool,
            "dt" => Self::DateTime,
            "blob" => Self::Blob,
            "any" => Self::Any,
            "column" => Self::Column,
            "table" => Self::Table,
            "raw" => Self::Raw,
            "values" => Self::Values,
            _ => return None,
        };
        Some(m)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Int => "i",
            Self::Float => "f",
            Self::String => "s",
            Self::Bool => "b",
            Self::DateTime => "dt",
            Self::Blob => "blob",
            Self::Any => "any",
            Self::Column => "column",
            Self::Table => "table",
            Self::Raw => "raw",
            Self::Values => "values",
            Self::ValuesList => "values[]",
        }
    }

    pub fn is_value_list(self) -> bool {
        matches!(self, Self::Values | Self::ValuesList)
    }

    /// 该修饰符期望的值类型，用于错误信息。
    pub(crate) fn expected(self) -> &'static str {
        match self {
            Self::Int => "an integer",
            Self::Float => "a float",
            Self::String | Self::Raw => "a string",
            Self::Bool => "a bool",
            Self::DateTime => "a datetime",
            Self::Blob => "bytes",
            Self::Any => "a scalar",
            Self::Column | Self::Table => "an identifier string",
            Self::Values => "a row",
            Self::ValuesList => "a list of rows",
        }
    }

    fn allows_nullable(self) -> bool {
        !matches!(
            self,
            Self::Any | Self::Column | Self::Table | Self::Raw | Self::Values | Self::ValuesList
        )
    }

    fn allows_array(self) -> bool {
        !matches!(
            self,
            Self::Column | Self::Table | Self::Raw | Self::Values | Self::ValuesList
        )
    }
}

/// 完整的修饰符描述：种类 + `?`（允许 NULL）+ `[]`（数组）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModifierSpec {
    pub modifier: Modifier,
    pub nullable: bool,
    pub array: bool,
}

impl ModifierSpec {
    pub fn new(modifier: Modifier) -> Self {
        Self {
            modifier,
            nullable: false,
            array: false,
        }
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn array(mut self) -> Self {
        self.array = true;
        self
    }

    /// 解析 `%` 之后的修饰符 token，返回解析结果与消耗的字节数。
    ///
    /// 失败时返回不含位置的错误描述，由调用方补上 offset。
    pub(crate) fn parse_prefix(s: &str) -> Result<(Self, usize), String> {
        let bytes = s.as_bytes();
        let mut i = 0usize;

        let nullable = bytes.first() == Some(&b'?');
        if nullable {
            i += 1;
        }

        let name_start = i;
        if i < bytes.len() && (bytes[i].is_ascii_alphabetic() || bytes[i] == b'_') {
            i += 1;
            while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_') {
                i += 1;
            }
        }
        let name = &s[name_start..i];
        if name.is_empty() {
            return Err(String::from("Missing modifier after '%'"));
        }

        let array = s[i..].starts_with("[]");
        if array {
            i += 2;
        }

        let token = &s[..i];
        let Some(modifier) = Modifier::from_name(name) else {
            return Err(format!("Unknown modifier %{token}"));
        };

        let spec = match modifier {
            Modifier::Values if array => Self::new(Modifier::ValuesList),
            m => Self {
                modifier: m,
                nullable: false,
                array,
            },
        };

        if nullable {
            if !spec.modifier.allows_nullable() {
                return Err(format!("Modifier %{token} does not support the '?' flag"));
            }
            return Ok((spec.nullable(), i));
        }
        if spec.array && !spec.modifier.allows_array() {
            return Err(format!("Modifier %{token} does not support the '[]' suffix"));
        }

        Ok((spec, i))
    }
}

impl From<Modifier> for ModifierSpec {
    fn from(m: Modifier) -> Self {
        Self::new(m)
    }
}

impl fmt::Display for ModifierSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("%")?;
        if self.nullable {
            f.write_str("?")?;
        }
        f.write_str(self.modifier.name())?;
        if self.array {
            f.write_str("[]")?;
        }
        Ok(())
    }
}
