//! 模板扫描：把模板拆成字面量片段与占位符，供处理器按顺序绑定。
//!
//! - `%%` 输出一个 `%`。
//! - 引号内（`'...'`、`"..."`、`` `...` ``）的 `%` 不是占位符。
//! - `%` 后面不是合法修饰符时立即返回 [`ProcessError::Syntax`]。

use crate::error::{ProcessError, ProcessResult};
use crate::modifier::{Modifier, ModifierSpec};

/// 占位符：可选列名 + 修饰符。模板里的占位符没有列名；行键 `id%i` 解析后带列名。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub column: Option<String>,
    pub spec: ModifierSpec,
}

impl Placeholder {
    pub fn new(spec: ModifierSpec) -> Self {
        Self { column: None, spec }
    }

    pub fn with_column(column: impl Into<String>, spec: ModifierSpec) -> Self {
        Self {
            column: Some(column.into()),
            spec,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Placeholder(Placeholder),
}

/// 扫描后的模板。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn placeholders(&self) -> impl Iterator<Item = &Placeholder> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Placeholder(p) => Some(p),
            Segment::Literal(_) => None,
        })
    }

    /// 模板需要的位置参数个数。
    pub fn arity(&self) -> usize {
        self.placeholders().count()
    }
}

/// 从左到右扫描模板；引号内的 `\` 视为转义符。
pub fn scan(template: &str) -> ProcessResult<Template> {
    scan_with(template, true)
}

/// 同 [`scan`]，`backslash_escapes` 为 false 时引号只能以双写方式转义（如 `'it''s'`），
/// 适用于标准 SQL 字符串（PostgreSQL、SQLite 等）：`'C:\'` 在第二个引号处结束。
pub fn scan_with(template: &str, backslash_escapes: bool) -> ProcessResult<Template> {
    let bytes = template.as_bytes();
    let mut segments = Vec::new();
    let mut literal = String::with_capacity(template.len());
    let mut quote: Option<u8> = None;
    let mut escaping = false;
    let mut start = 0usize;
    let mut i = 0usize;

    while i < bytes.len() {
        let b = bytes[i];

        if escaping {
            escaping = false;
            i += 1;
            continue;
        }

        match b {
            b'\\' if backslash_escapes && quote.is_some() => escaping = true,
            b'\'' | b'"' | b'`' => {
                if quote == Some(b) {
                    quote = None;
                } else if quote.is_none() {
                    quote = Some(b);
                }
            }
            b'%' if quote.is_none() => {
                literal.push_str(&template[start..i]);
                let rest = &template[i + 1..];

                if rest.starts_with('%') {
                    literal.push('%');
                    i += 2;
                    start = i;
                    continue;
                }

                let (spec, len) = ModifierSpec::parse_prefix(rest)
                    .map_err(|message| ProcessError::syntax(i, message))?;
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Placeholder(Placeholder::new(spec)));

                i += 1 + len;
                start = i;
                continue;
            }
            _ => {}
        }
        i += 1;
    }

    literal.push_str(&template[start..]);
    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }

    Ok(Template { segments })
}

/// 解析值列表的行键：`id%i` => (`id`, `%i`)，`id` => (`id`, `%any`)。
pub fn parse_column_key(key: &str) -> ProcessResult<Placeholder> {
    let Some(pos) = key.find('%') else {
        if key.is_empty() {
            return Err(ProcessError::syntax(0, "Empty column name in row key"));
        }
        return Ok(Placeholder::with_column(key, ModifierSpec::new(Modifier::Any)));
    };

    let column = &key[..pos];
    if column.is_empty() {
        return Err(ProcessError::syntax(
            0,
            format!("Empty column name in row key '{key}'"),
        ));
    }

    let (spec, len) = ModifierSpec::parse_prefix(&key[pos + 1..])
        .map_err(|message| ProcessError::syntax(pos, format!("{message} in row key '{key}'")))?;
    let end = pos + 1 + len;
    if end != key.len() {
        return Err(ProcessError::syntax(
            end,
            format!("Unexpected trailing characters in row key '{key}'"),
        ));
    }
    if spec.modifier.is_value_list() || spec.array {
        return Err(ProcessError::syntax(
            pos,
            format!("Modifier {spec} is not allowed in row key '{key}'"),
        ));
    }

    Ok(Placeholder::with_column(column, spec))
}
