//! 方言格式化器：把标识符与标量值转换为可以直接拼入 SQL 的片段。
//!
//! 处理器只通过 [`SqlFormatter`] 访问方言；[`Flavor`] 提供内置实现。
//! 实现必须是无副作用的：同样的输入总是得到同样的片段。

use crate::error::{ProcessError, ProcessResult};
use crate::flavor::Flavor;
use crate::value::SqlDateTime;
use dyn_clone::DynClone;
use time::macros::format_description;

/// 方言格式化能力。处理器在构造时注入，多线程只读共享。
pub trait SqlFormatter: DynClone + std::fmt::Debug + Send + Sync {
    fn format_identifier(&self, name: &str) -> String;

    fn format_string(&self, value: &str) -> String;

    fn format_int(&self, value: i64) -> String {
        value.to_string()
    }

    fn format_uint(&self, value: u64) -> String {
        value.to_string()
    }

    /// 调用方保证 `value` 是有限数。
    fn format_float(&self, value: f64) -> String {
        value.to_string()
    }

    fn format_bool(&self, value: bool) -> String {
        String::from(if value { "TRUE" } else { "FALSE" })
    }

    fn format_null(&self) -> String {
        String::from("NULL")
    }

    /// 模板引号内的 `\` 是否转义下一个字符；影响扫描时如何判断引号结束。
    fn backslash_escapes(&self) -> bool {
        true
    }

    fn format_bytes(&self, value: &[u8]) -> ProcessResult<String>;

    fn format_datetime(&self, value: &SqlDateTime) -> ProcessResult<String>;
}

dyn_clone::clone_trait_object!(SqlFormatter);

impl SqlFormatter for Flavor {
    fn backslash_escapes(&self) -> bool {
        matches!(
            self,
            Flavor::MySQL | Flavor::ClickHouse | Flavor::Doris | Flavor::Informix
        )
    }

    /// `schema.table` 按段加引号；`*` 保持原样。
    fn format_identifier(&self, name: &str) -> String {
        let mut out = String::with_capacity(name.len() + 4);
        for (i, part) in name.split('.').enumerate() {
            if i > 0 {
                out.push('.');
            }
            if part == "*" {
                out.push('*');
            } else {
                out.push_str(&self.quote(part));
            }
        }
        out
    }

    fn format_string(&self, value: &str) -> String {
        let mut out = String::with_capacity(value.len() + 3);
        quote_string(&mut out, value, *self);
        out
    }

    fn format_bool(&self, value: bool) -> String {
        let s = match (self, value) {
            (Flavor::Oracle, true) => "1",
            (Flavor::Oracle, false) => "0",
            (_, true) => "TRUE",
            (_, false) => "FALSE",
        };
        String::from(s)
    }

    fn format_bytes(&self, value: &[u8]) -> ProcessResult<String> {
        if value.is_empty() {
            return Ok(self.format_null());
        }

        let mut out = String::with_capacity(value.len() * 2 + 16);
        match self {
            Flavor::MySQL => {
                out.push_str("_binary X'");
                push_hex(&mut out, value);
                out.push('\'');
            }
            Flavor::PostgreSQL => {
                out.push_str("E'\\\\x");
                push_hex(&mut out, value);
                out.push_str("'::bytea");
            }
            Flavor::SQLite => {
                out.push_str("X'");
                push_hex(&mut out, value);
                out.push('\'');
            }
            Flavor::SQLServer | Flavor::CQL => {
                out.push_str("0x");
                push_hex(&mut out, value);
            }
            Flavor::ClickHouse => {
                out.push_str("unhex('");
                push_hex(&mut out, value);
                out.push_str("')");
            }
            Flavor::Presto => {
                out.push_str("from_hex('");
                push_hex(&mut out, value);
                out.push_str("')");
            }
            Flavor::Oracle => {
                out.push_str("hextoraw('");
                push_hex(&mut out, value);
                out.push_str("')");
            }
            Flavor::Informix | Flavor::Doris => {
                return Err(ProcessError::type_error(format!(
                    "Binary values are not supported by {self}."
                )));
            }
        }
        Ok(out)
    }

    fn format_datetime(&self, value: &SqlDateTime) -> ProcessResult<String> {
        // 四舍五入到微秒；已接近最大日期时不再进位
        let dt = value
            .dt
            .checked_add(time::Duration::nanoseconds(500))
            .unwrap_or(value.dt);
        let micros = format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:6]"
        );

        let s = match self {
            Flavor::MySQL | Flavor::ClickHouse | Flavor::Informix | Flavor::Doris => {
                format!("'{}'", dt.format(micros)?)
            }
            Flavor::PostgreSQL => {
                let zone = match &value.tz_abbr {
                    Some(abbr) => abbr.to_string(),
                    None => dt.format(format_description!(
                        "[offset_hour sign:mandatory]:[offset_minute]"
                    ))?,
                };
                format!("'{} {zone}'", dt.format(micros)?)
            }
            Flavor::SQLite | Flavor::Presto => {
                let millis = format_description!(
                    "[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:3]"
                );
                format!("'{}'", dt.format(millis)?)
            }
            Flavor::SQLServer => {
                let layout = format_description!(
                    "[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:6] [offset_hour sign:mandatory]:[offset_minute]"
                );
                format!("'{}'", dt.format(layout)?)
            }
            Flavor::CQL => {
                let layout = format_description!(
                    "[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:6][offset_hour sign:mandatory][offset_minute]"
                );
                format!("'{}'", dt.format(layout)?)
            }
            Flavor::Oracle => format!(
                "to_timestamp('{}', 'YYYY-MM-DD HH24:MI:SS.FF')",
                dt.format(micros)?
            ),
        };
        Ok(s)
    }
}

fn push_hex(out: &mut String, data: &[u8]) {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    for &b in data {
        out.push(HEX[((b >> 4) & 0xF) as usize] as char);
        out.push(HEX[(b & 0xF) as usize] as char);
    }
}

fn quote_string(out: &mut String, s: &str, flavor: Flavor) {
    match flavor {
        Flavor::PostgreSQL => out.push('E'),
        Flavor::SQLServer => out.push('N'),
        _ => {}
    }

    out.push('\'');
    for ch in s.chars() {
        match ch {
            '\u{0000}' => out.push_str("\\0"),
            '\u{0008}' => out.push_str("\\b"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{001a}' => out.push_str("\\Z"),
            '\'' => {
                if flavor == Flavor::CQL {
                    out.push_str("''");
                } else {
                    out.push_str("\\'");
                }
            }
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            _ => out.push(ch),
        }
    }
    out.push('\'');
}
