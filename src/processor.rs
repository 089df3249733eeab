//! SqlProcessor：把扫描后的模板与位置参数绑定成最终 SQL。
//!
//! ```
//! use halo_space::{Flavor, Row, SqlProcessor};
//!
//! let p = SqlProcessor::with_flavor(Flavor::PostgreSQL);
//! let sql = halo_space::sql!(p, "INSERT INTO users %values", Row::new().set("name", "Huan"))?;
//! assert_eq!(sql, "INSERT INTO users (\"name\") VALUES (E'Huan')");
//! # Ok::<(), halo_space::ProcessError>(())
//! ```

use crate::args::Arg;
use crate::error::{ProcessError, ProcessResult};
use crate::flavor::{Flavor, default_flavor};
use crate::formatter::SqlFormatter;
use crate::modifier::{Modifier, ModifierSpec};
use crate::row::Row;
use crate::scanner::{Segment, Template, scan_with};
use crate::string_builder::StringBuilder;
use crate::value::SqlValue;
use crate::values;

/// 模板处理器。本身无状态，可在多个线程间共享。
#[derive(Debug, Clone)]
pub struct SqlProcessor {
    formatter: Box<dyn SqlFormatter>,
}

impl Default for SqlProcessor {
    /// 使用当前默认 Flavor。
    fn default() -> Self {
        Self::with_flavor(default_flavor())
    }
}

impl SqlProcessor {
    pub fn new(formatter: impl SqlFormatter + 'static) -> Self {
        Self {
            formatter: Box::new(formatter),
        }
    }

    pub fn with_flavor(flavor: Flavor) -> Self {
        Self::new(flavor)
    }

    pub fn formatter(&self) -> &dyn SqlFormatter {
        self.formatter.as_ref()
    }

    /// 扫描 `template` 并按顺序绑定 `args`。
    pub fn process<I, A>(&self, template: &str, args: I) -> ProcessResult<String>
    where
        I: IntoIterator<Item = A>,
        A: Into<Arg>,
    {
        let backslash_escapes = self.formatter.backslash_escapes();
        let result = scan_with(template, backslash_escapes)
            .and_then(|t| self.process_template(&t, args.into_iter().map(Into::into)));

        #[cfg(feature = "tracing")]
        {
            match &result {
                Ok(sql) => tracing::trace!(template, sql = %sql, "processed sql template"),
                Err(e) => tracing::debug!(template, error = %e, "failed to process sql template"),
            }
        }

        result
    }

    /// 绑定一个已扫描的模板；同一模板可以反复绑定不同参数。
    pub fn process_template(
        &self,
        template: &Template,
        args: impl IntoIterator<Item = Arg>,
    ) -> ProcessResult<String> {
        let mut out = StringBuilder::with_capacity(64);
        let mut args = args.into_iter();

        for segment in template.segments() {
            match segment {
                Segment::Literal(text) => out.write_str(text),
                Segment::Placeholder(p) => {
                    let arg = args.next().ok_or_else(|| {
                        ProcessError::argument(format!(
                            "Missing query parameter for modifier {}.",
                            p.spec
                        ))
                    })?;
                    self.write_placeholder(&mut out, p.spec, arg)?;
                }
            }
        }

        let unused = args.count();
        if unused > 0 {
            return Err(ProcessError::argument(format!(
                "Redundant query parameter or missing modifier; {unused} unused argument(s)."
            )));
        }

        Ok(out.into_string())
    }

    fn write_placeholder(
        &self,
        out: &mut StringBuilder,
        spec: ModifierSpec,
        arg: Arg,
    ) -> ProcessResult<()> {
        let formatter = self.formatter();

        match spec.modifier {
            Modifier::Values => {
                let row = match arg {
                    Arg::Row(row) => row,
                    Arg::Value(SqlValue::Null) => Row::AllDefault,
                    other => return Err(unexpected_arg(spec, &other)),
                };
                values::expand(formatter, spec, vec![row], out)
            }
            Modifier::ValuesList => match arg {
                Arg::Rows(rows) => values::expand(formatter, spec, rows, out),
                other => Err(unexpected_arg(spec, &other)),
            },
            _ if spec.array => {
                let items = match arg {
                    Arg::List(items) => items,
                    other => return Err(unexpected_arg(spec, &other)),
                };
                if items.is_empty() {
                    return Err(ProcessError::argument(format!(
                        "Modifier {spec} must contain at least one array element."
                    )));
                }
                out.write_char('(');
                for (i, item) in items.iter().enumerate() {
                    out.write_separator(i, ", ");
                    out.write_str(&format_value(formatter, spec, item)?);
                }
                out.write_char(')');
                Ok(())
            }
            _ => {
                let value = match arg {
                    Arg::Value(v) => v,
                    Arg::Valuer(v) => v.value()?,
                    other => return Err(unexpected_arg(spec, &other)),
                };
                out.write_str(&format_value(formatter, spec, &value)?);
                Ok(())
            }
        }
    }
}

fn unexpected_arg(spec: ModifierSpec, arg: &Arg) -> ProcessError {
    let expected = if spec.array {
        "a list"
    } else {
        spec.modifier.expected()
    };
    ProcessError::type_error(format!(
        "Modifier {spec} expects {expected}, {} given.",
        arg.kind_name()
    ))
}

/// 按修饰符格式化一个标量；值列表的每个单元格也走这里。
pub(crate) fn format_value(
    formatter: &dyn SqlFormatter,
    spec: ModifierSpec,
    value: &SqlValue,
) -> ProcessResult<String> {
    if value.is_null() {
        if spec.nullable || spec.modifier == Modifier::Any {
            return Ok(formatter.format_null());
        }
        return Err(ProcessError::type_error(format!(
            "Modifier {spec} does not allow NULL value."
        )));
    }

    let s = match (spec.modifier, value) {
        (Modifier::Any, v) => return format_auto(formatter, spec, v),
        (Modifier::Int, SqlValue::I64(v)) => formatter.format_int(*v),
        (Modifier::Int, SqlValue::U64(v)) => formatter.format_uint(*v),
        (Modifier::Float, SqlValue::F64(v)) => format_float(formatter, spec, *v)?,
        (Modifier::Float, SqlValue::I64(v)) => format_float(formatter, spec, *v as f64)?,
        (Modifier::Float, SqlValue::U64(v)) => format_float(formatter, spec, *v as f64)?,
        (Modifier::String, SqlValue::String(v)) => formatter.format_string(v),
        (Modifier::Bool, SqlValue::Bool(v)) => formatter.format_bool(*v),
        (Modifier::DateTime, SqlValue::DateTime(v)) => formatter.format_datetime(v)?,
        (Modifier::Blob, SqlValue::Bytes(v)) => formatter.format_bytes(v)?,
        (Modifier::Column | Modifier::Table, SqlValue::String(v)) => {
            formatter.format_identifier(v)
        }
        (Modifier::Raw, SqlValue::String(v)) => v.to_string(),
        (m, v) => {
            return Err(ProcessError::type_error(format!(
                "Modifier {spec} expects {}, {} given.",
                m.expected(),
                v.kind_name()
            )));
        }
    };
    Ok(s)
}

fn format_auto(
    formatter: &dyn SqlFormatter,
    spec: ModifierSpec,
    value: &SqlValue,
) -> ProcessResult<String> {
    let s = match value {
        SqlValue::Null => formatter.format_null(),
        SqlValue::Bool(v) => formatter.format_bool(*v),
        SqlValue::I64(v) => formatter.format_int(*v),
        SqlValue::U64(v) => formatter.format_uint(*v),
        SqlValue::F64(v) => format_float(formatter, spec, *v)?,
        SqlValue::String(v) => formatter.format_string(v),
        SqlValue::Bytes(v) => formatter.format_bytes(v)?,
        SqlValue::DateTime(v) => formatter.format_datetime(v)?,
    };
    Ok(s)
}

fn format_float(formatter: &dyn SqlFormatter, spec: ModifierSpec, v: f64) -> ProcessResult<String> {
    if !v.is_finite() {
        return Err(ProcessError::type_error(format!(
            "Modifier {spec} does not accept non-finite float {v}."
        )));
    }
    Ok(formatter.format_float(v))
}
