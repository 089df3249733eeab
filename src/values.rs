//! 值列表展开：把 `%values` / `%values[]` 的行渲染成 `(cols) VALUES (...), (...)`。
//!
//! 列集合是所有非默认行中列名的有序并集（按首次出现排序）；
//! 行缺少的列输出 `DEFAULT`。格式化器的调用顺序是：先按列顺序格式化全部列名，
//! 再逐行、按列顺序格式化单元格。

use crate::error::{ProcessError, ProcessResult};
use crate::formatter::SqlFormatter;
use crate::modifier::ModifierSpec;
use crate::processor::format_value;
use crate::row::Row;
use crate::scanner::parse_column_key;
use crate::string_builder::StringBuilder;
use crate::value::SqlValue;

const DEFAULT: &str = "DEFAULT";

#[derive(Debug)]
struct Cell {
    column: String,
    spec: ModifierSpec,
    value: SqlValue,
}

pub(crate) fn expand(
    formatter: &dyn SqlFormatter,
    spec: ModifierSpec,
    rows: Vec<Row>,
    out: &mut StringBuilder,
) -> ProcessResult<()> {
    if rows.is_empty() {
        return Err(ProcessError::argument(format!(
            "Modifier {spec} must contain at least one array element."
        )));
    }

    let mut columns: Vec<String> = Vec::new();
    let mut parsed: Vec<Vec<Cell>> = Vec::with_capacity(rows.len());

    for row in rows {
        let cells = match row {
            Row::AllDefault => Vec::new(),
            Row::Values(pairs) => parse_cells(pairs, &mut columns)?,
        };
        parsed.push(cells);
    }

    if columns.is_empty() {
        out.write_str("VALUES ");
        for i in 0..parsed.len() {
            out.write_separator(i, ", ");
            out.write_str("(DEFAULT)");
        }
        return Ok(());
    }

    out.write_char('(');
    for (i, column) in columns.iter().enumerate() {
        out.write_separator(i, ", ");
        out.write_str(&formatter.format_identifier(column));
    }
    out.write_str(") VALUES ");

    for (r, cells) in parsed.iter().enumerate() {
        out.write_separator(r, ", ");
        out.write_char('(');
        for (i, column) in columns.iter().enumerate() {
            out.write_separator(i, ", ");
            match cells.iter().find(|c| c.column == *column) {
                Some(cell) => out.write_str(&format_value(formatter, cell.spec, &cell.value)?),
                None => out.write_str(DEFAULT),
            }
        }
        out.write_char(')');
    }

    Ok(())
}

/// 剥离行键上的修饰符，并把新出现的列名追加到 `columns`。
fn parse_cells(
    pairs: Vec<(String, SqlValue)>,
    columns: &mut Vec<String>,
) -> ProcessResult<Vec<Cell>> {
    let mut cells: Vec<Cell> = Vec::with_capacity(pairs.len());

    for (key, value) in pairs {
        let placeholder = parse_column_key(&key)?;
        let column = placeholder.column.unwrap_or(key);

        if cells.iter().any(|c| c.column == column) {
            return Err(ProcessError::argument(format!(
                "Column '{column}' is listed more than once in a single row."
            )));
        }
        if !columns.contains(&column) {
            columns.push(column.clone());
        }

        cells.push(Cell {
            column,
            spec: placeholder.spec,
            value,
        });
    }

    Ok(cells)
}
