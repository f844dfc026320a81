// Delimited Table Processing
//
// This module implements the row-oriented host layer around the rewriter:
// it reads a delimiter-separated table with `join_order` and `query`
// columns, rewrites each row, and writes the same table back with a
// `fixed_query` column appended. All other columns pass through untouched
// and rows keep their input order.

use std::io::{BufRead, Write};

use thiserror::Error;

use crate::rewrite::error::RewriteError;
use crate::rewrite::rewriter::rewrite_with_fixed_join_order;

/// Errors that can occur while processing a delimited table
#[derive(Error, Debug)]
pub enum TableError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("input table is empty (no header row)")]
    EmptyTable,
    #[error("header is missing required column '{0}'")]
    MissingColumn(String),
    #[error("row {line} has {found} fields, expected {expected}")]
    RaggedRow {
        line: usize,
        found: usize,
        expected: usize,
    },
    #[error("row {line} (join_order={join_order}): {source}")]
    Row {
        line: usize,
        join_order: String,
        source: RewriteError,
    },
}

/// Result type for table operations
pub type TableResult<T> = Result<T, TableError>;

/// Options for delimited table processing
#[derive(Debug, Clone)]
pub struct TableOptions {
    /// Field delimiter (default: '|')
    pub delimiter: char,
    /// Abort on the first failed row instead of skipping it (default: false)
    pub fail_fast: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        TableOptions {
            delimiter: '|',
            fail_fast: false,
        }
    }
}

/// Summary of one table run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableSummary {
    /// Rows rewritten and written out
    pub rewritten: usize,
    /// Rows skipped because their rewrite failed
    pub skipped: usize,
}

/// Process a delimited table, appending a `fixed_query` column.
///
/// The header must contain `join_order` and `query` columns (in any
/// position). Failed rows are skipped and reported through the `log`
/// facade, or abort the batch when `fail_fast` is set; a failed row never
/// produces a partial output row.
pub fn process_table<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    options: &TableOptions,
) -> TableResult<TableSummary> {
    let mut lines = reader.lines();

    let header_line = match lines.next() {
        Some(line) => line?,
        None => return Err(TableError::EmptyTable),
    };

    let header = split_fields(&header_line, options.delimiter);
    let join_order_idx = column_index(&header, "join_order")?;
    let query_idx = column_index(&header, "query")?;

    let mut out_header = header.clone();
    out_header.push("fixed_query".to_string());
    write_row(&mut writer, &out_header, options.delimiter)?;

    let mut summary = TableSummary::default();

    // Header is line 1; data starts at line 2
    for (offset, line_result) in lines.enumerate() {
        let line_number = offset + 2;
        let line = line_result?;

        if line.trim().is_empty() {
            continue;
        }

        let mut fields = split_fields(&line, options.delimiter);
        if fields.len() != header.len() {
            let error = TableError::RaggedRow {
                line: line_number,
                found: fields.len(),
                expected: header.len(),
            };
            if options.fail_fast {
                return Err(error);
            }
            log::warn!("skipping row: {}", error);
            summary.skipped += 1;
            continue;
        }

        match rewrite_with_fixed_join_order(&fields[join_order_idx], &fields[query_idx]) {
            Ok(fixed_query) => {
                fields.push(fixed_query);
                write_row(&mut writer, &fields, options.delimiter)?;
                summary.rewritten += 1;
            }
            Err(source) => {
                let error = TableError::Row {
                    line: line_number,
                    join_order: fields[join_order_idx].clone(),
                    source,
                };
                if options.fail_fast {
                    return Err(error);
                }
                log::warn!("skipping row: {}", error);
                summary.skipped += 1;
            }
        }
    }

    writer.flush()?;
    Ok(summary)
}

fn column_index(header: &[String], name: &str) -> TableResult<usize> {
    header
        .iter()
        .position(|column| column.trim() == name)
        .ok_or_else(|| TableError::MissingColumn(name.to_string()))
}

/// Split one line into fields, honoring minimal double-quote quoting.
///
/// A field wrapped in double quotes may contain the delimiter; a doubled
/// quote inside a quoted field is an escaped quote.
pub fn split_fields(line: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];

        if ch == '"' {
            if in_quotes && i + 1 < chars.len() && chars[i + 1] == '"' {
                current.push('"');
                i += 1; // Skip escaped quote
            } else {
                in_quotes = !in_quotes;
            }
        } else if ch == delimiter && !in_quotes {
            fields.push(current.clone());
            current.clear();
        } else {
            current.push(ch);
        }

        i += 1;
    }

    fields.push(current);
    fields
}

/// Quote one field when it contains the delimiter, a quote, or a newline
fn escape_field(field: &str, delimiter: char) -> String {
    if field.contains(delimiter) || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn write_row<W: Write>(writer: &mut W, fields: &[String], delimiter: char) -> std::io::Result<()> {
    let row = fields
        .iter()
        .map(|field| escape_field(field, delimiter))
        .collect::<Vec<_>>()
        .join(&delimiter.to_string());
    writeln!(writer, "{}", row)
}
