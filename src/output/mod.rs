//! Output formatting for rook-ceph

use crate::resources::{status_category, StatusCategory, Tabular};
use owo_colors::{OwoColorize, Stream};

/// Format a list of resources as a table
pub fn format_table<T: Tabular>(resources: &[T]) -> String {
    if resources.is_empty() {
        return "No resources found".to_string();
    }

    let headers = T::headers();

    let rows: Vec<Vec<String>> = resources
        .iter()
        .map(|r| {
            let status_cells = r.status_cells();
            r.row()
                .into_iter()
                .map(|cell| {
                    if status_cells.contains(&cell) {
                        colorize_status(&cell)
                    } else {
                        cell
                    }
                })
                .collect()
        })
        .collect();

    format_table_raw(&headers, &rows)
}

/// Format raw headers and rows as a table
pub fn format_table_raw(headers: &[&str], rows: &[Vec<String>]) -> String {
    let num_cols = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();

    for row in rows {
        for (i, cell) in row.iter().enumerate().take(num_cols) {
            widths[i] = widths[i].max(strip_ansi_codes(cell).len());
        }
    }

    let mut output = String::new();

    let mut header_line = String::new();
    for (i, header) in headers.iter().enumerate() {
        let padding = widths[i].saturating_sub(header.len());
        header_line.push_str(header);
        header_line.push_str(&" ".repeat(padding + 2));
    }
    output.push_str(
        &header_line
            .trim_end()
            .if_supports_color(Stream::Stdout, |h| h.bold())
            .to_string(),
    );
    output.push('\n');

    for row in rows {
        let mut line = String::new();
        for (i, cell) in row.iter().enumerate().take(num_cols) {
            let stripped_len = strip_ansi_codes(cell).len();
            let padding = widths[i].saturating_sub(stripped_len);
            line.push_str(cell);
            line.push_str(&" ".repeat(padding + 2));
        }
        output.push_str(line.trim_end());
        output.push('\n');
    }

    output.trim_end().to_string()
}

/// Strip ANSI escape codes for length calculation
pub fn strip_ansi_codes(s: &str) -> String {
    let mut result = String::new();
    let mut in_escape = false;

    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            result.push(c);
        }
    }

    result
}

/// Colorize a status string based on its category
pub fn colorize_status(status: &str) -> String {
    match status_category(status) {
        StatusCategory::Healthy => status
            .if_supports_color(Stream::Stdout, |s| s.green())
            .to_string(),
        StatusCategory::Warning => status
            .if_supports_color(Stream::Stdout, |s| s.yellow())
            .to_string(),
        StatusCategory::Error => status
            .if_supports_color(Stream::Stdout, |s| s.red())
            .to_string(),
        StatusCategory::Unknown => status.to_string(),
    }
}

/// Format a value as pretty JSON
pub fn format_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Format a value as YAML
pub fn format_yaml<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(value)
}
