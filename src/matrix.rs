//! Shared adjacency-matrix text format: one whitespace-separated row of
//! non-negative integers per node, optional label row, `%%` comments.
//! Every consumer goes through this module rather than re-parsing.

use anyhow::{Result, bail};

/// Parses matrix text into a label list and a square weight grid.
///
/// When the first data line contains anything that is not an integer it is
/// taken as the label row; otherwise labels `A`, `B`, … are synthesized,
/// which caps the unlabeled form at 26 nodes.
pub fn parse_matrix(text: &str) -> Result<(Vec<String>, Vec<Vec<u64>>)> {
    let lines = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("%%"));
    parse_rows(lines)
}

pub(crate) fn parse_rows<'a>(
    lines: impl Iterator<Item = &'a str>,
) -> Result<(Vec<String>, Vec<Vec<u64>>)> {
    let mut lines = lines.peekable();

    let first = match lines.peek() {
        Some(line) => *line,
        None => bail!("matrix definition does not contain any rows"),
    };

    let labels = if is_integer_row(first) {
        None
    } else {
        let row: Vec<String> = first
            .split_whitespace()
            .map(|token| token.to_string())
            .collect();
        for (idx, label) in row.iter().enumerate() {
            if row[..idx].contains(label) {
                bail!("duplicate node label '{label}' in matrix header");
            }
        }
        lines.next();
        Some(row)
    };

    let mut matrix = Vec::new();
    for line in lines {
        let mut row = Vec::new();
        for token in line.split_whitespace() {
            match token.parse::<u64>() {
                Ok(value) => row.push(value),
                Err(_) => bail!("invalid matrix cell '{token}'; expected a non-negative integer"),
            }
        }
        matrix.push(row);
    }

    if matrix.is_empty() {
        bail!("matrix definition does not contain any rows");
    }

    let labels = match labels {
        Some(labels) => labels,
        None => synthesize_labels(matrix.len())?,
    };

    let n = labels.len();
    if matrix.len() != n {
        bail!(
            "matrix has {} rows but {} labels; every node needs exactly one row",
            matrix.len(),
            n
        );
    }
    for (idx, row) in matrix.iter().enumerate() {
        if row.len() != n {
            bail!(
                "matrix row {} has {} columns, expected {}",
                idx + 1,
                row.len(),
                n
            );
        }
    }

    Ok((labels, matrix))
}

/// Renders labels and matrix back to the text form, columns right-aligned.
pub fn format_matrix(labels: &[String], matrix: &[Vec<u64>]) -> String {
    let mut width = labels.iter().map(String::len).max().unwrap_or(1);
    for row in matrix {
        for cell in row {
            width = width.max(cell.to_string().len());
        }
    }

    let mut lines = Vec::with_capacity(matrix.len() + 1);
    lines.push(
        labels
            .iter()
            .map(|label| format!("{label:>width$}"))
            .collect::<Vec<_>>()
            .join(" "),
    );
    for row in matrix {
        lines.push(
            row.iter()
                .map(|cell| format!("{cell:>width$}"))
                .collect::<Vec<_>>()
                .join(" "),
        );
    }

    let mut output = lines.join("\n");
    output.push('\n');
    output
}

fn is_integer_row(line: &str) -> bool {
    line.split_whitespace()
        .all(|token| token.parse::<u64>().is_ok())
}

fn synthesize_labels(count: usize) -> Result<Vec<String>> {
    if count > 26 {
        bail!("cannot synthesize labels for {count} nodes (A-Z limit); add a label row");
    }
    Ok((0..count)
        .map(|idx| char::from(b'A' + idx as u8).to_string())
        .collect())
}
