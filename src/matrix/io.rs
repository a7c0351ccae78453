//! Plain-text matrix format
//!
//! Input is whitespace-separated numeric tokens: the dimension n, then n²
//! entries in row-major order. Output is one line per row with entries
//! separated by tabs.

use super::Matrix;
use crate::error::{Error, Result};
use std::io::{BufRead, Write};

/// Parse a matrix from text
///
/// Tokens after the n² entries are ignored, so a file may carry trailing
/// notes after the matrix.
pub fn parse_matrix(text: &str) -> Result<Matrix> {
    let mut tokens = text.split_whitespace();

    let dim_token = tokens
        .next()
        .ok_or_else(|| Error::parse("missing matrix dimension"))?;
    let n: usize = dim_token
        .parse()
        .map_err(|_| Error::parse(format!("invalid dimension '{dim_token}'")))?;

    let cells = n
        .checked_mul(n)
        .ok_or_else(|| Error::parse(format!("dimension {n} is too large")))?;

    // Grows with the tokens actually present, not the declared size
    let mut data = Vec::new();
    for idx in 0..cells {
        let token = tokens.next().ok_or_else(|| {
            Error::parse(format!(
                "expected {cells} entries for a {n}x{n} matrix, found {idx}"
            ))
        })?;
        let value: f64 = token.parse().map_err(|_| {
            Error::parse(format!(
                "invalid entry '{token}' at row {}, column {}",
                idx / n,
                idx % n
            ))
        })?;
        data.push(value);
    }

    Matrix::from_vec(n, data)
}

/// Read a matrix from any buffered reader
pub fn read_matrix<R: BufRead>(mut reader: R) -> Result<Matrix> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_matrix(&text)
}

/// Render a matrix as tab-separated rows
pub fn format_matrix(matrix: &Matrix) -> String {
    let mut out = String::new();
    for i in 0..matrix.dim() {
        let line: Vec<String> = matrix.row(i).iter().map(|v| v.to_string()).collect();
        out.push_str(&line.join("\t"));
        out.push('\n');
    }
    out
}

/// Write a matrix as tab-separated rows
pub fn write_matrix<W: Write>(mut writer: W, matrix: &Matrix) -> Result<()> {
    writer.write_all(format_matrix(matrix).as_bytes())?;
    writer.flush()?;
    Ok(())
}
