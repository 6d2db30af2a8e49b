//! Dense row-major matrices: `[a b; c d]`.

use crate::codec::vector::strip_brackets;
use crate::codec::{Decode, Encode, Shape};
use crate::error::{ConfigError, Result};
use std::ops::Index;

/// A dense matrix stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix<T> {
    rows: usize,
    cols: usize,
    entries: Vec<T>,
}

impl<T> DenseMatrix<T> {
    /// Build a matrix from row-major `entries`.
    ///
    /// Fails with `ShapeMismatch` if `entries` does not hold `rows * cols` values.
    pub fn new(rows: usize, cols: usize, entries: Vec<T>) -> Result<Self> {
        if entries.len() != rows * cols {
            return Err(ConfigError::ShapeMismatch {
                expected: rows * cols,
                found: entries.len(),
            });
        }
        Ok(Self {
            rows,
            cols,
            entries,
        })
    }

    /// Build a matrix from equally long rows.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let row_count = rows.len();
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        let entries: Vec<T> = rows.into_iter().flatten().collect();
        Self::new(row_count, cols, entries)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.entries.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Iterate over the rows as slices.
    pub fn row_slices(&self) -> impl Iterator<Item = &[T]> {
        // chunks(0) panics, and a zero-column matrix has no entries anyway
        self.entries.chunks(self.cols.max(1)).take(self.rows)
    }
}

impl<T> Default for DenseMatrix<T> {
    fn default() -> Self {
        Self {
            rows: 0,
            cols: 0,
            entries: Vec::new(),
        }
    }
}

impl<T> Index<(usize, usize)> for DenseMatrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        &self.entries[row * self.cols + col]
    }
}

impl<T: Encode> Encode for DenseMatrix<T> {
    fn encode(&self) -> String {
        let rows: Vec<String> = self
            .row_slices()
            .map(|row| {
                row.iter()
                    .map(Encode::encode)
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();
        format!("[{}]", rows.join("; "))
    }
}

impl<T: Decode> Decode for DenseMatrix<T> {
    fn decode(raw: &str, shape: Shape) -> Result<Self> {
        let (rows, cols, tokens) = matrix_tokens(raw, shape.size, shape.cols)?;
        let entries = tokens
            .iter()
            .map(|token| T::decode(token, Shape::any()))
            .collect::<Result<Vec<T>>>()?;
        Self::new(rows, cols, entries)
    }
}

/// Row-major entry tokens of a matrix literal together with the resulting
/// row and column counts. A requested count of `0` is inferred; larger
/// literals are cut to the requested counts, smaller ones are rejected. An
/// unbracketed value fills the whole (at least 1x1) matrix.
fn matrix_tokens(raw: &str, rows: usize, cols: usize) -> Result<(usize, usize, Vec<String>)> {
    let Some(inner) = strip_brackets(raw)? else {
        let rows = rows.max(1);
        let cols = cols.max(1);
        return Ok((rows, cols, vec![raw.trim().to_string(); rows * cols]));
    };

    let parsed: Vec<Vec<&str>> = inner
        .split(';')
        .map(str::trim)
        .filter(|row| !row.is_empty())
        .map(|row| row.split_whitespace().collect())
        .collect();

    let rows = match rows {
        0 => parsed.len(),
        n if n > parsed.len() => {
            return Err(ConfigError::parse(
                raw,
                "matrix",
                format!("expected at least {} rows, found {}", n, parsed.len()),
            ))
        }
        n => n,
    };
    let selected = &parsed[..rows];

    let cols = if cols == 0 {
        let width = selected.first().map(Vec::len).unwrap_or(0);
        if selected.iter().any(|row| row.len() != width) {
            return Err(ConfigError::parse(raw, "matrix", "rows differ in length"));
        }
        width
    } else {
        if let Some(short) = selected.iter().find(|row| row.len() < cols) {
            return Err(ConfigError::parse(
                raw,
                "matrix",
                format!("expected at least {} columns, found {}", cols, short.len()),
            ));
        }
        cols
    };

    let tokens = selected
        .iter()
        .flat_map(|row| row[..cols].iter().map(|entry| entry.to_string()))
        .collect();
    Ok((rows, cols, tokens))
}
