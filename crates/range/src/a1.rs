//! A1-style reference notation
//!
//! The data layer addresses cells and ranges as strings (`"B3"`,
//! `"A1:C4"`, merges, freeze positions). These impls convert between
//! that notation and the typed range values. Columns are letters
//! (`A` = 0, `AA` = 26), rows are 1-based numbers. Whole-column ranges
//! are written `"B:D"`, whole-row ranges `"2:5"`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::range::Range;
use crate::span::Span;

/// Errors from parsing A1-style cell or range references.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RefParseError {
    #[error("empty reference")]
    Empty,
    #[error("invalid column letters: {0}")]
    InvalidColumn(String),
    #[error("invalid row number: {0}")]
    InvalidRow(String),
    #[error("malformed reference: {0}")]
    Malformed(String),
}

/// A single cell address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

impl CellRef {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// `"AA"` -> 26
fn letters_to_col(s: &str) -> Result<usize, RefParseError> {
    if s.is_empty() {
        return Err(RefParseError::InvalidColumn(s.to_string()));
    }
    let mut col = 0usize;
    for c in s.chars() {
        let c = c.to_ascii_uppercase();
        if !c.is_ascii_uppercase() {
            return Err(RefParseError::InvalidColumn(s.to_string()));
        }
        col = col * 26 + (c as usize - 'A' as usize + 1);
    }
    Ok(col - 1)
}

/// 26 -> `"AA"`
fn col_to_letters(col: usize) -> String {
    let mut n = col + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(char::from(b'A' + rem as u8));
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// 1-based row number -> index
fn number_to_row(s: &str) -> Result<usize, RefParseError> {
    match s.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n - 1),
        _ => Err(RefParseError::InvalidRow(s.to_string())),
    }
}

/// Split a cell reference into its letter and digit parts.
fn split_cell(s: &str) -> Result<(usize, usize), RefParseError> {
    let digits_at = s
        .find(|c: char| c.is_ascii_digit())
        .ok_or_else(|| RefParseError::Malformed(s.to_string()))?;
    if digits_at == 0 {
        return Err(RefParseError::Malformed(s.to_string()));
    }
    let col = letters_to_col(&s[..digits_at])?;
    let row = number_to_row(&s[digits_at..])?;
    Ok((row, col))
}

impl FromStr for CellRef {
    type Err = RefParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(RefParseError::Empty);
        }
        let (row, col) = split_cell(s)?;
        Ok(Self { row, col })
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", col_to_letters(self.col), self.row + 1)
    }
}

impl FromStr for Range {
    type Err = RefParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(RefParseError::Empty);
        }
        let Some((left, right)) = s.split_once(':') else {
            let cell: CellRef = s.parse()?;
            return Ok(Self::cell(cell.row, cell.col));
        };
        let all_letters = |p: &str| !p.is_empty() && p.chars().all(|c| c.is_ascii_alphabetic());
        let all_digits = |p: &str| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit());
        if all_letters(left) && all_letters(right) {
            return Ok(Self::whole_cols(letters_to_col(left)?, letters_to_col(right)?));
        }
        if all_digits(left) && all_digits(right) {
            return Ok(Self::whole_rows(number_to_row(left)?, number_to_row(right)?));
        }
        let (start_row, start_col) = split_cell(left)?;
        let (end_row, end_col) = split_cell(right)?;
        Ok(Self::new(start_row, start_col, end_row, end_col))
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.rows, self.cols) {
            (Span::Bounded { start: sr, end: er }, Span::Bounded { start: sc, end: ec }) => {
                let start = CellRef::new(sr, sc);
                if sr == er && sc == ec {
                    write!(f, "{start}")
                } else {
                    write!(f, "{start}:{}", CellRef::new(er, ec))
                }
            }
            (Span::Bounded { start, end }, Span::Unbounded) => {
                write!(f, "{}:{}", start + 1, end + 1)
            }
            (Span::Unbounded, Span::Bounded { start, end }) => {
                write!(f, "{}:{}", col_to_letters(start), col_to_letters(end))
            }
            // The whole grid
            (Span::Unbounded, Span::Unbounded) => write!(f, ":"),
        }
    }
}
