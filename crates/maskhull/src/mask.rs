//! Foreground masks and point extraction.
//!
//! A `Mask` is a validated `rows × cols` boolean grid stored row-major.
//! Constructors fail fast on malformed input; an all-background mask is valid
//! and yields an empty `PointSet`.
//!
//! Coordinates: `row` indexes the vertical axis, `col` the horizontal one.

use crate::error::MaskError;
use crate::geom2::{Point, PointSet};

/// Threshold applied to classifier scores by callers without their own choice.
pub const DEFAULT_THRESHOLD: f32 = 0.5;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mask {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Mask {
    /// Build from nested rows. Rejects empty and ragged input.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, MaskError> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        let n = check_dims(n_rows, n_cols)?;
        let mut cells = Vec::with_capacity(n);
        for (row, r) in rows.into_iter().enumerate() {
            if r.len() != n_cols {
                return Err(MaskError::Ragged {
                    row,
                    expected: n_cols,
                    found: r.len(),
                });
            }
            cells.extend(r);
        }
        Ok(Self {
            rows: n_rows,
            cols: n_cols,
            cells,
        })
    }

    /// Build from a row-major cell vector.
    pub fn from_vec(rows: usize, cols: usize, cells: Vec<bool>) -> Result<Self, MaskError> {
        let n = check_dims(rows, cols)?;
        if cells.len() != n {
            return Err(MaskError::LenMismatch {
                rows,
                cols,
                len: cells.len(),
            });
        }
        Ok(Self { rows, cols, cells })
    }

    /// Build from a foreground predicate `f(row, col)`.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Result<Self, MaskError>
    where
        F: FnMut(usize, usize) -> bool,
    {
        let n = check_dims(rows, cols)?;
        let mut cells = Vec::with_capacity(n);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(f(row, col));
            }
        }
        Ok(Self { rows, cols, cells })
    }

    /// Threshold per-pixel classifier scores: foreground is `score > threshold`.
    pub fn from_scores(
        rows: usize,
        cols: usize,
        scores: &[f32],
        threshold: f32,
    ) -> Result<Self, MaskError> {
        let n = check_dims(rows, cols)?;
        if scores.len() != n {
            return Err(MaskError::LenMismatch {
                rows,
                cols,
                len: scores.len(),
            });
        }
        if let Some(index) = scores.iter().position(|s| !s.is_finite()) {
            return Err(MaskError::NonFiniteScore { index });
        }
        let cells = scores.iter().map(|&s| s > threshold).collect();
        Ok(Self { rows, cols, cells })
    }

    /// Parse an ASCII mask: one line per row, `#`/`1` foreground, `.`/`0`
    /// background. Blank lines and surrounding whitespace are ignored.
    pub fn parse_ascii(text: &str) -> Result<Self, MaskError> {
        let mut rows = Vec::new();
        for (line_no, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let row = line
                .chars()
                .enumerate()
                .map(|(col, ch)| match ch {
                    '#' | '1' => Ok(true),
                    '.' | '0' => Ok(false),
                    _ => Err(MaskError::BadCell {
                        line: line_no + 1,
                        col: col + 1,
                        ch,
                    }),
                })
                .collect::<Result<Vec<bool>, _>>()?;
            rows.push(row);
        }
        Self::from_rows(rows)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }
    pub fn count_foreground(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// One point per foreground cell.
    pub fn foreground_points(&self) -> PointSet {
        // Row-major scan emits points already sorted and unique.
        let pts = self
            .cells
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c)
            .map(|(i, _)| Point::new((i / self.cols) as i64, (i % self.cols) as i64))
            .collect();
        PointSet::from_sorted_unique(pts)
    }
}

/// Cell count of a `rows × cols` grid.
fn check_dims(rows: usize, cols: usize) -> Result<usize, MaskError> {
    if rows == 0 || cols == 0 {
        return Err(MaskError::EmptyDims { rows, cols });
    }
    rows.checked_mul(cols).ok_or(MaskError::TooLarge { rows, cols })
}
