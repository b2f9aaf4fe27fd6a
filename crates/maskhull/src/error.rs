use thiserror::Error;

use crate::geom2::Point;

/// Malformed mask input. Raised before any geometry runs.
#[derive(Clone, Debug, PartialEq, Error)]
#[non_exhaustive]
pub enum MaskError {
    #[error("mask must have at least one row and one column, got {rows}x{cols}")]
    EmptyDims { rows: usize, cols: usize },

    #[error("ragged mask: row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("a {rows}x{cols} mask has more cells than fit in memory")]
    TooLarge { rows: usize, cols: usize },

    #[error("{len} cells do not fill a {rows}x{cols} mask")]
    LenMismatch { rows: usize, cols: usize, len: usize },

    #[error("score at index {index} is not finite")]
    NonFiniteScore { index: usize },

    #[error("unexpected character {ch:?} at line {line}, column {col}")]
    BadCell { line: usize, col: usize, ch: char },
}

/// Internal-consistency failures of the gift-wrapping loop.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum HullError {
    #[error("gift wrap did not return to anchor {anchor:?} within {steps} steps")]
    WrapDidNotClose { steps: usize, anchor: Point },
}

/// Any failure of the mask-to-area pipeline (`analyze_mask`, `analyze_points`).
#[derive(Clone, Debug, PartialEq, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Mask(#[from] MaskError),

    #[error(transparent)]
    Hull(#[from] HullError),
}
