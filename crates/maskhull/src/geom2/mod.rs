//! Integer 2D geometry for mask hulls.
//!
//! Purpose
//! - Gift-wrap the foreground points of a mask into a convex polygon and
//!   measure it, using only integer point arithmetic.
//! - Keep tie-breaking explicit: anchor = min `col` then min `row`; collinear
//!   candidates resolved by distance (`Collinear`).
//!
//! Axes
//! - `Point { row, col }` maps to `(x, y) = (col, row)`. Hulls wind
//!   counter-clockwise in those axes (clockwise on an image, rows down).
//!
//! Code cross-refs: `Point`, `PointSet`, `Polygon`, `convex_hull`, `polygon_area`

pub mod area;
pub mod hull;
pub mod rand;
mod types;

pub use area::{fan_area, polygon_area, signed_area, signed_area_f64, triangle_area};
pub use hull::{convex_hull, convex_hull_with};
pub use types::{cross, Collinear, COORD_LIMIT, HullCfg, Point, PointSet, Polygon, Winding};

#[cfg(test)]
mod tests;
