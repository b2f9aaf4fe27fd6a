//! Integer point types and the hull configuration.
//!
//! - `Point`: one pixel `(row, col)`; `row` is the vertical axis (y, grows
//!   downward in image space), `col` the horizontal axis (x).
//! - `PointSet`: distinct points, kept row-major sorted.
//! - `Polygon`: ordered cyclic hull vertices.
//! - `HullCfg`, `Collinear`: knobs for the gift wrap.
//!
//! Code cross-refs: `hull::convex_hull`, `area::{polygon_area, signed_area}`

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// A pixel or hull vertex. Vector math uses `(x, y) = (col, row)`.
///
/// Hull and area results are exact while every coordinate satisfies
/// `|c| <= COORD_LIMIT`; products are formed in `i128`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Point {
    pub row: i64,
    pub col: i64,
}

impl Point {
    #[inline]
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }
    /// Float view `(x, y) = (col, row)`.
    #[inline]
    pub fn to_vec2(self) -> Vector2<f64> {
        Vector2::new(self.col as f64, self.row as f64)
    }
    #[inline]
    pub(crate) fn dist2(self, other: Point) -> i128 {
        let dr = other.row as i128 - self.row as i128;
        let dc = other.col as i128 - self.col as i128;
        dr * dr + dc * dc
    }
}

impl From<(i64, i64)> for Point {
    #[inline]
    fn from((row, col): (i64, i64)) -> Self {
        Self { row, col }
    }
}

/// Largest coordinate magnitude for which orientation and area stay exact.
pub const COORD_LIMIT: i64 = 1 << 61;

/// Orientation of the triple `(x, y, z)`:
/// `(y.col - x.col)*(z.row - y.row) - (y.row - x.row)*(z.col - y.col)`.
///
/// Positive for a counter-clockwise turn in `(x=col, y=row)` axes, zero when collinear.
#[inline]
pub fn cross(x: Point, y: Point, z: Point) -> i128 {
    let (xr, xc) = (x.row as i128, x.col as i128);
    let (yr, yc) = (y.row as i128, y.col as i128);
    let (zr, zc) = (z.row as i128, z.col as i128);
    (yc - xc) * (zr - yr) - (yr - xr) * (zc - yc)
}

/// Distinct points, row-major sorted. Built once, then read-only.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PointSet {
    pts: Vec<Point>,
}

impl PointSet {
    /// Collect points, dropping duplicates.
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Point>,
    {
        let mut pts: Vec<Point> = points.into_iter().map(Into::into).collect();
        pts.sort_unstable();
        pts.dedup();
        Self { pts }
    }
    /// Caller guarantees `pts` is sorted and duplicate-free.
    pub(crate) fn from_sorted_unique(pts: Vec<Point>) -> Self {
        debug_assert!(pts.windows(2).all(|w| w[0] < w[1]), "points not sorted/unique");
        Self { pts }
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.pts.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pts.is_empty()
    }
    #[inline]
    pub fn as_slice(&self) -> &[Point] {
        &self.pts
    }
    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.pts.iter()
    }
    #[inline]
    pub fn contains(&self, p: &Point) -> bool {
        self.pts.binary_search(p).is_ok()
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;
    fn into_iter(self) -> Self::IntoIter {
        self.pts.iter()
    }
}

/// Rotational order of polygon vertices, in `(x=col, y=row)` axes.
///
/// On screen (rows growing downward) `CounterClockwise` appears clockwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winding {
    CounterClockwise,
    Clockwise,
    /// Fewer than 3 vertices, or zero enclosed area.
    Degenerate,
}

/// Ordered cyclic vertex list of a convex hull.
///
/// Invariants (for polygons built by `convex_hull`):
/// - every vertex is a member of the source `PointSet`;
/// - consecutive vertices turn the same way (counter-clockwise in `(col,row)` axes);
/// - fewer than 3 vertices means a degenerate hull with zero area.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Polygon {
    pub(crate) vertices: Vec<Point>,
}

impl Polygon {
    /// Wrap an already ordered vertex list. No convexity check is done;
    /// `contains` and `polygon_area` assume the vertices form a convex polygon.
    pub fn from_vertices(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3
    }
    /// Vertices with the first one repeated at the end (closed ring for plotting).
    pub fn closed_ring(&self) -> Vec<Point> {
        let mut ring = self.vertices.clone();
        if let Some(&first) = self.vertices.first() {
            ring.push(first);
        }
        ring
    }
    pub fn winding(&self) -> Winding {
        let a2 = super::area::twice_signed_area(&self.vertices);
        match a2.signum() {
            1 => Winding::CounterClockwise,
            -1 => Winding::Clockwise,
            _ => Winding::Degenerate,
        }
    }
    /// On-or-inside test for a convex polygon in either winding.
    /// Non-convex vertex lists give unspecified answers.
    ///
    /// Degenerate polygons contain exactly the points of their vertex segment.
    pub fn contains(&self, p: Point) -> bool {
        let v = &self.vertices;
        match v.len() {
            0 => false,
            1 => v[0] == p,
            2 => on_segment(v[0], v[1], p),
            n => {
                let mut sign = 0i128;
                for i in 0..n {
                    let c = cross(v[i], v[(i + 1) % n], p);
                    if c == 0 {
                        continue;
                    }
                    if sign == 0 {
                        sign = c.signum();
                    } else if c.signum() != sign {
                        return false;
                    }
                }
                // All-zero means p is collinear with every edge: only possible
                // on the boundary of a flat polygon.
                sign != 0 || (0..n).any(|i| on_segment(v[i], v[(i + 1) % n], p))
            }
        }
    }
}

#[inline]
fn on_segment(a: Point, b: Point, p: Point) -> bool {
    cross(a, b, p) == 0
        && p.row >= a.row.min(b.row)
        && p.row <= a.row.max(b.row)
        && p.col >= a.col.min(b.col)
        && p.col <= a.col.max(b.col)
}

/// What to do with points lying exactly on a hull edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Collinear {
    /// Report only the edge endpoints; every turn is strict.
    #[default]
    Drop,
    /// Report every point on a hull edge, nearest first.
    Keep,
}

/// Gift-wrap configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HullCfg {
    pub collinear: Collinear,
    /// Upper bound on wrap steps; `None` means the point count.
    pub max_steps: Option<usize>,
}

impl HullCfg {
    pub fn keep_collinear() -> Self {
        Self {
            collinear: Collinear::Keep,
            ..Self::default()
        }
    }
}
