//! Polygon area from vertices.
//!
//! - `polygon_area`: triangle fan from the first vertex, summing absolute
//!   triangle areas. Exact for convex polygons (hull output); not a general
//!   simple-polygon formula.
//! - `signed_area`: shoelace; positive for counter-clockwise in `(x=col, y=row)`.
//!
//! Both accumulate doubled areas in `i128` relative to the first vertex and
//! halve once, so vertices within `COORD_LIMIT` give exact doubled areas.
//! Vertices are pixel centres: a filled 10×10 block has a hull area of 81.

use super::types::{Point, Polygon};

/// Doubled signed area of triangle `(p, q, r)` with `x = col`, `y = row`.
#[inline]
fn twice_triangle_area(p: Point, q: Point, r: Point) -> i128 {
    // Translate to `p` so each product spans a coordinate difference, not a coordinate.
    let (qx, qy) = (q.col as i128 - p.col as i128, q.row as i128 - p.row as i128);
    let (rx, ry) = (r.col as i128 - p.col as i128, r.row as i128 - p.row as i128);
    qx * ry - rx * qy
}

/// `|p.x(q.y − r.y) + q.x(r.y − p.y) + r.x(p.y − q.y)| / 2`.
#[inline]
pub fn triangle_area(p: Point, q: Point, r: Point) -> f64 {
    twice_triangle_area(p, q, r).abs() as f64 / 2.0
}

/// Area of a convex polygon by fan decomposition into `h − 2` triangles.
///
/// Fewer than 3 vertices → `0.0`. A non-convex vertex list (possible via
/// `Polygon::from_vertices`) over-counts; use `signed_area` for those.
pub fn polygon_area(poly: &Polygon) -> f64 {
    fan_area(poly.vertices())
}

/// Slice form of [`polygon_area`].
pub fn fan_area(vertices: &[Point]) -> f64 {
    let Some((&v0, rest)) = vertices.split_first() else {
        return 0.0;
    };
    let twice: i128 = rest
        .windows(2)
        .map(|w| twice_triangle_area(v0, w[0], w[1]).abs())
        .sum();
    twice as f64 / 2.0
}

pub(crate) fn twice_signed_area(vertices: &[Point]) -> i128 {
    // Shoelace about the first vertex: the closing terms vanish.
    let Some((&v0, rest)) = vertices.split_first() else {
        return 0;
    };
    rest.windows(2)
        .map(|w| twice_triangle_area(v0, w[0], w[1]))
        .sum()
}

/// Shoelace signed area. Valid for any simple polygon.
pub fn signed_area(vertices: &[Point]) -> f64 {
    twice_signed_area(vertices) as f64 / 2.0
}

/// Shoelace over the float view (`Point::to_vec2`), via 2×2 determinants.
pub fn signed_area_f64(vertices: &[Point]) -> f64 {
    let n = vertices.len();
    if n < 3 {
        return 0.0;
    }
    let mut a = 0.0;
    for i in 0..n {
        let p = vertices[i].to_vec2();
        let q = vertices[(i + 1) % n].to_vec2();
        a += nalgebra::Matrix2::from_columns(&[p, q]).determinant();
    }
    0.5 * a
}
