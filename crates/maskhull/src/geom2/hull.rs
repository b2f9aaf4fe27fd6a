//! Gift-wrapping (Jarvis march) convex hull over integer points.
//!
//! Rules
//! - Anchor: minimum `col`, ties broken by minimum `row`.
//! - Step: candidate `y` is replaced by `z` when `cross(x, y, z) < 0`, or when
//!   the triple is collinear and `z` is farther from `x`. The wrap therefore
//!   only ever lands on strict corners, and vertices come out counter-clockwise
//!   in `(x=col, y=row)` axes.
//! - Collinear edge points are added afterwards for `Collinear::Keep`.
//! - The wrap is bounded by the point count (or `HullCfg::max_steps`).
//!
//! Cost `O(n·h)`.

use tracing::{debug, warn};

use super::types::{cross, Collinear, HullCfg, Point, PointSet, Polygon};
use crate::error::HullError;

/// Convex hull with the default configuration (collinear edge points dropped).
pub fn convex_hull(points: &PointSet) -> Result<Polygon, HullError> {
    convex_hull_with(points, HullCfg::default())
}

/// Convex hull of `points`.
///
/// Degenerate sets are not errors: 0, 1 or 2 points come back as-is (anchor
/// first), and a collinear set comes back as its two extreme points.
pub fn convex_hull_with(points: &PointSet, cfg: HullCfg) -> Result<Polygon, HullError> {
    let pts = points.as_slice();
    let corners = wrap(pts, cfg.max_steps)?;
    let vertices = match cfg.collinear {
        Collinear::Keep if corners.len() >= 3 => with_edge_points(&corners, pts),
        _ => corners,
    };
    debug!(points = pts.len(), vertices = vertices.len(), "convex_hull");
    Ok(Polygon { vertices })
}

fn anchor_index(pts: &[Point]) -> Option<usize> {
    pts.iter()
        .enumerate()
        .min_by_key(|(_, p)| (p.col, p.row))
        .map(|(i, _)| i)
}

/// Strict hull corners, starting at the anchor.
fn wrap(pts: &[Point], max_steps: Option<usize>) -> Result<Vec<Point>, HullError> {
    let Some(start) = anchor_index(pts) else {
        return Ok(Vec::new());
    };
    let cap = max_steps.map_or(pts.len(), |m| m.min(pts.len()));
    let mut corners = Vec::new();
    let mut cur = start;
    loop {
        if corners.len() >= cap {
            warn!(steps = corners.len(), anchor = ?pts[start], "gift wrap did not close");
            return Err(HullError::WrapDidNotClose {
                steps: corners.len(),
                anchor: pts[start],
            });
        }
        corners.push(pts[cur]);
        match next_corner(pts, cur) {
            Some(next) if next != start => cur = next,
            _ => break,
        }
    }
    Ok(corners)
}

/// Most clockwise point as seen from `pts[cur]`; farthest wins on collinear ties.
///
/// `None` only when `pts[cur]` is the sole point.
fn next_corner(pts: &[Point], cur: usize) -> Option<usize> {
    let mut best = (cur + 1) % pts.len();
    if best == cur {
        return None;
    }
    let x = pts[cur];
    for (i, &z) in pts.iter().enumerate() {
        if i == cur || i == best {
            continue;
        }
        let y = pts[best];
        let c = cross(x, y, z);
        if c < 0 || (c == 0 && x.dist2(z) > x.dist2(y)) {
            best = i;
        }
    }
    Some(best)
}

/// Insert the points lying strictly inside each hull edge, nearest first.
fn with_edge_points(corners: &[Point], pts: &[Point]) -> Vec<Point> {
    let h = corners.len();
    let mut out = Vec::with_capacity(h);
    for i in 0..h {
        let a = corners[i];
        let b = corners[(i + 1) % h];
        out.push(a);
        let mut inner: Vec<Point> = pts
            .iter()
            .copied()
            .filter(|&p| strictly_between(a, b, p))
            .collect();
        inner.sort_by_key(|&p| a.dist2(p));
        out.extend(inner);
    }
    out
}

#[inline]
fn strictly_between(a: Point, b: Point, p: Point) -> bool {
    if cross(a, b, p) != 0 {
        return false;
    }
    let ab = (b.row as i128 - a.row as i128, b.col as i128 - a.col as i128);
    let ap = (p.row as i128 - a.row as i128, p.col as i128 - a.col as i128);
    let dot = ab.0 * ap.0 + ab.1 * ap.1;
    dot > 0 && dot < a.dist2(b)
}
