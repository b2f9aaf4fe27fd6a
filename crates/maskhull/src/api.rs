//! Mask → points → hull → area, as one call.
//!
//! The three stages are pure; this module only chains them and logs sizes.

use serde::Serialize;
use tracing::debug;

use crate::error::Error;
use crate::geom2::{convex_hull_with, polygon_area, HullCfg, PointSet, Polygon};
use crate::mask::Mask;

/// Hull and area of one mask or point set.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MaskHull {
    /// Number of foreground points fed to the hull.
    pub points: usize,
    pub hull: Polygon,
    /// Exact area with vertices at pixel centres; `0.0` for degenerate hulls.
    pub area: f64,
}

/// Extract foreground points from `mask`, wrap them, and measure the hull.
pub fn analyze_mask(mask: &Mask, cfg: HullCfg) -> Result<MaskHull, Error> {
    let points = mask.foreground_points();
    debug!(
        rows = mask.rows(),
        cols = mask.cols(),
        foreground = points.len(),
        "mask points"
    );
    analyze_points(&points, cfg)
}

/// Wrap `points` and measure the hull.
pub fn analyze_points(points: &PointSet, cfg: HullCfg) -> Result<MaskHull, Error> {
    let hull = convex_hull_with(points, cfg)?;
    let area = polygon_area(&hull);
    debug!(vertices = hull.len(), area, "hull area");
    Ok(MaskHull {
        points: points.len(),
        hull,
        area,
    })
}
