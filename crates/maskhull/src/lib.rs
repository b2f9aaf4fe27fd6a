//! Convex hull and area of foreground masks.
//!
//! Pipeline: `Mask` → `PointSet` → `Polygon` (gift wrapping) → area (triangle
//! fan). Every stage is a pure function of its input.
//!
//! Conventions
//! - `row` is the vertical axis, `col` the horizontal one; vector math uses
//!   `(x, y) = (col, row)`.
//! - Vertices sit at pixel centres, so a filled 10×10 block has hull area 81.

pub mod api;
pub mod error;
pub mod geom2;
pub mod mask;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{Error, HullError, MaskError};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::api::{analyze_mask, analyze_points, MaskHull};
    pub use crate::geom2::rand::{draw_blob_mask, draw_point_set, BlobCfg, ReplayToken};
    pub use crate::geom2::{
        convex_hull, convex_hull_with, polygon_area, signed_area, Collinear, HullCfg, Point,
        PointSet, Polygon, Winding,
    };
    pub use crate::mask::{Mask, DEFAULT_THRESHOLD};
}
