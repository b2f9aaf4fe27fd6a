//! Seeded random masks and point sets for tests, benches and examples.
//!
//! Model
//! - Blob masks: union of a few discs with random centres and radii, clipped
//!   to the grid. Shapes are irregular but compact, like a segmentation blob.
//! - Point sets: uniform integer points in a box.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//!
//! Code cross-refs: `Mask::from_fn`, `PointSet::from_points`

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{Point, PointSet};
use crate::mask::Mask;

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Blob-mask sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct BlobCfg {
    pub rows: usize,
    pub cols: usize,
    /// Number of discs in the union. Clamped to at least 1.
    pub discs: usize,
    /// Disc radius range as a fraction of `min(rows, cols)`.
    pub radius_frac: (f64, f64),
}
impl Default for BlobCfg {
    fn default() -> Self {
        Self {
            rows: 64,
            cols: 64,
            discs: 4,
            radius_frac: (0.08, 0.25),
        }
    }
}

/// Draw a blob mask. `None` if the grid has a zero dimension.
pub fn draw_blob_mask(cfg: BlobCfg, tok: ReplayToken) -> Option<Mask> {
    let mut rng = tok.to_std_rng();
    let side = cfg.rows.min(cfg.cols) as f64;
    let (lo, hi) = cfg.radius_frac;
    let lo = lo.max(0.0);
    let hi = hi.max(lo);
    let discs: Vec<(f64, f64, f64)> = (0..cfg.discs.max(1))
        .map(|_| {
            let r = side * (lo + rng.gen::<f64>() * (hi - lo));
            let cr = rng.gen::<f64>() * cfg.rows as f64;
            let cc = rng.gen::<f64>() * cfg.cols as f64;
            (cr, cc, r)
        })
        .collect();
    Mask::from_fn(cfg.rows, cfg.cols, |row, col| {
        discs.iter().any(|&(cr, cc, r)| {
            let dr = row as f64 - cr;
            let dc = col as f64 - cc;
            dr * dr + dc * dc <= r * r
        })
    })
    .ok()
}

/// `count` uniform points in `[0, extent) × [0, extent)`, deduplicated.
pub fn draw_point_set(count: usize, extent: i64, tok: ReplayToken) -> PointSet {
    let mut rng = tok.to_std_rng();
    let extent = extent.max(1);
    PointSet::from_points(
        (0..count).map(|_| Point::new(rng.gen_range(0..extent), rng.gen_range(0..extent))),
    )
}
