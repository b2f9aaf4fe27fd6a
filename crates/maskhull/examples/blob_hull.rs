//! Print the hull of a few seeded blob masks.
//!
//! Usage:
//!   cargo run -p maskhull --example blob_hull -- [side]

use maskhull::prelude::*;

fn main() {
    let side = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(64);
    let cfg = BlobCfg {
        rows: side,
        cols: side,
        ..BlobCfg::default()
    };
    for index in 0..3 {
        let Some(mask) = draw_blob_mask(cfg, ReplayToken { seed: 2025, index }) else {
            eprintln!("usage: blob_hull [side >= 1]");
            return;
        };
        match analyze_mask(&mask, HullCfg::default()) {
            Ok(out) => println!(
                "blob {index}: points={}, vertices={}, area={:.4}",
                out.points,
                out.hull.len(),
                out.area
            ),
            Err(e) => eprintln!("blob {index}: {e}"),
        }
    }
}
