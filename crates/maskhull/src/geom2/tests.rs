use super::rand::{draw_blob_mask, BlobCfg, ReplayToken};
use super::*;
use crate::error::HullError;
use crate::mask::Mask;
use proptest::prelude::*;

fn set(v: &[(i64, i64)]) -> PointSet {
    PointSet::from_points(v.iter().copied())
}

fn pts(v: &[(i64, i64)]) -> Vec<Point> {
    v.iter().copied().map(Point::from).collect()
}

#[test]
fn filled_square_hull_is_four_corners() {
    let m = Mask::from_fn(10, 10, |_, _| true).unwrap();
    let hull = convex_hull(&m.foreground_points()).unwrap();
    assert_eq!(hull.vertices(), pts(&[(0, 0), (0, 9), (9, 9), (9, 0)]));
    assert_eq!(hull.winding(), Winding::CounterClockwise);
    // Vertices are pixel centres.
    assert_eq!(polygon_area(&hull), 81.0);
    assert_eq!(m.count_foreground(), 100);
}

#[test]
fn right_triangle_hull_and_area() {
    let hull = convex_hull(&set(&[(0, 0), (0, 4), (3, 0)])).unwrap();
    assert_eq!(hull.vertices(), pts(&[(0, 0), (0, 4), (3, 0)]));
    assert_eq!(polygon_area(&hull), 6.0);
}

#[test]
fn single_point_hull() {
    let hull = convex_hull(&set(&[(5, 5)])).unwrap();
    assert_eq!(hull.vertices(), pts(&[(5, 5)]));
    assert!(hull.is_degenerate());
    assert_eq!(polygon_area(&hull), 0.0);
    assert_eq!(hull.winding(), Winding::Degenerate);
}

#[test]
fn empty_and_two_point_hulls() {
    let empty = convex_hull(&PointSet::default()).unwrap();
    assert!(empty.is_empty());
    assert_eq!(polygon_area(&empty), 0.0);
    assert!(empty.closed_ring().is_empty());

    let two = convex_hull(&set(&[(4, 7), (1, 2)])).unwrap();
    assert_eq!(two.vertices(), pts(&[(1, 2), (4, 7)]));
    assert_eq!(polygon_area(&two), 0.0);
}

#[test]
fn collinear_row_reduces_to_endpoints() {
    let row: Vec<(i64, i64)> = (0..=10).map(|c| (2, c)).collect();
    for cfg in [HullCfg::default(), HullCfg::keep_collinear()] {
        let hull = convex_hull_with(&set(&row), cfg).unwrap();
        assert_eq!(hull.vertices(), pts(&[(2, 0), (2, 10)]));
        assert_eq!(polygon_area(&hull), 0.0);
    }
}

#[test]
fn collinear_diagonal_and_column() {
    let diag: Vec<(i64, i64)> = (0..8).map(|k| (7 - k, k)).collect();
    let hull = convex_hull(&set(&diag)).unwrap();
    assert_eq!(hull.vertices(), pts(&[(7, 0), (0, 7)]));

    let column: Vec<(i64, i64)> = (3..9).map(|r| (r, 4)).collect();
    let hull = convex_hull(&set(&column)).unwrap();
    assert_eq!(hull.vertices(), pts(&[(3, 4), (8, 4)]));
}

#[test]
fn anchor_breaks_column_ties_by_row() {
    let hull = convex_hull(&set(&[(6, 0), (2, 0), (4, 3)])).unwrap();
    assert_eq!(hull.vertices()[0], Point::new(2, 0));
}

#[test]
fn keep_collinear_walks_every_boundary_point() {
    let m = Mask::from_fn(10, 10, |_, _| true).unwrap();
    let hull = convex_hull_with(&m.foreground_points(), HullCfg::keep_collinear()).unwrap();
    assert_eq!(hull.len(), 36);
    assert_eq!(&hull.vertices()[..3], pts(&[(0, 0), (0, 1), (0, 2)]).as_slice());
    assert_eq!(hull.vertices()[9], Point::new(0, 9));
    assert_eq!(polygon_area(&hull), 81.0);
}

#[test]
fn interior_points_are_ignored() {
    let hull = convex_hull(&set(&[(0, 0), (0, 6), (6, 6), (6, 0), (3, 3), (1, 4), (5, 2)])).unwrap();
    assert_eq!(hull.vertices(), pts(&[(0, 0), (0, 6), (6, 6), (6, 0)]));
    assert_eq!(polygon_area(&hull), 36.0);
}

#[test]
fn negative_coordinates() {
    let hull = convex_hull(&set(&[(-3, -3), (-3, 3), (3, 3), (3, -3), (0, 0)])).unwrap();
    assert_eq!(hull.vertices(), pts(&[(-3, -3), (-3, 3), (3, 3), (3, -3)]));
    assert_eq!(polygon_area(&hull), 36.0);
}

#[test]
fn coordinates_past_i32_stay_exact() {
    let big = 1i64 << 40;
    let hull = convex_hull(&set(&[(0, 0), (0, big), (big, 0), (1, 1)])).unwrap();
    assert_eq!(hull.vertices(), pts(&[(0, 0), (0, big), (big, 0)]));
    assert_eq!(hull.winding(), Winding::CounterClockwise);
    assert_eq!(polygon_area(&hull), 2f64.powi(79));
    assert_eq!(signed_area(hull.vertices()), 2f64.powi(79));
    assert!(hull.contains(Point::new(1, 1)));
    assert!(!hull.contains(Point::new(big, 1)));
}

#[test]
fn square_at_coord_limit() {
    let l = COORD_LIMIT;
    let ps = set(&[(-l, -l), (-l, l), (l, l), (l, -l), (0, 0), (0, l)]);
    let hull = convex_hull(&ps).unwrap();
    assert_eq!(hull.vertices(), pts(&[(-l, -l), (-l, l), (l, l), (l, -l)]));
    assert_eq!(polygon_area(&hull), 2f64.powi(124));
    assert!(hull.contains(Point::new(0, 0)));
    let kept = convex_hull_with(&ps, HullCfg::keep_collinear()).unwrap();
    assert_eq!(kept.len(), 5);
    assert_eq!(kept.vertices()[2], Point::new(0, l));
}

#[test]
fn contains_rejects_outside_points() {
    let m = Mask::from_fn(10, 10, |_, _| true).unwrap();
    let hull = convex_hull(&m.foreground_points()).unwrap();
    assert!(hull.contains(Point::new(5, 5)));
    assert!(hull.contains(Point::new(0, 5)));
    assert!(hull.contains(Point::new(9, 9)));
    assert!(!hull.contains(Point::new(5, 20)));
    assert!(!hull.contains(Point::new(-1, 5)));
    // On the line through edge (0,0)-(0,9), past the corner.
    assert!(!hull.contains(Point::new(0, 12)));
    assert!(!hull.contains(Point::new(-3, 0)));
    let mut reversed = hull.vertices().to_vec();
    reversed.reverse();
    let cw = Polygon::from_vertices(reversed);
    assert!(cw.contains(Point::new(5, 5)));
    assert!(!cw.contains(Point::new(0, 12)));
}

#[test]
fn degenerate_polygons_contain_only_their_segment() {
    let seg = convex_hull(&set(&[(2, 0), (2, 10)])).unwrap();
    assert_eq!(seg.len(), 2);
    assert!(seg.contains(Point::new(2, 5)));
    assert!(seg.contains(Point::new(2, 10)));
    assert!(!seg.contains(Point::new(2, 12)));
    assert!(!seg.contains(Point::new(2, -1)));
    assert!(!seg.contains(Point::new(3, 5)));

    let flat = Polygon::from_vertices(pts(&[(0, 0), (0, 5), (0, 10)]));
    assert!(flat.contains(Point::new(0, 7)));
    assert!(!flat.contains(Point::new(0, 12)));

    let single = convex_hull(&set(&[(5, 5)])).unwrap();
    assert!(single.contains(Point::new(5, 5)));
    assert!(!single.contains(Point::new(5, 6)));

    assert!(!Polygon::default().contains(Point::new(0, 0)));
}

#[test]
fn polygon_serializes_but_point_round_trips() {
    let hull = convex_hull(&set(&[(0, 0), (0, 4), (3, 0)])).unwrap();
    let json = serde_json::to_value(&hull).unwrap();
    assert_eq!(json["vertices"][1], serde_json::json!({ "row": 0, "col": 4 }));
    // Points come back from JSON; hulls are only rebuilt via `convex_hull`.
    let back: Vec<Point> = serde_json::from_value(json["vertices"].clone()).unwrap();
    assert_eq!(convex_hull(&PointSet::from_points(back)).unwrap(), hull);
}

#[test]
fn wrap_cap_reports_instead_of_looping() {
    let m = Mask::from_fn(10, 10, |_, _| true).unwrap();
    let cfg = HullCfg {
        max_steps: Some(2),
        ..HullCfg::default()
    };
    let err = convex_hull_with(&m.foreground_points(), cfg).unwrap_err();
    assert_eq!(
        err,
        HullError::WrapDidNotClose {
            steps: 2,
            anchor: Point::new(0, 0)
        }
    );
}

#[test]
fn closed_ring_repeats_first_vertex() {
    let hull = convex_hull(&set(&[(0, 0), (0, 4), (3, 0)])).unwrap();
    let ring = hull.closed_ring();
    assert_eq!(ring.len(), 4);
    assert_eq!(ring.first(), ring.last());
}

#[test]
fn blob_mask_hull_covers_every_pixel() {
    for index in 0..8 {
        let m = draw_blob_mask(BlobCfg::default(), ReplayToken { seed: 11, index }).unwrap();
        let ps = m.foreground_points();
        let hull = convex_hull(&ps).unwrap();
        assert!(ps.iter().all(|&p| hull.contains(p)));
        assert!(hull.vertices().iter().all(|v| ps.contains(v)));
        let area = polygon_area(&hull);
        assert!((area - signed_area(hull.vertices()).abs()).abs() < 1e-9);
    }
}

fn point_sets() -> impl Strategy<Value = PointSet> {
    prop::collection::vec((-20i64..20, -20i64..20), 0..60).prop_map(PointSet::from_points)
}

fn collinear_cfgs() -> impl Strategy<Value = HullCfg> {
    prop_oneof![Just(HullCfg::default()), Just(HullCfg::keep_collinear())]
}

proptest! {
    #[test]
    fn prop_vertices_come_from_input(ps in point_sets(), cfg in collinear_cfgs()) {
        let hull = convex_hull_with(&ps, cfg).unwrap();
        prop_assert!(hull.len() <= ps.len());
        for v in hull.vertices() {
            prop_assert!(ps.contains(v));
        }
    }

    #[test]
    fn prop_every_point_is_enclosed(ps in point_sets()) {
        let hull = convex_hull(&ps).unwrap();
        for &p in ps.iter() {
            prop_assert!(hull.contains(p), "{:?} outside {:?}", p, hull.vertices());
        }
    }

    #[test]
    fn prop_hull_is_idempotent(ps in point_sets(), cfg in collinear_cfgs()) {
        let hull = convex_hull_with(&ps, cfg).unwrap();
        let again = convex_hull_with(&PointSet::from_points(hull.vertices().iter().copied()), cfg).unwrap();
        prop_assert_eq!(again, hull);
    }

    #[test]
    fn prop_turns_are_strict_and_consistent(ps in point_sets()) {
        let hull = convex_hull(&ps).unwrap();
        let v = hull.vertices();
        let h = v.len();
        if h >= 3 {
            prop_assert_eq!(hull.winding(), Winding::CounterClockwise);
            for i in 0..h {
                prop_assert!(cross(v[i], v[(i + 1) % h], v[(i + 2) % h]) > 0);
            }
        }
    }

    #[test]
    fn prop_area_zero_iff_degenerate(ps in point_sets()) {
        let hull = convex_hull(&ps).unwrap();
        let area = polygon_area(&hull);
        prop_assert!(area >= 0.0);
        prop_assert_eq!(area == 0.0, hull.len() < 3);
    }

    #[test]
    fn prop_fan_matches_shoelace(ps in point_sets(), cfg in collinear_cfgs()) {
        let hull = convex_hull_with(&ps, cfg).unwrap();
        let fan = polygon_area(&hull);
        prop_assert!((fan - signed_area(hull.vertices()).abs()).abs() < 1e-9);
        prop_assert!((fan - signed_area_f64(hull.vertices()).abs()).abs() < 1e-6);
    }

    #[test]
    fn prop_keep_extends_drop(ps in point_sets()) {
        let drop = convex_hull(&ps).unwrap();
        let keep = convex_hull_with(&ps, HullCfg::keep_collinear()).unwrap();
        // Corners appear in the same order in both.
        let corners: Vec<Point> = keep
            .vertices()
            .iter()
            .copied()
            .filter(|v| drop.vertices().contains(v))
            .collect();
        prop_assert_eq!(corners.as_slice(), drop.vertices());
        prop_assert_eq!(polygon_area(&keep), polygon_area(&drop));
    }
}
