//! # Builder Properties
//!
//! Invariants that must hold for any sequence of builder operations.

use glam::DVec3;
use openscad_polyset::{Color4f, PolySet, PolySetBuilder};
use proptest::prelude::*;
use std::collections::HashSet;

/// Points on a small integer grid so that random polygons share vertices.
fn grid_point(i: u8) -> DVec3 {
    DVec3::new(f64::from(i % 4), f64::from((i / 4) % 4), f64::from(i / 16))
}

fn palette(i: u8) -> Color4f {
    [
        Color4f::rgb(1.0, 0.0, 0.0),
        Color4f::rgb(0.0, 1.0, 0.0),
        Color4f::rgb(0.0, 0.0, 1.0),
    ][usize::from(i % 3)]
}

#[derive(Debug, Clone)]
enum Op {
    Polygon(Vec<u8>, Option<u8>),
    Merge(Vec<(Vec<u8>, Option<u8>)>),
}

fn polygon_strategy() -> impl Strategy<Value = (Vec<u8>, Option<u8>)> {
    (prop::collection::vec(0u8..32, 0..7), prop::option::of(0u8..3))
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => polygon_strategy().prop_map(|(pts, color)| Op::Polygon(pts, color)),
        1 => prop::collection::vec(polygon_strategy(), 0..5).prop_map(Op::Merge),
    ]
}

fn append(builder: &mut PolySetBuilder, pts: &[u8], color: Option<u8>) {
    let points: Vec<DVec3> = pts.iter().map(|&i| grid_point(i)).collect();
    match color {
        Some(c) => builder.append_polygon_points_with_color(&points, palette(c)),
        None => builder.append_polygon_points(&points),
    }
}

fn fragment(polygons: &[(Vec<u8>, Option<u8>)]) -> PolySet {
    let mut builder = PolySetBuilder::default();
    for (pts, color) in polygons {
        append(&mut builder, pts, *color);
    }
    builder.build()
}

fn distinct_triangle() -> impl Strategy<Value = [u8; 3]> {
    (0u8..16, 0u8..16, 0u8..16)
        .prop_filter("distinct corners", |(a, b, c)| a != b && b != c && a != c)
        .prop_map(|(a, b, c)| [a, b, c])
}

proptest! {
    #[test]
    fn vertex_index_is_stable(
        a in prop::array::uniform3(-1.0e6f64..1.0e6),
        b in prop::array::uniform3(-1.0e6f64..1.0e6),
    ) {
        let mut builder = PolySetBuilder::default();
        let pa = DVec3::from_array(a);
        let pb = DVec3::from_array(b);
        let first = builder.vertex_index(pa);
        prop_assert_eq!(builder.vertex_index(pa), first);
        let other = builder.vertex_index(pb);
        prop_assert_eq!(other == first, pa == pb);
    }

    #[test]
    fn color_table_tracks_faces(ops in prop::collection::vec(op_strategy(), 0..24)) {
        let mut builder = PolySetBuilder::default();
        for op in &ops {
            match op {
                Op::Polygon(pts, color) => append(&mut builder, pts, *color),
                Op::Merge(polygons) => builder.append_polyset(&fragment(polygons)),
            }
            let table = builder.color_indices().len();
            prop_assert!(table == 0 || table == builder.num_polygons());
        }
        let ps = builder.build();
        prop_assert!(ps.color_indices().is_empty() || ps.color_indices().len() == ps.num_polygons());
        for &idx in ps.color_indices() {
            prop_assert!(idx == -1 || (idx >= 0 && (idx as usize) < ps.colors().len()));
        }
    }

    #[test]
    fn committed_faces_are_proper(polygons in prop::collection::vec(polygon_strategy(), 0..16)) {
        let ps = fragment(&polygons);
        for face in ps.indices() {
            prop_assert!(face.len() >= 3);
            for i in 0..face.len() {
                prop_assert_ne!(face[i], face[(i + 1) % face.len()]);
            }
        }
    }

    #[test]
    fn merge_welds_to_coordinate_union(
        a in prop::collection::vec(distinct_triangle(), 1..8),
        b in prop::collection::vec(distinct_triangle(), 1..8),
    ) {
        let build = |tris: &[[u8; 3]]| {
            let mut builder = PolySetBuilder::default();
            for tri in tris {
                builder.append_polygon_points(&tri.map(grid_point));
            }
            builder.build()
        };
        let (pa, pb) = (build(&a), build(&b));

        let key = |v: &DVec3| v.to_array().map(f64::to_bits);
        let union: HashSet<_> = pa.vertices().iter().chain(pb.vertices()).map(key).collect();

        let mut merged = PolySetBuilder::default();
        merged.append_polyset(&pa);
        merged.append_polyset(&pb);
        let ps = merged.build();
        prop_assert_eq!(ps.num_vertices(), union.len());
        prop_assert_eq!(ps.num_polygons(), a.len() + b.len());
    }

    #[test]
    fn triangular_iff_all_faces_are_triangles(polygons in prop::collection::vec(polygon_strategy(), 0..16)) {
        let ps = fragment(&polygons);
        prop_assert_eq!(ps.is_triangular(), ps.indices().iter().all(|face| face.len() == 3));
    }
}
