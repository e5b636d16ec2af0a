mod common;

use common::synthetic_pattern::grid_dots;
use kolam_analyzer::grid::{generate_lattice, LatticeOptions};
use kolam_analyzer::{apply_transform_points, box_transform, remap_paths, BoundingBox, TracedPath};

#[test]
fn detected_corner_dots_map_onto_lattice_corners() {
    let dots = grid_dots(5, 37.0, 41.0);
    let source_box = BoundingBox::from_points(&dots).expect("nonempty");

    let lattice = generate_lattice(5, &LatticeOptions::default());
    let dest_box = lattice.bounding_box().expect("nonempty");

    let m = box_transform(&source_box, &dest_box);
    let mapped = apply_transform_points(&m, &dots).expect("finite");

    let first = mapped[0];
    let last = mapped[24];
    let expect_first = lattice.point(0, 0);
    let expect_last = lattice.point(4, 4);
    assert!(
        (first[0] - expect_first[0]).abs() < 1e-3 && (first[1] - expect_first[1]).abs() < 1e-3,
        "first dot {:?} should land on {:?}",
        first,
        expect_first
    );
    assert!(
        (last[0] - expect_last[0]).abs() < 1e-3 && (last[1] - expect_last[1]).abs() < 1e-3,
        "last dot {:?} should land on {:?}",
        last,
        expect_last
    );
}

#[test]
fn remap_into_own_box_is_identity() {
    let lattice = generate_lattice(5, &LatticeOptions::default());
    let dest_box = lattice.bounding_box().expect("nonempty");

    let path = TracedPath::new(lattice.points.clone());
    let out = remap_paths(&[path.clone()], &dest_box, &dest_box);
    assert_eq!(out.len(), 1);
    for (a, b) in out[0].points.iter().zip(&path.points) {
        assert!(
            (a[0] - b[0]).abs() < 1e-4 && (a[1] - b[1]).abs() < 1e-4,
            "{:?} drifted to {:?}",
            b,
            a
        );
    }
}
