//! Bounding boxes and source-to-canvas path transfer.
//!
//! The remap is an axis-aligned affine map between two bounding boxes,
//! expressed as a 3x3 matrix and applied homogeneously. Each axis is
//! handled independently; a degenerate source extent collapses that axis
//! to a fixed offset instead of dividing by zero.

use crate::types::TracedPath;
use nalgebra::{Matrix3, Vector3};
use serde::Serialize;

const EPS: f32 = 1e-9;

/// Axis-aligned extent of a point set.
///
/// Derived data: recomputed from the underlying points whenever the set
/// changes, never mutated in place.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BoundingBox {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl BoundingBox {
    /// Extent of `points`; None for an empty set.
    pub fn from_points(points: &[[f32; 2]]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bb = Self {
            min_x: first[0],
            min_y: first[1],
            max_x: first[0],
            max_y: first[1],
        };
        for p in rest {
            bb.min_x = bb.min_x.min(p[0]);
            bb.min_y = bb.min_y.min(p[1]);
            bb.max_x = bb.max_x.max(p[0]);
            bb.max_y = bb.max_y.max(p[1]);
        }
        Some(bb)
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }
}

/// Build the affine map taking `src` onto `dst`, axis by axis.
///
/// A zero source extent is substituted with 1, so that axis maps every
/// input to the destination minimum plus a fixed offset.
pub fn box_transform(src: &BoundingBox, dst: &BoundingBox) -> Matrix3<f32> {
    let sx = dst.width() / nonzero_extent(src.width());
    let sy = dst.height() / nonzero_extent(src.height());
    let tx = dst.min_x - sx * src.min_x;
    let ty = dst.min_y - sy * src.min_y;
    Matrix3::new(sx, 0.0, tx, 0.0, sy, ty, 0.0, 0.0, 1.0)
}

fn nonzero_extent(extent: f32) -> f32 {
    if extent == 0.0 {
        1.0
    } else {
        extent
    }
}

/// Apply `m` to a point list homogeneously. None if any output coordinate
/// is non-finite or the homogeneous component vanishes.
pub fn apply_transform_points(m: &Matrix3<f32>, pts: &[[f32; 2]]) -> Option<Vec<[f32; 2]>> {
    let mut out = Vec::with_capacity(pts.len());
    for &p in pts {
        let v = m * Vector3::new(p[0], p[1], 1.0);
        let w = v[2];
        if !w.is_finite() || w.abs() <= EPS || !v[0].is_finite() || !v[1].is_finite() {
            return None;
        }
        out.push([v[0] / w, v[1] / w]);
    }
    Some(out)
}

/// Remap every path from `src` into `dst`, producing fresh paths with
/// identical vertex count and ordering. Source paths are left untouched so
/// the original trace stays available for inspection.
pub fn remap_paths(paths: &[TracedPath], src: &BoundingBox, dst: &BoundingBox) -> Vec<TracedPath> {
    let m = box_transform(src, dst);
    paths
        .iter()
        .filter_map(|path| apply_transform_points(&m, &path.points).map(TracedPath::new))
        .collect()
}
