//! Canonical dot lattice on the output canvas.
//!
//! The recreated pattern is drawn over a perfectly regular `size × size`
//! lattice placed inside a padded canvas; its bounding box is the remap
//! destination.

use crate::remap::BoundingBox;
use serde::Serialize;

/// Canvas geometry for the regenerated dot lattice.
#[derive(Clone, Copy, Debug)]
pub struct LatticeOptions {
    /// Output canvas size in pixels (width, height).
    pub canvas_size: (u32, u32),
    /// Margin kept free of dots on every side, in pixels.
    pub padding: f32,
}

impl Default for LatticeOptions {
    fn default() -> Self {
        Self {
            canvas_size: (500, 500),
            padding: 50.0,
        }
    }
}

/// Regular `size × size` dot lattice, row-major.
#[derive(Clone, Debug, Default, Serialize)]
pub struct DotLattice {
    pub size: u32,
    pub points: Vec<[f32; 2]>,
}

impl DotLattice {
    /// Dot position at (row, col); both must be below `size`.
    pub fn point(&self, row: u32, col: u32) -> [f32; 2] {
        self.points[(row * self.size + col) as usize]
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Extent of the lattice; None when the lattice is empty.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(&self.points)
    }
}

/// Generate the canonical lattice for `size` rows and columns.
///
/// Dots are spaced evenly between the padded canvas edges. A size of 0
/// yields an empty lattice; a size of 1 collapses the spacing and places a
/// single dot at the padding corner.
pub fn generate_lattice(size: u32, options: &LatticeOptions) -> DotLattice {
    let (canvas_w, canvas_h) = options.canvas_size;
    let span = |extent: u32| {
        if size > 1 {
            (extent as f32 - 2.0 * options.padding) / (size - 1) as f32
        } else {
            0.0
        }
    };
    let cell_w = span(canvas_w);
    let cell_h = span(canvas_h);

    let mut points = Vec::with_capacity((size * size) as usize);
    for row in 0..size {
        for col in 0..size {
            points.push([
                options.padding + col as f32 * cell_w,
                options.padding + row as f32 * cell_h,
            ]);
        }
    }
    DotLattice { size, points }
}
