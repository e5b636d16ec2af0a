//! Dot-grid structure inference and canonical lattice generation.
//!
//! - `cluster1d`: sorted 1D chained-tolerance clustering helpers.
//! - [`estimate`]: per-axis clustering of dot centres into a square grid
//!   dimension.
//! - [`lattice`]: regular dot lattice on the canonical output canvas.

mod cluster1d;
pub mod estimate;
pub mod lattice;

pub use estimate::{estimate_grid, estimate_grid_size, EstimatorOptions, GridEstimate};
pub use lattice::{generate_lattice, DotLattice, LatticeOptions};
