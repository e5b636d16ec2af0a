//! Analysis pipeline orchestrating skeleton tracing, grid inference, and
//! path transfer.
//!
//! Overview
//! - Traces ordered stroke paths from a binary skeleton with the greedy
//!   8-connected walker.
//! - Clusters the detected dot centres per axis to infer the square grid
//!   dimension.
//! - Generates the canonical dot lattice for that dimension and remaps the
//!   traced paths from the detected dot bounding box onto it.
//! - Short-circuits to an empty-pattern report when no dots were detected
//!   or no path survived tracing; that is the only failure path.
//!
//! Modules
//! - [`params`] – per-stage option grouping used by the analyzer and CLI.
//! - `pipeline` – the main [`KolamAnalyzer`] implementation.
//! - [`collaborators`] – contracts for the external dot detector and
//!   skeletonizer primitives.

mod collaborators;
mod params;
mod pipeline;

pub use collaborators::{DotDetector, Skeletonizer};
pub use params::AnalyzerParams;
pub use pipeline::KolamAnalyzer;
