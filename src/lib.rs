#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod analyzer;
pub mod config;
pub mod diagnostics;
pub mod image;
pub mod types;

// Algorithmic modules – public for tools and tests, internals may move.
pub mod grid;
pub mod remap;
pub mod render;
pub mod trace;

// --- High-level re-exports -------------------------------------------------

// Main entry points: analyzer + results.
pub use crate::analyzer::{AnalyzerParams, DotDetector, KolamAnalyzer, Skeletonizer};
pub use crate::diagnostics::AnalysisReport;
pub use crate::types::{AnalysisResult, TracedPath};

// Remap helpers that are generally useful on their own.
pub use crate::remap::{apply_transform_points, box_transform, remap_paths, BoundingBox};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use kolam_analyzer::prelude::*;
///
/// # fn main() {
/// let (w, h) = (120usize, 120usize);
/// let buffer = vec![0u8; w * h];
/// let skeleton = ImageU8 { w, h, stride: w, data: &buffer };
///
/// let mut analyzer = KolamAnalyzer::new(AnalyzerParams::default());
/// let report = analyzer.process(&[], &skeleton);
/// println!(
///     "found={} grid_size={} latency_ms={:.3}",
///     report.result.found,
///     report.result.grid_size,
///     report.result.latency_ms
/// );
/// # }
/// ```
pub mod prelude {
    pub use crate::image::ImageU8;
    pub use crate::{AnalysisReport, AnalyzerParams, KolamAnalyzer};
}
