//! Parameter types configuring the analyzer stages.
//!
//! Defaults reproduce the canonical behaviour: strokes at full white, a
//! 10-vertex noise threshold, half-spacing clustering tolerance, and a
//! 500-pixel padded canvas.

use crate::grid::{EstimatorOptions, LatticeOptions};
use crate::trace::TraceOptions;

/// Analyzer-wide parameters grouping the per-stage options.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnalyzerParams {
    /// Skeleton walker thresholds.
    pub trace: TraceOptions,
    /// Dot clustering tolerances.
    pub estimator: EstimatorOptions,
    /// Geometry of the regenerated canvas lattice.
    pub lattice: LatticeOptions,
}
