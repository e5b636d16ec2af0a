//! Structured reporting for the analysis pipeline.
//!
//! Every stage contributes a small serializable record so a full run can be
//! dumped as JSON and inspected offline. The [`AnalysisReport`] is the
//! top-level value returned by the analyzer.

use crate::grid::{DotLattice, GridEstimate};
use crate::remap::BoundingBox;
use crate::types::{AnalysisResult, TracedPath};
use nalgebra::Matrix3;
use serde::Serialize;

/// Skeleton tracing stage.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct TraceDiagnostics {
    pub on_pixels: usize,
    pub paths_kept: usize,
    pub paths_discarded: usize,
    /// Vertex count of the longest kept path; 0 when none survived.
    pub longest_path: usize,
    pub elapsed_ms: f64,
}

/// Grid dimension estimation stage.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct EstimateDiagnostics {
    pub estimate: GridEstimate,
    pub elapsed_ms: f64,
}

/// Path remapping stage; absent when the run short-circuited.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct RemapDiagnostics {
    pub source_box: BoundingBox,
    pub dest_box: BoundingBox,
    pub transform: Matrix3<f32>,
    pub paths: usize,
    pub vertices: usize,
    pub elapsed_ms: f64,
}

/// Per-stage breakdown of one analysis run.
#[derive(Clone, Debug, Default, Serialize)]
pub struct AnalysisDiagnostics {
    pub trace: TraceDiagnostics,
    pub estimate: EstimateDiagnostics,
    pub remap: Option<RemapDiagnostics>,
    pub total_latency_ms: f64,
}

/// Full output of one analysis run: the summary, both path sets, the
/// regenerated lattice, and the per-stage diagnostics.
#[derive(Clone, Debug, Default, Serialize)]
pub struct AnalysisReport {
    pub result: AnalysisResult,
    /// Paths in source pixel space, as traced.
    pub traced_paths: Vec<TracedPath>,
    /// Paths transferred onto the canonical lattice canvas.
    pub recreated_paths: Vec<TracedPath>,
    /// The regenerated dot lattice; None when no dots were detected.
    pub lattice: Option<DotLattice>,
    pub diagnostics: AnalysisDiagnostics,
}
