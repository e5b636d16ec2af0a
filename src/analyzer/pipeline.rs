//! Analyzer pipeline running the full trace → estimate → remap sequence.
//!
//! Typical usage:
//! ```no_run
//! use kolam_analyzer::image::ImageU8;
//! use kolam_analyzer::{AnalyzerParams, KolamAnalyzer};
//!
//! # fn example(dots: &[[f32; 2]], skeleton: ImageU8) {
//! let mut analyzer = KolamAnalyzer::new(AnalyzerParams::default());
//! let report = analyzer.process(dots, &skeleton);
//! if report.result.found {
//!     println!("grid size: {}", report.result.grid_size);
//! }
//! # }
//! ```

use super::collaborators::{DotDetector, Skeletonizer};
use super::params::AnalyzerParams;
use crate::diagnostics::{
    AnalysisDiagnostics, AnalysisReport, EstimateDiagnostics, RemapDiagnostics, TraceDiagnostics,
};
use crate::grid::{estimate_grid, generate_lattice};
use crate::image::{GrayImageU8, ImageU8};
use crate::remap::{apply_transform_points, box_transform, BoundingBox};
use crate::trace::{trace_paths, TraceWorkspace};
use crate::types::{AnalysisResult, TracedPath};
use log::debug;
use std::time::Instant;

/// Analysis pipeline turning detected dot centres and a stroke skeleton
/// into a regularized pattern on the canonical lattice.
///
/// The analyzer owns its tracing workspace, so one instance must not be
/// shared across concurrent analyses; create one analyzer per worker.
pub struct KolamAnalyzer {
    params: AnalyzerParams,
    workspace: TraceWorkspace,
}

impl KolamAnalyzer {
    /// Create an analyzer with the supplied parameters.
    pub fn new(params: AnalyzerParams) -> Self {
        Self {
            params,
            workspace: TraceWorkspace::new(),
        }
    }

    /// Current stage parameters.
    pub fn params(&self) -> &AnalyzerParams {
        &self.params
    }

    /// Run the full pipeline over pre-detected dot centres and a skeleton.
    pub fn process(&mut self, dots: &[[f32; 2]], skeleton: &ImageU8<'_>) -> AnalysisReport {
        let total_start = Instant::now();

        let traced = trace_paths(skeleton, &self.params.trace, &mut self.workspace);
        let trace_diag = TraceDiagnostics {
            on_pixels: traced.on_pixels,
            paths_kept: traced.paths.len(),
            paths_discarded: traced.discarded,
            longest_path: traced.paths.iter().map(TracedPath::len).max().unwrap_or(0),
            elapsed_ms: traced.elapsed_ms,
        };

        let estimate_start = Instant::now();
        let estimate = estimate_grid(dots, &self.params.estimator);
        let estimate_diag = EstimateDiagnostics {
            estimate,
            elapsed_ms: estimate_start.elapsed().as_secs_f64() * 1000.0,
        };

        let lattice = (estimate.grid_size > 0)
            .then(|| generate_lattice(estimate.grid_size, &self.params.lattice));

        let (recreated, remap_diag) = self.remap_stage(dots, &traced.paths, lattice.as_ref());

        let total_latency_ms = total_start.elapsed().as_secs_f64() * 1000.0;
        let result = AnalysisResult {
            found: !recreated.is_empty(),
            grid_size: estimate.grid_size,
            dot_count: dots.len(),
            path_count: traced.paths.len(),
            latency_ms: total_latency_ms,
        };
        AnalysisReport {
            result,
            traced_paths: traced.paths,
            recreated_paths: recreated,
            lattice,
            diagnostics: AnalysisDiagnostics {
                trace: trace_diag,
                estimate: estimate_diag,
                remap: remap_diag,
                total_latency_ms,
            },
        }
    }

    /// Convenience wiring the external primitives in front of [`process`].
    ///
    /// [`process`]: Self::process
    pub fn process_image<D: DotDetector, S: Skeletonizer>(
        &mut self,
        image: &GrayImageU8,
        detector: &D,
        skeletonizer: &S,
    ) -> AnalysisReport {
        let dots = detector.detect(image);
        let skeleton = skeletonizer.skeletonize(image);
        self.process(&dots, &skeleton.as_view())
    }

    /// Update the skeleton walker thresholds.
    pub fn set_trace_options(&mut self, options: crate::trace::TraceOptions) {
        self.params.trace = options;
    }

    /// Update the dot clustering tolerances.
    pub fn set_estimator_options(&mut self, options: crate::grid::EstimatorOptions) {
        self.params.estimator = options;
    }

    /// Transfer traced paths onto the lattice canvas. Returns no paths when
    /// the run has nothing to recreate (no dots, no lattice, or no traced
    /// strokes).
    fn remap_stage(
        &self,
        dots: &[[f32; 2]],
        traced: &[TracedPath],
        lattice: Option<&crate::grid::DotLattice>,
    ) -> (Vec<TracedPath>, Option<RemapDiagnostics>) {
        let remap_start = Instant::now();
        let (Some(lattice), Some(source_box)) = (lattice, BoundingBox::from_points(dots)) else {
            debug!("analyzer: no dots detected, returning empty pattern");
            return (Vec::new(), None);
        };
        let Some(dest_box) = lattice.bounding_box() else {
            return (Vec::new(), None);
        };
        if traced.is_empty() {
            debug!("analyzer: no traced paths, returning empty pattern");
            return (Vec::new(), None);
        }

        let transform = box_transform(&source_box, &dest_box);
        let recreated: Vec<TracedPath> = traced
            .iter()
            .filter_map(|path| apply_transform_points(&transform, &path.points).map(TracedPath::new))
            .collect();
        let vertices = recreated.iter().map(TracedPath::len).sum();
        let diag = RemapDiagnostics {
            source_box,
            dest_box,
            transform,
            paths: recreated.len(),
            vertices,
            elapsed_ms: remap_start.elapsed().as_secs_f64() * 1000.0,
        };
        (recreated, Some(diag))
    }
}
