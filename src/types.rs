use serde::Serialize;

/// Ordered vertices of one continuous traced stroke.
///
/// Paths produced by the tracer have 8-adjacent consecutive vertices in
/// source pixel space; remapped paths carry the same ordering with
/// transformed coordinates. Paths are never mutated after creation.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TracedPath {
    pub points: Vec<[f32; 2]>,
}

impl TracedPath {
    pub fn new(points: Vec<[f32; 2]>) -> Self {
        Self { points }
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Summary of one analysis run.
#[derive(Clone, Debug, Default, Serialize)]
pub struct AnalysisResult {
    /// True when a recreated pattern was produced.
    pub found: bool,
    /// Inferred odd grid dimension; 0 means nothing usable was detected.
    pub grid_size: u32,
    /// Number of dot centres supplied by the detector.
    pub dot_count: usize,
    /// Number of traced paths surviving the noise filter.
    pub path_count: usize,
    pub latency_ms: f64,
}
