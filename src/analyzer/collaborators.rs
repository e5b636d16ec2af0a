//! Contracts for the external image primitives feeding the analyzer.
//!
//! Detection and thinning are deliberately outside the core: the pipeline
//! consumes their outputs and stays independent of any particular imaging
//! backend.

use crate::image::GrayImageU8;

/// Finds dot-marker centres in a photograph (e.g. a circle detector over a
/// blurred grayscale frame). May return no detections.
pub trait DotDetector {
    fn detect(&self, image: &GrayImageU8) -> Vec<[f32; 2]>;
}

/// Reduces a photograph to a binary image of one-pixel-wide stroke
/// centrelines, with strokes at the tracer's on-value.
pub trait Skeletonizer {
    fn skeletonize(&self, image: &GrayImageU8) -> GrayImageU8;
}
