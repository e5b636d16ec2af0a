//! Canvas rendering for recreated patterns.
//!
//! Draws the regenerated dot lattice and the remapped strokes on a fresh
//! RGB canvas and encodes it for transport. Rendering is presentation-side
//! work kept thin: discs for dots, line segments for strokes.

use crate::diagnostics::AnalysisReport;
use crate::grid::{DotLattice, LatticeOptions};
use crate::types::TracedPath;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut};

/// Colours and stroke geometry for the output canvas.
#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub background: Rgb<u8>,
    pub dot_color: Rgb<u8>,
    pub line_color: Rgb<u8>,
    /// Stroke width in pixels; widths above 1 are thickened by stamping
    /// vertex discs along the path.
    pub line_width: u32,
    /// Dot disc radius; None derives it from the lattice size.
    pub dot_radius: Option<i32>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            background: Rgb([255, 255, 255]),
            dot_color: Rgb([0, 0, 0]),
            line_color: Rgb([0, 0, 255]),
            line_width: 4,
            dot_radius: None,
        }
    }
}

/// Disc radius keeping dots legible across lattice sizes.
pub fn dot_radius_for(size: u32) -> i32 {
    if size == 0 {
        return 2;
    }
    (250 / (2 * size as i32)).clamp(2, 8)
}

/// Draw the report's lattice and recreated strokes on a fresh canvas.
///
/// Empty-pattern reports render the lattice dots alone, or a bare canvas
/// when no lattice was produced.
pub fn render_recreated(
    report: &AnalysisReport,
    lattice_options: &LatticeOptions,
    options: &RenderOptions,
) -> RgbImage {
    let (w, h) = lattice_options.canvas_size;
    let mut canvas = RgbImage::from_pixel(w, h, options.background);
    if let Some(lattice) = &report.lattice {
        let radius = options.dot_radius.unwrap_or_else(|| dot_radius_for(lattice.size));
        draw_lattice_dots(&mut canvas, lattice, radius, options.dot_color);
    }
    draw_paths(&mut canvas, &report.recreated_paths, options.line_color, options.line_width);
    canvas
}

/// Stamp a filled disc at every lattice dot.
pub fn draw_lattice_dots(canvas: &mut RgbImage, lattice: &DotLattice, radius: i32, color: Rgb<u8>) {
    for p in &lattice.points {
        draw_filled_circle_mut(
            canvas,
            (p[0].round() as i32, p[1].round() as i32),
            radius,
            color,
        );
    }
}

/// Draw each path as connected line segments, thickened by vertex discs
/// when `width` exceeds 1.
pub fn draw_paths(canvas: &mut RgbImage, paths: &[TracedPath], color: Rgb<u8>, width: u32) {
    let stamp_radius = (width / 2) as i32;
    for path in paths {
        for pair in path.points.windows(2) {
            draw_line_segment_mut(
                canvas,
                (pair[0][0], pair[0][1]),
                (pair[1][0], pair[1][1]),
                color,
            );
        }
        if stamp_radius > 0 {
            for p in &path.points {
                draw_filled_circle_mut(
                    canvas,
                    (p[0].round() as i32, p[1].round() as i32),
                    stamp_radius,
                    color,
                );
            }
        }
    }
}

/// Encode the canvas as PNG bytes for transport or display.
pub fn encode_png(canvas: &RgbImage) -> Result<Vec<u8>, String> {
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes)
        .write_image(
            canvas.as_raw(),
            canvas.width(),
            canvas.height(),
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| format!("Failed to encode PNG: {e}"))?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::{draw_paths, dot_radius_for, encode_png, RenderOptions};
    use crate::types::TracedPath;
    use image::{Rgb, RgbImage};

    #[test]
    fn dot_radius_shrinks_with_lattice_size() {
        assert_eq!(dot_radius_for(3), 8);
        assert_eq!(dot_radius_for(15), 8);
        assert_eq!(dot_radius_for(25), 5);
        assert_eq!(dot_radius_for(63), 2);
    }

    #[test]
    fn paths_paint_the_canvas() {
        let options = RenderOptions::default();
        let mut canvas = RgbImage::from_pixel(64, 64, options.background);
        let path = TracedPath::new(vec![[10.0, 10.0], [50.0, 10.0], [50.0, 50.0]]);
        draw_paths(&mut canvas, &[path], Rgb([255, 0, 0]), 1);
        assert_eq!(*canvas.get_pixel(30, 10), Rgb([255, 0, 0]));
        assert_eq!(*canvas.get_pixel(50, 30), Rgb([255, 0, 0]));
        assert_eq!(*canvas.get_pixel(5, 5), options.background);
    }

    #[test]
    fn encode_png_produces_signature() {
        let canvas = RgbImage::from_pixel(8, 8, Rgb([255, 255, 255]));
        let bytes = encode_png(&canvas).expect("encode succeeds");
        assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n']);
    }
}
