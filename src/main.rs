use kolam_analyzer::image::ImageU8;
use kolam_analyzer::{AnalyzerParams, KolamAnalyzer};

fn main() {
    // Demo stub: a synthetic 3x3 dot grid with one diagonal stroke
    let w = 120usize;
    let h = 120usize;
    let mut buffer = vec![0u8; w * h];
    for i in 0..40 {
        buffer[(30 + i) * w + (30 + i)] = 255;
    }
    let skeleton = ImageU8 {
        w,
        h,
        stride: w,
        data: &buffer,
    };

    let mut dots = Vec::new();
    for row in 0..3 {
        for col in 0..3 {
            dots.push([20.0 + col as f32 * 40.0, 20.0 + row as f32 * 40.0]);
        }
    }

    let mut analyzer = KolamAnalyzer::new(AnalyzerParams::default());
    let report = analyzer.process(&dots, &skeleton);
    println!(
        "found={} grid_size={} paths={} latency_ms={:.3}",
        report.result.found,
        report.result.grid_size,
        report.result.path_count,
        report.result.latency_ms
    );
}
