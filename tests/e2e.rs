mod common;

use common::synthetic_pattern::{grid_dots, scattered_noise, v_stroke};
use kolam_analyzer::image::ImageU8;
use kolam_analyzer::{AnalyzerParams, KolamAnalyzer};

fn view(buffer: &[u8], w: usize, h: usize) -> ImageU8<'_> {
    ImageU8 {
        w,
        h,
        stride: w,
        data: buffer,
    }
}

#[test]
fn synthetic_pattern_recovers_grid_and_strokes() {
    let _ = env_logger::builder().is_test(true).try_init();

    let (w, h) = (240usize, 240usize);
    let dots = grid_dots(5, 40.0, 40.0);
    let buffer = v_stroke(w, h, 120, 120, 80);

    let mut analyzer = KolamAnalyzer::new(AnalyzerParams::default());
    let report = analyzer.process(&dots, &view(&buffer, w, h));

    assert!(report.result.found, "expected a recreated pattern");
    assert_eq!(report.result.grid_size, 5);
    assert_eq!(report.result.path_count, 1, "the V stroke is one walk");
    assert_eq!(report.recreated_paths.len(), 1);
    assert_eq!(
        report.recreated_paths[0].len(),
        report.traced_paths[0].len(),
        "remap preserves vertex count"
    );

    let lattice = report.lattice.as_ref().expect("lattice generated");
    assert_eq!(lattice.size, 5);
    let bb = lattice.bounding_box().expect("lattice nonempty");
    for p in &report.recreated_paths[0].points {
        assert!(
            p[0] >= bb.min_x - 1.0
                && p[0] <= bb.max_x + 1.0
                && p[1] >= bb.min_y - 1.0
                && p[1] <= bb.max_y + 1.0,
            "recreated vertex {:?} escaped the lattice box",
            p
        );
    }

    let remap = report
        .diagnostics
        .remap
        .as_ref()
        .expect("remap stage ran");
    assert_eq!(remap.paths, 1);
    assert!(remap.vertices > 100);
}

#[test]
fn no_dots_short_circuits_to_empty_pattern() {
    let (w, h) = (240usize, 240usize);
    let buffer = v_stroke(w, h, 120, 120, 80);

    let mut analyzer = KolamAnalyzer::new(AnalyzerParams::default());
    let report = analyzer.process(&[], &view(&buffer, w, h));

    assert!(!report.result.found);
    assert_eq!(report.result.grid_size, 0, "zero is the nothing-usable sentinel");
    assert!(report.lattice.is_none());
    assert!(report.recreated_paths.is_empty());
    assert!(report.diagnostics.remap.is_none());
    assert_eq!(report.result.path_count, 1, "tracing still runs");
}

#[test]
fn noise_only_skeleton_yields_dots_but_no_strokes() {
    let (w, h) = (120usize, 120usize);
    let dots = grid_dots(5, 20.0, 20.0);
    let buffer = scattered_noise(w, h, 3);

    let mut analyzer = KolamAnalyzer::new(AnalyzerParams::default());
    let report = analyzer.process(&dots, &view(&buffer, w, h));

    assert_eq!(report.result.path_count, 0, "isolated pixels are noise");
    assert!(!report.result.found);
    assert_eq!(report.result.grid_size, 5);
    assert!(report.lattice.is_some(), "the lattice still regenerates");
    assert!(report.recreated_paths.is_empty());
    assert!(report.diagnostics.trace.paths_discarded > 0);
}

#[test]
fn report_serializes_to_json() {
    let (w, h) = (240usize, 240usize);
    let dots = grid_dots(3, 40.0, 40.0);
    let buffer = v_stroke(w, h, 80, 80, 40);

    let mut analyzer = KolamAnalyzer::new(AnalyzerParams::default());
    let report = analyzer.process(&dots, &view(&buffer, w, h));

    let json = serde_json::to_string(&report).expect("report serializes");
    assert!(json.contains("\"grid_size\""));
    assert!(json.contains("\"recreated_paths\""));
}
