use kolam_analyzer::config::analyze::{self, AnalyzeDemoConfig};
use kolam_analyzer::image::io::{load_grayscale_image, write_json_file};
use kolam_analyzer::render::{render_recreated, RenderOptions};
use kolam_analyzer::KolamAnalyzer;
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = analyze::load_config(Path::new(&config_path))?;

    let dots = analyze::load_dots(&config.dots)?;
    let params = config.analyzer.resolve();
    // Re-saved skeletons pick up interpolation grays; snap them back to a
    // clean binary image before tracing.
    let skeleton = load_grayscale_image(&config.skeleton)?.binarized(128, params.trace.on_value);

    let mut analyzer = KolamAnalyzer::new(params);
    let report = analyzer.process(&dots, &skeleton.as_view());

    write_json_file(&config.output.result_json, &report)?;
    print_summary(&config, &report.result);

    if let Some(path) = &config.output.recreated_image {
        let canvas = render_recreated(&report, &params.lattice, &RenderOptions::default());
        canvas
            .save(path)
            .map_err(|e| format!("Failed to save {}: {e}", path.display()))?;
        println!("Recreated pattern written to {}", path.display());
    }

    Ok(())
}

fn print_summary(config: &AnalyzeDemoConfig, result: &kolam_analyzer::AnalysisResult) {
    println!("Analysis summary");
    println!("  found: {}", result.found);
    println!("  grid_size: {}", result.grid_size);
    println!("  dots: {}", result.dot_count);
    println!("  paths: {}", result.path_count);
    println!("  latency_ms: {:.3}", result.latency_ms);
    println!("Report written to {}", config.output.result_json.display());
}

fn usage() -> String {
    "Usage: analyze_demo <config.json>".to_string()
}
