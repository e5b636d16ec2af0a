use crate::analyzer::AnalyzerParams;
use crate::grid::{EstimatorOptions, LatticeOptions};
use crate::trace::TraceOptions;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct AnalyzeDemoConfig {
    /// Binary skeleton image with strokes at full white.
    pub skeleton: PathBuf,
    /// JSON array of `[x, y]` dot centres detected in the source photo.
    pub dots: PathBuf,
    #[serde(default)]
    pub analyzer: AnalyzerConfig,
    pub output: AnalyzeOutputConfig,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub on_value: Option<u8>,
    pub min_path_len: Option<usize>,
    pub tolerance_factor: Option<f32>,
    pub fallback_gap: Option<f32>,
    pub canvas_size: Option<[u32; 2]>,
    pub padding: Option<f32>,
}

impl AnalyzerConfig {
    /// Merge overrides onto the default analyzer parameters.
    pub fn resolve(&self) -> AnalyzerParams {
        let trace = TraceOptions::default();
        let estimator = EstimatorOptions::default();
        let lattice = LatticeOptions::default();
        AnalyzerParams {
            trace: TraceOptions {
                on_value: self.on_value.unwrap_or(trace.on_value),
                min_path_len: self.min_path_len.unwrap_or(trace.min_path_len),
            },
            estimator: EstimatorOptions {
                tolerance_factor: self.tolerance_factor.unwrap_or(estimator.tolerance_factor),
                fallback_gap: self.fallback_gap.unwrap_or(estimator.fallback_gap),
            },
            lattice: LatticeOptions {
                canvas_size: self
                    .canvas_size
                    .map(|s| (s[0], s[1]))
                    .unwrap_or(lattice.canvas_size),
                padding: self.padding.unwrap_or(lattice.padding),
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeOutputConfig {
    pub result_json: PathBuf,
    #[serde(default)]
    pub recreated_image: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<AnalyzeDemoConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

/// Load dot centres from a JSON array of `[x, y]` pairs.
pub fn load_dots(path: &Path) -> Result<Vec<[f32; 2]>, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read dots {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse dots {}: {e}", path.display()))
}
