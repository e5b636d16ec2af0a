//! Grid dimension inference from a noisy cloud of dot centres.
//!
//! Distinct-coordinate counting overcounts rows and columns as soon as the
//! detector jitters by a pixel, so the estimator derives a per-axis
//! tolerance from the median dot spacing and clusters each sorted axis
//! independently. The larger of the two cluster counts becomes the grid
//! dimension candidate, normalized to the odd sizes the lattice generator
//! supports.

use super::cluster1d::{count_chained_clusters, median_positive_gap, sort_values};
use log::debug;
use serde::Serialize;

/// Options for grid dimension estimation.
#[derive(Clone, Copy, Debug)]
pub struct EstimatorOptions {
    /// Fraction of the median dot spacing used as the clustering tolerance.
    pub tolerance_factor: f32,
    /// Spacing assumed for an axis with no positive gaps (all dots aligned).
    pub fallback_gap: f32,
}

impl Default for EstimatorOptions {
    fn default() -> Self {
        Self {
            tolerance_factor: 0.5,
            fallback_gap: 10.0,
        }
    }
}

/// Outcome of dimension estimation over a set of dot centres.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct GridEstimate {
    /// Inferred odd grid dimension; 0 means the input was empty.
    pub grid_size: u32,
    /// Number of x-coordinate clusters.
    pub columns: usize,
    /// Number of y-coordinate clusters.
    pub rows: usize,
    pub tolerance_x: f32,
    pub tolerance_y: f32,
}

/// Estimate the square grid dimension behind `dots`.
///
/// Fewer than two points cannot support a spacing estimate and bypass
/// clustering entirely: one point maps to dimension 1, none to the 0
/// sentinel. Callers treat `grid_size == 0` as "nothing usable".
pub fn estimate_grid(dots: &[[f32; 2]], options: &EstimatorOptions) -> GridEstimate {
    if dots.len() < 2 {
        return GridEstimate {
            grid_size: dots.len() as u32,
            columns: dots.len(),
            rows: dots.len(),
            tolerance_x: 0.0,
            tolerance_y: 0.0,
        };
    }

    let mut xs: Vec<f32> = dots.iter().map(|p| p[0]).collect();
    let mut ys: Vec<f32> = dots.iter().map(|p| p[1]).collect();
    sort_values(&mut xs);
    sort_values(&mut ys);

    let tolerance_x = median_positive_gap(&xs, options.fallback_gap) * options.tolerance_factor;
    let tolerance_y = median_positive_gap(&ys, options.fallback_gap) * options.tolerance_factor;

    let columns = count_chained_clusters(&xs, tolerance_x);
    let rows = count_chained_clusters(&ys, tolerance_y);
    let grid_size = normalize_size(columns.max(rows) as u32);

    debug!(
        "estimate: dots={} cols={} rows={} tol=({:.2}, {:.2}) grid_size={}",
        dots.len(),
        columns,
        rows,
        tolerance_x,
        tolerance_y,
        grid_size
    );
    GridEstimate {
        grid_size,
        columns,
        rows,
        tolerance_x,
        tolerance_y,
    }
}

/// Convenience returning only the dimension.
pub fn estimate_grid_size(dots: &[[f32; 2]], options: &EstimatorOptions) -> u32 {
    estimate_grid(dots, options).grid_size
}

/// The lattice generator only supports odd dimensions of at least 3: even
/// candidates round up, small positive candidates clamp.
fn normalize_size(candidate: u32) -> u32 {
    let mut size = candidate;
    if size % 2 == 0 && size > 0 {
        size += 1;
    }
    if size == 0 {
        size = 1;
    }
    if size < 3 {
        size = 3;
    }
    size
}

#[cfg(test)]
mod tests {
    use super::{estimate_grid, estimate_grid_size, EstimatorOptions};

    fn grid_dots(k: usize, origin: f32, spacing: f32) -> Vec<[f32; 2]> {
        let mut dots = Vec::with_capacity(k * k);
        for r in 0..k {
            for c in 0..k {
                dots.push([origin + c as f32 * spacing, origin + r as f32 * spacing]);
            }
        }
        dots
    }

    #[test]
    fn empty_input_returns_zero_sentinel() {
        assert_eq!(estimate_grid_size(&[], &EstimatorOptions::default()), 0);
    }

    #[test]
    fn single_point_returns_one() {
        let dots = [[42.0, 7.0]];
        assert_eq!(estimate_grid_size(&dots, &EstimatorOptions::default()), 1);
    }

    #[test]
    fn perfect_odd_grid_recovers_dimension() {
        for k in [3usize, 5, 7] {
            let dots = grid_dots(k, 40.0, 40.0);
            let estimate = estimate_grid(&dots, &EstimatorOptions::default());
            assert_eq!(estimate.grid_size, k as u32, "k={k}");
            assert_eq!(estimate.columns, k);
            assert_eq!(estimate.rows, k);
        }
    }

    #[test]
    fn sparse_pixel_jitter_is_absorbed() {
        // A few dots displaced by a couple of pixels; the spacing-derived
        // tolerance keeps them inside their row/column clusters.
        let mut dots = grid_dots(5, 40.0, 40.0);
        dots[0][0] += 2.0;
        dots[7][0] -= 3.0;
        dots[13][1] += 2.0;
        dots[21][1] -= 2.0;
        let estimate = estimate_grid(&dots, &EstimatorOptions::default());
        assert_eq!(estimate.grid_size, 5);
    }

    #[test]
    fn even_candidate_rounds_up_to_odd() {
        let dots = grid_dots(4, 40.0, 40.0);
        assert_eq!(estimate_grid_size(&dots, &EstimatorOptions::default()), 5);
    }

    #[test]
    fn clustered_result_is_never_even_or_below_three() {
        for k in 2usize..=8 {
            let dots = grid_dots(k, 40.0, 40.0);
            let size = estimate_grid_size(&dots, &EstimatorOptions::default());
            assert!(size >= 3, "k={k} produced {size}");
            assert_eq!(size % 2, 1, "k={k} produced even {size}");
        }
    }

    #[test]
    fn collinear_dots_use_fallback_gap() {
        // All dots share an x coordinate; the x axis has no positive gaps.
        let dots: Vec<[f32; 2]> = (0..5).map(|i| [100.0, i as f32 * 40.0]).collect();
        let estimate = estimate_grid(&dots, &EstimatorOptions::default());
        assert_eq!(estimate.columns, 1);
        assert_eq!(estimate.rows, 5);
        assert_eq!(estimate.grid_size, 5);
        assert_eq!(estimate.tolerance_x, 5.0);
    }
}
