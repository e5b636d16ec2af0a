//! Sorted 1D clustering helpers shared by the dimension estimator.

use std::cmp::Ordering;

/// Sort coordinate values ascending; incomparable values keep their order.
pub(crate) fn sort_values(values: &mut [f32]) {
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
}

/// Median of the strictly-positive consecutive gaps of a sorted sequence.
/// Falls back to `fallback` when no positive gap exists, e.g. when every
/// value coincides.
pub(crate) fn median_positive_gap(sorted: &[f32], fallback: f32) -> f32 {
    let mut gaps: Vec<f32> = Vec::with_capacity(sorted.len().saturating_sub(1));
    for pair in sorted.windows(2) {
        let d = pair[1] - pair[0];
        if d.is_finite() && d > 0.0 {
            gaps.push(d);
        }
    }
    if gaps.is_empty() {
        return fallback;
    }
    sort_values(&mut gaps);
    let m = gaps.len();
    if m % 2 == 1 {
        gaps[m / 2]
    } else {
        0.5 * (gaps[m / 2 - 1] + gaps[m / 2])
    }
}

/// Number of chained-tolerance clusters over a sorted sequence.
///
/// A value joins the current cluster when it lies strictly closer than
/// `tolerance` to the last value added (not the centroid), so cluster width
/// can drift along a chain of close values.
pub(crate) fn count_chained_clusters(sorted: &[f32], tolerance: f32) -> usize {
    let Some((&first, rest)) = sorted.split_first() else {
        return 0;
    };
    let mut clusters = 1usize;
    let mut last = first;
    for &v in rest {
        if v - last >= tolerance {
            clusters += 1;
        }
        last = v;
    }
    clusters
}

#[cfg(test)]
mod tests {
    use super::{count_chained_clusters, median_positive_gap};

    #[test]
    fn median_gap_skips_duplicates() {
        let sorted = [10.0, 10.0, 10.0, 50.0, 50.0, 90.0];
        assert_eq!(median_positive_gap(&sorted, 7.0), 40.0);
    }

    #[test]
    fn median_gap_falls_back_when_all_equal() {
        let sorted = [5.0, 5.0, 5.0];
        assert_eq!(median_positive_gap(&sorted, 7.0), 7.0);
    }

    #[test]
    fn chained_clusters_count_groups() {
        let sorted = [0.0, 1.0, 2.0, 40.0, 41.0, 80.0];
        assert_eq!(count_chained_clusters(&sorted, 5.0), 3);
        assert_eq!(count_chained_clusters(&[], 5.0), 0);
    }

    #[test]
    fn chained_tolerance_lets_clusters_drift() {
        // Each step is below the tolerance, so the whole chain is one
        // cluster even though its total width exceeds the tolerance.
        let sorted = [0.0, 4.0, 8.0, 12.0];
        assert_eq!(count_chained_clusters(&sorted, 5.0), 1);
    }
}
