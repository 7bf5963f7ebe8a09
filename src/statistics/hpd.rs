//! Highest posterior density intervals.

/// Compute the HPD interval of a sample: the shortest interval containing a
/// fraction `mass` of the observations.
///
/// The sample is sorted and every window spanning ⌊mass·n⌋ consecutive
/// inter-sample gaps (⌊mass·n⌋ + 1 order statistics) is scanned for the
/// minimum width. For unimodal distributions this converges to the true HPD
/// credible interval.
///
/// # Arguments
///
/// * `samples` - Draws from the distribution (e.g. bootstrap replicates)
/// * `mass` - Probability mass of the interval, in (0, 1]
///
/// # Returns
///
/// The `(lower, upper)` bounds of the interval.
///
/// # Panics
///
/// Panics if `samples` is empty or `mass` is outside (0, 1].
pub fn hpd(samples: &[f64], mass: f64) -> (f64, f64) {
    assert!(!samples.is_empty(), "Cannot compute HPD of empty sample");
    assert!(
        mass > 0.0 && mass <= 1.0,
        "HPD mass must be in (0, 1], got {mass}"
    );

    let mut sorted = samples.to_vec();
    sorted.sort_unstable_by(|a, b| a.total_cmp(b));

    let n = sorted.len();
    let n_gaps = ((mass * n as f64).floor() as usize).min(n - 1);
    let n_window = n_gaps + 1;

    let mut best_start = 0;
    let mut best_width = f64::INFINITY;
    for start in 0..=(n - n_window) {
        let width = sorted[start + n_window - 1] - sorted[start];
        if width < best_width {
            best_width = width;
            best_start = start;
        }
    }

    (sorted[best_start], sorted[best_start + n_window - 1])
}
