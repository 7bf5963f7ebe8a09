//! Quantile computation on bootstrap replicate vectors.
//!
//! Uses the R-7 quantile definition (linear interpolation between order
//! statistics), the default of most statistical environments.

/// Quantile of a replicate vector at probability `p`.
///
/// The R-7 rank is r = (n − 1)·p; the result interpolates between the order
/// statistics at ⌊r⌋ and ⌊r⌋ + 1. Selection runs in O(n) expected time and
/// partially reorders the slice, which is why the bootstrap keeps its
/// replicate buffers mutable.
///
/// # Arguments
///
/// * `data` - Replicate vector, partially reordered in place
/// * `p` - Quantile probability in [0, 1]
///
/// # Panics
///
/// Panics if `data` is empty or if `p` is outside [0, 1].
pub fn compute_quantile(data: &mut [f64], p: f64) -> f64 {
    assert!(!data.is_empty(), "Cannot compute quantile of empty slice");
    assert!(
        (0.0..=1.0).contains(&p),
        "Quantile probability must be in [0, 1]"
    );

    let n = data.len();
    if n == 1 {
        return data[0];
    }

    let rank = (n - 1) as f64 * p;
    let below = rank.floor() as usize;
    let frac = rank - rank.floor();

    // p = 1 (or a rank rounding onto the last element) needs no upper partner
    if below >= n - 1 {
        let (_, &mut top, _) = data.select_nth_unstable_by(n - 1, |a, b| a.total_cmp(b));
        return top;
    }

    let (_, &mut at_rank, above) = data.select_nth_unstable_by(below, |a, b| a.total_cmp(b));
    if frac == 0.0 {
        return at_rank;
    }

    // The (below + 1)-th order statistic is the minimum of the upper partition
    let next = above
        .iter()
        .copied()
        .min_by(|a, b| a.total_cmp(b))
        .unwrap_or(at_rank);

    at_rank + frac * (next - at_rank)
}

/// Sample median.
///
/// Copies the input; use [`compute_quantile`] directly when a scratch buffer
/// is already available.
///
/// # Panics
///
/// Panics if `data` is empty.
pub fn median(data: &[f64]) -> f64 {
    let mut scratch = data.to_vec();
    compute_quantile(&mut scratch, 0.5)
}
