//! Descriptive statistics of single-cell samples.
//!
//! Conventions match the estimators used throughout the analysis: the sample
//! standard deviation uses the n-1 denominator and skewness is the
//! bias-corrected G1 estimator.

/// Arithmetic mean of a sample.
///
/// # Panics
///
/// Panics if `data` is empty.
pub fn mean(data: &[f64]) -> f64 {
    assert!(!data.is_empty(), "Cannot compute mean of empty slice");
    data.iter().sum::<f64>() / data.len() as f64
}

/// Unbiased sample standard deviation (n-1 denominator).
///
/// # Panics
///
/// Panics if `data` has fewer than two elements.
pub fn sample_std(data: &[f64]) -> f64 {
    assert!(
        data.len() >= 2,
        "Sample std requires at least two observations"
    );
    let m = mean(data);
    let ss: f64 = data.iter().map(|x| (x - m) * (x - m)).sum();
    (ss / (data.len() - 1) as f64).sqrt()
}

/// Bias-corrected sample skewness (the G1 estimator).
///
/// G1 = g1 · sqrt(n(n-1)) / (n-2), where g1 = m3 / m2^(3/2) is the
/// method-of-moments skewness with biased central moments m2 and m3.
///
/// Returns NaN when the sample variance is zero.
///
/// # Panics
///
/// Panics if `data` has fewer than three elements.
pub fn skewness(data: &[f64]) -> f64 {
    let n = data.len();
    assert!(n >= 3, "Skewness requires at least three observations");

    let m = mean(data);
    let (mut m2, mut m3) = (0.0, 0.0);
    for &x in data {
        let d = x - m;
        m2 += d * d;
        m3 += d * d * d;
    }
    m2 /= n as f64;
    m3 /= n as f64;

    let g1 = m3 / m2.powf(1.5);
    let nf = n as f64;
    g1 * (nf * (nf - 1.0)).sqrt() / (nf - 2.0)
}
