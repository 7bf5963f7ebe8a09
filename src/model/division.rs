//! Binomial partitioning of molecules at cell division.
//!
//! At division each mRNA and protein is passed to the tracked daughter
//! independently with probability 1/2. Conditional moments of the daughter
//! copy number d given the mother copy number n are polynomials in n,
//!
//! E[d^x | n] = Σ_k S(x, k) 2^(-k) (n)_k,
//!
//! with S the Stirling numbers of the second kind and (n)_k the falling
//! factorial, itself a polynomial in n through the signed Stirling numbers of
//! the first kind. Moments after division are therefore a linear map of
//! moments before division; this module assembles that map over a closed
//! moment set.

use crate::model::moments::MomentSet;
use crate::types::{Mat, N_PROMOTER_STATES};

/// Stirling numbers of the second kind S(n, k) for n, k ≤ `max`.
fn stirling_second(max: usize) -> Vec<Vec<f64>> {
    let mut s = vec![vec![0.0; max + 1]; max + 1];
    s[0][0] = 1.0;
    for n in 1..=max {
        for k in 1..=n {
            s[n][k] = k as f64 * s[n - 1][k] + s[n - 1][k - 1];
        }
    }
    s
}

/// Signed Stirling numbers of the first kind s(n, k) for n, k ≤ `max`,
/// defined by (x)_n = Σ_k s(n, k) x^k.
fn stirling_first_signed(max: usize) -> Vec<Vec<f64>> {
    let mut s = vec![vec![0.0; max + 1]; max + 1];
    s[0][0] = 1.0;
    for n in 1..=max {
        for k in 1..=n {
            // (x)_{n} = (x - n + 1)(x)_{n-1}
            s[n][k] = s[n - 1][k - 1] - (n as f64 - 1.0) * s[n - 1][k];
        }
    }
    s
}

/// Coefficients c[x][i] with E[d^x | n] = Σ_i c[x][i] n^i for a fair
/// binomial split.
fn partition_coeffs(max_order: usize) -> Vec<Vec<f64>> {
    let s2 = stirling_second(max_order);
    let s1 = stirling_first_signed(max_order);
    let mut coeffs = vec![vec![0.0; max_order + 1]; max_order + 1];
    for (x, row) in coeffs.iter_mut().enumerate() {
        for k in 0..=x {
            let weight = s2[x][k] * 0.5f64.powi(k as i32);
            for i in 0..=k {
                row[i] += weight * s1[k][i];
            }
        }
    }
    coeffs
}

/// Build the division map D over a closed moment set.
///
/// D acts blockwise on each promoter state (the promoter occupancy is
/// inherited by the daughter unchanged), mapping the stacked moment vector of
/// the mother to that of the daughter. The zeroth moment is preserved exactly
/// since E[d^0] = 1.
pub fn division_matrix(moments: &MomentSet) -> Mat {
    let max_order = moments
        .iter()
        .map(|&(x, y)| x.max(y))
        .max()
        .unwrap_or(0) as usize;
    let coeffs = partition_coeffs(max_order);

    let ns = N_PROMOTER_STATES;
    let dim = ns * moments.len();
    let mut d = Mat::zeros(dim, dim);

    for (i, &(x, y)) in moments.iter().enumerate() {
        // E[d_m^x d_p^y | m, p] factorizes over the two species
        for xi in 0..=x {
            for yj in 0..=y {
                let c = coeffs[x as usize][xi as usize] * coeffs[y as usize][yj as usize];
                if c == 0.0 {
                    continue;
                }
                let j = moments.position(xi, yj);
                for s in 0..ns {
                    d[(ns * i + s, ns * j + s)] += c;
                }
            }
        }
    }

    d
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MomentSet;
    use crate::types::Vec64;

    #[test]
    fn test_stirling_tables() {
        let s2 = stirling_second(4);
        assert_eq!(s2[3][2], 3.0);
        assert_eq!(s2[4][2], 7.0);
        let s1 = stirling_first_signed(4);
        // (x)_3 = x³ - 3x² + 2x
        assert_eq!(s1[3][3], 1.0);
        assert_eq!(s1[3][2], -3.0);
        assert_eq!(s1[3][1], 2.0);
    }

    #[test]
    fn test_partition_moments_of_deterministic_count() {
        // n = 10 molecules: E[d] = 5, E[d²] = n²/4 + n/4 = 27.5,
        // E[d³] = n³/8 + 3n²/8 + ... = (n³ + 3n(n-1))/8? compute from table.
        let c = partition_coeffs(3);
        let n = 10.0f64;
        let e1: f64 = (0..=1).map(|i| c[1][i] * n.powi(i as i32)).sum();
        let e2: f64 = (0..=2).map(|i| c[2][i] * n.powi(i as i32)).sum();
        assert!((e1 - 5.0).abs() < 1e-12);
        assert!((e2 - 27.5).abs() < 1e-12);
        // Binomial(10, 1/2): E[d³] = Σ S(3,k) 2^{-k} (10)_k
        let e3_expected = 0.5 * 10.0 + 3.0 * 0.25 * 90.0 + 0.125 * 720.0;
        let e3: f64 = (0..=3).map(|i| c[3][i] * n.powi(i as i32)).sum();
        assert!((e3 - e3_expected).abs() < 1e-12);
    }

    #[test]
    fn test_division_preserves_probability_and_halves_means() {
        let moments = MomentSet::up_to(3);
        let d = division_matrix(&moments);

        // Mother: all mass in the active state, <m> = 10, <m²> = 100 (sharp)
        let mut mu = Vec64::zeros(3 * moments.len());
        mu[3 * moments.position(0, 0)] = 1.0;
        mu[3 * moments.position(1, 0)] = 10.0;
        mu[3 * moments.position(2, 0)] = 100.0;
        mu[3 * moments.position(3, 0)] = 1000.0;

        let daughter = &d * mu;
        assert!((daughter[3 * moments.position(0, 0)] - 1.0).abs() < 1e-12);
        assert!((daughter[3 * moments.position(1, 0)] - 5.0).abs() < 1e-12);
        // E[d²] for binomial(10, 1/2) around a sharp mother count
        assert!((daughter[3 * moments.position(2, 0)] - 27.5).abs() < 1e-12);
        // Other promoter states stay empty
        assert_eq!(daughter[3 * moments.position(1, 0) + 1], 0.0);
    }
}
