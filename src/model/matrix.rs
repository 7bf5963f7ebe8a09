//! Assembly of the moment-dynamics generator.
//!
//! The state vector μ stacks, for every moment (x, y) in the [`MomentSet`],
//! the promoter-state-resolved moments ⟨m^x p^y · 1_s⟩ for the three states
//! in [`PromoterState::ALL`] order. The master equation then gives a linear
//! system dμ/dt = A μ whose generator is assembled here term by term from the
//! binomial expansions of the four reactions:
//!
//! - transcription (active state only):  ⟨(m+1)^x − m^x⟩ · rm
//! - mRNA decay:                         ⟨m((m−1)^x − m^x)⟩ · gm
//! - translation:                        ⟨m((p+1)^y − p^y) m^x⟩ · rp
//! - protein decay:                      ⟨p((p−1)^y − p^y) m^x⟩ · gp
//!
//! plus the promoter-switching generator coupling the three states of each
//! moment.

use crate::model::moments::{binomial, MomentSet};
use crate::model::rates::RateParams;
use crate::types::{Mat, Matrix3, PromoterState, N_PROMOTER_STATES};

/// Promoter-switching generator K with dπ/dt = K π.
///
/// Column s' holds the rates out of state s' into each state s, so every
/// column sums to zero. State order is (Active, Inactive, Bound).
pub fn promoter_generator(rates: &RateParams) -> Matrix3 {
    let (kr_on, kr_off) = (rates.kr_on, rates.kr_off);
    let (kp_on, kp_off) = (rates.kp_on, rates.kp_off);
    Matrix3::new(
        -kp_off, kp_on, 0.0, //
        kp_off, -(kp_on + kr_on), kr_off, //
        0.0, kr_on, -kr_off,
    )
}

/// Build the moment-dynamics generator A for a closed moment set.
///
/// # Arguments
///
/// * `moments` - Closed moment index set
/// * `rates` - Kinetic rates of the promoter phase
///
/// # Returns
///
/// The dense (3·n × 3·n) generator with dμ/dt = A μ.
pub fn moment_dynamics_matrix(moments: &MomentSet, rates: &RateParams) -> Mat {
    let ns = N_PROMOTER_STATES;
    let dim = ns * moments.len();
    let mut a = Mat::zeros(dim, dim);
    let k = promoter_generator(rates);

    for (i, &(x, y)) in moments.iter().enumerate() {
        for state in PromoterState::ALL {
            let s = state as usize;
            let row = ns * i + s;

            // Promoter switching couples the same moment across states
            for sp in 0..ns {
                a[(row, ns * i + sp)] += k[(s, sp)];
            }

            // Transcription, only while RNAP is bound:
            // (m+1)^x - m^x = Σ_{k<x} C(x,k) m^k
            if state == PromoterState::Active {
                for kk in 0..x {
                    let col = ns * moments.position(kk, y) + s;
                    a[(row, col)] += rates.rm * binomial(x, kk);
                }
            }

            // mRNA decay: m((m-1)^x - m^x) = Σ_{k<x} C(x,k) (-1)^{x-k} m^{k+1}
            for kk in 0..x {
                let sign = if (x - kk) % 2 == 0 { 1.0 } else { -1.0 };
                let col = ns * moments.position(kk + 1, y) + s;
                a[(row, col)] += rates.gm * sign * binomial(x, kk);
            }

            // Translation: m^x · m((p+1)^y - p^y) = Σ_{j<y} C(y,j) m^{x+1} p^j
            for j in 0..y {
                let col = ns * moments.position(x + 1, j) + s;
                a[(row, col)] += rates.rp * binomial(y, j);
            }

            // Protein decay: m^x · p((p-1)^y - p^y)
            //              = Σ_{j<y} C(y,j) (-1)^{y-j} m^x p^{j+1}
            for j in 0..y {
                let sign = if (y - j) % 2 == 0 { 1.0 } else { -1.0 };
                let col = ns * moments.position(x, j + 1) + s;
                a[(row, col)] += rates.gp * sign * binomial(y, j);
            }
        }
    }

    a
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MomentSet;

    fn test_rates() -> RateParams {
        RateParams {
            kr_on: 0.002,
            kr_off: 0.001,
            kp_on: 0.024,
            kp_off: 0.104,
            rm: 0.58,
            gm: 1.0 / 180.0,
            rp: 0.0965,
            gp: 0.0,
        }
    }

    #[test]
    fn test_generator_columns_sum_to_zero() {
        let k = promoter_generator(&test_rates());
        for c in 0..3 {
            let sum: f64 = (0..3).map(|r| k[(r, c)]).sum();
            assert!(sum.abs() < 1e-15);
        }
    }

    #[test]
    fn test_zeroth_moment_rows_reduce_to_promoter_generator() {
        // The (0,0) block of A must be exactly the switching generator:
        // probability mass only moves between promoter states.
        let rates = test_rates();
        let moments = MomentSet::up_to(3);
        let a = moment_dynamics_matrix(&moments, &rates);
        let k = promoter_generator(&rates);

        let i0 = moments.position(0, 0);
        for s in 0..3 {
            for sp in 0..3 {
                assert!((a[(3 * i0 + s, 3 * i0 + sp)] - k[(s, sp)]).abs() < 1e-15);
            }
            // No coupling from higher moments into the zeroth moment
            for col in 3..a.ncols() {
                assert_eq!(a[(3 * i0 + s, col)], 0.0);
            }
        }
    }

    #[test]
    fn test_mean_mrna_row_matches_hand_derivation() {
        // d<m 1_s>/dt = rm δ_{s,A} <1_s> - gm <m 1_s> + switching
        let rates = test_rates();
        let moments = MomentSet::up_to(3);
        let a = moment_dynamics_matrix(&moments, &rates);

        let i_m = moments.position(1, 0);
        let i_0 = moments.position(0, 0);
        let row_a = 3 * i_m; // active state
        assert!((a[(row_a, 3 * i_0)] - rates.rm).abs() < 1e-15);
        assert!((a[(row_a, 3 * i_m)] - (-rates.gm - rates.kp_off)).abs() < 1e-15);

        // Inactive state transcribes nothing
        let row_i = 3 * i_m + 1;
        assert_eq!(a[(row_i, 3 * i_0 + 1)], 0.0);
    }

    #[test]
    fn test_second_mrna_moment_row() {
        // d<m² 1_A>/dt picks up rm(2<m> + <1>) and gm(<m> - 2<m²>)
        let rates = test_rates();
        let moments = MomentSet::up_to(3);
        let a = moment_dynamics_matrix(&moments, &rates);

        let i_m2 = moments.position(2, 0);
        let i_m = moments.position(1, 0);
        let i_0 = moments.position(0, 0);
        let row = 3 * i_m2;
        assert!((a[(row, 3 * i_0)] - rates.rm).abs() < 1e-15);
        assert!((a[(row, 3 * i_m)] - (2.0 * rates.rm + rates.gm)).abs() < 1e-15);
        assert!((a[(row, 3 * i_m2)] - (-2.0 * rates.gm - rates.kp_off)).abs() < 1e-15);
    }

    #[test]
    fn test_mean_protein_row() {
        // d<p 1_s>/dt = rp <m 1_s> - gp <p 1_s> + switching
        let mut rates = test_rates();
        rates.gp = 0.01;
        let moments = MomentSet::up_to(3);
        let a = moment_dynamics_matrix(&moments, &rates);

        let i_p = moments.position(0, 1);
        let i_m = moments.position(1, 0);
        let row = 3 * i_p + 1; // inactive state
        assert!((a[(row, 3 * i_m + 1)] - rates.rp).abs() < 1e-15);
        let diag_expected = -rates.gp - (rates.kp_on + rates.kr_on);
        assert!((a[(row, 3 * i_p + 1)] - diag_expected).abs() < 1e-15);
    }
}
