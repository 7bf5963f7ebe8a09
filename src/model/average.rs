//! Reduction of a cell-cycle trajectory to time-averaged moments.
//!
//! An asynchronous, exponentially growing population is enriched for young
//! cells: the probability density of finding a cell at normalized cycle
//! position a ∈ [0, 1] is p(a) = ln2 · 2^(1−a). Moments measured over a
//! population snapshot are therefore the p(a)-weighted time average of the
//! within-cycle moment trajectory.

use crate::model::moments::MomentSet;
use crate::model::propagate::CyclePoint;
use crate::types::N_PROMOTER_STATES;

/// Probability density of the normalized cell-cycle position a ∈ [0, 1].
///
/// Integrates to exactly 1 over the unit interval.
pub fn cycle_position_density(a: f64) -> f64 {
    std::f64::consts::LN_2 * 2.0f64.powf(1.0 - a)
}

/// Composite Simpson quadrature on a possibly uneven grid.
///
/// Consecutive interval pairs are integrated with the three-point
/// Newton-Cotes rule generalized to unequal spacing; an odd trailing interval
/// is closed with a trapezoid.
///
/// # Panics
///
/// Panics if `y` and `x` differ in length or hold fewer than two points.
pub fn simpson(y: &[f64], x: &[f64]) -> f64 {
    assert_eq!(y.len(), x.len(), "Simpson needs matching grids");
    assert!(x.len() >= 2, "Simpson needs at least two points");

    let n = x.len() - 1;
    let mut total = 0.0;
    let mut i = 0;
    while i + 2 <= n {
        let h0 = x[i + 1] - x[i];
        let h1 = x[i + 2] - x[i + 1];
        let hsum = h0 + h1;
        total += hsum / 6.0
            * ((2.0 - h1 / h0) * y[i]
                + hsum * hsum / (h0 * h1) * y[i + 1]
                + (2.0 - h0 / h1) * y[i + 2]);
        i += 2;
    }
    if i < n {
        total += 0.5 * (x[i + 1] - x[i]) * (y[i] + y[i + 1]);
    }
    total
}

/// Points of the last recorded cell cycle.
pub(crate) fn last_cycle(trajectory: &[CyclePoint]) -> &[CyclePoint] {
    let last = trajectory
        .last()
        .expect("Cannot average an empty trajectory")
        .cycle;
    let start = trajectory
        .iter()
        .position(|p| p.cycle == last)
        .expect("trajectory holds its own last cycle");
    &trajectory[start..]
}

/// Time-averaged moments of the last cycle of a trajectory.
///
/// For each moment in the set, the promoter states are summed out and the
/// within-cycle profile is averaged against the cycle-position density on the
/// normalized time grid of the cycle.
///
/// # Returns
///
/// One value per moment, in the order of the [`MomentSet`].
pub fn time_averaged_moments(trajectory: &[CyclePoint], moments: &MomentSet) -> Vec<f64> {
    let cycle = last_cycle(trajectory);
    assert!(cycle.len() >= 3, "Need at least three points per cycle");

    let t0 = cycle[0].time;
    let span = cycle.last().unwrap().time - t0;
    assert!(span > 0.0, "Cycle must have positive duration");

    let a_grid: Vec<f64> = cycle.iter().map(|p| (p.time - t0) / span).collect();
    let weights: Vec<f64> = a_grid.iter().map(|&a| cycle_position_density(a)).collect();

    (0..moments.len())
        .map(|i| {
            let integrand: Vec<f64> = cycle
                .iter()
                .zip(&weights)
                .map(|(p, w)| {
                    let summed: f64 = (0..N_PROMOTER_STATES)
                        .map(|s| p.moments[N_PROMOTER_STATES * i + s])
                        .sum();
                    summed * w
                })
                .collect();
            simpson(&integrand, &a_grid)
        })
        .collect()
}
