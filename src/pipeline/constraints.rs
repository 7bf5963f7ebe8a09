//! Theoretical distribution moments per experimental condition.
//!
//! For every (operator, repressor copy number, inducer concentration) triple,
//! the repressor rates follow from the MWC model and the operator binding
//! energy, the moment-dynamics system is relaxed to a quasi-steady initial
//! condition, integrated across repeated cell cycles with division hand-off,
//! and the last cycle is reduced to time-averaged moments. Conditions are
//! independent and fan out across the shared thread pool.

use log::info;

use crate::config::CycleConfig;
use crate::constants;
use crate::model::{
    division_matrix, integrate_cycles, moment_dynamics_matrix, relax, time_averaged_moments,
    ModelParams, MomentSet,
};
use crate::types::{Operator, Vec64, N_PROMOTER_STATES};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// One experimental condition of the prediction grid.
#[derive(Debug, Clone, Copy)]
pub struct Condition {
    /// Operator the repressor binds.
    pub operator: Operator,
    /// Mean repressor copy number.
    pub repressors: f64,
    /// Inducer concentration (µM).
    pub inducer_um: f64,
}

impl Condition {
    /// Build a condition.
    pub fn new(operator: Operator, repressors: f64, inducer_um: f64) -> Self {
        Self {
            operator,
            repressors,
            inducer_um,
        }
    }
}

/// Time-averaged moments of one condition.
#[derive(Debug, Clone)]
pub struct ConstraintRecord {
    /// Operator of the condition.
    pub operator: Operator,
    /// Repressor binding energy (k_BT).
    pub binding_energy: f64,
    /// Mean repressor copy number.
    pub repressor: f64,
    /// Inducer concentration (µM).
    pub inducer_um: f64,
    /// Time-averaged moments in [`MomentSet`] order.
    pub moments: Vec<f64>,
}

/// The full prediction grid: operators × repressor copy numbers × the
/// inducer concentration grid.
pub fn condition_grid() -> Vec<Condition> {
    let inducers = constants::inducer_grid();
    let mut grid = Vec::new();
    for &operator in &Operator::ALL {
        for &repressors in &constants::STRAIN_REPRESSORS {
            for &inducer_um in &inducers {
                grid.push(Condition::new(operator, repressors, inducer_um));
            }
        }
    }
    grid
}

/// Compute the time-averaged moments of a single condition.
pub fn compute_condition(
    condition: &Condition,
    params: &ModelParams,
    moments: &MomentSet,
    cfg: &CycleConfig,
) -> ConstraintRecord {
    let binding_energy = condition.operator.binding_energy();
    info!(
        "condition {} ({binding_energy} k_BT), R = {}, c = {} µM",
        condition.operator, condition.repressors, condition.inducer_um
    );

    let kr_on = params.repressor_on_rate(condition.repressors, condition.inducer_um);
    let kr_off = params.repressor_off_rate(binding_energy);

    let a_single = moment_dynamics_matrix(moments, &params.single_promoter_rates(kr_on, kr_off));
    let a_double = moment_dynamics_matrix(moments, &params.double_promoter_rates(kr_on, kr_off));
    let a_init = moment_dynamics_matrix(moments, &params.relaxation_rates(kr_on, kr_off));
    let division = division_matrix(moments);

    // All probability starts in the first promoter state; the relaxation
    // washes the arbitrary choice out.
    let mut mu0 = Vec64::zeros(N_PROMOTER_STATES * moments.len());
    mu0[N_PROMOTER_STATES * moments.position(0, 0)] = 1.0;
    let mu_init = relax(&a_init, &mu0, cfg.relax_time_s, cfg.relax_steps);

    let trajectory = integrate_cycles(&mu_init, &a_single, &a_double, &division, cfg);
    let averaged = time_averaged_moments(&trajectory, moments);

    ConstraintRecord {
        operator: condition.operator,
        binding_energy,
        repressor: condition.repressors,
        inducer_um: condition.inducer_um,
        moments: averaged,
    }
}

/// Compute the whole prediction grid, fanning conditions across the shared
/// thread pool.
pub fn compute_all(
    conditions: &[Condition],
    params: &ModelParams,
    moments: &MomentSet,
    cfg: &CycleConfig,
) -> Vec<ConstraintRecord> {
    #[cfg(feature = "parallel")]
    {
        crate::thread_pool::install(|| {
            conditions
                .par_iter()
                .map(|c| compute_condition(c, params, moments, cfg))
                .collect()
        })
    }

    #[cfg(not(feature = "parallel"))]
    {
        conditions
            .iter()
            .map(|c| compute_condition(c, params, moments, cfg))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_cycle_config() -> CycleConfig {
        CycleConfig {
            n_cycles: 3,
            n_steps: 120,
            relax_steps: 200,
            ..CycleConfig::default()
        }
    }

    #[test]
    fn test_grid_size() {
        let grid = condition_grid();
        let n_inducers = constants::inducer_grid().len();
        assert_eq!(grid.len(), 3 * 4 * n_inducers);
    }

    #[test]
    fn test_condition_moments_are_consistent() {
        let params = ModelParams::default();
        let moments = MomentSet::up_to(3);
        let condition = Condition::new(Operator::O2, 260.0, 50.0);

        let record = compute_condition(&condition, &params, &moments, &fast_cycle_config());
        assert_eq!(record.moments.len(), moments.len());

        // Total probability averages to 1
        let p0 = record.moments[moments.position(0, 0)];
        assert!((p0 - 1.0).abs() < 1e-6, "zeroth moment {p0}");

        // Positive means, variance at least Poisson-free lower bound
        let m1 = record.moments[moments.position(1, 0)];
        let m2 = record.moments[moments.position(2, 0)];
        let p1 = record.moments[moments.position(0, 1)];
        assert!(m1 > 0.0 && p1 > 0.0);
        assert!(m2 >= m1 * m1);
    }

    #[test]
    fn test_repression_lowers_expression() {
        let params = ModelParams::default();
        let moments = MomentSet::up_to(3);
        let cfg = fast_cycle_config();

        let unrepressed = compute_condition(
            &Condition::new(Operator::O1, 0.0, 0.0),
            &params,
            &moments,
            &cfg,
        );
        let repressed = compute_condition(
            &Condition::new(Operator::O1, 1740.0, 0.0),
            &params,
            &moments,
            &cfg,
        );

        let i_p = moments.position(0, 1);
        assert!(repressed.moments[i_p] < unrepressed.moments[i_p]);
    }

    #[test]
    fn test_inducer_relieves_repression() {
        let params = ModelParams::default();
        let moments = MomentSet::up_to(3);
        let cfg = fast_cycle_config();

        let no_inducer = compute_condition(
            &Condition::new(Operator::O2, 260.0, 0.0),
            &params,
            &moments,
            &cfg,
        );
        let saturating = compute_condition(
            &Condition::new(Operator::O2, 260.0, 5000.0),
            &params,
            &moments,
            &cfg,
        );

        let i_p = moments.position(0, 1);
        assert!(saturating.moments[i_p] > no_inducer.moments[i_p]);
    }
}
