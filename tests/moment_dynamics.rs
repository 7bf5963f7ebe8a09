//! Integration tests of the moment-dynamics pipeline against closed-form
//! limits of the kinetic model.

use promoter_noise::model::{ModelParams, MomentSet};
use promoter_noise::pipeline::constraints::{compute_condition, Condition};
use promoter_noise::{CycleConfig, Operator};

fn fast_cycle_config() -> CycleConfig {
    CycleConfig {
        n_cycles: 4,
        n_steps: 150,
        relax_steps: 300,
        ..CycleConfig::default()
    }
}

#[test]
fn test_probability_is_conserved_for_every_condition_class() {
    let params = ModelParams::default();
    let moments = MomentSet::up_to(3);
    let cfg = fast_cycle_config();

    for operator in Operator::ALL {
        for repressors in [0.0, 260.0] {
            let record = compute_condition(
                &Condition::new(operator, repressors, 25.0),
                &params,
                &moments,
                &cfg,
            );
            let p0 = record.moments[moments.position(0, 0)];
            assert!(
                (p0 - 1.0).abs() < 1e-6,
                "{operator}, R = {repressors}: total probability {p0}"
            );
        }
    }
}

#[test]
fn test_moment_inequalities_hold() {
    let params = ModelParams::default();
    let moments = MomentSet::up_to(3);
    let record = compute_condition(
        &Condition::new(Operator::O2, 260.0, 50.0),
        &params,
        &moments,
        &fast_cycle_config(),
    );

    let m = |x, y| record.moments[moments.position(x, y)];

    // Variances are nonnegative for both species
    assert!(m(2, 0) >= m(1, 0) * m(1, 0));
    assert!(m(0, 2) >= m(0, 1) * m(0, 1));
    // Cauchy-Schwarz on the mixed moment
    assert!(m(1, 1) * m(1, 1) <= m(2, 0) * m(0, 2));
    // Everything with even total power is positive
    assert!(m(1, 0) > 0.0 && m(0, 1) > 0.0 && m(2, 0) > 0.0 && m(0, 2) > 0.0);
}

#[test]
fn test_fold_change_titration_is_monotone() {
    let params = ModelParams::default();
    let moments = MomentSet::up_to(3);
    let cfg = fast_cycle_config();
    let i_p = moments.position(0, 1);

    let unregulated = compute_condition(
        &Condition::new(Operator::O2, 0.0, 0.0),
        &params,
        &moments,
        &cfg,
    )
    .moments[i_p];

    let mut previous = 0.0;
    for inducer in [0.0, 5.0, 25.0, 100.0, 1000.0, 5000.0] {
        let repressed = compute_condition(
            &Condition::new(Operator::O2, 260.0, inducer),
            &params,
            &moments,
            &cfg,
        )
        .moments[i_p];
        let fold_change = repressed / unregulated;

        assert!(fold_change > 0.0 && fold_change <= 1.0 + 1e-9);
        assert!(
            fold_change >= previous,
            "fold-change fell from {previous} to {fold_change} at {inducer} µM"
        );
        previous = fold_change;
    }

    // Saturating inducer relieves most of the repression
    assert!(previous > 0.5);
}

#[test]
fn test_stronger_operator_represses_more() {
    let params = ModelParams::default();
    let moments = MomentSet::up_to(3);
    let cfg = fast_cycle_config();
    let i_p = moments.position(0, 1);

    let mut by_operator = Vec::new();
    for operator in Operator::ALL {
        let record = compute_condition(
            &Condition::new(operator, 260.0, 0.0),
            &params,
            &moments,
            &cfg,
        );
        by_operator.push(record.moments[i_p]);
    }

    // O1 binds tightest, O3 weakest
    assert!(by_operator[0] < by_operator[1]);
    assert!(by_operator[1] < by_operator[2]);
}

#[test]
fn test_unregulated_mean_is_independent_of_operator() {
    // With no repressors the operator identity must not matter
    let params = ModelParams::default();
    let moments = MomentSet::up_to(3);
    let cfg = fast_cycle_config();
    let i_p = moments.position(0, 1);

    let o1 = compute_condition(
        &Condition::new(Operator::O1, 0.0, 0.0),
        &params,
        &moments,
        &cfg,
    )
    .moments[i_p];
    let o3 = compute_condition(
        &Condition::new(Operator::O3, 0.0, 0.0),
        &params,
        &moments,
        &cfg,
    )
    .moments[i_p];

    assert!((o1 - o3).abs() / o1 < 1e-6);
}
