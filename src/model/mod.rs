//! Stochastic kinetic model of the simple-repression promoter.
//!
//! The chemical master equation of a three-state promoter (RNAP-bound, empty,
//! repressor-bound) with mRNA production/decay and protein
//! production/decay has closed moment dynamics: the time derivative of every
//! moment ⟨m^x p^y⟩ is a linear combination of moments of total order ≤ x + y.
//! The module assembles that linear system, propagates it through repeated
//! cell cycles with binomial partitioning at division, and reduces the
//! trajectory to time-averaged moments using the cell-cycle position density
//! of an exponentially growing population:
//!
//! 1. [`moments`]: the closed moment index set and its ordering
//! 2. [`matrix`]: the moment-dynamics generator A with dμ/dt = A μ
//! 3. [`division`]: the binomial-partitioning moment map at cell division
//! 4. [`propagate`]: matrix-exponential propagation across cell-cycle phases
//! 5. [`average`]: cycle-position density weighting and Simpson quadrature
//!
//! [`mwc`] and [`rates`] supply the repressor allostery and the kinetic rates
//! that parameterize the generator for each experimental condition.

mod average;
mod division;
mod matrix;
mod moments;
mod mwc;
mod propagate;
mod rates;

pub use average::{cycle_position_density, simpson, time_averaged_moments};
pub use division::division_matrix;
pub use matrix::{moment_dynamics_matrix, promoter_generator};
pub use moments::MomentSet;
pub use mwc::p_act;
pub use propagate::{integrate_cycles, relax, CyclePoint, Propagator};
pub use rates::{ModelParams, RateParams};
