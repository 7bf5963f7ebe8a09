//! # promoter-noise
//!
//! Statistical estimates and theoretical predictions for gene expression in
//! the simple-repression motif.
//!
//! The crate implements two analysis pipelines over single-cell microscopy
//! data and stochastic chemical-kinetics theory:
//!
//! - **Noise bootstrap** ([`pipeline::noise`]): per-experiment bootstrap of
//!   autofluorescence-corrected fold-change, noise (coefficient of variation)
//!   and skewness of single-cell fluorescence, summarized as highest posterior
//!   density percentile bands.
//! - **Moment constraints** ([`pipeline::constraints`]): for every
//!   experimental condition (operator, repressor copy number, inducer
//!   concentration), build the linear moment-dynamics system of the
//!   three-state promoter / mRNA / protein model, integrate it across repeated
//!   cell cycles with binomial partitioning at division, and reduce the last
//!   cycle to time-averaged distribution moments.
//!
//! ## Quick start
//!
//! ```ignore
//! use promoter_noise::model::{ModelParams, MomentSet};
//! use promoter_noise::pipeline::constraints::{self, Condition};
//! use promoter_noise::{CycleConfig, Operator};
//!
//! let params = ModelParams::default();
//! let moments = MomentSet::up_to(3);
//! let cfg = CycleConfig::default();
//!
//! let condition = Condition::new(Operator::O1, 260.0, 50.0);
//! let record = constraints::compute_condition(&condition, &params, &moments, &cfg);
//! println!("<p> = {}", record.moments[moments.position(0, 1)]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod constants;
mod types;

// Functional modules
pub mod io;
pub mod model;
pub mod pipeline;
pub mod statistics;
pub mod thread_pool;

// Re-exports for public API
pub use config::{BootstrapConfig, CycleConfig};
pub use constants::PERCENTILES;
pub use types::{Operator, PromoterState, N_PROMOTER_STATES};
