//! Statistical methods for the bootstrap pipeline.
//!
//! This module provides the statistical infrastructure shared by both
//! pipelines:
//! - With-replacement bootstrap resampling with deterministic seeding
//! - Descriptive statistics (mean, sample std, bias-corrected skewness)
//! - R-7 quantiles and the sample median
//! - Highest posterior density (HPD) intervals

mod bootstrap;
mod descriptive;
mod hpd;
mod quantile;

pub use bootstrap::{bootstrap_estimate, counter_rng_seed, resample_indices_into};
pub use descriptive::{mean, sample_std, skewness};
pub use hpd::hpd;
pub use quantile::{compute_quantile, median};
