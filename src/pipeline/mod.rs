//! The two analysis pipelines.
//!
//! - [`noise`]: bootstrap estimation of fold-change, noise and skewness from
//!   single-cell microscopy measurements
//! - [`constraints`]: theoretical distribution moments per experimental
//!   condition from the moment-dynamics model

pub mod constraints;
pub mod noise;
