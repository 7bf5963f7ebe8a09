//! CSV input and output for both pipelines.
//!
//! - [`microscopy`]: the single-cell microscopy measurement table
//! - [`chain`]: MCMC chains of the unregulated-promoter kinetics
//! - [`table`]: writers for the bootstrap-noise and moment-constraints tables

pub mod chain;
pub mod microscopy;
pub mod table;

pub use chain::{read_map_estimate, MapEstimate};
pub use microscopy::{group_by_date, read_microscopy, MicroscopyRow};
pub use table::{write_constraints_table, write_noise_table};
