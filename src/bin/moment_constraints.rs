//! Compute the time-averaged distribution moments of every experimental
//! condition from the moment-dynamics model and write the constraints table.

use anyhow::Result;
use log::info;

use promoter_noise::io::{read_map_estimate, write_constraints_table};
use promoter_noise::model::{ModelParams, MomentSet};
use promoter_noise::pipeline::constraints;
use promoter_noise::CycleConfig;

const CHAIN: &str = "data/mcmc/lacUV5_constitutive_mRNA_double_expo.csv";
const OUTPUT: &str = "data/csv_maxEnt_dist/maxent_multi_prom_constraints.csv";

fn main() -> Result<()> {
    env_logger::init();

    info!("reading MCMC chain {CHAIN}");
    let map = read_map_estimate(CHAIN)?;
    let params = ModelParams::from_map_estimate(map.kp_on, map.kp_off, map.rm);

    let moments = MomentSet::up_to(3);
    let cfg = CycleConfig::default();
    let grid = constraints::condition_grid();
    info!("{} conditions", grid.len());

    let records = constraints::compute_all(&grid, &params, &moments, &cfg);
    write_constraints_table(OUTPUT, &moments, &records)?;
    info!("wrote {} rows to {OUTPUT}", records.len());
    Ok(())
}
