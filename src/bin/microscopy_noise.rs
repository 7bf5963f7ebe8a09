//! Bootstrap the noise, fold-change and skewness of the single-cell
//! microscopy measurements and write the summary table.

use anyhow::Result;
use log::info;

use promoter_noise::io::{group_by_date, read_microscopy, write_noise_table};
use promoter_noise::pipeline::noise;
use promoter_noise::BootstrapConfig;

const INPUT: &str = "data/csv_microscopy/single_cell_microscopy_data.csv";
const OUTPUT: &str = "data/csv_microscopy/microscopy_noise_bootstrap.csv";

fn main() -> Result<()> {
    env_logger::init();

    let cfg = BootstrapConfig::default();
    info!("reading {INPUT}");
    let rows = read_microscopy(INPUT)?;
    let groups = group_by_date(rows);
    info!("{} experiment dates", groups.len());

    let records = noise::run(&groups, &cfg)?;
    write_noise_table(OUTPUT, &records)?;
    info!("wrote {} rows to {OUTPUT}", records.len());
    Ok(())
}
