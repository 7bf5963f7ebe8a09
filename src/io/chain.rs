//! Loading of MCMC chains of the unregulated-promoter kinetics.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

/// One sample of the flattened MCMC chain.
///
/// The rates are in units of the mRNA degradation rate; `lnprob` is the
/// log-posterior of the sample.
#[derive(Debug, Clone, Deserialize)]
struct ChainRow {
    kp_on: f64,
    kp_off: f64,
    rm: f64,
    lnprob: f64,
}

/// Maximum a posteriori estimate of the promoter kinetics, in units of the
/// mRNA degradation rate.
#[derive(Debug, Clone, Copy)]
pub struct MapEstimate {
    /// RNAP binding rate.
    pub kp_on: f64,
    /// RNAP unbinding rate.
    pub kp_off: f64,
    /// Transcription rate.
    pub rm: f64,
}

/// Read a flattened MCMC chain from CSV and return the sample with the
/// highest log-posterior.
pub fn read_map_estimate<P: AsRef<Path>>(path: P) -> Result<MapEstimate> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening MCMC chain {}", path.display()))?;

    let mut best: Option<ChainRow> = None;
    for (i, record) in reader.deserialize().enumerate() {
        let row: ChainRow = record.with_context(|| format!("parsing chain row {}", i + 1))?;
        match &best {
            Some(b) if b.lnprob >= row.lnprob => {}
            _ => best = Some(row),
        }
    }

    match best {
        Some(row) => Ok(MapEstimate {
            kp_on: row.kp_on,
            kp_off: row.kp_off,
            rm: row.rm,
        }),
        None => bail!("MCMC chain {} holds no samples", path.display()),
    }
}
