//! Bootstrap estimation of expression noise from microscopy data.
//!
//! For every experiment date, the autofluorescence background is bootstrapped
//! from the `auto` control strain and subtracted cell by cell
//! (intensity − background · area). The corrected single-cell intensities of
//! the unrepressed ΔlacI strain and of every regulated strain/inducer group
//! are then resampled to produce bootstrap distributions of the mean,
//! standard deviation and skewness, from which fold-change and noise
//! (std/mean) replicates follow. Each statistic is summarized by its sample
//! median and the HPD band at each reporting percentile.
//!
//! Replicate pairing matters: corrected-intensity replicate i is computed
//! against autofluorescence replicate i, and fold-change pairs regulated
//! replicates against ΔlacI replicates, so the background uncertainty
//! propagates into every downstream band.

use std::collections::BTreeMap;

use anyhow::{bail, Result};
use log::{debug, info};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::Serialize;

use crate::config::BootstrapConfig;
use crate::io::microscopy::MicroscopyRow;
use crate::statistics::{
    bootstrap_estimate, counter_rng_seed, hpd, mean, median, resample_indices_into, sample_std,
    skewness,
};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// One row of the bootstrap noise table.
#[derive(Debug, Clone, Serialize)]
pub struct NoiseRecord {
    /// Experiment date.
    pub date: u32,
    /// Inducer concentration (µM); empty for the ΔlacI strain.
    #[serde(rename = "IPTG_uM")]
    pub iptg_um: Option<f64>,
    /// Operator of the strain.
    pub operator: String,
    /// Repressor binding energy (k_BT).
    pub binding_energy: f64,
    /// Mean repressor copy number.
    pub repressor: f64,
    /// Probability mass of the HPD band on this row.
    pub percentile: f64,
    /// Median bootstrap fold-change; empty for the ΔlacI strain.
    pub fold_change: Option<f64>,
    /// Lower HPD bound of the fold-change.
    pub fold_change_lower: Option<f64>,
    /// Upper HPD bound of the fold-change.
    pub fold_change_upper: Option<f64>,
    /// Median bootstrap noise (std/mean).
    pub noise: f64,
    /// Lower HPD bound of the noise.
    pub noise_lower: f64,
    /// Upper HPD bound of the noise.
    pub noise_upper: f64,
    /// Median bootstrap skewness.
    pub skewness: f64,
    /// Lower HPD bound of the skewness.
    pub skewness_lower: f64,
    /// Upper HPD bound of the skewness.
    pub skewness_upper: f64,
}

/// Bootstrap replicates of the descriptive statistics of one strain group.
struct GroupReplicates {
    means: Vec<f64>,
    noise: Vec<f64>,
    skews: Vec<f64>,
}

/// Run the noise bootstrap over a whole microscopy dataset grouped by date.
///
/// Dates are independent and run in parallel; each derives its own RNG
/// stream from the base seed, so the output does not depend on scheduling.
pub fn run(
    groups: &BTreeMap<u32, Vec<MicroscopyRow>>,
    cfg: &BootstrapConfig,
) -> Result<Vec<NoiseRecord>> {
    let dates: Vec<(usize, u32, &Vec<MicroscopyRow>)> = groups
        .iter()
        .enumerate()
        .map(|(i, (&date, rows))| (i, date, rows))
        .collect();

    #[cfg(feature = "parallel")]
    let per_date: Vec<Result<Vec<NoiseRecord>>> = crate::thread_pool::install(|| {
        dates
            .par_iter()
            .map(|&(i, date, rows)| bootstrap_date(date, rows, cfg, i as u64))
            .collect()
    });

    #[cfg(not(feature = "parallel"))]
    let per_date: Vec<Result<Vec<NoiseRecord>>> = dates
        .iter()
        .map(|&(i, date, rows)| bootstrap_date(date, rows, cfg, i as u64))
        .collect();

    let mut records = Vec::new();
    for result in per_date {
        records.extend(result?);
    }
    Ok(records)
}

/// Bootstrap all strain groups of a single experiment date.
fn bootstrap_date(
    date: u32,
    rows: &[MicroscopyRow],
    cfg: &BootstrapConfig,
    task: u64,
) -> Result<Vec<NoiseRecord>> {
    info!("bootstrapping date {date}");
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(counter_rng_seed(cfg.seed, task));

    // Autofluorescence background per pixel
    let auto: Vec<f64> = rows
        .iter()
        .filter(|r| r.is_auto())
        .map(|r| r.mean_intensity)
        .collect();
    if auto.is_empty() {
        bail!("date {date} has no autofluorescence (auto) cells");
    }
    debug!("date {date}: {} autofluorescence cells", auto.len());
    let auto_means = bootstrap_estimate(&auto, mean, cfg.n_estimates, &mut rng);

    // Unrepressed ΔlacI reference
    let delta: Vec<&MicroscopyRow> = rows.iter().filter(|r| r.is_delta()).collect();
    if delta.is_empty() {
        bail!("date {date} has no ΔlacI (delta) cells");
    }
    let delta_reps = bootstrap_group(&delta, &auto_means, &mut rng);

    let mut records = Vec::new();
    let strain = delta[0];
    for &per in &cfg.percentiles {
        let (noise_lo, noise_hi) = hpd(&delta_reps.noise, per);
        let (skew_lo, skew_hi) = hpd(&delta_reps.skews, per);
        records.push(NoiseRecord {
            date,
            iptg_um: None,
            operator: strain.operator.clone(),
            binding_energy: strain.binding_energy,
            repressor: 0.0,
            percentile: per,
            fold_change: None,
            fold_change_lower: None,
            fold_change_upper: None,
            noise: median(&delta_reps.noise),
            noise_lower: noise_lo,
            noise_upper: noise_hi,
            skewness: median(&delta_reps.skews),
            skewness_lower: skew_lo,
            skewness_upper: skew_hi,
        });
    }

    // Regulated strains, grouped by inducer concentration
    let mut by_inducer: BTreeMap<u64, Vec<&MicroscopyRow>> = BTreeMap::new();
    for row in rows.iter().filter(|r| !r.is_auto() && !r.is_delta()) {
        by_inducer.entry(row.iptg_um.to_bits()).or_default().push(row);
    }

    for group in by_inducer.values() {
        let strain = group[0];
        info!("bootstrapping date {date}, {} µM", strain.iptg_um);
        let reps = bootstrap_group(group, &auto_means, &mut rng);

        // Drop replicates whose corrected mean went negative before taking
        // ratios; pair the survivors against the leading ΔlacI replicates.
        let kept: Vec<usize> = (0..reps.means.len())
            .filter(|&i| reps.means[i] >= 0.0)
            .collect();
        let fold_change: Vec<f64> = kept
            .iter()
            .enumerate()
            .map(|(k, &i)| reps.means[i] / delta_reps.means[k])
            .collect();
        let noise: Vec<f64> = kept.iter().map(|&i| reps.noise[i]).collect();
        let skews: Vec<f64> = kept.iter().map(|&i| reps.skews[i]).collect();
        if fold_change.is_empty() {
            bail!(
                "date {date}, {} µM: every bootstrap mean was negative",
                strain.iptg_um
            );
        }

        for &per in &cfg.percentiles {
            let (fc_lo, fc_hi) = hpd(&fold_change, per);
            let (noise_lo, noise_hi) = hpd(&noise, per);
            let (skew_lo, skew_hi) = hpd(&skews, per);
            records.push(NoiseRecord {
                date,
                iptg_um: Some(strain.iptg_um),
                operator: strain.operator.clone(),
                binding_energy: strain.binding_energy,
                repressor: strain.repressor,
                percentile: per,
                fold_change: Some(median(&fold_change)),
                fold_change_lower: Some(fc_lo),
                fold_change_upper: Some(fc_hi),
                noise: median(&noise),
                noise_lower: noise_lo,
                noise_upper: noise_hi,
                skewness: median(&skews),
                skewness_lower: skew_lo,
                skewness_upper: skew_hi,
            });
        }
    }

    Ok(records)
}

/// Bootstrap the corrected-intensity statistics of one strain group.
///
/// Replicate i resamples the cells of the group and corrects them with
/// autofluorescence replicate i, so the background uncertainty travels with
/// each replicate.
fn bootstrap_group(
    rows: &[&MicroscopyRow],
    auto_means: &[f64],
    rng: &mut Xoshiro256PlusPlus,
) -> GroupReplicates {
    let n = rows.len();
    let intensity: Vec<f64> = rows.iter().map(|r| r.intensity).collect();
    let area: Vec<f64> = rows.iter().map(|r| r.area).collect();

    let n_estimates = auto_means.len();
    let mut indices = vec![0usize; n];
    let mut corrected = vec![0.0f64; n];
    let mut means = Vec::with_capacity(n_estimates);
    let mut noise = Vec::with_capacity(n_estimates);
    let mut skews = Vec::with_capacity(n_estimates);

    for &background in auto_means {
        resample_indices_into(n, rng, &mut indices);
        for (slot, &idx) in corrected.iter_mut().zip(&indices) {
            *slot = intensity[idx] - background * area[idx];
        }
        let m = mean(&corrected);
        means.push(m);
        noise.push(sample_std(&corrected) / m);
        skews.push(skewness(&corrected));
    }

    GroupReplicates {
        means,
        noise,
        skews,
    }
}
