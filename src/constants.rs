//! Physical constants and experimental design values.
//!
//! All energies are in units of the thermal energy k_BT and all rates in
//! inverse seconds unless noted otherwise. The values come from the
//! simple-repression literature and from the MCMC inference of the
//! unregulated-promoter kinetics.

/// Repressor binding energy of the O1 operator (k_BT).
pub const EP_R_O1: f64 = -15.7;

/// Repressor binding energy of the O2 operator (k_BT).
pub const EP_R_O2: f64 = -13.4;

/// Repressor binding energy of the O3 operator (k_BT).
pub const EP_R_O3: f64 = -9.85;

/// Number of non-specific binding sites on the chromosome.
pub const NNS: f64 = 4.6e6;

/// Free energy difference between the active and inactive repressor
/// conformations (k_BT).
pub const EP_AI: f64 = 0.35;

/// Inducer dissociation constant of the active repressor (µM).
pub const KA: f64 = 270.0;

/// Inducer dissociation constant of the inactive repressor (µM).
pub const KI: f64 = 5.5;

/// mRNA degradation rate (1/s), a 3 minute lifetime.
pub const GM: f64 = 1.0 / (3.0 * 60.0);

/// Diffusion-limited repressor binding rate constant (1/(molecule·s)).
pub const K0: f64 = 2.7e-3;

/// Cell volume (fL).
pub const VCELL: f64 = 2.15;

/// Translation rate per mRNA (1/s), inferred from the protein/mRNA
/// moment matching of the unregulated promoter.
pub const RP: f64 = 0.0965084635096711;

/// Percentiles reported for every bootstrap summary band.
pub const PERCENTILES: [f64; 9] = [0.01, 0.05, 0.10, 0.25, 0.50, 0.75, 0.90, 0.95, 0.99];

/// Repressor copy numbers of the strains in the experimental design.
/// 0 is the ΔlacI strain, the rest are HG104, RBS1027 and RBS1L.
pub const STRAIN_REPRESSORS: [f64; 4] = [0.0, 22.0, 260.0, 1740.0];

/// Inducer (IPTG) concentrations used experimentally (µM).
pub const INDUCER_EXPERIMENTAL: [f64; 12] = [
    0.0, 0.1, 5.0, 10.0, 25.0, 50.0, 75.0, 100.0, 250.0, 500.0, 1000.0, 5000.0,
];

/// Full inducer concentration grid for theoretical predictions (µM).
///
/// 49 log-spaced points between 0.1 and 5000 µM plus zero, merged with the
/// experimental concentrations, sorted and deduplicated.
pub fn inducer_grid() -> Vec<f64> {
    let n = 49;
    let (lo, hi) = (-1.0_f64, 5000.0_f64.log10());
    let mut grid: Vec<f64> = (0..n)
        .map(|i| 10.0_f64.powf(lo + (hi - lo) * i as f64 / (n - 1) as f64))
        .collect();
    grid.push(0.0);
    grid.extend_from_slice(&INDUCER_EXPERIMENTAL);
    grid.sort_by(|a, b| a.total_cmp(b));
    grid.dedup();
    grid
}
