//! Kinetic rates of the three-state promoter model.

use crate::constants;
use crate::model::mwc::p_act;

/// Rates of one promoter phase of the kinetic model (all in 1/s).
///
/// A cell cycle uses two instances: the single-promoter phase and the
/// double-promoter phase where `rm` doubles with gene copy number. During the
/// cell cycle `gp` is zero (protein is diluted only through division); a
/// nonzero `gp` is used when relaxing to the quasi-steady initial condition.
#[derive(Debug, Clone, Copy)]
pub struct RateParams {
    /// Repressor binding rate.
    pub kr_on: f64,
    /// Repressor unbinding rate.
    pub kr_off: f64,
    /// RNAP binding rate.
    pub kp_on: f64,
    /// RNAP unbinding rate.
    pub kp_off: f64,
    /// Transcription rate in the RNAP-bound state.
    pub rm: f64,
    /// mRNA degradation rate.
    pub gm: f64,
    /// Translation rate per mRNA.
    pub rp: f64,
    /// Protein degradation rate.
    pub gp: f64,
}

/// Model parameters shared by every experimental condition.
///
/// Promoter kinetics (`kp_on`, `kp_off`, `rm`) come from the MCMC inference
/// of the unregulated promoter, already scaled to absolute units by `gm`.
/// The rest are literature constants.
#[derive(Debug, Clone, Copy)]
pub struct ModelParams {
    /// RNAP binding rate (1/s).
    pub kp_on: f64,
    /// RNAP unbinding rate (1/s).
    pub kp_off: f64,
    /// Transcription rate (1/s).
    pub rm: f64,
    /// mRNA degradation rate (1/s).
    pub gm: f64,
    /// Translation rate per mRNA (1/s).
    pub rp: f64,
    /// Diffusion-limited repressor binding rate constant (1/(molecule·s)).
    pub k0: f64,
    /// Active-repressor inducer dissociation constant (µM).
    pub ka: f64,
    /// Inactive-repressor inducer dissociation constant (µM).
    pub ki: f64,
    /// Active/inactive repressor energy difference (k_BT).
    pub ep_ai: f64,
    /// Number of non-specific binding sites.
    pub nns: f64,
    /// Cell volume (fL).
    pub vcell: f64,
}

impl ModelParams {
    /// Build model parameters from a MAP estimate of the promoter kinetics.
    ///
    /// The chain samples `(kp_on, kp_off, rm)` are in units of the mRNA
    /// degradation rate and are converted to 1/s here.
    pub fn from_map_estimate(kp_on: f64, kp_off: f64, rm: f64) -> Self {
        let gm = constants::GM;
        Self {
            kp_on: kp_on * gm,
            kp_off: kp_off * gm,
            rm: rm * gm,
            gm,
            rp: constants::RP,
            k0: constants::K0,
            ka: constants::KA,
            ki: constants::KI,
            ep_ai: constants::EP_AI,
            nns: constants::NNS,
            vcell: constants::VCELL,
        }
    }

    /// Repressor binding rate at a given repressor copy number and inducer
    /// concentration: kr_on = k0 · R · p_act(c).
    pub fn repressor_on_rate(&self, repressors: f64, inducer_um: f64) -> f64 {
        self.k0 * repressors * p_act(inducer_um, self.ka, self.ki, self.ep_ai)
    }

    /// Repressor unbinding rate from the statistical-mechanics binding
    /// energy.
    ///
    /// Detailed balance against the thermodynamic occupancy of the operator
    /// gives kr_off = k0 · Nns · e^(βΔε_r) / Vcell, with the factor
    /// (1 + kp_on/kp_off) correcting for the RNAP competition baked into the
    /// measured binding energies.
    pub fn repressor_off_rate(&self, binding_energy: f64) -> f64 {
        self.k0 * self.nns * binding_energy.exp() / self.vcell
            * (1.0 + self.kp_on / self.kp_off)
    }

    /// Rates of the single-promoter cell-cycle phase.
    pub fn single_promoter_rates(&self, kr_on: f64, kr_off: f64) -> RateParams {
        RateParams {
            kr_on,
            kr_off,
            kp_on: self.kp_on,
            kp_off: self.kp_off,
            rm: self.rm,
            gm: self.gm,
            rp: self.rp,
            gp: 0.0,
        }
    }

    /// Rates of the double-promoter cell-cycle phase (transcription doubles
    /// with gene copy number).
    pub fn double_promoter_rates(&self, kr_on: f64, kr_off: f64) -> RateParams {
        RateParams {
            rm: 2.0 * self.rm,
            ..self.single_promoter_rates(kr_on, kr_off)
        }
    }

    /// Rates used to relax to the quasi-steady initial condition.
    ///
    /// Slow protein turnover (gp = 1/h, rp = 500·gp) gives finite protein
    /// moments to hand to the cyclic integration.
    pub fn relaxation_rates(&self, kr_on: f64, kr_off: f64) -> RateParams {
        let gp_init = 1.0 / (60.0 * 60.0);
        RateParams {
            rp: 500.0 * gp_init,
            gp: gp_init,
            ..self.single_promoter_rates(kr_on, kr_off)
        }
    }
}

impl Default for ModelParams {
    /// MAP promoter kinetics of the lacUV5 constitutive chain.
    fn default() -> Self {
        Self::from_map_estimate(4.3, 18.7, 103.8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repressor_on_rate_scales_with_copy_number() {
        let p = ModelParams::default();
        let r1 = p.repressor_on_rate(22.0, 0.0);
        let r2 = p.repressor_on_rate(1740.0, 0.0);
        assert!((r2 / r1 - 1740.0 / 22.0).abs() < 1e-9);
    }

    #[test]
    fn test_repressor_on_rate_decreases_with_inducer() {
        let p = ModelParams::default();
        assert!(p.repressor_on_rate(260.0, 5000.0) < p.repressor_on_rate(260.0, 0.0));
    }

    #[test]
    fn test_stronger_operators_unbind_slower() {
        let p = ModelParams::default();
        let o1 = p.repressor_off_rate(crate::constants::EP_R_O1);
        let o3 = p.repressor_off_rate(crate::constants::EP_R_O3);
        assert!(o1 < o3);
        // Unbinding from O1 happens on the scale of minutes, not hours
        assert!(o1 > 1e-5 && o1 < 1e-1);
    }

    #[test]
    fn test_double_promoter_doubles_transcription_only() {
        let p = ModelParams::default();
        let s = p.single_promoter_rates(0.1, 0.2);
        let d = p.double_promoter_rates(0.1, 0.2);
        assert!((d.rm - 2.0 * s.rm).abs() < 1e-12);
        assert!((d.gm - s.gm).abs() < 1e-12);
        assert!((d.rp - s.rp).abs() < 1e-12);
    }
}
