//! Monod-Wyman-Changeux allostery of the repressor.

/// Probability that a repressor is in its active (DNA-binding) conformation
/// at inducer concentration `c`.
///
/// The repressor has two inducer binding sites. With Ka and Ki the inducer
/// dissociation constants of the active and inactive conformations and ε_AI
/// the energy difference between them:
///
/// p_act = (1 + c/Ka)² / [(1 + c/Ka)² + e^(-ε_AI) (1 + c/Ki)²]
///
/// # Arguments
///
/// * `c` - Inducer concentration (µM)
/// * `ka` - Active-state dissociation constant (µM)
/// * `ki` - Inactive-state dissociation constant (µM)
/// * `ep_ai` - Active/inactive energy difference (k_BT)
///
/// # Returns
///
/// The active-state probability in (0, 1).
pub fn p_act(c: f64, ka: f64, ki: f64, ep_ai: f64) -> f64 {
    let active = (1.0 + c / ka).powi(2);
    let inactive = (1.0 + c / ki).powi(2);
    active / (active + (-ep_ai).exp() * inactive)
}
