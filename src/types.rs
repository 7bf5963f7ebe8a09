//! Shared types: operators, promoter states and linear-algebra aliases.

use std::fmt;

use nalgebra::{DMatrix, DVector, SMatrix};
use serde::{Deserialize, Serialize};

use crate::constants;

/// Dynamically sized matrix over f64, used for the moment-dynamics
/// generator and the division map.
pub type Mat = DMatrix<f64>;

/// Dynamically sized vector over f64, used for the stacked moment vector.
pub type Vec64 = DVector<f64>;

/// 3x3 matrix for the promoter-switching generator.
pub type Matrix3 = SMatrix<f64, 3, 3>;

/// Number of promoter occupancy states in the kinetic model.
pub const N_PROMOTER_STATES: usize = 3;

/// Promoter occupancy state of the three-state kinetic model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromoterState {
    /// RNAP bound, transcribing at rate rm.
    Active = 0,
    /// Empty promoter.
    Inactive = 1,
    /// Repressor bound.
    Bound = 2,
}

impl PromoterState {
    /// All states in stacking order.
    pub const ALL: [PromoterState; N_PROMOTER_STATES] = [
        PromoterState::Active,
        PromoterState::Inactive,
        PromoterState::Bound,
    ];
}

/// Operator sequence the repressor binds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Strongest operator, Δε_r = -15.7 k_BT.
    O1,
    /// Intermediate operator, Δε_r = -13.4 k_BT.
    O2,
    /// Weakest operator, Δε_r = -9.85 k_BT.
    O3,
}

impl Operator {
    /// All operators in the experimental design.
    pub const ALL: [Operator; 3] = [Operator::O1, Operator::O2, Operator::O3];

    /// Repressor binding energy of this operator (k_BT).
    pub fn binding_energy(self) -> f64 {
        match self {
            Operator::O1 => constants::EP_R_O1,
            Operator::O2 => constants::EP_R_O2,
            Operator::O3 => constants::EP_R_O3,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::O1 => write!(f, "O1"),
            Operator::O2 => write!(f, "O2"),
            Operator::O3 => write!(f, "O3"),
        }
    }
}
