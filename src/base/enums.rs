use super::{GAS_PHASE, LIQUID_PHASE};
use serde::{Deserialize, Serialize};

/// Defines the phase-presence state of a vertex
///
/// The state is chosen by the primary-variable switching of the nonlinear solver and
/// is owned by the volume variables. The flux reconstruction never reads it.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
pub enum PhaseState {
    /// Only the liquid phase is present
    LiquidOnly,

    /// Only the gas phase is present
    GasOnly,

    /// Both phases are present
    TwoPhase,
}

impl PhaseState {
    /// Returns whether a phase is present in this state
    ///
    /// Phases with index ≥ 2 are considered present only in the two-phase state.
    pub fn is_present(&self, phase: usize) -> bool {
        match self {
            PhaseState::LiquidOnly => phase == LIQUID_PHASE,
            PhaseState::GasOnly => phase == GAS_PHASE,
            PhaseState::TwoPhase => true,
        }
    }
}

/// Defines how the phase density entering the buoyancy term of an interior face is computed
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum GravityDensity {
    /// Density interpolated at the integration point with the shape functions
    Interpolated,

    /// Mean of the densities at the two adjacent SCVs weighted by `min(S/1e-5, 0.5)`
    ///
    /// This keeps the buoyancy term bounded when the phase vanishes on one side of the face.
    /// Boundary faces always use the interpolated density.
    SaturationWeighted,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
