use crate::base::{PhaseState, MAX_NCOMPONENT, MAX_NPHASE};
use crate::StrError;
use serde::{Deserialize, Serialize};

/// Defines the secondary variables of one sub-control volume consumed by the flux reconstruction
///
/// Every quantity must be defined for every phase, including phases that are absent at the
/// vertex (saturation equal to zero); choosing such closure values is up to the implementer.
pub trait VolumeState {
    /// Returns the pressure of a phase
    fn pressure(&self, phase: usize) -> f64;

    /// Returns the mass density of a phase
    fn density(&self, phase: usize) -> f64;

    /// Returns the molar density of a phase
    fn molar_density(&self, phase: usize) -> f64;

    /// Returns the saturation of a phase
    fn saturation(&self, phase: usize) -> f64;

    /// Returns the porosity
    fn porosity(&self) -> f64;

    /// Returns the molecular diffusion coefficient of the minor component in a phase
    fn diff_coeff(&self, phase: usize) -> f64;

    /// Returns the temperature
    fn temperature(&self) -> f64;

    /// Returns the mass fraction of a component in a phase
    fn mass_fraction(&self, phase: usize, component: usize) -> f64;

    /// Returns the mole fraction of a component in a phase
    fn mole_fraction(&self, phase: usize, component: usize) -> f64;
}

/// Holds the secondary variables of a sub-control volume
///
/// This data is associated with a mesh vertex
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VolumeVars {
    /// Number of phases
    pub nphase: usize,

    /// Number of components
    pub ncomponent: usize,

    /// Phase presence at the vertex
    pub phase_state: PhaseState,

    /// Pressure of each phase
    pub pressure: [f64; MAX_NPHASE],

    /// Mass density of each phase
    pub density: [f64; MAX_NPHASE],

    /// Molar density of each phase
    pub molar_density: [f64; MAX_NPHASE],

    /// Saturation of each phase
    pub saturation: [f64; MAX_NPHASE],

    /// Molecular diffusion coefficient of each phase
    pub diff_coeff: [f64; MAX_NPHASE],

    /// Porosity ϕ
    pub porosity: f64,

    /// Temperature
    pub temperature: f64,

    /// Mass fraction of each component (column) in each phase (row)
    pub mass_fraction: [[f64; MAX_NCOMPONENT]; MAX_NPHASE],

    /// Mole fraction of each component (column) in each phase (row)
    pub mole_fraction: [[f64; MAX_NCOMPONENT]; MAX_NPHASE],
}

impl VolumeVars {
    /// Allocates a new instance with zeroed quantities (porosity = 1; all phases present)
    pub fn new(nphase: usize, ncomponent: usize) -> Result<Self, StrError> {
        if nphase < 1 || nphase > MAX_NPHASE {
            return Err("nphase must be in [1, MAX_NPHASE]");
        }
        if ncomponent < 1 || ncomponent > MAX_NCOMPONENT {
            return Err("ncomponent must be in [1, MAX_NCOMPONENT]");
        }
        Ok(VolumeVars {
            nphase,
            ncomponent,
            phase_state: PhaseState::TwoPhase,
            pressure: [0.0; MAX_NPHASE],
            density: [0.0; MAX_NPHASE],
            molar_density: [0.0; MAX_NPHASE],
            saturation: [0.0; MAX_NPHASE],
            diff_coeff: [0.0; MAX_NPHASE],
            porosity: 1.0,
            temperature: 0.0,
            mass_fraction: [[0.0; MAX_NCOMPONENT]; MAX_NPHASE],
            mole_fraction: [[0.0; MAX_NCOMPONENT]; MAX_NPHASE],
        })
    }

    /// Validates the data
    ///
    /// Returns a message describing the first inconsistency or None if all is OK.
    pub fn validate(&self) -> Option<String> {
        if self.nphase < 1 || self.nphase > MAX_NPHASE {
            return Some(format!("nphase = {} is invalid", self.nphase));
        }
        if self.ncomponent < 1 || self.ncomponent > MAX_NCOMPONENT {
            return Some(format!("ncomponent = {} is invalid", self.ncomponent));
        }
        if self.porosity <= 0.0 || self.porosity > 1.0 {
            return Some(format!("porosity = {:?} must be in (0, 1]", self.porosity));
        }
        for p in 0..self.nphase {
            if self.density[p] < 0.0 {
                return Some(format!("density of phase {} = {:?} must be ≥ 0", p, self.density[p]));
            }
            if self.molar_density[p] < 0.0 {
                return Some(format!(
                    "molar density of phase {} = {:?} must be ≥ 0",
                    p, self.molar_density[p]
                ));
            }
            if self.diff_coeff[p] < 0.0 {
                return Some(format!(
                    "diffusion coefficient of phase {} = {:?} must be ≥ 0",
                    p, self.diff_coeff[p]
                ));
            }
            if self.phase_state.is_present(p) != (self.saturation[p] > 0.0) {
                return Some(format!(
                    "saturation of phase {} = {:?} is inconsistent with the phase state {:?}",
                    p, self.saturation[p], self.phase_state
                ));
            }
        }
        None
    }
}

impl VolumeState for VolumeVars {
    fn pressure(&self, phase: usize) -> f64 {
        self.pressure[phase]
    }
    fn density(&self, phase: usize) -> f64 {
        self.density[phase]
    }
    fn molar_density(&self, phase: usize) -> f64 {
        self.molar_density[phase]
    }
    fn saturation(&self, phase: usize) -> f64 {
        self.saturation[phase]
    }
    fn porosity(&self) -> f64 {
        self.porosity
    }
    fn diff_coeff(&self, phase: usize) -> f64 {
        self.diff_coeff[phase]
    }
    fn temperature(&self) -> f64 {
        self.temperature
    }
    fn mass_fraction(&self, phase: usize, component: usize) -> f64 {
        self.mass_fraction[phase][component]
    }
    fn mole_fraction(&self, phase: usize, component: usize) -> f64 {
        self.mole_fraction[phase][component]
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
