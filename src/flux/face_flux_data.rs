use crate::base::MAX_NPHASE;
use nalgebra::Vector3;
use std::fmt;

/// Holds the reconstructed gradients and the Darcy and diffusive flux intensities at a face
///
/// The data is computed once when the face flux is created and is read-only afterwards.
/// Only the first `nphase` entries of each array are meaningful.
#[derive(Clone, Debug, PartialEq)]
pub struct FaceFluxData {
    /// Number of phases
    pub(crate) nphase: usize,

    /// Pressure gradient corrected for buoyancy (∇p - ρ g)
    pub(crate) potential_grad: [Vector3<f64>; MAX_NPHASE],

    /// Gradient of the mass fraction of the minor component
    pub(crate) concentration_grad: [Vector3<f64>; MAX_NPHASE],

    /// Gradient of the mole fraction of the minor component
    pub(crate) molar_conc_grad: [Vector3<f64>; MAX_NPHASE],

    /// Mass density at the integration point
    pub(crate) density_at_ip: [f64; MAX_NPHASE],

    /// Molar density at the integration point
    pub(crate) molar_density_at_ip: [f64; MAX_NPHASE],

    /// Pressure at the integration point
    pub(crate) pressure_at_ip: [f64; MAX_NPHASE],

    /// Permeability times the potential gradient (K · (∇p - ρ g))
    pub(crate) kmvp: [Vector3<f64>; MAX_NPHASE],

    /// Darcy flux intensity: -(K · (∇p - ρ g)) · n
    pub(crate) kmvp_normal: [f64; MAX_NPHASE],

    /// Effective diffusion coefficient of the porous medium (ϕ S τ D)
    pub(crate) porous_diff_coeff: [f64; MAX_NPHASE],
}

impl FaceFluxData {
    /// Allocates a new instance with zeroed values
    pub(crate) fn new(nphase: usize) -> Self {
        FaceFluxData {
            nphase,
            potential_grad: [Vector3::zeros(); MAX_NPHASE],
            concentration_grad: [Vector3::zeros(); MAX_NPHASE],
            molar_conc_grad: [Vector3::zeros(); MAX_NPHASE],
            density_at_ip: [0.0; MAX_NPHASE],
            molar_density_at_ip: [0.0; MAX_NPHASE],
            pressure_at_ip: [0.0; MAX_NPHASE],
            kmvp: [Vector3::zeros(); MAX_NPHASE],
            kmvp_normal: [0.0; MAX_NPHASE],
            porous_diff_coeff: [0.0; MAX_NPHASE],
        }
    }

    /// Returns the number of phases
    pub fn nphase(&self) -> usize {
        self.nphase
    }

    /// Returns the pressure gradient corrected for buoyancy
    pub fn potential_grad(&self, phase: usize) -> &Vector3<f64> {
        &self.potential_grad[phase]
    }

    /// Returns the gradient of the mass fraction of the minor component of a phase
    pub fn concentration_grad(&self, phase: usize) -> &Vector3<f64> {
        &self.concentration_grad[phase]
    }

    /// Returns the gradient of the mole fraction of the minor component of a phase
    pub fn molar_conc_grad(&self, phase: usize) -> &Vector3<f64> {
        &self.molar_conc_grad[phase]
    }

    /// Returns the mass density at the integration point
    pub fn density_at_ip(&self, phase: usize) -> f64 {
        self.density_at_ip[phase]
    }

    /// Returns the molar density at the integration point
    pub fn molar_density_at_ip(&self, phase: usize) -> f64 {
        self.molar_density_at_ip[phase]
    }

    /// Returns the pressure at the integration point
    pub fn pressure_at_ip(&self, phase: usize) -> f64 {
        self.pressure_at_ip[phase]
    }

    /// Returns the permeability times the potential gradient
    pub fn kmvp(&self, phase: usize) -> &Vector3<f64> {
        &self.kmvp[phase]
    }

    /// Returns the Darcy flux intensity -(K · (∇p - ρ g)) · n
    ///
    /// A positive value means that the potential decreases along the normal.
    pub fn kmvp_normal(&self, phase: usize) -> f64 {
        self.kmvp_normal[phase]
    }

    /// Returns the effective diffusion coefficient of the porous medium
    pub fn porous_diff_coeff(&self, phase: usize) -> f64 {
        self.porous_diff_coeff[phase]
    }
}

impl fmt::Display for FaceFluxData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for p in 0..usize::min(self.nphase, MAX_NPHASE) {
            let (g, c, m) = (
                &self.potential_grad[p],
                &self.concentration_grad[p],
                &self.molar_conc_grad[p],
            );
            write!(f, "phase {}\n", p)?;
            write!(f, "  potential_grad = [{:?}, {:?}, {:?}]\n", g[0], g[1], g[2])?;
            write!(f, "  concentration_grad = [{:?}, {:?}, {:?}]\n", c[0], c[1], c[2])?;
            write!(f, "  molar_conc_grad = [{:?}, {:?}, {:?}]\n", m[0], m[1], m[2])?;
            write!(f, "  density_at_ip = {:?}\n", self.density_at_ip[p])?;
            write!(f, "  molar_density_at_ip = {:?}\n", self.molar_density_at_ip[p])?;
            write!(f, "  pressure_at_ip = {:?}\n", self.pressure_at_ip[p])?;
            write!(f, "  kmvp_normal = {:?}\n", self.kmvp_normal[p])?;
            write!(f, "  porous_diff_coeff = {:?}\n", self.porous_diff_coeff[p])?;
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
