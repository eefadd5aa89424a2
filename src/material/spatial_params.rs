use super::VolumeState;
use crate::base::{harmonic_mean, MAX_NDIM};
use crate::flux::FaceFlux;
use crate::geometry::{Cell, FvElementGeometry};
use nalgebra::{Matrix3, Vector3};

/// Holds the intrinsic permeability at a sub-control volume
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Permeability {
    /// Scalar permeability k (the tensor is k I)
    Isotropic(f64),

    /// Diagonal entries of the permeability tensor
    Diagonal([f64; MAX_NDIM]),

    /// Full permeability tensor
    Tensor(Matrix3<f64>),
}

impl Permeability {
    /// Returns the permeability tensor restricted to the first `ndim` rows and columns
    ///
    /// The remaining entries are zero.
    pub fn tensor(&self, ndim: usize) -> Matrix3<f64> {
        let mut kk = Matrix3::zeros();
        for a in 0..usize::min(ndim, MAX_NDIM) {
            match self {
                Permeability::Isotropic(k) => kk[(a, a)] = *k,
                Permeability::Diagonal(d) => kk[(a, a)] = d[a],
                Permeability::Tensor(t) => {
                    for b in 0..usize::min(ndim, MAX_NDIM) {
                        kk[(a, b)] = t[(a, b)];
                    }
                }
            }
        }
        kk
    }

    /// Returns the entry-wise harmonic mean of two permeability tensors
    ///
    /// Entries with opposite signs (e.g., off-diagonal terms of rotated anisotropy) yield zero.
    pub fn harmonic_mean(&self, other: &Permeability, ndim: usize) -> Matrix3<f64> {
        let ki = self.tensor(ndim);
        let kj = other.tensor(ndim);
        Matrix3::from_fn(|a, b| harmonic_mean(ki[(a, b)], kj[(a, b)]))
    }
}

/// Defines the spatially dependent parameters of the porous medium
pub trait SpatialParams {
    /// Returns the intrinsic permeability at a sub-control volume of an element
    fn intrinsic_permeability(&self, cell: &Cell, geometry: &FvElementGeometry, scv: usize) -> Permeability;

    /// Returns the gravitational acceleration vector
    fn gravity(&self) -> Vector3<f64>;
}

/// Defines the spatially dependent parameters required by non-isothermal models
pub trait SpatialParamsNi: SpatialParams {
    /// Returns the conductive heat flux vector through the solid matrix and the fluids at a face
    ///
    /// # Input
    ///
    /// * `flux` -- the (already computed) isothermal flux data of the face
    /// * `states` -- volume states of all vertices of the element
    /// * `temperature_grad` -- temperature gradient at the integration point
    /// * `cell` -- the element
    /// * `geometry` -- the element geometry
    fn matrix_heat_flux<F, S>(
        &self,
        flux: &F,
        states: &[S],
        temperature_grad: &Vector3<f64>,
        cell: &Cell,
        geometry: &FvElementGeometry,
    ) -> Vector3<f64>
    where
        F: FaceFlux,
        S: VolumeState;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
