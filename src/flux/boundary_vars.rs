use super::reconstruction::{accumulate, porous_diff_coeff, project_darcy};
use super::{FaceFlux, FaceFluxData};
use crate::base::{Config, MAX_NVERTEX};
use crate::geometry::{BoundaryFace, Cell, FvElementGeometry};
use crate::material::{SpatialParams, VolumeState};
use nalgebra::Vector3;

/// Holds the flux data of a boundary face
///
/// The permeability and the diffusion coefficient are evaluated at the sub-control volume
/// owning the face; the normal vector points outward of the domain.
#[derive(Clone, Debug)]
pub struct BoundaryVars<'a> {
    /// Boundary face
    face: &'a BoundaryFace,

    /// Index of the face in the element geometry
    index: usize,

    /// Number of vertices of the element
    num_vertices: usize,

    /// Reconstructed data
    data: FaceFluxData,
}

impl<'a> BoundaryVars<'a> {
    /// Computes the flux data of a boundary face
    ///
    /// # Input
    ///
    /// * `config` -- the configuration
    /// * `params` -- the spatial parameters
    /// * `cell` -- the element
    /// * `geometry` -- the element geometry
    /// * `index` -- index of the face in `geometry.boundary_faces`
    /// * `states` -- volume states of all vertices of the element (in local order)
    ///
    /// # Panics
    ///
    /// This function will panic if `index` is out of range or `states` has fewer entries than the
    /// number of vertices of the element.
    pub fn new<P, S>(
        config: &Config,
        params: &P,
        cell: &Cell,
        geometry: &'a FvElementGeometry,
        index: usize,
        states: &[S],
    ) -> Self
    where
        P: SpatialParams + ?Sized,
        S: VolumeState,
    {
        let face = &geometry.boundary_faces[index];
        let scv = face.scv;
        let mut data = accumulate(config, &face.grad, &face.shape_value, geometry.num_vertices, states);

        if config.enable_gravity {
            let gravity = params.gravity();
            for p in 0..config.nphase {
                data.potential_grad[p] -= gravity * data.density_at_ip[p];
            }
        }

        let kk = params.intrinsic_permeability(cell, geometry, scv).tensor(config.ndim);
        project_darcy(&mut data, &kk, &face.normal);

        let state = &states[scv];
        for p in 0..config.nphase {
            if state.saturation(p) <= 0.0 {
                log::trace!(
                    "cell {}: phase {} is absent at boundary scv {}; porous diffusion coefficient set to zero",
                    cell.id,
                    p,
                    scv
                );
            }
            data.porous_diff_coeff[p] = porous_diff_coeff(state.porosity(), state.saturation(p), state.diff_coeff(p));
        }

        BoundaryVars {
            face,
            index,
            num_vertices: geometry.num_vertices,
            data,
        }
    }

    /// Computes the flux data of all boundary faces of an element
    pub fn all_faces<P, S>(
        config: &Config,
        params: &P,
        cell: &Cell,
        geometry: &'a FvElementGeometry,
        states: &[S],
    ) -> Vec<Self>
    where
        P: SpatialParams + ?Sized,
        S: VolumeState,
    {
        (0..geometry.boundary_faces.len())
            .map(|index| BoundaryVars::new(config, params, cell, geometry, index, states))
            .collect()
    }

    /// Returns the index of the face in the element geometry
    pub fn face_index(&self) -> usize {
        self.index
    }

    /// Returns the geometry of the face
    pub fn face(&self) -> &'a BoundaryFace {
        self.face
    }
}

impl<'a> FaceFlux for BoundaryVars<'a> {
    fn data(&self) -> &FaceFluxData {
        &self.data
    }
    fn adjacent_scvs(&self) -> (usize, usize) {
        (self.face.scv, self.face.scv)
    }
    fn normal(&self) -> &Vector3<f64> {
        &self.face.normal
    }
    fn area(&self) -> f64 {
        self.face.area
    }
    fn ip_global(&self) -> &Vector3<f64> {
        &self.face.ip_global
    }
    fn num_vertices(&self) -> usize {
        self.num_vertices
    }
    fn shape_gradients(&self) -> &[Vector3<f64>; MAX_NVERTEX] {
        &self.face.grad
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
