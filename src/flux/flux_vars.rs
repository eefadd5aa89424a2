use super::reconstruction::{accumulate, porous_diff_coeff, project_darcy, saturation_weighted_density};
use super::{FaceFlux, FaceFluxData};
use crate::base::{harmonic_mean, Config, GravityDensity, MAX_NVERTEX};
use crate::geometry::{Cell, FvElementGeometry, ScvFace};
use crate::material::{SpatialParams, VolumeState};
use nalgebra::Vector3;

/// Holds the flux data of an interior sub-control-volume face
///
/// The face separates the control volumes of the vertices `i` and `j` of the element.
/// All the vertices of the element contribute to the gradients.
#[derive(Clone, Debug)]
pub struct FluxVars<'a> {
    /// Element geometry
    geometry: &'a FvElementGeometry,

    /// Index of the face in the element geometry
    face: usize,

    /// Reconstructed data
    data: FaceFluxData,
}

impl<'a> FluxVars<'a> {
    /// Computes the flux data of an interior face
    ///
    /// # Input
    ///
    /// * `config` -- the configuration
    /// * `params` -- the spatial parameters
    /// * `cell` -- the element
    /// * `geometry` -- the element geometry
    /// * `face` -- index of the face in `geometry.scv_faces`
    /// * `states` -- volume states of all vertices of the element (in local order)
    ///
    /// # Panics
    ///
    /// This function will panic if `face` is out of range or `states` has fewer entries than the
    /// number of vertices of the element.
    pub fn new<P, S>(
        config: &Config,
        params: &P,
        cell: &Cell,
        geometry: &'a FvElementGeometry,
        face: usize,
        states: &[S],
    ) -> Self
    where
        P: SpatialParams + ?Sized,
        S: VolumeState,
    {
        let scvf = &geometry.scv_faces[face];
        let (i, j) = (scvf.i, scvf.j);
        let mut data = accumulate(config, &scvf.grad, &scvf.shape_value, geometry.num_vertices, states);

        // buoyancy
        if config.enable_gravity {
            let gravity = params.gravity();
            for p in 0..config.nphase {
                let rho = match config.gravity_density {
                    GravityDensity::Interpolated => data.density_at_ip[p],
                    GravityDensity::SaturationWeighted => saturation_weighted_density(&states[i], &states[j], p),
                };
                data.potential_grad[p] -= gravity * rho;
            }
        }

        // Darcy flux intensity
        let ki = params.intrinsic_permeability(cell, geometry, i);
        let kj = params.intrinsic_permeability(cell, geometry, j);
        let kk = ki.harmonic_mean(&kj, config.ndim);
        project_darcy(&mut data, &kk, &scvf.normal);

        // effective diffusion coefficient
        for p in 0..config.nphase {
            let (si, sj) = (&states[i], &states[j]);
            if si.saturation(p) <= 0.0 || sj.saturation(p) <= 0.0 {
                log::trace!(
                    "cell {}: phase {} is absent at scv {} or {}; porous diffusion coefficient set to zero",
                    cell.id,
                    p,
                    i,
                    j
                );
                data.porous_diff_coeff[p] = 0.0;
                continue;
            }
            let di = porous_diff_coeff(si.porosity(), si.saturation(p), si.diff_coeff(p));
            let dj = porous_diff_coeff(sj.porosity(), sj.saturation(p), sj.diff_coeff(p));
            data.porous_diff_coeff[p] = harmonic_mean(di, dj);
        }

        FluxVars { geometry, face, data }
    }

    /// Computes the flux data of all interior faces of an element
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
        (0..geometry.scv_faces.len())
            .map(|face| FluxVars::new(config, params, cell, geometry, face, states))
            .collect()
    }

    /// Returns the index of the face in the element geometry
    pub fn face_index(&self) -> usize {
        self.face
    }

    /// Returns the geometry of the face
    pub fn face(&self) -> &'a ScvFace {
        &self.geometry.scv_faces[self.face]
    }

    /// Returns the element geometry
    pub fn geometry(&self) -> &'a FvElementGeometry {
        self.geometry
    }
}

impl<'a> FaceFlux for FluxVars<'a> {
    fn data(&self) -> &FaceFluxData {
        &self.data
    }
    fn adjacent_scvs(&self) -> (usize, usize) {
        let scvf = self.face();
        (scvf.i, scvf.j)
    }
    fn normal(&self) -> &Vector3<f64> {
        &self.face().normal
    }
    fn area(&self) -> f64 {
        self.face().area
    }
    fn ip_global(&self) -> &Vector3<f64> {
        &self.face().ip_global
    }
    fn num_vertices(&self) -> usize {
        self.geometry.num_vertices
    }
    fn shape_gradients(&self) -> &[Vector3<f64>; MAX_NVERTEX] {
        &self.face().grad
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
