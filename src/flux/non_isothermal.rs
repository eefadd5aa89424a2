use super::{scalar_gradient, BoundaryVars, FaceFlux, FaceFluxData, FluxVars};
use crate::base::{Config, MAX_NVERTEX};
use crate::geometry::{Cell, FvElementGeometry};
use crate::material::{SpatialParamsNi, VolumeState};
use nalgebra::Vector3;

/// Extends a face flux with the temperature gradient and the conductive heat flux
///
/// The isothermal data is computed by the wrapped face flux and is not modified.
#[derive(Clone, Debug)]
pub struct NonIsothermal<F> {
    /// Isothermal face flux
    base: F,

    /// Temperature gradient at the integration point
    temperature_grad: Vector3<f64>,

    /// Conductive heat flux projected onto the face normal
    normal_heat_flux: f64,
}

impl<F: FaceFlux> NonIsothermal<F> {
    /// Computes the temperature gradient and the normal heat flux of an isothermal face flux
    ///
    /// # Input
    ///
    /// * `base` -- the isothermal face flux (interior or boundary)
    /// * `params` -- the spatial parameters providing the heat conduction law
    /// * `cell` -- the element
    /// * `geometry` -- the element geometry
    /// * `states` -- volume states of all vertices of the element (in local order)
    pub fn new<P, S>(base: F, params: &P, cell: &Cell, geometry: &FvElementGeometry, states: &[S]) -> Self
    where
        P: SpatialParamsNi,
        S: VolumeState,
    {
        let temperature_grad = scalar_gradient(base.shape_gradients(), base.num_vertices(), |m| {
            states[m].temperature()
        });
        let heat_flux = params.matrix_heat_flux(&base, states, &temperature_grad, cell, geometry);
        let normal_heat_flux = heat_flux.dot(base.normal());
        NonIsothermal {
            base,
            temperature_grad,
            normal_heat_flux,
        }
    }

    /// Returns the isothermal face flux
    pub fn base(&self) -> &F {
        &self.base
    }

    /// Returns the temperature gradient at the integration point
    pub fn temperature_grad(&self) -> &Vector3<f64> {
        &self.temperature_grad
    }

    /// Returns the conductive heat flux projected onto the face normal
    pub fn normal_heat_flux(&self) -> f64 {
        self.normal_heat_flux
    }
}

impl<'a> NonIsothermal<FluxVars<'a>> {
    /// Computes the non-isothermal flux data of an interior face
    pub fn interior<P, S>(
        config: &Config,
        params: &P,
        cell: &Cell,
        geometry: &'a FvElementGeometry,
        face: usize,
        states: &[S],
    ) -> Self
    where
        P: SpatialParamsNi,
        S: VolumeState,
    {
        let base = FluxVars::new(config, params, cell, geometry, face, states);
        NonIsothermal::new(base, params, cell, geometry, states)
    }
}

impl<'a> NonIsothermal<BoundaryVars<'a>> {
    /// Computes the non-isothermal flux data of a boundary face
    pub fn boundary<P, S>(
        config: &Config,
        params: &P,
        cell: &Cell,
        geometry: &'a FvElementGeometry,
        index: usize,
        states: &[S],
    ) -> Self
    where
        P: SpatialParamsNi,
        S: VolumeState,
    {
        let base = BoundaryVars::new(config, params, cell, geometry, index, states);
        NonIsothermal::new(base, params, cell, geometry, states)
    }
}

impl<F: FaceFlux> FaceFlux for NonIsothermal<F> {
    fn data(&self) -> &FaceFluxData {
        self.base.data()
    }
    fn adjacent_scvs(&self) -> (usize, usize) {
        self.base.adjacent_scvs()
    }
    fn normal(&self) -> &Vector3<f64> {
        self.base.normal()
    }
    fn area(&self) -> f64 {
        self.base.area()
    }
    fn ip_global(&self) -> &Vector3<f64> {
        self.base.ip_global()
    }
    fn num_vertices(&self) -> usize {
        self.base.num_vertices()
    }
    fn shape_gradients(&self) -> &[Vector3<f64>; MAX_NVERTEX] {
        self.base.shape_gradients()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
