use super::FaceFluxData;
use crate::base::MAX_NVERTEX;
use nalgebra::Vector3;

/// Defines the common interface of interior and boundary face fluxes
pub trait FaceFlux {
    /// Returns the reconstructed data
    fn data(&self) -> &FaceFluxData;

    /// Returns the local indices of the sub-control volumes adjacent to the face
    ///
    /// For boundary faces, both indices are the index of the sub-control volume owning the face.
    fn adjacent_scvs(&self) -> (usize, usize);

    /// Returns the unit normal vector of the face
    fn normal(&self) -> &Vector3<f64>;

    /// Returns the area of the face
    fn area(&self) -> f64;

    /// Returns the real coordinates of the integration point
    fn ip_global(&self) -> &Vector3<f64>;

    /// Returns the number of vertices of the stencil
    fn num_vertices(&self) -> usize;

    /// Returns the gradients of the shape functions at the integration point
    fn shape_gradients(&self) -> &[Vector3<f64>; MAX_NVERTEX];
}
