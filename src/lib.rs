//! Box-method flux reconstruction for multiphase, multicomponent porous media flow
//!
//! For every sub-control-volume face (and every boundary face) of a finite element,
//! this crate reconstructs the gradients of pressure, mass and mole fractions (and
//! temperature), projects the buoyancy-corrected potential gradient through the
//! intrinsic permeability onto the face normal, and computes the effective
//! (tortuosity-corrected) diffusion coefficient of each phase.
//!
//! The main structures are:
//!
//! * [flux::FluxVars] -- data for an interior sub-control-volume face
//! * [flux::BoundaryVars] -- data for a boundary face
//! * [flux::NonIsothermal] -- adds the temperature gradient and the conductive heat flux
//!
//! The collaborators are abstracted by [material::VolumeState] and [material::SpatialParams];
//! the element geometry is given by [geometry::FvElementGeometry].

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod base;
pub mod flux;
pub mod geometry;
pub mod material;
pub mod prelude;
