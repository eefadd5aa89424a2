//! Makes available common structures needed to reconstruct face fluxes
//!
//! You may write `use pmbox::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::base::{Config, GravityDensity, PhaseState, MAX_NCOMPONENT, MAX_NDIM, MAX_NPHASE, MAX_NVERTEX};
pub use crate::base::{AIR, GAS_PHASE, LIQUID_PHASE, WATER};
pub use crate::flux::{BoundaryVars, FaceFlux, FaceFluxData, FluxVars, NonIsothermal};
pub use crate::geometry::{BoundaryFace, Cell, FvElementGeometry, GeoKind, Mesh, Point, Samples, ScvFace};
pub use crate::material::{ParamHeatConduction, ParamPermeability, ParamPorousMedium, Permeability, PorousMedium};
pub use crate::material::{SpatialParams, SpatialParamsNi, VolumeState, VolumeVars};
pub use crate::StrError;
