//! Implements the finite-volume element geometry of the box scheme

mod fv_element_geometry;
mod geo_kind;
mod mesh;
mod samples;
mod shape;
pub use crate::geometry::fv_element_geometry::*;
pub use crate::geometry::geo_kind::*;
pub use crate::geometry::mesh::*;
pub use crate::geometry::samples::*;
pub use crate::geometry::shape::*;
