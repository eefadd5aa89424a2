//! Implements the reconstruction of gradients and flux intensities at sub-control-volume faces

mod boundary_vars;
mod face_flux;
mod face_flux_data;
mod flux_vars;
mod non_isothermal;
mod reconstruction;
pub use crate::flux::boundary_vars::*;
pub use crate::flux::face_flux::*;
pub use crate::flux::face_flux_data::*;
pub use crate::flux::flux_vars::*;
pub use crate::flux::non_isothermal::*;
pub use crate::flux::reconstruction::*;
