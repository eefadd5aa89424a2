//! Implements the volume variables and the spatial parameters of the porous medium

mod model_heat_conduction;
mod porous_medium;
mod spatial_params;
mod volume_state;
pub use crate::material::model_heat_conduction::*;
pub use crate::material::porous_medium::*;
pub use crate::material::spatial_params::*;
pub use crate::material::volume_state::*;
