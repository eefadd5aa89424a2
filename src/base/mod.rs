//! Implements the base structures shared by the flux reconstruction

mod auxiliary;
mod config;
mod constants;
mod enums;
#[cfg(test)]
mod testing;
pub use crate::base::auxiliary::*;
pub use crate::base::config::*;
pub use crate::base::constants::*;
pub use crate::base::enums::*;

#[cfg(test)]
pub(crate) use crate::base::testing::*;
