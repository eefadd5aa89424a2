/// Defines the maximum space dimension
pub const MAX_NDIM: usize = 3;

/// Defines the maximum number of vertices of a supported reference element (Hex8)
pub const MAX_NVERTEX: usize = 8;

/// Defines the maximum number of fluid phases
pub const MAX_NPHASE: usize = 3;

/// Defines the maximum number of chemical components
pub const MAX_NCOMPONENT: usize = 3;

/// Index of the liquid (wetting) phase
pub const LIQUID_PHASE: usize = 0;

/// Index of the gas (non-wetting) phase
pub const GAS_PHASE: usize = 1;

/// Index of the water component
pub const WATER: usize = 0;

/// Index of the air component
pub const AIR: usize = 1;

/// Exponent of the Millington-Quirk tortuosity model τ = (ϕ S)^(7/3) / ϕ²
pub const TORTUOSITY_EXPONENT: f64 = 7.0 / 3.0;

/// Saturation scale used to weight the densities of the neighboring SCVs
/// when computing the buoyancy term with [crate::base::GravityDensity::SaturationWeighted]
pub const DENSITY_WEIGHT_SATURATION: f64 = 1e-5;
