use super::ParamHeatConduction;
use crate::base::LIQUID_PHASE;

/// Implements the effective heat conductivity models of the fluid-filled porous matrix
pub struct ModelHeatConduction {
    /// Use the Somerton model (otherwise, Constant)
    somerton_enabled: bool,

    /// Constant model: λ
    lambda: f64,

    /// Somerton model: conductivity of the solid grains λs
    lambda_solid: f64,

    /// Somerton model: conductivity of the wetting fluid λf
    lambda_fluid: f64,

    /// Somerton model: index of the wetting phase
    wetting_phase: usize,
}

impl ModelHeatConduction {
    /// Allocates a new instance
    pub fn new(param: &ParamHeatConduction) -> Self {
        match *param {
            ParamHeatConduction::Constant { lambda } => ModelHeatConduction {
                somerton_enabled: false,
                lambda,
                lambda_solid: 0.0,
                lambda_fluid: 0.0,
                wetting_phase: LIQUID_PHASE,
            },
            ParamHeatConduction::Somerton {
                lambda_solid,
                lambda_fluid,
                wetting_phase,
            } => ModelHeatConduction {
                somerton_enabled: true,
                lambda: 0.0,
                lambda_solid,
                lambda_fluid,
                wetting_phase,
            },
        }
    }

    /// Returns the index of the phase whose saturation enters the model
    pub fn wetting_phase(&self) -> usize {
        self.wetting_phase
    }

    /// Calculates the effective heat conductivity
    ///
    /// ```text
    /// Somerton:
    ///
    /// λdry = λs^(1-ϕ)
    /// λsat = λs^(1-ϕ) λf^ϕ
    /// λ = λdry + √Sw (λsat - λdry)
    /// ```
    ///
    /// Negative saturations are treated as zero.
    pub fn calc_lambda(&self, porosity: f64, sw: f64) -> f64 {
        if !self.somerton_enabled {
            return self.lambda;
        }
        let lambda_dry = f64::powf(self.lambda_solid, 1.0 - porosity);
        let lambda_sat = lambda_dry * f64::powf(self.lambda_fluid, porosity);
        lambda_dry + f64::sqrt(f64::max(sw, 0.0)) * (lambda_sat - lambda_dry)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
