use super::{ModelHeatConduction, Permeability, SpatialParams, SpatialParamsNi, VolumeState};
use crate::base::{MAX_NDIM, MAX_NPHASE};
use crate::flux::FaceFlux;
use crate::geometry::{Cell, FvElementGeometry};
use crate::StrError;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Holds parameters for the intrinsic permeability field
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub enum ParamPermeability {
    /// Homogeneous and isotropic permeability
    Isotropic {
        /// Permeability k
        k: f64,
    },

    /// Homogeneous permeability with distinct values along the Cartesian axes
    Anisotropic {
        /// x-component of the permeability tensor
        kx: f64,

        /// y-component of the permeability tensor
        ky: f64,

        /// z-component of the permeability tensor
        kz: f64,
    },

    /// Coarse material with an embedded fine-grained lens (axis-aligned box)
    Lens {
        /// Permeability of the coarse (surrounding) material
        k_coarse: f64,

        /// Permeability of the fine material inside the lens
        k_fine: f64,

        /// Lower corner of the lens
        min: [f64; MAX_NDIM],

        /// Upper corner of the lens
        max: [f64; MAX_NDIM],
    },
}

/// Holds parameters for the effective heat conduction of the fluid-filled porous matrix
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub enum ParamHeatConduction {
    /// Constant conductivity: q = -λ ∇T
    Constant {
        /// Effective heat conductivity λ
        lambda: f64,
    },

    /// Somerton's law: λ = λdry + √Sw (λsat - λdry)
    Somerton {
        /// Heat conductivity of the solid grains λs
        lambda_solid: f64,

        /// Heat conductivity of the wetting fluid λf
        lambda_fluid: f64,

        /// Index of the wetting phase
        wetting_phase: usize,
    },
}

/// Holds parameters for the porous medium
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct ParamPorousMedium {
    /// Intrinsic permeability
    pub permeability: ParamPermeability,

    /// Heat conduction
    pub heat_conduction: ParamHeatConduction,
}

impl ParamPorousMedium {
    /// Returns a sample with an isotropic permeability and a constant heat conductivity
    pub fn sample(k: f64, lambda: f64) -> Self {
        ParamPorousMedium {
            permeability: ParamPermeability::Isotropic { k },
            heat_conduction: ParamHeatConduction::Constant { lambda },
        }
    }

    /// Validates the parameters
    ///
    /// Returns a message describing the first inconsistency or None if all is OK.
    pub fn validate(&self) -> Option<String> {
        match self.permeability {
            ParamPermeability::Isotropic { k } => {
                if k <= 0.0 {
                    return Some(format!("permeability k = {:?} must be > 0", k));
                }
            }
            ParamPermeability::Anisotropic { kx, ky, kz } => {
                if kx <= 0.0 || ky <= 0.0 || kz <= 0.0 {
                    return Some(format!(
                        "permeabilities (kx, ky, kz) = ({:?}, {:?}, {:?}) must be > 0",
                        kx, ky, kz
                    ));
                }
            }
            ParamPermeability::Lens {
                k_coarse,
                k_fine,
                min,
                max,
            } => {
                if k_coarse <= 0.0 || k_fine <= 0.0 {
                    return Some(format!(
                        "permeabilities (k_coarse, k_fine) = ({:?}, {:?}) must be > 0",
                        k_coarse, k_fine
                    ));
                }
                for a in 0..MAX_NDIM {
                    if min[a] > max[a] {
                        return Some(format!(
                            "lens corner min[{}] = {:?} must be ≤ max[{}] = {:?}",
                            a, min[a], a, max[a]
                        ));
                    }
                }
            }
        }
        match self.heat_conduction {
            ParamHeatConduction::Constant { lambda } => {
                if lambda < 0.0 {
                    return Some(format!("heat conductivity λ = {:?} must be ≥ 0", lambda));
                }
            }
            ParamHeatConduction::Somerton {
                lambda_solid,
                lambda_fluid,
                wetting_phase,
            } => {
                if lambda_solid <= 0.0 || lambda_fluid <= 0.0 {
                    return Some(format!(
                        "heat conductivities (λs, λf) = ({:?}, {:?}) must be > 0",
                        lambda_solid, lambda_fluid
                    ));
                }
                if wetting_phase >= MAX_NPHASE {
                    return Some(format!("wetting phase = {} is out of range", wetting_phase));
                }
            }
        }
        None
    }
}

/// Implements the spatial parameters of a porous medium
pub struct PorousMedium {
    /// Holds the parameters
    pub param: ParamPorousMedium,

    /// Gravitational acceleration vector
    gravity: Vector3<f64>,

    /// Heat conduction model
    heat_conduction: ModelHeatConduction,
}

impl PorousMedium {
    /// Allocates a new instance
    ///
    /// # Input
    ///
    /// * `param` -- the parameters
    /// * `gravity` -- gravitational acceleration vector; e.g., (0, -9.81, 0) in 2D
    pub fn new(param: ParamPorousMedium, gravity: Vector3<f64>) -> Result<Self, StrError> {
        if param.validate().is_some() {
            return Err("parameters of the porous medium are invalid");
        }
        Ok(PorousMedium {
            param,
            gravity,
            heat_conduction: ModelHeatConduction::new(&param.heat_conduction),
        })
    }

    /// Returns whether a point is inside the lens (if any)
    fn in_lens(&self, x: &Vector3<f64>, ndim: usize) -> bool {
        match self.param.permeability {
            ParamPermeability::Lens { min, max, .. } => {
                (0..usize::min(ndim, MAX_NDIM)).all(|a| x[a] >= min[a] && x[a] <= max[a])
            }
            _ => false,
        }
    }
}

impl SpatialParams for PorousMedium {
    fn intrinsic_permeability(&self, _cell: &Cell, geometry: &FvElementGeometry, scv: usize) -> Permeability {
        match self.param.permeability {
            ParamPermeability::Isotropic { k } => Permeability::Isotropic(k),
            ParamPermeability::Anisotropic { kx, ky, kz } => Permeability::Diagonal([kx, ky, kz]),
            ParamPermeability::Lens { k_coarse, k_fine, .. } => {
                if self.in_lens(&geometry.scvs[scv].global, geometry.ndim) {
                    Permeability::Isotropic(k_fine)
                } else {
                    Permeability::Isotropic(k_coarse)
                }
            }
        }
    }

    fn gravity(&self) -> Vector3<f64> {
        self.gravity
    }
}

impl SpatialParamsNi for PorousMedium {
    /// Computes q = -λ ∇T with λ evaluated from the mean porosity and wetting-phase saturation
    /// of the sub-control volumes adjacent to the face
    fn matrix_heat_flux<F, S>(
        &self,
        flux: &F,
        states: &[S],
        temperature_grad: &Vector3<f64>,
        _cell: &Cell,
        _geometry: &FvElementGeometry,
    ) -> Vector3<f64>
    where
        F: FaceFlux,
        S: VolumeState,
    {
        let (i, j) = flux.adjacent_scvs();
        let w = self.heat_conduction.wetting_phase();
        let porosity = (states[i].porosity() + states[j].porosity()) / 2.0;
        let sw = (states[i].saturation(w) + states[j].saturation(w)) / 2.0;
        let lambda = self.heat_conduction.calc_lambda(porosity, sw);
        -lambda * temperature_grad
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{ParamHeatConduction, ParamPermeability, ParamPorousMedium, PorousMedium};
    use crate::base::{Config, LIQUID_PHASE};
    use crate::flux::FluxVars;
    use crate::geometry::{FvElementGeometry, Samples};
    use crate::material::{Permeability, SpatialParams, SpatialParamsNi, VolumeVars};
    use approx::assert_abs_diff_eq;
    use nalgebra::Vector3;

    #[test]
    fn validate_captures_errors() {
        let mut param = ParamPorousMedium::sample(1e-12, 2.0);
        assert_eq!(param.validate(), None);
        param.permeability = ParamPermeability::Isotropic { k: 0.0 };
        assert_eq!(param.validate(), Some("permeability k = 0.0 must be > 0".to_string()));
        param.permeability = ParamPermeability::Anisotropic { kx: 1.0, ky: -1.0, kz: 1.0 };
        assert_eq!(
            param.validate(),
            Some("permeabilities (kx, ky, kz) = (1.0, -1.0, 1.0) must be > 0".to_string())
        );
        param.permeability = ParamPermeability::Lens {
            k_coarse: 1.0,
            k_fine: 0.1,
            min: [0.0, 1.0, 0.0],
            max: [1.0, 0.5, 0.0],
        };
        assert_eq!(
            param.validate(),
            Some("lens corner min[1] = 1.0 must be ≤ max[1] = 0.5".to_string())
        );
        param.permeability = ParamPermeability::Isotropic { k: 1.0 };
        param.heat_conduction = ParamHeatConduction::Constant { lambda: -1.0 };
        assert_eq!(
            param.validate(),
            Some("heat conductivity λ = -1.0 must be ≥ 0".to_string())
        );
        param.heat_conduction = ParamHeatConduction::Somerton {
            lambda_solid: 2.8,
            lambda_fluid: 0.6,
            wetting_phase: 3,
        };
        assert_eq!(param.validate(), Some("wetting phase = 3 is out of range".to_string()));
        assert_eq!(
            PorousMedium::new(param, Vector3::zeros()).err(),
            Some("parameters of the porous medium are invalid")
        );
    }

    #[test]
    fn permeability_works() {
        let mesh = Samples::two_qua4();
        let cell = &mesh.cells[1];
        let geo = FvElementGeometry::new(&mesh, cell).unwrap();

        let medium = PorousMedium::new(ParamPorousMedium::sample(1e-12, 2.0), Vector3::zeros()).unwrap();
        assert_eq!(medium.intrinsic_permeability(cell, &geo, 0), Permeability::Isotropic(1e-12));

        let mut param = ParamPorousMedium::sample(1e-12, 2.0);
        param.permeability = ParamPermeability::Anisotropic { kx: 1.0, ky: 2.0, kz: 3.0 };
        let medium = PorousMedium::new(param, Vector3::new(0.0, -9.81, 0.0)).unwrap();
        assert_eq!(medium.intrinsic_permeability(cell, &geo, 2), Permeability::Diagonal([1.0, 2.0, 3.0]));
        assert_eq!(medium.gravity(), Vector3::new(0.0, -9.81, 0.0));

        // the lens covers the right half of the second cell (x ≥ 1.5)
        param.permeability = ParamPermeability::Lens {
            k_coarse: 1e-10,
            k_fine: 1e-14,
            min: [1.5, 0.0, 0.0],
            max: [3.0, 2.0, 0.0],
        };
        let medium = PorousMedium::new(param, Vector3::zeros()).unwrap();
        // cell points: [1, 2, 5, 4] with x = [1, 2, 2, 1]
        assert_eq!(medium.intrinsic_permeability(cell, &geo, 0), Permeability::Isotropic(1e-10));
        assert_eq!(medium.intrinsic_permeability(cell, &geo, 1), Permeability::Isotropic(1e-14));
        assert_eq!(medium.intrinsic_permeability(cell, &geo, 2), Permeability::Isotropic(1e-14));
        assert_eq!(medium.intrinsic_permeability(cell, &geo, 3), Permeability::Isotropic(1e-10));
    }

    #[test]
    fn matrix_heat_flux_works() {
        let mesh = Samples::one_qua4();
        let cell = &mesh.cells[0];
        let geo = FvElementGeometry::new(&mesh, cell).unwrap();
        let config = Config::new();
        let mut states = vec![VolumeVars::new(2, 2).unwrap(); 4];
        for (m, s) in states.iter_mut().enumerate() {
            s.porosity = 0.4;
            s.saturation = if m == 0 { [0.2, 0.8, 0.0] } else { [0.6, 0.4, 0.0] };
        }
        let grad = Vector3::new(10.0, -5.0, 0.0);

        // constant
        let medium = PorousMedium::new(ParamPorousMedium::sample(1e-12, 2.0), Vector3::zeros()).unwrap();
        let face = geo.face_between(0, 1).unwrap();
        let flux = FluxVars::new(&config, &medium, cell, &geo, face, &states);
        let q = medium.matrix_heat_flux(&flux, &states, &grad, cell, &geo);
        assert_abs_diff_eq!(q, Vector3::new(-20.0, 10.0, 0.0), epsilon = 1e-14);

        // Somerton with Sw = (0.2 + 0.6) / 2 = 0.4
        let mut param = ParamPorousMedium::sample(1e-12, 2.0);
        param.heat_conduction = ParamHeatConduction::Somerton {
            lambda_solid: 2.8,
            lambda_fluid: 0.6,
            wetting_phase: LIQUID_PHASE,
        };
        let medium = PorousMedium::new(param, Vector3::zeros()).unwrap();
        let flux = FluxVars::new(&config, &medium, cell, &geo, face, &states);
        let q = medium.matrix_heat_flux(&flux, &states, &grad, cell, &geo);
        let dry = f64::powf(2.8, 0.6);
        let sat = dry * f64::powf(0.6, 0.4);
        let lambda = dry + f64::sqrt(0.4) * (sat - dry);
        assert_abs_diff_eq!(q, -lambda * grad, epsilon = 1e-14);
    }
}
