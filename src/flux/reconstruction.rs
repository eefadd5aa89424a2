use super::FaceFluxData;
use crate::base::{Config, DENSITY_WEIGHT_SATURATION, MAX_NVERTEX, TORTUOSITY_EXPONENT};
use crate::material::VolumeState;
use nalgebra::{Matrix3, Vector3};

/// Computes the gradient of a scalar field at an integration point
///
/// ```text
/// ∇u = Σ_m  ∇N_m  u_m
/// ```
pub fn scalar_gradient<F>(grad: &[Vector3<f64>; MAX_NVERTEX], num_vertices: usize, value: F) -> Vector3<f64>
where
    F: Fn(usize) -> f64,
{
    let mut res = Vector3::zeros();
    for m in 0..num_vertices {
        res += grad[m] * value(m);
    }
    res
}

/// Computes the effective diffusion coefficient of the porous medium at a sub-control volume
///
/// ```text
/// D_pm = ϕ S τ D   with   τ = (ϕ S)^(7/3) / ϕ²   (Millington and Quirk)
/// ```
///
/// Returns exactly zero if `S ≤ 0`.
pub fn porous_diff_coeff(porosity: f64, saturation: f64, diff_coeff: f64) -> f64 {
    if saturation <= 0.0 {
        return 0.0;
    }
    let phi_s = porosity * saturation;
    let tau = f64::powf(phi_s, TORTUOSITY_EXPONENT) / (porosity * porosity);
    phi_s * tau * diff_coeff
}

/// Computes the density of a phase averaged over two sub-control volumes with weights
/// that vanish with the saturation
///
/// ```text
/// f = min(S/1e-5, 0.5)  (zero if S ≤ 0)
/// ρ = (fi ρi + fj ρj) / (fi + fj)
/// ```
///
/// The arithmetic mean is returned if the phase is absent at both sides.
pub(crate) fn saturation_weighted_density<S: VolumeState>(si: &S, sj: &S, phase: usize) -> f64 {
    let weight = |s: f64| f64::min(f64::max(s / DENSITY_WEIGHT_SATURATION, 0.0), 0.5);
    let mut fi = weight(si.saturation(phase));
    let mut fj = weight(sj.saturation(phase));
    if fi + fj == 0.0 {
        fi = 0.5;
        fj = 0.5;
    }
    (fi * si.density(phase) + fj * sj.density(phase)) / (fi + fj)
}

/// Accumulates the gradients and the values at the integration point from the stencil
///
/// Computes the raw pressure gradient (without buoyancy), the gradients of the mass and
/// mole fractions of the minor component, and the interpolated pressure and densities.
pub(crate) fn accumulate<S: VolumeState>(
    config: &Config,
    grad: &[Vector3<f64>; MAX_NVERTEX],
    shape_value: &[f64; MAX_NVERTEX],
    num_vertices: usize,
    states: &[S],
) -> FaceFluxData {
    let mut data = FaceFluxData::new(config.nphase);
    for m in 0..num_vertices {
        let state = &states[m];
        for p in 0..config.nphase {
            let minor = config.minor(p);
            data.potential_grad[p] += grad[m] * state.pressure(p);
            data.concentration_grad[p] += grad[m] * state.mass_fraction(p, minor);
            data.molar_conc_grad[p] += grad[m] * state.mole_fraction(p, minor);
            data.pressure_at_ip[p] += shape_value[m] * state.pressure(p);
            data.density_at_ip[p] += shape_value[m] * state.density(p);
            data.molar_density_at_ip[p] += shape_value[m] * state.molar_density(p);
        }
    }
    data
}

/// Projects the potential gradients through the permeability tensor onto the face normal
///
/// ```text
/// kmvp = K · (∇p - ρ g)
/// kmvp_normal = -kmvp · n
/// ```
pub(crate) fn project_darcy(data: &mut FaceFluxData, kk: &Matrix3<f64>, normal: &Vector3<f64>) {
    for p in 0..data.nphase {
        data.kmvp[p] = kk * data.potential_grad[p];
        data.kmvp_normal[p] = -data.kmvp[p].dot(normal);
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
