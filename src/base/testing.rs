use crate::geometry::FvElementGeometry;
use crate::material::VolumeVars;
use nalgebra::Vector3;

/// Holds linear fields of pressure (per phase), mass/mole fraction, and temperature
pub(crate) struct LinearField {
    /// Pressure at the origin
    pub p0: [f64; 2],

    /// Pressure gradient
    pub dp: [Vector3<f64>; 2],

    /// Fraction at the origin
    pub x0: f64,

    /// Fraction gradient
    pub dx: Vector3<f64>,

    /// Temperature at the origin
    pub t0: f64,

    /// Temperature gradient
    pub dt: Vector3<f64>,
}

impl LinearField {
    /// Returns a field with non-zero gradients along the first ndim directions
    pub fn new(ndim: usize) -> Self {
        let cut = |v: [f64; 3]| Vector3::from_fn(|a, _| if a < ndim { v[a] } else { 0.0 });
        LinearField {
            p0: [1e5, 1.1e5],
            dp: [cut([-1e4, 2e3, -5e2]), cut([3e3, -1e3, 4e2])],
            x0: 0.1,
            dx: cut([0.01, -0.02, 0.005]),
            t0: 300.0,
            dt: cut([5.0, -2.0, 1.0]),
        }
    }

    /// Returns a field with zero gradients
    pub fn uniform(pressure: f64) -> Self {
        LinearField {
            p0: [pressure, pressure],
            dp: [Vector3::zeros(); 2],
            x0: 0.1,
            dx: Vector3::zeros(),
            t0: 300.0,
            dt: Vector3::zeros(),
        }
    }

    pub fn pressure(&self, phase: usize, x: &Vector3<f64>) -> f64 {
        self.p0[phase] + self.dp[phase].dot(x)
    }

    pub fn pressure_gradient(&self, phase: usize) -> Vector3<f64> {
        self.dp[phase]
    }

    pub fn fraction(&self, x: &Vector3<f64>) -> f64 {
        self.x0 + self.dx.dot(x)
    }

    pub fn fraction_gradient(&self) -> Vector3<f64> {
        self.dx
    }

    pub fn temperature(&self, x: &Vector3<f64>) -> f64 {
        self.t0 + self.dt.dot(x)
    }

    pub fn temperature_gradient(&self) -> Vector3<f64> {
        self.dt
    }
}

/// Generates the volume variables (two phases, two components) at the vertices of an element
///
/// Pressures, fractions and temperatures follow the linear field; the other quantities are
/// uniform. All mass and mole fractions equal the fraction field.
pub(crate) fn sample_states(geometry: &FvElementGeometry, field: &LinearField, saturation: [f64; 2]) -> Vec<VolumeVars> {
    geometry
        .scvs
        .iter()
        .map(|scv| {
            let x = &scv.global;
            let fraction = field.fraction(x);
            VolumeVars {
                pressure: [field.pressure(0, x), field.pressure(1, x), 0.0],
                density: [1000.0, 1.2, 0.0],
                molar_density: [55.5, 0.05, 0.0],
                saturation: [saturation[0], saturation[1], 0.0],
                diff_coeff: [2e-9, 2.6e-5, 0.0],
                porosity: 0.3,
                temperature: field.temperature(x),
                mass_fraction: [[fraction, fraction, 0.0], [fraction, fraction, 0.0], [0.0; 3]],
                mole_fraction: [[fraction, fraction, 0.0], [fraction, fraction, 0.0], [0.0; 3]],
                ..VolumeVars::new(2, 2).unwrap()
            }
        })
        .collect()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{sample_states, LinearField};
    use crate::geometry::{FvElementGeometry, Samples};
    use approx::assert_abs_diff_eq;
    use nalgebra::Vector3;

    #[test]
    fn linear_field_works() {
        let field = LinearField::new(2);
        assert_eq!(field.pressure_gradient(0), Vector3::new(-1e4, 2e3, 0.0));
        assert_eq!(field.temperature_gradient(), Vector3::new(5.0, -2.0, 0.0));
        let x = Vector3::new(1.0, 1.0, 1.0);
        assert_abs_diff_eq!(field.pressure(0, &x), 1e5 - 1e4 + 2e3, epsilon = 1e-9);
        assert_abs_diff_eq!(field.fraction(&x), 0.1 + 0.01 - 0.02, epsilon = 1e-15);
        assert_abs_diff_eq!(field.temperature(&x), 303.0, epsilon = 1e-12);

        let field = LinearField::uniform(2e5);
        assert_eq!(field.pressure(1, &x), 2e5);
        assert_eq!(field.fraction_gradient(), Vector3::zeros());
    }

    #[test]
    fn sample_states_works() {
        let mesh = Samples::one_qua4();
        let geo = FvElementGeometry::new(&mesh, &mesh.cells[0]).unwrap();
        let field = LinearField::new(2);
        let states = sample_states(&geo, &field, [0.6, 0.4]);
        assert_eq!(states.len(), 4);
        assert_abs_diff_eq!(states[2].pressure[0], 1e5 - 1e4 + 2e3, epsilon = 1e-9);
        assert_abs_diff_eq!(states[1].temperature, 305.0, epsilon = 1e-12);
        for s in &states {
            assert_eq!(s.validate(), None);
        }
    }
}
