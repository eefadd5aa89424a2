use nalgebra::Vector3;
use pmbox::{prelude::*, StrError};
use rayon::prelude::*;

// TEST GOAL
//
// This test verifies that the flux reconstruction is a pure function of its inputs:
// evaluating all faces of all cells in parallel gives exactly the same data as the
// serial evaluation
//
// STATE
//
// Nonlinear pressure, saturation, fraction and temperature fields with gravity
// (saturation-weighted density) and the Somerton heat conduction law

fn states_of(mesh: &Mesh, cell: &Cell) -> Vec<VolumeVars> {
    cell.points
        .iter()
        .map(|p| {
            let x = mesh.points[*p].coords[0];
            let y = mesh.points[*p].coords[1];
            let sg = 0.5 * f64::max(0.0, f64::sin(0.3 * y));
            let mut vars = VolumeVars::new(2, 2).unwrap();
            vars.phase_state = if sg > 0.0 { PhaseState::TwoPhase } else { PhaseState::LiquidOnly };
            vars.pressure = [2e5 - 9810.0 * y + 1e3 * x * y, 2.1e5 - 12.0 * y * y, 0.0];
            vars.density = [1000.0 + 0.1 * y, 1.2 + 0.01 * y, 0.0];
            vars.molar_density = [55.5, 0.05 + 0.001 * x, 0.0];
            vars.saturation = [1.0 - sg, sg, 0.0];
            vars.porosity = 0.3 + 0.01 * x;
            vars.diff_coeff = [2e-9, 2.6e-5, 0.0];
            vars.temperature = 283.15 + 2.0 * y + x * x;
            vars.mass_fraction[LIQUID_PHASE] = [1.0 - 1e-5 * y, 1e-5 * y, 0.0];
            vars.mass_fraction[GAS_PHASE] = [0.01 * x, 1.0 - 0.01 * x, 0.0];
            vars.mole_fraction[LIQUID_PHASE] = [1.0 - 6e-6 * y, 6e-6 * y, 0.0];
            vars.mole_fraction[GAS_PHASE] = [0.015 * x, 1.0 - 0.015 * x, 0.0];
            vars
        })
        .collect()
}

fn evaluate(
    mesh: &Mesh,
    cell: &Cell,
    geometry: &FvElementGeometry,
    config: &Config,
    medium: &PorousMedium,
) -> (Vec<FaceFluxData>, Vec<f64>) {
    let states = states_of(mesh, cell);
    let mut data = Vec::new();
    let mut heat = Vec::new();
    for face in 0..geometry.scv_faces.len() {
        let flux = NonIsothermal::interior(config, medium, cell, geometry, face, &states);
        data.push(flux.data().clone());
        heat.push(flux.normal_heat_flux());
    }
    for index in 0..geometry.boundary_faces.len() {
        let flux = NonIsothermal::boundary(config, medium, cell, geometry, index, &states);
        data.push(flux.data().clone());
        heat.push(flux.normal_heat_flux());
    }
    (data, heat)
}

#[test]
fn test_box_parallel_evaluation() -> Result<(), StrError> {
    let mesh = Samples::column_qua4(40);
    let geometries = FvElementGeometry::all_parallel(&mesh)?;

    let mut config = Config::new();
    config
        .set_enable_gravity(true)?
        .set_gravity_density(GravityDensity::SaturationWeighted)?;
    let param = ParamPorousMedium {
        permeability: ParamPermeability::Lens {
            k_coarse: 1e-10,
            k_fine: 1e-12,
            min: [0.0, 10.0, 0.0],
            max: [1.0, 20.0, 0.0],
        },
        heat_conduction: ParamHeatConduction::Somerton {
            lambda_solid: 2.8,
            lambda_fluid: 0.6,
            wetting_phase: LIQUID_PHASE,
        },
    };
    let medium = PorousMedium::new(param, Vector3::new(0.0, -9.81, 0.0))?;

    let serial: Vec<_> = mesh
        .cells
        .iter()
        .zip(geometries.iter())
        .map(|(cell, geometry)| evaluate(&mesh, cell, geometry, &config, &medium))
        .collect();

    let parallel: Vec<_> = mesh
        .cells
        .par_iter()
        .zip(geometries.par_iter())
        .map(|(cell, geometry)| evaluate(&mesh, cell, geometry, &config, &medium))
        .collect();

    assert_eq!(serial.len(), 40);
    assert_eq!(parallel.len(), 40);
    for (e, (a, b)) in serial.iter().zip(parallel.iter()).enumerate() {
        assert_eq!(a.0, b.0, "cell {}", e);
        assert_eq!(a.1, b.1, "cell {}", e);
    }

    // the results are not trivial
    let max_kmvp = serial
        .iter()
        .flat_map(|(data, _)| data.iter().map(|d| d.kmvp_normal(GAS_PHASE).abs()))
        .fold(0.0, f64::max);
    let max_heat = serial
        .iter()
        .flat_map(|(_, heat)| heat.iter().map(|q| q.abs()))
        .fold(0.0, f64::max);
    assert!(max_kmvp > 0.0);
    assert!(max_heat > 0.0);
    Ok(())
}
