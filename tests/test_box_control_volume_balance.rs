use nalgebra::Vector3;
use pmbox::{prelude::*, StrError};

// TEST GOAL
//
// This test verifies that, for a linear pressure field and a homogeneous (anisotropic)
// permeability, the Darcy fluxes assembled over interior and boundary faces leave every
// control volume balanced, i.e., inflow equals outflow for each mesh vertex
//
// The assembly follows the box method: the flux q = kmvp_normal * area leaves the
// control volume i and enters j through an interior face; it leaves the control volume
// owning a boundary face through that face.

fn net_fluxes(mesh: &Mesh, config: &Config, medium: &PorousMedium) -> Result<Vec<f64>, StrError> {
    let grad = [Vector3::new(-1e4, 2e3, 5e2), Vector3::new(3e3, -1e3, 0.0)];
    let boundary = mesh.boundary_facets();
    let mut net = vec![0.0; mesh.points.len()];
    for cell in &mesh.cells {
        let mut geometry = FvElementGeometry::new(mesh, cell)?;
        geometry.with_boundary(&boundary[cell.id])?;
        let states: Vec<_> = cell
            .points
            .iter()
            .map(|p| {
                let mut x = Vector3::zeros();
                for (a, v) in mesh.points[*p].coords.iter().enumerate() {
                    x[a] = *v;
                }
                let mut vars = VolumeVars::new(2, 2).unwrap();
                vars.pressure = [1e5 + grad[0].dot(&x), 1.1e5 + grad[1].dot(&x), 0.0];
                vars.saturation = [0.5, 0.5, 0.0];
                vars
            })
            .collect();
        for flux in FluxVars::all_faces(config, medium, cell, &geometry, &states) {
            let (i, j) = flux.adjacent_scvs();
            let q = flux.data().kmvp_normal(LIQUID_PHASE) * flux.area();
            net[cell.points[i]] += q;
            net[cell.points[j]] -= q;
        }
        for flux in BoundaryVars::all_faces(config, medium, cell, &geometry, &states) {
            let (i, _) = flux.adjacent_scvs();
            net[cell.points[i]] += flux.data().kmvp_normal(LIQUID_PHASE) * flux.area();
        }
    }
    Ok(net)
}

#[test]
fn test_box_control_volume_balance_2d() -> Result<(), StrError> {
    let mut param = ParamPorousMedium::sample(1e-12, 2.0);
    param.permeability = ParamPermeability::Anisotropic {
        kx: 1e-12,
        ky: 5e-13,
        kz: 1e-13,
    };
    let medium = PorousMedium::new(param, Vector3::zeros())?;
    let config = Config::new();
    for mesh in [
        Samples::one_tri3(),
        Samples::one_distorted_qua4(),
        Samples::two_qua4(),
        Samples::column_qua4(5),
    ] {
        let net = net_fluxes(&mesh, &config, &medium)?;
        for (p, q) in net.iter().enumerate() {
            assert!(q.abs() < 1e-18, "point {}: net flux = {:?}", p, q);
        }
    }
    Ok(())
}

#[test]
fn test_box_control_volume_balance_3d() -> Result<(), StrError> {
    let mut param = ParamPorousMedium::sample(1e-12, 2.0);
    param.permeability = ParamPermeability::Anisotropic {
        kx: 1e-12,
        ky: 5e-13,
        kz: 1e-13,
    };
    let medium = PorousMedium::new(param, Vector3::zeros())?;
    let mut config = Config::new();
    config.set_ndim(3)?;
    for mesh in [Samples::one_tet4(), Samples::one_hex8()] {
        let net = net_fluxes(&mesh, &config, &medium)?;
        for (p, q) in net.iter().enumerate() {
            assert!(q.abs() < 1e-18, "point {}: net flux = {:?}", p, q);
        }
    }
    Ok(())
}

#[test]
fn test_box_shared_edge_fluxes_agree() -> Result<(), StrError> {
    // the cells share the edge 1-4; the part of the dual face inside each cell carries
    // the same flux intensity from point 1 to point 4
    let mesh = Samples::two_qua4();
    let k = 1e-12;
    let medium = PorousMedium::new(ParamPorousMedium::sample(k, 2.0), Vector3::zeros())?;
    let config = Config::new();
    let mut intensities = Vec::new();
    for cell in &mesh.cells {
        let geometry = FvElementGeometry::new(&mesh, cell)?;
        let states: Vec<_> = cell
            .points
            .iter()
            .map(|p| {
                let y = mesh.points[*p].coords[1];
                let mut vars = VolumeVars::new(2, 2).unwrap();
                vars.pressure = [2e5 - 5e4 * y, 2e5, 0.0];
                vars.saturation = [0.5, 0.5, 0.0];
                vars
            })
            .collect();
        // local indices of the global points 1 and 4
        let a = cell.points.iter().position(|p| *p == 1).unwrap();
        let b = cell.points.iter().position(|p| *p == 4).unwrap();
        let face = geometry.face_between(a, b).unwrap();
        let flux = FluxVars::new(&config, &medium, cell, &geometry, face, &states);
        assert!((flux.area() - 0.5).abs() < 1e-15);
        let sign = if flux.adjacent_scvs().0 == a { 1.0 } else { -1.0 };
        intensities.push(sign * flux.data().kmvp_normal(LIQUID_PHASE));
    }
    // flow goes upward (from point 1 to point 4)
    for q in &intensities {
        assert!((q - 5e4 * k).abs() < 1e-18);
    }
    Ok(())
}
