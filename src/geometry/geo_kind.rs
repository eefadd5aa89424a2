use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Defines the kind of reference element
///
/// Reference coordinates follow the usual conventions: Lin2, Qua4 and Hex8 span
/// `[-1, 1]` in each direction; Tri3 and Tet4 are the unit simplices.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
pub enum GeoKind {
    Lin2,
    Tri3,
    Qua4,
    Tet4,
    Hex8,
}

#[rustfmt::skip]
static LIN2_COORDS: [[f64; 3]; 2] = [[-1.0, 0.0, 0.0], [1.0, 0.0, 0.0]];

#[rustfmt::skip]
static TRI3_COORDS: [[f64; 3]; 3] = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];

#[rustfmt::skip]
static QUA4_COORDS: [[f64; 3]; 4] = [
    [-1.0, -1.0, 0.0],
    [ 1.0, -1.0, 0.0],
    [ 1.0,  1.0, 0.0],
    [-1.0,  1.0, 0.0],
];

#[rustfmt::skip]
static TET4_COORDS: [[f64; 3]; 4] = [
    [0.0, 0.0, 0.0],
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
];

#[rustfmt::skip]
static HEX8_COORDS: [[f64; 3]; 8] = [
    [-1.0, -1.0, -1.0],
    [ 1.0, -1.0, -1.0],
    [ 1.0,  1.0, -1.0],
    [-1.0,  1.0, -1.0],
    [-1.0, -1.0,  1.0],
    [ 1.0, -1.0,  1.0],
    [ 1.0,  1.0,  1.0],
    [-1.0,  1.0,  1.0],
];

static LIN2_EDGES: [[usize; 2]; 1] = [[0, 1]];
static TRI3_EDGES: [[usize; 2]; 3] = [[0, 1], [1, 2], [2, 0]];
static QUA4_EDGES: [[usize; 2]; 4] = [[0, 1], [1, 2], [2, 3], [3, 0]];
static TET4_EDGES: [[usize; 2]; 6] = [[0, 1], [1, 2], [2, 0], [0, 3], [1, 3], [2, 3]];
#[rustfmt::skip]
static HEX8_EDGES: [[usize; 2]; 12] = [
    [0, 1], [1, 2], [2, 3], [3, 0],
    [4, 5], [5, 6], [6, 7], [7, 4],
    [0, 4], [1, 5], [2, 6], [3, 7],
];

// facets are listed with their vertices in cyclic order
static LIN2_FACETS: [&[usize]; 2] = [&[0], &[1]];
static TRI3_FACETS: [&[usize]; 3] = [&[0, 1], &[1, 2], &[2, 0]];
static QUA4_FACETS: [&[usize]; 4] = [&[0, 1], &[1, 2], &[2, 3], &[3, 0]];
static TET4_FACETS: [&[usize]; 4] = [&[0, 2, 1], &[0, 1, 3], &[0, 3, 2], &[1, 2, 3]];
#[rustfmt::skip]
static HEX8_FACETS: [&[usize]; 6] = [
    &[0, 4, 7, 3],
    &[1, 2, 6, 5],
    &[0, 1, 5, 4],
    &[2, 3, 7, 6],
    &[0, 3, 2, 1],
    &[4, 5, 6, 7],
];

impl GeoKind {
    /// Returns the space dimension of the reference element
    pub fn ndim(&self) -> usize {
        match self {
            GeoKind::Lin2 => 1,
            GeoKind::Tri3 | GeoKind::Qua4 => 2,
            GeoKind::Tet4 | GeoKind::Hex8 => 3,
        }
    }

    /// Returns the number of nodes (vertices)
    pub fn nnode(&self) -> usize {
        self.reference_coords().len()
    }

    /// Returns the reference coordinates of the nodes
    pub fn reference_coords(&self) -> &'static [[f64; 3]] {
        match self {
            GeoKind::Lin2 => &LIN2_COORDS,
            GeoKind::Tri3 => &TRI3_COORDS,
            GeoKind::Qua4 => &QUA4_COORDS,
            GeoKind::Tet4 => &TET4_COORDS,
            GeoKind::Hex8 => &HEX8_COORDS,
        }
    }

    /// Returns the local node indices of each edge
    pub fn edges(&self) -> &'static [[usize; 2]] {
        match self {
            GeoKind::Lin2 => &LIN2_EDGES,
            GeoKind::Tri3 => &TRI3_EDGES,
            GeoKind::Qua4 => &QUA4_EDGES,
            GeoKind::Tet4 => &TET4_EDGES,
            GeoKind::Hex8 => &HEX8_EDGES,
        }
    }

    /// Returns the local node indices of each facet (in cyclic order)
    ///
    /// A facet is a point in 1D, an edge in 2D, and a face in 3D.
    pub fn facets(&self) -> &'static [&'static [usize]] {
        match self {
            GeoKind::Lin2 => &LIN2_FACETS,
            GeoKind::Tri3 => &TRI3_FACETS,
            GeoKind::Qua4 => &QUA4_FACETS,
            GeoKind::Tet4 => &TET4_FACETS,
            GeoKind::Hex8 => &HEX8_FACETS,
        }
    }

    /// Returns the reference coordinates of node m
    #[inline]
    pub fn reference_node(&self, m: usize) -> Vector3<f64> {
        let c = &self.reference_coords()[m];
        Vector3::new(c[0], c[1], c[2])
    }

    /// Returns the centroid of a set of nodes in reference coordinates
    pub fn reference_centroid(&self, nodes: &[usize]) -> Vector3<f64> {
        let mut c = Vector3::zeros();
        for m in nodes {
            c += self.reference_node(*m);
        }
        c / (nodes.len() as f64)
    }

    /// Returns the centroid of the reference element
    pub fn reference_center(&self) -> Vector3<f64> {
        let mut c = Vector3::zeros();
        for m in 0..self.nnode() {
            c += self.reference_node(m);
        }
        c / (self.nnode() as f64)
    }

    /// Calculates the interpolation functions N(ξ)
    pub fn calc_interp(&self, interp: &mut [f64], ksi: &Vector3<f64>) {
        let (r, s, t) = (ksi[0], ksi[1], ksi[2]);
        match self {
            GeoKind::Lin2 => {
                interp[0] = (1.0 - r) / 2.0;
                interp[1] = (1.0 + r) / 2.0;
            }
            GeoKind::Tri3 => {
                interp[0] = 1.0 - r - s;
                interp[1] = r;
                interp[2] = s;
            }
            GeoKind::Tet4 => {
                interp[0] = 1.0 - r - s - t;
                interp[1] = r;
                interp[2] = s;
                interp[3] = t;
            }
            GeoKind::Qua4 => {
                for (m, c) in QUA4_COORDS.iter().enumerate() {
                    interp[m] = (1.0 + c[0] * r) * (1.0 + c[1] * s) / 4.0;
                }
            }
            GeoKind::Hex8 => {
                for (m, c) in HEX8_COORDS.iter().enumerate() {
                    interp[m] = (1.0 + c[0] * r) * (1.0 + c[1] * s) * (1.0 + c[2] * t) / 8.0;
                }
            }
        }
    }

    /// Calculates the derivatives of the interpolation functions dN/dξ
    pub fn calc_deriv(&self, deriv: &mut [Vector3<f64>], ksi: &Vector3<f64>) {
        let (r, s, t) = (ksi[0], ksi[1], ksi[2]);
        match self {
            GeoKind::Lin2 => {
                deriv[0] = Vector3::new(-0.5, 0.0, 0.0);
                deriv[1] = Vector3::new(0.5, 0.0, 0.0);
            }
            GeoKind::Tri3 => {
                deriv[0] = Vector3::new(-1.0, -1.0, 0.0);
                deriv[1] = Vector3::new(1.0, 0.0, 0.0);
                deriv[2] = Vector3::new(0.0, 1.0, 0.0);
            }
            GeoKind::Tet4 => {
                deriv[0] = Vector3::new(-1.0, -1.0, -1.0);
                deriv[1] = Vector3::new(1.0, 0.0, 0.0);
                deriv[2] = Vector3::new(0.0, 1.0, 0.0);
                deriv[3] = Vector3::new(0.0, 0.0, 1.0);
            }
            GeoKind::Qua4 => {
                for (m, c) in QUA4_COORDS.iter().enumerate() {
                    deriv[m] = Vector3::new(
                        c[0] * (1.0 + c[1] * s) / 4.0,
                        c[1] * (1.0 + c[0] * r) / 4.0,
                        0.0,
                    );
                }
            }
            GeoKind::Hex8 => {
                for (m, c) in HEX8_COORDS.iter().enumerate() {
                    deriv[m] = Vector3::new(
                        c[0] * (1.0 + c[1] * s) * (1.0 + c[2] * t) / 8.0,
                        c[1] * (1.0 + c[0] * r) * (1.0 + c[2] * t) / 8.0,
                        c[2] * (1.0 + c[0] * r) * (1.0 + c[1] * s) / 8.0,
                    );
                }
            }
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
