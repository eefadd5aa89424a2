use super::GeoKind;
use crate::base::MAX_NVERTEX;
use crate::StrError;
use nalgebra::{Matrix3, Vector3};

/// Holds the nodal coordinates and workspace to evaluate shape functions of an element
///
/// The space dimension must equal the dimension of the reference element. Vectors
/// always have three components; the components beyond `ndim` remain zero.
#[derive(Clone, Debug)]
pub struct Shape {
    /// Kind of reference element
    pub kind: GeoKind,

    /// Number of nodes
    pub nnode: usize,

    /// Real (physical) coordinates of the nodes
    pub xxt: [Vector3<f64>; MAX_NVERTEX],

    /// Interpolation functions N(ξ) at the last evaluated point
    pub interp: [f64; MAX_NVERTEX],

    /// Derivatives dN/dξ at the last evaluated point
    pub deriv: [Vector3<f64>; MAX_NVERTEX],

    /// Gradients G = dN/dx at the last evaluated point
    pub gradient: [Vector3<f64>; MAX_NVERTEX],
}

impl Shape {
    /// Allocates a new instance
    ///
    /// # Input
    ///
    /// * `kind` -- the reference element
    /// * `coords` -- the real coordinates of each node (len = nnode); each entry has ndim = kind.ndim() components
    pub fn new(kind: GeoKind, coords: &[&[f64]]) -> Result<Self, StrError> {
        let (ndim, nnode) = (kind.ndim(), kind.nnode());
        if coords.len() != nnode {
            return Err("number of coordinates must be equal to the number of nodes");
        }
        let mut xxt = [Vector3::zeros(); MAX_NVERTEX];
        for m in 0..nnode {
            if coords[m].len() != ndim {
                return Err("the space dimension must equal the dimension of the reference element");
            }
            for i in 0..ndim {
                xxt[m][i] = coords[m][i];
            }
        }
        Ok(Shape {
            kind,
            nnode,
            xxt,
            interp: [0.0; MAX_NVERTEX],
            deriv: [Vector3::zeros(); MAX_NVERTEX],
            gradient: [Vector3::zeros(); MAX_NVERTEX],
        })
    }

    /// Calculates the interpolation functions N(ξ) and stores them in `interp`
    pub fn calc_interp(&mut self, ksi: &Vector3<f64>) {
        self.kind.calc_interp(&mut self.interp, ksi);
    }

    /// Calculates the real coordinates x(ξ) = Σ N_m(ξ) x_m
    pub fn calc_coords(&mut self, ksi: &Vector3<f64>) -> Vector3<f64> {
        self.calc_interp(ksi);
        let mut x = Vector3::zeros();
        for m in 0..self.nnode {
            x += self.xxt[m] * self.interp[m];
        }
        x
    }

    /// Calculates the Jacobian matrix J = dx/dξ
    ///
    /// The diagonal entries beyond ndim are set to one so that J is invertible in 1D and 2D.
    pub fn calc_jacobian(&mut self, ksi: &Vector3<f64>) -> Matrix3<f64> {
        self.kind.calc_deriv(&mut self.deriv, ksi);
        let mut jac = Matrix3::zeros();
        for m in 0..self.nnode {
            jac += self.xxt[m] * self.deriv[m].transpose();
        }
        for k in self.kind.ndim()..3 {
            jac[(k, k)] = 1.0;
        }
        jac
    }

    /// Calculates the gradients of the interpolation functions G = dN/dx and stores them in `gradient`
    ///
    /// Returns the determinant of the Jacobian.
    pub fn calc_gradient(&mut self, ksi: &Vector3<f64>) -> Result<f64, StrError> {
        let jac = self.calc_jacobian(ksi);
        let det = jac.determinant();
        let inv = match jac.try_inverse() {
            Some(inv) => inv,
            None => return Err("the Jacobian matrix is singular"),
        };
        let inv_t = inv.transpose();
        for m in 0..self.nnode {
            self.gradient[m] = inv_t * self.deriv[m];
        }
        Ok(det)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
