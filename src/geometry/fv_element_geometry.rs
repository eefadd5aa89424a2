use super::{Cell, GeoKind, Mesh, Shape};
use crate::base::MAX_NVERTEX;
use crate::StrError;
use nalgebra::Vector3;
use rayon::prelude::*;

/// Holds the data of a sub-control volume (the part of the control volume of a vertex inside the element)
#[derive(Clone, Debug)]
pub struct SubControlVolume {
    /// Reference coordinates of the vertex
    pub local: Vector3<f64>,

    /// Real coordinates of the vertex
    pub global: Vector3<f64>,
}

/// Holds the data of an interior sub-control-volume face
///
/// The face separates the sub-control volumes `i` and `j`; there is one face per element edge.
#[derive(Clone, Debug)]
pub struct ScvFace {
    /// Local index of the sub-control volume on the inside
    pub i: usize,

    /// Local index of the sub-control volume on the outside
    pub j: usize,

    /// Reference coordinates of the integration point
    pub ip_local: Vector3<f64>,

    /// Real coordinates of the integration point
    pub ip_global: Vector3<f64>,

    /// Unit normal vector pointing from `i` to `j`
    pub normal: Vector3<f64>,

    /// Area of the face (length in 2D; one in 1D)
    pub area: f64,

    /// Gradients of the shape functions at the integration point
    pub grad: [Vector3<f64>; MAX_NVERTEX],

    /// Values of the shape functions at the integration point
    pub shape_value: [f64; MAX_NVERTEX],
}

/// Holds the data of a boundary face
///
/// A boundary face is the part of an element facet on the domain boundary that belongs to
/// the control volume of one vertex.
#[derive(Clone, Debug)]
pub struct BoundaryFace {
    /// Local index of the sub-control volume owning this face
    pub scv: usize,

    /// Local index of the element facet containing this face
    pub facet: usize,

    /// Reference coordinates of the integration point
    pub ip_local: Vector3<f64>,

    /// Real coordinates of the integration point
    pub ip_global: Vector3<f64>,

    /// Unit normal vector pointing outward of the domain
    pub normal: Vector3<f64>,

    /// Area of the face (length in 2D; one in 1D)
    pub area: f64,

    /// Gradients of the shape functions at the integration point
    pub grad: [Vector3<f64>; MAX_NVERTEX],

    /// Values of the shape functions at the integration point
    pub shape_value: [f64; MAX_NVERTEX],
}

/// Holds the finite-volume geometry of an element in the box scheme
#[derive(Clone, Debug)]
pub struct FvElementGeometry {
    /// Space dimension
    pub ndim: usize,

    /// Kind of reference element
    pub kind: GeoKind,

    /// Number of vertices (= number of sub-control volumes)
    pub num_vertices: usize,

    /// Real coordinates of the element center
    pub element_global: Vector3<f64>,

    /// Sub-control volumes (one per vertex)
    pub scvs: Vec<SubControlVolume>,

    /// Interior sub-control-volume faces (one per edge)
    pub scv_faces: Vec<ScvFace>,

    /// Boundary faces
    pub boundary_faces: Vec<BoundaryFace>,

    /// Shape functions of the element
    shape: Shape,
}

impl FvElementGeometry {
    /// Allocates a new instance with the sub-control volumes and the interior faces of a cell
    ///
    /// Boundary faces are added with [FvElementGeometry::with_boundary].
    pub fn new(mesh: &Mesh, cell: &Cell) -> Result<Self, StrError> {
        let kind = cell.kind;
        if kind.ndim() != mesh.ndim {
            return Err("cell kind is incompatible with the space dimension of the mesh");
        }
        if cell.points.len() != kind.nnode() {
            return Err("number of cell points is incorrect");
        }
        if cell.points.iter().any(|p| *p >= mesh.points.len()) {
            return Err("cell references a non-existent point");
        }
        let mut shape = Shape::new(kind, &mesh.cell_coords(cell))?;
        let num_vertices = kind.nnode();
        let ndim = mesh.ndim;

        // sub-control volumes
        let scvs = (0..num_vertices)
            .map(|m| SubControlVolume {
                local: kind.reference_node(m),
                global: shape.xxt[m],
            })
            .collect();

        // element center
        let center = kind.reference_center();
        let element_global = shape.calc_coords(&center);

        // interior faces
        let mut scv_faces = Vec::with_capacity(kind.edges().len());
        for edge in kind.edges() {
            let (a, b) = (edge[0], edge[1]);
            let mid = (kind.reference_node(a) + kind.reference_node(b)) / 2.0;
            let corners = match ndim {
                1 => vec![center],
                2 => vec![mid, center],
                _ => {
                    let mut adjacent = kind
                        .facets()
                        .iter()
                        .filter(|facet| facet.contains(&a) && facet.contains(&b))
                        .map(|facet| kind.reference_centroid(facet));
                    let (f1, f2) = match (adjacent.next(), adjacent.next()) {
                        (Some(f1), Some(f2)) => (f1, f2),
                        _ => return Err("edge must be shared by two facets"),
                    };
                    vec![mid, f1, center, f2]
                }
            };
            let (ip_local, ip_global, mut normal, area) = face_vector(&mut shape, &corners)?;
            if normal.dot(&(shape.xxt[b] - shape.xxt[a])) < 0.0 {
                normal = -normal;
            }
            let (grad, shape_value) = eval_shape(&mut shape, &ip_local)?;
            scv_faces.push(ScvFace {
                i: a,
                j: b,
                ip_local,
                ip_global,
                normal,
                area,
                grad,
                shape_value,
            });
        }

        log::debug!(
            "box geometry of cell {} ({:?}): {} sub-control volumes, {} interior faces",
            cell.id,
            kind,
            num_vertices,
            scv_faces.len()
        );

        Ok(FvElementGeometry {
            ndim,
            kind,
            num_vertices,
            element_global,
            scvs,
            scv_faces,
            boundary_faces: Vec::new(),
            shape,
        })
    }

    /// Appends the boundary faces of the given element facets
    ///
    /// Each facet contributes one boundary face per facet vertex.
    ///
    /// # Input
    ///
    /// * `facets` -- local indices of the facets on the domain boundary (see [Mesh::boundary_facets])
    pub fn with_boundary(&mut self, facets: &[usize]) -> Result<&mut Self, StrError> {
        let kind = self.kind;
        for f in facets {
            if *f >= kind.facets().len() {
                return Err("facet index is out of range");
            }
            let nodes = kind.facets()[*f];
            let n = nodes.len();
            let facet_center = kind.reference_centroid(nodes);
            for k in 0..n {
                let v = nodes[k];
                let here = kind.reference_node(v);
                let corners = match self.ndim {
                    1 => vec![here],
                    2 => {
                        let other = kind.reference_node(nodes[1 - k]);
                        vec![here, (here + other) / 2.0]
                    }
                    _ => {
                        let next = kind.reference_node(nodes[(k + 1) % n]);
                        let prev = kind.reference_node(nodes[(k + n - 1) % n]);
                        vec![here, (here + next) / 2.0, facet_center, (here + prev) / 2.0]
                    }
                };
                let (ip_local, ip_global, mut normal, area) = face_vector(&mut self.shape, &corners)?;
                if normal.dot(&(ip_global - self.element_global)) < 0.0 {
                    normal = -normal;
                }
                let (grad, shape_value) = eval_shape(&mut self.shape, &ip_local)?;
                self.boundary_faces.push(BoundaryFace {
                    scv: v,
                    facet: *f,
                    ip_local,
                    ip_global,
                    normal,
                    area,
                    grad,
                    shape_value,
                });
            }
        }
        Ok(self)
    }

    /// Allocates the geometries of all cells of a mesh, including the boundary faces
    pub fn all(mesh: &Mesh) -> Result<Vec<Self>, StrError> {
        let boundary = mesh.boundary_facets();
        mesh.cells
            .iter()
            .zip(boundary.iter())
            .map(|(cell, facets)| FvElementGeometry::new_with_boundary(mesh, cell, facets))
            .collect()
    }

    /// Allocates the geometries of all cells of a mesh in parallel, including the boundary faces
    pub fn all_parallel(mesh: &Mesh) -> Result<Vec<Self>, StrError> {
        let boundary = mesh.boundary_facets();
        mesh.cells
            .par_iter()
            .zip(boundary.par_iter())
            .map(|(cell, facets)| FvElementGeometry::new_with_boundary(mesh, cell, facets))
            .collect()
    }

    fn new_with_boundary(mesh: &Mesh, cell: &Cell, facets: &[usize]) -> Result<Self, StrError> {
        let mut geometry = FvElementGeometry::new(mesh, cell)?;
        geometry.with_boundary(facets)?;
        Ok(geometry)
    }

    /// Returns the index of the interior face between the sub-control volumes i and j (in any order)
    pub fn face_between(&self, i: usize, j: usize) -> Option<usize> {
        self.scv_faces
            .iter()
            .position(|face| (face.i == i && face.j == j) || (face.i == j && face.j == i))
    }
}

/// Computes the integration point, the (not yet oriented) unit normal, and the area of a face
///
/// The face is given by its corners in reference coordinates: one point in 1D,
/// a segment in 2D, and a quadrilateral in 3D.
fn face_vector(
    shape: &mut Shape,
    corners: &[Vector3<f64>],
) -> Result<(Vector3<f64>, Vector3<f64>, Vector3<f64>, f64), StrError> {
    let mut ip_local = Vector3::zeros();
    for c in corners {
        ip_local += c;
    }
    ip_local /= corners.len() as f64;
    let ip_global = shape.calc_coords(&ip_local);
    let xx: Vec<Vector3<f64>> = corners.iter().map(|c| shape.calc_coords(c)).collect();
    let (vector, area) = match xx.len() {
        1 => (Vector3::new(1.0, 0.0, 0.0), 1.0),
        2 => {
            let d = xx[1] - xx[0];
            let n = Vector3::new(d[1], -d[0], 0.0);
            (n, d.norm())
        }
        4 => {
            let n = (xx[2] - xx[0]).cross(&(xx[3] - xx[1])) / 2.0;
            let area = n.norm();
            (n, area)
        }
        _ => return Err("face must have 1, 2, or 4 corners"),
    };
    let len = vector.norm();
    if len <= 0.0 {
        return Err("face has zero area");
    }
    Ok((ip_local, ip_global, vector / len, area))
}

/// Evaluates the gradients and values of the shape functions at a reference point
fn eval_shape(
    shape: &mut Shape,
    ksi: &Vector3<f64>,
) -> Result<([Vector3<f64>; MAX_NVERTEX], [f64; MAX_NVERTEX]), StrError> {
    shape.calc_gradient(ksi)?;
    shape.calc_interp(ksi);
    Ok((shape.gradient, shape.interp))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
