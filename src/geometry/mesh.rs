use super::GeoKind;
use crate::base::MAX_NDIM;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Holds the id and coordinates of a point (vertex)
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Point {
    /// Identification number which equals the index of the point in the mesh
    pub id: usize,

    /// Point coordinates (len = ndim)
    pub coords: Vec<f64>,
}

/// Holds the id, attribute, kind, and points of a cell (element)
///
/// The cell is the element handle given to the spatial parameters.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Cell {
    /// Identification number which equals the index of the cell in the mesh
    pub id: usize,

    /// Attribute (material/region) number
    pub attribute: usize,

    /// The kind of reference element
    pub kind: GeoKind,

    /// List of points defining this cell, in the local order of the reference element
    pub points: Vec<usize>,
}

/// Holds the points and cells of a mesh
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Mesh {
    /// Space dimension
    pub ndim: usize,

    /// All points
    pub points: Vec<Point>,

    /// All cells
    pub cells: Vec<Cell>,
}

impl Mesh {
    /// Validates all data
    ///
    /// Returns a message with the inconsistent data, or returns None if everything is all right.
    pub fn validate(&self) -> Option<String> {
        if self.ndim < 1 || self.ndim > MAX_NDIM {
            return Some(format!("ndim = {:?} is incorrect; it must be 1, 2, or 3", self.ndim));
        }
        for (p, point) in self.points.iter().enumerate() {
            if point.id != p {
                return Some(format!("point id = {:?} is incorrect; it must be {}", point.id, p));
            }
            if point.coords.len() != self.ndim {
                return Some(format!(
                    "point {} has {} coordinates; it must have ndim = {}",
                    p,
                    point.coords.len(),
                    self.ndim
                ));
            }
        }
        for (e, cell) in self.cells.iter().enumerate() {
            if cell.id != e {
                return Some(format!("cell id = {:?} is incorrect; it must be {}", cell.id, e));
            }
            if cell.kind.ndim() != self.ndim {
                return Some(format!(
                    "cell {} of kind {:?} is incompatible with ndim = {}",
                    e, cell.kind, self.ndim
                ));
            }
            if cell.points.len() != cell.kind.nnode() {
                return Some(format!(
                    "cell {} has {} points; it must have {}",
                    e,
                    cell.points.len(),
                    cell.kind.nnode()
                ));
            }
            if let Some(p) = cell.points.iter().find(|p| **p >= self.points.len()) {
                return Some(format!("cell {} references a non-existent point {}", e, p));
            }
        }
        None // all good
    }

    /// Returns the coordinates of the points of a cell
    pub fn cell_coords<'a>(&'a self, cell: &Cell) -> Vec<&'a [f64]> {
        cell.points.iter().map(|p| self.points[*p].coords.as_slice()).collect()
    }

    /// Finds the facets of each cell that lie on the boundary of the domain
    ///
    /// A facet is on the boundary if no other cell shares it.
    ///
    /// Returns the local facet indices of each cell (indexed by cell id).
    pub fn boundary_facets(&self) -> Vec<Vec<usize>> {
        let mut count: HashMap<Vec<usize>, usize> = HashMap::new();
        for cell in &self.cells {
            for facet in cell.kind.facets() {
                let key = facet_key(cell, facet);
                *count.entry(key).or_insert(0) += 1;
            }
        }
        self.cells
            .iter()
            .map(|cell| {
                cell.kind
                    .facets()
                    .iter()
                    .enumerate()
                    .filter(|(_, facet)| count.get(&facet_key(cell, facet)) == Some(&1))
                    .map(|(f, _)| f)
                    .collect()
            })
            .collect()
    }
}

/// Returns the sorted global point ids of a local facet
fn facet_key(cell: &Cell, facet: &[usize]) -> Vec<usize> {
    let mut key: Vec<usize> = facet.iter().map(|m| cell.points[*m]).collect();
    key.sort();
    key
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
