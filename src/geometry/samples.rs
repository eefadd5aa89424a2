use super::{Cell, GeoKind, Mesh, Point};

/// Holds sample meshes
pub struct Samples {}

impl Samples {
    /// Returns a mesh with a single Lin2 of length 10
    #[rustfmt::skip]
    pub fn one_lin2() -> Mesh {
        // 0----------------1 → x
        // 0.0             10.0
        Mesh {
            ndim: 1,
            points: vec![
                Point { id: 0, coords: vec![0.0] },
                Point { id: 1, coords: vec![10.0] },
            ],
            cells: vec![
                Cell { id: 0, attribute: 1, kind: GeoKind::Lin2, points: vec![0, 1] },
            ],
        }
    }

    /// Returns a mesh with a single (unit, right-angled) Tri3
    #[rustfmt::skip]
    pub fn one_tri3() -> Mesh {
        // 1.0  2
        //      |`.
        //      |  `.
        //      | [0]`.
        // 0.0  0------1
        //     0.0    1.0
        Mesh {
            ndim: 2,
            points: vec![
                Point { id: 0, coords: vec![0.0, 0.0] },
                Point { id: 1, coords: vec![1.0, 0.0] },
                Point { id: 2, coords: vec![0.0, 1.0] },
            ],
            cells: vec![
                Cell { id: 0, attribute: 1, kind: GeoKind::Tri3, points: vec![0, 1, 2] },
            ],
        }
    }

    /// Returns a mesh with a single unit-square Qua4
    #[rustfmt::skip]
    pub fn one_qua4() -> Mesh {
        // 1.0  3-----2
        //      | [0] |
        // 0.0  0-----1
        //     0.0   1.0
        Mesh {
            ndim: 2,
            points: vec![
                Point { id: 0, coords: vec![0.0, 0.0] },
                Point { id: 1, coords: vec![1.0, 0.0] },
                Point { id: 2, coords: vec![1.0, 1.0] },
                Point { id: 3, coords: vec![0.0, 1.0] },
            ],
            cells: vec![
                Cell { id: 0, attribute: 1, kind: GeoKind::Qua4, points: vec![0, 1, 2, 3] },
            ],
        }
    }

    /// Returns a mesh with a single distorted Qua4
    #[rustfmt::skip]
    pub fn one_distorted_qua4() -> Mesh {
        Mesh {
            ndim: 2,
            points: vec![
                Point { id: 0, coords: vec![ 0.0, 0.0] },
                Point { id: 1, coords: vec![ 2.0, 0.2] },
                Point { id: 2, coords: vec![ 2.5, 1.5] },
                Point { id: 3, coords: vec![-0.2, 1.0] },
            ],
            cells: vec![
                Cell { id: 0, attribute: 1, kind: GeoKind::Qua4, points: vec![0, 1, 2, 3] },
            ],
        }
    }

    /// Returns a mesh with two unit-square Qua4 side by side
    #[rustfmt::skip]
    pub fn two_qua4() -> Mesh {
        // 1.0  3-----4-----5
        //      | [0] | [1] |      [#] indicates id
        //      | (1) | (2) |      (#) indicates attribute
        // 0.0  0-----1-----2
        //     0.0   1.0   2.0
        Mesh {
            ndim: 2,
            points: vec![
                Point { id: 0, coords: vec![0.0, 0.0] },
                Point { id: 1, coords: vec![1.0, 0.0] },
                Point { id: 2, coords: vec![2.0, 0.0] },
                Point { id: 3, coords: vec![0.0, 1.0] },
                Point { id: 4, coords: vec![1.0, 1.0] },
                Point { id: 5, coords: vec![2.0, 1.0] },
            ],
            cells: vec![
                Cell { id: 0, attribute: 1, kind: GeoKind::Qua4, points: vec![0, 1, 4, 3] },
                Cell { id: 1, attribute: 2, kind: GeoKind::Qua4, points: vec![1, 2, 5, 4] },
            ],
        }
    }

    /// Returns a mesh with a single (unit, right-angled) Tet4
    #[rustfmt::skip]
    pub fn one_tet4() -> Mesh {
        Mesh {
            ndim: 3,
            points: vec![
                Point { id: 0, coords: vec![0.0, 0.0, 0.0] },
                Point { id: 1, coords: vec![1.0, 0.0, 0.0] },
                Point { id: 2, coords: vec![0.0, 1.0, 0.0] },
                Point { id: 3, coords: vec![0.0, 0.0, 1.0] },
            ],
            cells: vec![
                Cell { id: 0, attribute: 1, kind: GeoKind::Tet4, points: vec![0, 1, 2, 3] },
            ],
        }
    }

    /// Returns a mesh with a single Hex8 (box of size 2 × 1 × 1)
    #[rustfmt::skip]
    pub fn one_hex8() -> Mesh {
        //       7--------------6  1.0
        //      /.             /|
        //     / .            / |          z
        //    4--------------5  |          ↑
        //    |  3...........|..2  1.0     o → x
        //    | .            | /          ↙
        //    |.             |/          y
        //    0--------------1  0.0
        //   0.0            2.0
        Mesh {
            ndim: 3,
            points: vec![
                Point { id: 0, coords: vec![0.0, 0.0, 0.0] },
                Point { id: 1, coords: vec![2.0, 0.0, 0.0] },
                Point { id: 2, coords: vec![2.0, 1.0, 0.0] },
                Point { id: 3, coords: vec![0.0, 1.0, 0.0] },
                Point { id: 4, coords: vec![0.0, 0.0, 1.0] },
                Point { id: 5, coords: vec![2.0, 0.0, 1.0] },
                Point { id: 6, coords: vec![2.0, 1.0, 1.0] },
                Point { id: 7, coords: vec![0.0, 1.0, 1.0] },
            ],
            cells: vec![
                Cell { id: 0, attribute: 1, kind: GeoKind::Hex8, points: vec![0, 1, 2, 3, 4, 5, 6, 7] },
            ],
        }
    }

    /// Returns a 2D column of `n` unit-square Qua4 stacked along y
    ///
    /// The cells with an odd id have attribute 2; the others have attribute 1.
    pub fn column_qua4(n: usize) -> Mesh {
        let mut points = Vec::new();
        for k in 0..(n + 1) {
            let y = k as f64;
            points.push(Point { id: 2 * k, coords: vec![0.0, y] });
            points.push(Point { id: 2 * k + 1, coords: vec![1.0, y] });
        }
        let cells = (0..n)
            .map(|e| Cell {
                id: e,
                attribute: if e % 2 == 0 { 1 } else { 2 },
                kind: GeoKind::Qua4,
                points: vec![2 * e, 2 * e + 1, 2 * e + 3, 2 * e + 2],
            })
            .collect();
        Mesh { ndim: 2, points, cells }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
