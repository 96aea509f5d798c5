/// (row, col) position on the lattice grid
pub type Coord = (i32, i32);

/// Pauli type of an operator or of a stabilizer family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Pauli {
    X,
    Z,
}

impl Pauli {
    pub const ALL: [Pauli; 2] = [Pauli::X, Pauli::Z];

    /// the other Pauli type
    ///
    /// X stabilizers detect Z operators and Z stabilizers detect X operators.
    pub fn dual(self) -> Self {
        match self {
            Pauli::X => Pauli::Z,
            Pauli::Z => Pauli::X,
        }
    }
}

const FACE: [Coord; 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

const DIAGONAL_X: [Coord; 6] = [(0, 2), (-1, 1), (1, 1), (0, -2), (-1, -1), (1, -1)];
const DIAGONAL_Z: [Coord; 6] = [(2, 0), (1, -1), (1, 1), (-2, 0), (-1, -1), (-1, 1)];

/// Geometry of a planar surface code on a `size` x `size` grid.
///
/// Data qubits sit where row and column share parity. X stabilizers sit at
/// (odd row, even col) and Z stabilizers at (even row, odd col). X logical
/// operators run from the left to the right column, Z logical operators from
/// the top to the bottom row.
///
/// Every query is a pure function of the size; a non-positive size yields an
/// empty lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lattice {
    size: i32,
}

impl Lattice {
    pub fn new(size: i32) -> Self {
        Self { size: size.max(0) }
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    /// whether `c` lies inside the grid
    pub fn contains(&self, c: Coord) -> bool {
        (0..self.size).contains(&c.0) && (0..self.size).contains(&c.1)
    }

    pub fn is_data_qubit(&self, c: Coord) -> bool {
        self.contains(c) && (c.0 - c.1).rem_euclid(2) == 0
    }

    /// stabilizer family of `c`, if `c` is a stabilizer site
    pub fn stabilizer_type(&self, c: Coord) -> Option<Pauli> {
        if !self.contains(c) {
            return None;
        }
        match (c.0.rem_euclid(2), c.1.rem_euclid(2)) {
            (1, 0) => Some(Pauli::X),
            (0, 1) => Some(Pauli::Z),
            _ => None,
        }
    }

    /// all data qubits in row-major order
    pub fn data_qubits(&self) -> Vec<Coord> {
        let n = self.size;
        (0..n)
            .flat_map(|row| (row % 2..n).step_by(2).map(move |col| (row, col)))
            .collect()
    }

    /// stabilizer sites of `kind` in row-major order
    pub fn stabilizers(&self, kind: Pauli) -> Vec<Coord> {
        let n = self.size;
        let (row_start, col_start) = match kind {
            Pauli::X => (1, 0),
            Pauli::Z => (0, 1),
        };
        (row_start..n)
            .step_by(2)
            .flat_map(|row| (col_start..n).step_by(2).map(move |col| (row, col)))
            .collect()
    }

    /// the two opposite edges a logical operator of `kind` must connect
    pub fn boundary(&self, kind: Pauli) -> (Vec<Coord>, Vec<Coord>) {
        let n = self.size;
        let count = (n + 1) / 2;
        let offset = (n + 1) % 2;
        match kind {
            Pauli::X => (
                (0..count).map(|y| (2 * y, 0)).collect(),
                (0..count).map(|y| (2 * y + offset, n - 1)).collect(),
            ),
            Pauli::Z => (
                (0..count).map(|x| (0, 2 * x)).collect(),
                (0..count).map(|x| (n - 1, 2 * x + offset)).collect(),
            ),
        }
    }

    /// Virtual stabilizer sites of `kind` just outside the grid.
    ///
    /// These are the out-of-grid endpoints of edge data qubits. The first list
    /// holds sites at row or column -1, the second those at row or column `size`,
    /// each in row-major order. The far side depends on the parity of `size`:
    /// an odd lattice ends on an even row and column, an even one on odd ones.
    pub fn open_boundary(&self, kind: Pauli) -> (Vec<Coord>, Vec<Coord>) {
        let n = self.size;
        let odd = n % 2 == 1;
        match kind {
            Pauli::X => {
                let near = (0..n).step_by(2).map(|col| (-1, col)).collect();
                let far = if odd {
                    (0..n).step_by(2).map(|col| (n, col)).collect()
                } else {
                    (1..n).step_by(2).map(|row| (row, n)).collect()
                };
                (near, far)
            }
            Pauli::Z => {
                let near = (0..n).step_by(2).map(|row| (row, -1)).collect();
                let far = if odd {
                    (0..n).step_by(2).map(|row| (row, n)).collect()
                } else {
                    (1..n).step_by(2).map(|col| (n, col)).collect()
                };
                (near, far)
            }
        }
    }

    /// offsets along which an operator chain of `kind` propagates
    pub fn diagonal_adjacency(kind: Pauli) -> &'static [Coord; 6] {
        match kind {
            Pauli::X => &DIAGONAL_X,
            Pauli::Z => &DIAGONAL_Z,
        }
    }

    /// offsets coupling a stabilizer to its data qubits
    pub fn face_adjacency() -> &'static [Coord; 4] {
        &FACE
    }

    /// The two stabilizer sites of `kind` sharing a face with `qubit`.
    ///
    /// Either site may be virtual when `qubit` sits on the lattice edge.
    pub fn incident_checks(&self, qubit: Coord, kind: Pauli) -> [Coord; 2] {
        let (row, col) = qubit;
        let even_row = row.rem_euclid(2) == 0;
        match (kind, even_row) {
            (Pauli::X, true) => [(row + 1, col), (row - 1, col)],
            (Pauli::X, false) => [(row, col - 1), (row, col + 1)],
            (Pauli::Z, true) => [(row, col + 1), (row, col - 1)],
            (Pauli::Z, false) => [(row - 1, col), (row + 1, col)],
        }
    }

    /// stabilizers of `kind` adjacent to `qubit`, truncated at the lattice edge
    pub fn adjacent_stabilizers(&self, qubit: Coord, kind: Pauli) -> Vec<Coord> {
        self.incident_checks(qubit, kind)
            .into_iter()
            .filter(|&site| self.contains(site))
            .collect()
    }
}

/// translate `c` by `d`
pub fn shift(c: Coord, d: Coord) -> Coord {
    (c.0 + d.0, c.1 + d.1)
}
