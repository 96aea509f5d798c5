use hashbrown::HashSet;

use super::lattice::{shift, Coord, Lattice, Pauli};

/// A parity check together with the data qubits it acts on.
///
/// `pauli_product` keeps one slot per face offset; slots outside the lattice
/// are `None`, so edge stabilizers carry two or three qubits.
#[derive(Debug, Clone)]
pub struct Stabilizer {
    pub ancilla: Coord,
    kind: Pauli,
    pauli_product: [Option<Coord>; 4],
}

impl Stabilizer {
    pub fn new(ancilla: Coord, kind: Pauli, pauli_product: [Option<Coord>; 4]) -> Self {
        Self {
            ancilla,
            kind,
            pauli_product,
        }
    }

    /// generate every stabilizer of `kind` on `lattice`
    pub fn generate(lattice: &Lattice, kind: Pauli) -> Vec<Self> {
        lattice
            .stabilizers(kind)
            .into_iter()
            .map(|ancilla| {
                let mut pauli_product = [None; 4];
                for (slot, &d) in pauli_product.iter_mut().zip(Lattice::face_adjacency()) {
                    let qubit = shift(ancilla, d);
                    if lattice.is_data_qubit(qubit) {
                        *slot = Some(qubit);
                    }
                }
                Self::new(ancilla, kind, pauli_product)
            })
            .collect()
    }

    pub fn kind(&self) -> Pauli {
        self.kind
    }

    /// data qubits in the support
    pub fn support(&self) -> impl Iterator<Item = Coord> + '_ {
        self.pauli_product.iter().filter_map(|q| *q)
    }

    /// measurement outcome against the operators this stabilizer detects
    pub fn parity(&self, operators: &HashSet<Coord>) -> bool {
        self.support()
            .fold(false, |parity, qubit| parity ^ operators.contains(&qubit))
    }
}
