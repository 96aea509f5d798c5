use hashbrown::HashSet;

use super::lattice::{Coord, Pauli};

/// Operators and erasures currently present on the data qubits.
///
/// Operators compose by symmetric difference: toggling the same qubit twice
/// leaves it clean. The erasure set is independent of the operators.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PauliFrame {
    x_frame: HashSet<Coord>,
    z_frame: HashSet<Coord>,
    erasure: HashSet<Coord>,
}

impl PauliFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// return operator set of `kind`
    pub fn frame(&self, kind: Pauli) -> &HashSet<Coord> {
        match kind {
            Pauli::X => &self.x_frame,
            Pauli::Z => &self.z_frame,
        }
    }

    /// return mutable operator set of `kind`
    pub fn frame_mut(&mut self, kind: Pauli) -> &mut HashSet<Coord> {
        match kind {
            Pauli::X => &mut self.x_frame,
            Pauli::Z => &mut self.z_frame,
        }
    }

    pub fn erasure(&self) -> &HashSet<Coord> {
        &self.erasure
    }

    pub fn erasure_mut(&mut self) -> &mut HashSet<Coord> {
        &mut self.erasure
    }

    /// Toggle an operator of `kind` on `qubit`.
    ///
    /// Returns whether the qubit carries the operator afterwards.
    pub fn toggle(&mut self, kind: Pauli, qubit: Coord) -> bool {
        let frame = self.frame_mut(kind);
        if frame.remove(&qubit) {
            false
        } else {
            frame.insert(qubit);
            true
        }
    }

    /// reset frame
    pub fn reset(&mut self) {
        self.x_frame.clear();
        self.z_frame.clear();
        self.erasure.clear();
    }
}
