use rand::Rng;
use tracing::trace;

use crate::error::CodeError;
use crate::qec_code::frame::PauliFrame;
use crate::qec_code::lattice::{Coord, Pauli};

/// Pauli error drawn on an erased qubit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PauliError {
    I,
    X,
    Y,
    Z,
}

impl PauliError {
    pub const ALL: [PauliError; 4] = [PauliError::I, PauliError::X, PauliError::Y, PauliError::Z];

    /// draw one of I, X, Y, Z with probability 1/4 each
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// operator sets toggled by this error; Y toggles both
    pub fn components(self) -> &'static [Pauli] {
        match self {
            PauliError::I => &[],
            PauliError::X => &[Pauli::X],
            PauliError::Y => &[Pauli::X, Pauli::Z],
            PauliError::Z => &[Pauli::Z],
        }
    }
}

/// Quantum erasure channel with erasure probability `p`.
///
/// Each qubit is erased independently with probability `p`. An erased qubit
/// then suffers a uniformly random Pauli error drawn from a second, independent
/// draw, and is recorded in the erasure set whatever the draw was.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErasureChannel {
    p: f64,
}

impl ErasureChannel {
    pub fn new(p: f64) -> Result<Self, CodeError> {
        if !(0.0..=1.0).contains(&p) {
            return Err(CodeError::InvalidProbability(p));
        }
        Ok(Self { p })
    }

    /// Apply the channel to `qubits`, returning the number of erased qubits.
    pub fn apply<R, I>(&self, frame: &mut PauliFrame, qubits: I, rng: &mut R) -> usize
    where
        R: Rng + ?Sized,
        I: IntoIterator<Item = Coord>,
    {
        let mut erased = 0;
        for qubit in qubits {
            if !rng.gen_bool(self.p) {
                continue;
            }
            let error = PauliError::sample(rng);
            for &kind in error.components() {
                frame.toggle(kind, qubit);
            }
            frame.erasure_mut().insert(qubit);
            trace!(?qubit, ?error, "erased");
            erased += 1;
        }
        erased
    }
}
