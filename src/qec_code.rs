use hashbrown::HashSet;

use self::lattice::{Coord, Pauli};
use self::surface_code::Correction;

pub mod frame;
pub mod lattice;
pub mod stabilizer;
pub mod surface_code;

/// operations shared by topological codes decoded over the erasure channel
///
/// The planar surface code is the only implementor. A toric variant would need
/// its own periodic geometry and boundary-free decoding rule, neither of which
/// is defined here.
pub trait TopologicalCode {
    /// lattice geometry of the code
    type Geometry;

    /// return geometry
    fn geometry(&self) -> &Self::Geometry;

    /// recompute both syndromes from the current operators
    fn measure_syndrome(&mut self);

    /// syndrome of the stabilizers of `kind`
    fn syndrome(&self, kind: Pauli) -> &HashSet<Coord>;

    /// true iff either syndrome is non-empty
    fn error_detected(&self) -> bool {
        !self.syndrome(Pauli::X).is_empty() || !self.syndrome(Pauli::Z).is_empty()
    }

    /// true iff an operator chain connects the two logical boundaries
    fn has_logical_error(&self) -> bool;

    /// decode the erasure set and apply the correction
    fn erasure_decoder(&mut self) -> Correction;
}
