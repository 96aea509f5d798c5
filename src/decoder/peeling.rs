//! Linear-time erasure decoder (Delfosse and Zémor, 2017).
//!
//! For one stabilizer type the decoder grows a spanning forest over the erased
//! qubits, then peels it from the leaves: a node whose subtree holds an odd
//! number of syndromes flips the qubit joining it to its parent. The returned
//! qubits are flipped in the operator set the stabilizer type detects.

use hashbrown::HashSet;
use tracing::debug;

use crate::qec_code::lattice::{Coord, Lattice, Pauli};
use crate::qubit_graph::erasure_forest::ErasureForest;

/// Decode one stabilizer type; `boundary` holds its virtual boundary sites.
pub fn decode(
    lattice: &Lattice,
    boundary: &[Coord],
    erasure: &HashSet<Coord>,
    syndrome: &HashSet<Coord>,
    kind: Pauli,
) -> Vec<Coord> {
    let mut forest = ErasureForest::grow(lattice, boundary, erasure, syndrome, kind);
    let correction = forest.peel();
    debug!(
        ?kind,
        trees = forest.roots().len(),
        nodes = forest.nodes().len(),
        corrections = correction.len(),
        "peeled erasure forest"
    );
    correction
}
