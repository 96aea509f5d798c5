use hashbrown::HashSet;
use petgraph::graphmap::UnGraphMap;
use petgraph::visit::Dfs;

use crate::qec_code::lattice::{shift, Coord, Lattice, Pauli};

/// Graph over the data qubits carrying an operator of one Pauli type.
///
/// Two qubits are joined when they are one diagonal-adjacency step apart, so
/// a connected component is a chain of that operator.
#[derive(Debug)]
pub struct OperatorGraph {
    graph: UnGraphMap<Coord, ()>,
}

impl OperatorGraph {
    pub fn new(kind: Pauli, operators: &HashSet<Coord>) -> Self {
        let mut graph = UnGraphMap::with_capacity(operators.len(), operators.len() * 3);
        for &qubit in operators.iter() {
            graph.add_node(qubit);
        }
        for &u in operators.iter() {
            for &d in Lattice::diagonal_adjacency(kind) {
                let v = shift(u, d);
                if operators.contains(&v) {
                    graph.add_edge(u, v, ());
                }
            }
        }
        Self { graph }
    }

    /// Depth-first search from every seed carrying the operator.
    ///
    /// The discovered set is shared across seeds, so each qubit is visited at
    /// most once. Returns true as soon as a qubit of `targets` is reached.
    pub fn connects(&self, seeds: &[Coord], targets: &[Coord]) -> bool {
        let targets: HashSet<Coord> = targets.iter().copied().collect();
        let mut dfs = Dfs::empty(&self.graph);
        for &seed in seeds.iter().filter(|s| self.graph.contains_node(**s)) {
            dfs.move_to(seed);
            while let Some(qubit) = dfs.next(&self.graph) {
                if targets.contains(&qubit) {
                    return true;
                }
            }
        }
        false
    }
}
