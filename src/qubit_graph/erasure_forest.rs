use hashbrown::HashSet;
use itertools::Itertools;

use crate::qec_code::lattice::{shift, Coord, Lattice, Pauli};

/// One stabilizer site (or virtual boundary site) of the erasure forest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForestNode {
    pub coord: Coord,
    /// arena index of the parent node
    pub parent: Option<usize>,
    /// erased data qubit joining this node to its parent
    pub parent_qubit: Option<Coord>,
    pub syndrome: bool,
    pub children: Vec<usize>,
    /// parity of the syndromes in the subtree, filled in by peeling
    pub subtree_parity: bool,
}

/// Spanning forest of the erasure graph for one stabilizer type.
///
/// Nodes are stored in a flat arena and refer to each other by index. A child
/// is always allocated after its parent. The forest belongs to a single decode
/// pass and is dropped with it.
#[derive(Debug, Clone)]
pub struct ErasureForest {
    kind: Pauli,
    nodes: Vec<ForestNode>,
    roots: Vec<usize>,
}

/// bookkeeping shared by every tree while the forest grows
struct Growth<'a> {
    lattice: &'a Lattice,
    syndrome: &'a HashSet<Coord>,
    kind: Pauli,
    pending: HashSet<Coord>,
    visited: HashSet<Coord>,
    stack: Vec<usize>,
}

impl ErasureForest {
    /// Build the forest of `kind` over the erased qubits.
    ///
    /// `boundary` lists the virtual sites of the open boundary of `kind`, as
    /// given by [`Lattice::open_boundary`]. They form one merged boundary vertex:
    /// all of them are marked visited up front and each claims its own erased
    /// qubits before any tree grows inward. Erased qubits that no boundary tree
    /// reaches are then rooted at their first incident stabilizer. Every erased
    /// qubit is consumed exactly once, either as a tree edge or as a discarded
    /// cycle edge.
    pub fn grow(
        lattice: &Lattice,
        boundary: &[Coord],
        erasure: &HashSet<Coord>,
        syndrome: &HashSet<Coord>,
        kind: Pauli,
    ) -> Self {
        let mut forest = Self {
            kind,
            nodes: Vec::with_capacity(erasure.len() + 1),
            roots: Vec::new(),
        };
        let mut growth = Growth {
            lattice,
            syndrome,
            kind,
            pending: erasure
                .iter()
                .copied()
                .filter(|&q| lattice.is_data_qubit(q))
                .collect(),
            visited: HashSet::new(),
            stack: Vec::new(),
        };

        growth.visited.extend(boundary.iter().copied());

        // the merged boundary claims all its edges first
        for &coord in boundary {
            forest.plant(coord, &mut growth);
        }
        forest.extend_trees(&mut growth);

        // sorted so the remaining roots do not depend on hash order
        let interior = growth.pending.iter().copied().sorted().collect_vec();
        for qubit in interior {
            if !growth.pending.contains(&qubit) {
                continue;
            }
            let root = lattice
                .incident_checks(qubit, kind)
                .into_iter()
                .find(|site| !growth.visited.contains(site));
            match root {
                Some(coord) => {
                    growth.visited.insert(coord);
                    forest.plant(coord, &mut growth);
                    forest.extend_trees(&mut growth);
                }
                // both endpoints already in the forest: a cycle edge
                None => {
                    growth.pending.remove(&qubit);
                }
            }
        }

        forest
    }

    /// allocate a root at `coord` and claim its erased qubits
    fn plant(&mut self, coord: Coord, growth: &mut Growth) {
        let index = self.push(coord, None, None, growth.syndrome.contains(&coord));
        self.expand(index, growth);
        if self.nodes[index].children.is_empty() {
            // nothing was allocated after the root
            self.nodes.pop();
        } else {
            self.roots.push(index);
        }
    }

    fn extend_trees(&mut self, growth: &mut Growth) {
        while let Some(index) = growth.stack.pop() {
            self.expand(index, growth);
        }
    }

    /// claim every pending erased qubit around node `index`
    fn expand(&mut self, index: usize, growth: &mut Growth) {
        let coord = self.nodes[index].coord;
        for &d in Lattice::face_adjacency() {
            let qubit = shift(coord, d);
            if !growth.pending.remove(&qubit) {
                continue;
            }
            for site in growth.lattice.incident_checks(qubit, growth.kind) {
                if site == coord || !growth.visited.insert(site) {
                    continue;
                }
                let syndrome = growth.syndrome.contains(&site);
                let child = self.push(site, Some(index), Some(qubit), syndrome);
                self.nodes[index].children.push(child);
                growth.stack.push(child);
            }
        }
    }

    fn push(
        &mut self,
        coord: Coord,
        parent: Option<usize>,
        parent_qubit: Option<Coord>,
        syndrome: bool,
    ) -> usize {
        self.nodes.push(ForestNode {
            coord,
            parent,
            parent_qubit,
            syndrome,
            children: Vec::new(),
            subtree_parity: false,
        });
        self.nodes.len() - 1
    }

    /// Peel every tree leaves first and return the selected qubits.
    ///
    /// A node whose subtree holds an odd number of syndromes selects the qubit
    /// joining it to its parent. Root parity has no edge to absorb it: a
    /// virtual root takes it up, an interior root leaves it as residual
    /// syndrome.
    pub fn peel(&mut self) -> Vec<Coord> {
        let mut correction = Vec::new();
        for root in self.roots.clone() {
            for index in self.post_order(root) {
                let node = &self.nodes[index];
                let parity = node
                    .children
                    .iter()
                    .fold(node.syndrome, |acc, &c| acc ^ self.nodes[c].subtree_parity);
                if let (true, Some(qubit)) = (parity, node.parent_qubit) {
                    correction.push(qubit);
                }
                self.nodes[index].subtree_parity = parity;
            }
        }
        correction
    }

    /// arena indices of the tree under `root`, children before parents
    pub fn post_order(&self, root: usize) -> Vec<usize> {
        let mut order = Vec::new();
        let mut stack = vec![(root, false)];
        while let Some((index, expanded)) = stack.pop() {
            if expanded {
                order.push(index);
                continue;
            }
            stack.push((index, true));
            for &child in self.nodes[index].children.iter().rev() {
                stack.push((child, false));
            }
        }
        order
    }

    pub fn kind(&self) -> Pauli {
        self.kind
    }

    pub fn nodes(&self) -> &[ForestNode] {
        &self.nodes
    }

    pub fn roots(&self) -> &[usize] {
        &self.roots
    }

    /// erased qubits used as tree edges
    pub fn edges(&self) -> impl Iterator<Item = Coord> + '_ {
        self.nodes.iter().filter_map(|n| n.parent_qubit)
    }
}
