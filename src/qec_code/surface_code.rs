use hashbrown::HashSet;
use rand::Rng;
use tracing::{debug, trace};

use super::frame::PauliFrame;
use super::lattice::{Coord, Lattice, Pauli};
use super::stabilizer::Stabilizer;
use super::TopologicalCode;
use crate::decoder::peeling;
use crate::error::CodeError;
use crate::noise::ErasureChannel;
use crate::qubit_graph::operator_graph::OperatorGraph;

/// Qubits flipped by one decode pass, grouped by the operator type flipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Correction {
    pub x: Vec<Coord>,
    pub z: Vec<Coord>,
}

impl Correction {
    pub fn qubits(&self, kind: Pauli) -> &[Coord] {
        match kind {
            Pauli::X => &self.x,
            Pauli::Z => &self.z,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty() && self.z.is_empty()
    }

    pub fn len(&self) -> usize {
        self.x.len() + self.z.len()
    }
}

/// Planar surface code with its Pauli frame, erasures and syndromes.
///
/// One instance belongs to one trial. The operator and erasure sets are open to
/// scripted mutation; every mutator takes `&mut self`, so no mutation can
/// overlap a decode.
#[derive(Debug, Clone)]
pub struct SurfaceCode {
    lattice: Lattice,
    x_stabilizers: Vec<Stabilizer>,
    z_stabilizers: Vec<Stabilizer>,
    /// virtual boundary sites, computed once per lattice
    x_open_boundary: Vec<Coord>,
    z_open_boundary: Vec<Coord>,
    pauli_frame: PauliFrame,
    x_syndrome: HashSet<Coord>,
    z_syndrome: HashSet<Coord>,
}

impl SurfaceCode {
    pub fn new(size: i32) -> Result<Self, CodeError> {
        if size < 0 {
            return Err(CodeError::Configuration { size });
        }
        let lattice = Lattice::new(size);
        let x_stabilizers = Stabilizer::generate(&lattice, Pauli::X);
        let z_stabilizers = Stabilizer::generate(&lattice, Pauli::Z);
        let open = |kind| {
            let (near, far) = lattice.open_boundary(kind);
            [near, far].concat()
        };
        let x_open_boundary = open(Pauli::X);
        let z_open_boundary = open(Pauli::Z);
        debug!(
            size,
            x_stabilizers = x_stabilizers.len(),
            z_stabilizers = z_stabilizers.len(),
            "surface code constructed"
        );

        Ok(Self {
            lattice,
            x_stabilizers,
            z_stabilizers,
            x_open_boundary,
            z_open_boundary,
            pauli_frame: PauliFrame::new(),
            x_syndrome: HashSet::new(),
            z_syndrome: HashSet::new(),
        })
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    pub fn size(&self) -> i32 {
        self.lattice.size()
    }

    pub fn stabilizers(&self, kind: Pauli) -> &[Stabilizer] {
        match kind {
            Pauli::X => &self.x_stabilizers,
            Pauli::Z => &self.z_stabilizers,
        }
    }

    /// virtual sites just outside the grid for stabilizers of `kind`
    pub fn open_boundary(&self, kind: Pauli) -> &[Coord] {
        match kind {
            Pauli::X => &self.x_open_boundary,
            Pauli::Z => &self.z_open_boundary,
        }
    }

    pub fn pauli_frame(&self) -> &PauliFrame {
        &self.pauli_frame
    }

    /// data qubits carrying an operator of `kind`
    pub fn errors(&self, kind: Pauli) -> &HashSet<Coord> {
        self.pauli_frame.frame(kind)
    }

    pub fn erasure(&self) -> &HashSet<Coord> {
        self.pauli_frame.erasure()
    }

    fn check_qubit(&self, qubit: Coord) -> Result<(), CodeError> {
        if self.lattice.is_data_qubit(qubit) {
            Ok(())
        } else {
            Err(CodeError::InvalidQubit {
                coord: qubit,
                size: self.lattice.size(),
            })
        }
    }

    /// Apply an operator of `kind` to `qubit`, composing with what is there.
    ///
    /// Returns whether the qubit carries the operator afterwards.
    pub fn toggle_error(&mut self, kind: Pauli, qubit: Coord) -> Result<bool, CodeError> {
        self.check_qubit(qubit)?;
        Ok(self.pauli_frame.toggle(kind, qubit))
    }

    /// make `qubit` carry an operator of `kind`
    pub fn insert_error(&mut self, kind: Pauli, qubit: Coord) -> Result<(), CodeError> {
        self.check_qubit(qubit)?;
        self.pauli_frame.frame_mut(kind).insert(qubit);
        Ok(())
    }

    /// remove any operator of `kind` from `qubit`
    pub fn remove_error(&mut self, kind: Pauli, qubit: Coord) -> Result<(), CodeError> {
        self.check_qubit(qubit)?;
        self.pauli_frame.frame_mut(kind).remove(&qubit);
        Ok(())
    }

    /// insert every qubit of `qubits` into the operator set of `kind`
    pub fn insert_errors<I>(&mut self, kind: Pauli, qubits: I) -> Result<(), CodeError>
    where
        I: IntoIterator<Item = Coord>,
    {
        qubits
            .into_iter()
            .try_for_each(|qubit| self.insert_error(kind, qubit))
    }

    /// flag `qubit` as erased
    pub fn erase(&mut self, qubit: Coord) -> Result<(), CodeError> {
        self.check_qubit(qubit)?;
        self.pauli_frame.erasure_mut().insert(qubit);
        Ok(())
    }

    pub fn erase_all<I>(&mut self, qubits: I) -> Result<(), CodeError>
    where
        I: IntoIterator<Item = Coord>,
    {
        qubits.into_iter().try_for_each(|qubit| self.erase(qubit))
    }

    /// clear the erasure flag of `qubit`
    pub fn restore(&mut self, qubit: Coord) -> Result<(), CodeError> {
        self.check_qubit(qubit)?;
        self.pauli_frame.erasure_mut().remove(&qubit);
        Ok(())
    }

    /// reset code
    pub fn reset(&mut self) {
        self.pauli_frame.reset();
        self.x_syndrome.clear();
        self.z_syndrome.clear();
    }

    /// Erase every data qubit with probability `p` and apply a uniformly random
    /// Pauli error to each erased qubit.
    ///
    /// Returns the number of qubits erased.
    pub fn apply_random_errors<R: Rng + ?Sized>(
        &mut self,
        p: f64,
        rng: &mut R,
    ) -> Result<usize, CodeError> {
        let channel = ErasureChannel::new(p)?;
        let erased = channel.apply(&mut self.pauli_frame, self.lattice.data_qubits(), rng);
        debug!(p, erased, "erasure channel applied");
        Ok(erased)
    }

    /// syndrome measurement
    pub fn measure_syndrome(&mut self) {
        let Self {
            x_stabilizers,
            z_stabilizers,
            pauli_frame,
            x_syndrome,
            z_syndrome,
            ..
        } = self;

        for (stabilizers, syndrome) in [(x_stabilizers, x_syndrome), (z_stabilizers, z_syndrome)] {
            syndrome.clear();
            for stabilizer in stabilizers.iter() {
                if stabilizer.parity(pauli_frame.frame(stabilizer.kind().dual())) {
                    syndrome.insert(stabilizer.ancilla);
                }
            }
        }
        trace!(x = ?self.x_syndrome, z = ?self.z_syndrome, "syndrome measured");
    }

    pub fn syndrome(&self, kind: Pauli) -> &HashSet<Coord> {
        match kind {
            Pauli::X => &self.x_syndrome,
            Pauli::Z => &self.z_syndrome,
        }
    }

    pub fn error_detected(&self) -> bool {
        !self.x_syndrome.is_empty() || !self.z_syndrome.is_empty()
    }

    /// whether an operator chain connects the two boundaries of its type
    pub fn has_logical_error(&self) -> bool {
        Pauli::ALL.into_iter().any(|kind| {
            let operators = self.pauli_frame.frame(kind);
            if operators.is_empty() {
                return false;
            }
            let (start, end) = self.lattice.boundary(kind);
            OperatorGraph::new(kind, operators).connects(&start, &end)
        })
    }

    /// Decode the erasure set with the peeling decoder and apply the correction.
    ///
    /// The syndrome must have been measured against the current operators.
    /// A syndrome outside every erased cluster cannot be cured; it shows up on
    /// the next measurement.
    pub fn erasure_decoder(&mut self) -> Correction {
        let mut correction = Correction::default();
        for stab_kind in Pauli::ALL {
            let flipped = stab_kind.dual();
            let qubits = peeling::decode(
                &self.lattice,
                self.open_boundary(stab_kind),
                self.pauli_frame.erasure(),
                self.syndrome(stab_kind),
                stab_kind,
            );
            for &qubit in qubits.iter() {
                debug_assert!(self.pauli_frame.erasure().contains(&qubit));
                self.pauli_frame.toggle(flipped, qubit);
            }
            match flipped {
                Pauli::X => correction.x = qubits,
                Pauli::Z => correction.z = qubits,
            }
        }
        debug!(
            x = correction.x.len(),
            z = correction.z.len(),
            "erasure correction applied"
        );
        correction
    }
}

impl TopologicalCode for SurfaceCode {
    type Geometry = Lattice;

    fn geometry(&self) -> &Lattice {
        &self.lattice
    }

    fn measure_syndrome(&mut self) {
        SurfaceCode::measure_syndrome(self)
    }

    fn syndrome(&self, kind: Pauli) -> &HashSet<Coord> {
        SurfaceCode::syndrome(self, kind)
    }

    fn error_detected(&self) -> bool {
        SurfaceCode::error_detected(self)
    }

    fn has_logical_error(&self) -> bool {
        SurfaceCode::has_logical_error(self)
    }

    fn erasure_decoder(&mut self) -> Correction {
        SurfaceCode::erasure_decoder(self)
    }
}
