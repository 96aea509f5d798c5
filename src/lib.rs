//! Planar surface code under the quantum erasure channel.
//!
//! The crate models a surface code lattice, applies erasure noise from an
//! injected generator, extracts syndromes and decodes erasures with the
//! linear-time peeling decoder of Delfosse and Zémor. A connectivity oracle
//! reports whether the residual operators form a logical error, and the
//! [`simulator`] module sweeps physical error rates on top of those operations.

pub mod decoder;
pub mod error;
pub mod noise;
pub mod qec_code;
pub mod qubit_graph;
pub mod simulator;

pub use error::CodeError;
pub use qec_code::frame::PauliFrame;
pub use qec_code::lattice::{Coord, Lattice, Pauli};
pub use qec_code::surface_code::{Correction, SurfaceCode};
pub use qec_code::TopologicalCode;
