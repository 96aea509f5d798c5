use thiserror::Error;

use crate::qec_code::lattice::Coord;

/// errors raised by code construction, state mutation and sweeps
#[derive(Debug, Error)]
pub enum CodeError {
    /// lattice parameters that cannot describe a lattice
    #[error("invalid lattice size {size}: size must not be negative")]
    Configuration { size: i32 },

    /// coordinate passed to a mutator is not a data qubit of the lattice
    #[error("{coord:?} is not a data qubit of a size {size} lattice")]
    InvalidQubit { coord: Coord, size: i32 },

    #[error("erasure probability {0} is outside [0, 1]")]
    InvalidProbability(f64),

    #[error("invalid sweep configuration: {0}")]
    Sweep(String),

    #[error(transparent)]
    Statistics(#[from] statrs::StatsError),
}
