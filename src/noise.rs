pub mod noise_model;

pub use noise_model::{ErasureChannel, PauliError};
