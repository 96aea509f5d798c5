//! Sweeps of the erasure channel over a range of physical error rates.

use indicatif::ProgressBar;
use itertools::Itertools;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use tracing::info;

use crate::error::CodeError;
use crate::qec_code::surface_code::SurfaceCode;

pub mod table;

pub use table::SweepTable;

/// classification of a single trial
///
/// Every trial with a syndrome is decoded and measured again before it is
/// classified, so these tallies do not line up with a table that classifies
/// by the logical oracle right after the channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// no syndrome and no logical error after the channel
    NoError,
    /// no syndrome, but the operators form a logical error
    UndetectedError,
    /// the decoder cleared the syndrome without leaving a logical error
    CorrectedError,
    /// residual syndrome or logical error after decoding
    UncorrectedError,
}

impl Outcome {
    pub const ALL: [Outcome; 4] = [
        Outcome::NoError,
        Outcome::UndetectedError,
        Outcome::CorrectedError,
        Outcome::UncorrectedError,
    ];

    /// column of this outcome in a [`SweepTable`]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Outcome::NoError => "no_error",
            Outcome::UndetectedError => "undetected_error",
            Outcome::CorrectedError => "corrected_error",
            Outcome::UncorrectedError => "uncorrected_error",
        }
    }

    /// whether the encoded information was lost
    pub fn is_failure(self) -> bool {
        matches!(self, Outcome::UndetectedError | Outcome::UncorrectedError)
    }
}

/// parameters of one sweep
#[derive(Debug, Clone, PartialEq)]
pub struct SweepConfig {
    size: i32,
    lower_bound: f64,
    upper_bound: f64,
    n_points: usize,
    n_samples: usize,
    seed: u64,
}

impl SweepConfig {
    pub fn new(
        size: i32,
        lower_bound: f64,
        upper_bound: f64,
        n_points: usize,
        n_samples: usize,
    ) -> Result<Self, CodeError> {
        if size < 0 {
            return Err(CodeError::Configuration { size });
        }
        if !(0.0..=1.0).contains(&lower_bound) || !(0.0..=1.0).contains(&upper_bound) {
            return Err(CodeError::Sweep(format!(
                "error rate range [{lower_bound}, {upper_bound}] must lie within [0, 1]"
            )));
        }
        if lower_bound > upper_bound {
            return Err(CodeError::Sweep(format!(
                "lower bound {lower_bound} exceeds upper bound {upper_bound}"
            )));
        }
        if n_points == 0 {
            return Err(CodeError::Sweep("at least one error rate is required".into()));
        }
        if n_samples == 0 {
            return Err(CodeError::Sweep("at least one sample is required".into()));
        }
        Ok(Self {
            size,
            lower_bound,
            upper_bound,
            n_points,
            n_samples,
            seed: 0,
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// evenly spaced error rates from the lower to the upper bound, inclusive
    pub fn error_rates(&self) -> Vec<f64> {
        if self.n_points == 1 {
            return vec![self.lower_bound];
        }
        let step = (self.upper_bound - self.lower_bound) / (self.n_points - 1) as f64;
        (0..self.n_points)
            .map(|i| self.lower_bound + step * i as f64)
            .collect_vec()
    }
}

/// Run one trial on `code`, which is reset first.
pub fn run_trial<R: Rng + ?Sized>(
    code: &mut SurfaceCode,
    p: f64,
    rng: &mut R,
) -> Result<Outcome, CodeError> {
    code.reset();
    code.apply_random_errors(p, rng)?;
    code.measure_syndrome();

    if !code.error_detected() {
        return Ok(if code.has_logical_error() {
            Outcome::UndetectedError
        } else {
            Outcome::NoError
        });
    }

    code.erasure_decoder();
    code.measure_syndrome();
    if code.error_detected() || code.has_logical_error() {
        Ok(Outcome::UncorrectedError)
    } else {
        Ok(Outcome::CorrectedError)
    }
}

/// Sweep every error rate of `config`, `n_samples` trials each.
///
/// Each error rate owns a generator seeded from the config seed and the rate's
/// position, so points are reproducible independently of each other.
pub fn simulate(config: &SweepConfig, show_progress: bool) -> Result<SweepTable, CodeError> {
    let error_rates = config.error_rates();
    let mut table = SweepTable::new(error_rates.clone(), config.n_samples);
    let mut code = SurfaceCode::new(config.size)?;

    let total = (error_rates.len() * config.n_samples) as u64;
    let progress = if show_progress {
        ProgressBar::new(total)
    } else {
        ProgressBar::hidden()
    };

    for (row, &p) in error_rates.iter().enumerate() {
        let mut rng = SmallRng::seed_from_u64(config.seed.wrapping_add(row as u64));
        for _ in 0..config.n_samples {
            let outcome = run_trial(&mut code, p, &mut rng)?;
            table.record(row, outcome);
            progress.inc(1);
        }
        info!(
            size = config.size,
            p,
            failure_rate = table.failure_rate(row),
            "error rate simulated"
        );
    }
    progress.finish_and_clear();

    Ok(table)
}
