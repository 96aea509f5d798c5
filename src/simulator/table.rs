use std::fmt;

use ndarray::prelude::*;
use statrs::distribution::{ContinuousCDF, Normal};

use super::Outcome;
use crate::error::CodeError;

/// Outcome counts of a sweep, one row per physical error rate.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepTable {
    error_rates: Vec<f64>,
    counts: Array2<u64>,
    samples: usize,
}

impl SweepTable {
    pub fn new(error_rates: Vec<f64>, samples: usize) -> Self {
        let counts = Array::zeros((error_rates.len(), Outcome::ALL.len()));
        Self {
            error_rates,
            counts,
            samples,
        }
    }

    pub fn error_rates(&self) -> &[f64] {
        &self.error_rates
    }

    pub fn samples(&self) -> usize {
        self.samples
    }

    /// return count matrix
    pub fn counts(&self) -> ArrayView2<u64> {
        self.counts.view()
    }

    pub fn record(&mut self, row: usize, outcome: Outcome) {
        self.counts[(row, outcome.index())] += 1;
    }

    pub fn count(&self, row: usize, outcome: Outcome) -> u64 {
        self.counts[(row, outcome.index())]
    }

    /// fraction of trials at `row` that lost the encoded information
    pub fn failure_rate(&self, row: usize) -> f64 {
        let trials: u64 = self.counts.row(row).sum();
        if trials == 0 {
            return 0.0;
        }
        let failures: u64 = Outcome::ALL
            .iter()
            .filter(|o| o.is_failure())
            .map(|&o| self.count(row, o))
            .sum();
        failures as f64 / trials as f64
    }

    /// Normal-approximation interval for the failure rate at `row`.
    pub fn confidence_interval(&self, row: usize, confidence: f64) -> Result<(f64, f64), CodeError> {
        if !(confidence > 0.0 && confidence < 1.0) {
            return Err(CodeError::Sweep(format!(
                "confidence {confidence} must lie strictly between 0 and 1"
            )));
        }
        let trials = self.counts.row(row).sum() as f64;
        let rate = self.failure_rate(row);
        if trials == 0.0 {
            return Ok((0.0, 1.0));
        }
        let z = Normal::new(0.0, 1.0)?.inverse_cdf(0.5 + confidence / 2.0);
        let half_width = z * (rate * (1.0 - rate) / trials).sqrt();
        Ok(((rate - half_width).max(0.0), (rate + half_width).min(1.0)))
    }
}

impl fmt::Display for SweepTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>20}", "physical_error_rate")?;
        for outcome in Outcome::ALL {
            write!(f, " {:>18}", outcome.label())?;
        }
        writeln!(f)?;
        for (row, p) in self.error_rates.iter().enumerate() {
            write!(f, "{:>20.6}", p)?;
            for outcome in Outcome::ALL {
                write!(f, " {:>18}", self.count(row, outcome))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
