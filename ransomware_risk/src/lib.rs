//! Healthcare Ransomware Financial Risk Simulation
//!
//! Monte Carlo estimation of annual loss from ransomware incidents for a
//! large healthcare organization (UPMC case study, Sophos 2024 data).
//!
//! The model follows the FAIR frequency/magnitude decomposition:
//! - Loss Event Frequency: Bernoulli(p) attack occurrence per trial
//! - Loss Magnitude: downtime days × daily impact, plus optional response
//!   and secondary (legal/regulatory) cost components, all Uniform
//!
//! Key outputs:
//! - ALE (Annual Expected Loss): mean over all trials including zeros
//! - VaR at 90%/95%: percentile of the loss distribution
//! - ROSI: return on security investment from baseline vs mitigated ALE
//! - Loss exceedance curve for external plotting
//!
//! All monetary values are in $ Million USD.

pub mod config;
pub mod exceedance;
pub mod output;
pub mod report;
pub mod simulator;
pub mod stats;

pub use config::{Range, ScenarioConfig, INVESTMENT_COST, TRIALS};
pub use simulator::LossSimulator;
pub use stats::{MitigationValue, RiskSummary};

use std::fmt;

/// Errors surfaced by the simulation and statistics layers
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    /// A scenario parameter violates its range or probability invariant.
    /// Detected before any sampling; values are never clamped.
    InvalidConfiguration(String),
    /// A statistic was requested over a sample with no qualifying elements
    /// (e.g. the impact-only sample when no trial produced an attack).
    EmptySample,
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidConfiguration(msg) => {
                write!(f, "invalid configuration: {}", msg)
            }
            ModelError::EmptySample => write!(f, "statistic requested over an empty sample"),
        }
    }
}

impl std::error::Error for ModelError {}

/// Per-trial total losses from one simulation run ($ Million)
///
/// Ordered by trial index; the order carries no meaning beyond reproducing
/// the draw sequence. A value is exactly 0.0 when the attack did not occur
/// in that trial and strictly positive otherwise. Immutable once produced.
#[derive(Debug, Clone, PartialEq)]
pub struct LossSample {
    values: Vec<f64>,
}

impl LossSample {
    pub fn new(values: Vec<f64>) -> Self {
        LossSample { values }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Strictly-positive subsequence: trials where the attack occurred
    pub fn impact(&self) -> Vec<f64> {
        self.values.iter().copied().filter(|&v| v > 0.0).collect()
    }

    /// Fraction of trials with zero loss (attack did not occur)
    pub fn zero_fraction(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let zeros = self.values.iter().filter(|&&v| v == 0.0).count();
        zeros as f64 / self.values.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_impact_filters_zero_trials() {
        let sample = LossSample::new(vec![0.0, 100.0, 0.0, 250.5, 42.0]);

        assert_eq!(sample.len(), 5);
        assert_eq!(sample.impact(), vec![100.0, 250.5, 42.0]);
    }

    #[test]
    fn test_zero_fraction() {
        let sample = LossSample::new(vec![0.0, 100.0, 0.0, 250.5]);
        assert_eq!(sample.zero_fraction(), 0.5);

        let all_hits = LossSample::new(vec![1.0, 2.0]);
        assert_eq!(all_hits.zero_fraction(), 0.0);

        let empty = LossSample::new(vec![]);
        assert_eq!(empty.zero_fraction(), 0.0);
    }

    #[test]
    fn test_error_display() {
        let err = ModelError::InvalidConfiguration("p out of range".to_string());
        assert!(err.to_string().contains("p out of range"));

        assert!(ModelError::EmptySample.to_string().contains("empty sample"));
    }
}
