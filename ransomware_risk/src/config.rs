//! Scenario configuration and named presets
//!
//! The three analysis drivers are fixed-parameter presets over the same
//! simulator. Parameter sources:
//! - Sophos "State of Ransomware in Healthcare 2024": 67% attack rate,
//!   36% of victims taking >1 month to recover, 7% taking 3-6 months
//! - UPMC scale: ~$30B annual revenue (~$82M/day), 100k employees
//! - UHS 2020 incident for the daily net-impact assumption

use crate::ModelError;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Trials per simulation run
pub const TRIALS: usize = 10_000;

/// Price of the resilience strategy (immutable backups), $ Million.
/// Only used by the combined long-tail analysis to derive ROSI.
pub const INVESTMENT_COST: f64 = 15.0;

/// Closed interval for a uniform draw, $ Million or days
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub fn new(min: f64, max: f64) -> Self {
        Range { min, max }
    }

    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Uniform draw over the interval. A degenerate range (min == max)
    /// yields its single value; gen_range rejects empty ranges.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        if self.min == self.max {
            return self.min;
        }
        rng.gen_range(self.min..self.max)
    }

    fn validate(&self, label: &str) -> Result<(), ModelError> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(ModelError::InvalidConfiguration(format!(
                "{}: bounds must be finite, got [{}, {}]",
                label, self.min, self.max
            )));
        }
        if self.min < 0.0 {
            return Err(ModelError::InvalidConfiguration(format!(
                "{}: bounds must be non-negative, got min {}",
                label, self.min
            )));
        }
        if self.min > self.max {
            return Err(ModelError::InvalidConfiguration(format!(
                "{}: min {} exceeds max {}",
                label, self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Immutable parameter set for one scenario preset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Label used in reports and output metadata
    pub name: String,
    /// Annual probability a ransomware attack succeeds (Loss Event Frequency)
    pub attack_probability: f64,
    /// Recovery duration in days
    pub downtime_days: Range,
    /// Net financial impact per day of downtime, $M
    pub daily_loss: Range,
    /// Response & recovery cost per incident, $M (hybrid pay + restore)
    pub response_cost: Option<Range>,
    /// Secondary loss per incident, $M (legal, fines, reputation)
    pub secondary_loss: Option<Range>,
}

impl ScenarioConfig {
    /// Baseline exposure: downtime-only loss model
    ///
    /// Recovery 21-90 days (Sophos volume zone: 1-3 months), daily net
    /// impact $8M-$12M (10-15% of daily revenue, per the UHS case).
    pub fn baseline() -> Self {
        ScenarioConfig {
            name: "Baseline (Slow Recovery)".to_string(),
            attack_probability: 0.67,
            downtime_days: Range::new(21.0, 90.0),
            daily_loss: Range::new(8.0, 12.0),
            response_cost: None,
            secondary_loss: None,
        }
    }

    /// Rapid-recovery variant of the baseline: same attack rate, downtime
    /// cut to 3-45 days by the resilience strategy
    pub fn mitigated_recovery() -> Self {
        ScenarioConfig {
            name: "Mitigated (Rapid Recovery)".to_string(),
            attack_probability: 0.67,
            downtime_days: Range::new(3.0, 45.0),
            daily_loss: Range::new(8.0, 12.0),
            response_cost: None,
            secondary_loss: None,
        }
    }

    /// Long-tail exposure with full cost decomposition
    ///
    /// Downtime max raised to 120 days to cover the 29% taking 1-3 months
    /// and the 7% tail. Daily loss $30M-$95M spans partial degradation to
    /// acute total halt; response and secondary costs drawn separately.
    pub fn long_tail() -> Self {
        ScenarioConfig {
            name: "Current State (Long-Tail Risk)".to_string(),
            attack_probability: 0.67,
            downtime_days: Range::new(15.0, 120.0),
            daily_loss: Range::new(30.0, 95.0),
            response_cost: Some(Range::new(25.0, 85.0)),
            secondary_loss: Some(Range::new(50.0, 650.0)),
        }
    }

    /// Long-tail scenario after the resilience investment: attack success
    /// rate down to 15%, recovery target under two weeks
    pub fn long_tail_mitigated() -> Self {
        ScenarioConfig {
            name: "With Strategy (Resilient)".to_string(),
            attack_probability: 0.15,
            downtime_days: Range::new(2.0, 14.0),
            daily_loss: Range::new(30.0, 95.0),
            response_cost: Some(Range::new(25.0, 85.0)),
            secondary_loss: Some(Range::new(50.0, 650.0)),
        }
    }

    /// Check every invariant before any sampling happens.
    /// Violations are fatal to the scenario run; values are never clamped.
    pub fn validate(&self) -> Result<(), ModelError> {
        if !self.attack_probability.is_finite()
            || !(0.0..=1.0).contains(&self.attack_probability)
        {
            return Err(ModelError::InvalidConfiguration(format!(
                "attack_probability must be in [0, 1], got {}",
                self.attack_probability
            )));
        }
        self.downtime_days.validate("downtime_days")?;
        self.daily_loss.validate("daily_loss")?;
        if let Some(range) = &self.response_cost {
            range.validate("response_cost")?;
        }
        if let Some(range) = &self.secondary_loss {
            range.validate("secondary_loss")?;
        }
        Ok(())
    }

    /// Smallest possible loss for a trial where the attack occurred
    pub fn min_positive_loss(&self) -> f64 {
        let mut total = self.downtime_days.min * self.daily_loss.min;
        if let Some(range) = &self.response_cost {
            total += range.min;
        }
        if let Some(range) = &self.secondary_loss {
            total += range.min;
        }
        total
    }

    /// Largest possible loss for a single trial
    pub fn max_loss(&self) -> f64 {
        let mut total = self.downtime_days.max * self.daily_loss.max;
        if let Some(range) = &self.response_cost {
            total += range.max;
        }
        if let Some(range) = &self.secondary_loss {
            total += range.max;
        }
        total
    }
}
