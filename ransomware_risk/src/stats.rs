//! Summary statistics over loss samples
//!
//! Empty inputs are surfaced as `ModelError::EmptySample` rather than
//! silently coerced to 0 or NaN; with a small attack probability and a
//! small trial count the impact-only sample can legitimately be empty.

use crate::{LossSample, ModelError};
use serde::Serialize;

/// Arithmetic mean. Over the full sample this is the ALE; over the
/// impact-only sample it is the average loss per incident.
pub fn mean(values: &[f64]) -> Result<f64, ModelError> {
    if values.is_empty() {
        return Err(ModelError::EmptySample);
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

pub fn min(values: &[f64]) -> Result<f64, ModelError> {
    if values.is_empty() {
        return Err(ModelError::EmptySample);
    }
    Ok(values.iter().copied().fold(f64::INFINITY, f64::min))
}

pub fn max(values: &[f64]) -> Result<f64, ModelError> {
    if values.is_empty() {
        return Err(ModelError::EmptySample);
    }
    Ok(values.iter().copied().fold(f64::NEG_INFINITY, f64::max))
}

/// Population standard deviation
pub fn std_dev(values: &[f64]) -> Result<f64, ModelError> {
    let m = mean(values)?;
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    Ok(variance.sqrt())
}

/// The value below which `q` percent of the sample falls, with linear
/// interpolation between order statistics. `q` is in [0, 100]; q=90 is the
/// 90% VaR of the sample.
pub fn percentile(values: &[f64], q: f64) -> Result<f64, ModelError> {
    if !(0.0..=100.0).contains(&q) || !q.is_finite() {
        return Err(ModelError::InvalidConfiguration(format!(
            "percentile q must be in [0, 100], got {}",
            q
        )));
    }
    if values.is_empty() {
        return Err(ModelError::EmptySample);
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let rank = q / 100.0 * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let fraction = rank - lower as f64;

    if lower + 1 < sorted.len() {
        Ok(sorted[lower] + fraction * (sorted[lower + 1] - sorted[lower]))
    } else {
        Ok(sorted[sorted.len() - 1])
    }
}

/// Scalar risk metrics derived from one loss sample
///
/// VaR is reported over both bases: the full sample (annualized view, zeros
/// included) and the impact-only sample (per-incident view). Which basis a
/// report quotes is the driver's call and should be explicit there.
#[derive(Debug, Clone, Serialize)]
pub struct RiskSummary {
    pub trials: usize,
    /// Trials where the attack occurred
    pub attack_count: usize,
    /// Annual Expected Loss: mean over all trials, zeros included, $M
    pub ale: f64,
    /// Average loss per incident (impact-only mean), $M
    pub avg_impact: f64,
    pub var90_full: f64,
    pub var95_full: f64,
    pub var90_impact: f64,
    pub var95_impact: f64,
    pub min_impact: f64,
    pub max_impact: f64,
}

impl RiskSummary {
    /// Fails with `EmptySample` when no trial produced an attack.
    pub fn from_sample(sample: &LossSample) -> Result<Self, ModelError> {
        let values = sample.values();
        let impact = sample.impact();

        Ok(RiskSummary {
            trials: sample.len(),
            attack_count: impact.len(),
            ale: mean(values)?,
            avg_impact: mean(&impact)?,
            var90_full: percentile(values, 90.0)?,
            var95_full: percentile(values, 95.0)?,
            var90_impact: percentile(&impact, 90.0)?,
            var95_impact: percentile(&impact, 95.0)?,
            min_impact: min(&impact)?,
            max_impact: max(&impact)?,
        })
    }
}

/// Value of a mitigation strategy, derived from two independent samples.
///
/// Baseline and mitigated samples are not paired (separate random streams),
/// so both the benefit and the ROSI are point estimates subject to
/// Monte Carlo noise.
#[derive(Debug, Clone, Serialize)]
pub struct MitigationValue {
    /// Annual risk reduction: baseline ALE minus mitigated ALE, $M
    pub benefit: f64,
    /// Return on Security Investment, percent
    pub rosi_pct: f64,
}

impl MitigationValue {
    pub fn evaluate(
        baseline_ale: f64,
        mitigated_ale: f64,
        investment_cost: f64,
    ) -> Result<Self, ModelError> {
        if !(investment_cost > 0.0) {
            return Err(ModelError::InvalidConfiguration(format!(
                "investment_cost must be positive, got {}",
                investment_cost
            )));
        }
        let benefit = baseline_ale - mitigated_ale;
        Ok(MitigationValue {
            benefit,
            rosi_pct: (benefit - investment_cost) / investment_cost * 100.0,
        })
    }
}
