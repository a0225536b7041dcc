//! Empirical loss exceedance curve
//!
//! For each distinct strictly-positive loss value the curve gives the
//! probability that a year's realized loss meets or exceeds it. The
//! denominator is the FULL trial count, zero-loss trials included: the
//! curve expresses unconditional annualized exceedance probability, not a
//! survival function conditioned on an attack occurring. For a scenario
//! with attack probability p the curve therefore starts at ≈ p, not 1.

use crate::LossSample;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExceedancePoint {
    /// Loss threshold, $M
    pub loss: f64,
    /// P(annual loss ≥ threshold)
    pub probability: f64,
}

/// Derive the exceedance curve, ascending in loss. An all-zero or empty
/// sample yields an empty curve.
pub fn exceedance_curve(sample: &LossSample) -> Vec<ExceedancePoint> {
    let trials = sample.len();
    if trials == 0 {
        return Vec::new();
    }

    let mut impact = sample.impact();
    impact.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mut points = Vec::new();
    for (index, &loss) in impact.iter().enumerate() {
        // One point per distinct value; ties share the first occurrence
        if index > 0 && loss == impact[index - 1] {
            continue;
        }
        // Everything at or after this index is ≥ loss
        let exceeding = impact.len() - index;
        points.push(ExceedancePoint {
            loss,
            probability: exceeding as f64 / trials as f64,
        });
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_denominator_is_full_trial_count() {
        // 10 trials, 4 with losses. P(loss ≥ 100) must be 4/10, not 4/4.
        let sample = LossSample::new(vec![
            0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 100.0, 200.0, 300.0, 400.0,
        ]);
        let curve = exceedance_curve(&sample);

        assert_eq!(curve.len(), 4);
        assert_relative_eq!(curve[0].loss, 100.0);
        assert_relative_eq!(curve[0].probability, 0.4);
        assert_relative_eq!(curve[3].loss, 400.0);
        assert_relative_eq!(curve[3].probability, 0.1);
    }

    #[test]
    fn test_curve_is_sorted_and_non_increasing() {
        let sample = LossSample::new(vec![0.0, 50.0, 10.0, 80.0, 0.0, 30.0]);
        let curve = exceedance_curve(&sample);

        for pair in curve.windows(2) {
            assert!(pair[0].loss < pair[1].loss);
            assert!(pair[0].probability >= pair[1].probability);
        }
    }

    #[test]
    fn test_tied_losses_collapse_to_one_point() {
        let sample = LossSample::new(vec![0.0, 100.0, 100.0, 200.0]);
        let curve = exceedance_curve(&sample);

        assert_eq!(curve.len(), 2);
        // 3 of 4 trials are ≥ 100
        assert_relative_eq!(curve[0].probability, 0.75);
        assert_relative_eq!(curve[1].probability, 0.25);
    }

    #[test]
    fn test_all_zero_sample_yields_empty_curve() {
        let sample = LossSample::new(vec![0.0; 20]);
        assert!(exceedance_curve(&sample).is_empty());

        let empty = LossSample::new(vec![]);
        assert!(exceedance_curve(&empty).is_empty());
    }

    #[test]
    fn test_first_point_probability_tracks_attack_rate() {
        use crate::config::ScenarioConfig;
        use crate::simulator::LossSimulator;

        let mut simulator = LossSimulator::new(ScenarioConfig::baseline(), 42).unwrap();
        let sample = simulator.run(50_000);
        let curve = exceedance_curve(&sample);

        // Smallest positive loss is exceeded by every attack year
        let first = curve.first().unwrap();
        assert!((first.probability - 0.67).abs() < 0.01);
    }
}
