//! End-to-end statistical properties of the loss simulation
//!
//! These tests exercise the full pipeline the scenario drivers use:
//! preset config → simulator → summary statistics → exceedance curve.
//! Tolerances are sized for fixed seeds, several sigma beyond sampling
//! noise at the given trial counts.

use approx::assert_relative_eq;
use ransomware_risk::config::ScenarioConfig;
use ransomware_risk::exceedance::exceedance_curve;
use ransomware_risk::simulator::{run_sharded, LossSimulator};
use ransomware_risk::stats::{mean, percentile, MitigationValue, RiskSummary};
use ransomware_risk::ModelError;

#[test]
fn baseline_scenario_matches_analytic_expectations() {
    // p=0.67, days [21, 90], daily loss [8, 12]:
    // E[impact] = E[days] × E[daily] = 55.5 × 10 = 555
    let mut simulator = LossSimulator::new(ScenarioConfig::baseline(), 42).unwrap();
    let sample = simulator.run(10_000);

    assert_eq!(sample.len(), 10_000);

    let impact = sample.impact();
    let impact_mean = mean(&impact).unwrap();
    assert!(
        (impact_mean - 555.0).abs() / 555.0 < 0.05,
        "impact mean {} outside 555 ± 5%",
        impact_mean
    );

    let zero_fraction = sample.zero_fraction();
    assert!(
        (zero_fraction - 0.33).abs() < 0.01,
        "zero fraction {} outside 0.33 ± 0.01",
        zero_fraction
    );
}

#[test]
fn full_sample_mean_never_exceeds_impact_mean() {
    for seed in [1, 7, 42, 1234] {
        let mut simulator = LossSimulator::new(ScenarioConfig::long_tail(), seed).unwrap();
        let sample = simulator.run(5_000);

        let full = mean(sample.values()).unwrap();
        let impact = mean(&sample.impact()).unwrap();
        assert!(impact >= full, "seed {}: impact mean below full mean", seed);
    }
}

#[test]
fn impossible_attack_yields_zeros_and_empty_sample_error() {
    let mut config = ScenarioConfig::baseline();
    config.attack_probability = 0.0;

    let mut simulator = LossSimulator::new(config, 42).unwrap();
    let sample = simulator.run(10_000);

    assert!(sample.values().iter().all(|&v| v == 0.0));

    // Impact-only statistics must surface the empty sample explicitly
    assert_eq!(mean(&sample.impact()), Err(ModelError::EmptySample));
    assert_eq!(
        RiskSummary::from_sample(&sample).unwrap_err(),
        ModelError::EmptySample
    );
}

#[test]
fn risk_summary_percentiles_are_ordered() {
    let mut simulator = LossSimulator::new(ScenarioConfig::long_tail(), 42).unwrap();
    let sample = simulator.run(10_000);
    let summary = RiskSummary::from_sample(&sample).unwrap();

    assert!(summary.var90_full <= summary.var95_full);
    assert!(summary.var90_impact <= summary.var95_impact);
    // Full-sample VaR includes zeros, so it cannot exceed the impact VaR
    assert!(summary.var90_full <= summary.var90_impact);
    assert!(summary.min_impact <= summary.avg_impact);
    assert!(summary.avg_impact <= summary.max_impact);
}

#[test]
fn simulation_is_reproducible_bit_for_bit() {
    let config = ScenarioConfig::long_tail_mitigated();

    let sample1 = LossSimulator::new(config.clone(), 99).unwrap().run(10_000);
    let sample2 = LossSimulator::new(config, 99).unwrap().run(10_000);

    assert_eq!(sample1.values(), sample2.values());
}

#[test]
fn exceedance_curve_uses_full_trial_denominator() {
    // Deliberate check against the common mistake of dividing by the
    // impact-only count: the curve's first point must sit near the attack
    // probability, not near 1.0.
    let mut simulator = LossSimulator::new(ScenarioConfig::baseline(), 42).unwrap();
    let sample = simulator.run(20_000);
    let curve = exceedance_curve(&sample);

    let first = curve.first().unwrap();
    assert!(
        (first.probability - 0.67).abs() < 0.02,
        "first exceedance probability {} should track p=0.67",
        first.probability
    );
    assert!(first.probability < 0.9, "denominator looks impact-only");

    // Non-increasing and bounded by (0, 1]
    for pair in curve.windows(2) {
        assert!(pair[0].probability >= pair[1].probability);
    }
    assert!(curve.iter().all(|p| p.probability > 0.0 && p.probability <= 1.0));
}

#[test]
fn percentile_is_monotonic_over_simulated_losses() {
    let mut simulator = LossSimulator::new(ScenarioConfig::long_tail(), 7).unwrap();
    let sample = simulator.run(5_000);

    let p50 = percentile(sample.values(), 50.0).unwrap();
    let p90 = percentile(sample.values(), 90.0).unwrap();
    let p95 = percentile(sample.values(), 95.0).unwrap();
    let p99 = percentile(sample.values(), 99.0).unwrap();

    assert!(p50 <= p90 && p90 <= p95 && p95 <= p99);
}

#[test]
fn mitigation_value_reference_case() {
    let value = MitigationValue::evaluate(400.0, 100.0, 15.0).unwrap();
    assert_relative_eq!(value.benefit, 300.0);
    assert_relative_eq!(value.rosi_pct, 1900.0);
}

#[test]
fn long_tail_strategy_produces_positive_rosi() {
    // The full strategic pipeline: baseline long-tail ALE dwarfs the
    // mitigated ALE, so the $15M investment must show a large return
    let mut baseline_sim = LossSimulator::new(ScenarioConfig::long_tail(), 42).unwrap();
    let mut mitigated_sim =
        LossSimulator::new(ScenarioConfig::long_tail_mitigated(), 43).unwrap();

    let baseline = RiskSummary::from_sample(&baseline_sim.run(10_000)).unwrap();
    let mitigated = RiskSummary::from_sample(&mitigated_sim.run(10_000)).unwrap();

    let value = MitigationValue::evaluate(baseline.ale, mitigated.ale, 15.0).unwrap();
    assert!(value.benefit > 0.0);
    assert!(value.rosi_pct > 100.0);
}

#[test]
fn sharded_generation_is_deterministic_and_complete() {
    let config = ScenarioConfig::baseline();

    let sample1 = run_sharded(&config, 25_000, 8, 42).unwrap();
    let sample2 = run_sharded(&config, 25_000, 8, 42).unwrap();

    assert_eq!(sample1.len(), 25_000);
    assert_eq!(sample1.values(), sample2.values());
    assert!(sample1.values().iter().all(|&v| v >= 0.0));

    // Shard streams are independent, so the distribution still matches
    let zero_fraction = sample1.zero_fraction();
    assert!((zero_fraction - 0.33).abs() < 0.015);
}
