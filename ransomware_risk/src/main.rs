//! Long-tail strategic analysis
//!
//! Compares current ransomware exposure (long-tail recovery, full cost
//! decomposition) against the post-investment state, and derives the ROSI
//! of the resilience strategy. Results are written to results/long_tail/
//! for external plotting.

use ransomware_risk::config::{ScenarioConfig, INVESTMENT_COST, TRIALS};
use ransomware_risk::output::ScenarioOutput;
use ransomware_risk::report;
use ransomware_risk::simulator::LossSimulator;
use ransomware_risk::stats::{MitigationValue, RiskSummary};
use ransomware_risk::ModelError;
use std::path::PathBuf;

fn main() {
    println!("=== Ransomware Risk Simulation: Long-Tail Strategic Analysis ===");
    println!("Trials per scenario: {} | Investment: ${}M\n", TRIALS, INVESTMENT_COST);

    let seed = 42;

    if let Err(e) = run_analysis(seed) {
        eprintln!("Scenario run failed: {}", e);
        std::process::exit(1);
    }
}

fn run_analysis(seed: u64) -> Result<(), ModelError> {
    let baseline_config = ScenarioConfig::long_tail();
    let mitigated_config = ScenarioConfig::long_tail_mitigated();

    // Independent streams: the samples are unpaired, so the ROSI below is
    // a point estimate subject to Monte Carlo noise
    let mut baseline_sim = LossSimulator::new(baseline_config.clone(), seed)?;
    let mut mitigated_sim = LossSimulator::new(mitigated_config.clone(), seed + 1)?;

    let baseline_sample = baseline_sim.run(TRIALS);
    let mitigated_sample = mitigated_sim.run(TRIALS);

    let baseline = RiskSummary::from_sample(&baseline_sample)?;
    let mitigated = RiskSummary::from_sample(&mitigated_sample)?;
    let value = MitigationValue::evaluate(baseline.ale, mitigated.ale, INVESTMENT_COST)?;

    report::print_strategic_report(&baseline, &mitigated, &value, INVESTMENT_COST);
    report::print_executive_summary(
        &baseline_config,
        &mitigated_config,
        &baseline,
        &mitigated,
        &value,
        INVESTMENT_COST,
    );

    // Export both scenarios for plotting
    let output_base = PathBuf::from("results").join("long_tail");

    let baseline_output = ScenarioOutput::from_run(&baseline_config, seed, baseline_sample)?;
    let mitigated_output =
        ScenarioOutput::from_run(&mitigated_config, seed + 1, mitigated_sample)?;

    for (output, dir) in [
        (&baseline_output, output_base.join("baseline")),
        (&mitigated_output, output_base.join("mitigated")),
    ] {
        output.write_all(&dir).unwrap_or_else(|e| {
            eprintln!("Error writing results to {}: {}", dir.display(), e);
            std::process::exit(1);
        });
        println!("\nResults saved to: {}", dir.display());
    }

    Ok(())
}
