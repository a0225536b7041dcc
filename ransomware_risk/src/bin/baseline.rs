//! Baseline exposure analysis
//!
//! Runs the downtime-only baseline preset and reports per-incident impact
//! statistics. Results are written to results/baseline/.

use ransomware_risk::config::{ScenarioConfig, TRIALS};
use ransomware_risk::output::ScenarioOutput;
use ransomware_risk::report;
use ransomware_risk::simulator::LossSimulator;
use ransomware_risk::stats::RiskSummary;
use ransomware_risk::ModelError;
use std::path::PathBuf;

fn main() {
    println!("=== Ransomware Risk Simulation: Baseline ===\n");

    let seed = 42;

    if let Err(e) = run_baseline(seed) {
        eprintln!("Scenario run failed: {}", e);
        std::process::exit(1);
    }
}

fn run_baseline(seed: u64) -> Result<(), ModelError> {
    let config = ScenarioConfig::baseline();

    let mut simulator = LossSimulator::new(config.clone(), seed)?;
    let sample = simulator.run(TRIALS);

    let summary = RiskSummary::from_sample(&sample)?;
    report::print_baseline_report(&config, &summary);

    let output = ScenarioOutput::from_run(&config, seed, sample)?;
    let dir = PathBuf::from("results").join("baseline");
    output.write_all(&dir).unwrap_or_else(|e| {
        eprintln!("Error writing results to {}: {}", dir.display(), e);
        std::process::exit(1);
    });
    println!("\nResults saved to: {}", dir.display());

    Ok(())
}
