//! Recovery mitigation analysis
//!
//! Same attack rate as the baseline, downtime cut from 21-90 days to
//! 3-45 days by the resilience strategy. Reports the per-incident loss
//! reduction and writes both scenarios to results/mitigation/.

use ransomware_risk::config::{ScenarioConfig, TRIALS};
use ransomware_risk::output::ScenarioOutput;
use ransomware_risk::report;
use ransomware_risk::simulator::LossSimulator;
use ransomware_risk::stats::RiskSummary;
use ransomware_risk::ModelError;
use std::path::PathBuf;

fn main() {
    println!("=== Ransomware Risk Simulation: Recovery Mitigation ===\n");

    let seed = 42;

    if let Err(e) = run_comparison(seed) {
        eprintln!("Scenario run failed: {}", e);
        std::process::exit(1);
    }
}

fn run_comparison(seed: u64) -> Result<(), ModelError> {
    let baseline_config = ScenarioConfig::baseline();
    let mitigated_config = ScenarioConfig::mitigated_recovery();

    let mut baseline_sim = LossSimulator::new(baseline_config.clone(), seed)?;
    let mut mitigated_sim = LossSimulator::new(mitigated_config.clone(), seed + 1)?;

    let baseline_sample = baseline_sim.run(TRIALS);
    let mitigated_sample = mitigated_sim.run(TRIALS);

    let baseline = RiskSummary::from_sample(&baseline_sample)?;
    let mitigated = RiskSummary::from_sample(&mitigated_sample)?;

    report::print_mitigation_report(&baseline, &mitigated);

    let output_base = PathBuf::from("results").join("mitigation");
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
