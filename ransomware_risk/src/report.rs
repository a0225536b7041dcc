//! Console reporting
//!
//! Text rendering of simulation results: per-scenario statistics blocks,
//! baseline vs mitigated comparisons, and the executive summary table.
//! Rounding happens here and nowhere upstream.

use crate::config::ScenarioConfig;
use crate::stats::{MitigationValue, RiskSummary};

/// Baseline statistics block, impact-sample basis (per-incident view)
pub fn print_baseline_report(config: &ScenarioConfig, summary: &RiskSummary) {
    println!("===== Healthcare Ransomware Risk Analysis (Baseline) =====");
    println!(
        "Attack Rate: {:.0}% | Recovery Assumption: {:.0} - {:.0} Days",
        config.attack_probability * 100.0,
        config.downtime_days.min,
        config.downtime_days.max
    );
    println!("{}", "-".repeat(60));
    println!(
        " [Simulation Statistics (n={}, attacks={})]",
        summary.trials, summary.attack_count
    );
    println!(
        "  - Average Loss Estimate:       ${:>10.1} M",
        summary.avg_impact
    );
    println!(
        "  - 90% VaR (Severe Case):       ${:>10.1} M",
        summary.var90_impact
    );
    println!(
        "  - 95% VaR (Extreme Case):      ${:>10.1} M",
        summary.var95_impact
    );
    println!("{}", "-".repeat(60));
    println!(
        "  - Minimum Impact Case:         ${:>10.1} M",
        summary.min_impact
    );
    println!(
        "  - Maximum Impact Case:         ${:>10.1} M",
        summary.max_impact
    );
    println!("{}", "=".repeat(60));
}

/// Baseline vs rapid-recovery comparison, impact-sample basis
pub fn print_mitigation_report(baseline: &RiskSummary, mitigated: &RiskSummary) {
    println!("===== Ransomware Recovery Mitigation Analysis =====");
    println!("{}", "-".repeat(60));
    println!(" [Baseline: Current Exposure]");
    println!(
        "  - Average Loss:                ${:>10.1} M",
        baseline.avg_impact
    );
    println!(
        "  - 90% VaR (Severe Case):       ${:>10.1} M",
        baseline.var90_impact
    );
    println!(
        "  - 95% VaR (Extreme Case):      ${:>10.1} M",
        baseline.var95_impact
    );
    println!("\n [Mitigated: Optimized Recovery]");
    println!(
        "  - Average Loss:                ${:>10.1} M",
        mitigated.avg_impact
    );
    println!(
        "  - 90% VaR:                     ${:>10.1} M",
        mitigated.var90_impact
    );
    println!("{}", "-".repeat(60));
    println!(" [Value of Mitigation]");
    println!(
        "  - Avoided Loss (Average):      ${:>10.1} M per incident",
        baseline.avg_impact - mitigated.avg_impact
    );
    println!("{}", "=".repeat(60));
}

/// Strategic analysis block for the long-tail comparison, full-sample
/// (annualized) basis for ALE and VaR
pub fn print_strategic_report(
    baseline: &RiskSummary,
    mitigated: &RiskSummary,
    value: &MitigationValue,
    investment_cost: f64,
) {
    println!("===== Strategic Risk Analysis (Long-Tail Model) =====");
    println!("Investment: ${:.0}M in resilience (immutable backups)", investment_cost);
    println!("{}", "-".repeat(60));
    println!(" [Current State (Critical Risk)]");
    println!("  - ALE (Annual Expected Loss):   ${:>10.1} M", baseline.ale);
    println!(
        "  - 90% VaR (Worst Case):         ${:>10.1} M",
        baseline.var90_full
    );
    println!(
        "  - Max Simulated Loss:           ${:>10.1} M",
        baseline.max_impact
    );
    println!("\n [Mitigated State]");
    println!(
        "  - ALE (Annual Expected Loss):   ${:>10.1} M",
        mitigated.ale
    );
    println!("{}", "-".repeat(60));
    println!(" [Strategic Value]");
    println!(
        "  - Net Risk Reduction:           ${:>10.1} M / yr",
        value.benefit
    );
    println!("  - ROSI (Return on Investment):  {:>10.0} %", value.rosi_pct);
    println!("{}", "=".repeat(60));
}

/// Executive summary table: current state vs after strategy, one metric
/// per row
pub fn print_executive_summary(
    baseline_config: &ScenarioConfig,
    mitigated_config: &ScenarioConfig,
    baseline: &RiskSummary,
    mitigated: &RiskSummary,
    value: &MitigationValue,
    investment_cost: f64,
) {
    let width = 38;
    println!("\n=== Executive Summary: Risk Analysis ===\n");
    println!(
        "{:<width$} {:>16} {:>16} {:>16}",
        "Metric",
        "Current State",
        "After Strategy",
        "Improvement",
        width = width
    );
    println!(
        "{:-<width$} {:->16} {:->16} {:->16}",
        "",
        "",
        "",
        "",
        width = width
    );

    println!(
        "{:<width$} {:>15.1}% {:>15.1}% {:>12.0} pts",
        "Annual Attack Probability",
        baseline_config.attack_probability * 100.0,
        mitigated_config.attack_probability * 100.0,
        (baseline_config.attack_probability - mitigated_config.attack_probability) * 100.0,
        width = width
    );
    println!(
        "{:<width$} {:>14.0} M {:>14.0} M {:>14.0} M",
        "Avg. Financial Impact (per Incident)",
        baseline.avg_impact,
        mitigated.avg_impact,
        baseline.avg_impact - mitigated.avg_impact,
        width = width
    );
    println!(
        "{:<width$} {:>14.1} M {:>14.1} M {:>14.1} M",
        "Annual Expected Loss (ALE)",
        baseline.ale,
        mitigated.ale,
        value.benefit,
        width = width
    );
    println!(
        "{:<width$} {:>14.0} M {:>14.0} M {:>14.0} M",
        "Worst Case Risk (90% VaR)",
        baseline.var90_full,
        mitigated.var90_full,
        baseline.var90_full - mitigated.var90_full,
        width = width
    );
    println!(
        "{:<width$} {:>16} {:>14.0} M {:>16}",
        "Implementation Cost",
        "-",
        investment_cost,
        "(Investment)",
        width = width
    );
    println!(
        "{:<width$} {:>16} {:>14.1} M {:>16}",
        "Net Risk Reduction (Benefit)",
        "-",
        value.benefit,
        "Benefit",
        width = width
    );
    println!(
        "{:<width$} {:>16} {:>15.0}% {:>16}",
        "Return on Investment (ROSI)",
        "-",
        value.rosi_pct,
        "High Return",
        width = width
    );
}
