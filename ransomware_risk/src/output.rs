//! Structured export of simulation results
//!
//! Writes per-scenario results to CSV and JSON for downstream analysis and
//! plotting (pandas/matplotlib). The raw loss sample and the exceedance
//! curve go to CSV; the summary plus run metadata go to JSON.

use crate::config::ScenarioConfig;
use crate::exceedance::{exceedance_curve, ExceedancePoint};
use crate::stats::RiskSummary;
use crate::{LossSample, ModelError};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Metadata for reproducibility
#[derive(Debug, Clone, Serialize)]
pub struct RunMetadata {
    pub config: ScenarioConfig,
    pub seed: u64,
    pub trials: usize,
    pub timestamp: String,
}

/// Full output bundle for one scenario run
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioOutput {
    pub metadata: RunMetadata,
    pub summary: RiskSummary,
    pub exceedance: Vec<ExceedancePoint>,
    #[serde(skip)]
    sample: LossSample,
}

impl ScenarioOutput {
    /// Derive summary and exceedance curve from a finished run.
    /// Fails with `EmptySample` when no trial produced an attack.
    pub fn from_run(
        config: &ScenarioConfig,
        seed: u64,
        sample: LossSample,
    ) -> Result<Self, ModelError> {
        let summary = RiskSummary::from_sample(&sample)?;
        let exceedance = exceedance_curve(&sample);

        Ok(ScenarioOutput {
            metadata: RunMetadata {
                config: config.clone(),
                seed,
                trials: sample.len(),
                timestamp: chrono::Utc::now().to_rfc3339(),
            },
            summary,
            exceedance,
            sample,
        })
    }

    /// Write the raw per-trial losses to CSV
    pub fn write_losses_csv<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut wtr = csv::Writer::from_path(path)?;

        wtr.write_record(["trial", "loss_musd"])?;
        for (trial, &loss) in self.sample.values().iter().enumerate() {
            wtr.write_record(&[trial.to_string(), loss.to_string()])?;
        }

        wtr.flush()?;
        Ok(())
    }

    /// Write the exceedance curve to CSV
    pub fn write_exceedance_csv<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut wtr = csv::Writer::from_path(path)?;

        wtr.write_record(["loss_musd", "exceedance_probability"])?;
        for point in &self.exceedance {
            wtr.write_record(&[point.loss.to_string(), point.probability.to_string()])?;
        }

        wtr.flush()?;
        Ok(())
    }

    /// Write metadata, summary and exceedance curve as pretty JSON
    pub fn write_summary_json<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Write all outputs to a directory
    ///
    /// Creates:
    /// - losses.csv
    /// - exceedance_curve.csv
    /// - summary.json
    pub fn write_all<P: AsRef<Path>>(&self, dir: P) -> Result<(), Box<dyn std::error::Error>> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        self.write_losses_csv(dir.join("losses.csv"))?;
        self.write_exceedance_csv(dir.join("exceedance_curve.csv"))?;
        self.write_summary_json(dir.join("summary.json"))?;

        Ok(())
    }
}
