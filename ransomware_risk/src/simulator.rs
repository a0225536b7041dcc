//! Monte Carlo loss simulator
//!
//! Frequency/magnitude model: each trial first decides whether an attack
//! succeeds (Bernoulli via a single uniform draw against the attack
//! probability), then composes the loss from independent uniform magnitude
//! components. Trials are i.i.d.; runs are bit-for-bit reproducible for a
//! fixed seed.

use crate::config::ScenarioConfig;
use crate::{LossSample, ModelError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

pub struct LossSimulator {
    config: ScenarioConfig,
    rng: StdRng,
}

impl LossSimulator {
    /// Create a simulator for one scenario. Configuration invariants are
    /// checked here, before any sampling begins.
    pub fn new(config: ScenarioConfig, seed: u64) -> Result<Self, ModelError> {
        config.validate()?;
        Ok(LossSimulator {
            config,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    /// Run `trials` independent trials and collect the loss sample.
    ///
    /// Draw order per successful trial is fixed (occurrence, days, daily
    /// loss, response cost, secondary loss) so a seed fully determines the
    /// sample.
    pub fn run(&mut self, trials: usize) -> LossSample {
        let mut losses = Vec::with_capacity(trials);
        for _ in 0..trials {
            losses.push(self.draw_trial());
        }
        LossSample::new(losses)
    }

    fn draw_trial(&mut self) -> f64 {
        // Frequency: attack does not occur
        let u: f64 = self.rng.gen_range(0.0..1.0);
        if u > self.config.attack_probability {
            return 0.0;
        }

        // Magnitude: downtime plus per-incident cost components
        let days = self.config.downtime_days.sample(&mut self.rng);
        let daily_loss = self.config.daily_loss.sample(&mut self.rng);
        let mut total = days * daily_loss;

        if let Some(range) = &self.config.response_cost {
            total += range.sample(&mut self.rng);
        }
        if let Some(range) = &self.config.secondary_loss {
            total += range.sample(&mut self.rng);
        }

        total
    }
}

/// Generate a loss sample with trials sharded across worker threads.
///
/// Each shard gets its own stream seeded `base_seed + shard_index`; shard
/// results are concatenated in shard order, so the output is deterministic
/// for a fixed (base_seed, shards) pair — though it differs from the
/// sequential stream with the same seed. Trial counts that do not divide
/// evenly spill one extra trial into the leading shards.
pub fn run_sharded(
    config: &ScenarioConfig,
    trials: usize,
    shards: usize,
    base_seed: u64,
) -> Result<LossSample, ModelError> {
    if shards == 0 {
        return Err(ModelError::InvalidConfiguration(
            "shards must be positive".to_string(),
        ));
    }
    config.validate()?;

    let per_shard = trials / shards;
    let remainder = trials % shards;

    let losses: Vec<f64> = (0..shards)
        .into_par_iter()
        .map(|shard| {
            let count = per_shard + if shard < remainder { 1 } else { 0 };
            // Validation already done; seeds diverge per shard
            let mut simulator =
                LossSimulator::new(config.clone(), base_seed + shard as u64).expect("validated");
            simulator.run(count).values().to_vec()
        })
        .flatten()
        .collect();

    Ok(LossSample::new(losses))
}
