//! Annealing execution loop.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::AnnealConfig;
use crate::dataset::District;
use crate::error::{Error, Result};
use crate::score::{Objective, Scored};

/// Result of an annealing run.
#[derive(Debug, Clone)]
pub struct AnnealOutcome {
    /// Best feasible candidate found, or `None` when no sampled candidate
    /// ever passed the constraints. Never holds an infeasible district.
    pub best: Option<Scored>,

    /// Total number of samples drawn.
    pub iterations: usize,

    /// Number of accepted moves (including improvements and the initial
    /// adoption).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Samples discarded by the feasibility filter.
    pub infeasible_samples: usize,

    /// Temperature when the loop exited.
    pub final_temperature: f64,
}

/// Executes the annealing loop over a fixed candidate set.
pub struct AnnealRunner;

impl AnnealRunner {
    /// Runs the optimizer with a fresh RNG, seeded from the config when a
    /// seed is present.
    pub fn run(
        districts: &[District],
        objective: &Objective,
        config: &AnnealConfig,
    ) -> Result<AnnealOutcome> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Self::run_with_rng(districts, objective, config, &mut rng)
    }

    /// Runs with a caller-supplied random source.
    pub fn run_with_rng<R: Rng>(
        districts: &[District],
        objective: &Objective,
        config: &AnnealConfig,
        rng: &mut R,
    ) -> Result<AnnealOutcome> {
        config.validate()?;
        if districts.is_empty() {
            return Err(Error::EmptyDataset);
        }

        let mut current: Option<Scored> = None;
        let mut best: Option<Scored> = None;
        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut infeasible_samples = 0usize;

        while temperature > config.min_temperature {
            if config.max_iterations > 0 && iterations >= config.max_iterations {
                break;
            }

            // Uniform draw with replacement over the whole set. The set is
            // small and finite, so this doubles as the neighborhood.
            let candidate = &districts[rng.random_range(0..districts.len())];
            let neighbor = objective.score(candidate);
            iterations += 1;

            if !objective.is_feasible(&neighbor.district, neighbor.distance_km) {
                // Wasted sample. The temperature still cools below.
                infeasible_samples += 1;
            } else if let Some(ref held) = current {
                let delta = neighbor.cost - held.cost;
                let accept = if delta < 0.0 {
                    improving_moves += 1;
                    true
                } else {
                    // Metropolis criterion.
                    rng.random_range(0.0..1.0) < (-delta / temperature).exp()
                };

                if accept {
                    accepted_moves += 1;
                    // Strict improvement only; ties leave best untouched.
                    let improves = best.as_ref().is_none_or(|b| neighbor.cost < b.cost);
                    if improves {
                        best = Some(neighbor.clone());
                    }
                    current = Some(neighbor);
                }
            } else {
                // First feasible sample seeds both current and best, so an
                // infeasible district can never masquerade as the answer.
                accepted_moves += 1;
                best = Some(neighbor.clone());
                current = Some(neighbor);
            }

            temperature *= 1.0 - config.cooling_rate;
        }

        debug!(
            "anneal finished: iterations={iterations} accepted={accepted_moves} \
             improving={improving_moves} infeasible={infeasible_samples} \
             final_temperature={temperature:.6}"
        );

        Ok(AnnealOutcome {
            best,
            iterations,
            accepted_moves,
            improving_moves,
            infeasible_samples,
            final_temperature: temperature,
        })
    }
}
