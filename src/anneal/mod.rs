//! Simulated annealing over the district candidate set.
//!
//! A single-solution trajectory metaheuristic: sample a random candidate
//! each iteration, accept worsening moves with a probability that decays
//! with temperature, and track the best feasible candidate seen. Because
//! the candidate set is small and finite, "neighbor" here means a uniform
//! draw with replacement from the whole set rather than a local
//! perturbation.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), for the acceptance criterion

mod config;
mod runner;

pub use config::AnnealConfig;
pub use runner::{AnnealOutcome, AnnealRunner};
