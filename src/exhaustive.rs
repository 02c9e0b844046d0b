//! Exhaustive weighted-sum evaluation.
//!
//! Scores every district against the objective, drops infeasible ones, and
//! returns the minimum-cost candidate. With a small finite candidate set
//! this is exact and deterministic; the annealing runner exists for the
//! same objective when exactness is traded for trajectory sampling.

use std::cmp::Ordering;

use crate::dataset::District;
use crate::error::{Error, Result};
use crate::score::{Objective, Scored};

pub struct ExhaustiveRunner;

impl ExhaustiveRunner {
    /// Returns the minimum-cost feasible district, or `Ok(None)` when no
    /// district passes the constraints.
    pub fn run(districts: &[District], objective: &Objective) -> Result<Option<Scored>> {
        Ok(Self::rank(districts, objective)?.into_iter().next())
    }

    /// All feasible districts sorted by ascending cost. Cost ties keep the
    /// input order, so selection is deterministic.
    pub fn rank(districts: &[District], objective: &Objective) -> Result<Vec<Scored>> {
        if districts.is_empty() {
            return Err(Error::EmptyDataset);
        }

        let mut ranked: Vec<Scored> = districts
            .iter()
            .map(|d| objective.score(d))
            .filter(|s| objective.is_feasible(&s.district, s.distance_km))
            .collect();

        // Costs are finite for validated inputs; Equal is the safe fallback
        // and preserves input order under the stable sort.
        ranked.sort_by(|a, b| a.cost.partial_cmp(&b.cost).unwrap_or(Ordering::Equal));
        Ok(ranked)
    }
}
