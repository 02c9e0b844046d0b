//! Weighted district selection over geographic candidate data.
//!
//! Given a small tabular dataset of districts (location, crime rate,
//! average house price), scores each candidate against a user-weighted
//! cost function under hard feasibility thresholds and reports the
//! minimum-cost candidate. Two interchangeable strategies:
//!
//! - **Exhaustive evaluation** ([`exhaustive`]): score every candidate,
//!   keep the feasible ones, return the cheapest. Exact and deterministic.
//! - **Simulated annealing** ([`anneal`]): randomized sampling with a
//!   Metropolis acceptance rule under a geometrically decaying
//!   temperature. Same objective, trajectory-based.
//!
//! Both strategies consume the same [`score::Objective`] (target location,
//! weights, normalization policy, constraints), so a run differs only in
//! how candidates are visited. Infeasible districts are never reported as
//! best by either strategy; "no feasible candidate" is an explicit `None`
//! result, not an error.

pub mod anneal;
pub mod dataset;
pub mod error;
pub mod exhaustive;
pub mod geo;
pub mod logging;
pub mod options;
pub mod report;
pub mod score;

pub use anneal::{AnnealConfig, AnnealOutcome, AnnealRunner};
pub use dataset::District;
pub use error::{Error, Result};
pub use exhaustive::ExhaustiveRunner;
pub use geo::GeoPoint;
pub use options::{RunOptions, Strategy};
pub use report::{LogEntry, ResultLog, RunMetrics};
pub use score::{Constraints, Normalization, Objective, Scored, Weights};
