//! Annealing configuration.

use crate::error::{Error, Result};

/// Configuration for the annealing runner.
///
/// Cooling is geometric: `T <- T * (1 - cooling_rate)` once per sampled
/// candidate, so the run length is fixed by the temperature bounds and the
/// rate alone (see [`AnnealConfig::planned_iterations`]).
///
/// # Examples
///
/// ```
/// use district_select::anneal::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_initial_temperature(10.0)
///     .with_cooling_rate(0.01)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct AnnealConfig {
    /// Starting temperature. Higher values accept more uphill moves early.
    pub initial_temperature: f64,

    /// Temperature floor. The loop exits once T falls to or below this.
    pub min_temperature: f64,

    /// Fractional decay applied each iteration, in (0, 1).
    pub cooling_rate: f64,

    /// Hard iteration budget. 0 = no limit beyond the cooling schedule.
    pub max_iterations: usize,

    /// Random seed for reproducible runs.
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 10.0,
            min_temperature: 1e-3,
            cooling_rate: 0.01,
            max_iterations: 0,
            seed: None,
        }
    }
}

impl AnnealConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration. Called by the runner before any work.
    pub fn validate(&self) -> Result<()> {
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err(Error::invalid_config(format!(
                "initial_temperature must be positive, got {}",
                self.initial_temperature
            )));
        }
        if !self.min_temperature.is_finite() || self.min_temperature <= 0.0 {
            return Err(Error::invalid_config(format!(
                "min_temperature must be positive, got {}",
                self.min_temperature
            )));
        }
        if self.min_temperature >= self.initial_temperature {
            return Err(Error::invalid_config(
                "min_temperature must be less than initial_temperature".to_string(),
            ));
        }
        if !self.cooling_rate.is_finite() || self.cooling_rate <= 0.0 || self.cooling_rate >= 1.0 {
            return Err(Error::invalid_config(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            )));
        }
        Ok(())
    }

    /// Number of iterations the cooling schedule allows before the floor is
    /// reached: `ceil(ln(floor / initial) / ln(1 - rate))`. The runner
    /// executes exactly this many samples unless `max_iterations` cuts the
    /// run short.
    pub fn planned_iterations(&self) -> usize {
        if self.initial_temperature <= self.min_temperature {
            return 0;
        }
        let steps = (self.min_temperature / self.initial_temperature).ln()
            / (1.0 - self.cooling_rate).ln();
        steps.ceil() as usize
    }
}
