//! The objective shared by both selection strategies: weighted cost plus
//! threshold feasibility.

use crate::dataset::District;
use crate::error::{Error, Result};
use crate::geo::{great_circle_km, GeoPoint};

/// Per-criterion weights for the cost function. Non-negative.
#[derive(Debug, Clone, Copy)]
pub struct Weights {
    pub crime: f64,
    pub distance: f64,
    pub price: f64,
}

impl Weights {
    pub fn new(crime: f64, distance: f64, price: f64) -> Self {
        Self {
            crime,
            distance,
            price,
        }
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("crime", self.crime),
            ("distance", self.distance),
            ("price", self.price),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::invalid_config(format!(
                    "{name} weight must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Hard feasibility thresholds. A district failing any of the three is
/// never reported as best.
#[derive(Debug, Clone, Copy)]
pub struct Constraints {
    pub max_crime_rate: f64,
    pub max_distance_km: f64,
    pub max_price_idr: f64,
}

impl Constraints {
    pub fn admits(&self, district: &District, distance_km: f64) -> bool {
        district.crime_rate_pct <= self.max_crime_rate
            && distance_km <= self.max_distance_km
            && district.house_price_idr <= self.max_price_idr
    }
}

/// Term scaling applied before the weighted sum.
///
/// Raw house prices sit around 1e9 IDR while crime rates and distances are
/// two-digit numbers, so unscaled weights need very different magnitudes to
/// balance the terms. `Scaled` divides the weights by 100 and the price by
/// 1e9 to bring all three terms into comparable ranges. Whichever policy is
/// chosen applies to every candidate in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Normalization {
    #[default]
    None,
    Scaled,
}

impl Normalization {
    /// (weight divisor, price divisor)
    fn divisors(self) -> (f64, f64) {
        match self {
            Normalization::None => (1.0, 1.0),
            Normalization::Scaled => (100.0, 1e9),
        }
    }
}

/// A district together with its evaluated distance and cost.
#[derive(Debug, Clone)]
pub struct Scored {
    pub district: District,
    pub distance_km: f64,
    pub cost: f64,
}

/// Everything a single run scores against: target location, weights,
/// normalization policy, and feasibility thresholds. Immutable for the
/// run's duration and passed explicitly into the runners.
#[derive(Debug, Clone)]
pub struct Objective {
    target: GeoPoint,
    weights: Weights,
    normalization: Normalization,
    constraints: Constraints,
}

impl Objective {
    pub fn new(
        target: GeoPoint,
        weights: Weights,
        normalization: Normalization,
        constraints: Constraints,
    ) -> Result<Self> {
        weights.validate()?;
        Ok(Self {
            target,
            weights,
            normalization,
            constraints,
        })
    }

    pub fn distance_to(&self, district: &District) -> f64 {
        great_circle_km(self.target, district.location())
    }

    /// Weighted linear cost. Pure: same inputs always give the same output.
    pub fn cost(&self, district: &District, distance_km: f64) -> f64 {
        let (weight_div, price_div) = self.normalization.divisors();
        (self.weights.crime / weight_div) * district.crime_rate_pct
            + (self.weights.distance / weight_div) * distance_km
            + (self.weights.price / weight_div) * (district.house_price_idr / price_div)
    }

    pub fn is_feasible(&self, district: &District, distance_km: f64) -> bool {
        self.constraints.admits(district, distance_km)
    }

    /// Evaluates one district: distance to target plus weighted cost.
    pub fn score(&self, district: &District) -> Scored {
        let distance_km = self.distance_to(district);
        Scored {
            cost: self.cost(district, distance_km),
            distance_km,
            district: district.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn district(name: &str, lat: f64, lon: f64, crime: f64, price: f64) -> District {
        District {
            name: name.into(),
            latitude: lat,
            longitude: lon,
            crime_rate_pct: crime,
            house_price_idr: price,
        }
    }

    fn permissive() -> Constraints {
        Constraints {
            max_crime_rate: 100.0,
            max_distance_km: f64::MAX,
            max_price_idr: f64::MAX,
        }
    }

    #[test]
    fn test_cost_is_the_weighted_sum() {
        let objective = Objective::new(
            GeoPoint::new(0.0, 0.0),
            Weights::new(2.0, 3.0, 0.5),
            Normalization::None,
            permissive(),
        )
        .unwrap();

        let d = district("X", 0.0, 0.0, 10.0, 4.0);
        // distance is zero at the target itself
        let cost = objective.cost(&d, 0.0);
        assert!((cost - (2.0 * 10.0 + 0.5 * 4.0)).abs() < 1e-12);

        let cost_with_distance = objective.cost(&d, 5.0);
        assert!((cost_with_distance - (20.0 + 15.0 + 2.0)).abs() < 1e-12);
    }

    #[test]
    fn test_scaled_normalization() {
        let objective = Objective::new(
            GeoPoint::new(0.0, 0.0),
            Weights::new(50.0, 30.0, 20.0),
            Normalization::Scaled,
            permissive(),
        )
        .unwrap();

        let d = district("X", 0.0, 0.0, 20.0, 2e9);
        let cost = objective.cost(&d, 10.0);
        // 0.5*20 + 0.3*10 + 0.2*2 = 13.4
        assert!((cost - 13.4).abs() < 1e-12);
    }

    #[test]
    fn test_cost_is_deterministic() {
        let objective = Objective::new(
            GeoPoint::new(-6.2, 106.8),
            Weights::new(1.0, 1.0, 1.0),
            Normalization::Scaled,
            permissive(),
        )
        .unwrap();

        let d = district("X", -6.26, 106.81, 8.0, 1.75e9);
        let first = objective.score(&d);
        let second = objective.score(&d);
        assert_eq!(first.cost, second.cost);
        assert_eq!(first.distance_km, second.distance_km);
    }

    #[test]
    fn test_feasibility_thresholds_are_inclusive() {
        let constraints = Constraints {
            max_crime_rate: 10.0,
            max_distance_km: 5.0,
            max_price_idr: 1e9,
        };
        let at_limit = district("X", 0.0, 0.0, 10.0, 1e9);
        assert!(constraints.admits(&at_limit, 5.0));
        assert!(!constraints.admits(&at_limit, 5.000001));

        let too_pricey = district("Y", 0.0, 0.0, 10.0, 1e9 + 1.0);
        assert!(!constraints.admits(&too_pricey, 0.0));

        let too_risky = district("Z", 0.0, 0.0, 10.1, 1e9);
        assert!(!constraints.admits(&too_risky, 0.0));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let result = Objective::new(
            GeoPoint::new(0.0, 0.0),
            Weights::new(1.0, -0.5, 1.0),
            Normalization::None,
            permissive(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_nan_weight_rejected() {
        assert!(Weights::new(f64::NAN, 0.0, 0.0).validate().is_err());
    }
}
