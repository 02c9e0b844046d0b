//! CSV ingestion of district records.
//!
//! The dataset is a small table with one row per district:
//! name, coordinates, crime rate, and average house price. The price column
//! carries thousands separators (`1,250,000,000`) and is cleaned during
//! deserialization. Rows are validated on load; a bad row is a load error
//! naming the offending line, not a silent skip.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};
use crate::geo::GeoPoint;

/// One district row from the input dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct District {
    #[serde(rename = "District")]
    pub name: String,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
    #[serde(rename = "Crime Rate (Percent)")]
    pub crime_rate_pct: f64,
    #[serde(
        rename = "Average House Price (IDR)",
        deserialize_with = "de_grouped_f64"
    )]
    pub house_price_idr: f64,
}

impl District {
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }

    fn validate(&self, line: usize) -> Result<()> {
        let fail = |what: &str, value: f64| {
            Err(Error::invalid_data(format!(
                "line {line} ({}): {what} {value}",
                self.name
            )))
        };

        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return fail("latitude out of range:", self.latitude);
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return fail("longitude out of range:", self.longitude);
        }
        if !self.crime_rate_pct.is_finite() || !(0.0..=100.0).contains(&self.crime_rate_pct) {
            return fail("crime rate outside 0..=100:", self.crime_rate_pct);
        }
        if !self.house_price_idr.is_finite() || self.house_price_idr < 0.0 {
            return fail("negative house price:", self.house_price_idr);
        }
        Ok(())
    }
}

/// Parses a float that may carry thousands separators, e.g. `1,250,000,000`.
fn de_grouped_f64<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let cleaned: String = raw.chars().filter(|c| *c != ',').collect();
    cleaned
        .trim()
        .parse::<f64>()
        .map_err(|e| serde::de::Error::custom(format!("house price {raw:?}: {e}")))
}

/// Loads and validates the district dataset from a CSV file.
pub fn load_csv(path: impl AsRef<Path>) -> Result<Vec<District>> {
    let file = File::open(path)?;
    from_reader(file)
}

/// Loads and validates the district dataset from any reader.
///
/// Returns [`Error::EmptyDataset`] when the file holds a header but no rows;
/// the optimizers require a non-empty candidate set.
pub fn from_reader<R: Read>(reader: R) -> Result<Vec<District>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut districts = Vec::new();
    for (i, row) in csv_reader.deserialize::<District>().enumerate() {
        let district = row?;
        // Line 1 is the header.
        district.validate(i + 2)?;
        districts.push(district);
    }

    if districts.is_empty() {
        return Err(Error::EmptyDataset);
    }
    Ok(districts)
}
