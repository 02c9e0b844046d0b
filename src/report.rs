//! Result reporting: run instrumentation and the append-only results log.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::time::Duration;

use serde::Serialize;

use crate::error::Result;
use crate::score::Scored;

/// Wall-clock time and peak memory measured around one optimizer call.
#[derive(Debug, Clone, Copy)]
pub struct RunMetrics {
    pub elapsed: Duration,
    pub peak_memory_mb: Option<f64>,
}

/// Peak resident set size of this process in megabytes.
///
/// Reads `VmHWM` from `/proc/self/status`; returns `None` on platforms
/// without procfs.
pub fn peak_memory_mb() -> Option<f64> {
    let status = std::fs::read_to_string("/proc/self/status").ok()?;
    let line = status.lines().find(|l| l.starts_with("VmHWM:"))?;
    let kb: f64 = line.split_whitespace().nth(1)?.parse().ok()?;
    Some(kb / 1024.0)
}

/// One row of the results log.
#[derive(Debug, Serialize)]
pub struct LogEntry<'a> {
    #[serde(rename = "District")]
    pub district: &'a str,
    #[serde(rename = "Cost")]
    pub cost: f64,
    #[serde(rename = "Distance (km)")]
    pub distance_km: f64,
    #[serde(rename = "Avg House Price (IDR)")]
    pub house_price_idr: f64,
    #[serde(rename = "Crime Rate (%)")]
    pub crime_rate_pct: f64,
    #[serde(rename = "Execution Time (s)")]
    pub execution_time_s: f64,
    #[serde(rename = "Memory Usage (MB)")]
    pub memory_usage_mb: Option<f64>,
}

impl<'a> LogEntry<'a> {
    pub fn new(scored: &'a Scored, metrics: &RunMetrics) -> Self {
        Self {
            district: &scored.district.name,
            cost: scored.cost,
            distance_km: scored.distance_km,
            house_price_idr: scored.district.house_price_idr,
            crime_rate_pct: scored.district.crime_rate_pct,
            execution_time_s: metrics.elapsed.as_secs_f64(),
            memory_usage_mb: metrics.peak_memory_mb,
        }
    }
}

/// Append-only CSV results log. The header row is written only when the
/// file does not yet exist, so repeated runs accumulate rows under a single
/// header.
pub struct ResultLog {
    path: PathBuf,
}

impl ResultLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn append(&self, entry: &LogEntry<'_>) -> Result<()> {
        let exists = self.path.exists();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(!exists)
            .from_writer(file);
        writer.serialize(entry)?;
        writer.flush()?;
        Ok(())
    }
}
