//! Command-line options for the selection binary.

use std::env;
use std::path::PathBuf;

use crate::anneal::AnnealConfig;
use crate::error::{Error, Result};
use crate::score::{Constraints, Normalization, Weights};

/// Which selection strategy the binary runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Anneal,
    Exhaustive,
}

/// Parsed CLI options. Weights, thresholds, and the target location are
/// required; the annealing knobs default to the reference schedule.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub data_path: PathBuf,
    pub target_lat: f64,
    pub target_lon: f64,
    pub weights: Weights,
    pub constraints: Constraints,
    pub normalization: Normalization,
    pub strategy: Strategy,
    pub initial_temperature: f64,
    pub cooling_rate: f64,
    pub max_iterations: usize,
    pub seed: Option<u64>,
    pub results_log: Option<PathBuf>,
    pub verbose: bool,
}

impl RunOptions {
    pub fn from_args() -> Result<Self> {
        Self::parse(env::args().skip(1))
    }

    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut data_path: Option<PathBuf> = None;
        let mut target_lat: Option<f64> = None;
        let mut target_lon: Option<f64> = None;
        let mut w_crime: Option<f64> = None;
        let mut w_distance: Option<f64> = None;
        let mut w_price: Option<f64> = None;
        let mut max_crime_rate: Option<f64> = None;
        let mut max_distance_km: Option<f64> = None;
        let mut max_price_idr: Option<f64> = None;
        let mut normalization = Normalization::None;
        let mut strategy = Strategy::Anneal;
        let defaults = AnnealConfig::default();
        let mut initial_temperature = defaults.initial_temperature;
        let mut cooling_rate = defaults.cooling_rate;
        let mut max_iterations = defaults.max_iterations;
        let mut seed: Option<u64> = None;
        let mut results_log: Option<PathBuf> = None;
        let mut verbose = false;

        let mut args = args.into_iter().peekable();
        while let Some(arg) = args.next() {
            if arg == "--help" || arg == "-h" {
                return Err(Error::Usage(Self::usage().to_string()));
            }

            let Some(raw_name) = arg.strip_prefix("--") else {
                return Err(Error::invalid_config(format!(
                    "unexpected argument: {arg}\n\n{}",
                    Self::usage()
                )));
            };

            let (name, value) = split_arg(raw_name, &mut args);

            match name {
                "verbose" => {
                    verbose = true;
                    continue;
                }
                "strategy" => {
                    strategy = match required(name, value)?.as_str() {
                        "anneal" => Strategy::Anneal,
                        "exhaustive" => Strategy::Exhaustive,
                        other => {
                            return Err(Error::invalid_config(format!(
                                "--strategy expects 'anneal' or 'exhaustive', got '{other}'"
                            )))
                        }
                    };
                    continue;
                }
                "normalize" => {
                    normalization = match required(name, value)?.as_str() {
                        "none" => Normalization::None,
                        "scaled" => Normalization::Scaled,
                        other => {
                            return Err(Error::invalid_config(format!(
                                "--normalize expects 'none' or 'scaled', got '{other}'"
                            )))
                        }
                    };
                    continue;
                }
                "data" => {
                    data_path = Some(PathBuf::from(required(name, value)?));
                    continue;
                }
                "results-log" => {
                    results_log = Some(PathBuf::from(required(name, value)?));
                    continue;
                }
                "seed" => {
                    let raw = required(name, value)?;
                    seed = Some(raw.parse().map_err(|_| {
                        Error::invalid_config(format!("--seed expects an integer, got '{raw}'"))
                    })?);
                    continue;
                }
                "max-iterations" => {
                    let raw = required(name, value)?;
                    max_iterations = raw.parse().map_err(|_| {
                        Error::invalid_config(format!(
                            "--max-iterations expects an integer, got '{raw}'"
                        ))
                    })?;
                    continue;
                }
                _ => {}
            }

            let number = parse_f64(name, required(name, value)?)?;
            match name {
                "target-lat" => target_lat = Some(number),
                "target-lon" => target_lon = Some(number),
                "w-crime" => w_crime = Some(number),
                "w-distance" => w_distance = Some(number),
                "w-price" => w_price = Some(number),
                "max-crime-rate" => max_crime_rate = Some(number),
                "max-distance" => max_distance_km = Some(number),
                "max-price" => max_price_idr = Some(number),
                "initial-temp" => initial_temperature = number,
                "cooling-rate" => cooling_rate = number,
                _ => {
                    return Err(Error::invalid_config(format!(
                        "unknown option: --{name}\n\n{}",
                        Self::usage()
                    )))
                }
            }
        }

        Ok(Self {
            data_path: require_set("data", data_path)?,
            target_lat: require_set("target-lat", target_lat)?,
            target_lon: require_set("target-lon", target_lon)?,
            weights: Weights::new(
                require_set("w-crime", w_crime)?,
                require_set("w-distance", w_distance)?,
                require_set("w-price", w_price)?,
            ),
            constraints: Constraints {
                max_crime_rate: require_set("max-crime-rate", max_crime_rate)?,
                max_distance_km: require_set("max-distance", max_distance_km)?,
                max_price_idr: require_set("max-price", max_price_idr)?,
            },
            normalization,
            strategy,
            initial_temperature,
            cooling_rate,
            max_iterations,
            seed,
            results_log,
            verbose,
        })
    }

    /// The annealing schedule assembled from the CLI knobs.
    pub fn anneal_config(&self) -> AnnealConfig {
        let mut config = AnnealConfig::default()
            .with_initial_temperature(self.initial_temperature)
            .with_cooling_rate(self.cooling_rate)
            .with_max_iterations(self.max_iterations);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }

    pub fn usage() -> &'static str {
        "Usage: district-select --data <csv> --target-lat <deg> --target-lon <deg> \\\n\
         \x20                      --w-crime <w> --w-distance <w> --w-price <w> \\\n\
         \x20                      --max-crime-rate <pct> --max-distance <km> --max-price <idr> [options]\n\
         \n\
         Required:\n\
         \x20 --data <path>            district dataset (CSV)\n\
         \x20 --target-lat <deg>       target latitude\n\
         \x20 --target-lon <deg>       target longitude\n\
         \x20 --w-crime <w>            weight for crime rate\n\
         \x20 --w-distance <w>         weight for distance\n\
         \x20 --w-price <w>            weight for house price\n\
         \x20 --max-crime-rate <pct>   maximum allowed crime rate\n\
         \x20 --max-distance <km>      maximum allowed distance\n\
         \x20 --max-price <idr>        maximum allowed house price\n\
         \n\
         Options:\n\
         \x20 --strategy <s>           'anneal' (default) or 'exhaustive'\n\
         \x20 --normalize <n>          'none' (default) or 'scaled'\n\
         \x20 --initial-temp <t>       annealing start temperature (default 10)\n\
         \x20 --cooling-rate <r>       geometric cooling rate (default 0.01)\n\
         \x20 --max-iterations <n>     hard sample budget, 0 = schedule only\n\
         \x20 --seed <n>               RNG seed for reproducible runs\n\
         \x20 --results-log <path>     append the result to this CSV log\n\
         \x20 --verbose                debug logging on stderr"
    }
}

fn split_arg<'a>(
    raw_name: &'a str,
    args: &mut std::iter::Peekable<impl Iterator<Item = String>>,
) -> (&'a str, Option<String>) {
    if let Some((name, value)) = raw_name.split_once('=') {
        return (name, Some(value.to_string()));
    }

    // Only treat the next token as a value when it is not itself a flag;
    // negative numbers ("-6.2") still pass through.
    let value = match args.peek() {
        Some(next) if !next.starts_with("--") => args.next(),
        _ => None,
    };

    (raw_name, value)
}

fn required(name: &str, value: Option<String>) -> Result<String> {
    value.ok_or_else(|| Error::invalid_config(format!("--{name} expects a value")))
}

fn require_set<T>(name: &str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| {
        Error::invalid_config(format!(
            "--{name} is required\n\n{}",
            RunOptions::usage()
        ))
    })
}

fn parse_f64(name: &str, raw: String) -> Result<f64> {
    raw.parse().map_err(|_| {
        Error::invalid_config(format!("--{name} expects a number, got '{raw}'"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> Vec<String> {
        [
            "--data",
            "districts.csv",
            "--target-lat",
            "-6.2",
            "--target-lon",
            "106.8",
            "--w-crime",
            "1.0",
            "--w-distance",
            "1.0",
            "--w-price",
            "1.0",
            "--max-crime-rate",
            "50",
            "--max-distance",
            "100",
            "--max-price",
            "2000000000",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    #[test]
    fn test_parses_required_args_with_defaults() {
        let options = RunOptions::parse(base_args()).unwrap();

        assert_eq!(options.data_path, PathBuf::from("districts.csv"));
        assert!((options.target_lat + 6.2).abs() < 1e-12);
        assert_eq!(options.strategy, Strategy::Anneal);
        assert_eq!(options.normalization, Normalization::None);
        assert!((options.initial_temperature - 10.0).abs() < 1e-12);
        assert!((options.cooling_rate - 0.01).abs() < 1e-12);
        assert!(options.seed.is_none());
        assert!(!options.verbose);
    }

    #[test]
    fn test_parses_equals_form_and_extras() {
        let mut args = base_args();
        args.extend(
            [
                "--strategy=exhaustive",
                "--normalize=scaled",
                "--seed=42",
                "--results-log=runs.csv",
                "--verbose",
            ]
            .iter()
            .map(|s| s.to_string()),
        );
        let options = RunOptions::parse(args).unwrap();

        assert_eq!(options.strategy, Strategy::Exhaustive);
        assert_eq!(options.normalization, Normalization::Scaled);
        assert_eq!(options.seed, Some(42));
        assert_eq!(options.results_log, Some(PathBuf::from("runs.csv")));
        assert!(options.verbose);
    }

    #[test]
    fn test_verbose_between_flags_swallows_nothing() {
        let mut args = vec!["--verbose".to_string()];
        args.extend(base_args());
        let options = RunOptions::parse(args).unwrap();
        assert!(options.verbose);
        assert_eq!(options.data_path, PathBuf::from("districts.csv"));
    }

    #[test]
    fn test_missing_required_arg() {
        let args: Vec<String> = base_args().into_iter().take(2).collect();
        let err = RunOptions::parse(args).unwrap_err();
        assert!(err.to_string().contains("is required"));
    }

    #[test]
    fn test_non_numeric_weight_fails_fast() {
        let mut args = base_args();
        let position = args.iter().position(|a| a == "1.0").unwrap();
        args[position] = "heavy".to_string();
        let err = RunOptions::parse(args).unwrap_err();
        assert!(err.to_string().contains("expects a number"));
    }

    #[test]
    fn test_unknown_option_rejected() {
        let mut args = base_args();
        args.push("--parallel".to_string());
        args.push("8".to_string());
        assert!(RunOptions::parse(args).is_err());
    }

    #[test]
    fn test_help_carries_usage() {
        let err = RunOptions::parse(vec!["--help".to_string()]).unwrap_err();
        assert!(matches!(err, Error::Usage(_)));
        assert!(err.to_string().contains("--w-crime"));
    }

    #[test]
    fn test_anneal_config_from_options() {
        let mut args = base_args();
        args.extend(
            ["--initial-temp", "25", "--cooling-rate", "0.05", "--seed", "7"]
                .iter()
                .map(|s| s.to_string()),
        );
        let options = RunOptions::parse(args).unwrap();
        let config = options.anneal_config();

        assert!((config.initial_temperature - 25.0).abs() < 1e-12);
        assert!((config.cooling_rate - 0.05).abs() < 1e-12);
        assert_eq!(config.seed, Some(7));
        assert!(config.validate().is_ok());
    }
}
