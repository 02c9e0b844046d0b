use std::time::Instant;

use log::info;

use district_select::{
    dataset, logging, report, AnnealRunner, Error, ExhaustiveRunner, GeoPoint, LogEntry, Objective,
    Result, ResultLog, RunMetrics, RunOptions, Strategy,
};

fn main() {
    match run() {
        Ok(()) => {}
        Err(Error::Usage(usage)) => println!("{usage}"),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

fn run() -> Result<()> {
    let options = RunOptions::from_args()?;
    logging::init(options.verbose)?;

    let districts = dataset::load_csv(&options.data_path)?;
    info!(
        "loaded {} districts from {}",
        districts.len(),
        options.data_path.display()
    );

    let objective = Objective::new(
        GeoPoint::new(options.target_lat, options.target_lon),
        options.weights,
        options.normalization,
        options.constraints,
    )?;

    // Only the optimizer call is timed; loading and reporting stay outside.
    let started = Instant::now();
    let best = match options.strategy {
        Strategy::Anneal => {
            let config = options.anneal_config();
            let outcome = AnnealRunner::run(&districts, &objective, &config)?;
            info!(
                "annealing: {} samples, {} accepted, {} infeasible",
                outcome.iterations, outcome.accepted_moves, outcome.infeasible_samples
            );
            outcome.best
        }
        Strategy::Exhaustive => ExhaustiveRunner::run(&districts, &objective)?,
    };
    let metrics = RunMetrics {
        elapsed: started.elapsed(),
        peak_memory_mb: report::peak_memory_mb(),
    };

    match best {
        Some(scored) => {
            println!("Best district: {}", scored.district.name);
            println!("Cost: {:.4}", scored.cost);
            println!(
                "Distance: {:.2} km, Avg House Price: {:.0} IDR, Crime Rate: {}%",
                scored.distance_km, scored.district.house_price_idr, scored.district.crime_rate_pct
            );

            if let Some(path) = &options.results_log {
                ResultLog::new(path).append(&LogEntry::new(&scored, &metrics))?;
                info!("result appended to {}", path.display());
            }
        }
        None => println!("No suitable district found that meets all criteria."),
    }

    let memory = metrics
        .peak_memory_mb
        .map_or_else(|| "n/a".to_string(), |mb| format!("{mb:.2} MB"));
    println!(
        "Execution Time: {:.4} s, Memory Usage: {memory}",
        metrics.elapsed.as_secs_f64()
    );

    Ok(())
}
