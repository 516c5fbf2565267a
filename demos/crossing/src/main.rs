//! crossing — route one sailing passage and print the result.
//!
//! Without arguments it sails the built-in 9×9 reference crossing with the
//! bundled 42 ft cruiser polar.  Everything can be swapped from the command
//! line:
//!
//! ```text
//! crossing [--scenario scenario.json] [--polar boat.pol] [--delimiter ';']
//!          [--legs legs.csv] [--dump-scenario]
//! ```
//!
//! Set `RUST_LOG=debug` to watch the frontier grow iteration by iteration.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;
use serde::Serialize;

use sr_polar::{load_polar_csv, load_polar_reader, sample::cruiser_42, PolarOracle, PolarTable};
use sr_router::{replay, FrontierRouter, Leg, Scenario, SearchOutcome};

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "crossing", about = "Minimum-time sailing route over time-varying weather")]
struct Args {
    /// Scenario JSON (defaults to the built-in reference crossing).
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Polar table file (defaults to the bundled 42 ft cruiser).
    #[arg(long)]
    polar: Option<PathBuf>,

    /// Polar cell delimiter.
    #[arg(long, default_value_t = ';')]
    delimiter: char,

    /// Write the leg-by-leg breakdown to this CSV file.
    #[arg(long)]
    legs: Option<PathBuf>,

    /// Print the scenario as JSON and exit.
    #[arg(long)]
    dump_scenario: bool,
}

// ── Loading ───────────────────────────────────────────────────────────────────

fn load_scenario(path: Option<&PathBuf>) -> Result<Scenario> {
    match path {
        None => Ok(Scenario::reference_crossing()),
        Some(p) => {
            let file = File::open(p).with_context(|| format!("opening scenario {}", p.display()))?;
            serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("parsing scenario {}", p.display()))
        }
    }
}

fn load_polar(path: Option<&PathBuf>, delimiter: char) -> Result<PolarTable> {
    let Ok(delim) = u8::try_from(delimiter) else {
        bail!("polar delimiter {delimiter:?} is not a single byte");
    };
    let table = match path {
        None => cruiser_42()?,
        Some(p) if delim == sr_polar::DEFAULT_DELIMITER => load_polar_csv(p)?,
        Some(p) => {
            let file = File::open(p).with_context(|| format!("opening polar {}", p.display()))?;
            load_polar_reader(file, delim)?
        }
    };
    Ok(table)
}

/// Flat CSV row for one leg (the csv writer cannot nest `GridCoord`).
#[derive(Serialize)]
struct LegRow {
    from_row: u32,
    from_col: u32,
    to_row:   u32,
    to_col:   u32,
    slice:    usize,
    minutes:  f64,
    elapsed:  f64,
}

impl From<&Leg> for LegRow {
    fn from(leg: &Leg) -> Self {
        Self {
            from_row: leg.from.row,
            from_col: leg.from.col,
            to_row:   leg.to.row,
            to_col:   leg.to.col,
            slice:    leg.slice,
            minutes:  leg.minutes,
            elapsed:  leg.elapsed,
        }
    }
}

fn write_legs(path: &Path, legs: &[Leg]) -> Result<()> {
    let mut w = csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;
    for leg in legs {
        w.serialize(LegRow::from(leg))?;
    }
    w.flush()?;
    Ok(())
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let scenario = load_scenario(args.scenario.as_ref())?;
    if args.dump_scenario {
        println!("{}", serde_json::to_string_pretty(&scenario)?);
        return Ok(());
    }

    // 1. Environment and problem.
    let problem = scenario.build_problem().context("invalid scenario")?;
    let (rows, cols) = problem.dims();
    println!("=== crossing ===");
    println!(
        "Grid: {rows}x{cols}  |  Slices: {} × {} min  |  Obstacles: {}",
        problem.timeframe().len(),
        problem.time_interval(),
        problem.obstacles().len()
    );
    println!("From {} to {}", problem.start(), problem.finish());

    // 2. Vessel.
    let polar = load_polar(args.polar.as_ref(), args.delimiter)?;
    info!(
        "polar: {} TWA × {} TWS points",
        polar.twa_axis().len(),
        polar.tws_axis().len()
    );
    let oracle = PolarOracle::new(polar);

    // 3. Search.
    let router = FrontierRouter::new(scenario.router.clone());
    let t0 = Instant::now();
    let (route, stats) = router.route_with_stats(&problem, &oracle);
    let elapsed = t0.elapsed();

    println!(
        "Search: {:?} after {} iterations, peak frontier {}, {} candidates, {:.3} s",
        stats.outcome,
        stats.iterations,
        stats.peak_frontier,
        stats.arena_nodes,
        elapsed.as_secs_f64()
    );
    if !matches!(stats.outcome, SearchOutcome::Optimal | SearchOutcome::Pruned) || !route.is_found() {
        println!("No route found.");
        return Ok(());
    }
    println!();

    // 4. Leg table.
    let (_, legs) = replay(&problem, &oracle, &route.path)?;
    println!("{:<10} {:<10} {:>6} {:>10} {:>10}", "From", "To", "Slice", "Minutes", "Elapsed");
    println!("{}", "-".repeat(50));
    for leg in &legs {
        println!(
            "{:<10} {:<10} {:>6} {:>10.3} {:>10.3}",
            leg.from.to_string(),
            leg.to.to_string(),
            leg.slice,
            leg.minutes,
            leg.elapsed
        );
    }
    println!();
    println!("Total: {:.4} min over {} legs", route.duration, route.legs());

    if let Some(path) = &args.legs {
        write_legs(path, &legs)?;
        println!("Legs written to {}", path.display());
    }

    Ok(())
}
