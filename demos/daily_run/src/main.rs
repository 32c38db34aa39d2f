//! daily_run - one working day of the rust_fleet delivery simulator.
//!
//! Loads the address table, distance matrix and packages (embedded sample
//! data, or the CSV files in `--data-dir`), dispatches every truck, prints
//! the fleet summary, then the package status at `--at`.
//!
//! ```text
//! daily_run --at 10:25
//! daily_run --at 09:00 --package 6
//! daily_run --data-dir data/ --config run.json --at 12:00
//! RUST_LOG=debug daily_run        # one log line per delivery
//! ```
//!
//! The optional `--config` file is JSON:
//!
//! ```json
//! {
//!   "fleet":  { "average_speed": 18.0, "address_correction_time": "10:20" },
//!   "trucks": [ { "id": 1, "packages": [1, 2, 3], "dispatch_time": "08:00" } ]
//! }
//! ```
//!
//! Both keys are optional; missing fields keep their defaults.

mod data;

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Command, arg, value_parser};
use serde::Deserialize;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use fl_core::{ClockTime, ErrorKind, FleetConfig, PackageId, TruckId};
use fl_dispatch::{DispatchError, FleetBuilder, LogObserver};
use fl_route::{
    AddressBook, DistanceOracle, DistanceTable, load_addresses_csv, load_addresses_reader,
    load_distances_csv, load_distances_reader,
};
use fl_store::{PackageTable, load_packages_csv, load_packages_reader};

use data::{
    ADDRESS_CSV, ADDRESS_FILE, DISTANCE_CSV, DISTANCE_FILE, PACKAGE_CSV, PACKAGE_FILE, TRUCKS,
};

// ── Run file ──────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(default)]
struct RunFile {
    fleet:  FleetConfig,
    trucks: Vec<TruckAssignment>,
}

impl Default for RunFile {
    fn default() -> Self {
        Self {
            fleet:  FleetConfig::default(),
            trucks: TRUCKS
                .iter()
                .map(|&(id, packages, dispatch_time)| TruckAssignment {
                    id,
                    packages: packages.to_vec(),
                    dispatch_time,
                })
                .collect(),
        }
    }
}

#[derive(Deserialize)]
struct TruckAssignment {
    id:            u32,
    packages:      Vec<u32>,
    dispatch_time: ClockTime,
}

fn load_run_file(path: &Path) -> Result<RunFile> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading run file {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing run file {}", path.display()))
}

// ── Input data ────────────────────────────────────────────────────────────────

fn load_inputs(
    data_dir: Option<&PathBuf>,
    config:   &FleetConfig,
) -> Result<(AddressBook, DistanceTable, PackageTable)> {
    match data_dir {
        Some(dir) => Ok((
            load_addresses_csv(&dir.join(ADDRESS_FILE))?,
            load_distances_csv(&dir.join(DISTANCE_FILE))?,
            load_packages_csv(&dir.join(PACKAGE_FILE), config)?,
        )),
        None => Ok((
            load_addresses_reader(Cursor::new(ADDRESS_CSV))?,
            load_distances_reader(Cursor::new(DISTANCE_CSV))?,
            load_packages_reader(Cursor::new(PACKAGE_CSV), config)?,
        )),
    }
}

// ── CLI ───────────────────────────────────────────────────────────────────────

fn cli() -> Command {
    Command::new("daily_run")
        .about("Dispatches the day's trucks and reports package status")
        .arg(
            arg!(--"data-dir" <DIR> "Directory with Address.csv, Distance_Matrix.csv and Package.csv")
                .required(false)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            arg!(--config <PATH> "JSON run file overriding fleet settings and truck assignments")
                .required(false)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            arg!(--at <TIME> "Status query time, HH:MM")
                .required(false)
                .default_value("17:00"),
        )
        .arg(
            arg!(--package <ID> "Report only this package")
                .required(false)
                .value_parser(value_parser!(u32)),
        )
}

/// Print a query error if it is the caller's fault, propagate it otherwise.
fn report_query_error(err: DispatchError) -> Result<()> {
    match err.kind() {
        ErrorKind::Validation | ErrorKind::LookupMiss => {
            eprintln!("query rejected: {err}");
            Ok(())
        }
        ErrorKind::Configuration => Err(err.into()),
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let matches = cli().get_matches();

    // 1. Run settings.
    let run = match matches.get_one::<PathBuf>("config") {
        Some(path) => load_run_file(path)?,
        None => RunFile::default(),
    };
    run.fleet.validate()?;

    // 2. Input data.
    let data_dir = matches.get_one::<PathBuf>("data-dir");
    let (book, table, packages) = load_inputs(data_dir, &run.fleet)?;
    info!(
        addresses = book.len(),
        packages = packages.len(),
        source = %data_dir.map_or("embedded".to_string(), |d| d.display().to_string()),
        "inputs loaded"
    );
    let oracle = DistanceOracle::new(table, book)?;

    // 3. Fleet.
    let mut builder = FleetBuilder::new(run.fleet, packages, oracle);
    for truck in &run.trucks {
        let ids = truck.packages.iter().map(|&p| PackageId(p)).collect();
        builder = builder.truck(TruckId(truck.id), ids, truck.dispatch_time);
    }
    let mut fleet = builder.build()?;

    // 4. Dispatch.
    fleet.dispatch_all(&mut LogObserver::default())?;

    // 5. Summary.
    println!("=== daily_run - rust_fleet delivery simulator ===");
    println!();
    println!("{:<8} {:<10} {:<10} {:>8}", "Truck", "Departs", "Returns", "Miles");
    println!("{}", "-".repeat(39));
    for truck in fleet.trucks() {
        println!(
            "{:<8} {:<10} {:<10} {:>8.1}",
            truck.id().0,
            truck.dispatch_time().to_string(),
            truck.returned_at().map_or("-".to_string(), |t| t.to_string()),
            truck.miles(),
        );
    }
    println!("{}", "-".repeat(39));
    println!("{:<30} {:>8.1}", "Total", fleet.total_miles());
    println!();

    // 6. Status at --at.
    let at = matches.get_one::<String>("at").map_or("17:00", String::as_str);
    match matches.get_one::<u32>("package") {
        Some(&id) => match fleet.query_one(PackageId(id), at) {
            Ok(report) => println!("TRUCK {} | {report}", report.truck.0),
            Err(e) => report_query_error(e)?,
        },
        None => match fleet.query_all(at) {
            Ok(reports) => {
                println!("STATUS AT {at}");
                for report in reports {
                    print!("{report}");
                }
            }
            Err(e) => report_query_error(e)?,
        },
    }

    Ok(())
}
