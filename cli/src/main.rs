//! MGRS command-line converter
//!
//! Converts decimal degrees to grid references and back,
//! and measures the distance and azimuth between two references.

mod error;

use std::io;

use clap::{Parser, Subcommand, ValueEnum};
use geod_mgrs::{forward, measure, normalize, to_point_with, GeoPoint, InverseMethod, Mgrs};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::CliError;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Method {
    /// Inverse Transverse Mercator (sub-meter)
    Series,
    /// 1 degree per 100 km from the band center (legacy positions)
    Linear,
}

impl From<Method> for InverseMethod {
    fn from(method: Method) -> Self {
        match method {
            Method::Series => InverseMethod::Series,
            Method::Linear => InverseMethod::Linear,
        }
    }
}

#[derive(Parser)]
#[command(name = "mgrs")]
#[command(about = "Convert between latitude/longitude and MGRS", long_about = None)]
struct Args {
    /// Print debug events (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Grid reference of a point
    Forward {
        /// Latitude in decimal degrees [-80..84]
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Longitude in decimal degrees [-180..180]
        #[arg(long, allow_hyphen_values = true)]
        lng: f64,

        /// Print without spaces (17SKT8195852025)
        #[arg(long)]
        compact: bool,
    },
    /// Latitude and longitude of grid references
    ToPoint {
        /// Grid references, quote the ones with spaces
        #[arg(required = true)]
        references: Vec<String>,

        /// How to get back from the grid
        #[arg(long, value_enum, default_value = "series")]
        method: Method,
    },
    /// Rewrite grid references with the canonical spacing
    Normalize {
        #[arg(required = true)]
        references: Vec<String>,
    },
    /// Distance and azimuth between two grid references
    Measure { from: String, to: String },
}

fn init_logging(verbose: bool) -> Result<(), CliError> {
    let default = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| CliError::LoggingInit(e.to_string()))
}

fn locate(reference: &str, method: InverseMethod) -> Result<GeoPoint, CliError> {
    to_point_with(reference, method).map_err(|error| CliError::Reference {
        input: reference.to_string(),
        error,
    })
}

fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::Forward { lat, lng, compact } => {
            if compact {
                let mgrs = GeoPoint::new(lat, lng)
                    .and_then(|point| Mgrs::from_point(&point))
                    .map_err(|e| CliError::Forward(e.into()))?;
                println!("{:#}", mgrs);
            } else {
                println!("{}", forward(lat, lng).map_err(CliError::Forward)?);
            }
        }
        Command::ToPoint { references, method } => {
            let method = InverseMethod::from(method);
            for reference in &references {
                let point = locate(reference, method)?;
                info!(%reference, %point, "located");
                println!("{:.6}, {:.6}", point.lat(), point.lng());
            }
        }
        Command::Normalize { references } => {
            for reference in &references {
                let canonical = normalize(reference).map_err(|e| CliError::Reference {
                    input: reference.clone(),
                    error: e.into(),
                })?;
                println!("{}", canonical);
            }
        }
        Command::Measure { from, to } => {
            let start = locate(&from, InverseMethod::Series)?;
            let end = locate(&to, InverseMethod::Series)?;
            println!("{}", measure(&start, &end));
        }
    }

    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Err(e) = init_logging(args.verbose) {
        e.exit();
    }

    if let Err(e) = run(args.command) {
        e.exit();
    }
}
