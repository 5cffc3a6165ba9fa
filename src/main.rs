use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use geo_toolkit::{
    sdk::config::GeocodeConfig,
    sdk::geocoding::{GeocodeClient, GeocodeResult},
    sdk::geodesy::{wrap_longitude, Coordinate},
    sdk::util::log::init_logging,
};
use std::process::ExitCode;

/// Reverse geocoding and spherical geometry helpers
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Reverse-geocode a coordinate through the Google Geocoding API
    Lookup {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,
    },

    /// Great-circle distance in kilometers
    Distance {
        #[command(flatten)]
        pair: PointPair,
    },

    /// Initial bearing in degrees from the first point toward the second
    Bearing {
        #[command(flatten)]
        pair: PointPair,
    },

    /// Point reached from a start, a distance (km) and a bearing (degrees)
    Project {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        #[arg(long)]
        distance: f64,
        #[arg(long, allow_negative_numbers = true)]
        bearing: f64,
        /// Wrap the resulting longitude into [-180, 180)
        #[arg(long)]
        wrap: bool,
    },
}

#[derive(clap::Args, Debug)]
struct PointPair {
    #[arg(long, allow_negative_numbers = true)]
    lat1: f64,
    #[arg(long, allow_negative_numbers = true)]
    lon1: f64,
    #[arg(long, allow_negative_numbers = true)]
    lat2: f64,
    #[arg(long, allow_negative_numbers = true)]
    lon2: f64,
}

impl PointPair {
    fn points(&self) -> Result<(Coordinate, Coordinate)> {
        let from = Coordinate::try_new(self.lat1, self.lon1).context("Invalid first point")?;
        let to = Coordinate::try_new(self.lat2, self.lon2).context("Invalid second point")?;
        Ok((from, to))
    }
}

fn main() -> Result<ExitCode> {
    init_logging();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Lookup { lat, lng } => {
            let coord = Coordinate::try_new(lat, lng).context("Invalid coordinate")?;
            let config = GeocodeConfig::from_env();
            let client = GeocodeClient::new(config).context("Failed to build HTTP client")?;

            log::info!("Looking up {}", coord);
            match client
                .lookup(coord.latitude, coord.longitude)
                .with_context(|| format!("Reverse geocoding failed for {}", coord))?
            {
                GeocodeResult::Found(document) => {
                    println!("{}", serde_json::to_string_pretty(&document)?);
                }
                GeocodeResult::NoResult { status } => {
                    log::warn!("No result for {} (HTTP {})", coord, status);
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Command::Distance { pair } => {
            let (from, to) = pair.points()?;
            println!("{:.3}", from.distance_to(&to));
        }
        Command::Bearing { pair } => {
            let (from, to) = pair.points()?;
            println!("{:.3}", from.bearing_to(&to));
        }
        Command::Project {
            lat,
            lon,
            distance,
            bearing,
            wrap,
        } => {
            let start = Coordinate::try_new(lat, lon).context("Invalid start point")?;
            let mut dest = start.project(distance, bearing);
            if wrap {
                dest.longitude = wrap_longitude(dest.longitude);
            }
            println!("{}", dest);
        }
    }

    Ok(ExitCode::SUCCESS)
}
