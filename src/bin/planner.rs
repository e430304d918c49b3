use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::{path::PathBuf, process::ExitCode, time::Duration};
use tour_planner::{
    geo::Coordinate,
    logging::{init_tracing, Verbosity},
    search::{HeuristicName, PointId},
    tour::{Catalogue, TourPlanner, TourRequest},
    PlannerConfig, Result,
};
use tracing::{error, info};

#[derive(Parser)]
#[command(version)]
/// Plan restaurant tours and list nearby restaurants.
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(
        help = "A TOML planner config, defaults are used when absent",
        long = "config",
        id = "CONFIG",
        global = true
    )]
    config: Option<PathBuf>,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal,
        global = true
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour", global = true)]
    colour: bool,
}

/// Where the restaurants come from and where the user is.
#[derive(Args)]
struct Location {
    #[arg(
        help = "The JSON file listing the known restaurants",
        long = "catalogue",
        id = "CATALOGUE"
    )]
    catalogue: PathBuf,
    #[arg(help = "Latitude of the user", long = "lat", allow_negative_numbers = true)]
    latitude: f64,
    #[arg(help = "Longitude of the user", long = "lng", allow_negative_numbers = true)]
    longitude: f64,
}

impl Location {
    fn load(&self) -> Result<(Catalogue, Coordinate)> {
        let catalogue = Catalogue::from_path(&self.catalogue)?;
        info!(num_restaurants = catalogue.len(), "loaded catalogue");
        Ok((catalogue, Coordinate::new(self.latitude, self.longitude)))
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Order the given restaurants into a short tour starting at the user.
    Plan {
        #[command(flatten)]
        location: Location,
        #[arg(
            help = "Comma separated restaurant ids",
            long = "ids",
            id = "IDS",
            value_delimiter = ',',
            required = true
        )]
        ids: Vec<u64>,
        #[arg(
            value_enum,
            help = "The heuristic evaluator to use, overrides the config",
            long = "heuristic",
            id = "HEURISTIC"
        )]
        heuristic_name: Option<HeuristicName>,
        #[arg(
            help = "Wall clock limit for the search, e.g. 500ms or 2s",
            long = "time-limit",
            id = "TIME_LIMIT",
            value_parser = humantime::parse_duration
        )]
        time_limit: Option<Duration>,
    },
    /// List restaurants within a radius, nearest first.
    Nearby {
        #[command(flatten)]
        location: Location,
        #[arg(
            help = "Search radius in kilometres",
            long = "radius",
            id = "RADIUS",
            default_value_t = 5.0
        )]
        radius_km: f64,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbosity, cli.colour);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => PlannerConfig::from_path(path)?,
        None => PlannerConfig::default(),
    };

    match cli.command {
        Commands::Plan {
            location,
            ids,
            heuristic_name,
            time_limit,
        } => {
            let (catalogue, user_location) = location.load()?;
            if let Some(heuristic_name) = heuristic_name {
                config.heuristic = heuristic_name;
            }
            if time_limit.is_some() {
                config.time_limit = time_limit;
            }
            let request = TourRequest::new(ids.into_iter().map(PointId).collect(), user_location);
            let planner = TourPlanner::new(&catalogue, config);
            print_json(&planner.plan(&request)?)
        }
        Commands::Nearby {
            location,
            radius_km,
        } => {
            let (catalogue, user_location) = location.load()?;
            let nearby = catalogue.nearby(&user_location, radius_km, config.eta_speed_kmh);
            info!(num_results = nearby.len(), radius_km);
            print_json(&nearby)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
