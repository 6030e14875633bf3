use std::error::Error;
use std::path::PathBuf;

use chrono::Local;
use clap::{arg, value_parser, Command};
use colored::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use vrp_datagen::config::constant::{
    DEFAULT_LOCATIONS_OUTPUT, DEFAULT_VEHICLES_OUTPUT, FLEET_PERCENT,
};
use vrp_datagen::domain::types::GeoPoint;
use vrp_datagen::fixtures::generate_fixtures;
use vrp_datagen::output::{write_locations_csv, write_vehicles_csv};
use vrp_datagen::setup::{init_tracing_and_env, parse_date, resolve_seed, GeneratorSettings};

fn cli() -> Command {
    Command::new("vrp-datagen")
        .about("Generate two CSVs: locations.csv and vehicles.csv")
        .arg(
            arg!(-n --num_records <N>)
                .help("Total number of location rows to generate (including L001 as fixed depot)")
                .required(true)
                .value_parser(value_parser!(usize)),
        )
        .arg(
            arg!(--lat <LAT> "Center latitude (decimal degrees) for the fixed depot (L001)")
                .required(true)
                .allow_negative_numbers(true)
                .value_parser(value_parser!(f64)),
        )
        .arg(
            arg!(--lon <LON> "Center longitude (decimal degrees) for the fixed depot (L001)")
                .required(true)
                .allow_negative_numbers(true)
                .value_parser(value_parser!(f64)),
        )
        .arg(
            arg!(--radius <MILES>)
                .help("Radius in miles around (lat, lon) to generate random location points")
                .required(true)
                .allow_negative_numbers(true)
                .value_parser(value_parser!(f64)),
        )
        .arg(
            arg!(--locations_output <PATH> "Filename for the locations CSV")
                .default_value(DEFAULT_LOCATIONS_OUTPUT)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            arg!(--vehicles_output <PATH> "Filename for the vehicles CSV")
                .default_value(DEFAULT_VEHICLES_OUTPUT)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            arg!(--seed <SEED>)
                .help("Seed for reproducible output (falls back to FIXTURE_SEED, then random)")
                .value_parser(value_parser!(u64)),
        )
        .arg(arg!(--date <DATE> "Generation date as MM/DD/YYYY (defaults to today)"))
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing_and_env();
    let matches = cli().get_matches();

    // Required or defaulted in `cli()`, so clap has rejected the run already if absent.
    let num_records = *matches.get_one::<usize>("num_records").unwrap();
    let lat = *matches.get_one::<f64>("lat").unwrap();
    let lon = *matches.get_one::<f64>("lon").unwrap();
    let radius = *matches.get_one::<f64>("radius").unwrap();

    let seed = resolve_seed(matches.get_one::<u64>("seed").copied())?;
    let today = match matches.get_one::<String>("date") {
        Some(raw) => parse_date(raw)?,
        None => Local::now().date_naive(),
    };

    let settings = GeneratorSettings::new(
        num_records,
        GeoPoint::new(lat, lon),
        radius,
        seed,
        today,
        matches.get_one::<PathBuf>("locations_output").unwrap().clone(),
        matches.get_one::<PathBuf>("vehicles_output").unwrap().clone(),
    )?;
    info!(?settings, "Resolved generator settings");

    let mut rng = ChaCha8Rng::seed_from_u64(settings.seed);
    let fixtures = generate_fixtures(&mut rng, &settings.request, settings.today)?;

    write_locations_csv(&settings.locations_output, &fixtures.locations)?;
    println!(
        "{} {} locations → {}",
        "Wrote".green().bold(),
        fixtures.locations.len(),
        settings.locations_output.display()
    );

    write_vehicles_csv(&settings.vehicles_output, &fixtures.vehicles)?;
    println!(
        "{} {} vehicles ({}% of {}) → {}",
        "Wrote".green().bold(),
        fixtures.vehicles.len(),
        FLEET_PERCENT,
        fixtures.locations.len(),
        settings.vehicles_output.display()
    );
    println!("{} {}", "Seed:".cyan(), settings.seed);

    Ok(())
}
