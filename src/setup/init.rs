use std::env;

use chrono::NaiveDate;
use dotenv::dotenv;
use rand::Rng;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::constant::{DATE_FORMAT, SEED_ENV_KEY};
use crate::error::{GeneratorError, Result};

/// Installs the tracing subscriber (`RUST_LOG`, default `info`) and loads `.env`.
pub fn init_tracing_and_env() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // A second call (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_line_number(true))
        .try_init();

    if dotenv().is_err() {
        tracing::debug!("No .env file found, using process environment only");
    }
}

/// Picks the run seed: explicit value, then `FIXTURE_SEED`, then a fresh random one.
pub fn resolve_seed(explicit: Option<u64>) -> Result<u64> {
    resolve_seed_from(explicit, env::var(SEED_ENV_KEY).ok())
}

fn resolve_seed_from(explicit: Option<u64>, env_value: Option<String>) -> Result<u64> {
    if let Some(seed) = explicit {
        info!("Using seed {} from command line", seed);
        return Ok(seed);
    }

    if let Some(raw) = env_value {
        let seed = raw
            .trim()
            .parse::<u64>()
            .map_err(|_| GeneratorError::InvalidSeed(raw.clone()))?;
        info!("Using seed {} from {}", seed, SEED_ENV_KEY);
        return Ok(seed);
    }

    let seed: u64 = rand::thread_rng().gen();
    warn!("No seed given, using random seed {} (pass --seed {} to reproduce)", seed, seed);
    Ok(seed)
}

/// Parses an `MM/DD/YYYY` date.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| GeneratorError::InvalidDate(raw.to_string()))
}
