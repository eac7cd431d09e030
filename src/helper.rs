use std::io;

use crate::errors::AppError;
use dotenv::dotenv;
use tracing_subscriber::{EnvFilter, prelude::*};
use url::Url;

pub const DEFAULT_PHONEBOOK_URL: &str = "http://localhost:3001/persons";
pub const DEFAULT_COUNTRIES_URL: &str = "https://studies.cs.helsinki.fi/restcountries/api/all";

/// Loads `.env` (if any) into the process environment so clap's `env`
/// fallbacks can see it.
pub fn load_env() {
    dotenv().ok();
}

/// Parses a backend url. Only http and https are accepted.
pub fn parse_base_url(url: &str) -> Result<Url, AppError> {
    let parsed = Url::parse(url.trim())?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(AppError::Config(format!(
            "unsupported url scheme '{}' in {}",
            other, url
        ))),
    }
}

/// Sends logs to stderr so stdout stays clean for command output.
pub fn init_logger(log_level: &str) -> Result<(), AppError> {
    let filter_layer = EnvFilter::try_new(log_level)
        .map_err(|e| AppError::Config(format!("invalid log filter '{}': {}", log_level, e)))?;

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_ansi(false);

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter_layer)
        .with(stderr_layer)
        .try_init();
    Ok(())
}
