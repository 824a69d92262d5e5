use crate::error::AppError;
use std::env;
use std::str::FromStr;

const DEFAULT_REGION: &str = "na1";
const DEFAULT_MAX_IN_FLIGHT: usize = 5;
const DEFAULT_REQUESTS_PER_SECOND: u32 = 20;
const DEFAULT_REQUESTS_PER_TWO_MINUTES: u32 = 100;
const DEFAULT_DDRAGON_VERSION: &str = "14.23.1";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    /// Display name ("Europe West") or platform code ("euw1").
    pub region: String,
    /// Upper bound on concurrent match-detail requests.
    pub max_in_flight: usize,
    pub requests_per_second: u32,
    pub requests_per_two_minutes: u32,
    pub ddragon_version: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let api_key = env::var("RIOT_API_KEY").map_err(|_| {
            AppError::ConfigError(
                "RIOT_API_KEY not found in environment or .env file".to_string(),
            )
        })?;

        let region = env::var("RIOT_REGION").unwrap_or_else(|_| DEFAULT_REGION.to_string());
        let ddragon_version =
            env::var("DDRAGON_VERSION").unwrap_or_else(|_| DEFAULT_DDRAGON_VERSION.to_string());

        Ok(Config {
            api_key,
            region,
            max_in_flight: parse_var("RIOT_MAX_IN_FLIGHT", DEFAULT_MAX_IN_FLIGHT)?,
            requests_per_second: parse_var("RIOT_REQUESTS_PER_SECOND", DEFAULT_REQUESTS_PER_SECOND)?,
            requests_per_two_minutes: parse_var(
                "RIOT_REQUESTS_PER_TWO_MINUTES",
                DEFAULT_REQUESTS_PER_TWO_MINUTES,
            )?,
            ddragon_version,
        })
    }

    /// Config with defaults for everything but the key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Config {
            api_key: api_key.into(),
            region: DEFAULT_REGION.to_string(),
            max_in_flight: DEFAULT_MAX_IN_FLIGHT,
            requests_per_second: DEFAULT_REQUESTS_PER_SECOND,
            requests_per_two_minutes: DEFAULT_REQUESTS_PER_TWO_MINUTES,
            ddragon_version: DEFAULT_DDRAGON_VERSION.to_string(),
        }
    }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> Result<T, AppError> {
    match env::var(name) {
        Ok(raw) => parse_value(name, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_value<T: FromStr>(name: &str, raw: &str) -> Result<T, AppError> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::ConfigError(format!("{} has an invalid value: {:?}", name, raw)))
}
