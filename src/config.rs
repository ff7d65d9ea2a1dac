use std::env;
use std::str::FromStr;
use chrono_tz::Tz;
use crate::domain::services::defaults::{SchedulingRules, DEFAULT_MAX_DURATION_MIN};
use crate::error::AppError;

#[derive(Clone, Debug)]
pub struct Config {
    pub backend_url: String,
    pub port: u16,
    pub timezone: Tz,
    pub default_max_duration_min: u32,
    pub upstream_timeout_secs: u64,
    pub rules: SchedulingRules,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let backend_url = env::var("BACKEND_URL")
            .map_err(|_| AppError::Config("BACKEND_URL must be set".into()))?;

        let timezone = env::var("BUILDING_TIMEZONE").unwrap_or_else(|_| "UTC".to_string());
        let timezone: Tz = timezone.parse()
            .map_err(|_| AppError::Config(format!("BUILDING_TIMEZONE is not a known timezone: {}", timezone)))?;

        Ok(Self {
            backend_url: backend_url.trim_end_matches('/').to_string(),
            port: parse_var("PORT", 3000)?,
            timezone,
            default_max_duration_min: parse_var("DEFAULT_MAX_DURATION_MIN", DEFAULT_MAX_DURATION_MIN)?,
            upstream_timeout_secs: parse_var("UPSTREAM_TIMEOUT_SECS", 10)?,
            rules: SchedulingRules::default(),
        })
    }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> Result<T, AppError> {
    match env::var(name) {
        Ok(raw) => raw.trim().parse()
            .map_err(|_| AppError::Config(format!("{} must be a number, got {:?}", name, raw))),
        Err(_) => Ok(default),
    }
}
