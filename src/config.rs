use std::time::Duration;

use crate::error::config::ConfigError;

pub static DEFAULT_CARQUERY_URL: &str = "https://www.carqueryapi.com";
pub static DEFAULT_CARAPI_URL: &str = "https://carapi.app";
pub static DEFAULT_HTTP_TIMEOUT_SECS: u64 = 5;

/// Credentials for CarAPI's token/secret exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarApiCredentials {
    pub api_token: String,
    pub api_secret: String,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub user_agent: String,
    pub carquery_url: String,
    pub carapi_url: String,
    pub carapi_credentials: Option<CarApiCredentials>,
    pub http_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = required("DATABASE_URL")?;

        let carapi_credentials = match (optional("CARAPI_TOKEN"), optional("CARAPI_SECRET")) {
            (Some(api_token), Some(api_secret)) => Some(CarApiCredentials {
                api_token,
                api_secret,
            }),
            (None, None) => None,
            (Some(_), None) => return Err(ConfigError::MissingEnvVar("CARAPI_SECRET".to_string())),
            (None, Some(_)) => return Err(ConfigError::MissingEnvVar("CARAPI_TOKEN".to_string())),
        };

        let http_timeout = match optional("HTTP_TIMEOUT_SECS") {
            Some(value) => Duration::from_secs(parse_timeout_secs(&value)?),
            None => Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        };

        Ok(Self {
            database_url,
            user_agent: optional("USER_AGENT")
                .unwrap_or_else(|| format!("carlot/{}", env!("CARGO_PKG_VERSION"))),
            carquery_url: optional("CARQUERY_URL")
                .unwrap_or_else(|| DEFAULT_CARQUERY_URL.to_string()),
            carapi_url: optional("CARAPI_URL").unwrap_or_else(|| DEFAULT_CARAPI_URL.to_string()),
            carapi_credentials,
            http_timeout,
        })
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    optional(var).ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
}

/// Empty values count as unset so `.env` templates with blank entries behave.
fn optional(var: &str) -> Option<String> {
    std::env::var(var)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_timeout_secs(value: &str) -> Result<u64, ConfigError> {
    match value.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        Ok(_) => Err(ConfigError::InvalidEnvValue {
            var: "HTTP_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        }),
        Err(e) => Err(ConfigError::InvalidEnvValue {
            var: "HTTP_TIMEOUT_SECS".to_string(),
            reason: e.to_string(),
        }),
    }
}
