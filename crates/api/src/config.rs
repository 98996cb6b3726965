//! Process configuration read from the environment (and `.env` via `dotenvy`).
//!
//! | Env Var                  | Required | Default                 |
//! |--------------------------|----------|-------------------------|
//! | `HOST`                   | no       | `0.0.0.0`               |
//! | `PORT`                   | no       | `3000`                  |
//! | `CORS_ORIGINS`           | no       | `http://localhost:5173` |
//! | `REQUEST_TIMEOUT_SECS`   | no       | `30`                    |
//! | `DB_MAX_CONNECTIONS`     | no       | `20`                    |
//! | `JWT_SECRET`             | **yes**  | --                      |
//! | `JWT_ACCESS_EXPIRY_MINS` | no       | `60`                    |

use std::fmt::Display;
use std::str::FromStr;

use axum::http::HeaderValue;

use crate::auth::jwt::JwtConfig;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var}={value:?} is invalid: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Origins allowed by the CORS layer, already validated as header values.
    pub cors_origins: Vec<HeaderValue>,
    pub request_timeout_secs: u64,
    pub db_max_connections: u32,
    pub jwt: JwtConfig,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw_origins = optional("CORS_ORIGINS").unwrap_or_else(|| "http://localhost:5173".into());

        Ok(Self {
            host: optional("HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port: parsed_or("PORT", 3000)?,
            cors_origins: parse_origins(&raw_origins)?,
            request_timeout_secs: parsed_or("REQUEST_TIMEOUT_SECS", 30)?,
            db_max_connections: parsed_or(
                "DB_MAX_CONNECTIONS",
                vidcat_db::DEFAULT_MAX_CONNECTIONS,
            )?,
            jwt: JwtConfig::from_env()?,
        })
    }
}

/// Value of `var`, treating an empty string as unset.
pub(crate) fn optional(var: &'static str) -> Option<String> {
    std::env::var(var).ok().filter(|v| !v.trim().is_empty())
}

pub(crate) fn required(var: &'static str) -> Result<String, ConfigError> {
    optional(var).ok_or(ConfigError::Missing(var))
}

/// Parse `var` into `T`, falling back to `default` when unset.
pub(crate) fn parsed_or<T>(var: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match optional(var) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            reason: e.to_string(),
            value,
        }),
    }
}

/// Split a comma-separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Result<Vec<HeaderValue>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|e| ConfigError::Invalid {
                var: "CORS_ORIGINS",
                value: origin.to_string(),
                reason: e.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn origins_are_trimmed_and_blank_entries_dropped() {
        let origins = parse_origins(" http://a.test ,,http://b.test,").unwrap();
        assert_eq!(origins, vec!["http://a.test", "http://b.test"]);
        assert!(parse_origins("").unwrap().is_empty());
    }

    #[test]
    fn origin_with_control_characters_is_rejected() {
        assert_matches!(
            parse_origins("http://ok.test,http://bad\n.test"),
            Err(ConfigError::Invalid { var: "CORS_ORIGINS", .. })
        );
    }
}
