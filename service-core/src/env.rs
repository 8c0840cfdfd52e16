//! Typed environment variable lookups used by the config loaders.
//!
//! An empty value is treated the same as an unset one.

use std::env;
use std::fmt::Display;
use std::str::FromStr;

use tracing::debug;

use crate::error::CoreError;

/// Returns the trimmed value of `key`, or `None` when unset or empty.
pub fn var_opt(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Returns the value of `key`, or `default` when unset or empty.
pub fn var_or(key: &str, default: &str) -> String {
    var_opt(key).unwrap_or_else(|| {
        debug!(key, default, "Environment variable not set, using default");
        default.to_string()
    })
}

/// Parses `key` into `T`, or returns `default` when unset or empty.
pub fn parse_or<T>(key: &str, default: T) -> Result<T, CoreError>
where
    T: FromStr,
    T::Err: Display,
{
    match var_opt(key) {
        Some(raw) => raw.parse().map_err(|e: T::Err| CoreError::InvalidEnv {
            key: key.to_string(),
            reason: format!("{raw:?}: {e}"),
        }),
        None => Ok(default),
    }
}
