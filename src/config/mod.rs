//! Configuration loaded from the process environment.
//!
//! Each loader reads its variables once and returns an immutable struct.
//! Required values are validated eagerly so a missing credential fails before
//! any network call or file access.

mod relayer_client_config;
pub use relayer_client_config::*;

mod keystore_config;
pub use keystore_config::*;

use crate::models::ConfigError;
use std::str::FromStr;

/// Reads a required variable. Unset and empty values are both reported as missing.
pub(crate) fn required_var<F>(lookup: &F, name: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingEnvVar(name.to_string())),
    }
}

/// Reads a required secret verbatim. Only unset and empty values are missing;
/// surrounding whitespace is kept.
pub(crate) fn required_secret<F>(lookup: &F, name: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::MissingEnvVar(name.to_string())),
    }
}

/// Reads an optional variable, treating empty values as unset.
pub(crate) fn optional_var<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).filter(|value| !value.trim().is_empty())
}

/// Parses an optional variable, falling back to `default` when unset.
pub(crate) fn parsed_var<F, T>(lookup: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match optional_var(lookup, name) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidValue {
                name: name.to_string(),
                reason: e.to_string(),
            }),
        None => Ok(default),
    }
}

#[cfg(test)]
pub(crate) fn lookup_from<'a>(
    vars: &'a [(&'a str, &'a str)],
) -> impl Fn(&str) -> Option<String> + 'a {
    move |name| {
        vars.iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.to_string())
    }
}
