use std::env::VarError;
use std::str::FromStr;

use anyhow::Context as _;

/// Read `key` from the process environment. Unset is `None`; a value that is
/// not valid UTF-8 is an error.
pub fn process_env(key: &str) -> anyhow::Result<Option<String>> {
    match std::env::var(key) {
        Ok(raw) => Ok(Some(raw)),
        Err(VarError::NotPresent) => Ok(None),
        Err(e) => Err(e).with_context(|| format!("unreadable environment variable `{key}`")),
    }
}

/// Require a looked-up value to be present.
pub fn required(key: &str, raw: Option<String>) -> anyhow::Result<String> {
    raw.with_context(|| format!("missing environment variable `{key}`"))
}

/// Parse a looked-up value, falling back to `default` when it is absent.
///
/// A value that is present but does not parse is an error, not a fallback.
pub fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("invalid value for `{key}`: {raw:?}")),
        None => Ok(default),
    }
}
