//! Runtime configuration, read from environment variables.

use std::{env, fmt::Display, str::FromStr, time::Duration};

use chrono::TimeDelta;
use tracing::{info, warn};
use url::Url;

use crate::error::ClientError;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000/";
pub const DEFAULT_CLIENT_ADDR: &str = "127.0.0.1:3000";

/// Category filter value meaning "no filter". The backend UI this client
/// grew up with was Spanish, hence the default.
pub const DEFAULT_ALL_CATEGORIES: &str = "Todos";

/// How long a toast stays on screen.
pub const TOAST_SECONDS: i64 = 3;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the notes backend, always ending in `/`.
    pub api_url: Url,
    pub bind_addr: String,
    pub all_categories: String,
    pub request_timeout: Duration,
    pub toast_duration: TimeDelta,
    /// Drop list responses that were overtaken by a newer request.
    pub discard_stale_responses: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: Url::parse(DEFAULT_API_URL).expect("default API URL is valid"),
            bind_addr: DEFAULT_CLIENT_ADDR.to_string(),
            all_categories: DEFAULT_ALL_CATEGORIES.to_string(),
            request_timeout: Duration::from_secs(10),
            toast_duration: TimeDelta::seconds(TOAST_SECONDS),
            discard_stale_responses: false,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. Unset keys fall back to defaults;
    /// set but unparsable keys are an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ClientError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url: String = try_load(&lookup, "NOTES_API_URL", DEFAULT_API_URL)?;
        let timeout_secs: u64 = try_load(&lookup, "NOTES_REQUEST_TIMEOUT_SECS", "10")?;

        Ok(Self {
            api_url: parse_base_url(&api_url)?,
            bind_addr: try_load(&lookup, "NOTES_CLIENT_ADDR", DEFAULT_CLIENT_ADDR)?,
            all_categories: try_load(&lookup, "NOTES_ALL_CATEGORIES", DEFAULT_ALL_CATEGORIES)?,
            request_timeout: Duration::from_secs(timeout_secs),
            toast_duration: TimeDelta::seconds(TOAST_SECONDS),
            discard_stale_responses: try_load(&lookup, "NOTES_DISCARD_STALE", "false")?,
        })
    }
}

fn try_load<F, T>(lookup: &F, key: &str, default: &str) -> Result<T, ClientError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    let raw = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.trim().parse().map_err(|e| {
        warn!("Invalid {key} value: {e}");
        ClientError::Config(format!("{key}={raw}: {e}"))
    })
}

/// Parse the backend URL, adding a trailing slash so `join("notes")`
/// appends rather than replaces the last path segment.
fn parse_base_url(raw: &str) -> Result<Url, ClientError> {
    let mut url =
        Url::parse(raw).map_err(|e| ClientError::Config(format!("NOTES_API_URL={raw}: {e}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ClientError::Config(format!(
            "NOTES_API_URL must be http or https, got {}",
            url.scheme()
        )));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ClientConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.api_url.as_str(), DEFAULT_API_URL);
        assert_eq!(config.all_categories, "Todos");
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.toast_duration, TimeDelta::seconds(3));
        assert!(!config.discard_stale_responses);
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let config = ClientConfig::from_lookup(lookup_from(&[(
            "NOTES_API_URL",
            "http://notes.local:8080/api",
        )]))
        .unwrap();
        assert_eq!(config.api_url.as_str(), "http://notes.local:8080/api/");
        assert_eq!(
            config.api_url.join("notes").unwrap().as_str(),
            "http://notes.local:8080/api/notes"
        );
    }

    #[test]
    fn test_sentinel_is_configurable() {
        let config =
            ClientConfig::from_lookup(lookup_from(&[("NOTES_ALL_CATEGORIES", "All")])).unwrap();
        assert_eq!(config.all_categories, "All");
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            ClientConfig::from_lookup(lookup_from(&[("NOTES_REQUEST_TIMEOUT_SECS", "soon")])),
            Err(ClientError::Config(_))
        ));
        assert!(matches!(
            ClientConfig::from_lookup(lookup_from(&[("NOTES_API_URL", "ftp://x/")])),
            Err(ClientError::Config(_))
        ));
        assert!(matches!(
            ClientConfig::from_lookup(lookup_from(&[("NOTES_DISCARD_STALE", "maybe")])),
            Err(ClientError::Config(_))
        ));
    }
}
