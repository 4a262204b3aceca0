//! Client configuration parsed from environment variables.

use std::time::Duration;

use crate::error::{ClientResult, UserClientError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// User resource base URL, always ending with `/`.
    pub user_uri: String,
    /// `None` leaves the transport default in place.
    pub request_timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(user_uri: impl Into<String>) -> Self {
        Self {
            user_uri: normalize_base_url(user_uri.into()),
            request_timeout: None,
        }
    }

    /// Build typed client config from environment variables.
    ///
    /// Required:
    /// - `USER_URI`
    ///
    /// Optional:
    /// - `USER_CLIENT_TIMEOUT_SECS`: no timeout when absent
    pub fn from_env() -> ClientResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ClientResult<Self> {
        let user_uri = lookup("USER_URI")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| UserClientError::Config("USER_URI is required".to_string()))?;

        let request_timeout = parse_u64(&lookup, "USER_CLIENT_TIMEOUT_SECS")?.map(Duration::from_secs);

        Ok(Self { user_uri: normalize_base_url(user_uri), request_timeout })
    }
}

fn parse_u64(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> ClientResult<Option<u64>> {
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<u64>()
                .map_err(|_| UserClientError::Config(format!("invalid {key}: {raw}")))
        })
        .transpose()
}

fn normalize_base_url(raw: String) -> String {
    let trimmed = raw.trim();
    if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn from_lookup_defaults() {
        let cfg = ClientConfig::from_lookup(lookup(&[("USER_URI", "http://svc/users/")])).unwrap();
        assert_eq!(cfg, ClientConfig::new("http://svc/users/"));
        assert_eq!(cfg.request_timeout, None);
    }

    #[test]
    fn from_lookup_appends_trailing_slash() {
        let cfg = ClientConfig::from_lookup(lookup(&[("USER_URI", " http://svc/users ")])).unwrap();
        assert_eq!(cfg.user_uri, "http://svc/users/");
    }

    #[test]
    fn from_lookup_parses_overrides() {
        let cfg = ClientConfig::from_lookup(lookup(&[
            ("USER_URI", "http://svc/users/"),
            ("USER_CLIENT_TIMEOUT_SECS", "30"),
        ]))
        .unwrap();
        assert_eq!(cfg.request_timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn from_lookup_requires_user_uri() {
        let err = ClientConfig::from_lookup(lookup(&[])).unwrap_err().to_string();
        assert!(err.contains("USER_URI is required"));
    }

    #[test]
    fn from_lookup_rejects_bad_numbers() {
        let err = ClientConfig::from_lookup(lookup(&[("USER_URI", "http://svc/"), ("USER_CLIENT_TIMEOUT_SECS", "soon")]))
            .unwrap_err()
            .to_string();
        assert!(err.contains("invalid USER_CLIENT_TIMEOUT_SECS"));
    }
}
