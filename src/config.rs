use std::{env, path::PathBuf, time::Duration};

use url::Url;

use crate::cache::Store;
use crate::error::{Error, Result};
use crate::fetch::DEFAULT_PORTAL_URL;

const DEFAULT_CACHE_DIR: &str = "data/menu";
const DEFAULT_WEEKS: u32 = 2;
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheLocation {
    Dir(PathBuf),
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub cache: CacheLocation,
    pub weeks: u32,
    pub portal_url: Url,
    pub fetch_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let cache = match lookup("CACHE").as_deref() {
            Some(":memory:") => CacheLocation::Memory,
            Some(p) => CacheLocation::Dir(p.into()),
            None => {
                log::warn!("env var CACHE not set, using {DEFAULT_CACHE_DIR}");
                CacheLocation::Dir(DEFAULT_CACHE_DIR.into())
            }
        };

        let weeks = lookup("WEEKS")
            .map(|w| {
                w.parse()
                    .map_err(|_| Error::config_error(&format!("WEEKS is not a count: {w:?}")))
            })
            .transpose()?
            .unwrap_or(DEFAULT_WEEKS);

        let mut portal_url = lookup("PORTAL_URL").unwrap_or_else(|| DEFAULT_PORTAL_URL.to_string());
        if !portal_url.ends_with('/') {
            portal_url.push('/');
        }
        let portal_url = Url::parse(&portal_url)
            .map_err(|e| Error::config_error(&format!("PORTAL_URL {portal_url:?}: {e}")))?;

        let fetch_timeout = lookup("FETCH_TIMEOUT_SECS")
            .map(|t| match t.parse::<u64>() {
                Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
                _ => Err(Error::config_error(&format!(
                    "FETCH_TIMEOUT_SECS must be a positive number of seconds: {t:?}"
                ))),
            })
            .transpose()?
            .unwrap_or(Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS));

        Ok(Self {
            cache,
            weeks,
            portal_url,
            fetch_timeout,
        })
    }

    pub async fn store(&self) -> Result<Store> {
        match &self.cache {
            CacheLocation::Dir(p) => Store::local(p).await,
            CacheLocation::Memory => Ok(Store::AdHoc),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.cache, CacheLocation::Dir("data/menu".into()));
        assert_eq!(config.weeks, 2);
        assert_eq!(config.portal_url.as_str(), DEFAULT_PORTAL_URL);
        assert_eq!(config.fetch_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("CACHE", ":memory:"),
            ("WEEKS", "4"),
            ("PORTAL_URL", "http://localhost:8080/opera"),
            ("FETCH_TIMEOUT_SECS", "5"),
        ])
        .unwrap();
        assert_eq!(config.cache, CacheLocation::Memory);
        assert_eq!(config.weeks, 4);
        assert_eq!(config.portal_url.as_str(), "http://localhost:8080/opera/");
        assert_eq!(config.fetch_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(config(&[("WEEKS", "two")]), Err(Error::Config(_))));
        assert!(matches!(
            config(&[("FETCH_TIMEOUT_SECS", "0")]),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            config(&[("PORTAL_URL", "not a url")]),
            Err(Error::Config(_))
        ));
    }
}
