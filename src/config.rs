use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use crate::error::{GpError, Result};
use crate::model::Season;

pub const DEFAULT_SEASON: &str = "2025spring";

/// Location and credentials of the result store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Project URL, e.g. `https://<project>.supabase.co`.
    pub base_url: String,
    pub api_key: String,
}

impl StoreConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    pub(crate) fn collection_url(&self, collection: &str, query: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        if query.is_empty() {
            format!("{base}/rest/v1/{collection}")
        } else {
            format!("{base}/rest/v1/{collection}?{query}")
        }
    }
}

/// Where a static reference document is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceSource {
    Url(String),
    File(PathBuf),
}

impl ReferenceSource {
    /// `http://` and `https://` locations are URLs, anything else is a path.
    pub fn parse(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            ReferenceSource::Url(location.to_string())
        } else {
            ReferenceSource::File(PathBuf::from(location))
        }
    }
}

impl Display for ReferenceSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ReferenceSource::Url(url) => write!(f, "{url}"),
            ReferenceSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Store location plus reference documents and the default season.
#[derive(Debug, Clone)]
pub struct Config {
    pub store: StoreConfig,
    /// JSON list of all known user identifiers.
    pub users: ReferenceSource,
    /// JSON map from user identifier to membership period.
    pub periods: ReferenceSource,
    /// Season shown before any selection is made.
    pub default_season: Season,
}

impl Config {
    /// Configuration with the default reference files and season.
    pub fn new(store: StoreConfig) -> Self {
        Self {
            store,
            users: ReferenceSource::parse("users.json"),
            periods: ReferenceSource::parse("user_periods.json"),
            default_season: Season::parse(DEFAULT_SEASON),
        }
    }

    /// Read the configuration from the environment.
    ///
    /// `SUPABASE_URL` and `SUPABASE_API_KEY` are required. `GP_USERS`,
    /// `GP_USER_PERIODS` and `GP_DEFAULT_SEASON` override the defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &'static str| lookup(key).ok_or(GpError::MissingEnv(key));

        let mut config = Self::new(StoreConfig::new(
            required("SUPABASE_URL")?,
            required("SUPABASE_API_KEY")?,
        ));
        if let Some(users) = lookup("GP_USERS") {
            config.users = ReferenceSource::parse(&users);
        }
        if let Some(periods) = lookup("GP_USER_PERIODS") {
            config.periods = ReferenceSource::parse(&periods);
        }
        if let Some(season) = lookup("GP_DEFAULT_SEASON") {
            config.default_season = Season::parse(&season);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::from_lookup(lookup(&[
            ("SUPABASE_URL", "https://example.supabase.co/"),
            ("SUPABASE_API_KEY", "key"),
        ]))
        .unwrap();
        assert_eq!(config.users, ReferenceSource::File("users.json".into()));
        assert_eq!(config.default_season.to_string(), "2025spring");
        assert_eq!(
            config.store.collection_url("season_result", "season=eq.2025spring"),
            "https://example.supabase.co/rest/v1/season_result?season=eq.2025spring"
        );
    }

    #[test]
    fn test_config_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("SUPABASE_URL", "https://example.supabase.co"),
            ("SUPABASE_API_KEY", "key"),
            ("GP_USERS", "https://ranking.example/users.json"),
            ("GP_DEFAULT_SEASON", "2024winter"),
        ]))
        .unwrap();
        assert_eq!(
            config.users,
            ReferenceSource::Url("https://ranking.example/users.json".to_string())
        );
        assert_eq!(config.default_season.to_string(), "2024winter");
    }

    #[test]
    fn test_config_missing_key() {
        let err = Config::from_lookup(lookup(&[("SUPABASE_URL", "https://x")])).unwrap_err();
        assert!(matches!(err, GpError::MissingEnv("SUPABASE_API_KEY")));
    }
}
