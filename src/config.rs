use serde::Deserialize;
use std::path::PathBuf;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Path to the JSON content database
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,

    /// Log filter used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_database_path() -> PathBuf {
    PathBuf::from("data/content-database.json")
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from `RECOMMENDER_*` environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed("RECOMMENDER_")
            .from_iter::<_, Config>(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_vars(Vec::new()).unwrap();
        assert_eq!(config.database_path, PathBuf::from("data/content-database.json"));
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_prefixed_overrides() {
        let vars = vec![
            ("RECOMMENDER_DATABASE_PATH".to_string(), "/tmp/catalog.json".to_string()),
            ("RECOMMENDER_LOG_LEVEL".to_string(), "debug".to_string()),
            ("DATABASE_PATH".to_string(), "ignored.json".to_string()),
        ];
        let config = Config::from_vars(vars).unwrap();
        assert_eq!(config.database_path, PathBuf::from("/tmp/catalog.json"));
        assert_eq!(config.log_level, "debug");
    }
}
