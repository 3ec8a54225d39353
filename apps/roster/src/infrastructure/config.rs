use std::path::PathBuf;

/// Environment variable naming the store file
pub const STORE_PATH_VAR: &str = "ROSTER_STORE_PATH";

/// Store file used when the variable is not set
pub const DEFAULT_STORE_PATH: &str = "roster-store.json";

/// Runtime configuration, read from the environment (and `.env`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterConfig {
    pub store_path: PathBuf,
}

impl RosterConfig {
    /// Loads `.env` if present, then reads the configuration
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads the configuration through `lookup`
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let store_path = lookup(STORE_PATH_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| {
                tracing::warn!("{} not set, using default", STORE_PATH_VAR);
                DEFAULT_STORE_PATH.to_string()
            });

        Self {
            store_path: PathBuf::from(store_path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_configured_path() {
        let config = RosterConfig::from_lookup(|var| {
            (var == STORE_PATH_VAR).then(|| "/data/teams.json".to_string())
        });
        assert_eq!(config.store_path, PathBuf::from("/data/teams.json"));
    }

    #[test]
    fn falls_back_to_default_path() {
        let config = RosterConfig::from_lookup(|_| None);
        assert_eq!(config.store_path, PathBuf::from(DEFAULT_STORE_PATH));
    }

    #[test]
    fn blank_value_falls_back_to_default() {
        let config = RosterConfig::from_lookup(|_| Some("  ".to_string()));
        assert_eq!(config.store_path, PathBuf::from(DEFAULT_STORE_PATH));
    }
}
