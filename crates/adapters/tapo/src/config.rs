//! Tapo adapter configuration.

use std::time::Duration;

use serde::Deserialize;

/// Settings forwarded to every `tapo` client the adapter builds.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TapoConfig {
    /// Per-request timeout in seconds. `None` keeps the library default.
    pub timeout_secs: Option<u64>,
}

impl TapoConfig {
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_library_timeout_by_default() {
        let config = TapoConfig::default();
        assert!(config.timeout().is_none());
    }

    #[test]
    fn should_deserialize_from_toml() {
        let config: TapoConfig = toml::from_str("timeout_secs = 5").unwrap();
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn should_use_defaults_for_missing_fields() {
        let config: TapoConfig = toml::from_str("").unwrap();
        assert!(config.timeout_secs.is_none());
    }
}
