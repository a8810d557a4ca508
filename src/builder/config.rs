//! Serializable store configuration.

use crate::builder::error::BuildError;
use serde::{Deserialize, Serialize};

/// Store settings that can be loaded from JSON.
///
/// Missing fields fall back to [`StoreConfig::default`]: history recorded,
/// no limit.
///
/// # Example
///
/// ```
/// use tally::builder::StoreConfig;
///
/// let config = StoreConfig::from_json(r#"{ "history_limit": 50 }"#).unwrap();
/// assert!(config.record_history);
/// assert_eq!(config.history_limit, Some(50));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Whether dispatches are kept in the store's history
    pub record_history: bool,
    /// Maximum dispatches retained; oldest are dropped first
    pub history_limit: Option<usize>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            record_history: true,
            history_limit: None,
        }
    }
}

impl StoreConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| BuildError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), BuildError> {
        if self.history_limit == Some(0) {
            return Err(BuildError::ZeroHistoryLimit);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let config = StoreConfig::from_json("{}").unwrap();
        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn parses_all_fields() {
        let config =
            StoreConfig::from_json(r#"{ "record_history": false, "history_limit": 3 }"#).unwrap();
        assert!(!config.record_history);
        assert_eq!(config.history_limit, Some(3));
    }

    #[test]
    fn rejects_zero_limit() {
        assert_eq!(
            StoreConfig::from_json(r#"{ "history_limit": 0 }"#),
            Err(BuildError::ZeroHistoryLimit)
        );
    }

    #[test]
    fn rejects_unknown_fields() {
        let result = StoreConfig::from_json(r#"{ "persist": true }"#);
        assert!(matches!(result, Err(BuildError::InvalidConfig(_))));
    }
}
