use serde::{Deserialize, Serialize};

use crate::{
    domain::ThemeMode,
    error::{DashboardError, Result},
};

/// What happens to the current page when the search query changes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PagePolicy {
    /// Jump back to page 1 on every query change
    #[default]
    ResetOnQuery,
    /// Keep the current page, even if the filtered set no longer reaches it
    Preserve,
}

/// Session-level configuration for the dashboard core
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub page_size: usize,
    pub page_policy: PagePolicy,
    pub theme: ThemeMode,
}

impl DashboardConfig {
    pub const DEFAULT_PAGE_SIZE: usize = 8;

    /// Parses a JSON config; missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(DashboardError::ConfigError(
                "page_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            page_size: Self::DEFAULT_PAGE_SIZE,
            page_policy: PagePolicy::default(),
            theme: ThemeMode::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DashboardConfig::default();
        assert_eq!(config.page_size, 8);
        assert_eq!(config.page_policy, PagePolicy::ResetOnQuery);
        assert_eq!(config.theme, ThemeMode::Light);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config = DashboardConfig::from_json(r#"{"page_policy": "preserve"}"#).unwrap();
        assert_eq!(config.page_policy, PagePolicy::Preserve);
        assert_eq!(config.page_size, 8);
    }

    #[test]
    fn test_from_json_rejects_zero_page_size() {
        let result = DashboardConfig::from_json(r#"{"page_size": 0}"#);
        assert!(matches!(result, Err(DashboardError::ConfigError(_))));
    }

    #[test]
    fn test_from_json_malformed() {
        let result = DashboardConfig::from_json("{not json");
        assert!(matches!(result, Err(DashboardError::SerializationError(_))));
    }
}
