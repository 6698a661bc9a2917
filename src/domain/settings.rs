use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};

use crate::error::{DashboardError, Result};

/// Colour scheme of the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for ThemeMode {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(DashboardError::InvalidTheme(s.to_string())),
        }
    }
}

/// Settings as they take effect once the form is saved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedSettings {
    pub theme: ThemeMode,
    #[serde(with = "on_off")]
    pub notifications: bool,
}

impl Default for AppliedSettings {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Light,
            notifications: true,
        }
    }
}

impl AppliedSettings {
    /// Encodes as `theme=<light|dark>&notifications=<on|off>`
    pub fn to_query_string(&self) -> Result<String> {
        Ok(serde_qs::to_string(self)?)
    }

    /// Parses a query string, with or without the leading `?`
    pub fn from_query_string(query: &str) -> Result<Self> {
        Ok(serde_qs::from_str(query.trim_start_matches('?'))?)
    }
}

mod on_off {
    use super::*;

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(if *value { "on" } else { "off" })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<bool, D::Error> {
        let raw = String::deserialize(deserializer)?;
        match raw.as_str() {
            "on" => Ok(true),
            "off" => Ok(false),
            other => Err(serde::de::Error::custom(format!(
                "expected 'on' or 'off', got '{}'",
                other
            ))),
        }
    }
}

/// Draft state of the Settings page form.
///
/// Edits stay local to the form until [`SettingsForm::submit`] is called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsForm {
    draft: AppliedSettings,
}

impl SettingsForm {
    pub fn new(current: AppliedSettings) -> Self {
        Self { draft: current }
    }

    pub fn select_theme(&mut self, theme: ThemeMode) {
        self.draft.theme = theme;
    }

    pub fn set_notifications(&mut self, enabled: bool) {
        self.draft.notifications = enabled;
    }

    pub fn draft(&self) -> &AppliedSettings {
        &self.draft
    }

    pub fn submit(self) -> AppliedSettings {
        self.draft
    }
}
