//! Settings files configure a [`Debugger`] at startup.
//!
//! ```toml
//! default_color = "light"
//!
//! [info]
//! enabled = ["AI"]
//! disabled = ["Physics"]
//!
//! [warning]
//! disabled = ["Audio"]
//! ```

use crate::color::Color;
use crate::debugger::Debugger;
use crate::error::SettingsError;
use crate::severity::Severity;
use std::fs;
use std::path::Path;

/// The categories that should be switched on or off for one severity.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CategorySettings {
    pub enabled: Vec<String>,
    pub disabled: Vec<String>,
}

/// Settings for a [`Debugger`], usually loaded from a TOML file.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DebuggerSettings {
    /// The default decoration color
    pub default_color: Option<Color>,
    pub info: CategorySettings,
    pub warning: CategorySettings,
    pub error: CategorySettings,
}

impl DebuggerSettings {
    /// Parse settings from a TOML document
    pub fn from_toml_str(toml: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(toml)?)
    }

    /// Read settings from a TOML file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Gets the category settings of a severity
    pub fn categories(&self, severity: Severity) -> &CategorySettings {
        match severity {
            Severity::Info => &self.info,
            Severity::Warning => &self.warning,
            Severity::Error => &self.error,
        }
    }

    /// Applies these settings to a debugger.
    ///
    /// Within a severity the `enabled` list is applied before the `disabled` list, so a category
    /// named in both ends up disabled.
    pub fn apply(&self, debugger: &Debugger) {
        if let Some(color) = self.default_color {
            debugger.set_default_color(color);
        }
        for severity in Severity::ALL {
            let categories = self.categories(severity);
            for category in &categories.enabled {
                debugger.enable_category(severity, category);
            }
            for category in &categories.disabled {
                debugger.disable_category(severity, category);
            }
        }
    }
}
