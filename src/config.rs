//! Generator defaults loaded from a TOML file.
//!
//! ```
//! use transportgraph::config::Settings;
//!
//! let settings = Settings::from_toml_str(r#"
//!     [generator]
//!     supply_range = 5
//!     balance_demand = true
//! "#).unwrap();
//!
//! assert_eq!(settings.generator.supply_range, Some(5));
//! assert_eq!(settings.generator.balance_demand, Some(true));
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::generator::GeneratorConfig;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub generator: GeneratorSettings,
}

/// Optional overrides for the generation policy. Unset values keep the
/// generator defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct GeneratorSettings {
    #[serde(default)]
    pub supply_range: Option<u32>,

    #[serde(default)]
    pub balance_demand: Option<bool>,

    #[serde(default)]
    pub allow_self_loops: Option<bool>,
}

impl Settings {
    /// Loads settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses settings from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(s)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.generator.supply_range == Some(0) {
            return Err(ConfigError::Invalid(
                "generator.supply_range must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Overlays the file values onto `config`.
    pub fn apply(&self, mut config: GeneratorConfig) -> GeneratorConfig {
        if let Some(supply_range) = self.generator.supply_range {
            config.supply_range = supply_range;
        }
        if let Some(balance_demand) = self.generator.balance_demand {
            config.balance_demand = balance_demand;
        }
        if let Some(allow_self_loops) = self.generator.allow_self_loops {
            config.allow_self_loops = allow_self_loops;
        }
        config
    }
}
