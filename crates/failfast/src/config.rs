//! YAML configuration of a [`crate::FailFastHub`].

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use failfast_core::{Customization, ErrorInfo, FfError, FloatTolerance, Rule};
use serde::{Deserialize, Serialize};

/// Tolerance and per-rule message settings.
///
/// ```yaml
/// tolerance:
///   absolute: 0.001
/// customizations:
///   none:
///     message_format: "{} needs {}"
///     message_arguments: "fu0, fu1"
///   not_default:
///     class: !custom validation
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FailFastConfig {
    /// Almost-equals tolerance of the checker.
    #[serde(default)]
    pub tolerance: FloatTolerance,
    /// Customizations registered on the failer, keyed by rule id.
    #[serde(default)]
    pub customizations: BTreeMap<Rule, Customization>,
}

impl FailFastConfig {
    /// Parses a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, FfError> {
        serde_yaml::from_str(yaml).map_err(|err| {
            FfError::Config(ErrorInfo::new("config.parse", err.to_string()))
        })
    }

    /// Reads and parses a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FfError> {
        let path = path.as_ref();
        let yaml = fs::read_to_string(path).map_err(|err| {
            FfError::Config(
                ErrorInfo::new("config.io", err.to_string())
                    .with_context("path", path.display()),
            )
        })?;
        Self::from_yaml_str(&yaml).map_err(|err| match err {
            FfError::Config(info) => FfError::Config(info.with_context("path", path.display())),
            other => other,
        })
    }

    /// Serializes the configuration to YAML.
    pub fn to_yaml_string(&self) -> Result<String, FfError> {
        serde_yaml::to_string(self).map_err(|err| {
            FfError::Config(ErrorInfo::new("config.serialize", err.to_string()))
        })
    }

    /// Checks the tolerance and every message template.
    pub fn validate(&self) -> Result<(), FfError> {
        self.tolerance.validate()?;
        for (rule, customization) in &self.customizations {
            customization.template().map_err(|err| match err {
                FfError::Config(info) => FfError::Config(info.with_context("rule", rule)),
                other => other,
            })?;
        }
        Ok(())
    }
}
