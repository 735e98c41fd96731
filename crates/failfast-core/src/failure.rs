//! The fail-fast failure record.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rule::Rule;

/// Classification of a raised failure.
///
/// Only [`FailureClass::FailFast`] failures are latched by a failer; custom
/// classes are reported to the caller and observers but never recorded as
/// the process-visible fail-fast state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureClass {
    /// Regular fail-fast failure.
    #[default]
    FailFast,
    /// Caller-defined failure class with a label.
    Custom(String),
}

impl FailureClass {
    /// Returns true when failures of this class are latched.
    pub fn is_fail_fast(&self) -> bool {
        matches!(self, FailureClass::FailFast)
    }
}

/// A failure raised when a check asserted a violated precondition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct FailFastError {
    /// Rule whose contract was ended.
    pub rule: Rule,
    /// Label of the code that ran the check.
    pub caller: String,
    /// Rendered failure message.
    pub message: String,
    /// Failure class.
    #[serde(default)]
    pub class: FailureClass,
    /// Arguments recorded by the check (`cu`).
    #[serde(default)]
    pub check_args: Vec<String>,
    /// Extra data recorded by the check (`cx`).
    #[serde(default)]
    pub check_extra_args: Vec<String>,
    /// Arguments supplied to the fail call (`fu`).
    #[serde(default)]
    pub fail_args: Vec<String>,
}
