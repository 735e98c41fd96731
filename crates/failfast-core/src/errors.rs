//! Structured error types shared across the fail-fast crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::failure::FailFastError;

/// Structured payload attached to the non-failure [`FfError`] families.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable dotted error code, e.g. `contract.missing`.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (callers, rules, selectors).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry; the value is rendered with [`Display`].
    pub fn with_context(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Sets a remediation hint.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            f.write_str(" | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            f.write_str("]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

/// Canonical error type of the fail-fast crates.
///
/// [`FfError::Failed`] is the fail-fast signal itself: a check asserted a
/// violated precondition and the failer ended the contract. The remaining
/// families report misuse of the machinery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum FfError {
    /// A fail-fast failure raised by a failer.
    #[error("fail-fast: {0}")]
    Failed(Box<FailFastError>),
    /// A call contract was ended out of order or by the wrong party.
    #[error("contract error: {0}")]
    Contract(ErrorInfo),
    /// Invalid configuration, message templates or an unset global holder.
    #[error("configuration error: {0}")]
    Config(ErrorInfo),
    /// Observer or customization registration misuse.
    #[error("registration error: {0}")]
    Registration(ErrorInfo),
}

impl FfError {
    /// Returns the payload for every family except [`FfError::Failed`].
    pub fn info(&self) -> Option<&ErrorInfo> {
        match self {
            FfError::Failed(_) => None,
            FfError::Contract(info) | FfError::Config(info) | FfError::Registration(info) => {
                Some(info)
            }
        }
    }

    /// Returns the raised failure if this is a fail-fast signal.
    pub fn failure(&self) -> Option<&FailFastError> {
        match self {
            FfError::Failed(failure) => Some(failure.as_ref()),
            _ => None,
        }
    }

    /// Stable code of the error; failures report `failfast.failed`.
    pub fn code(&self) -> &str {
        match self.info() {
            Some(info) => &info.code,
            None => "failfast.failed",
        }
    }

    /// Returns true for the fail-fast signal.
    pub fn is_failure(&self) -> bool {
        matches!(self, FfError::Failed(_))
    }
}

impl From<FailFastError> for FfError {
    fn from(failure: FailFastError) -> Self {
        FfError::Failed(Box::new(failure))
    }
}
