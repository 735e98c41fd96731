//! Call contracts: the record a check leaves for the failer that ends it.

use serde::{Deserialize, Serialize};

use crate::errors::FfError;
use crate::failure::FailureClass;
use crate::rule::Rule;
use crate::template::MessageTemplate;

/// Overrides applied when a failure message is rendered.
///
/// Used both per contract (see [`crate::CallContractor::customize_contract`])
/// and per rule on a failer. Unset fields fall back to the next level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customization {
    /// Failure class to raise instead of [`FailureClass::FailFast`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<FailureClass>,
    /// Message format with `{}` placeholders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_format: Option<String>,
    /// Selector list for [`Customization::message_format`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_arguments: Option<String>,
    /// Text appended to the rendered message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_postfix: Option<String>,
}

impl Customization {
    /// Sets the failure class.
    pub fn with_class(mut self, class: FailureClass) -> Self {
        self.class = Some(class);
        self
    }

    /// Sets the message format and its selectors.
    pub fn with_message(
        mut self,
        format: impl Into<String>,
        arguments: impl Into<String>,
    ) -> Self {
        self.message_format = Some(format.into());
        self.message_arguments = Some(arguments.into());
        self
    }

    /// Sets the message postfix.
    pub fn with_postfix(mut self, postfix: impl Into<String>) -> Self {
        self.message_postfix = Some(postfix.into());
        self
    }

    /// Returns true when no field is set.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Overlays `self` on top of `fallback`, field by field.
    pub fn or(&self, fallback: &Customization) -> Customization {
        let (message_format, message_arguments) = if self.message_format.is_some() {
            (self.message_format.clone(), self.message_arguments.clone())
        } else {
            (
                fallback.message_format.clone(),
                fallback.message_arguments.clone(),
            )
        };
        Customization {
            class: self.class.clone().or_else(|| fallback.class.clone()),
            message_format,
            message_arguments,
            message_postfix: self
                .message_postfix
                .clone()
                .or_else(|| fallback.message_postfix.clone()),
        }
    }

    /// Parses the custom template, if any.
    ///
    /// A format without selectors is accepted only when it has no
    /// placeholders.
    pub fn template(&self) -> Result<Option<MessageTemplate>, FfError> {
        match &self.message_format {
            Some(format) => {
                let arguments = self.message_arguments.as_deref().unwrap_or("");
                MessageTemplate::parse(format, arguments).map(Some)
            }
            None => Ok(None),
        }
    }
}

/// State pushed by an asserting check and popped by the matching fail call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallContract {
    /// Label of the code that ran the check.
    pub caller: String,
    /// Rule the check asserted.
    pub rule: Rule,
    /// Rendered check arguments; index 0 is the caller.
    pub check_args: Vec<String>,
    /// Rendered rule specific data.
    pub check_extra_args: Vec<String>,
    /// Per-contract overrides.
    #[serde(default)]
    pub customization: Customization,
}

impl CallContract {
    /// Starts a contract for `caller`; `cu0` is set to the caller.
    pub fn new(caller: impl Into<String>, rule: Rule) -> Self {
        let caller = caller.into();
        Self {
            check_args: vec![caller.clone()],
            caller,
            rule,
            check_extra_args: Vec::new(),
            customization: Customization::default(),
        }
    }

    /// Appends a rendered check argument.
    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.check_args.push(arg.into());
        self
    }

    /// Appends a rendered extra argument.
    pub fn with_extra(mut self, extra: impl Into<String>) -> Self {
        self.check_extra_args.push(extra.into());
        self
    }
}
