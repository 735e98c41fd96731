//! Message templates used by failers to render failure messages.
//!
//! A template is a format string with positional `{}` placeholders (`{{` and
//! `}}` escape literal braces) plus a comma separated selector list naming
//! the argument that fills each placeholder:
//!
//! * `fuN`: failer argument N (`fu0` is the caller, then value names, then
//!   the optional user message),
//! * `cuN`: checker argument N (`cu0` is the caller, then checked values),
//! * `cxN`: extra checker argument N (rule specific data).

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, FfError};
use crate::rule::Rule;

/// Argument list a selector reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArgSource {
    /// Arguments supplied to the fail call.
    Failer,
    /// Arguments recorded by the asserting check.
    Checker,
    /// Extra data recorded by the asserting check.
    Extra,
}

impl ArgSource {
    fn prefix(self) -> &'static str {
        match self {
            ArgSource::Failer => "fu",
            ArgSource::Checker => "cu",
            ArgSource::Extra => "cx",
        }
    }
}

/// A single `fuN` / `cuN` / `cxN` selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArgSelector {
    /// List the argument is taken from.
    pub source: ArgSource,
    /// Position within that list.
    pub index: usize,
}

impl Display for ArgSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.source.prefix(), self.index)
    }
}

impl FromStr for ArgSelector {
    type Err = FfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            FfError::Config(
                ErrorInfo::new("template.selector", format!("invalid argument selector '{s}'"))
                    .with_hint("selectors look like fu0, cu1 or cx2"),
            )
        };
        let source = match s.get(..2) {
            Some("fu") => ArgSource::Failer,
            Some("cu") => ArgSource::Checker,
            Some("cx") => ArgSource::Extra,
            _ => return Err(invalid()),
        };
        let index = s[2..].parse::<usize>().map_err(|_| invalid())?;
        Ok(Self { source, index })
    }
}

/// Borrowed argument lists a template is rendered against.
#[derive(Debug, Clone, Copy)]
pub struct TemplateArgs<'a> {
    /// Failer arguments (`fu`).
    pub failer: &'a [String],
    /// Checker arguments (`cu`).
    pub checker: &'a [String],
    /// Extra checker arguments (`cx`).
    pub extra: &'a [String],
}

impl<'a> TemplateArgs<'a> {
    fn lookup(&self, selector: ArgSelector) -> Option<&'a str> {
        let list = match selector.source {
            ArgSource::Failer => self.failer,
            ArgSource::Checker => self.checker,
            ArgSource::Extra => self.extra,
        };
        list.get(selector.index).map(String::as_str)
    }
}

/// Parsed message template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplate {
    literals: Vec<String>,
    selectors: Vec<ArgSelector>,
}

impl MessageTemplate {
    /// Parses a format string and its selector list.
    ///
    /// The number of placeholders must equal the number of selectors.
    pub fn parse(format: &str, arguments: &str) -> Result<Self, FfError> {
        let literals = split_placeholders(format)?;
        let selectors = arguments
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::parse::<ArgSelector>)
            .collect::<Result<Vec<_>, _>>()?;
        let placeholders = literals.len() - 1;
        if placeholders != selectors.len() {
            return Err(FfError::Config(
                ErrorInfo::new(
                    "template.arity",
                    "placeholder count does not match selector count",
                )
                .with_context("format", format)
                .with_context("placeholders", placeholders)
                .with_context("selectors", selectors.len()),
            ));
        }
        Ok(Self {
            literals,
            selectors,
        })
    }

    /// Default template of a rule.
    pub fn for_rule(rule: Rule) -> Result<Self, FfError> {
        Self::parse(rule.default_format(), rule.default_arguments())
    }

    /// Selectors in placeholder order.
    pub fn selectors(&self) -> &[ArgSelector] {
        &self.selectors
    }

    /// Renders the template, failing when a selector has no argument.
    pub fn render(&self, args: &TemplateArgs<'_>) -> Result<String, FfError> {
        let mut out = String::new();
        for (idx, literal) in self.literals.iter().enumerate() {
            out.push_str(literal);
            if let Some(selector) = self.selectors.get(idx) {
                let value = args.lookup(*selector).ok_or_else(|| {
                    FfError::Config(
                        ErrorInfo::new(
                            "template.argument_missing",
                            format!("argument {selector} is not available"),
                        )
                        .with_context("failer_args", args.failer.len())
                        .with_context("checker_args", args.checker.len())
                        .with_context("extra_args", args.extra.len()),
                    )
                })?;
                out.push_str(value);
            }
        }
        Ok(out)
    }
}

/// Splits a format string at `{}` placeholders, unescaping `{{` and `}}`.
fn split_placeholders(format: &str) -> Result<Vec<String>, FfError> {
    let mut literals = vec![String::new()];
    let mut chars = format.chars().peekable();
    while let Some(ch) = chars.next() {
        match (ch, chars.peek().copied()) {
            ('{', Some('{')) | ('}', Some('}')) => {
                chars.next();
                push_char(&mut literals, ch);
            }
            ('{', Some('}')) => {
                chars.next();
                literals.push(String::new());
            }
            ('{', _) | ('}', _) => {
                return Err(FfError::Config(
                    ErrorInfo::new("template.format", "unbalanced brace in message format")
                        .with_context("format", format)
                        .with_hint("use {} for arguments and {{ or }} for literal braces"),
                ));
            }
            _ => push_char(&mut literals, ch),
        }
    }
    Ok(literals)
}

fn push_char(literals: &mut [String], ch: char) {
    if let Some(last) = literals.last_mut() {
        last.push(ch);
    }
}
