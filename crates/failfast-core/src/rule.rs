//! Identifiers pairing every check with the fail operation that ends it.

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, FfError};

/// A check/fail pair.
///
/// A check that asserts a violated precondition records its rule in the call
/// contract; the failer must end the contract with the same rule. Each rule
/// carries a default message format (`{}` placeholders) and the argument
/// selectors feeding it, see [`crate::template`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// Value is absent.
    None,
    /// Value is present.
    Some,
    /// Two values are equal.
    Equals,
    /// Two values differ.
    NotEquals,
    /// Two references point at the same instance.
    Same,
    /// Two references point at different instances.
    NotSame,
    /// Value equals its type's default.
    Default,
    /// Value differs from its type's default.
    NotDefault,
    /// Flag is set.
    True,
    /// Flag is cleared.
    False,
    /// First value orders before the second.
    Less,
    /// First value orders before or equal to the second.
    LessOrEquals,
    /// First value orders after the second.
    Greater,
    /// First value orders after or equal to the second.
    GreaterOrEquals,
    /// Value lies within an inclusive range.
    Inside,
    /// Value lies outside an inclusive range.
    Outside,
    /// Two floats are equal within tolerance.
    EqualsAlmost,
    /// Two floats differ beyond tolerance.
    NotEqualsAlmost,
    /// String is empty.
    Empty,
    /// String is not empty.
    NotEmpty,
    /// Optional string is absent or empty.
    NoneOrEmpty,
    /// Optional string is present and not empty.
    SomeAndNotEmpty,
    /// String starts with a prefix.
    WithPrefix,
    /// String does not start with a prefix.
    WithoutPrefix,
    /// String ends with a postfix.
    WithPostfix,
    /// String does not end with a postfix.
    WithoutPostfix,
    /// String contains a substring.
    WithSubstring,
    /// String does not contain a substring.
    WithoutSubstring,
    /// String matches a pattern.
    Matching,
    /// String does not match a pattern.
    NotMatching,
    /// Two sequences are element-wise equal.
    SequenceEquals,
    /// Two sequences differ.
    SequenceNotEquals,
    /// An operation returned an error.
    Error,
}

struct RuleEntry {
    id: &'static str,
    format: &'static str,
    arguments: &'static str,
}

const fn entry(id: &'static str, format: &'static str, arguments: &'static str) -> RuleEntry {
    RuleEntry {
        id,
        format,
        arguments,
    }
}

impl Rule {
    /// Every rule, in declaration order.
    pub const ALL: [Rule; 33] = [
        Rule::None,
        Rule::Some,
        Rule::Equals,
        Rule::NotEquals,
        Rule::Same,
        Rule::NotSame,
        Rule::Default,
        Rule::NotDefault,
        Rule::True,
        Rule::False,
        Rule::Less,
        Rule::LessOrEquals,
        Rule::Greater,
        Rule::GreaterOrEquals,
        Rule::Inside,
        Rule::Outside,
        Rule::EqualsAlmost,
        Rule::NotEqualsAlmost,
        Rule::Empty,
        Rule::NotEmpty,
        Rule::NoneOrEmpty,
        Rule::SomeAndNotEmpty,
        Rule::WithPrefix,
        Rule::WithoutPrefix,
        Rule::WithPostfix,
        Rule::WithoutPostfix,
        Rule::WithSubstring,
        Rule::WithoutSubstring,
        Rule::Matching,
        Rule::NotMatching,
        Rule::SequenceEquals,
        Rule::SequenceNotEquals,
        Rule::Error,
    ];

    fn entry(self) -> RuleEntry {
        const PAIR: &str = "fu0, fu1, cu1, fu2, cu2";
        match self {
            Rule::None => entry("none", "{}: Value '{}' is none.", "fu0, fu1"),
            Rule::Some => entry("some", "{}: Value '{}'({}) is NOT none.", "fu0, fu1, cu1"),
            Rule::Equals => entry(
                "equals",
                "{}: Value '{}'({}) is equal to value '{}'({}).",
                PAIR,
            ),
            Rule::NotEquals => entry(
                "not_equals",
                "{}: Value '{}'({}) is NOT equal to value '{}'({}).",
                PAIR,
            ),
            Rule::Same => entry(
                "same",
                "{}: Value '{}'({}) is the same instance as value '{}'({}).",
                PAIR,
            ),
            Rule::NotSame => entry(
                "not_same",
                "{}: Value '{}'({}) is NOT the same instance as value '{}'({}).",
                PAIR,
            ),
            Rule::Default => entry(
                "default",
                "{}: Value '{}'({}) is default({}).",
                "fu0, fu1, cu1, cx0",
            ),
            Rule::NotDefault => entry(
                "not_default",
                "{}: Value '{}'({}) is NOT default({}).",
                "fu0, fu1, cu1, cx0",
            ),
            Rule::True => entry("true", "{}: Value '{}' is true.", "fu0, fu1"),
            Rule::False => entry("false", "{}: Value '{}' is false.", "fu0, fu1"),
            Rule::Less => entry(
                "less",
                "{}: Value '{}'({}) is less than value '{}'({}).",
                PAIR,
            ),
            Rule::LessOrEquals => entry(
                "less_or_equals",
                "{}: Value '{}'({}) is less than or equal to value '{}'({}).",
                PAIR,
            ),
            Rule::Greater => entry(
                "greater",
                "{}: Value '{}'({}) is greater than value '{}'({}).",
                PAIR,
            ),
            Rule::GreaterOrEquals => entry(
                "greater_or_equals",
                "{}: Value '{}'({}) is greater than or equal to value '{}'({}).",
                PAIR,
            ),
            Rule::Inside => entry(
                "inside",
                "{}: Value '{}'({}) is inside range [{};{}].",
                "fu0, fu1, cu1, cx0, cx1",
            ),
            Rule::Outside => entry(
                "outside",
                "{}: Value '{}'({}) is outside range [{};{}].",
                "fu0, fu1, cu1, cx0, cx1",
            ),
            Rule::EqualsAlmost => entry(
                "equals_almost",
                "{}: Value '{}'({}) is almost equal to value '{}'({}) within [{};{}].",
                "fu0, fu1, cu1, fu2, cu2, cx2, cx3",
            ),
            Rule::NotEqualsAlmost => entry(
                "not_equals_almost",
                "{}: Value '{}'({}) is NOT almost equal to value '{}'({}), expected within [{};{}].",
                "fu0, fu1, cu1, fu2, cu2, cx2, cx3",
            ),
            Rule::Empty => entry("empty", "{}: String '{}' is empty.", "fu0, fu1"),
            Rule::NotEmpty => entry(
                "not_empty",
                "{}: String '{}'({}) is NOT empty.",
                "fu0, fu1, cu1",
            ),
            Rule::NoneOrEmpty => entry(
                "none_or_empty",
                "{}: String '{}' is none or empty.",
                "fu0, fu1",
            ),
            Rule::SomeAndNotEmpty => entry(
                "some_and_not_empty",
                "{}: String '{}'({}) is NOT none and NOT empty.",
                "fu0, fu1, cu1",
            ),
            Rule::WithPrefix => entry(
                "with_prefix",
                "{}: String '{}'({}) has prefix '{}'.",
                "fu0, fu1, cu1, cu2",
            ),
            Rule::WithoutPrefix => entry(
                "without_prefix",
                "{}: String '{}'({}) does NOT have prefix '{}'.",
                "fu0, fu1, cu1, cu2",
            ),
            Rule::WithPostfix => entry(
                "with_postfix",
                "{}: String '{}'({}) has postfix '{}'.",
                "fu0, fu1, cu1, cu2",
            ),
            Rule::WithoutPostfix => entry(
                "without_postfix",
                "{}: String '{}'({}) does NOT have postfix '{}'.",
                "fu0, fu1, cu1, cu2",
            ),
            Rule::WithSubstring => entry(
                "with_substring",
                "{}: String '{}'({}) contains substring '{}'.",
                "fu0, fu1, cu1, cu2",
            ),
            Rule::WithoutSubstring => entry(
                "without_substring",
                "{}: String '{}'({}) does NOT contain substring '{}'.",
                "fu0, fu1, cu1, cu2",
            ),
            Rule::Matching => entry(
                "matching",
                "{}: String '{}'({}) matches pattern '{}'.",
                "fu0, fu1, cu1, cu2",
            ),
            Rule::NotMatching => entry(
                "not_matching",
                "{}: String '{}'({}) does NOT match pattern '{}'.",
                "fu0, fu1, cu1, cu2",
            ),
            Rule::SequenceEquals => entry(
                "sequence_equals",
                "{}: Sequence '{}' is equal to sequence '{}' ({} elements: {}).",
                "fu0, fu1, fu2, cx0, cx1",
            ),
            Rule::SequenceNotEquals => entry(
                "sequence_not_equals",
                "{}: Sequence '{}' is NOT equal to sequence '{}' (first difference at index {}: {} vs {}).",
                "fu0, fu1, fu2, cx0, cx1, cx2",
            ),
            Rule::Error => entry("error", "{}: Operation '{}' failed ({}).", "fu0, fu1, cu1"),
        }
    }

    /// Stable snake_case identifier, identical to the serde representation.
    pub fn id(self) -> &'static str {
        self.entry().id
    }

    /// Default message format with positional `{}` placeholders.
    pub fn default_format(self) -> &'static str {
        self.entry().format
    }

    /// Default comma separated argument selectors for [`Rule::default_format`].
    pub fn default_arguments(self) -> &'static str {
        self.entry().arguments
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Rule {
    type Err = FfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rule::ALL
            .iter()
            .copied()
            .find(|rule| rule.id() == s)
            .ok_or_else(|| {
                FfError::Config(
                    ErrorInfo::new("rule.unknown", format!("unknown rule id '{s}'"))
                        .with_hint("rule ids are snake_case, e.g. not_equals or with_prefix"),
                )
            })
    }
}
