use failfast_core::{CallContract, Rule};
use regex::Regex;

use crate::checker::AssertingChecker;

/// String checks.
///
/// Pattern checks use [`Regex::is_match`]: a match anywhere in the value
/// counts, anchor the pattern with `^...$` for whole-value matching.
pub trait TextChecks: AssertingChecker {
    /// Asserts that `value` is empty.
    fn is_empty(&self, caller: &str, value: &str) -> bool {
        value.is_empty() && self.assert_contract(text(caller, Rule::Empty, value))
    }

    /// Asserts that `value` is not empty.
    fn is_not_empty(&self, caller: &str, value: &str) -> bool {
        !value.is_empty() && self.assert_contract(text(caller, Rule::NotEmpty, value))
    }

    /// Asserts that `value` is absent or empty.
    fn is_none_or_empty(&self, caller: &str, value: Option<&str>) -> bool {
        value.map_or(true, str::is_empty)
            && self.assert_contract(text(caller, Rule::NoneOrEmpty, value.unwrap_or("")))
    }

    /// Asserts that `value` is present and not empty.
    fn is_some_and_not_empty(&self, caller: &str, value: Option<&str>) -> bool {
        match value {
            Some(inner) if !inner.is_empty() => {
                self.assert_contract(text(caller, Rule::SomeAndNotEmpty, inner))
            }
            _ => false,
        }
    }

    /// Asserts that `value` starts with `prefix`.
    fn is_with_prefix(&self, caller: &str, value: &str, prefix: &str) -> bool {
        value.starts_with(prefix)
            && self.assert_contract(affix(caller, Rule::WithPrefix, value, prefix))
    }

    /// Asserts that `value` does not start with `prefix`.
    fn is_without_prefix(&self, caller: &str, value: &str, prefix: &str) -> bool {
        !value.starts_with(prefix)
            && self.assert_contract(affix(caller, Rule::WithoutPrefix, value, prefix))
    }

    /// Asserts that `value` ends with `postfix`.
    fn is_with_postfix(&self, caller: &str, value: &str, postfix: &str) -> bool {
        value.ends_with(postfix)
            && self.assert_contract(affix(caller, Rule::WithPostfix, value, postfix))
    }

    /// Asserts that `value` does not end with `postfix`.
    fn is_without_postfix(&self, caller: &str, value: &str, postfix: &str) -> bool {
        !value.ends_with(postfix)
            && self.assert_contract(affix(caller, Rule::WithoutPostfix, value, postfix))
    }

    /// Asserts that `value` contains `substring`.
    fn is_with_substring(&self, caller: &str, value: &str, substring: &str) -> bool {
        value.contains(substring)
            && self.assert_contract(affix(caller, Rule::WithSubstring, value, substring))
    }

    /// Asserts that `value` does not contain `substring`.
    fn is_without_substring(&self, caller: &str, value: &str, substring: &str) -> bool {
        !value.contains(substring)
            && self.assert_contract(affix(caller, Rule::WithoutSubstring, value, substring))
    }

    /// Asserts that `pattern` matches `value`.
    fn is_matching(&self, caller: &str, value: &str, pattern: &Regex) -> bool {
        pattern.is_match(value)
            && self.assert_contract(affix(caller, Rule::Matching, value, pattern.as_str()))
    }

    /// Asserts that `pattern` does not match `value`.
    fn is_not_matching(&self, caller: &str, value: &str, pattern: &Regex) -> bool {
        !pattern.is_match(value)
            && self.assert_contract(affix(caller, Rule::NotMatching, value, pattern.as_str()))
    }
}

impl TextChecks for crate::StandardChecker {}

fn text(caller: &str, rule: Rule, value: &str) -> CallContract {
    CallContract::new(caller, rule).with_arg(value)
}

fn affix(caller: &str, rule: Rule, value: &str, part: &str) -> CallContract {
    CallContract::new(caller, rule)
        .with_arg(value)
        .with_arg(part)
        .with_extra(part)
}
