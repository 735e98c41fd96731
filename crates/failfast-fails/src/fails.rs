//! Typed fail operations, one per check.
//!
//! Each method ends the contract of the check with the same name and is a
//! shorthand for [`Failing::fail`] without a user message.

use failfast_core::{FfError, Rule};

use crate::failer::Failing;

/// Fail operations ending presence, equality, identity, default and flag checks.
pub trait ValueFails: Failing {
    /// Ends the `is_none` contract.
    fn fail_none(&self, caller: &str, name: &str) -> FfError {
        self.fail(caller, Rule::None, &[name], None)
    }

    /// Ends the `is_some` contract.
    fn fail_some(&self, caller: &str, name: &str) -> FfError {
        self.fail(caller, Rule::Some, &[name], None)
    }

    /// Ends the `is_equals` contract.
    fn fail_equals(&self, caller: &str, a_name: &str, b_name: &str) -> FfError {
        self.fail(caller, Rule::Equals, &[a_name, b_name], None)
    }

    /// Ends the `is_not_equals` contract.
    fn fail_not_equals(&self, caller: &str, a_name: &str, b_name: &str) -> FfError {
        self.fail(caller, Rule::NotEquals, &[a_name, b_name], None)
    }

    /// Ends the `is_same` contract.
    fn fail_same(&self, caller: &str, a_name: &str, b_name: &str) -> FfError {
        self.fail(caller, Rule::Same, &[a_name, b_name], None)
    }

    /// Ends the `is_not_same` contract.
    fn fail_not_same(&self, caller: &str, a_name: &str, b_name: &str) -> FfError {
        self.fail(caller, Rule::NotSame, &[a_name, b_name], None)
    }

    /// Ends the `is_default` contract.
    fn fail_default(&self, caller: &str, name: &str) -> FfError {
        self.fail(caller, Rule::Default, &[name], None)
    }

    /// Ends the `is_not_default` contract.
    fn fail_not_default(&self, caller: &str, name: &str) -> FfError {
        self.fail(caller, Rule::NotDefault, &[name], None)
    }

    /// Ends the `is_true` contract.
    fn fail_true(&self, caller: &str, name: &str) -> FfError {
        self.fail(caller, Rule::True, &[name], None)
    }

    /// Ends the `is_false` contract.
    fn fail_false(&self, caller: &str, name: &str) -> FfError {
        self.fail(caller, Rule::False, &[name], None)
    }
}

impl ValueFails for crate::StandardFailer {}

/// Fail operations ending ordering and range checks.
pub trait OrderFails: Failing {
    /// Ends the `is_less` contract.
    fn fail_less(&self, caller: &str, a_name: &str, b_name: &str) -> FfError {
        self.fail(caller, Rule::Less, &[a_name, b_name], None)
    }

    /// Ends the `is_less_or_equals` contract.
    fn fail_less_or_equals(&self, caller: &str, a_name: &str, b_name: &str) -> FfError {
        self.fail(caller, Rule::LessOrEquals, &[a_name, b_name], None)
    }

    /// Ends the `is_greater` contract.
    fn fail_greater(&self, caller: &str, a_name: &str, b_name: &str) -> FfError {
        self.fail(caller, Rule::Greater, &[a_name, b_name], None)
    }

    /// Ends the `is_greater_or_equals` contract.
    fn fail_greater_or_equals(&self, caller: &str, a_name: &str, b_name: &str) -> FfError {
        self.fail(caller, Rule::GreaterOrEquals, &[a_name, b_name], None)
    }

    /// Ends the `is_inside` contract; `name` labels the checked value.
    fn fail_inside(&self, caller: &str, name: &str) -> FfError {
        self.fail(caller, Rule::Inside, &[name], None)
    }

    /// Ends the `is_outside` contract; `name` labels the checked value.
    fn fail_outside(&self, caller: &str, name: &str) -> FfError {
        self.fail(caller, Rule::Outside, &[name], None)
    }
}

impl OrderFails for crate::StandardFailer {}

/// Fail operations ending approximate float checks.
pub trait FloatFails: Failing {
    /// Ends the `is_equals_almost` contract.
    fn fail_equals_almost(&self, caller: &str, a_name: &str, b_name: &str) -> FfError {
        self.fail(caller, Rule::EqualsAlmost, &[a_name, b_name], None)
    }

    /// Ends the `is_not_equals_almost` contract.
    fn fail_not_equals_almost(&self, caller: &str, a_name: &str, b_name: &str) -> FfError {
        self.fail(caller, Rule::NotEqualsAlmost, &[a_name, b_name], None)
    }
}

impl FloatFails for crate::StandardFailer {}

/// Fail operations ending string checks.
pub trait TextFails: Failing {
    /// Ends the `is_empty` contract.
    fn fail_empty(&self, caller: &str, name: &str) -> FfError {
        self.fail(caller, Rule::Empty, &[name], None)
    }

    /// Ends the `is_not_empty` contract.
    fn fail_not_empty(&self, caller: &str, name: &str) -> FfError {
        self.fail(caller, Rule::NotEmpty, &[name], None)
    }

    /// Ends the `is_none_or_empty` contract.
    fn fail_none_or_empty(&self, caller: &str, name: &str) -> FfError {
        self.fail(caller, Rule::NoneOrEmpty, &[name], None)
    }

    /// Ends the `is_some_and_not_empty` contract.
    fn fail_some_and_not_empty(&self, caller: &str, name: &str) -> FfError {
        self.fail(caller, Rule::SomeAndNotEmpty, &[name], None)
    }

    /// Ends the `is_with_prefix` contract.
    fn fail_with_prefix(&self, caller: &str, name: &str) -> FfError {
        self.fail(caller, Rule::WithPrefix, &[name], None)
    }

    /// Ends the `is_without_prefix` contract.
    fn fail_without_prefix(&self, caller: &str, name: &str) -> FfError {
        self.fail(caller, Rule::WithoutPrefix, &[name], None)
    }

    /// Ends the `is_with_postfix` contract.
    fn fail_with_postfix(&self, caller: &str, name: &str) -> FfError {
        self.fail(caller, Rule::WithPostfix, &[name], None)
    }

    /// Ends the `is_without_postfix` contract.
    fn fail_without_postfix(&self, caller: &str, name: &str) -> FfError {
        self.fail(caller, Rule::WithoutPostfix, &[name], None)
    }

    /// Ends the `is_with_substring` contract.
    fn fail_with_substring(&self, caller: &str, name: &str) -> FfError {
        self.fail(caller, Rule::WithSubstring, &[name], None)
    }

    /// Ends the `is_without_substring` contract.
    fn fail_without_substring(&self, caller: &str, name: &str) -> FfError {
        self.fail(caller, Rule::WithoutSubstring, &[name], None)
    }

    /// Ends the `is_matching` contract.
    fn fail_matching(&self, caller: &str, name: &str) -> FfError {
        self.fail(caller, Rule::Matching, &[name], None)
    }

    /// Ends the `is_not_matching` contract.
    fn fail_not_matching(&self, caller: &str, name: &str) -> FfError {
        self.fail(caller, Rule::NotMatching, &[name], None)
    }
}

impl TextFails for crate::StandardFailer {}

/// Fail operations ending sequence checks.
pub trait SequenceFails: Failing {
    /// Ends the `is_sequence_equals` contract.
    fn fail_sequence_equals(&self, caller: &str, a_name: &str, b_name: &str) -> FfError {
        self.fail(caller, Rule::SequenceEquals, &[a_name, b_name], None)
    }

    /// Ends the `is_sequence_not_equals` contract.
    fn fail_sequence_not_equals(&self, caller: &str, a_name: &str, b_name: &str) -> FfError {
        self.fail(caller, Rule::SequenceNotEquals, &[a_name, b_name], None)
    }
}

impl SequenceFails for crate::StandardFailer {}

/// Fail operations ending outcome checks.
pub trait OutcomeFails: Failing {
    /// Ends the `is_err` contract; `operation` names what failed.
    fn fail_error(&self, caller: &str, operation: &str) -> FfError {
        self.fail(caller, Rule::Error, &[operation], None)
    }
}

impl OutcomeFails for crate::StandardFailer {}
