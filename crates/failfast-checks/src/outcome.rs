use std::fmt::Display;

use failfast_core::{CallContract, Rule};

use crate::checker::AssertingChecker;

/// Checks over operation outcomes.
pub trait OutcomeChecks: AssertingChecker {
    /// Asserts that `result` is an error; the error's display text is recorded.
    fn is_err<T, E: Display>(&self, caller: &str, result: &Result<T, E>) -> bool {
        match result {
            Err(err) => {
                self.assert_contract(CallContract::new(caller, Rule::Error).with_arg(err.to_string()))
            }
            Ok(_) => false,
        }
    }
}

impl OutcomeChecks for crate::StandardChecker {}
