use std::fmt::Debug;

use failfast_core::{CallContract, Rule};

use crate::checker::AssertingChecker;
use crate::render::show;

/// Presence, equality, identity, default and flag checks.
pub trait ValueChecks: AssertingChecker {
    /// Asserts that `value` is absent.
    fn is_none<T>(&self, caller: &str, value: &Option<T>) -> bool {
        value.is_none() && self.assert_contract(CallContract::new(caller, Rule::None))
    }

    /// Asserts that `value` is present.
    fn is_some<T: Debug>(&self, caller: &str, value: &Option<T>) -> bool {
        match value {
            Some(inner) => {
                self.assert_contract(CallContract::new(caller, Rule::Some).with_arg(show(inner)))
            }
            None => false,
        }
    }

    /// Asserts that `a` and `b` are equal in both directions.
    fn is_equals<A, B>(&self, caller: &str, a: &A, b: &B) -> bool
    where
        A: PartialEq<B> + Debug + ?Sized,
        B: PartialEq<A> + Debug + ?Sized,
    {
        (a == b && b == a)
            && self.assert_contract(
                CallContract::new(caller, Rule::Equals)
                    .with_arg(show(a))
                    .with_arg(show(b)),
            )
    }

    /// Asserts that `a` and `b` are not equal.
    fn is_not_equals<A, B>(&self, caller: &str, a: &A, b: &B) -> bool
    where
        A: PartialEq<B> + Debug + ?Sized,
        B: PartialEq<A> + Debug + ?Sized,
    {
        !(a == b && b == a)
            && self.assert_contract(
                CallContract::new(caller, Rule::NotEquals)
                    .with_arg(show(a))
                    .with_arg(show(b)),
            )
    }

    /// Asserts that `a` and `b` are the same instance.
    fn is_same<T: Debug + ?Sized>(&self, caller: &str, a: &T, b: &T) -> bool {
        std::ptr::eq(a, b)
            && self.assert_contract(
                CallContract::new(caller, Rule::Same)
                    .with_arg(show(a))
                    .with_arg(show(b)),
            )
    }

    /// Asserts that `a` and `b` are different instances.
    fn is_not_same<T: Debug + ?Sized>(&self, caller: &str, a: &T, b: &T) -> bool {
        !std::ptr::eq(a, b)
            && self.assert_contract(
                CallContract::new(caller, Rule::NotSame)
                    .with_arg(show(a))
                    .with_arg(show(b)),
            )
    }

    /// Asserts that `value` equals `T::default()`.
    fn is_default<T: Default + PartialEq + Debug>(&self, caller: &str, value: &T) -> bool {
        let default = T::default();
        *value == default
            && self.assert_contract(
                CallContract::new(caller, Rule::Default)
                    .with_arg(show(value))
                    .with_extra(show(&default)),
            )
    }

    /// Asserts that `value` differs from `T::default()`.
    fn is_not_default<T: Default + PartialEq + Debug>(&self, caller: &str, value: &T) -> bool {
        let default = T::default();
        *value != default
            && self.assert_contract(
                CallContract::new(caller, Rule::NotDefault)
                    .with_arg(show(value))
                    .with_extra(show(&default)),
            )
    }

    /// Asserts that `value` is set.
    fn is_true(&self, caller: &str, value: bool) -> bool {
        value && self.assert_contract(CallContract::new(caller, Rule::True).with_arg("true"))
    }

    /// Asserts that `value` is cleared.
    fn is_false(&self, caller: &str, value: bool) -> bool {
        !value && self.assert_contract(CallContract::new(caller, Rule::False).with_arg("false"))
    }
}

impl ValueChecks for crate::StandardChecker {}
