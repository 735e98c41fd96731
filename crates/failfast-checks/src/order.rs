use std::fmt::Debug;

use failfast_core::{CallContract, Rule};

use crate::checker::AssertingChecker;
use crate::render::show;

/// Ordering and range checks over [`PartialOrd`] values.
///
/// Range bounds are inclusive and may be given in either order. Values that
/// do not compare (e.g. NaN) are neither inside nor outside a range.
pub trait OrderChecks: AssertingChecker {
    /// Asserts `a < b`.
    fn is_less<T: PartialOrd + Debug + ?Sized>(&self, caller: &str, a: &T, b: &T) -> bool {
        a < b && self.assert_contract(pair(caller, Rule::Less, a, b))
    }

    /// Asserts `a <= b`.
    fn is_less_or_equals<T: PartialOrd + Debug + ?Sized>(
        &self,
        caller: &str,
        a: &T,
        b: &T,
    ) -> bool {
        a <= b && self.assert_contract(pair(caller, Rule::LessOrEquals, a, b))
    }

    /// Asserts `a > b`.
    fn is_greater<T: PartialOrd + Debug + ?Sized>(&self, caller: &str, a: &T, b: &T) -> bool {
        a > b && self.assert_contract(pair(caller, Rule::Greater, a, b))
    }

    /// Asserts `a >= b`.
    fn is_greater_or_equals<T: PartialOrd + Debug + ?Sized>(
        &self,
        caller: &str,
        a: &T,
        b: &T,
    ) -> bool {
        a >= b && self.assert_contract(pair(caller, Rule::GreaterOrEquals, a, b))
    }

    /// Asserts that `value` lies within `[min, max]`.
    fn is_inside<T: PartialOrd + Debug + ?Sized>(
        &self,
        caller: &str,
        value: &T,
        min: &T,
        max: &T,
    ) -> bool {
        let (low, high) = normalize(min, max);
        (low <= value && value <= high)
            && self.assert_contract(range(caller, Rule::Inside, value, low, high))
    }

    /// Asserts that `value` lies outside `[min, max]`.
    fn is_outside<T: PartialOrd + Debug + ?Sized>(
        &self,
        caller: &str,
        value: &T,
        min: &T,
        max: &T,
    ) -> bool {
        let (low, high) = normalize(min, max);
        (value < low || value > high)
            && self.assert_contract(range(caller, Rule::Outside, value, low, high))
    }
}

impl OrderChecks for crate::StandardChecker {}

fn normalize<'a, T: PartialOrd + ?Sized>(min: &'a T, max: &'a T) -> (&'a T, &'a T) {
    if min > max {
        (max, min)
    } else {
        (min, max)
    }
}

fn pair<T: Debug + ?Sized>(caller: &str, rule: Rule, a: &T, b: &T) -> CallContract {
    CallContract::new(caller, rule).with_arg(show(a)).with_arg(show(b))
}

fn range<T: Debug + ?Sized>(caller: &str, rule: Rule, value: &T, low: &T, high: &T) -> CallContract {
    CallContract::new(caller, rule)
        .with_arg(show(value))
        .with_arg(show(low))
        .with_arg(show(high))
        .with_extra(show(low))
        .with_extra(show(high))
}
