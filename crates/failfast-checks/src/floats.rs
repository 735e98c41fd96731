use failfast_core::{CallContract, FloatTolerance, Rule};

use crate::checker::AssertingChecker;

/// Approximate equality checks for floating point values.
///
/// `f32` arguments convert losslessly through `Into<f64>`.
pub trait FloatChecks: AssertingChecker {
    /// Asserts that `b` is equal or almost equal to `a` under the checker's tolerance.
    fn is_equals_almost(&self, caller: &str, a: impl Into<f64>, b: impl Into<f64>) -> bool {
        let tolerance = self.float_tolerance();
        self.is_equals_almost_within(caller, a, b, tolerance)
    }

    /// Asserts that `b` is neither equal nor almost equal to `a`.
    fn is_not_equals_almost(&self, caller: &str, a: impl Into<f64>, b: impl Into<f64>) -> bool {
        let tolerance = self.float_tolerance();
        self.is_not_equals_almost_within(caller, a, b, tolerance)
    }

    /// [`FloatChecks::is_equals_almost`] with an explicit tolerance.
    fn is_equals_almost_within(
        &self,
        caller: &str,
        a: impl Into<f64>,
        b: impl Into<f64>,
        tolerance: FloatTolerance,
    ) -> bool {
        let (a, b) = (a.into(), b.into());
        tolerance.accepts(a, b)
            && self.assert_contract(almost(caller, Rule::EqualsAlmost, a, b, tolerance))
    }

    /// [`FloatChecks::is_not_equals_almost`] with an explicit tolerance.
    fn is_not_equals_almost_within(
        &self,
        caller: &str,
        a: impl Into<f64>,
        b: impl Into<f64>,
        tolerance: FloatTolerance,
    ) -> bool {
        let (a, b) = (a.into(), b.into());
        !tolerance.accepts(a, b)
            && self.assert_contract(almost(caller, Rule::NotEqualsAlmost, a, b, tolerance))
    }
}

impl FloatChecks for crate::StandardChecker {}

fn almost(caller: &str, rule: Rule, a: f64, b: f64, tolerance: FloatTolerance) -> CallContract {
    let (low, high) = tolerance.bounds(a);
    CallContract::new(caller, rule)
        .with_arg(a.to_string())
        .with_arg(b.to_string())
        .with_extra(tolerance.absolute.to_string())
        .with_extra(tolerance.relative.to_string())
        .with_extra(low.to_string())
        .with_extra(high.to_string())
}
