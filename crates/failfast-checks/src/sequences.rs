use std::fmt::Debug;

use failfast_core::{CallContract, Rule};

use crate::checker::AssertingChecker;
use crate::render::{show, summarize};

const MISSING: &str = "<missing>";

/// Element-wise sequence checks.
pub trait SequenceChecks: AssertingChecker {
    /// Asserts that `a` and `b` have the same length and equal elements.
    ///
    /// Extra arguments: the length and a summary of the elements.
    fn is_sequence_equals<A, B>(&self, caller: &str, a: &[A], b: &[B]) -> bool
    where
        A: PartialEq<B> + Debug,
        B: PartialEq<A> + Debug,
    {
        first_difference(a, b).is_none()
            && self.assert_contract(
                CallContract::new(caller, Rule::SequenceEquals)
                    .with_arg(summarize(a))
                    .with_arg(summarize(b))
                    .with_extra(a.len().to_string())
                    .with_extra(summarize(a)),
            )
    }

    /// Asserts that `a` and `b` differ in length or in some element.
    ///
    /// Extra arguments: the first differing index and both elements there.
    fn is_sequence_not_equals<A, B>(&self, caller: &str, a: &[A], b: &[B]) -> bool
    where
        A: PartialEq<B> + Debug,
        B: PartialEq<A> + Debug,
    {
        match first_difference(a, b) {
            Some(index) => self.assert_contract(
                CallContract::new(caller, Rule::SequenceNotEquals)
                    .with_arg(summarize(a))
                    .with_arg(summarize(b))
                    .with_extra(index.to_string())
                    .with_extra(a.get(index).map_or_else(|| MISSING.to_string(), show))
                    .with_extra(b.get(index).map_or_else(|| MISSING.to_string(), show)),
            ),
            None => false,
        }
    }
}

impl SequenceChecks for crate::StandardChecker {}

fn first_difference<A, B>(a: &[A], b: &[B]) -> Option<usize>
where
    A: PartialEq<B>,
    B: PartialEq<A>,
{
    a.iter()
        .zip(b)
        .position(|(left, right)| !(left == right && right == left))
        .or_else(|| (a.len() != b.len()).then(|| a.len().min(b.len())))
}
