use std::sync::Arc;

use failfast_core::{
    CallContract, CallContractor, CallContractorReference, Checker, FfError, FloatTolerance,
    Slot,
};
use parking_lot::RwLock;
use tracing::debug;

/// Checker able to record the call contract of an asserted check.
///
/// The check traits ([`crate::ValueChecks`], [`crate::OrderChecks`], ...)
/// are built on this trait and implemented for a checker with an empty
/// `impl` block, so individual checks can be overridden.
pub trait AssertingChecker: Checker {
    /// Records `contract` for the current thread and returns `true`.
    fn assert_contract(&self, contract: CallContract) -> bool;

    /// Tolerance used by almost-equals checks when none is given.
    fn float_tolerance(&self) -> FloatTolerance;
}

/// Checker shipping every standard check.
#[derive(Debug)]
pub struct StandardChecker {
    contractor: Slot<dyn CallContractor>,
    tolerance: RwLock<FloatTolerance>,
}

impl StandardChecker {
    /// Creates a checker recording contracts in `contractor`.
    pub fn new(contractor: Arc<dyn CallContractor>) -> Self {
        Self {
            contractor: Slot::new(contractor),
            tolerance: RwLock::new(FloatTolerance::default()),
        }
    }

    /// Creates a checker with a custom almost-equals tolerance.
    ///
    /// Rejects negative or non-finite epsilons with `tolerance.invalid`.
    pub fn with_tolerance(
        contractor: Arc<dyn CallContractor>,
        tolerance: FloatTolerance,
    ) -> Result<Self, FfError> {
        let checker = Self::new(contractor);
        checker.set_float_tolerance(tolerance)?;
        Ok(checker)
    }

    /// Replaces the default almost-equals tolerance.
    ///
    /// The current tolerance is kept when `tolerance` is invalid.
    pub fn set_float_tolerance(&self, tolerance: FloatTolerance) -> Result<(), FfError> {
        tolerance.validate()?;
        *self.tolerance.write() = tolerance;
        Ok(())
    }
}

impl Checker for StandardChecker {}

impl AssertingChecker for StandardChecker {
    fn assert_contract(&self, contract: CallContract) -> bool {
        debug!(
            caller = %contract.caller,
            rule = %contract.rule,
            "check asserted a violated precondition"
        );
        self.contractor.get().push_contract(contract);
        true
    }

    fn float_tolerance(&self) -> FloatTolerance {
        *self.tolerance.read()
    }
}

impl CallContractorReference for StandardChecker {
    fn call_contractor(&self) -> Arc<dyn CallContractor> {
        self.contractor.get()
    }

    fn set_call_contractor(&self, contractor: Arc<dyn CallContractor>) {
        self.contractor.set(contractor);
    }
}
