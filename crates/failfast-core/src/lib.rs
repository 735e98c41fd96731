#![deny(missing_docs)]
#![doc = "Core traits and data types for fail-fast argument checking: the checker and failer capabilities, the reference holders that bind them, and the call contracts that tie a check to the failure it raises."]

use std::sync::Arc;

pub mod contract;
pub mod errors;
pub mod failure;
pub mod rule;
pub mod slot;
pub mod template;
pub mod tolerance;

pub use contract::{CallContract, Customization};
pub use errors::{ErrorInfo, FfError};
pub use failure::{FailFastError, FailureClass};
pub use rule::Rule;
pub use slot::Slot;
pub use template::{ArgSelector, ArgSource, MessageTemplate, TemplateArgs};
pub use tolerance::FloatTolerance;

/// Capability marker for components that evaluate caller-supplied conditions.
///
/// Concrete checks are provided by extension traits; a check that finds its
/// precondition violated starts a [`CallContract`] and reports `true`, after
/// which the caller must end the contract through a [`Failer`].
pub trait Checker: Send + Sync {}

/// Capability marker for components that raise fail-fast failures.
///
/// Implementations must be safe to poll from any thread for failures that
/// were already raised.
pub trait Failer: Send + Sync {}

/// Component holding a rebindable [`Checker`].
pub trait CheckerReference {
    /// Checker type held by this reference.
    type Checker: Checker + ?Sized;

    /// Returns the bound checker.
    fn checker(&self) -> Arc<Self::Checker>;

    /// Rebinds the checker; the previous one stays alive for other holders.
    fn set_checker(&self, checker: Arc<Self::Checker>);
}

/// Component holding a rebindable [`Failer`].
pub trait FailerReference {
    /// Failer type held by this reference.
    type Failer: Failer + ?Sized;

    /// Returns the bound failer.
    fn failer(&self) -> Arc<Self::Failer>;

    /// Rebinds the failer; the previous one stays alive for other holders.
    fn set_failer(&self, failer: Arc<Self::Failer>);
}

/// Façade that is both a [`CheckerReference`] and a [`FailerReference`].
///
/// It adds no operations and is implemented for every type providing both.
pub trait FailFast: CheckerReference + FailerReference {}

impl<T> FailFast for T where T: CheckerReference + FailerReference + ?Sized {}

/// Per-thread store of pending call contracts.
pub trait CallContractor: Send + Sync {
    /// Records a contract for the current thread.
    ///
    /// Returns the contract it displaced if one was still pending. A
    /// displaced contract is never ended silently: the next
    /// [`CallContractor::pop_contract`] on the thread reports it with
    /// `contract.abandoned`.
    fn push_contract(&self, contract: CallContract) -> Option<CallContract>;

    /// Ends the current thread's contract for `caller` and `rule`.
    ///
    /// Errors when nothing is pending or the caller or rule differ; the
    /// pending contract is kept in the latter cases. When an earlier
    /// contract was displaced the thread's contracts are dropped and
    /// `contract.abandoned` is returned.
    fn pop_contract(&self, caller: &str, rule: Rule) -> Result<CallContract, FfError>;

    /// Applies per-contract overrides to the current thread's pending contract.
    fn customize_contract(
        &self,
        caller: &str,
        customization: Customization,
    ) -> Result<(), FfError>;

    /// Returns a copy of the current thread's pending contract.
    fn pending_contract(&self) -> Option<CallContract>;
}

/// Component holding a rebindable [`CallContractor`].
pub trait CallContractorReference {
    /// Returns the bound contractor.
    fn call_contractor(&self) -> Arc<dyn CallContractor>;

    /// Rebinds the contractor.
    fn set_call_contractor(&self, contractor: Arc<dyn CallContractor>);
}
