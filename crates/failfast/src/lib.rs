#![deny(missing_docs)]
#![doc = "Fail-fast argument checking. A [`FailFastHub`] binds a checker and a failer that share a call contractor; checks return `true` when a precondition is violated and the matching fail call turns that into an [`FfError`] for the caller to return."]

pub mod config;
pub mod global;
mod hub;

pub use config::FailFastConfig;
pub use hub::FailFastHub;

pub use failfast_checks::{
    summarize, AssertingChecker, FloatChecks, OrderChecks, OutcomeChecks, SequenceChecks,
    StandardChecker, TextChecks, ValueChecks,
};
pub use failfast_contract::{ContractorStats, ThreadContractor};
pub use failfast_core::{
    CallContract, CallContractor, CallContractorReference, Checker, CheckerReference,
    Customization, ErrorInfo, FailFast, FailFastError, Failer, FailerReference, FailureClass,
    FfError, FloatTolerance, MessageTemplate, Rule, Slot,
};
pub use failfast_fails::{
    FailerCustomizer, FailerObserver, FailerPublisher, Failing, FailureLatch, FailurePoll,
    FloatFails, ObserverKey, OrderFails, OutcomeFails, SequenceFails, StandardFailer, TextFails,
    ValueFails,
};
pub use regex::Regex;

/// Glob import of every capability trait.
pub mod prelude {
    pub use failfast_checks::{
        AssertingChecker, FloatChecks, OrderChecks, OutcomeChecks, SequenceChecks, TextChecks,
        ValueChecks,
    };
    pub use failfast_core::{
        CallContractor, CallContractorReference, CheckerReference, FailFast, FailerReference,
    };
    pub use failfast_fails::{
        FailerCustomizer, FailerPublisher, Failing, FailurePoll, FloatFails, OrderFails,
        OutcomeFails, SequenceFails, TextFails, ValueFails,
    };
}
