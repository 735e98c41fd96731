#![allow(dead_code)]

use std::sync::Arc;

use failfast_checks::StandardChecker;
use failfast_contract::ThreadContractor;
use failfast_core::{CallContract, CallContractor, Rule};

pub struct Harness {
    pub contractor: Arc<ThreadContractor>,
    pub checker: StandardChecker,
}

impl Harness {
    pub fn new() -> Self {
        let contractor = Arc::new(ThreadContractor::new());
        let checker = StandardChecker::new(contractor.clone());
        Self {
            contractor,
            checker,
        }
    }

    /// Ends the pending contract, asserting it was recorded for `rule`.
    pub fn take(&self, caller: &str, rule: Rule) -> CallContract {
        self.contractor
            .pop_contract(caller, rule)
            .unwrap_or_else(|err| panic!("expected a pending {rule} contract: {err}"))
    }

    pub fn assert_nothing_pending(&self) {
        assert!(
            self.contractor.pending_contract().is_none(),
            "unexpected contract: {:?}",
            self.contractor.pending_contract()
        );
    }
}
