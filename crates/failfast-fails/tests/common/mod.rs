#![allow(dead_code)]

use std::sync::Arc;

use failfast_checks::StandardChecker;
use failfast_contract::ThreadContractor;
use failfast_fails::StandardFailer;

pub struct Pair {
    pub contractor: Arc<ThreadContractor>,
    pub checker: StandardChecker,
    pub failer: StandardFailer,
}

pub fn pair() -> Pair {
    let contractor = Arc::new(ThreadContractor::new());
    Pair {
        checker: StandardChecker::new(contractor.clone()),
        failer: StandardFailer::new(contractor.clone()),
        contractor,
    }
}
