use std::sync::atomic::{AtomicBool, Ordering};

use failfast_core::{FailFastError, Failer};
use parking_lot::Mutex;

/// Poll API of a failer, safe to call from any thread.
pub trait FailurePoll: Failer {
    /// Returns true once a fail-fast failure has been latched.
    fn has_failed(&self) -> bool;

    /// Returns the first latched failure.
    fn failure(&self) -> Option<FailFastError>;

    /// Resets the latch and returns the failure it held.
    fn clear_failure(&self) -> Option<FailFastError>;
}

/// Keeps the first failure recorded since the last reset.
#[derive(Debug, Default)]
pub struct FailureLatch {
    raised: AtomicBool,
    first: Mutex<Option<FailFastError>>,
}

impl FailureLatch {
    /// Creates an open latch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `failure`; returns true if it is the first since the last reset.
    pub fn record(&self, failure: &FailFastError) -> bool {
        let mut first = self.first.lock();
        if first.is_some() {
            return false;
        }
        *first = Some(failure.clone());
        self.raised.store(true, Ordering::Release);
        true
    }

    /// Returns true once a failure has been recorded.
    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::Acquire)
    }

    /// Returns the first recorded failure.
    pub fn first(&self) -> Option<FailFastError> {
        if !self.is_raised() {
            return None;
        }
        self.first.lock().clone()
    }

    /// Reopens the latch.
    pub fn reset(&self) -> Option<FailFastError> {
        let mut first = self.first.lock();
        self.raised.store(false, Ordering::Release);
        first.take()
    }
}
