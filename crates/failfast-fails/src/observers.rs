use std::fmt::{self, Display};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use failfast_core::{CallContract, ErrorInfo, FailFastError, Failer, FfError};
use parking_lot::Mutex;

/// Receives every failure a failer raises, before it is returned.
pub trait FailerObserver: Send + Sync {
    /// Called with the ended contract and the failure built from it.
    fn on_failure(&self, contract: &CallContract, failure: &FailFastError);
}

impl<F> FailerObserver for F
where
    F: Fn(&CallContract, &FailFastError) + Send + Sync,
{
    fn on_failure(&self, contract: &CallContract, failure: &FailFastError) {
        self(contract, failure)
    }
}

/// Key returned when an observer is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObserverKey(u64);

impl ObserverKey {
    /// Returns the raw key.
    pub fn as_raw(&self) -> u64 {
        self.0
    }
}

impl Display for ObserverKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "observer#{}", self.0)
    }
}

/// Observer management of a failer.
pub trait FailerPublisher: Failer {
    /// Registers an observer; the same instance cannot be registered twice.
    fn register_observer(&self, observer: Arc<dyn FailerObserver>) -> Result<ObserverKey, FfError>;

    /// Unregisters an observer with the key its registration returned.
    fn unregister_observer(
        &self,
        observer: &Arc<dyn FailerObserver>,
        key: ObserverKey,
    ) -> Result<(), FfError>;

    /// Number of registered observers.
    fn observer_count(&self) -> usize;
}

/// Registered observers in registration order.
#[derive(Default)]
pub struct ObserverRegistry {
    entries: Mutex<Vec<(ObserverKey, Arc<dyn FailerObserver>)>>,
    next_key: AtomicU64,
}

fn same_observer(a: &Arc<dyn FailerObserver>, b: &Arc<dyn FailerObserver>) -> bool {
    Arc::as_ptr(a).cast::<()>() == Arc::as_ptr(b).cast::<()>()
}

impl ObserverRegistry {
    /// Adds `observer`, rejecting an instance that is already registered.
    pub fn register(&self, observer: Arc<dyn FailerObserver>) -> Result<ObserverKey, FfError> {
        let mut entries = self.entries.lock();
        if let Some((key, _)) = entries.iter().find(|(_, known)| same_observer(known, &observer)) {
            return Err(FfError::Registration(
                ErrorInfo::new("observer.already_registered", "observer is already registered")
                    .with_context("key", key),
            ));
        }
        let key = ObserverKey(self.next_key.fetch_add(1, Ordering::Relaxed));
        entries.push((key, observer));
        Ok(key)
    }

    /// Removes `observer` if `key` is the key it was registered under.
    pub fn unregister(
        &self,
        observer: &Arc<dyn FailerObserver>,
        key: ObserverKey,
    ) -> Result<(), FfError> {
        let mut entries = self.entries.lock();
        let Some(position) = entries
            .iter()
            .position(|(_, known)| same_observer(known, observer))
        else {
            return Err(FfError::Registration(ErrorInfo::new(
                "observer.not_registered",
                "observer is NOT registered",
            )));
        };
        if entries[position].0 != key {
            return Err(FfError::Registration(
                ErrorInfo::new(
                    "observer.key_mismatch",
                    format!("registration key {key} is NOT registered for this observer"),
                )
                .with_context("key", key),
            ));
        }
        entries.remove(position);
        Ok(())
    }

    /// Number of registered observers.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Returns true when no observer is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Calls every observer outside the registry lock.
    pub fn notify(&self, contract: &CallContract, failure: &FailFastError) {
        let observers: Vec<Arc<dyn FailerObserver>> = self
            .entries
            .lock()
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect();
        for observer in observers {
            observer.on_failure(contract, failure);
        }
    }
}

impl fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.len())
            .finish()
    }
}
