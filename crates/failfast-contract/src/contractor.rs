use std::cell::RefCell;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use failfast_core::{CallContract, CallContractor, Customization, ErrorInfo, FfError, Rule};
use tracing::{trace, warn};

static NEXT_CONTRACTOR_ID: AtomicU64 = AtomicU64::new(0);

thread_local! {
    /// Pending contracts of the current thread, keyed by contractor id.
    /// Dropped with the thread, which releases the live counts it holds.
    static PENDING: RefCell<HashMap<u64, Pending>> = RefCell::new(HashMap::new());
}

struct Pending {
    contract: CallContract,
    /// First contract displaced by a later push before its fail call.
    abandoned: Option<CallContract>,
    _live: LiveGuard,
}

/// Counts one thread with a pending contract for as long as it lives.
struct LiveGuard(Arc<AtomicUsize>);

impl LiveGuard {
    fn new(live: &Arc<AtomicUsize>) -> Self {
        live.fetch_add(1, Ordering::Relaxed);
        Self(Arc::clone(live))
    }
}

impl Drop for LiveGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::Relaxed);
    }
}

/// Counters describing contract traffic through a [`ThreadContractor`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContractorStats {
    /// Contracts pushed by asserting checks.
    pub pushed: u64,
    /// Contracts ended by fail calls.
    pub popped: u64,
    /// Contracts displaced by a newer push before being ended.
    pub abandoned: u64,
}

/// [`CallContractor`] keeping each thread's contract in thread-local storage.
///
/// A thread only ever sees its own contract, so checks running in parallel
/// on different threads never interfere. A thread that exits with a contract
/// still pending takes it along.
///
/// A check asserted while an earlier contract is still pending displaces
/// it; the next pop on that thread then reports `contract.abandoned` instead
/// of ending the newer contract.
#[derive(Debug)]
pub struct ThreadContractor {
    id: u64,
    live: Arc<AtomicUsize>,
    pushed: AtomicU64,
    popped: AtomicU64,
    abandoned: AtomicU64,
}

impl Default for ThreadContractor {
    fn default() -> Self {
        Self {
            id: NEXT_CONTRACTOR_ID.fetch_add(1, Ordering::Relaxed),
            live: Arc::new(AtomicUsize::new(0)),
            pushed: AtomicU64::new(0),
            popped: AtomicU64::new(0),
            abandoned: AtomicU64::new(0),
        }
    }
}

impl ThreadContractor {
    /// Creates an empty contractor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the traffic counters.
    pub fn stats(&self) -> ContractorStats {
        ContractorStats {
            pushed: self.pushed.load(Ordering::Relaxed),
            popped: self.popped.load(Ordering::Relaxed),
            abandoned: self.abandoned.load(Ordering::Relaxed),
        }
    }

    /// Number of live threads with a pending contract.
    pub fn pending_count(&self) -> usize {
        self.live.load(Ordering::Relaxed)
    }

    /// Drops the current thread's pending contract, if any.
    pub fn discard_pending(&self) -> Option<CallContract> {
        self.with_pending(|pending| pending.remove(&self.id))
            .map(|slot| slot.contract)
    }

    fn with_pending<R>(&self, f: impl FnOnce(&mut HashMap<u64, Pending>) -> R) -> R {
        PENDING.with(|pending| f(&mut pending.borrow_mut()))
    }
}

impl Drop for ThreadContractor {
    fn drop(&mut self) {
        let id = self.id;
        let _ = PENDING.try_with(|pending| pending.borrow_mut().remove(&id));
    }
}

fn missing(caller: &str, rule: Rule) -> FfError {
    FfError::Contract(
        ErrorInfo::new(
            "contract.missing",
            format!("no contract is pending for caller '{caller}'"),
        )
        .with_context("caller", caller)
        .with_context("rule", rule)
        .with_hint("a fail call must follow a check that returned true"),
    )
}

fn abandoned(stale: &CallContract, caller: &str, rule: Rule) -> FfError {
    FfError::Contract(
        ErrorInfo::new(
            "contract.abandoned",
            format!(
                "contract of caller '{}' for rule '{}' was displaced by a later check before its fail call",
                stale.caller, stale.rule
            ),
        )
        .with_context("abandoned_caller", &stale.caller)
        .with_context("abandoned_rule", stale.rule)
        .with_context("caller", caller)
        .with_context("rule", rule)
        .with_hint("end every check that returned true with its fail call before checking again"),
    )
}

impl CallContractor for ThreadContractor {
    fn push_contract(&self, contract: CallContract) -> Option<CallContract> {
        self.pushed.fetch_add(1, Ordering::Relaxed);
        trace!(caller = %contract.caller, rule = %contract.rule, "contract pushed");
        let displaced = self.with_pending(|pending| match pending.entry(self.id) {
            Entry::Occupied(mut slot) => {
                let slot = slot.get_mut();
                let stale = std::mem::replace(&mut slot.contract, contract);
                slot.abandoned.get_or_insert_with(|| stale.clone());
                Some(stale)
            }
            Entry::Vacant(slot) => {
                slot.insert(Pending {
                    contract,
                    abandoned: None,
                    _live: LiveGuard::new(&self.live),
                });
                None
            }
        });
        if let Some(stale) = &displaced {
            self.abandoned.fetch_add(1, Ordering::Relaxed);
            warn!(
                caller = %stale.caller,
                rule = %stale.rule,
                "pending contract displaced before its fail call"
            );
        }
        displaced
    }

    fn pop_contract(&self, caller: &str, rule: Rule) -> Result<CallContract, FfError> {
        let popped = self.with_pending(|pending| {
            let Entry::Occupied(entry) = pending.entry(self.id) else {
                return Err(missing(caller, rule));
            };
            let displaced = entry
                .get()
                .abandoned
                .as_ref()
                .map(|stale| abandoned(stale, caller, rule));
            if let Some(err) = displaced {
                entry.remove();
                return Err(err);
            }
            let contract = &entry.get().contract;
            if contract.caller != caller {
                return Err(FfError::Contract(
                    ErrorInfo::new(
                        "contract.caller_mismatch",
                        format!(
                            "contract was started by caller '{}' but ended by '{caller}'",
                            contract.caller
                        ),
                    )
                    .with_context("expected", &contract.caller)
                    .with_context("actual", caller),
                ));
            }
            if contract.rule != rule {
                return Err(FfError::Contract(
                    ErrorInfo::new(
                        "contract.rule_mismatch",
                        format!(
                            "contract asserted rule '{}' but was ended with '{rule}'",
                            contract.rule
                        ),
                    )
                    .with_context("caller", caller)
                    .with_context("expected", contract.rule)
                    .with_context("actual", rule),
                ));
            }
            Ok(entry.remove().contract)
        });
        if popped.is_ok() {
            self.popped.fetch_add(1, Ordering::Relaxed);
            trace!(caller, rule = %rule, "contract popped");
        }
        popped
    }

    fn customize_contract(
        &self,
        caller: &str,
        customization: Customization,
    ) -> Result<(), FfError> {
        customization.template()?;
        self.with_pending(|pending| match pending.get_mut(&self.id) {
            Some(slot) if slot.contract.caller == caller => {
                slot.contract.customization = customization.or(&slot.contract.customization);
                Ok(())
            }
            Some(slot) => Err(FfError::Contract(
                ErrorInfo::new(
                    "contract.caller_mismatch",
                    "cannot customize a contract started by another caller",
                )
                .with_context("expected", &slot.contract.caller)
                .with_context("actual", caller),
            )),
            None => Err(FfError::Contract(
                ErrorInfo::new(
                    "contract.missing",
                    format!("no contract is pending for caller '{caller}'"),
                )
                .with_context("caller", caller),
            )),
        })
    }

    fn pending_contract(&self) -> Option<CallContract> {
        self.with_pending(|pending| pending.get(&self.id).map(|slot| slot.contract.clone()))
    }
}
