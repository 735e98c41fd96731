//! Process-global fail-fast hub.
//!
//! Nothing is installed by default: [`fail_fast`] reports a configuration
//! error until [`install`] is called, [`fail_fast_or_none`] returns `None`.

use std::sync::Arc;

use failfast_checks::StandardChecker;
use failfast_core::{CheckerReference, ErrorInfo, FailerReference, FfError};
use failfast_fails::StandardFailer;
use parking_lot::RwLock;
use tracing::info;

use crate::hub::FailFastHub;

static GLOBAL: RwLock<Option<Arc<FailFastHub>>> = parking_lot::const_rwlock(None);

/// Installs (or with `None`, removes) the global hub and returns the previous one.
pub fn install(hub: Option<Arc<FailFastHub>>) -> Option<Arc<FailFastHub>> {
    info!(installed = hub.is_some(), "global fail-fast hub changed");
    std::mem::replace(&mut *GLOBAL.write(), hub)
}

/// Returns the global hub.
pub fn fail_fast() -> Result<Arc<FailFastHub>, FfError> {
    fail_fast_or_none().ok_or_else(|| {
        FfError::Config(
            ErrorInfo::new("failfast.global_unset", "no global fail-fast hub is installed")
                .with_hint("call failfast::global::install(Some(hub)) during start-up"),
        )
    })
}

/// Returns the global hub if one is installed.
pub fn fail_fast_or_none() -> Option<Arc<FailFastHub>> {
    GLOBAL.read().clone()
}

/// Checker of the global hub.
pub fn checker() -> Result<Arc<StandardChecker>, FfError> {
    Ok(fail_fast()?.checker())
}

/// Failer of the global hub.
pub fn failer() -> Result<Arc<StandardFailer>, FfError> {
    Ok(fail_fast()?.failer())
}
