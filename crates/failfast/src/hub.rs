use std::fmt;
use std::path::Path;
use std::sync::Arc;

use failfast_checks::StandardChecker;
use failfast_contract::ThreadContractor;
use failfast_core::{
    CallContractor, CallContractorReference, Checker, CheckerReference, Customization, Failer,
    FailerReference, FfError, Slot,
};
use failfast_fails::StandardFailer;
use tracing::info;

use crate::config::FailFastConfig;

/// Façade binding a checker, a failer and the contractor they share.
///
/// Every slot is rebindable from any thread; a read observes exactly one of
/// the instances written to it. The default hub uses the standard checker
/// and failer wired to a fresh [`ThreadContractor`].
pub struct FailFastHub<C: ?Sized = StandardChecker, F: ?Sized = StandardFailer> {
    checker: Slot<C>,
    failer: Slot<F>,
    contractor: Slot<dyn CallContractor>,
}

impl<C, F> FailFastHub<C, F>
where
    C: Checker + ?Sized,
    F: Failer + ?Sized,
{
    /// Creates a hub from its parts.
    ///
    /// `contractor` must be the one `checker` and `failer` record contracts
    /// in, so that [`FailFastHub::customize_contract`] reaches them.
    pub fn new(checker: Arc<C>, failer: Arc<F>, contractor: Arc<dyn CallContractor>) -> Self {
        Self {
            checker: Slot::new(checker),
            failer: Slot::new(failer),
            contractor: Slot::new(contractor),
        }
    }

    /// Customizes the current thread's pending contract for `caller`.
    pub fn customize_contract(
        &self,
        caller: &str,
        customization: Customization,
    ) -> Result<(), FfError> {
        self.contractor.get().customize_contract(caller, customization)
    }
}

impl FailFastHub {
    /// Builds a hub from a validated configuration.
    pub fn from_config(config: &FailFastConfig) -> Result<Self, FfError> {
        config.validate()?;
        let contractor: Arc<dyn CallContractor> = Arc::new(ThreadContractor::new());
        let checker = StandardChecker::with_tolerance(Arc::clone(&contractor), config.tolerance)?;
        let failer =
            StandardFailer::with_customizations(Arc::clone(&contractor), &config.customizations)?;
        info!(
            customizations = config.customizations.len(),
            absolute_epsilon = config.tolerance.absolute,
            relative_epsilon = config.tolerance.relative,
            "fail-fast hub configured"
        );
        Ok(Self::new(Arc::new(checker), Arc::new(failer), contractor))
    }

    /// Loads a YAML configuration file and builds a hub from it.
    pub fn from_yaml_path(path: impl AsRef<Path>) -> Result<Self, FfError> {
        Self::from_config(&FailFastConfig::load(path)?)
    }

    /// Rebinds the contractor of the hub, its checker and its failer at once.
    pub fn share_contractor(&self, contractor: Arc<dyn CallContractor>) {
        self.checker.get().set_call_contractor(Arc::clone(&contractor));
        self.failer.get().set_call_contractor(Arc::clone(&contractor));
        self.contractor.set(contractor);
    }
}

impl Default for FailFastHub {
    fn default() -> Self {
        let contractor: Arc<dyn CallContractor> = Arc::new(ThreadContractor::new());
        Self::new(
            Arc::new(StandardChecker::new(Arc::clone(&contractor))),
            Arc::new(StandardFailer::new(Arc::clone(&contractor))),
            contractor,
        )
    }
}

impl<C, F> CheckerReference for FailFastHub<C, F>
where
    C: Checker + ?Sized,
    F: ?Sized,
{
    type Checker = C;

    fn checker(&self) -> Arc<C> {
        self.checker.get()
    }

    fn set_checker(&self, checker: Arc<C>) {
        self.checker.set(checker);
    }
}

impl<C, F> FailerReference for FailFastHub<C, F>
where
    C: ?Sized,
    F: Failer + ?Sized,
{
    type Failer = F;

    fn failer(&self) -> Arc<F> {
        self.failer.get()
    }

    fn set_failer(&self, failer: Arc<F>) {
        self.failer.set(failer);
    }
}

impl<C: ?Sized, F: ?Sized> CallContractorReference for FailFastHub<C, F> {
    fn call_contractor(&self) -> Arc<dyn CallContractor> {
        self.contractor.get()
    }

    fn set_call_contractor(&self, contractor: Arc<dyn CallContractor>) {
        self.contractor.set(contractor);
    }
}

impl<C: ?Sized, F: ?Sized> fmt::Debug for FailFastHub<C, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FailFastHub")
            .field("checker", &self.checker)
            .field("failer", &self.failer)
            .field("contractor", &self.contractor)
            .finish()
    }
}
