use std::collections::BTreeMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use failfast_core::{
    CallContractor, CallContractorReference, Customization, ErrorInfo, FailFastError, Failer,
    FfError, MessageTemplate, Rule, Slot, TemplateArgs,
};
use parking_lot::RwLock;
use tracing::{error, warn};

use crate::customizer::FailerCustomizer;
use crate::latch::{FailureLatch, FailurePoll};
use crate::observers::{FailerObserver, FailerPublisher, ObserverKey, ObserverRegistry};

/// Failer able to end the call contract of an asserted check.
pub trait Failing: Failer {
    /// Ends the current thread's contract for `caller` and `rule` and builds
    /// the failure to return.
    ///
    /// `names` label the checked values in check argument order; `message`
    /// is appended to the rendered text. When the contract cannot be ended
    /// the returned error is the contract error instead.
    fn fail(&self, caller: &str, rule: Rule, names: &[&str], message: Option<&str>) -> FfError;
}

/// Failer shipping every standard fail operation.
pub struct StandardFailer {
    contractor: Slot<dyn CallContractor>,
    customizations: RwLock<BTreeMap<Rule, Customization>>,
    observers: ObserverRegistry,
    latch: FailureLatch,
    raised: AtomicU64,
}

impl StandardFailer {
    /// Creates a failer ending contracts recorded in `contractor`.
    pub fn new(contractor: Arc<dyn CallContractor>) -> Self {
        Self {
            contractor: Slot::new(contractor),
            customizations: RwLock::new(BTreeMap::new()),
            observers: ObserverRegistry::default(),
            latch: FailureLatch::new(),
            raised: AtomicU64::new(0),
        }
    }

    /// Creates a failer with pre-registered per-rule customizations.
    pub fn with_customizations(
        contractor: Arc<dyn CallContractor>,
        customizations: &BTreeMap<Rule, Customization>,
    ) -> Result<Self, FfError> {
        let failer = Self::new(contractor);
        for (rule, customization) in customizations {
            failer.register_customization(*rule, customization.clone())?;
        }
        Ok(failer)
    }

    /// Number of failures raised, including custom-class ones.
    pub fn failure_count(&self) -> u64 {
        self.raised.load(Ordering::Relaxed)
    }

    fn render(&self, rule: Rule, customization: &Customization, args: &TemplateArgs<'_>) -> String {
        let custom = customization
            .template()
            .and_then(|template| template.map(|t| t.render(args)).transpose());
        match custom {
            Ok(Some(text)) => return text,
            Ok(None) => {}
            Err(err) => warn!(
                rule = %rule,
                error = %err,
                "custom failure message unusable, using the default"
            ),
        }
        match MessageTemplate::for_rule(rule).and_then(|template| template.render(args)) {
            Ok(text) => text,
            Err(err) => {
                warn!(rule = %rule, error = %err, "default failure message unusable");
                format!("{}: check '{rule}' failed.", args.failer.first().map_or("", String::as_str))
            }
        }
    }
}

impl fmt::Debug for StandardFailer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StandardFailer")
            .field("contractor", &self.contractor)
            .field("customizations", &self.customizations.read().len())
            .field("observers", &self.observers)
            .field("latch", &self.latch)
            .field("raised", &self.raised)
            .finish()
    }
}

impl Failer for StandardFailer {}

impl Failing for StandardFailer {
    fn fail(&self, caller: &str, rule: Rule, names: &[&str], message: Option<&str>) -> FfError {
        let contract = match self.contractor.get().pop_contract(caller, rule) {
            Ok(contract) => contract,
            Err(err) => {
                warn!(caller, rule = %rule, error = %err, "fail call without a matching contract");
                return err;
            }
        };

        let mut fail_args = Vec::with_capacity(names.len() + 2);
        fail_args.push(caller.to_string());
        fail_args.extend(names.iter().map(|name| name.to_string()));
        if let Some(message) = message {
            fail_args.push(message.to_string());
        }

        let registered = self.customization(rule).unwrap_or_default();
        let customization = contract.customization.or(&registered);
        let args = TemplateArgs {
            failer: &fail_args,
            checker: &contract.check_args,
            extra: &contract.check_extra_args,
        };
        let mut text = self.render(rule, &customization, &args);
        if let Some(message) = message {
            text.push(' ');
            text.push_str(message);
        }
        if let Some(postfix) = &customization.message_postfix {
            text.push_str(postfix);
        }

        let failure = FailFastError {
            rule,
            caller: caller.to_string(),
            message: text,
            class: customization.class.unwrap_or_default(),
            check_args: contract.check_args.clone(),
            check_extra_args: contract.check_extra_args.clone(),
            fail_args,
        };
        self.raised.fetch_add(1, Ordering::Relaxed);
        self.observers.notify(&contract, &failure);
        let first = if failure.class.is_fail_fast() {
            self.latch.record(&failure)
        } else {
            false
        };
        error!(
            caller,
            rule = %rule,
            class = ?failure.class,
            first,
            "{}",
            failure.message
        );
        FfError::from(failure)
    }
}

impl FailurePoll for StandardFailer {
    fn has_failed(&self) -> bool {
        self.latch.is_raised()
    }

    fn failure(&self) -> Option<FailFastError> {
        self.latch.first()
    }

    fn clear_failure(&self) -> Option<FailFastError> {
        self.latch.reset()
    }
}

impl FailerPublisher for StandardFailer {
    fn register_observer(&self, observer: Arc<dyn FailerObserver>) -> Result<ObserverKey, FfError> {
        self.observers.register(observer)
    }

    fn unregister_observer(
        &self,
        observer: &Arc<dyn FailerObserver>,
        key: ObserverKey,
    ) -> Result<(), FfError> {
        self.observers.unregister(observer, key)
    }

    fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl FailerCustomizer for StandardFailer {
    fn register_customization(
        &self,
        rule: Rule,
        customization: Customization,
    ) -> Result<Option<Customization>, FfError> {
        customization.template()?;
        Ok(self.customizations.write().insert(rule, customization))
    }

    fn unregister_customization(&self, rule: Rule) -> Result<Customization, FfError> {
        self.customizations.write().remove(&rule).ok_or_else(|| {
            FfError::Registration(
                ErrorInfo::new(
                    "customization.not_registered",
                    format!("no customization is registered for rule '{rule}'"),
                )
                .with_context("rule", rule),
            )
        })
    }

    fn customization(&self, rule: Rule) -> Option<Customization> {
        self.customizations.read().get(&rule).cloned()
    }
}

impl CallContractorReference for StandardFailer {
    fn call_contractor(&self) -> Arc<dyn CallContractor> {
        self.contractor.get()
    }

    fn set_call_contractor(&self, contractor: Arc<dyn CallContractor>) {
        self.contractor.set(contractor);
    }
}
