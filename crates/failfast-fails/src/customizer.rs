use failfast_core::{Customization, Failer, FfError, Rule};

/// Per-rule message and class overrides of a failer.
///
/// Per-contract customizations set through the contractor take precedence
/// over the ones registered here.
pub trait FailerCustomizer: Failer {
    /// Registers overrides for `rule`, returning the ones they replace.
    ///
    /// The message template is validated before it is stored.
    fn register_customization(
        &self,
        rule: Rule,
        customization: Customization,
    ) -> Result<Option<Customization>, FfError>;

    /// Removes the overrides for `rule`.
    fn unregister_customization(&self, rule: Rule) -> Result<Customization, FfError>;

    /// Returns the overrides for `rule`.
    fn customization(&self, rule: Rule) -> Option<Customization>;
}
