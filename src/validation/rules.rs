//! Validation rules and the ordered rule set.
//!
//! Each rule is a pure, stateless check over the parsed [`NetworkConfig`]
//! producing at most one [`Finding`]. Rules never touch the filesystem, never
//! mutate the document, and never decide control flow; severity handling
//! belongs to the validation session.
//!
//! Rule order in a [`RuleSet`] is significant: it fixes both evaluation order
//! and, for non-critical findings, the insertion order the report preserves.
//! The tool-version check runs first so a document built for an unknown
//! fabnet version aborts before any weaker check can fire.

use crate::config::{
    ConsensusType, NetworkConfig, SUPPORTED_FABNET_VERSIONS, SUPPORTED_FABRIC_VERSIONS,
};

use super::finding::{Category, Finding, Severity};

/// A semantic check over the network configuration document.
pub trait ValidationRule: Send + Sync {
    /// Short identifier used in debug logging.
    fn id(&self) -> &'static str;

    /// Check the configuration and return a finding if the rule is violated.
    fn check(&self, config: &NetworkConfig) -> Option<Finding>;
}

/// The declared fabnet version must be on the supported-version allowlist.
///
/// Violation is critical: a document written for an unknown tool version
/// cannot be processed at all.
pub struct FabnetVersionRule {
    supported: Vec<String>,
}

impl FabnetVersionRule {
    pub fn new(supported: Vec<String>) -> Self {
        Self { supported }
    }
}

impl ValidationRule for FabnetVersionRule {
    fn id(&self) -> &'static str {
        "fabnet-version-supported"
    }

    fn check(&self, config: &NetworkConfig) -> Option<Finding> {
        let version = &config.fabnet_version;
        if self.supported.iter().any(|v| v == version) {
            return None;
        }
        Some(Finding::new(
            Severity::Critical,
            Category::Critical,
            format!(
                "Fabnet version '{}' is not supported. Supported versions are: {}",
                version,
                self.supported.join(", ")
            ),
        ))
    }
}

/// The target Fabric version must be on its own allowlist.
pub struct FabricVersionRule {
    supported: Vec<String>,
}

impl FabricVersionRule {
    pub fn new(supported: Vec<String>) -> Self {
        Self { supported }
    }
}

impl ValidationRule for FabricVersionRule {
    fn id(&self) -> &'static str {
        "fabric-version-supported"
    }

    fn check(&self, config: &NetworkConfig) -> Option<Finding> {
        let version = &config.network_settings.fabric_version;
        if self.supported.iter().any(|v| v == version) {
            return None;
        }
        Some(Finding::new(
            Severity::Error,
            Category::General,
            format!(
                "Fabric version '{}' is not supported. Supported versions are: {}",
                version,
                self.supported.join(", ")
            ),
        ))
    }
}

/// Under solo consensus only one orderer instance is ever created, so a
/// higher declared count is silently ignored downstream.
pub struct SoloOrdererInstancesRule;

impl ValidationRule for SoloOrdererInstancesRule {
    fn id(&self) -> &'static str {
        "solo-orderer-single-instance"
    }

    fn check(&self, config: &NetworkConfig) -> Option<Finding> {
        let orderer = &config.root_org.orderer;
        if orderer.consensus == ConsensusType::Solo && orderer.instances > 1 {
            return Some(Finding::new(
                Severity::Warning,
                Category::Orderer,
                format!(
                    "Orderer consensus type is set to 'solo', but number of instances is {}. \
                     Only 1 instance will be created.",
                    orderer.instances
                ),
            ));
        }
        None
    }
}

/// Ordered set of validation rules.
///
/// Constructed once (allowlists injected, not hard-coded in rule bodies) and
/// reused across runs; never mutated at runtime.
pub struct RuleSet {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl RuleSet {
    /// Create a rule set with the given version allowlists.
    pub fn new(supported_fabnet: Vec<String>, supported_fabric: Vec<String>) -> Self {
        Self::from_rules(vec![
            Box::new(FabnetVersionRule::new(supported_fabnet)),
            Box::new(FabricVersionRule::new(supported_fabric)),
            Box::new(SoloOrdererInstancesRule),
        ])
    }

    /// Assemble a rule set from an explicit ordered list of rules.
    pub(crate) fn from_rules(rules: Vec<Box<dyn ValidationRule>>) -> Self {
        Self { rules }
    }

    /// Create a rule set using the crate's built-in allowlists.
    pub fn with_defaults() -> Self {
        Self::new(
            SUPPORTED_FABNET_VERSIONS.iter().map(|v| (*v).to_string()).collect(),
            SUPPORTED_FABRIC_VERSIONS.iter().map(|v| (*v).to_string()).collect(),
        )
    }

    /// Iterate over rules in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn ValidationRule> {
        self.rules.iter().map(|r| r.as_ref())
    }

    /// Number of rules in the set.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the set contains no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::with_defaults()
    }
}
