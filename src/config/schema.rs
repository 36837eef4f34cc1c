//! Network configuration document schema.
//!
//! The document is logically JSON with camelCase keys. Only the fields the
//! validation rules read are modeled here; everything else in the document is
//! ignored during deserialization.

use serde::Deserialize;

/// Root of a network configuration document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfig {
    /// Declared fabnet tool version.
    pub fabnet_version: String,

    /// Network-wide settings.
    pub network_settings: NetworkSettings,

    /// The root organization hosting the orderer.
    pub root_org: RootOrg,
}

/// Network-wide settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkSettings {
    /// Target Fabric platform version.
    pub fabric_version: String,
}

/// Root organization descriptor.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RootOrg {
    /// Orderer deployment for this organization.
    pub orderer: OrdererConfig,
}

/// Orderer deployment descriptor.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdererConfig {
    /// Consensus mode the orderer runs under.
    pub consensus: ConsensusType,

    /// Number of orderer instances to create.
    pub instances: u32,
}

/// Orderer consensus mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsensusType {
    /// Single-node consensus; only one instance is ever created.
    Solo,
    /// Kafka-backed consensus.
    Kafka,
    /// Raft consensus.
    Raft,
}

impl std::fmt::Display for ConsensusType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Solo => write!(f, "solo"),
            Self::Kafka => write!(f, "kafka"),
            Self::Raft => write!(f, "raft"),
        }
    }
}
