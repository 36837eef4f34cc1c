//! Network configuration loading and schema.
//!
//! - Schema definitions in [`schema`]
//! - File loading and supported-version allowlists in [`loader`]
//!
//! The document is supplied by the user as a JSON file; the validation engine
//! only ever sees the parsed, in-memory [`NetworkConfig`].

pub mod loader;
pub mod schema;

pub use loader::{
    load_config_file, parse_config, SUPPORTED_FABNET_VERSIONS, SUPPORTED_FABRIC_VERSIONS,
};
pub use schema::{ConsensusType, NetworkConfig, NetworkSettings, OrdererConfig, RootOrg};
