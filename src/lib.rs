//! fabnet - Fabric network configuration validator.
//!
//! fabnet checks a network configuration document against a fixed set of
//! semantic rules before any downstream generation consumes it. Findings are
//! classified Critical / Error / Warning: a critical finding aborts the run
//! immediately, everything else is collected and rendered as a grouped
//! summary report.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration document schema and loading
//! - [`error`] - Error types and result aliases
//! - [`validation`] - Rule evaluation, severity dispatch, and reporting
//!
//! # Example
//!
//! ```
//! use fabnet::config::parse_config;
//! use fabnet::validation::{RuleSet, ValidationOutcome, ValidationSession};
//! use std::path::Path;
//!
//! let doc = r#"{
//!     "fabnetVersion": "0.1.0",
//!     "networkSettings": { "fabricVersion": "1.4.4" },
//!     "rootOrg": { "orderer": { "consensus": "raft", "instances": 3 } }
//! }"#;
//! let config = parse_config(doc, Path::new("network.json")).unwrap();
//!
//! let rules = RuleSet::with_defaults();
//! let outcome = ValidationSession::new().run(&rules, &config);
//! assert!(matches!(outcome, ValidationOutcome::Completed(_)));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod validation;

pub use error::{FabnetError, Result};
