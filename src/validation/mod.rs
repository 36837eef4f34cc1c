//! Rule evaluation and diagnostic aggregation.
//!
//! The validation engine consists of:
//!
//! - **Findings** - Diagnostic records with severity and category ([`Finding`])
//! - **Rules** - Ordered pure checks over the config document ([`ValidationRule`], [`RuleSet`])
//! - **Collectors** - Per-severity ordered buffers ([`Collector`])
//! - **Sessions** - One run: sweep, severity dispatch, critical short-circuit
//!   ([`ValidationSession`], [`ValidationOutcome`])
//! - **Reports** - Grouped plain-text summary rendering ([`report`])
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
//!     "rootOrg": { "orderer": { "consensus": "solo", "instances": 1 } }
//! }"#;
//! let config = parse_config(doc, Path::new("network.json")).unwrap();
//!
//! let rules = RuleSet::with_defaults();
//! match ValidationSession::new().run(&rules, &config) {
//!     ValidationOutcome::Completed(report) => assert!(report.is_clean()),
//!     ValidationOutcome::Aborted(finding) => panic!("{}", finding.message),
//! }
//! ```

pub mod collector;
pub mod finding;
pub mod report;
pub mod rules;
pub mod session;

pub use collector::Collector;
pub use finding::{Category, Finding, Severity};
pub use report::{render_critical, render_summary};
pub use rules::{FabnetVersionRule, FabricVersionRule, RuleSet, SoloOrdererInstancesRule, ValidationRule};
pub use session::{ValidationOutcome, ValidationReport, ValidationSession};
