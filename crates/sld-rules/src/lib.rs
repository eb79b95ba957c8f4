//! sld-rules: topology rule engine and feeder criticality scorer.
//!
//! Both entry points are pure functions of an immutable [`sld_graph::Graph`]:
//! - [`evaluate`] runs the fixed rule table and returns every finding
//! - [`score_feeders`] rates each feeder HIGH / MEDIUM / LOW
//!
//! Any component without a kind aborts either call with
//! [`sld_core::SldError::MalformedComponent`]; no partial result is returned.

pub mod criticality;
pub mod finding;
pub mod inventory;
pub mod rules;

pub use criticality::{FeederScore, bucket, feeder_scores, score_feeders};
pub use finding::{Finding, RuleId};
pub use inventory::Inventory;
pub use rules::{Match, Rule, evaluate, evaluate_with, rules};
