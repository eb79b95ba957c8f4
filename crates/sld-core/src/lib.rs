//! sld-core: shared vocabulary for the single-line diagram risk engine.
//!
//! Contains:
//! - ids (compact node indices for adjacency tables)
//! - kind (closed set of power-system component kinds)
//! - level (HIGH/MEDIUM/LOW used for severity and criticality)
//! - error (shared error taxonomy)

pub mod error;
pub mod ids;
pub mod kind;
pub mod level;

// Re-exports: nice ergonomics for downstream crates
pub use error::{SldError, SldResult};
pub use ids::*;
pub use kind::ComponentKind;
pub use level::{Criticality, Level, Severity};
