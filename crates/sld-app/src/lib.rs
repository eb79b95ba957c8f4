//! Shared application service layer for single-line diagram assessment.
//!
//! This crate composes the core crates for front ends: it loads diagrams,
//! runs the rule engine and criticality scorer, merges their output, and
//! answers explainability and impact queries over the result.

pub mod assess_service;
pub mod error;
pub mod query;
pub mod report;
pub mod summary;

// Re-export key types for convenience
pub use assess_service::{Assessment, Evaluation, assess, assess_batch, assess_diagram};
pub use error::{AppError, AppResult};
pub use query::{ComponentExplanation, affected_feeders, explain_component, geographic_impact};
pub use report::{Connectivity, Report, ReportFormat};
pub use summary::SeveritySummary;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use sld_project::AreaDef;

/// Load a diagram file and evaluate it.
pub fn assess_file(path: &Path) -> AppResult<Evaluation> {
    tracing::debug!(path = %path.display(), "loading diagram");
    let diagram = sld_project::load_diagram(path)?;
    assess_diagram(&diagram)
}

/// Load and evaluate many diagram files in parallel.
///
/// Results are in input order. A file that cannot be read or parsed fails
/// only its own slot.
pub fn assess_files(paths: &[PathBuf]) -> Vec<AppResult<Evaluation>> {
    tracing::info!(count = paths.len(), "assessing batch");
    paths.par_iter().map(|p| assess_file(p)).collect()
}

/// Load an external feeder -> area table and intersect it with the
/// feeders cited by `eval`'s findings.
pub fn impact_from_area_file(
    eval: &Evaluation,
    areas_path: &Path,
) -> AppResult<BTreeMap<String, AreaDef>> {
    let areas = sld_project::load_areas(areas_path)?;
    Ok(geographic_impact(&eval.graph, &eval.assessment, &areas))
}
