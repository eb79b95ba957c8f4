//! Diagram assessment: rule engine, then criticality scorer, merged.

use std::collections::BTreeMap;

use rayon::prelude::*;
use serde::Serialize;
use sld_core::Criticality;
use sld_graph::Graph;
use sld_project::Diagram;
use sld_rules::{FeederScore, Finding};
use tracing::{debug, info};

use crate::error::AppResult;
use crate::summary::SeveritySummary;

/// Merged output of one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub risks: Vec<Finding>,
    pub criticality: BTreeMap<String, Criticality>,
    pub feeder_scores: Vec<FeederScore>,
    pub summary: SeveritySummary,
}

impl Assessment {
    /// Findings whose affected components include `component_id`.
    pub fn findings_involving<'a, 'b>(
        &'a self,
        component_id: &'b str,
    ) -> impl Iterator<Item = &'a Finding> + use<'a, 'b> {
        self.risks.iter().filter(move |f| f.involves(component_id))
    }

    pub fn feeder_score(&self, feeder_id: &str) -> Option<&FeederScore> {
        self.feeder_scores.iter().find(|s| s.feeder == feeder_id)
    }
}

/// A diagram together with its graph and assessment.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub name: String,
    pub fingerprint: String,
    pub diagram: Diagram,
    pub graph: Graph,
    pub assessment: Assessment,
}

/// Evaluate a built graph.
///
/// Runs the rule engine, then the scorer. Either failure aborts the call;
/// no partial assessment is returned.
pub fn assess(graph: &Graph) -> AppResult<Assessment> {
    let risks = sld_rules::evaluate(graph)?;
    debug!(findings = risks.len(), "rule engine finished");

    let feeder_scores = sld_rules::feeder_scores(graph)?;
    let criticality = feeder_scores
        .iter()
        .map(|s| (s.feeder.clone(), s.level))
        .collect();
    debug!(feeders = feeder_scores.len(), "criticality scored");

    let summary = SeveritySummary::from_findings(&risks);
    Ok(Assessment {
        risks,
        criticality,
        feeder_scores,
        summary,
    })
}

/// Assemble the graph for a loaded diagram and evaluate it.
pub fn assess_diagram(diagram: &Diagram) -> AppResult<Evaluation> {
    let fingerprint = sld_project::fingerprint(diagram);
    let graph = sld_project::build_graph(diagram)?;
    debug!(
        name = %diagram.name,
        components = graph.len(),
        connections = graph.connections().len(),
        "graph assembled"
    );

    let assessment = assess(&graph)?;
    info!(
        name = %diagram.name,
        findings = assessment.summary.total,
        high = assessment.summary.high,
        "diagram assessed"
    );

    Ok(Evaluation {
        name: diagram.name.clone(),
        fingerprint,
        diagram: diagram.clone(),
        graph,
        assessment,
    })
}

/// Evaluate many diagrams in parallel, one independent evaluation each.
///
/// Results are returned in input order; one failing diagram does not affect
/// the others.
pub fn assess_batch(diagrams: &[Diagram]) -> Vec<AppResult<Evaluation>> {
    diagrams.par_iter().map(assess_diagram).collect()
}
