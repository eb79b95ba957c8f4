//! Explainability and impact queries over an assessment.

use std::collections::{BTreeMap, BTreeSet};

use sld_core::{ComponentKind, SldResult};
use sld_graph::{Graph, VOLTAGE_ATTRIBUTE};
use sld_project::{AreaDef, AreaTable};
use sld_rules::{FeederScore, Finding};
use tracing::warn;

use crate::assess_service::Assessment;

/// Everything known about why one component shows up in the report.
#[derive(Debug, Clone)]
pub struct ComponentExplanation<'a> {
    pub id: String,
    pub kind: Option<ComponentKind>,
    /// Declared voltage only; the scorer's default is not filled in here.
    pub voltage: Option<String>,
    pub score: Option<&'a FeederScore>,
    pub findings: Vec<&'a Finding>,
}

impl ComponentExplanation<'_> {
    pub fn meaning(&self) -> Option<&'static str> {
        self.kind.as_ref().map(ComponentKind::meaning)
    }

    pub fn is_involved(&self) -> bool {
        !self.findings.is_empty()
    }
}

/// Explain one component: its kind, its feeder score if any, and every
/// finding that cites it.
pub fn explain_component<'a>(
    graph: &Graph,
    assessment: &'a Assessment,
    component_id: &str,
) -> SldResult<ComponentExplanation<'a>> {
    let comp = graph.component(component_id)?;
    Ok(ComponentExplanation {
        id: comp.id.clone(),
        kind: comp.kind.clone(),
        voltage: comp.attribute(VOLTAGE_ATTRIBUTE).map(str::to_string),
        score: assessment.feeder_score(component_id),
        findings: assessment.findings_involving(component_id).collect(),
    })
}

/// Feeder ids cited by at least one finding.
pub fn affected_feeders(graph: &Graph, assessment: &Assessment) -> BTreeSet<String> {
    assessment
        .risks
        .iter()
        .flat_map(|f| f.affected_components.iter())
        .filter(|id| {
            graph
                .component(id)
                .is_ok_and(|c| c.is_kind(&ComponentKind::Feeder))
        })
        .cloned()
        .collect()
}

/// Areas served by affected feeders, looked up in an external table.
///
/// Feeders the table does not know are skipped.
pub fn geographic_impact(
    graph: &Graph,
    assessment: &Assessment,
    areas: &AreaTable,
) -> BTreeMap<String, AreaDef> {
    let mut impact = BTreeMap::new();
    for feeder in affected_feeders(graph, assessment) {
        match areas.feeders.get(&feeder) {
            Some(area) => {
                impact.insert(feeder, area.clone());
            }
            None => warn!(feeder = %feeder, "affected feeder has no area entry"),
        }
    }
    impact
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assess_service::assess;
    use sld_core::{Level, SldError};
    use sld_graph::GraphBuilder;
    use sld_rules::RuleId;

    fn graph() -> Graph {
        // S1 -> F1 -> T1 -> {L1, L2}; F2 -> B2 -> L3 (F2 is healthy enough)
        let mut builder = GraphBuilder::new();
        builder.add_component("S1", ComponentKind::Source);
        builder
            .add_component("F1", ComponentKind::Feeder)
            .set_attribute("voltage", "33kV");
        builder.add_component("F2", ComponentKind::Feeder);
        builder.add_component("T1", ComponentKind::Transformer);
        builder.add_component("B2", ComponentKind::Breaker);
        builder.add_component("B3", ComponentKind::Breaker);
        builder.add_component("L1", ComponentKind::Load);
        builder.add_component("L2", ComponentKind::Load);
        builder.add_component("L3", ComponentKind::Load);
        builder
            .connect("S1", "F1")
            .connect("F1", "T1")
            .connect("T1", "L1")
            .connect("T1", "L2")
            .connect("F2", "B2")
            .connect("F2", "B3")
            .connect("F2", "L3")
            .connect("B2", "L3")
            .connect("B3", "L3");
        builder.build().unwrap()
    }

    #[test]
    fn explain_feeder() {
        let graph = graph();
        let assessment = assess(&graph).unwrap();
        let exp = explain_component(&graph, &assessment, "F1").unwrap();

        assert_eq!(exp.kind, Some(ComponentKind::Feeder));
        assert_eq!(exp.voltage.as_deref(), Some("33kV"));
        assert_eq!(exp.meaning(), Some("Distributes power to downstream network"));
        assert_eq!(exp.score.unwrap().level, Level::Low);
        let rules: Vec<RuleId> = exp.findings.iter().map(|f| f.rule).collect();
        assert_eq!(rules, vec![RuleId::NoBackupPath, RuleId::FeederWithNoLoad]);
    }

    #[test]
    fn explanation_outlives_the_requested_id() {
        let graph = graph();
        let assessment = assess(&graph).unwrap();
        let exp = {
            let id = String::from("F1");
            explain_component(&graph, &assessment, &id).unwrap()
        };
        assert_eq!(exp.id, "F1");
        assert_eq!(exp.findings.len(), 2);
    }

    #[test]
    fn explain_uninvolved_component() {
        let graph = graph();
        let assessment = assess(&graph).unwrap();
        let exp = explain_component(&graph, &assessment, "B2").unwrap();
        assert!(!exp.is_involved());
        assert!(exp.score.is_none());
        assert!(exp.voltage.is_none());
    }

    #[test]
    fn explain_unknown_component() {
        let graph = graph();
        let assessment = assess(&graph).unwrap();
        let err = explain_component(&graph, &assessment, "ZZ").unwrap_err();
        assert!(matches!(err, SldError::ComponentNotFound { .. }));
    }

    #[test]
    fn only_cited_feeders_are_affected() {
        let graph = graph();
        let assessment = assess(&graph).unwrap();
        let feeders = affected_feeders(&graph, &assessment);
        assert_eq!(feeders.into_iter().collect::<Vec<_>>(), vec!["F1"]);
    }

    #[test]
    fn impact_skips_feeders_missing_from_table() {
        let graph = graph();
        let assessment = assess(&graph).unwrap();

        let mut areas = AreaTable::default();
        areas.feeders.insert(
            "F2".to_string(),
            AreaDef {
                area: "T Nagar".to_string(),
                polygon: vec![],
            },
        );
        assert!(geographic_impact(&graph, &assessment, &areas).is_empty());

        areas.feeders.insert(
            "F1".to_string(),
            AreaDef {
                area: "Anna Nagar".to_string(),
                polygon: vec![[13.095, 80.275]],
            },
        );
        let impact = geographic_impact(&graph, &assessment, &areas);
        assert_eq!(impact.len(), 1);
        assert_eq!(impact["F1"].area, "Anna Nagar");
    }
}
