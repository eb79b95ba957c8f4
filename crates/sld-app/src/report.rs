//! Output contract for presentation layers, and its renderings.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::str::FromStr;

use serde::Serialize;
use sld_core::Criticality;
use sld_project::{AreaDef, EdgeDef, SymbolDef};
use sld_rules::Finding;

use crate::assess_service::Evaluation;
use crate::error::{AppError, AppResult};
use crate::summary::SeveritySummary;

/// Serialized view of an evaluation.
///
/// `why_explainer` repeats `risks`; consumers index either name.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub name: &'a str,
    pub fingerprint: &'a str,
    pub symbols: &'a [SymbolDef],
    pub connectivity: Connectivity<'a>,
    pub risks: &'a [Finding],
    pub why_explainer: &'a [Finding],
    pub criticality: &'a BTreeMap<String, Criticality>,
    pub summary: SeveritySummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gis: Option<BTreeMap<String, AreaDef>>,
}

/// Drawn connections, so a viewer can redraw the topology.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Connectivity<'a> {
    pub edges: &'a [EdgeDef],
}

impl<'a> Report<'a> {
    pub fn new(eval: &'a Evaluation, gis: Option<BTreeMap<String, AreaDef>>) -> Self {
        Self {
            name: &eval.name,
            fingerprint: &eval.fingerprint,
            symbols: &eval.diagram.symbols,
            connectivity: Connectivity {
                edges: &eval.diagram.edges,
            },
            risks: &eval.assessment.risks,
            why_explainer: &eval.assessment.risks,
            criticality: &eval.assessment.criticality,
            summary: eval.assessment.summary,
            gis,
        }
    }

    pub fn render(&self, format: ReportFormat) -> AppResult<String> {
        match format {
            ReportFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            ReportFormat::Yaml => Ok(serde_yaml::to_string(self)?),
            ReportFormat::Text => Ok(self.render_text()),
        }
    }

    fn render_text(&self) -> String {
        let mut out = String::new();
        let title = if self.name.is_empty() {
            "(unnamed diagram)"
        } else {
            self.name
        };
        let _ = writeln!(out, "Diagram: {title}");
        let _ = writeln!(out, "Fingerprint: {}", self.fingerprint);
        let _ = writeln!(
            out,
            "Findings: {} (high {}, medium {}, low {})",
            self.summary.total, self.summary.high, self.summary.medium, self.summary.low
        );

        for f in self.risks {
            let _ = writeln!(
                out,
                "  [{} {:>3}%] {}: {}",
                f.severity, f.confidence, f.rule, f.why
            );
            let _ = writeln!(
                out,
                "      impact: {}; components: {}",
                f.impact,
                f.affected_components.join(", ")
            );
        }

        if !self.criticality.is_empty() {
            let _ = writeln!(out, "Feeder criticality:");
            for (feeder, level) in self.criticality {
                let _ = writeln!(out, "  {feeder}: {level}");
            }
        }

        if let Some(gis) = &self.gis {
            let _ = writeln!(out, "Affected areas:");
            for (feeder, area) in gis {
                let _ = writeln!(out, "  {feeder}: {}", area.area);
            }
        }

        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl FromStr for ReportFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            "yaml" | "yml" => Ok(ReportFormat::Yaml),
            other => Err(AppError::Render(format!("unknown report format '{other}'"))),
        }
    }
}
