//! The fixed rule table and its evaluation.
//!
//! Every rule is data (id, severity, confidence, impact) plus a pure check
//! over an [`Inventory`]. Checks share no state and never read another
//! rule's output, so the findings of one rule do not depend on which other
//! rules are in the table or in what order they run.

use sld_core::{Level, Severity, SldResult};
use sld_graph::Graph;

use crate::finding::{Finding, RuleId};
use crate::inventory::Inventory;

/// A single trigger of a rule: the justification and the components it cites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub why: String,
    pub components: Vec<String>,
}

impl Match {
    fn single(why: String, id: &str) -> Self {
        Self {
            why,
            components: vec![id.to_string()],
        }
    }
}

type Check = fn(&Inventory<'_>) -> SldResult<Vec<Match>>;

/// One entry of the rule table.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub id: RuleId,
    pub severity: Severity,
    /// Percentage, 0..=100.
    pub confidence: u8,
    pub impact: &'static str,
    check: Check,
}

impl Rule {
    /// Run the check and stamp each match with this rule's template.
    pub fn apply(&self, inv: &Inventory<'_>) -> SldResult<Vec<Finding>> {
        let matches = (self.check)(inv)?;
        Ok(matches
            .into_iter()
            .map(|m| Finding {
                rule: self.id,
                why: m.why,
                affected_components: m.components,
                impact: self.impact.to_string(),
                severity: self.severity,
                confidence: self.confidence,
            })
            .collect())
    }
}

static RULES: [Rule; 9] = [
    Rule {
        id: RuleId::SingleFeederRisk,
        severity: Level::High,
        confidence: 95,
        impact: "Complete outage if feeder fails",
        check: single_feeder,
    },
    Rule {
        id: RuleId::NoBackupPath,
        severity: Level::High,
        confidence: 90,
        impact: "Unsafe during maintenance",
        check: no_backup_path,
    },
    Rule {
        id: RuleId::FloatingBreaker,
        severity: Level::Medium,
        confidence: 88,
        impact: "Broken or incorrect drawing",
        check: floating_breaker,
    },
    Rule {
        id: RuleId::UnconnectedEquipment,
        severity: Level::High,
        confidence: 92,
        impact: "Invalid SLD",
        check: unconnected_equipment,
    },
    Rule {
        id: RuleId::LoadWithoutBreaker,
        severity: Level::High,
        confidence: 94,
        impact: "Unsafe load connection",
        check: load_without_breaker,
    },
    Rule {
        id: RuleId::TransformerWithoutBreaker,
        severity: Level::High,
        confidence: 91,
        impact: "Unsafe transformer maintenance",
        check: transformer_without_breaker,
    },
    Rule {
        id: RuleId::FeederWithNoLoad,
        severity: Level::Low,
        confidence: 70,
        impact: "Unused or overdesigned feeder",
        check: feeder_with_no_load,
    },
    Rule {
        id: RuleId::MultipleLoadsNoIsolation,
        severity: Level::Medium,
        confidence: 85,
        impact: "Fault propagation risk",
        check: multiple_loads_no_isolation,
    },
    Rule {
        id: RuleId::DanglingSource,
        severity: Level::Low,
        confidence: 65,
        impact: "Source not utilized",
        check: dangling_source,
    },
];

/// The canonical rule table, in evaluation order.
pub fn rules() -> &'static [Rule] {
    &RULES
}

/// Run every rule of the canonical table against `graph`.
///
/// Findings are ordered by rule, then by the graph order of the components
/// each rule matched.
pub fn evaluate(graph: &Graph) -> SldResult<Vec<Finding>> {
    evaluate_with(graph, rules())
}

/// Run the given rules, in the given order.
pub fn evaluate_with<'r>(
    graph: &Graph,
    rules: impl IntoIterator<Item = &'r Rule>,
) -> SldResult<Vec<Finding>> {
    let inv = Inventory::new(graph)?;
    let mut findings = Vec::new();
    for rule in rules {
        findings.extend(rule.apply(&inv)?);
    }
    Ok(findings)
}

fn single_feeder(inv: &Inventory<'_>) -> SldResult<Vec<Match>> {
    Ok(match inv.feeders.as_slice() {
        [only] => vec![Match::single(
            "Only one feeder exists in the network".to_string(),
            &only.id,
        )],
        _ => Vec::new(),
    })
}

fn no_backup_path(inv: &Inventory<'_>) -> SldResult<Vec<Match>> {
    let mut out = Vec::new();
    for f in &inv.feeders {
        if inv.graph.out_degree(&f.id)? == 1 {
            out.push(Match::single(
                format!("Feeder {} has no alternate downstream path", f.id),
                &f.id,
            ));
        }
    }
    Ok(out)
}

fn floating_breaker(inv: &Inventory<'_>) -> SldResult<Vec<Match>> {
    let mut out = Vec::new();
    for b in &inv.breakers {
        if inv.graph.out_degree(&b.id)? == 0 {
            out.push(Match::single(
                format!("Breaker {} has no downstream load", b.id),
                &b.id,
            ));
        }
    }
    Ok(out)
}

// Applies to every component, including kinds no other rule understands.
fn unconnected_equipment(inv: &Inventory<'_>) -> SldResult<Vec<Match>> {
    let mut out = Vec::new();
    for c in inv.graph.components() {
        if inv.graph.degree(&c.id)? == 0 {
            out.push(Match::single(
                format!("Component {} is not connected", c.id),
                &c.id,
            ));
        }
    }
    Ok(out)
}

fn load_without_breaker(inv: &Inventory<'_>) -> SldResult<Vec<Match>> {
    let mut out = Vec::new();
    for l in &inv.loads {
        if !inv.has_breaker_upstream(l)? {
            out.push(Match::single(
                format!("Load {} is not protected by a breaker", l.id),
                &l.id,
            ));
        }
    }
    Ok(out)
}

fn transformer_without_breaker(inv: &Inventory<'_>) -> SldResult<Vec<Match>> {
    let mut out = Vec::new();
    for t in &inv.transformers {
        if !inv.has_breaker_upstream(t)? {
            out.push(Match::single(
                format!("Transformer {} lacks isolation breaker", t.id),
                &t.id,
            ));
        }
    }
    Ok(out)
}

fn feeder_with_no_load(inv: &Inventory<'_>) -> SldResult<Vec<Match>> {
    let mut out = Vec::new();
    for f in &inv.feeders {
        if inv.load_successors(f)?.is_empty() {
            out.push(Match::single(
                format!("Feeder {} is not supplying any load", f.id),
                &f.id,
            ));
        }
    }
    Ok(out)
}

fn multiple_loads_no_isolation(inv: &Inventory<'_>) -> SldResult<Vec<Match>> {
    let mut out = Vec::new();
    for t in &inv.transformers {
        let loads = inv.load_successors(t)?;
        if loads.len() > 1 {
            let mut components = Vec::with_capacity(loads.len() + 1);
            components.push(t.id.clone());
            components.extend(loads.iter().map(|l| l.id.clone()));
            out.push(Match {
                why: format!("Transformer {} feeds multiple loads without isolation", t.id),
                components,
            });
        }
    }
    Ok(out)
}

fn dangling_source(inv: &Inventory<'_>) -> SldResult<Vec<Match>> {
    let mut out = Vec::new();
    for s in &inv.sources {
        if inv.graph.out_degree(&s.id)? == 0 {
            out.push(Match::single(
                format!("Source {} is not connected to any feeder", s.id),
                &s.id,
            ));
        }
    }
    Ok(out)
}
