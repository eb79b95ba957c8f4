//! Risk findings emitted by the rule engine.

use core::fmt;

use serde::{Deserialize, Serialize};
use sld_core::Severity;

/// Stable symbolic identifier of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleId {
    SingleFeederRisk,
    NoBackupPath,
    FloatingBreaker,
    UnconnectedEquipment,
    LoadWithoutBreaker,
    TransformerWithoutBreaker,
    FeederWithNoLoad,
    MultipleLoadsNoIsolation,
    DanglingSource,
}

impl RuleId {
    pub fn as_str(self) -> &'static str {
        match self {
            RuleId::SingleFeederRisk => "SINGLE_FEEDER_RISK",
            RuleId::NoBackupPath => "NO_BACKUP_PATH",
            RuleId::FloatingBreaker => "FLOATING_BREAKER",
            RuleId::UnconnectedEquipment => "UNCONNECTED_EQUIPMENT",
            RuleId::LoadWithoutBreaker => "LOAD_WITHOUT_BREAKER",
            RuleId::TransformerWithoutBreaker => "TRANSFORMER_WITHOUT_BREAKER",
            RuleId::FeederWithNoLoad => "FEEDER_WITH_NO_LOAD",
            RuleId::MultipleLoadsNoIsolation => "MULTIPLE_LOADS_NO_ISOLATION",
            RuleId::DanglingSource => "DANGLING_SOURCE",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One rule match: what fired, why, and which components are involved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub rule: RuleId,
    pub why: String,
    pub affected_components: Vec<String>,
    pub impact: String,
    pub severity: Severity,
    /// Percentage, 0..=100.
    pub confidence: u8,
}

impl Finding {
    /// Membership test used by explainability views.
    pub fn involves(&self, component_id: &str) -> bool {
        self.affected_components.iter().any(|c| c == component_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sld_core::Level;

    #[test]
    fn rule_id_serializes_as_symbolic_name() {
        let json = serde_json::to_string(&RuleId::MultipleLoadsNoIsolation).unwrap();
        assert_eq!(json, "\"MULTIPLE_LOADS_NO_ISOLATION\"");
        assert_eq!(
            json.trim_matches('"'),
            RuleId::MultipleLoadsNoIsolation.as_str()
        );
    }

    #[test]
    fn finding_wire_shape() {
        let finding = Finding {
            rule: RuleId::DanglingSource,
            why: "Source S1 is not connected to any feeder".to_string(),
            affected_components: vec!["S1".to_string()],
            impact: "Source not utilized".to_string(),
            severity: Level::Low,
            confidence: 65,
        };
        let value = serde_json::to_value(&finding).unwrap();
        assert_eq!(value["rule"], "DANGLING_SOURCE");
        assert_eq!(value["severity"], "LOW");
        assert_eq!(value["confidence"], 65);
        assert_eq!(value["affected_components"][0], "S1");
        assert!(finding.involves("S1"));
        assert!(!finding.involves("S"));
    }
}
