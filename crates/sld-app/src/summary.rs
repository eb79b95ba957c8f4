//! Severity distribution of a finding list.

use serde::{Deserialize, Serialize};
use sld_core::Level;
use sld_rules::Finding;

/// Count of findings per severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeveritySummary {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub total: usize,
}

impl SeveritySummary {
    pub fn from_findings(findings: &[Finding]) -> Self {
        let mut summary = Self::default();
        for f in findings {
            match f.severity {
                Level::High => summary.high += 1,
                Level::Medium => summary.medium += 1,
                Level::Low => summary.low += 1,
            }
            summary.total += 1;
        }
        summary
    }

    pub fn count(&self, level: Level) -> usize {
        match level {
            Level::High => self.high,
            Level::Medium => self.medium,
            Level::Low => self.low,
        }
    }

    /// Most severe level present, if any.
    pub fn worst(&self) -> Option<Level> {
        Level::ALL.into_iter().find(|&l| self.count(l) > 0)
    }
}
