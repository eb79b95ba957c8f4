//! Feeder criticality scoring.
//!
//! score = direct load count + voltage tier score + backup penalty, then
//! bucketed into HIGH (>= 6), MEDIUM (3..=5) or LOW (< 3).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sld_core::{Criticality, Level, SldResult};
use sld_graph::{Component, Graph};

use crate::inventory::Inventory;

/// Substring marking the 33kV-class voltage tier. Containment, not parsing.
pub const HIGH_VOLTAGE_MARKER: &str = "33";
pub const HIGH_VOLTAGE_SCORE: i32 = 3;
pub const BASE_VOLTAGE_SCORE: i32 = 1;
/// Applied when a feeder has exactly one outgoing connection.
pub const NO_BACKUP_PENALTY: i32 = -2;

pub const HIGH_THRESHOLD: i32 = 6;
pub const MEDIUM_THRESHOLD: i32 = 3;

/// Per-feeder score breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeederScore {
    pub feeder: String,
    pub voltage: String,
    pub loads: usize,
    pub out_degree: usize,
    pub voltage_score: i32,
    pub backup_penalty: i32,
    pub score: i32,
    pub level: Criticality,
}

/// Map a raw score onto a criticality level.
pub fn bucket(score: i32) -> Criticality {
    if score >= HIGH_THRESHOLD {
        Level::High
    } else if score >= MEDIUM_THRESHOLD {
        Level::Medium
    } else {
        Level::Low
    }
}

fn voltage_score(voltage: &str) -> i32 {
    if voltage.contains(HIGH_VOLTAGE_MARKER) {
        HIGH_VOLTAGE_SCORE
    } else {
        BASE_VOLTAGE_SCORE
    }
}

// A feeder with no outgoing connection at all is not penalised.
fn backup_penalty(out_degree: usize) -> i32 {
    if out_degree == 1 { NO_BACKUP_PENALTY } else { 0 }
}

fn total_score(loads: usize, voltage_score: i32, backup_penalty: i32) -> i32 {
    i32::try_from(loads)
        .unwrap_or(i32::MAX)
        .saturating_add(voltage_score)
        .saturating_add(backup_penalty)
}

fn score_one(inv: &Inventory<'_>, feeder: &Component) -> SldResult<FeederScore> {
    let loads = inv.load_successors(feeder)?.len();
    let out_degree = inv.graph.out_degree(&feeder.id)?;
    let voltage = feeder.voltage();
    let voltage_score = voltage_score(voltage);
    let backup_penalty = backup_penalty(out_degree);
    let score = total_score(loads, voltage_score, backup_penalty);

    Ok(FeederScore {
        feeder: feeder.id.clone(),
        voltage: voltage.to_string(),
        loads,
        out_degree,
        voltage_score,
        backup_penalty,
        score,
        level: bucket(score),
    })
}

/// Score breakdown for every feeder, in graph order.
pub fn feeder_scores(graph: &Graph) -> SldResult<Vec<FeederScore>> {
    let inv = Inventory::new(graph)?;
    inv.feeders.iter().map(|f| score_one(&inv, f)).collect()
}

/// Criticality level per feeder id.
pub fn score_feeders(graph: &Graph) -> SldResult<BTreeMap<String, Criticality>> {
    Ok(feeder_scores(graph)?
        .into_iter()
        .map(|s| (s.feeder, s.level))
        .collect())
}
