//! Diagram and area-table file schema.
//!
//! These are the records handed over by the ingestion step: `symbols` and
//! `edges`. Anything on a symbol other than `id` and `type` is kept as an
//! open attribute.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sld_core::ComponentKind;

pub const LATEST_VERSION: u32 = 1;

fn default_version() -> u32 {
    LATEST_VERSION
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Diagram {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbols: Vec<SymbolDef>,
    #[serde(default)]
    pub edges: Vec<EdgeDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SymbolDef {
    pub id: String,
    /// Absent when the ingestion step could not classify the symbol.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ComponentKind>,
    #[serde(flatten)]
    pub attributes: BTreeMap<String, serde_json::Value>,
}

impl SymbolDef {
    /// Attribute rendered as text: strings verbatim, other scalars via JSON.
    pub fn attribute_text(&self, key: &str) -> Option<String> {
        self.attributes.get(key).map(value_text)
    }
}

pub(crate) fn value_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EdgeDef {
    pub from: String,
    pub to: String,
}

/// Externally owned feeder -> service area table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AreaTable {
    #[serde(default)]
    pub feeders: BTreeMap<String, AreaDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AreaDef {
    pub area: String,
    /// `[lat, lon]` vertices.
    #[serde(default)]
    pub polygon: Vec<[f64; 2]>,
}
