//! Content-based diagram fingerprint.

use sha2::{Digest, Sha256};

use crate::schema::Diagram;

/// SHA-256 over the canonical JSON of the diagram, hex encoded.
///
/// Attribute maps are ordered, so equal diagrams hash equally regardless of
/// the key order in the source file.
pub fn fingerprint(diagram: &Diagram) -> String {
    let mut hasher = Sha256::new();

    let diagram_json = serde_json::to_string(diagram).unwrap_or_default();
    hasher.update(diagram_json.as_bytes());

    let result = hasher.finalize();
    format!("{:x}", result)
}
