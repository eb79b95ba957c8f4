//! Diagram validation logic.
//!
//! Only checks what graph assembly cannot: file version and blank ids.
//! Duplicate ids and dangling edges are reported by the graph builder.

use crate::schema::{Diagram, LATEST_VERSION};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },

    #[error("Empty id in {context}")]
    EmptyId { context: String },
}

pub fn validate_diagram(diagram: &Diagram) -> Result<(), ValidationError> {
    if diagram.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: diagram.version,
        });
    }

    for (i, symbol) in diagram.symbols.iter().enumerate() {
        if symbol.id.trim().is_empty() {
            return Err(ValidationError::EmptyId {
                context: format!("symbols[{i}]"),
            });
        }
    }

    for (i, edge) in diagram.edges.iter().enumerate() {
        if edge.from.trim().is_empty() || edge.to.trim().is_empty() {
            return Err(ValidationError::EmptyId {
                context: format!("edges[{i}]"),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{EdgeDef, SymbolDef};

    fn diagram() -> Diagram {
        Diagram {
            version: LATEST_VERSION,
            name: "test".to_string(),
            symbols: vec![SymbolDef {
                id: "F1".to_string(),
                kind: Some("FEEDER".into()),
                attributes: Default::default(),
            }],
            edges: vec![],
        }
    }

    #[test]
    fn accepts_latest_version() {
        assert!(validate_diagram(&diagram()).is_ok());
    }

    #[test]
    fn rejects_future_version() {
        let mut d = diagram();
        d.version = LATEST_VERSION + 1;
        assert_eq!(
            validate_diagram(&d),
            Err(ValidationError::UnsupportedVersion {
                version: LATEST_VERSION + 1
            })
        );
    }

    #[test]
    fn rejects_blank_edge_endpoint() {
        let mut d = diagram();
        d.edges.push(EdgeDef {
            from: "F1".to_string(),
            to: " ".to_string(),
        });
        assert!(matches!(
            validate_diagram(&d),
            Err(ValidationError::EmptyId { context }) if context == "edges[0]"
        ));
    }

    #[test]
    fn dangling_edges_are_left_to_graph_assembly() {
        let mut d = diagram();
        d.edges.push(EdgeDef {
            from: "F1".to_string(),
            to: "NOWHERE".to_string(),
        });
        assert!(validate_diagram(&d).is_ok());
    }
}
