//! Graph validation logic.

use std::collections::HashMap;

use sld_core::NodeIx;

use crate::error::GraphError;
use crate::graph::{Component, Connection};

/// Validate the graph structure and return the id -> index table.
///
/// Ids must be unique and every connection endpoint must name a declared
/// component. The first violation wins.
pub(crate) fn validate_structure(
    components: &[Component],
    connections: &[Connection],
) -> Result<HashMap<String, NodeIx>, GraphError> {
    let mut index = HashMap::with_capacity(components.len());
    for (i, comp) in components.iter().enumerate() {
        let ix = u32::try_from(i)
            .ok()
            .and_then(NodeIx::from_index)
            .ok_or(GraphError::TooLarge {
                count: components.len(),
            })?;
        if index.insert(comp.id.clone(), ix).is_some() {
            return Err(GraphError::DuplicateComponent {
                id: comp.id.clone(),
            });
        }
    }

    for conn in connections {
        for endpoint in [&conn.from, &conn.to] {
            if !index.contains_key(endpoint) {
                return Err(GraphError::ComponentNotFound {
                    id: endpoint.clone(),
                    from: conn.from.clone(),
                    to: conn.to.clone(),
                });
            }
        }
    }

    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sld_core::ComponentKind;

    #[test]
    fn validate_empty_graph() {
        let index = validate_structure(&[], &[]).unwrap();
        assert!(index.is_empty());
    }

    #[test]
    fn validate_duplicate_id() {
        let components = vec![
            Component::new("B1", Some(ComponentKind::Breaker)),
            Component::new("B1", Some(ComponentKind::Load)),
        ];
        let result = validate_structure(&components, &[]);
        assert_eq!(
            result.unwrap_err(),
            GraphError::DuplicateComponent {
                id: "B1".to_string()
            }
        );
    }

    #[test]
    fn validate_dangling_target() {
        let components = vec![Component::new("F1", Some(ComponentKind::Feeder))];
        let connections = vec![Connection::new("F1", "L9")];
        let result = validate_structure(&components, &connections);
        assert_eq!(
            result.unwrap_err(),
            GraphError::ComponentNotFound {
                id: "L9".to_string(),
                from: "F1".to_string(),
                to: "L9".to_string(),
            }
        );
    }

    #[test]
    fn validate_dangling_source_reported_first() {
        let components = vec![Component::new("L1", Some(ComponentKind::Load))];
        let connections = vec![Connection::new("S0", "X0")];
        let err = validate_structure(&components, &connections).unwrap_err();
        assert!(matches!(err, GraphError::ComponentNotFound { id, .. } if id == "S0"));
    }
}
