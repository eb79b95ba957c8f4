//! Turn diagram records into a graph.

use sld_graph::{Component, Graph, GraphBuilder, GraphError};

use crate::schema::{Diagram, value_text};

/// Assemble the graph for `diagram`.
///
/// Purely structural: symbols become components (attributes rendered as
/// text), edges become connections, in file order. Duplicate ids and edges
/// to unknown symbols are rejected by the builder.
pub fn build_graph(diagram: &Diagram) -> Result<Graph, GraphError> {
    let mut builder = GraphBuilder::new();

    for symbol in &diagram.symbols {
        let comp = builder.push(Component::new(symbol.id.clone(), symbol.kind.clone()));
        for (key, value) in &symbol.attributes {
            comp.set_attribute(key.clone(), value_text(value));
        }
    }

    for edge in &diagram.edges {
        builder.connect(edge.from.clone(), edge.to.clone());
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sld_core::ComponentKind;

    #[test]
    fn symbols_and_edges_become_graph() {
        let diagram: Diagram = serde_yaml::from_str(
            r#"
symbols:
  - { id: S1, type: SOURCE, voltage: 110kV }
  - { id: F1, type: FEEDER }
  - { id: X1 }
edges:
  - { from: S1, to: F1 }
"#,
        )
        .unwrap();

        let graph = build_graph(&diagram).unwrap();
        assert_eq!(graph.len(), 3);
        assert_eq!(graph.component("S1").unwrap().voltage(), "110kV");
        assert_eq!(graph.component("F1").unwrap().voltage(), "11kV");
        assert_eq!(
            graph.component("F1").unwrap().kind,
            Some(ComponentKind::Feeder)
        );
        assert_eq!(graph.component("X1").unwrap().kind, None);
        assert_eq!(graph.out_degree("S1").unwrap(), 1);
    }

    #[test]
    fn edge_to_unknown_symbol_fails() {
        let diagram: Diagram = serde_yaml::from_str(
            r#"
symbols:
  - { id: F1, type: FEEDER }
edges:
  - { from: F1, to: L404 }
"#,
        )
        .unwrap();

        match build_graph(&diagram) {
            Err(GraphError::ComponentNotFound { id, .. }) => assert_eq!(id, "L404"),
            other => panic!("expected ComponentNotFound, got {other:?}"),
        }
    }
}
