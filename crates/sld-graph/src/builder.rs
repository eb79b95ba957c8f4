//! Incremental graph builder.

use sld_core::{ComponentKind, NodeIx};

use crate::error::GraphError;
use crate::graph::{Component, Connection, Graph};
use crate::validate;

/// Builder for constructing a graph incrementally.
///
/// Use `add_component` and `connect` to build up the graph,
/// then call `build()` to validate and freeze it into an immutable `Graph`.
/// The builder performs no checks until `build()`.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    components: Vec<Component>,
    connections: Vec<Connection>,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a typed component and return it for attribute setup.
    pub fn add_component(&mut self, id: impl Into<String>, kind: ComponentKind) -> &mut Component {
        self.push(Component::new(id, Some(kind)))
    }

    /// Add a fully formed component, possibly without a kind.
    pub fn push(&mut self, component: Component) -> &mut Component {
        self.components.push(component);
        let last = self.components.len() - 1;
        &mut self.components[last]
    }

    /// Add a directed connection from `from` to `to`.
    ///
    /// Repeated calls with the same pair add parallel connections.
    pub fn connect(&mut self, from: impl Into<String>, to: impl Into<String>) -> &mut Self {
        self.connections.push(Connection::new(from, to));
        self
    }

    /// Build and validate the graph, returning an immutable `Graph`.
    ///
    /// This performs validation and constructs compact adjacency lists.
    pub fn build(self) -> Result<Graph, GraphError> {
        let index = validate::validate_structure(&self.components, &self.connections)?;

        let n = self.components.len();
        let mut forward = Vec::with_capacity(self.connections.len());
        let mut backward = Vec::with_capacity(self.connections.len());
        for conn in &self.connections {
            // Endpoints were checked by validate_structure.
            if let (Some(&from), Some(&to)) = (index.get(&conn.from), index.get(&conn.to)) {
                forward.push((from, to));
                backward.push((to, from));
            }
        }

        let (out_offsets, out_targets) = Self::build_adjacency(n, &forward);
        let (in_offsets, in_sources) = Self::build_adjacency(n, &backward);

        Ok(Graph {
            components: self.components,
            connections: self.connections,
            index,
            out_offsets,
            out_targets,
            in_offsets,
            in_sources,
        })
    }

    /// Build compact adjacency lists from (owner, neighbour) pairs.
    ///
    /// Neighbours keep the relative order of `pairs`.
    fn build_adjacency(n: usize, pairs: &[(NodeIx, NodeIx)]) -> (Vec<usize>, Vec<NodeIx>) {
        let mut counts = vec![0usize; n];
        for (owner, _) in pairs {
            counts[owner.slot()] += 1;
        }

        let mut offsets = Vec::with_capacity(n + 1);
        offsets.push(0);
        for count in &counts {
            let last = offsets[offsets.len() - 1];
            offsets.push(last + count);
        }

        let mut cursor = offsets[..n].to_vec();
        let mut flat: Vec<Option<NodeIx>> = vec![None; pairs.len()];
        for &(owner, neighbour) in pairs {
            let at = cursor[owner.slot()];
            flat[at] = Some(neighbour);
            cursor[owner.slot()] += 1;
        }

        (offsets, flat.into_iter().flatten().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_basic() {
        let mut builder = GraphBuilder::new();
        builder.add_component("S1", ComponentKind::Source);
        builder
            .add_component("F1", ComponentKind::Feeder)
            .set_attribute("voltage", "33kV");
        builder.connect("S1", "F1");

        assert_eq!(builder.components.len(), 2);
        assert_eq!(builder.connections.len(), 1);
        assert_eq!(builder.components[1].voltage(), "33kV");
    }

    #[test]
    fn builder_build_simple() {
        let mut builder = GraphBuilder::new();
        builder.add_component("S1", ComponentKind::Source);
        builder.add_component("F1", ComponentKind::Feeder);
        builder.connect("S1", "F1");

        let graph = builder.build().unwrap();
        assert_eq!(graph.components().len(), 2);
        assert_eq!(graph.connections().len(), 1);
        assert_eq!(graph.out_degree("S1").unwrap(), 1);
        assert_eq!(graph.in_degree("F1").unwrap(), 1);
    }

    #[test]
    fn adjacency_keeps_connection_order() {
        let a = NodeIx::from_index(0).unwrap();
        let b = NodeIx::from_index(1).unwrap();
        let c = NodeIx::from_index(2).unwrap();
        let (offsets, flat) = GraphBuilder::build_adjacency(3, &[(a, c), (b, a), (a, b)]);
        assert_eq!(offsets, vec![0, 2, 3, 3]);
        assert_eq!(flat, vec![c, b, a]);
    }

    #[test]
    fn builder_rejects_dangling_connection() {
        let mut builder = GraphBuilder::new();
        builder.add_component("F1", ComponentKind::Feeder);
        builder.connect("F1", "GHOST");
        assert!(matches!(
            builder.build(),
            Err(GraphError::ComponentNotFound { id, .. }) if id == "GHOST"
        ));
    }
}
