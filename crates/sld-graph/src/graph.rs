//! Core graph data structures.

use std::collections::{BTreeMap, HashMap};

use sld_core::{ComponentKind, NodeIx, SldError, SldResult};

/// Attribute key carrying the nameplate voltage of a component.
pub const VOLTAGE_ATTRIBUTE: &str = "voltage";

/// Voltage assumed when a component carries no `voltage` attribute.
pub const DEFAULT_VOLTAGE: &str = "11kV";

/// A piece of equipment on the diagram (graph node).
///
/// `kind` is optional at this layer so that a record which lost its type
/// during ingestion can still be carried into the graph and reported as
/// malformed by whoever needs the kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub id: String,
    pub kind: Option<ComponentKind>,
    pub attributes: BTreeMap<String, String>,
}

impl Component {
    pub fn new(id: impl Into<String>, kind: Option<ComponentKind>) -> Self {
        Self {
            id: id.into(),
            kind,
            attributes: BTreeMap::new(),
        }
    }

    /// Set an attribute, replacing any previous value.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Required kind of the component.
    pub fn kind(&self) -> SldResult<&ComponentKind> {
        self.kind.as_ref().ok_or_else(|| SldError::MalformedComponent {
            id: self.id.clone(),
            missing: "kind",
        })
    }

    /// True when the component is declared with exactly this kind.
    pub fn is_kind(&self, kind: &ComponentKind) -> bool {
        self.kind.as_ref() == Some(kind)
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Nameplate voltage, or [`DEFAULT_VOLTAGE`] when the attribute is absent.
    pub fn voltage(&self) -> &str {
        self.attribute(VOLTAGE_ATTRIBUTE).unwrap_or(DEFAULT_VOLTAGE)
    }
}

/// Directed power-flow link from an upstream to a downstream component.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Connection {
    pub from: String,
    pub to: String,
}

impl Connection {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// The graph: a validated, immutable collection of components and connections.
///
/// The graph stores:
/// - All components and connections in insertion order.
/// - Compact adjacency in both directions: for each component, the indices
///   of its downstream targets and of its upstream sources, one entry per
///   connection (parallel connections are not merged).
#[derive(Debug, Clone)]
pub struct Graph {
    pub(crate) components: Vec<Component>,
    pub(crate) connections: Vec<Connection>,
    pub(crate) index: HashMap<String, NodeIx>,

    /// Component i's targets are in out_targets[out_offsets[i]..out_offsets[i+1]].
    pub(crate) out_offsets: Vec<usize>,
    pub(crate) out_targets: Vec<NodeIx>,

    /// Component i's sources are in in_sources[in_offsets[i]..in_offsets[i+1]].
    pub(crate) in_offsets: Vec<usize>,
    pub(crate) in_sources: Vec<NodeIx>,
}

impl Graph {
    /// Return all components in insertion order.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Return all connections in insertion order.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Look up a component by id.
    pub fn component(&self, id: &str) -> SldResult<&Component> {
        let ix = self.ix(id)?;
        Ok(&self.components[ix.slot()])
    }

    /// Downstream neighbours, in connection order.
    pub fn successors(&self, id: &str) -> SldResult<Neighbors<'_>> {
        let slot = self.ix(id)?.slot();
        let range = self.out_offsets[slot]..self.out_offsets[slot + 1];
        Ok(Neighbors {
            components: &self.components,
            ixs: self.out_targets[range].iter(),
        })
    }

    /// Upstream neighbours, in connection order.
    pub fn predecessors(&self, id: &str) -> SldResult<Neighbors<'_>> {
        let slot = self.ix(id)?.slot();
        let range = self.in_offsets[slot]..self.in_offsets[slot + 1];
        Ok(Neighbors {
            components: &self.components,
            ixs: self.in_sources[range].iter(),
        })
    }

    /// Number of outgoing connections.
    pub fn out_degree(&self, id: &str) -> SldResult<usize> {
        let slot = self.ix(id)?.slot();
        Ok(self.out_offsets[slot + 1] - self.out_offsets[slot])
    }

    /// Number of incoming connections.
    pub fn in_degree(&self, id: &str) -> SldResult<usize> {
        let slot = self.ix(id)?.slot();
        Ok(self.in_offsets[slot + 1] - self.in_offsets[slot])
    }

    /// Incoming plus outgoing connections. A self-loop counts twice.
    pub fn degree(&self, id: &str) -> SldResult<usize> {
        Ok(self.in_degree(id)? + self.out_degree(id)?)
    }

    fn ix(&self, id: &str) -> SldResult<NodeIx> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| SldError::ComponentNotFound {
                id: id.to_string(),
                context: "graph lookup".to_string(),
            })
    }
}

/// Iterator over the neighbours of one component.
#[derive(Debug, Clone)]
pub struct Neighbors<'g> {
    components: &'g [Component],
    ixs: std::slice::Iter<'g, NodeIx>,
}

impl<'g> Iterator for Neighbors<'g> {
    type Item = &'g Component;

    fn next(&mut self) -> Option<Self::Item> {
        let components = self.components;
        self.ixs.next().map(move |ix| &components[ix.slot()])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ixs.size_hint()
    }
}

impl ExactSizeIterator for Neighbors<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn voltage_defaults_when_absent() {
        let mut feeder = Component::new("F1", Some(ComponentKind::Feeder));
        assert_eq!(feeder.voltage(), DEFAULT_VOLTAGE);

        feeder.set_attribute(VOLTAGE_ATTRIBUTE, "33kV");
        assert_eq!(feeder.voltage(), "33kV");
    }

    #[test]
    fn missing_kind_is_malformed() {
        let comp = Component::new("X1", None);
        let err = comp.kind().unwrap_err();
        assert_eq!(
            err,
            SldError::MalformedComponent {
                id: "X1".to_string(),
                missing: "kind",
            }
        );
    }

    #[test]
    fn connection_equality() {
        assert_eq!(Connection::new("A", "B"), Connection::new("A", "B"));
        assert_ne!(Connection::new("A", "B"), Connection::new("B", "A"));
    }
}
