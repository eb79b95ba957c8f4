//! Kind-resolved view of a graph.

use sld_core::{ComponentKind, SldResult};
use sld_graph::{Component, Graph};

/// Components grouped by kind, in graph order.
///
/// Building the inventory resolves every component's kind exactly once, so a
/// missing kind fails here before any rule or score is computed.
#[derive(Debug, Clone)]
pub struct Inventory<'g> {
    pub graph: &'g Graph,
    pub sources: Vec<&'g Component>,
    pub feeders: Vec<&'g Component>,
    pub breakers: Vec<&'g Component>,
    pub transformers: Vec<&'g Component>,
    pub loads: Vec<&'g Component>,
}

impl<'g> Inventory<'g> {
    pub fn new(graph: &'g Graph) -> SldResult<Self> {
        let mut inv = Self {
            graph,
            sources: Vec::new(),
            feeders: Vec::new(),
            breakers: Vec::new(),
            transformers: Vec::new(),
            loads: Vec::new(),
        };

        for comp in graph.components() {
            match comp.kind()? {
                ComponentKind::Source => inv.sources.push(comp),
                ComponentKind::Feeder => inv.feeders.push(comp),
                ComponentKind::Breaker => inv.breakers.push(comp),
                ComponentKind::Transformer => inv.transformers.push(comp),
                ComponentKind::Load => inv.loads.push(comp),
                ComponentKind::Other(_) => {}
            }
        }

        Ok(inv)
    }

    /// Direct downstream neighbours of `comp` that are loads, in connection order.
    pub fn load_successors(&self, comp: &Component) -> SldResult<Vec<&'g Component>> {
        Ok(self
            .graph
            .successors(&comp.id)?
            .filter(|c| c.is_kind(&ComponentKind::Load))
            .collect())
    }

    /// True when any direct upstream neighbour of `comp` is a breaker.
    pub fn has_breaker_upstream(&self, comp: &Component) -> SldResult<bool> {
        Ok(self
            .graph
            .predecessors(&comp.id)?
            .any(|c| c.is_kind(&ComponentKind::Breaker)))
    }
}
