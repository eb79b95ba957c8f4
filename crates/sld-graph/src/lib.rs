//! sld-graph: graph/model layer for single-line diagrams.
//!
//! Provides:
//! - Core graph data structures (Component, Connection, Graph)
//! - Incremental graph builder with validation
//! - The four adjacency queries the rule engine needs: successors,
//!   predecessors, out-degree and total degree
//!
//! # Example
//!
//! ```
//! use sld_core::ComponentKind;
//! use sld_graph::GraphBuilder;
//!
//! let mut builder = GraphBuilder::new();
//! builder.add_component("F1", ComponentKind::Feeder);
//! builder.add_component("L1", ComponentKind::Load);
//! builder.connect("F1", "L1");
//! let graph = builder.build().unwrap();
//!
//! assert_eq!(graph.components().len(), 2);
//! assert_eq!(graph.out_degree("F1").unwrap(), 1);
//! ```

pub mod builder;
pub mod error;
pub mod graph;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::GraphBuilder;
pub use error::GraphError;
pub use graph::{Component, Connection, DEFAULT_VOLTAGE, Graph, Neighbors, VOLTAGE_ATTRIBUTE};
