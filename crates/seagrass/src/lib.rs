#![forbid(unsafe_code)]

//! Graph layout engine.
//!
//! Two interchangeable layouts read the same [`GraphSource`] snapshot and return one position
//! per node:
//!
//! - `hierarchical`: layered (Sugiyama-style) drawing for directed, mostly acyclic graphs
//! - `organic`: Barnes-Hut force-directed drawing for general graphs
//!
//! Pick one by name with a JSON configuration object:
//!
//! ```
//! use seagrass::Graph;
//! use serde_json::json;
//!
//! let graph = Graph::new().with_nodes(["a", "b"]).with_edge("a", "b");
//! let positions = seagrass::layout(&graph, &json!({ "type": "hierarchical" })).unwrap();
//! assert_eq!(positions["b"].y, 100.0);
//! ```

pub mod config;
pub mod error;

pub use config::{LayoutConfig, LayoutKind};
pub use error::{Error, Result};
pub use seagrass_graph::{
    Edge, EdgeEnds, EdgeView, Endpoints, Graph, GraphSource, IndexedGraph, Node, NodeView, Point,
    Positions,
};
pub use seagrass_layered::{
    CrossingReduction, Direction, HierarchicalOptions, LayeredLayout, LayeredOutput, LayeredStats,
};
pub use seagrass_organic::{
    CancelFlag, OrganicLayout, OrganicOptions, OrganicRun, Progress, RunControl, StopReason,
};

/// A ready-to-run layout engine.
#[derive(Debug, Clone)]
pub enum Layout {
    Hierarchical(LayeredLayout),
    Organic(OrganicLayout),
}

impl Default for Layout {
    fn default() -> Self {
        Self::from_config(LayoutConfig::default())
    }
}

impl From<LayoutConfig> for Layout {
    fn from(config: LayoutConfig) -> Self {
        Self::from_config(config)
    }
}

impl Layout {
    pub fn from_config(config: LayoutConfig) -> Self {
        match config {
            LayoutConfig::Hierarchical(opts) => Self::Hierarchical(LayeredLayout::new(opts)),
            LayoutConfig::Organic(opts) => Self::Organic(OrganicLayout::new(opts)),
        }
    }

    pub fn from_value(value: &serde_json::Value) -> Result<Self> {
        LayoutConfig::from_value(value).map(Self::from_config)
    }

    pub fn kind(&self) -> LayoutKind {
        match self {
            Self::Hierarchical(_) => LayoutKind::Hierarchical,
            Self::Organic(_) => LayoutKind::Organic,
        }
    }

    pub fn compute<G: GraphSource + ?Sized>(&self, graph: &G) -> Positions {
        let _span = tracing::debug_span!("layout", kind = %self.kind()).entered();
        match self {
            Self::Hierarchical(l) => l.compute(graph),
            Self::Organic(l) => l.compute(graph),
        }
    }
}

/// One-shot entry point: resolve `config` and lay out `graph`.
pub fn layout<G>(graph: &G, config: &serde_json::Value) -> Result<Positions>
where
    G: GraphSource + ?Sized,
{
    Ok(Layout::from_value(config)?.compute(graph))
}
