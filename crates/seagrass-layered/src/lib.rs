#![forbid(unsafe_code)]

//! Hierarchical (Sugiyama-style) layout.
//!
//! The pipeline runs six phases in a fixed order, each exposed as its own module so callers and
//! tests can drive a [`LayeredGraph`] step by step:
//!
//! 1. [`acyclic`]: reverse DFS back edges
//! 2. [`rank`]: longest-path layering
//! 3. [`normalize`]: dummy chains for long edges
//! 4. [`order`]: barycenter / median sweeps
//! 5. [`position`]: layer and in-layer coordinates
//! 6. [`coordinate_system`]: direction transform
//!
//! Cyclic, disconnected and empty graphs are all handled structurally; nothing here fails.

pub mod acyclic;
pub mod coordinate_system;
pub mod model;
pub mod normalize;
pub mod order;
pub mod position;
pub mod rank;

pub use model::{LayeredEdge, LayeredGraph, LayeredNode, NodeKind};

use seagrass_graph::{GraphSource, IndexedGraph, Positions, de};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    #[serde(alias = "tb")]
    TB,
    #[serde(alias = "bt")]
    BT,
    #[serde(alias = "lr")]
    LR,
    #[serde(alias = "rl")]
    RL,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrossingReduction {
    #[default]
    Barycentric,
    Median,
    None,
}

/// Options read from JSON. Missing keys and `null` take the default value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawHierarchicalOptions", rename_all = "camelCase")]
pub struct HierarchicalOptions {
    pub direction: Direction,
    pub layer_spacing: f64,
    pub node_spacing: f64,
    pub crossing_reduction: CrossingReduction,
    pub crossing_iterations: usize,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawHierarchicalOptions {
    direction: Option<Direction>,
    layer_spacing: Option<f64>,
    node_spacing: Option<f64>,
    crossing_reduction: Option<CrossingReduction>,
    #[serde(deserialize_with = "de::count")]
    crossing_iterations: Option<usize>,
}

impl From<RawHierarchicalOptions> for HierarchicalOptions {
    fn from(raw: RawHierarchicalOptions) -> Self {
        let d = Self::default();
        Self {
            direction: raw.direction.unwrap_or(d.direction),
            layer_spacing: raw.layer_spacing.unwrap_or(d.layer_spacing),
            node_spacing: raw.node_spacing.unwrap_or(d.node_spacing),
            crossing_reduction: raw.crossing_reduction.unwrap_or(d.crossing_reduction),
            crossing_iterations: raw.crossing_iterations.unwrap_or(d.crossing_iterations),
        }
    }
}

impl Default for HierarchicalOptions {
    fn default() -> Self {
        Self {
            direction: Direction::TB,
            layer_spacing: 100.0,
            node_spacing: 80.0,
            crossing_reduction: CrossingReduction::Barycentric,
            crossing_iterations: 10,
        }
    }
}

impl HierarchicalOptions {
    /// Spacings clamp to `>= 0`; non-finite spacings fall back to their defaults.
    pub fn clamped(self) -> Self {
        let defaults = Self::default();
        Self {
            layer_spacing: de::non_negative(self.layer_spacing, defaults.layer_spacing),
            node_spacing: de::non_negative(self.node_spacing, defaults.node_spacing),
            ..self
        }
    }
}

/// Diagnostics of one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayeredStats {
    pub layer_count: usize,
    pub reversed_edges: usize,
    pub dummy_nodes: usize,
    pub self_loops: usize,
    /// Adjacent-layer crossings in the final order.
    pub crossings: usize,
}

#[derive(Debug, Clone)]
pub struct LayeredOutput {
    pub positions: Positions,
    pub stats: LayeredStats,
}

#[derive(Debug, Clone, Default)]
pub struct LayeredLayout {
    options: HierarchicalOptions,
}

impl LayeredLayout {
    pub fn new(options: HierarchicalOptions) -> Self {
        Self {
            options: options.clamped(),
        }
    }

    pub fn options(&self) -> &HierarchicalOptions {
        &self.options
    }

    /// One position per real node, keyed by id in source order. Dummies never appear.
    pub fn compute<G: GraphSource + ?Sized>(&self, graph: &G) -> Positions {
        self.compute_detailed(graph).positions
    }

    pub fn compute_detailed<G: GraphSource + ?Sized>(&self, graph: &G) -> LayeredOutput {
        let ix = IndexedGraph::ingest(graph);
        let (g, stats) = self.run_phases(&ix);
        let positions = ix.positions(g.real_nodes().iter().map(LayeredNode::point));
        LayeredOutput { positions, stats }
    }

    /// Runs every phase and returns the final working graph (dummies included).
    pub fn build<G: GraphSource + ?Sized>(&self, graph: &G) -> LayeredGraph {
        let ix = IndexedGraph::ingest(graph);
        self.run_phases(&ix).0
    }

    fn run_phases(&self, ix: &IndexedGraph) -> (LayeredGraph, LayeredStats) {
        let opts = &self.options;
        let mut g = LayeredGraph::from_indexed(ix);

        let reversed_edges = acyclic::run(&mut g);
        let layer_count = rank::run(&mut g);
        normalize::run(&mut g);
        let dummy_nodes = g.dummy_count();
        tracing::debug!(
            reversed_edges,
            layer_count,
            dummy_nodes,
            self_loops = g.self_loop_count(),
            "layering done"
        );

        order::run(&mut g, opts.crossing_reduction, opts.crossing_iterations);
        let crossings = order::cross_count(&g);
        tracing::debug!(crossings, reduction = ?opts.crossing_reduction, "ordering done");

        position::run(&mut g, opts.layer_spacing, opts.node_spacing);
        coordinate_system::run(&mut g, opts.direction);

        let stats = LayeredStats {
            layer_count,
            reversed_edges,
            dummy_nodes,
            self_loops: g.self_loop_count(),
            crossings,
        };
        (g, stats)
    }
}
