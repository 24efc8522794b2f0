//! Arena-owned working graph for one hierarchical layout run.
//!
//! Everything here is rebuilt from an [`IndexedGraph`] per call. Real nodes occupy the leading
//! indices in source enumeration order; dummy nodes are appended after them.

use seagrass_graph::{IndexedGraph, Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// A node of the source graph (its index in the ingested snapshot).
    Real { source: usize },
    /// One layer crossing of a long edge (index of the replaced [`LayeredEdge`]).
    Dummy { edge: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayeredNode {
    pub id: String,
    pub kind: NodeKind,
    pub layer: usize,
    /// Order within the layer.
    pub position: usize,
    pub x: f64,
    pub y: f64,
    pub in_edges: Vec<usize>,
    pub out_edges: Vec<usize>,
}

impl LayeredNode {
    pub fn is_dummy(&self) -> bool {
        matches!(self.kind, NodeKind::Dummy { .. })
    }

    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayeredEdge {
    pub id: String,
    pub source: usize,
    pub target: usize,
    pub reversed: bool,
    /// Set on dummy-chain segments: the long edge this segment stands in for.
    pub original: Option<usize>,
    /// The edge was replaced by a dummy chain and no longer takes part in the adjacency lists.
    pub split: bool,
}

#[derive(Debug, Clone, Default)]
pub struct LayeredGraph {
    pub nodes: Vec<LayeredNode>,
    pub edges: Vec<LayeredEdge>,
    /// Node indices per layer, in crossing-minimization order. Filled by [`Self::rebuild_layers`].
    pub layers: Vec<Vec<usize>>,
    real_count: usize,
    self_loops: usize,
}

impl LayeredGraph {
    /// Copies nodes and edges out of the snapshot. Self-loops cannot influence layering and are
    /// left out of the working edge set.
    pub fn from_indexed(ix: &IndexedGraph) -> Self {
        let mut g = Self {
            nodes: Vec::with_capacity(ix.node_count()),
            edges: Vec::with_capacity(ix.edge_count()),
            layers: Vec::new(),
            real_count: ix.node_count(),
            self_loops: 0,
        };

        for (idx, id) in ix.ids().iter().enumerate() {
            g.nodes.push(LayeredNode {
                id: id.clone(),
                kind: NodeKind::Real { source: idx },
                layer: 0,
                position: 0,
                x: 0.0,
                y: 0.0,
                in_edges: Vec::new(),
                out_edges: Vec::new(),
            });
        }

        for e in ix.edges() {
            if e.is_self_loop() {
                g.self_loops += 1;
                continue;
            }
            g.add_edge(e.id.clone(), e.a, e.b, None);
        }
        g
    }

    pub fn self_loop_count(&self) -> usize {
        self.self_loops
    }

    pub fn dummy_count(&self) -> usize {
        self.nodes.len() - self.real_count
    }

    pub fn real_nodes(&self) -> &[LayeredNode] {
        &self.nodes[..self.real_count]
    }

    /// Looks a real node up by its source id.
    pub fn find(&self, id: &str) -> Option<usize> {
        self.real_nodes().iter().position(|n| n.id == id)
    }

    pub fn layer_of(&self, id: &str) -> Option<usize> {
        self.find(id).map(|v| self.nodes[v].layer)
    }

    /// Edges still part of the working set (long edges replaced by chains are skipped).
    pub fn active_edges(&self) -> impl Iterator<Item = (usize, &LayeredEdge)> {
        self.edges.iter().enumerate().filter(|(_, e)| !e.split)
    }

    pub fn add_node(&mut self, id: String, kind: NodeKind, layer: usize) -> usize {
        let v = self.nodes.len();
        self.nodes.push(LayeredNode {
            id,
            kind,
            layer,
            position: 0,
            x: 0.0,
            y: 0.0,
            in_edges: Vec::new(),
            out_edges: Vec::new(),
        });
        v
    }

    pub fn add_edge(
        &mut self,
        id: String,
        source: usize,
        target: usize,
        original: Option<usize>,
    ) -> usize {
        let e = self.edges.len();
        self.edges.push(LayeredEdge {
            id,
            source,
            target,
            reversed: false,
            original,
            split: false,
        });
        self.nodes[source].out_edges.push(e);
        self.nodes[target].in_edges.push(e);
        e
    }

    /// Swaps the direction of `e` in place and flips the adjacency bookkeeping.
    pub fn reverse_edge(&mut self, e: usize) {
        self.detach_edge(e);
        let edge = &mut self.edges[e];
        (edge.source, edge.target) = (edge.target, edge.source);
        edge.reversed = !edge.reversed;
        let (source, target) = (edge.source, edge.target);
        self.nodes[source].out_edges.push(e);
        self.nodes[target].in_edges.push(e);
    }

    /// Removes `e` from the working set (the arena slot stays so indices remain stable).
    pub fn split_edge(&mut self, e: usize) {
        self.detach_edge(e);
        self.edges[e].split = true;
    }

    fn detach_edge(&mut self, e: usize) {
        let (source, target) = (self.edges[e].source, self.edges[e].target);
        self.nodes[source].out_edges.retain(|&x| x != e);
        self.nodes[target].in_edges.retain(|&x| x != e);
    }

    /// Groups nodes by `layer` (arena order within a layer) and resets `position`.
    pub fn rebuild_layers(&mut self) {
        let layer_count = self.nodes.iter().map(|n| n.layer + 1).max().unwrap_or(0);
        let mut layers: Vec<Vec<usize>> = vec![Vec::new(); layer_count];
        for (v, n) in self.nodes.iter().enumerate() {
            layers[n.layer].push(v);
        }
        for layer in &layers {
            for (pos, &v) in layer.iter().enumerate() {
                self.nodes[v].position = pos;
            }
        }
        self.layers = layers;
    }

    /// Ids of one layer in its current order (dummy ids included).
    pub fn layer_ids(&self, layer: usize) -> Vec<&str> {
        self.layers
            .get(layer)
            .map(|vs| vs.iter().map(|&v| self.nodes[v].id.as_str()).collect())
            .unwrap_or_default()
    }
}
