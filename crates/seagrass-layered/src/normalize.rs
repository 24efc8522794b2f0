//! Normalize long edges by inserting dummy nodes.
//!
//! Every edge spanning more than one layer is replaced by a chain of dummy nodes, one per
//! intermediate layer, so ordering and positioning only ever deal with adjacent-layer edges. The
//! replaced edge stays in the arena (marked `split`) and each chain segment points back to it.

use crate::model::{LayeredGraph, NodeKind};

/// Inserts dummy chains, rebuilds the layer lists and returns the number of dummies created.
pub fn run(g: &mut LayeredGraph) -> usize {
    let before = g.nodes.len();
    let edge_count = g.edges.len();
    for e in 0..edge_count {
        normalize_edge(g, e);
    }
    g.rebuild_layers();
    g.nodes.len() - before
}

fn normalize_edge(g: &mut LayeredGraph, e: usize) {
    let edge = &g.edges[e];
    if edge.split {
        return;
    }
    let (v, w) = (edge.source, edge.target);
    let (v_layer, w_layer) = (g.nodes[v].layer, g.nodes[w].layer);
    if w_layer <= v_layer + 1 {
        return;
    }

    let id = edge.id.clone();
    let reversed = edge.reversed;
    g.split_edge(e);

    let mut prev = v;
    for (k, layer) in (v_layer + 1..w_layer).enumerate() {
        let dummy_id = format!("_d{}", g.nodes.len());
        let dummy = g.add_node(dummy_id, NodeKind::Dummy { edge: e }, layer);
        let seg = g.add_edge(format!("{id}/{k}"), prev, dummy, Some(e));
        g.edges[seg].reversed = reversed;
        prev = dummy;
    }
    let seg = g.add_edge(format!("{id}/{}", w_layer - v_layer - 1), prev, w, Some(e));
    g.edges[seg].reversed = reversed;
}
