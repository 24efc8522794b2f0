//! Layer assignment (longest path from the sources).
//!
//! Runs on the acyclic working graph. Zero-in-degree nodes seed layer 0 and every other node
//! lands one layer below its deepest predecessor (Kahn order, so a node is final once dequeued).

use crate::model::LayeredGraph;
use std::collections::VecDeque;

/// Assigns `layer` to every node and returns the number of layers.
pub fn run(g: &mut LayeredGraph) -> usize {
    let n = g.nodes.len();
    let mut indegree: Vec<usize> = g.nodes.iter().map(|node| node.in_edges.len()).collect();
    let mut layer: Vec<usize> = vec![0; n];

    let mut queue: VecDeque<usize> = (0..n).filter(|&v| indegree[v] == 0).collect();
    let mut finalized = 0usize;
    while let Some(v) = queue.pop_front() {
        finalized += 1;
        for &e in &g.nodes[v].out_edges {
            let w = g.edges[e].target;
            layer[w] = layer[w].max(layer[v] + 1);
            indegree[w] -= 1;
            if indegree[w] == 0 {
                queue.push_back(w);
            }
        }
    }
    if finalized < n {
        // Only reachable when the graph still has a cycle; those nodes keep layer 0.
        tracing::debug!(unreached = n - finalized, "nodes left unranked");
    }

    for (node, l) in g.nodes.iter_mut().zip(layer) {
        node.layer = l;
    }
    g.nodes.iter().map(|node| node.layer + 1).max().unwrap_or(0)
}
