//! Node ordering / crossing minimization.
//!
//! Layer-by-layer sweep heuristic: a downward sweep reorders each layer by the positions of its
//! predecessors in the layer above, then an upward sweep reorders by successors in the layer
//! below. Sorting is stable, so ties keep their current relative order.

use crate::CrossingReduction;
use crate::model::LayeredGraph;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relationship {
    InEdges,
    OutEdges,
}

/// Runs `iterations` rounds of (down sweep, up sweep). Requires normalized layers.
pub fn run(g: &mut LayeredGraph, reduction: CrossingReduction, iterations: usize) {
    if reduction == CrossingReduction::None || g.layers.len() < 2 {
        return;
    }

    let layer_count = g.layers.len();
    for _ in 0..iterations {
        for i in 1..layer_count {
            sweep_layer(g, i, Relationship::InEdges, reduction);
        }
        for i in (0..layer_count - 1).rev() {
            sweep_layer(g, i, Relationship::OutEdges, reduction);
        }
    }
}

/// Reorders one layer by the score of each node against the adjacent fixed layer.
pub fn sweep_layer(
    g: &mut LayeredGraph,
    layer: usize,
    rel: Relationship,
    reduction: CrossingReduction,
) {
    let mut keyed: Vec<(f64, usize)> = g.layers[layer]
        .iter()
        .map(|&v| {
            let positions = neighbor_positions(g, v, rel);
            let score = match reduction {
                CrossingReduction::Median => median(positions),
                _ => barycenter(&positions),
            };
            (score, v)
        })
        .collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));

    for (pos, &(_, v)) in keyed.iter().enumerate() {
        g.nodes[v].position = pos;
    }
    g.layers[layer] = keyed.into_iter().map(|(_, v)| v).collect();
}

/// Positions of `v`'s neighbours in the adjacent layer (one entry per edge, so parallel edges
/// weigh in proportionally).
pub fn neighbor_positions(g: &LayeredGraph, v: usize, rel: Relationship) -> Vec<f64> {
    let layer = g.nodes[v].layer;
    match rel {
        Relationship::InEdges => g.nodes[v]
            .in_edges
            .iter()
            .map(|&e| &g.nodes[g.edges[e].source])
            .filter(|u| u.layer + 1 == layer)
            .map(|u| u.position as f64)
            .collect(),
        Relationship::OutEdges => g.nodes[v]
            .out_edges
            .iter()
            .map(|&e| &g.nodes[g.edges[e].target])
            .filter(|u| u.layer == layer + 1)
            .map(|u| u.position as f64)
            .collect(),
    }
}

/// Mean of `positions`; a node without neighbours in the fixed layer scores 0.
pub fn barycenter(positions: &[f64]) -> f64 {
    if positions.is_empty() {
        return 0.0;
    }
    positions.iter().sum::<f64>() / positions.len() as f64
}

/// Median of `positions` (mean of the two middle values for even counts); 0 when empty.
pub fn median(mut positions: Vec<f64>) -> f64 {
    if positions.is_empty() {
        return 0.0;
    }
    positions.sort_by(f64::total_cmp);
    let mid = positions.len() / 2;
    if positions.len() % 2 == 1 {
        positions[mid]
    } else {
        (positions[mid - 1] + positions[mid]) / 2.0
    }
}

/// Total number of edge crossings between adjacent layers in the current order.
pub fn cross_count(g: &LayeredGraph) -> usize {
    let mut cc = 0usize;
    for i in 1..g.layers.len() {
        cc += two_layer_cross_count(g, &g.layers[i - 1], &g.layers[i]);
    }
    cc
}

fn two_layer_cross_count(g: &LayeredGraph, north: &[usize], south: &[usize]) -> usize {
    if south.is_empty() {
        return 0;
    }

    // South positions of every north->south edge, grouped by north node in north order.
    let mut south_entries: Vec<usize> = Vec::new();
    for &v in north {
        let mut entries: Vec<usize> = g.nodes[v]
            .out_edges
            .iter()
            .map(|&e| &g.nodes[g.edges[e].target])
            .filter(|w| w.layer == g.nodes[v].layer + 1)
            .map(|w| w.position)
            .collect();
        entries.sort_unstable();
        south_entries.extend(entries);
    }

    // Accumulator tree over south positions.
    let mut first_index: usize = 1;
    while first_index < south.len() {
        first_index <<= 1;
    }
    let tree_size = 2 * first_index - 1;
    first_index -= 1;
    let mut tree: Vec<usize> = vec![0; tree_size];

    let mut cc = 0usize;
    for pos in south_entries {
        let mut index = pos + first_index;
        tree[index] += 1;
        let mut weight_sum = 0usize;
        while index > 0 {
            if index % 2 == 1 {
                weight_sum += tree[index + 1];
            }
            index = (index - 1) >> 1;
            tree[index] += 1;
        }
        cc += weight_sum;
    }
    cc
}
