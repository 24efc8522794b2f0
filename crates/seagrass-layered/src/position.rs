//! Coordinate assignment in the top-to-bottom frame.

use crate::model::LayeredGraph;

/// Places layer `i` at `y = i * layer_spacing` and spreads each layer `node_spacing` apart,
/// centred on `x = 0` independently of the other layers.
pub fn run(g: &mut LayeredGraph, layer_spacing: f64, node_spacing: f64) {
    for (i, layer) in g.layers.iter().enumerate() {
        let y = i as f64 * layer_spacing;
        let half_span = layer.len().saturating_sub(1) as f64 / 2.0;
        for (pos, &v) in layer.iter().enumerate() {
            let node = &mut g.nodes[v];
            node.x = (pos as f64 - half_span) * node_spacing;
            node.y = y;
        }
    }
}
