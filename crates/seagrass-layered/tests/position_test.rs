use seagrass_graph::{Graph, IndexedGraph};
use seagrass_layered::{LayeredGraph, acyclic, normalize, position, rank};

fn positioned(g: &Graph, layer_spacing: f64, node_spacing: f64) -> LayeredGraph {
    let mut g = LayeredGraph::from_indexed(&IndexedGraph::ingest(g));
    acyclic::run(&mut g);
    rank::run(&mut g);
    normalize::run(&mut g);
    position::run(&mut g, layer_spacing, node_spacing);
    g
}

fn xy(g: &LayeredGraph, id: &str) -> (f64, f64) {
    let n = &g.nodes[g.find(id).unwrap()];
    (n.x, n.y)
}

#[test]
fn position_centres_a_single_layer_on_the_origin() {
    let g = positioned(&Graph::new().with_nodes(["a", "b", "c"]), 100.0, 80.0);
    assert_eq!(xy(&g, "a"), (-80.0, 0.0));
    assert_eq!(xy(&g, "b"), (0.0, 0.0));
    assert_eq!(xy(&g, "c"), (80.0, 0.0));
}

#[test]
fn position_centres_each_layer_independently() {
    let g = positioned(
        &Graph::new()
            .with_nodes(["a", "b", "c"])
            .with_edge("a", "b")
            .with_edge("a", "c"),
        100.0,
        80.0,
    );
    assert_eq!(xy(&g, "a"), (0.0, 0.0));
    assert_eq!(xy(&g, "b"), (-40.0, 100.0));
    assert_eq!(xy(&g, "c"), (40.0, 100.0));
}

#[test]
fn position_uses_the_configured_spacing() {
    let g = positioned(
        &Graph::new().with_nodes(["a", "b", "c"]).with_path(&["a", "b"]).with_edge("a", "c"),
        30.0,
        10.0,
    );
    assert_eq!(xy(&g, "b"), (-5.0, 30.0));
    assert_eq!(xy(&g, "c"), (5.0, 30.0));
}

#[test]
fn dummies_take_a_slot_in_their_layer() {
    let g = positioned(
        &Graph::new()
            .with_nodes(["a", "b", "c"])
            .with_path(&["a", "b", "c"])
            .with_edge("a", "c"),
        100.0,
        80.0,
    );
    assert_eq!(xy(&g, "b"), (-40.0, 100.0));
    assert_eq!((g.nodes[3].x, g.nodes[3].y), (40.0, 100.0));
}
