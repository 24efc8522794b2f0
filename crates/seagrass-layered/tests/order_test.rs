use seagrass_graph::{Graph, IndexedGraph};
use seagrass_layered::order::{self, Relationship};
use seagrass_layered::{CrossingReduction, LayeredGraph, acyclic, normalize, rank};

fn layered(g: &Graph) -> LayeredGraph {
    let mut g = LayeredGraph::from_indexed(&IndexedGraph::ingest(g));
    acyclic::run(&mut g);
    rank::run(&mut g);
    normalize::run(&mut g);
    g
}

fn crossed() -> LayeredGraph {
    layered(
        &Graph::new()
            .with_nodes(["a", "b", "c", "d"])
            .with_edge("a", "d")
            .with_edge("b", "c"),
    )
}

#[test]
fn barycenter_is_the_mean_and_zero_without_neighbours() {
    assert_eq!(order::barycenter(&[]), 0.0);
    assert_eq!(order::barycenter(&[1.0, 2.0, 6.0]), 3.0);
}

#[test]
fn median_picks_the_middle_value() {
    assert_eq!(order::median(vec![]), 0.0);
    assert_eq!(order::median(vec![5.0, 0.0, 1.0]), 1.0);
    assert_eq!(order::median(vec![4.0, 0.0, 1.0, 2.0]), 1.5);
}

#[test]
fn cross_count_counts_crossings_between_adjacent_layers() {
    let g = crossed();
    assert_eq!(g.layer_ids(0), vec!["a", "b"]);
    assert_eq!(g.layer_ids(1), vec!["c", "d"]);
    assert_eq!(order::cross_count(&g), 1);
}

#[test]
fn cross_count_of_a_complete_bipartite_pair() {
    let g = layered(
        &Graph::new()
            .with_nodes(["a", "b", "c", "d"])
            .with_edge("a", "c")
            .with_edge("a", "d")
            .with_edge("b", "c")
            .with_edge("b", "d"),
    );
    assert_eq!(order::cross_count(&g), 1);
}

#[test]
fn barycentric_sweeps_remove_a_simple_crossing() {
    let mut g = crossed();
    order::run(&mut g, CrossingReduction::Barycentric, 1);

    assert_eq!(g.layer_ids(1), vec!["d", "c"]);
    assert_eq!(order::cross_count(&g), 0);
    let d = g.find("d").unwrap();
    assert_eq!(g.nodes[d].position, 0);
}

#[test]
fn median_sweeps_remove_a_simple_crossing() {
    let mut g = crossed();
    order::run(&mut g, CrossingReduction::Median, 3);
    assert_eq!(order::cross_count(&g), 0);
}

#[test]
fn none_keeps_the_initial_order() {
    let mut g = crossed();
    order::run(&mut g, CrossingReduction::None, 10);
    assert_eq!(g.layer_ids(1), vec!["c", "d"]);
    assert_eq!(order::cross_count(&g), 1);
}

#[test]
fn zero_iterations_keep_the_initial_order() {
    let mut g = crossed();
    order::run(&mut g, CrossingReduction::Barycentric, 0);
    assert_eq!(g.layer_ids(1), vec!["c", "d"]);
}

#[test]
fn ties_keep_insertion_order() {
    let mut g = layered(
        &Graph::new()
            .with_nodes(["root", "x", "y", "z"])
            .with_edge("root", "x")
            .with_edge("root", "y")
            .with_edge("root", "z"),
    );
    order::sweep_layer(&mut g, 1, Relationship::InEdges, CrossingReduction::Barycentric);
    assert_eq!(g.layer_ids(1), vec!["x", "y", "z"]);
}

#[test]
fn layer_sorts_by_predecessor_barycenter() {
    let mut g = layered(
        &Graph::new()
            .with_nodes(["a", "b", "c", "orphan"])
            .with_edge("a", "c")
            .with_edge("b", "c")
            .with_edge("a", "orphan"),
    );
    // layer 1 starts as [c, orphan]; c sits at 0.5, orphan at 0.
    order::sweep_layer(&mut g, 1, Relationship::InEdges, CrossingReduction::Barycentric);
    assert_eq!(g.layer_ids(1), vec!["orphan", "c"]);
}
