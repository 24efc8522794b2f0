use seagrass_graph::{EdgeEnds, Endpoints, Graph, GraphSource, IndexedGraph, Point};

#[test]
fn graph_json_accepts_both_edge_shapes() {
    let g: Graph = serde_json::from_str(
        r#"{
            "nodes": [{"id": "a"}, {"id": "b", "x": 1.5, "y": -2.0}],
            "edges": [
                {"id": "e1", "source": "a", "target": "b"},
                {"id": "e2", "subject": "b", "object": "a"}
            ]
        }"#,
    )
    .unwrap();

    assert_eq!(
        g.edges[0].endpoints,
        Endpoints::SourceTarget {
            source: "a".to_string(),
            target: "b".to_string(),
        }
    );
    assert_eq!(
        g.edges[1].endpoints,
        Endpoints::SubjectObject {
            subject: "b".to_string(),
            object: "a".to_string(),
        }
    );
    assert_eq!(g.nodes[0].hint(), None);
    assert_eq!(g.nodes[1].hint(), Some(Point::new(1.5, -2.0)));
}

#[test]
fn graph_json_rejects_edges_without_a_known_shape() {
    let err = serde_json::from_str::<Graph>(
        r#"{"nodes": [{"id": "a"}], "edges": [{"id": "e1", "from": "a", "to": "a"}]}"#,
    );
    assert!(err.is_err());
}

#[test]
fn edge_ends_pair_normalizes_subject_object() {
    let ends = EdgeEnds::SubjectObject {
        subject: "s",
        object: "o",
    };
    assert_eq!(ends.pair(), ("s", "o"));
}

#[test]
fn node_hint_requires_both_coordinates() {
    let g: Graph = serde_json::from_str(r#"{"nodes": [{"id": "a", "x": 3.0}]}"#).unwrap();
    assert_eq!(g.nodes[0].hint(), None);
}

#[test]
fn builder_assigns_unique_edge_ids_for_parallel_edges() {
    let g = Graph::new()
        .with_nodes(["a", "b"])
        .with_edge("a", "b")
        .with_edge("a", "b");
    let ids: Vec<&str> = g.all_edges().map(|e| e.id).collect();
    assert_eq!(ids, vec!["a->b", "a->b#1"]);
}

#[test]
fn ingest_preserves_enumeration_order() {
    let g = Graph::new()
        .with_nodes(["c", "a", "b"])
        .with_edge("a", "b")
        .with_triple("b", "c");
    let ix = IndexedGraph::ingest(&g);

    assert_eq!(ix.ids(), ["c", "a", "b"]);
    assert_eq!(ix.index_of("a"), Some(1));
    let pairs: Vec<(usize, usize)> = ix.edges().iter().map(|e| (e.a, e.b)).collect();
    assert_eq!(pairs, vec![(1, 2), (2, 0)]);
}

#[test]
fn ingest_drops_edges_with_missing_endpoints() {
    let g = Graph::new()
        .with_nodes(["a", "b"])
        .with_edge("a", "b")
        .with_edge("a", "ghost")
        .with_triple("ghost", "b");
    let ix = IndexedGraph::ingest(&g);

    assert_eq!(ix.edge_count(), 1);
    assert_eq!(ix.edges()[0].id, "a->b");
}

#[test]
fn ingest_keeps_first_duplicate_node() {
    let g = Graph::new().with_node_at("a", 1.0, 2.0).with_node_at("a", 9.0, 9.0);
    let ix = IndexedGraph::ingest(&g);

    assert_eq!(ix.node_count(), 1);
    assert_eq!(ix.hint(0), Some(Point::new(1.0, 2.0)));
}

#[test]
fn ingest_keeps_self_loops_and_parallel_edges() {
    let g = Graph::new()
        .with_nodes(["a", "b"])
        .with_edge("a", "a")
        .with_edge("a", "b")
        .with_edge("a", "b");
    let ix = IndexedGraph::ingest(&g);

    assert_eq!(ix.edge_count(), 3);
    assert!(ix.edges()[0].is_self_loop());
}

#[test]
fn positions_zip_ids_in_node_order() {
    let g = Graph::new().with_nodes(["x", "y"]);
    let ix = IndexedGraph::ingest(&g);
    let out = ix.positions([Point::new(1.0, 1.0), Point::new(2.0, 2.0)]);

    let keys: Vec<&String> = out.keys().collect();
    assert_eq!(keys, ["x", "y"]);
    assert_eq!(out["y"], Point::new(2.0, 2.0));
}
