use crate::{GraphSource, Point, Positions};
use rustc_hash::FxHashMap;

/// An edge with both endpoints resolved to node indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedEdge {
    pub id: String,
    pub a: usize,
    pub b: usize,
}

impl IndexedEdge {
    pub fn is_self_loop(&self) -> bool {
        self.a == self.b
    }
}

/// Dense, call-local copy of a [`GraphSource`].
///
/// Node indices follow the source's node enumeration order and edges keep the source's edge
/// order. Nothing here borrows from the source, so layouts are free to build their own working
/// structures from it without touching the caller's graph.
#[derive(Debug, Clone, Default)]
pub struct IndexedGraph {
    ids: Vec<String>,
    hints: Vec<Option<Point>>,
    edges: Vec<IndexedEdge>,
    id_to_idx: FxHashMap<String, usize>,
}

impl IndexedGraph {
    pub fn ingest<G: GraphSource + ?Sized>(source: &G) -> Self {
        let mut out = Self::default();

        for n in source.all_nodes() {
            if out.id_to_idx.contains_key(n.id) {
                tracing::debug!(node = n.id, "ignoring duplicate node id");
                continue;
            }
            out.id_to_idx.insert(n.id.to_string(), out.ids.len());
            out.ids.push(n.id.to_string());
            out.hints.push(n.hint.filter(|p| p.is_finite()));
        }

        let mut dropped = 0usize;
        for e in source.all_edges() {
            let (a, b) = e.ends.pair();
            let (Some(&a), Some(&b)) = (out.id_to_idx.get(a), out.id_to_idx.get(b)) else {
                tracing::debug!(edge = e.id, "dropping edge with a missing endpoint");
                dropped += 1;
                continue;
            };
            out.edges.push(IndexedEdge {
                id: e.id.to_string(),
                a,
                b,
            });
        }

        tracing::debug!(
            nodes = out.ids.len(),
            edges = out.edges.len(),
            dropped,
            "ingested graph snapshot"
        );
        out
    }

    pub fn node_count(&self) -> usize {
        self.ids.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn id(&self, idx: usize) -> &str {
        &self.ids[idx]
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.id_to_idx.get(id).copied()
    }

    pub fn hint(&self, idx: usize) -> Option<Point> {
        self.hints[idx]
    }

    pub fn edges(&self) -> &[IndexedEdge] {
        &self.edges
    }

    /// Zips node ids with `points` (indexed like the nodes) into the output map.
    pub fn positions<I>(&self, points: I) -> Positions
    where
        I: IntoIterator<Item = Point>,
    {
        self.ids.iter().cloned().zip(points).collect()
    }
}
