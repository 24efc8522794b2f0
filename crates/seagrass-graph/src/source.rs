use crate::Point;
use serde::{Deserialize, Serialize};

/// Read-only query surface a layout needs from a graph store.
///
/// Enumeration order matters: layouts that break ties by order (cycle removal, crossing
/// reduction, random seeding) follow the order these iterators yield.
pub trait GraphSource {
    fn all_nodes(&self) -> impl Iterator<Item = NodeView<'_>>;
    fn all_edges(&self) -> impl Iterator<Item = EdgeView<'_>>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeView<'a> {
    pub id: &'a str,
    /// Existing position, if the store has one.
    pub hint: Option<Point>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeView<'a> {
    pub id: &'a str,
    pub ends: EdgeEnds<'a>,
}

/// Borrowed form of [`Endpoints`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeEnds<'a> {
    SourceTarget { source: &'a str, target: &'a str },
    SubjectObject { subject: &'a str, object: &'a str },
}

impl<'a> EdgeEnds<'a> {
    /// Normalized `(endpoint_a, endpoint_b)`; `subject`/`object` map onto `source`/`target`.
    pub fn pair(&self) -> (&'a str, &'a str) {
        match *self {
            EdgeEnds::SourceTarget { source, target } => (source, target),
            EdgeEnds::SubjectObject { subject, object } => (subject, object),
        }
    }
}

/// The two edge shapes a graph store may expose.
///
/// In JSON the variant is picked from the keys present on the edge object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Endpoints {
    SourceTarget { source: String, target: String },
    SubjectObject { subject: String, object: String },
}

impl Endpoints {
    pub fn as_ends(&self) -> EdgeEnds<'_> {
        match self {
            Endpoints::SourceTarget { source, target } => EdgeEnds::SourceTarget {
                source: source.as_str(),
                target: target.as_str(),
            },
            Endpoints::SubjectObject { subject, object } => EdgeEnds::SubjectObject {
                subject: subject.as_str(),
                object: object.as_str(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

impl Node {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            x: None,
            y: None,
        }
    }

    pub fn at(id: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            x: Some(x),
            y: Some(y),
        }
    }

    /// A hint exists only when both coordinates are present and finite.
    pub fn hint(&self) -> Option<Point> {
        match (self.x, self.y) {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => Some(Point { x, y }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    #[serde(default)]
    pub id: String,
    #[serde(flatten)]
    pub endpoints: Endpoints,
}

/// Owned graph snapshot, mirroring the JSON accepted by the CLI.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_node(mut self, id: impl Into<String>) -> Self {
        self.nodes.push(Node::new(id));
        self
    }

    pub fn with_node_at(mut self, id: impl Into<String>, x: f64, y: f64) -> Self {
        self.nodes.push(Node::at(id, x, y));
        self
    }

    pub fn with_nodes<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.nodes.extend(ids.into_iter().map(Node::new));
        self
    }

    /// Adds a `source -> target` edge; the id is `"{source}->{target}"` plus a suffix when taken.
    pub fn with_edge(self, source: impl Into<String>, target: impl Into<String>) -> Self {
        let endpoints = Endpoints::SourceTarget {
            source: source.into(),
            target: target.into(),
        };
        self.push_edge(endpoints)
    }

    /// Adds an RDF-style `subject -> object` edge.
    pub fn with_triple(self, subject: impl Into<String>, object: impl Into<String>) -> Self {
        let endpoints = Endpoints::SubjectObject {
            subject: subject.into(),
            object: object.into(),
        };
        self.push_edge(endpoints)
    }

    /// Adds every consecutive pair of `path` as an edge.
    pub fn with_path(mut self, path: &[&str]) -> Self {
        for pair in path.windows(2) {
            self = self.with_edge(pair[0], pair[1]);
        }
        self
    }

    fn push_edge(mut self, endpoints: Endpoints) -> Self {
        let (a, b) = endpoints.as_ends().pair();
        let base = format!("{a}->{b}");
        let mut id = base.clone();
        let mut i = 1usize;
        while self.edges.iter().any(|e| e.id == id) {
            id = format!("{base}#{i}");
            i += 1;
        }
        self.edges.push(Edge { id, endpoints });
        self
    }
}

impl GraphSource for Graph {
    fn all_nodes(&self) -> impl Iterator<Item = NodeView<'_>> {
        self.nodes.iter().map(|n| NodeView {
            id: n.id.as_str(),
            hint: n.hint(),
        })
    }

    fn all_edges(&self) -> impl Iterator<Item = EdgeView<'_>> {
        self.edges.iter().map(|e| EdgeView {
            id: e.id.as_str(),
            ends: e.endpoints.as_ends(),
        })
    }
}
