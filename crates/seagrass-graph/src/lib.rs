#![forbid(unsafe_code)]

//! Graph snapshot APIs shared by the `seagrass` layout engines.
//!
//! Layouts never see a caller's graph store directly. They read it through [`GraphSource`] and
//! copy what they need into an [`IndexedGraph`], a dense, call-local view with both edge shapes
//! normalized into one `(a, b)` endpoint pair.

pub mod de;
mod indexed;
mod source;

pub use indexed::{IndexedEdge, IndexedGraph};
pub use source::{Edge, EdgeEnds, EdgeView, Endpoints, Graph, GraphSource, Node, NodeView};

/// Node id → position, in the source's node enumeration order.
pub type Positions = indexmap::IndexMap<String, Point>;

#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn distance_to(self, other: Point) -> f64 {
        Point::new(other.x - self.x, other.y - self.y).length()
    }

    /// Swaps the axes (`(x, y) -> (y, x)`).
    pub fn transposed(self) -> Self {
        Self {
            x: self.y,
            y: self.x,
        }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
