//! Coordinate system adjustment.
//!
//! Layering and positioning assume a top-to-bottom frame. Other directions are produced at the
//! very end: bottom-to-top mirrors y, left-to-right swaps the axes and right-to-left does both.

use crate::Direction;
use crate::model::LayeredGraph;
use seagrass_graph::Point;

pub fn run(g: &mut LayeredGraph, direction: Direction) {
    if direction == Direction::TB {
        return;
    }
    for n in &mut g.nodes {
        let p = transform(Point::new(n.x, n.y), direction);
        n.x = p.x;
        n.y = p.y;
    }
}

/// Maps a point from the top-to-bottom frame into `direction`.
pub fn transform(p: Point, direction: Direction) -> Point {
    let p = match direction {
        Direction::BT | Direction::RL => reverse_y(p),
        Direction::TB | Direction::LR => p,
    };
    match direction {
        Direction::LR | Direction::RL => p.transposed(),
        Direction::TB | Direction::BT => p,
    }
}

fn reverse_y(p: Point) -> Point {
    Point::new(p.x, -p.y)
}
