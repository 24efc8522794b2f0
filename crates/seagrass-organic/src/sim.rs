use crate::OrganicOptions;
use crate::quadtree::QuadTree;
use crate::rng::Lcg;
use seagrass_graph::{IndexedGraph, Point};

/// Velocity retained between iterations.
const DAMPING: f64 = 0.8;
/// Side of the square (centred on the origin) that unhinted nodes start in.
const START_EXTENT: f64 = 500.0;

/// Mutable state of one organic run. Call-local; nothing here outlives `OrganicLayout::run`.
#[derive(Debug, Clone)]
pub(crate) struct Simulation<'o> {
    pub(crate) points: Vec<Point>,
    velocities: Vec<Point>,
    masses: Vec<f64>,
    /// Endpoint pairs of every non-self-loop edge. Parallel edges pull once each.
    springs: Vec<(usize, usize)>,
    pub(crate) temperature: f64,
    opts: &'o OrganicOptions,
}

impl<'o> Simulation<'o> {
    pub(crate) fn new(ix: &IndexedGraph, opts: &'o OrganicOptions, rng: &mut Lcg) -> Self {
        let n = ix.node_count();
        let points = (0..n)
            .map(|v| {
                ix.hint(v).unwrap_or_else(|| {
                    let x = (rng.next_f64() - 0.5) * START_EXTENT;
                    let y = (rng.next_f64() - 0.5) * START_EXTENT;
                    Point::new(x, y)
                })
            })
            .collect();
        let springs = ix
            .edges()
            .iter()
            .filter(|e| !e.is_self_loop())
            .map(|e| (e.a, e.b))
            .collect();

        Self {
            points,
            velocities: vec![Point::ORIGIN; n],
            masses: vec![1.0; n],
            springs,
            temperature: opts.initial_temperature,
            opts,
        }
    }

    /// Runs one full iteration and returns the mean displacement of the nodes.
    pub(crate) fn step(&mut self) -> f64 {
        let n = self.points.len();
        if n == 0 {
            return 0.0;
        }

        let before = self.points.clone();
        let forces = self.forces();
        self.integrate(&forces);
        if self.opts.prevent_overlap {
            self.resolve_overlaps();
        }
        self.temperature *= self.opts.cooling;

        let moved: f64 = before
            .iter()
            .zip(&self.points)
            .map(|(a, b)| a.distance_to(*b))
            .sum();
        moved / n as f64
    }

    fn forces(&self) -> Vec<Point> {
        let opts = self.opts;
        let n = self.points.len();
        let mut forces = vec![Point::ORIGIN; n];

        if opts.repulsion != 0.0 {
            let tree = QuadTree::build(&self.points, &self.masses);
            for (v, f) in forces.iter_mut().enumerate() {
                *f = tree.repulsion(&self.points, &self.masses, v, opts.theta, opts.repulsion);
            }
        }

        for &(a, b) in &self.springs {
            let (pa, pb) = (self.points[a], self.points[b]);
            let (dx, dy) = (pb.x - pa.x, pb.y - pa.y);
            let d = (dx * dx + dy * dy).sqrt();
            if d <= 0.0 {
                continue;
            }
            let pull = opts.attraction * (d - opts.edge_length);
            let (fx, fy) = (dx / d * pull, dy / d * pull);
            forces[a].x += fx;
            forces[a].y += fy;
            forces[b].x -= fx;
            forces[b].y -= fy;
        }

        if opts.gravity > 0.0 {
            for (f, p) in forces.iter_mut().zip(&self.points) {
                f.x -= opts.gravity * p.x;
                f.y -= opts.gravity * p.y;
            }
        }
        forces
    }

    fn integrate(&mut self, forces: &[Point]) {
        let limit = self.temperature;
        for ((p, v), f) in self.points.iter_mut().zip(&mut self.velocities).zip(forces) {
            let mut next = Point::new(DAMPING * (v.x + f.x), DAMPING * (v.y + f.y));
            if !next.is_finite() {
                *v = Point::ORIGIN;
                continue;
            }
            let speed = next.length();
            if speed > limit {
                let scale = if speed > 0.0 { limit / speed } else { 0.0 };
                next = Point::new(next.x * scale, next.y * scale);
            }
            let moved = Point::new(p.x + next.x, p.y + next.y);
            if moved.is_finite() {
                *p = moved;
                *v = next;
            } else {
                *v = Point::ORIGIN;
            }
        }
    }

    /// Pushes every pair closer than `2 × nodeRadius` apart along their connecting line, half the
    /// overlap each. Quadratic in the node count.
    fn resolve_overlaps(&mut self) {
        let min_distance = 2.0 * self.opts.node_radius;
        if min_distance <= 0.0 {
            return;
        }
        let n = self.points.len();
        for i in 0..n {
            for j in (i + 1)..n {
                let (pi, pj) = (self.points[i], self.points[j]);
                let (dx, dy) = (pj.x - pi.x, pj.y - pi.y);
                let d = (dx * dx + dy * dy).sqrt();
                if d >= min_distance {
                    continue;
                }
                // Coincident nodes have no connecting line; separate them along x.
                let (ux, uy) = if d > 0.0 { (dx / d, dy / d) } else { (1.0, 0.0) };
                let half = (min_distance - d) / 2.0;
                let (sx, sy) = (ux * half, uy * half);
                let (ni, nj) = (
                    Point::new(pi.x - sx, pi.y - sy),
                    Point::new(pj.x + sx, pj.y + sy),
                );
                if ni.is_finite() && nj.is_finite() {
                    self.points[i] = ni;
                    self.points[j] = nj;
                }
            }
        }
    }
}
