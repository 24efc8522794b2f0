//! Arena quadtree for Barnes-Hut repulsion.
//!
//! Rebuilt from scratch every iteration. Cells are pushed parent-first, so a reverse scan of the
//! arena visits children before their parents when aggregating mass.

use seagrass_graph::Point;

/// Below this depth cells are no longer split; coincident points share one bucket leaf.
const MAX_DEPTH: usize = 48;

#[derive(Debug, Clone)]
struct Cell {
    /// Top-left corner of the square region.
    x: f64,
    y: f64,
    size: f64,
    mass: f64,
    center: Point,
    children: Option<[usize; 4]>,
    /// Point indices held by a leaf: at most one unless the leaf sits at `MAX_DEPTH`.
    points: Vec<usize>,
}

impl Cell {
    fn new(x: f64, y: f64, size: f64) -> Self {
        Self {
            x,
            y,
            size,
            mass: 0.0,
            center: Point::ORIGIN,
            children: None,
            points: Vec::new(),
        }
    }

    /// Child slot for `p`; the split lines belong to the right/bottom halves.
    fn quadrant(&self, p: Point) -> usize {
        let half = self.size / 2.0;
        let right = p.x >= self.x + half;
        let bottom = p.y >= self.y + half;
        usize::from(bottom) * 2 + usize::from(right)
    }
}

#[derive(Debug, Clone, Default)]
pub struct QuadTree {
    cells: Vec<Cell>,
}

impl QuadTree {
    /// Builds a tree over `points` (all finite) and computes every cell's aggregate.
    pub fn build(points: &[Point], masses: &[f64]) -> Self {
        let mut tree = Self::default();
        let Some(root) = bounding_square(points) else {
            return tree;
        };
        tree.cells.push(root);
        for idx in 0..points.len() {
            tree.insert(points, idx);
        }
        tree.aggregate(points, masses);
        tree
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn total_mass(&self) -> f64 {
        self.cells.first().map_or(0.0, |c| c.mass)
    }

    pub fn center_of_mass(&self) -> Option<Point> {
        self.cells.first().filter(|c| c.mass > 0.0).map(|c| c.center)
    }

    fn insert(&mut self, points: &[Point], idx: usize) {
        let p = points[idx];
        let mut cell = 0;
        let mut depth = 0;
        loop {
            if let Some(children) = self.cells[cell].children {
                cell = children[self.cells[cell].quadrant(p)];
                depth += 1;
                continue;
            }
            if self.cells[cell].points.is_empty() || depth >= MAX_DEPTH {
                self.cells[cell].points.push(idx);
                return;
            }
            // Occupied leaf: split and push the resident down, then retry from this cell.
            let children = self.subdivide(cell);
            for resident in std::mem::take(&mut self.cells[cell].points) {
                let q = self.cells[cell].quadrant(points[resident]);
                self.cells[children[q]].points.push(resident);
            }
        }
    }

    fn subdivide(&mut self, cell: usize) -> [usize; 4] {
        let (x, y, half) = {
            let c = &self.cells[cell];
            (c.x, c.y, c.size / 2.0)
        };
        let first = self.cells.len();
        self.cells.push(Cell::new(x, y, half));
        self.cells.push(Cell::new(x + half, y, half));
        self.cells.push(Cell::new(x, y + half, half));
        self.cells.push(Cell::new(x + half, y + half, half));
        let children = [first, first + 1, first + 2, first + 3];
        self.cells[cell].children = Some(children);
        children
    }

    fn aggregate(&mut self, points: &[Point], masses: &[f64]) {
        for cell in (0..self.cells.len()).rev() {
            let (mut mass, mut sx, mut sy) = (0.0, 0.0, 0.0);
            match self.cells[cell].children {
                Some(children) => {
                    for child in children {
                        let c = &self.cells[child];
                        mass += c.mass;
                        sx += c.center.x * c.mass;
                        sy += c.center.y * c.mass;
                    }
                }
                None => {
                    for &i in &self.cells[cell].points {
                        mass += masses[i];
                        sx += points[i].x * masses[i];
                        sy += points[i].y * masses[i];
                    }
                }
            }
            let c = &mut self.cells[cell];
            c.mass = mass;
            c.center = if mass > 0.0 {
                Point::new(sx / mass, sy / mass)
            } else {
                Point::ORIGIN
            };
        }
    }

    /// Barnes-Hut repulsion on point `idx`: `strength × mass / d²` away from each body or
    /// approximated region. The point never repels itself.
    pub fn repulsion(
        &self,
        points: &[Point],
        masses: &[f64],
        idx: usize,
        theta: f64,
        strength: f64,
    ) -> Point {
        let p = points[idx];
        let mut force = Point::ORIGIN;
        if self.cells.is_empty() {
            return force;
        }

        let mut push = |from: Point, mass: f64| {
            let dx = p.x - from.x;
            let dy = p.y - from.y;
            let d2 = dx * dx + dy * dy;
            if d2 <= 0.0 || mass <= 0.0 {
                return;
            }
            let d = d2.sqrt();
            let magnitude = strength * mass / d2;
            force.x += dx / d * magnitude;
            force.y += dy / d * magnitude;
        };

        // `on_path`: the cell lies on the insertion path of `idx`, so its aggregate includes it.
        let mut stack = vec![(0usize, true)];
        while let Some((cell, on_path)) = stack.pop() {
            let c = &self.cells[cell];
            if c.mass <= 0.0 {
                continue;
            }
            let Some(children) = c.children else {
                for &j in &c.points {
                    if j != idx {
                        push(points[j], masses[j]);
                    }
                }
                continue;
            };

            let (mut mass, mut center) = (c.mass, c.center);
            if on_path {
                // Take this point's own contribution out of the aggregate.
                mass -= masses[idx];
                if mass <= 0.0 {
                    continue;
                }
                center = Point::new(
                    (c.center.x * c.mass - p.x * masses[idx]) / mass,
                    (c.center.y * c.mass - p.y * masses[idx]) / mass,
                );
            }
            let d = p.distance_to(center);
            if d > 0.0 && c.size / d < theta {
                push(center, mass);
            } else {
                let next = on_path.then(|| children[c.quadrant(p)]);
                stack.extend(children.map(|child| (child, Some(child) == next)));
            }
        }
        force
    }
}

/// Square around all points, padded so every point lies strictly inside it.
fn bounding_square(points: &[Point]) -> Option<Cell> {
    if points.is_empty() {
        return None;
    }
    let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
    let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for p in points {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    let extent = (max_x - min_x).max(max_y - min_y);
    let size = extent.max(1.0) * 1.1 + 2.0;
    let cx = (min_x + max_x) / 2.0;
    let cy = (min_y + max_y) / 2.0;
    Some(Cell::new(cx - size / 2.0, cy - size / 2.0, size))
}
