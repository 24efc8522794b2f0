//! Break cycles by reversing back edges found during a depth-first traversal.
//!
//! This is the greedy DFS heuristic: the result is acyclic but the reversed set is not a minimum
//! feedback arc set. Which edges get reversed depends on traversal order, which is fixed here to
//! the source's node enumeration order (roots) and edge enumeration order (out-edges).

use crate::model::LayeredGraph;

/// Reverses every back edge in place and returns how many were reversed.
pub fn run(g: &mut LayeredGraph) -> usize {
    let fas = dfs_fas(g);
    for &e in &fas {
        g.reverse_edge(e);
    }
    fas.len()
}

/// Back edges in discovery order. The walk itself never mutates `g`.
pub fn dfs_fas(g: &LayeredGraph) -> Vec<usize> {
    let n = g.nodes.len();
    let mut fas: Vec<usize> = Vec::new();
    let mut visited = vec![false; n];
    let mut on_stack = vec![false; n];
    // (node, next out-edge cursor)
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for root in 0..n {
        if visited[root] {
            continue;
        }
        visited[root] = true;
        on_stack[root] = true;
        stack.push((root, 0));

        while let Some(frame) = stack.last_mut() {
            let v = frame.0;
            let Some(&e) = g.nodes[v].out_edges.get(frame.1) else {
                on_stack[v] = false;
                stack.pop();
                continue;
            };
            frame.1 += 1;

            let w = g.edges[e].target;
            if on_stack[w] {
                fas.push(e);
            } else if !visited[w] {
                visited[w] = true;
                on_stack[w] = true;
                stack.push((w, 0));
            }
        }
    }
    fas
}
