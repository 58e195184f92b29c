// ============================================================================
// This code is part of Rusty-PBBS.
// ----------------------------------------------------------------------------
// MIT License
// 
// Copyright (c) 2023-present Javad Abdi, Mark C. Jeffrey
// 
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
// 
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
// 
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.
// ============================================================================

use parlay::Random;

use crate::{DefInt, DefFloat, EdgeId};
use crate::graph::{Graph, WghEdge};


fn euclidean_dist(p1: (i64, i64), p2: (i64, i64)) -> DefFloat {
    let (dx, dy) = ((p1.0 - p2.0) as DefFloat, (p1.1 - p2.1) as DefFloat);
    (dx * dx + dy * dy).sqrt()
}

/// `n` random integer points in `[0, n]²` and `m` random vertex pairs
/// between them, weighted by distance. Pairs may repeat or be loops.
pub fn random_euclidean_graph(n: usize, m: usize, seed: u64) -> Graph {
    let r = Random::new(seed);
    let mut g = Graph::new(n);
    if n == 0 { return g; }

    let pr = r.fork(1);
    let points: Vec<(i64, i64)> = (0..n as u64)
        .map(|i| (
            pr.ith_below(2 * i, n as u64 + 1) as i64,
            pr.ith_below(2 * i + 1, n as u64 + 1) as i64,
        ))
        .collect();

    let er = r.fork(2);
    for i in 0..m as u64 {
        let a = er.ith_below(2 * i, n as u64) as usize;
        let b = er.ith_below(2 * i + 1, n as u64) as usize;
        let w = euclidean_dist(points[a], points[b]);
        g.push_edge(WghEdge::new(a as DefInt, b as DefInt, w, i as EdgeId));
    }
    g
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_and_determinism() {
        let g = random_euclidean_graph(50, 200, 7);
        assert_eq!(g.num_vertices(), 50);
        assert_eq!(g.num_edges(), 200);
        assert!(g.edges().iter().all(|e| e.w >= 0.0 && e.w <= 50.0 * 2f64.sqrt()));
        let h = random_euclidean_graph(50, 200, 7);
        assert_eq!(g.edges(), h.edges());
        assert_ne!(random_euclidean_graph(50, 200, 8).edges(), g.edges());
    }

    #[test]
    fn no_vertices() {
        assert!(random_euclidean_graph(0, 10, 1).is_empty());
    }
}
