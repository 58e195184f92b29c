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

use std::cmp::min;

use crate::graph::{Graph, WghEdge};
use crate::union_find::UnionFind;


fn union_find_loop(es: &[WghEdge], uf: &mut UnionFind, msf: &mut Graph) {
    for e in es {
        let u = uf.find(e.u);
        let v = uf.find(e.v);
        if u != v {
            uf.union_roots(u, v);
            msf.push_edge(*e);
        }
    }
}

/// Kruskal on edges ordered by (weight, id).
///
/// Only the lightest `4n/3` edges are sorted up front; the rest are sorted
/// after dropping those that already close a cycle.
pub fn minimum_spanning_forest(g: &Graph) -> Graph {
    let n = g.num_vertices();
    let m = g.num_edges();
    let mut msf = Graph::new(n);
    if m == 0 { return msf; }

    let mut es: Vec<WghEdge> = g.edges().to_vec();
    let cmp = |a: &WghEdge, b: &WghEdge| a.cmp_weight_id(b);

    let l = min(4 * n / 3, m);
    if l < m { es.select_nth_unstable_by(l, cmp); }
    es[..l].sort_by(cmp);

    let mut uf = UnionFind::new(n);
    union_find_loop(&es[..l], &mut uf, &mut msf);

    let mut k = 0;
    for i in l..m {
        let e = es[i];
        if uf.find(e.u) != uf.find(e.v) {
            es[l + k] = e;
            k += 1;
        }
    }

    es[l..l + k].sort_by(cmp);
    union_find_loop(&es[l..l + k], &mut uf, &mut msf);
    msf
}
