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

use crate::algorithm::contraction::{boruvka_step, TieBreak};
use crate::graph::Graph;


/// Borůvka to completion: contract until no edge is left between
/// components. Every chosen edge is mapped back to `g` by id.
pub fn minimum_spanning_forest_with(g: &Graph, tie: TieBreak) -> Graph {
    let n = g.num_vertices();
    let mut msf = Graph::new(n);
    let mut cur = boruvka_step(g, tie);
    loop {
        for e in &cur.chosen {
            if let Some(orig) = g.edge_by_id(e.id) { msf.push_edge(*orig); }
        }
        if cur.graph.is_empty() { break; }
        cur = boruvka_step(&cur.graph, tie);
    }
    debug_assert!(msf.num_edges() < n.max(1));
    msf
}

pub fn minimum_spanning_forest(g: &Graph) -> Graph {
    minimum_spanning_forest_with(g, TieBreak::default())
}
