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

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::DefInt;
use crate::graph::{Graph, WghEdge};


/// Heap entry ordered by (weight, id).
struct ByWeight(WghEdge);

impl PartialEq for ByWeight {
    fn eq(&self, other: &Self) -> bool { self.cmp(other) == Ordering::Equal }
}

impl Eq for ByWeight {}

impl PartialOrd for ByWeight {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl Ord for ByWeight {
    fn cmp(&self, other: &Self) -> Ordering { self.0.cmp_weight_id(&other.0) }
}

// grows one tree from `start`, marking the vertices it reaches
fn prim_on_component(start: DefInt, g: &Graph, marked: &mut [bool], msf: &mut Graph) {
    let mut heap = BinaryHeap::new();
    marked[start as usize] = true;
    heap.extend(g.neighbours(start).map(|e| Reverse(ByWeight(*e))));

    while let Some(Reverse(ByWeight(e))) = heap.pop() {
        // both ends inside (or a self-loop): not a cut edge any more
        if marked[e.u as usize] == marked[e.v as usize] { continue; }
        msf.push_edge(e);
        let x = if marked[e.u as usize] { e.v } else { e.u };
        marked[x as usize] = true;
        heap.extend(
            g.neighbours(x)
                .filter(|f| marked[f.u as usize] != marked[f.v as usize])
                .map(|f| Reverse(ByWeight(*f)))
        );
    }
}

/// Lazy Prim, restarted from every unmarked vertex.
pub fn minimum_spanning_forest(g: &Graph) -> Graph {
    let n = g.num_vertices();
    let mut msf = Graph::new(n);
    let mut marked = vec![false; n];
    for v in 0..n as DefInt {
        if !marked[v as usize] {
            prim_on_component(v, g, &mut marked, &mut msf);
        }
    }
    msf
}
