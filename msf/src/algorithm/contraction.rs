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

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::cmp::Ordering;

use tracing::trace;

use crate::DefInt;
use crate::graph::{Graph, WghEdge};
use crate::union_find::UnionFind;


/// How a Borůvka step chooses among edges of equal weight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TieBreak {
    /// Compare weights only; the edge met first in the scan is kept.
    #[default]
    FirstSeen,
    /// Compare weights, then edge ids; the smaller id is kept.
    LowestId,
}

impl TieBreak {
    /// Whether `e` should replace the current choice `cur`.
    #[inline(always)]
    pub fn beats(self, e: &WghEdge, cur: &WghEdge) -> bool {
        match self {
            TieBreak::FirstSeen => e.w < cur.w,
            TieBreak::LowestId => e.cmp_weight_id(cur) == Ordering::Less,
        }
    }
}

/// The result of one Borůvka round on a graph `g`.
pub struct Contraction {
    /// Edges merged in this round, as they appear in `g`.
    pub chosen: Vec<WghEdge>,
    /// One vertex per component of `g + chosen`, with the lightest edge
    /// between every pair of components that `g` connects.
    pub graph: Graph,
    /// `supernode[v]` is the vertex of `graph` that `v` was merged into.
    pub supernode: Vec<DefInt>,
}

fn update_cheapest(cheapest: &mut [Option<WghEdge>], c: DefInt, e: &WghEdge, tie: TieBreak) {
    let replace = match &cheapest[c as usize] {
        Some(cur) => tie.beats(e, cur),
        None => true,
    };
    if replace { cheapest[c as usize] = Some(*e); }
}

/// One round of Borůvka: every vertex picks its lightest incident edge, the
/// picks are merged, and the graph is contracted onto the merged components.
///
/// Edges of the contracted graph keep the id of the edge of `g` they stand
/// for, so `g.edge_by_id` recovers the original endpoints.
pub fn boruvka_step(g: &Graph, tie: TieBreak) -> Contraction {
    let n = g.num_vertices();
    let mut uf = UnionFind::new(n);
    let mut cheapest: Vec<Option<WghEdge>> = vec![None; n];

    for v in 0..n as DefInt {
        // each edge is looked at from its `u` side only
        for e in g.neighbours(v).filter(|e| e.u == v) {
            let c1 = uf.find(e.u);
            let c2 = uf.find(e.v);
            if c1 == c2 { continue; }
            update_cheapest(&mut cheapest, c1, e, tie);
            update_cheapest(&mut cheapest, c2, e, tie);
        }
    }

    let mut chosen = vec![];
    for e in cheapest.iter().flatten() {
        // an earlier merge in this pass may already have joined the endpoints
        let c1 = uf.find(e.u);
        let c2 = uf.find(e.v);
        if c1 == c2 { continue; }
        uf.union_roots(c1, c2);
        chosen.push(*e);
    }

    let mut label: Vec<Option<DefInt>> = vec![None; n];
    let mut count: DefInt = 0;
    let supernode: Vec<DefInt> = (0..n as DefInt)
        .map(|v| {
            let r = uf.find(v) as usize;
            *label[r].get_or_insert_with(|| { count += 1; count - 1 })
        })
        .collect();

    let mut slot: HashMap<(DefInt, DefInt), usize> = HashMap::new();
    let mut kept: Vec<WghEdge> = vec![];
    for e in g.edges() {
        let (a, b) = (supernode[e.u as usize], supernode[e.v as usize]);
        if a == b { continue; }
        let ce = WghEdge::new(a, b, e.w, e.id);
        match slot.entry((a.min(b), a.max(b))) {
            Entry::Vacant(s) => {
                s.insert(kept.len());
                kept.push(ce);
            }
            Entry::Occupied(s) => {
                let cur = &mut kept[*s.get()];
                if tie.beats(&ce, cur) { *cur = ce; }
            }
        }
    }

    trace!(
        n,
        m = g.num_edges(),
        chosen = chosen.len(),
        supernodes = count,
        kept = kept.len(),
        "boruvka step"
    );

    Contraction {
        chosen,
        graph: Graph::from_derived(count as usize, kept),
        supernode,
    }
}
