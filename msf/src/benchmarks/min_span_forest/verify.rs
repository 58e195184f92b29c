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

use thiserror::Error;

use crate::{DefFloat, DefInt, EdgeId};
use crate::graph::Graph;
use crate::union_find::UnionFind;


/// Ways a claimed minimum spanning forest can be wrong.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CheckError {
    #[error("forest has {found} vertices, graph has {expected}")]
    VertexCount { expected: usize, found: usize },

    #[error("wrong edge count: expected {expected} edges, found {found}")]
    EdgeCount { expected: usize, found: usize },

    #[error("edge {0} is not an edge of the graph")]
    UnknownEdge(EdgeId),

    #[error("edge {0} closes a cycle")]
    Cycle(EdgeId),

    #[error("edge {id} of weight {w} is heavier than the lightest edge {min_cut} across its cut")]
    CutViolation { id: EdgeId, w: DefFloat, min_cut: DefFloat },

    #[error("weight {found} differs from reference weight {expected}")]
    Weight { expected: DefFloat, found: DefFloat },
}

pub type CheckResult = Result<(), CheckError>;

/// Number of connected components of `g`.
pub fn count_components(g: &Graph) -> usize {
    let mut uf = UnionFind::new(g.num_vertices());
    for e in g.edges() { uf.merge(e.u, e.v); }
    uf.num_components()
}

/// Checks that `f` is a spanning forest of `g`: same vertices, edges taken
/// from `g` unchanged, no cycle, and `n - c` edges for `c` components of `g`.
pub fn check_forest(g: &Graph, f: &Graph) -> CheckResult {
    let n = g.num_vertices();
    if f.num_vertices() != n {
        return Err(CheckError::VertexCount { expected: n, found: f.num_vertices() });
    }
    let mut uf = UnionFind::new(n);
    for e in f.edges() {
        if g.edge_by_id(e.id) != Some(e) { return Err(CheckError::UnknownEdge(e.id)); }
        if !uf.merge(e.u, e.v) { return Err(CheckError::Cycle(e.id)); }
    }
    let expected = n - count_components(g);
    if f.num_edges() != expected {
        return Err(CheckError::EdgeCount { expected, found: f.num_edges() });
    }
    Ok(())
}

/// Checks that every forest edge is a lightest edge of `g` across the cut
/// obtained by removing it from the forest, up to `tol`. O(n m).
pub fn check_cut_property(g: &Graph, f: &Graph, tol: DefFloat) -> CheckResult {
    let n = g.num_vertices();
    for eh in f.edges() {
        let mut uf = UnionFind::new(n);
        for e in f.edges().iter().filter(|e| e.id != eh.id) { uf.merge(e.u, e.v); }

        let (a, b) = (uf.find(eh.u), uf.find(eh.v));
        let crosses = |x: DefInt, y: DefInt| (x == a && y == b) || (x == b && y == a);
        let mut min_cut = DefFloat::INFINITY;
        for e in g.edges() {
            let (x, y) = (uf.find(e.u), uf.find(e.v));
            if crosses(x, y) { min_cut = min_cut.min(e.w); }
        }
        if eh.w > min_cut + tol {
            return Err(CheckError::CutViolation { id: eh.id, w: eh.w, min_cut });
        }
    }
    Ok(())
}

/// Compares the total weight of `f` with a reference forest's.
pub fn check_weight(reference: &Graph, f: &Graph, tol: DefFloat) -> CheckResult {
    let (expected, found) = (reference.edge_weight_sum(), f.edge_weight_sum());
    if (expected - found).abs() > tol {
        return Err(CheckError::Weight { expected, found });
    }
    Ok(())
}
