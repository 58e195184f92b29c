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

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use crate::{DefInt, DefFloat, EdgeId};
use super::error::{GraphError, GraphResult};

// **************************************************************
//    WEIGHTED EDGE
// **************************************************************

/// An undirected weighted edge. `(u, v)` and `(v, u)` are the same edge.
///
/// `id` is handed out once, when the edge first enters a graph, and is kept
/// when the edge is copied into a contracted, sampled or filtered graph. It
/// is how an edge of a derived graph is traced back to its source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WghEdge {
    pub u: DefInt,
    pub v: DefInt,
    pub w: DefFloat,
    pub id: EdgeId,
}

impl WghEdge {
    pub fn new(u: DefInt, v: DefInt, w: DefFloat, id: EdgeId) -> Self
    { Self { u, v, w, id } }

    /// The endpoint opposite to `x`.
    #[inline(always)]
    pub fn other(&self, x: DefInt) -> DefInt {
        if self.u == x { self.v } else { self.u }
    }

    #[inline(always)]
    pub fn is_loop(&self) -> bool { self.u == self.v }

    /// Total order by weight, then id.
    #[inline(always)]
    pub fn cmp_weight_id(&self, other: &Self) -> Ordering {
        self.w.total_cmp(&other.w).then(self.id.cmp(&other.id))
    }
}

impl fmt::Display for WghEdge {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{{},{}}}[{}]", self.u, self.v, self.w)
    }
}

// **************************************************************
//    GRAPH
// **************************************************************

/// An undirected weighted multigraph over the vertices `0..n`.
///
/// Every edge is stored once; each endpoint keeps the positions of its
/// incident edges, so an edge shows up in the neighbourhood of both its
/// endpoints (a self-loop only once).
#[derive(Clone, Debug, Default)]
pub struct Graph {
    adj: Vec<Vec<usize>>,
    edges: Vec<WghEdge>,
    by_id: HashMap<EdgeId, usize>,
    next_id: EdgeId,
}

impl Graph {
    pub fn new(n: usize) -> Self {
        Self {
            adj: vec![vec![]; n],
            edges: vec![],
            by_id: HashMap::new(),
            next_id: 0,
        }
    }

    /// Builds a graph from `(origin, destination, weight)` triples. Ids are
    /// assigned in slice order, starting at 0.
    pub fn from_edges(n: usize, es: &[(DefInt, DefInt, DefFloat)]) -> GraphResult<Self> {
        let mut g = Self::new(n);
        for &(u, v, w) in es {
            g.add_edge(u, v, w)?;
        }
        Ok(g)
    }

    /// Builds a graph from edges that already carry ids. Used for graphs
    /// derived from another one, whose edges are valid by construction.
    pub(crate) fn from_derived<I>(n: usize, es: I) -> Self
    where
        I: IntoIterator<Item = WghEdge>,
    {
        let mut g = Self::new(n);
        for e in es { g.push_edge(e); }
        g
    }

    fn check_edge(&self, u: DefInt, v: DefInt, w: DefFloat) -> GraphResult<()> {
        let n = self.num_vertices();
        for x in [u, v] {
            if x as usize >= n {
                return Err(GraphError::VertexOutOfRange { vertex: x, n });
            }
        }
        if w.is_nan() { return Err(GraphError::InvalidWeight(w)); }
        Ok(())
    }

    /// Adds a new edge and returns the id it was given.
    pub fn add_edge(&mut self, u: DefInt, v: DefInt, w: DefFloat) -> GraphResult<EdgeId> {
        self.check_edge(u, v, w)?;
        let id = self.next_id;
        self.push_edge(WghEdge::new(u, v, w, id));
        Ok(id)
    }

    /// Adds an edge under the id it already carries.
    pub fn insert_edge(&mut self, e: WghEdge) -> GraphResult<()> {
        self.check_edge(e.u, e.v, e.w)?;
        if self.by_id.contains_key(&e.id) {
            return Err(GraphError::DuplicateEdgeId(e.id));
        }
        self.push_edge(e);
        Ok(())
    }

    /// Adds an edge without validation. Callers guarantee that the endpoints
    /// are in range and the id is new to this graph.
    pub(crate) fn push_edge(&mut self, e: WghEdge) {
        debug_assert!((e.u as usize) < self.num_vertices());
        debug_assert!((e.v as usize) < self.num_vertices());
        debug_assert!(!self.by_id.contains_key(&e.id));
        let pos = self.edges.len();
        self.adj[e.u as usize].push(pos);
        if !e.is_loop() { self.adj[e.v as usize].push(pos); }
        self.by_id.insert(e.id, pos);
        self.next_id = self.next_id.max(e.id.saturating_add(1));
        self.edges.push(e);
    }

    pub fn num_vertices(&self) -> usize { self.adj.len() }

    pub fn num_edges(&self) -> usize { self.edges.len() }

    pub fn is_empty(&self) -> bool { self.edges.is_empty() }

    /// All edges, each once, in insertion order.
    pub fn edges(&self) -> &[WghEdge] { &self.edges }

    /// The edges incident to `v`, in insertion order.
    pub fn neighbours(&self, v: DefInt) -> impl Iterator<Item = &WghEdge> + '_ {
        self.adj[v as usize].iter().map(move |&i| &self.edges[i])
    }

    pub fn degree(&self, v: DefInt) -> usize { self.adj[v as usize].len() }

    pub fn edge_by_id(&self, id: EdgeId) -> Option<&WghEdge> {
        self.by_id.get(&id).map(|&i| &self.edges[i])
    }

    pub fn contains_edge(&self, id: EdgeId) -> bool { self.by_id.contains_key(&id) }

    /// Sum of all edge weights, every edge counted once.
    pub fn edge_weight_sum(&self) -> DefFloat {
        self.edges.iter().map(|e| e.w).sum()
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for v in 0..self.num_vertices() {
            write!(f, "Neighbors of {v}:")?;
            for e in self.neighbours(v as DefInt) { write!(f, " {e}")?; }
            writeln!(f)?;
        }
        write!(f, "Edge weight sum is {}", self.edge_weight_sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        Graph::from_edges(3, &[(0, 1, 1.5), (1, 2, 2.0), (2, 0, 4.0)]).unwrap()
    }

    #[test]
    fn ids_follow_insertion() {
        let g = triangle();
        let ids: Vec<_> = g.edges().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(g.edge_by_id(1).unwrap().w, 2.0);
        assert!(g.edge_by_id(3).is_none());
    }

    #[test]
    fn weight_sum_counts_each_edge_once() {
        assert_eq!(triangle().edge_weight_sum(), 7.5);
        assert_eq!(Graph::new(0).edge_weight_sum(), 0.0);
    }

    #[test]
    fn neighbours_list_both_endpoints() {
        let g = triangle();
        let n0: Vec<_> = g.neighbours(0).map(|e| e.id).collect();
        let n1: Vec<_> = g.neighbours(1).map(|e| e.id).collect();
        assert_eq!(n0, vec![0, 2]);
        assert_eq!(n1, vec![0, 1]);
        assert_eq!(g.edge_by_id(2).unwrap().other(0), 2);
    }

    #[test]
    fn self_loop_listed_once() {
        let mut g = Graph::new(2);
        g.add_edge(1, 1, 3.0).unwrap();
        assert_eq!(g.degree(1), 1);
        assert_eq!(g.edge_weight_sum(), 3.0);
    }

    #[test]
    fn out_of_range_is_rejected() {
        let mut g = Graph::new(3);
        match g.add_edge(0, 3, 1.0) {
            Err(GraphError::VertexOutOfRange { vertex: 3, n: 3 }) => {}
            r => panic!("unexpected {r:?}"),
        }
        assert!(g.is_empty());
        assert!(matches!(g.add_edge(0, 1, f64::NAN), Err(GraphError::InvalidWeight(_))));
    }

    #[test]
    fn insert_keeps_id_and_rejects_duplicates() {
        let mut g = Graph::new(4);
        g.insert_edge(WghEdge::new(0, 1, 1.0, 17)).unwrap();
        assert!(matches!(
            g.insert_edge(WghEdge::new(2, 3, 1.0, 17)),
            Err(GraphError::DuplicateEdgeId(17))
        ));
        // fresh ids never collide with carried ones
        assert_eq!(g.add_edge(2, 3, 1.0).unwrap(), 18);
    }

    #[test]
    fn display_lists_neighbours() {
        let g = Graph::from_edges(2, &[(0, 1, 0.5)]).unwrap();
        let s = g.to_string();
        assert!(s.starts_with("Neighbors of 0: {0,1}[0.5]\nNeighbors of 1: {0,1}[0.5]\n"));
        assert!(s.ends_with("Edge weight sum is 0.5"));
    }

    #[test]
    fn weight_id_order_is_total() {
        let a = WghEdge::new(0, 1, 1.0, 4);
        let b = WghEdge::new(1, 2, 1.0, 2);
        let c = WghEdge::new(1, 2, 0.5, 9);
        assert_eq!(a.cmp_weight_id(&b), Ordering::Greater);
        assert_eq!(c.cmp_weight_id(&b), Ordering::Less);
    }
}
