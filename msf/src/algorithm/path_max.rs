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

use parlay::utilities::log2_up;

use crate::{DefInt, DefFloat};
use crate::graph::Graph;


/// What lies on the forest path between two vertices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathWeight {
    /// Both ends are the same vertex; the path has no edges.
    SameVertex,
    /// The heaviest edge weight on the path.
    Connected(DefFloat),
    /// The vertices are in different trees.
    Disconnected,
}

impl PathWeight {
    /// Whether an edge of weight `w` between the two ends is heavier than
    /// every edge of the path. Never true without a path.
    #[inline(always)]
    pub fn is_exceeded_by(self, w: DefFloat) -> bool {
        matches!(self, PathWeight::Connected(m) if w > m)
    }

    /// The weight as a plain float: `-inf` for an empty path and `+inf`
    /// when there is no path.
    pub fn as_sentinel(self) -> DefFloat {
        match self {
            PathWeight::SameVertex => DefFloat::NEG_INFINITY,
            PathWeight::Connected(w) => w,
            PathWeight::Disconnected => DefFloat::INFINITY,
        }
    }
}

/// Maximum edge weight on forest paths, by binary lifting.
///
/// `up[k][v]` is the 2^k-th ancestor of `v` (a root is its own ancestor) and
/// `heaviest[k][v]` the largest weight on the way there. Built once in
/// O(n log n); each query is O(log n). The forest is not kept.
pub struct PathMax {
    depth: Vec<DefInt>,
    root: Vec<DefInt>,
    up: Vec<Vec<DefInt>>,
    heaviest: Vec<Vec<DefFloat>>,
}

impl PathMax {
    /// Preprocesses `f`, which must be a forest.
    pub fn new(f: &Graph) -> Self {
        let n = f.num_vertices();
        let levels = if n <= 2 { 1 } else { log2_up(n) };

        let mut depth = vec![0; n];
        let mut root = vec![0; n];
        let mut parent: Vec<DefInt> = (0..n as DefInt).collect();
        let mut parent_w = vec![DefFloat::NEG_INFINITY; n];
        let mut visited = vec![false; n];
        let mut stack: Vec<DefInt> = vec![];

        for r in 0..n as DefInt {
            if visited[r as usize] { continue; }
            visited[r as usize] = true;
            root[r as usize] = r;
            stack.push(r);
            while let Some(x) = stack.pop() {
                for e in f.neighbours(x) {
                    let y = e.other(x);
                    if visited[y as usize] { continue; }
                    visited[y as usize] = true;
                    root[y as usize] = r;
                    depth[y as usize] = depth[x as usize] + 1;
                    parent[y as usize] = x;
                    parent_w[y as usize] = e.w;
                    stack.push(y);
                }
            }
        }

        let mut up = Vec::with_capacity(levels);
        let mut heaviest = Vec::with_capacity(levels);
        up.push(parent);
        heaviest.push(parent_w);
        for k in 1..levels {
            let (pu, pw) = (&up[k - 1], &heaviest[k - 1]);
            let uk: Vec<DefInt> = (0..n).map(|v| pu[pu[v] as usize]).collect();
            let wk: Vec<DefFloat> = (0..n)
                .map(|v| pw[v].max(pw[pu[v] as usize]))
                .collect();
            up.push(uk);
            heaviest.push(wk);
        }

        Self { depth, root, up, heaviest }
    }

    pub fn len(&self) -> usize { self.depth.len() }

    pub fn is_empty(&self) -> bool { self.depth.is_empty() }

    /// The root of the tree containing `v`.
    pub fn root_of(&self, v: DefInt) -> DefInt { self.root[v as usize] }

    pub fn depth_of(&self, v: DefInt) -> DefInt { self.depth[v as usize] }

    /// The heaviest edge on the path between `u` and `v`.
    ///
    /// # Panics
    ///
    /// If `u` or `v` is not a vertex of the forest.
    pub fn query(&self, u: DefInt, v: DefInt) -> PathWeight {
        if u == v { return PathWeight::SameVertex; }
        if self.root[u as usize] != self.root[v as usize] {
            return PathWeight::Disconnected;
        }

        let (mut a, mut b) = (u as usize, v as usize);
        if self.depth[a] < self.depth[b] { std::mem::swap(&mut a, &mut b); }
        let mut best = DefFloat::NEG_INFINITY;

        // lift the deeper end to the other's level
        let mut diff = self.depth[a] - self.depth[b];
        let mut k = 0;
        while diff > 0 {
            if diff & 1 == 1 {
                best = best.max(self.heaviest[k][a]);
                a = self.up[k][a] as usize;
            }
            diff >>= 1;
            k += 1;
        }
        if a == b { return PathWeight::Connected(best); }

        for k in (0..self.up.len()).rev() {
            let (ua, ub) = (self.up[k][a], self.up[k][b]);
            if ua != ub {
                best = best.max(self.heaviest[k][a]).max(self.heaviest[k][b]);
                a = ua as usize;
                b = ub as usize;
            }
        }
        // one step below the common ancestor
        best = best.max(self.heaviest[0][a]).max(self.heaviest[0][b]);
        PathWeight::Connected(best)
    }

    /// `query` as a float, with `-inf` for `u == v` and `+inf` for vertices
    /// in different trees.
    pub fn max_edge_weight(&self, u: DefInt, v: DefInt) -> DefFloat {
        self.query(u, v).as_sentinel()
    }
}
