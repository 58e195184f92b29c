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

use std::mem::swap;

use crate::{DefInt, DefIntS};


/// Disjoint sets over `0..n`. A root stores the negated size of its set,
/// every other element its parent.
#[derive(Clone, Debug)]
pub struct UnionFind {
    parents: Vec<DefIntS>,
    components: usize,
}

impl UnionFind {
    pub fn new(n: usize) -> Self {
        Self { parents: vec![-1; n], components: n }
    }

    pub fn len(&self) -> usize { self.parents.len() }

    pub fn is_empty(&self) -> bool { self.parents.is_empty() }

    fn is_root(&self, u: DefIntS) -> bool {
        self.parents[u as usize] < 0
    }

    /// The root of the set containing `u`, splitting the path on the way.
    pub fn find(&mut self, u: DefInt) -> DefInt {
        let mut u = u as DefIntS;
        if self.is_root(u) { return u as DefInt; }
        let mut p = self.parents[u as usize];
        if self.is_root(p) { return p as DefInt; }

        loop {
            let gp = self.parents[p as usize];
            self.parents[u as usize] = gp;
            u = p;
            p = gp;
            if self.is_root(p) { return p as DefInt; }
        }
    }

    /// Joins two distinct roots, hanging the smaller set under the larger.
    /// Returns the new root.
    pub fn union_roots(&mut self, u: DefInt, v: DefInt) -> DefInt {
        debug_assert!(self.is_root(u as DefIntS) && self.is_root(v as DefIntS));
        debug_assert_ne!(u, v);
        let (mut u, mut v) = (u as usize, v as usize);
        // sizes are negated: the more negative entry is the larger set
        if self.parents[u] > self.parents[v] {
            swap(&mut u, &mut v);
        }
        self.parents[u] += self.parents[v];
        self.parents[v] = u as DefIntS;
        self.components -= 1;
        u as DefInt
    }

    /// Merges the sets of `a` and `b`. Returns false if they were already one.
    pub fn merge(&mut self, a: DefInt, b: DefInt) -> bool {
        let (a, b) = (self.find(a), self.find(b));
        if a == b { return false; }
        self.union_roots(a, b);
        true
    }

    pub fn same_set(&mut self, a: DefInt, b: DefInt) -> bool {
        self.find(a) == self.find(b)
    }

    /// Number of elements in the set containing `u`.
    pub fn set_size(&mut self, u: DefInt) -> usize {
        let r = self.find(u);
        (-self.parents[r as usize]) as usize
    }

    pub fn num_components(&self) -> usize { self.components }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_as_singletons() {
        let mut uf = UnionFind::new(4);
        assert_eq!(uf.num_components(), 4);
        assert!((0..4).all(|i| uf.find(i) == i));
        assert!(!uf.same_set(0, 1));
    }

    #[test]
    fn merge_joins_and_counts() {
        let mut uf = UnionFind::new(6);
        assert!(uf.merge(0, 1));
        assert!(uf.merge(2, 3));
        assert!(uf.merge(1, 3));
        assert!(!uf.merge(0, 2));
        assert_eq!(uf.num_components(), 3);
        assert!(uf.same_set(0, 3));
        assert!(!uf.same_set(0, 4));
        assert_eq!(uf.set_size(2), 4);
        assert_eq!(uf.set_size(5), 1);
    }

    #[test]
    fn larger_set_keeps_root() {
        let mut uf = UnionFind::new(5);
        uf.merge(0, 1);
        uf.merge(0, 2);
        let big = uf.find(0);
        let r = uf.union_roots(big, 4);
        assert_eq!(r, big);
        assert_eq!(uf.find(4), big);
    }

    #[test]
    fn long_chain_compresses() {
        let n = 1000;
        let mut uf = UnionFind::new(n);
        for i in 1..n as DefInt { uf.merge(i - 1, i); }
        let r = uf.find(0);
        assert!((0..n as DefInt).all(|i| uf.find(i) == r));
        assert_eq!(uf.num_components(), 1);
    }
}
