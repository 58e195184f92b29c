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
use parlay::primitives::pack;

use crate::graph::Graph;


/// Keeps each edge of `g` independently with probability 1/2.
///
/// Edge `i` (in insertion order) is kept iff bit `i` of the stream `r` is
/// set, so the same `r` always picks the same subgraph. Callers advance `r`
/// between rounds. Weights, endpoints and ids are untouched.
pub fn sample_edges(g: &Graph, r: &Random) -> Graph {
    let flags: Vec<bool> = (0..g.num_edges() as u64)
        .map(|i| r.ith_bit(i))
        .collect();
    let mut kept = vec![];
    pack(g.edges(), &flags, &mut kept);
    Graph::from_derived(g.num_vertices(), kept)
}
