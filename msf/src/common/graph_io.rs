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

use std::fs;
use std::fmt::Write as _;
use std::path::Path;

use rayon::prelude::*;
use tracing::debug;

use crate::{DefInt, DefFloat};
use super::error::{GraphResult, ParseGraphError};
use super::graph::Graph;


fn parse_triple(edge: usize, t: &[&str]) -> Result<(DefInt, DefInt, DefFloat), ParseGraphError> {
    if t.len() != 3 { return Err(ParseGraphError::Truncated { edge }); }
    let bad = |token: &str| ParseGraphError::BadToken { edge, token: token.to_string() };
    let u = t[0].parse().map_err(|_| bad(t[0]))?;
    let v = t[1].parse().map_err(|_| bad(t[1]))?;
    let w = t[2].parse().map_err(|_| bad(t[2]))?;
    Ok((u, v, w))
}

/// Parses a vertex count followed by `origin destination weight` triples,
/// separated by any whitespace. Edges get ids in input order.
pub fn parse_graph(s: &str) -> GraphResult<Graph> {
    let tokens: Vec<&str> = s.split_whitespace().collect();
    let (head, rest) = tokens
        .split_first()
        .ok_or(ParseGraphError::MissingHeader)?;
    let n: usize = head
        .parse()
        .map_err(|_| ParseGraphError::BadVertexCount(head.to_string()))?;

    let triples: Vec<(DefInt, DefInt, DefFloat)> = rest
        .par_chunks(3)
        .enumerate()
        .map(|(i, t)| parse_triple(i, t))
        .collect::<Result<_, _>>()?;

    debug!(n, m = triples.len(), "making the graph");
    Ok(Graph::from_edges(n, &triples)?)
}

pub fn read_graph_from_file<P: AsRef<Path>>(fname: P) -> GraphResult<Graph> {
    debug!(file = %fname.as_ref().display(), "reading graph");
    let s = fs::read_to_string(fname)?;
    parse_graph(&s)
}

/// The text form read by `parse_graph`, one edge per line.
pub fn format_graph(g: &Graph) -> String {
    let mut s = format!("{}\n", g.num_vertices());
    for e in g.edges() {
        let _ = writeln!(s, "{} {} {}", e.u, e.v, e.w);
    }
    s
}

pub fn write_graph_to_file<P: AsRef<Path>>(g: &Graph, fname: P) -> GraphResult<()> {
    fs::write(fname, format_graph(g))?;
    Ok(())
}
