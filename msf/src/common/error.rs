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

/// Errors raised while building a graph or loading one from a file.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("vertex {vertex} is out of range for a graph with {n} vertices")]
    VertexOutOfRange { vertex: DefInt, n: usize },

    #[error("edge weight {0} is not a number")]
    InvalidWeight(DefFloat),

    #[error("edge id {0} is already present in the graph")]
    DuplicateEdgeId(EdgeId),

    #[error("cannot read graph: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed graph input: {0}")]
    Parse(#[from] ParseGraphError),
}

/// Problems with the text form `N` followed by `origin destination weight`
/// triples.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseGraphError {
    #[error("missing vertex count")]
    MissingHeader,

    #[error("vertex count `{0}` is not a non-negative integer")]
    BadVertexCount(String),

    #[error("edge {edge}: cannot parse `{token}`")]
    BadToken { edge: usize, token: String },

    #[error("edge {edge}: expected `origin destination weight`, input ended early")]
    Truncated { edge: usize },
}

pub type GraphResult<T> = Result<T, GraphError>;
