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

use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hasher};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::utilities::hash64;

/// A counter-based random number generator.
///
/// A `Random` never changes on its own: `ith_rand(i)` is a pure function of
/// the state and `i`, so a stream of draws is obtained by indexing, and a new
/// stream by `next` or `fork`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Random {
    state: u64,
}

impl Random {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Seeds a generator from the clock, the process id and the per-process
    /// keys of the standard library's `RandomState`.
    pub fn from_entropy() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        let mut h = RandomState::new().build_hasher();
        h.write_u64(nanos);
        h.write_u32(std::process::id());
        Self::new(hash64(h.finish() ^ nanos))
    }

    pub fn fork(&self, i: u64) -> Self {
        Self::new(hash64(hash64(i.wrapping_add(self.state))))
    }

    pub fn next(&self) -> Self {
        self.fork(0)
    }

    pub fn ith_rand(&self, i: u64) -> u64 {
        hash64(i.wrapping_add(self.state))
    }

    /// A fair coin for draw `i`, taken from the high bit of the hash.
    pub fn ith_bit(&self, i: u64) -> bool {
        self.ith_rand(i) >> 63 == 1
    }

    /// Draw `i` mapped into `0..bound`. `bound` must be positive.
    pub fn ith_below(&self, i: u64, bound: u64) -> u64 {
        debug_assert!(bound > 0);
        self.ith_rand(i) % bound
    }

    pub fn state(&self) -> u64 {
        self.state
    }
}
