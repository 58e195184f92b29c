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

use parlay::{Random, Timer};
use parlay::primitives::pack;
use tracing::{debug, error};

use crate::algorithm::contraction::{boruvka_step, TieBreak};
use crate::algorithm::path_max::PathMax;
use crate::algorithm::sample::sample_edges;
use crate::graph::{Graph, WghEdge};
use super::boruvka_msf;


/// Knobs of the KKT recursion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KktConfig {
    /// Tie-breaking of the Borůvka steps.
    pub tie_break: TieBreak,
    /// Graphs with fewer vertices are finished by Borůvka directly.
    pub fallback_below: usize,
    /// Recursion depth at which Borůvka takes over regardless of size.
    pub max_depth: usize,
    /// Seed of the sampling stream; drawn from entropy when `None`.
    pub seed: Option<u64>,
}

impl Default for KktConfig {
    fn default() -> Self {
        Self {
            tie_break: TieBreak::FirstSeen,
            fallback_below: 8,
            max_depth: 64,
            seed: None,
        }
    }
}

/// The Karger-Klein-Tarjan randomized minimum spanning forest algorithm.
///
/// One `Kkt` owns one sampling stream. The stream is advanced before every
/// sampling round and carried through the whole recursion.
pub struct Kkt {
    config: KktConfig,
    rng: Random,
}

impl Kkt {
    pub fn new(config: KktConfig) -> Self {
        let rng = config.seed.map_or_else(Random::from_entropy, Random::new);
        Self { config, rng }
    }

    pub fn config(&self) -> &KktConfig { &self.config }

    /// Computes a minimum spanning forest of `g`. The result has the
    /// vertices of `g` and carries the edges of `g` under their ids.
    pub fn run(&mut self, g: &Graph) -> Graph {
        let mut t = Timer::new("kkt"); t.start();
        let msf = self.msf(g, 0);
        t.next("msf");
        msf
    }

    fn msf(&mut self, g: &Graph, depth: usize) -> Graph {
        let n = g.num_vertices();
        if n <= 1 || g.is_empty() { return Graph::new(n); }

        if n < self.config.fallback_below || depth >= self.config.max_depth {
            debug!(depth, n, m = g.num_edges(), "kkt: borůvka fallback");
            return boruvka_msf::minimum_spanning_forest_with(g, self.config.tie_break);
        }

        let tie = self.config.tie_break;
        let first = boruvka_step(g, tie);
        let second = boruvka_step(&first.graph, tie);
        let g2 = &second.graph;

        let mut msf = Graph::new(n);
        let mut missing = resolve(g, &first.chosen, &mut msf);
        missing += resolve(g, &second.chosen, &mut msf);

        debug!(
            depth,
            n,
            m = g.num_edges(),
            n2 = g2.num_vertices(),
            m2 = g2.num_edges(),
            "kkt: contracted twice"
        );
        if g2.is_empty() { return msf; }

        self.rng = self.rng.next();
        let h = sample_edges(g2, &self.rng);
        let f = self.msf(&h, depth + 1);

        let g3 = drop_f_heavy(g2, &f);
        debug!(depth, sampled = h.num_edges(), kept = g3.num_edges(), "kkt: filtered");

        let f2 = self.msf(&g3, depth + 1);
        missing += resolve(g, f2.edges(), &mut msf);
        debug_assert_eq!(missing, 0, "edges lost their ids at depth {depth}");
        msf
    }
}

/// Copies `es`, which carry ids of `g`'s edges, into `msf` as the edges of
/// `g` they stand for. Returns how many ids `g` does not know; every derived
/// edge keeps the id of an edge of `g`, so this is 0 unless that breaks.
fn resolve(g: &Graph, es: &[WghEdge], msf: &mut Graph) -> usize {
    let mut missing = 0;
    for e in es {
        match g.edge_by_id(e.id) {
            Some(orig) => msf.push_edge(*orig),
            None => {
                error!(id = e.id, edge = %e, "edge id is not in the graph, forest is incomplete");
                missing += 1;
            }
        }
    }
    missing
}

/// Keeps the edges of `g` that are not F-heavy: those whose endpoints `f`
/// does not connect, or that are no heavier than the heaviest edge of the
/// `f`-path between them.
pub fn drop_f_heavy(g: &Graph, f: &Graph) -> Graph {
    let pm = PathMax::new(f);
    let flags: Vec<bool> = g.edges()
        .iter()
        .map(|e| !pm.query(e.u, e.v).is_exceeded_by(e.w))
        .collect();
    let mut kept = vec![];
    pack(g.edges(), &flags, &mut kept);
    Graph::from_derived(g.num_vertices(), kept)
}

/// KKT with the default configuration and a freshly seeded stream.
pub fn minimum_spanning_forest(g: &Graph) -> Graph {
    Kkt::new(KktConfig::default()).run(g)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn f_heavy_edges_are_dropped() {
        let g = Graph::from_edges(4, &[
            (0, 1, 1.0), (1, 2, 2.0), (0, 2, 3.0), (2, 3, 1.0), (0, 2, 2.0),
        ]).unwrap();
        let f = Graph::from_edges(4, &[(0, 1, 1.0), (1, 2, 2.0)]).unwrap();
        let kept: Vec<_> = drop_f_heavy(&g, &f).edges().iter().map(|e| e.id).collect();
        // (0,2,3) is heavier than the 0-1-2 path; (0,2,2) ties and stays;
        // (2,3) has no path in f
        assert_eq!(kept, vec![0, 1, 3, 4]);
    }

    #[test]
    fn fixed_seed_is_reproducible() {
        let es: Vec<_> = (0..200u32)
            .map(|i| (i % 50, (i * 7 + 3) % 50, ((i * 37) % 101) as f64))
            .collect();
        let g = Graph::from_edges(50, &es).unwrap();
        let cfg = KktConfig { seed: Some(17), fallback_below: 2, ..KktConfig::default() };
        let a: Vec<_> = Kkt::new(cfg).run(&g).edges().iter().map(|e| e.id).collect();
        let b: Vec<_> = Kkt::new(cfg).run(&g).edges().iter().map(|e| e.id).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn result_uses_original_endpoints() {
        let g = Graph::from_edges(6, &[
            (0, 1, 4.0), (1, 2, 1.0), (2, 3, 3.0),
            (3, 4, 2.0), (4, 5, 5.0), (5, 0, 6.0), (1, 4, 0.5),
        ]).unwrap();
        let cfg = KktConfig { seed: Some(1), fallback_below: 0, ..KktConfig::default() };
        let msf = Kkt::new(cfg).run(&g);
        assert_eq!(msf.num_edges(), 5);
        for e in msf.edges() {
            assert_eq!(g.edge_by_id(e.id), Some(e));
        }
    }

    #[test]
    fn unknown_ids_are_counted_not_copied() {
        let g = Graph::from_edges(3, &[(0, 1, 1.0), (1, 2, 2.0)]).unwrap();
        let es = [WghEdge::new(0, 1, 1.0, 0), WghEdge::new(2, 0, 9.0, 7)];
        let mut msf = Graph::new(3);
        assert_eq!(resolve(&g, &es, &mut msf), 1);
        assert_eq!(msf.num_edges(), 1);
        assert_eq!(msf.edges()[0], *g.edge_by_id(0).unwrap());
    }

    #[test]
    fn config_is_kept() {
        let cfg = KktConfig { tie_break: TieBreak::LowestId, seed: Some(3), ..KktConfig::default() };
        assert_eq!(Kkt::new(cfg).config(), &cfg);
        assert_eq!(Kkt::new(KktConfig::default()).config().fallback_below, 8);
    }
}
