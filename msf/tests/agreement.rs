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

use msf::algorithm::contraction::TieBreak;
use msf::common::generators::random_euclidean_graph;
use msf::graph::Graph;
use msf::msf::kkt_msf::{Kkt, KktConfig};
use msf::msf::{boruvka_msf, kruskal_msf, prim_msf};
use msf::msf::verify::{check_cut_property, check_forest, check_weight, count_components};

const TOL: f64 = 1e-5;

const GRAPHS: [(usize, usize, u64); 5] = [
    (10, 30, 982832),
    (15, 50, 892893),
    (250, 1200, 329823),
    (1000, 2000, 823238),
    (1000, 15000, 11829119),
];

fn configs() -> Vec<KktConfig> {
    let mut out = vec![];
    for tie_break in [TieBreak::FirstSeen, TieBreak::LowestId] {
        for (fallback_below, max_depth) in [(8, 64), (0, 64), (2, 3), (usize::MAX, 64), (8, 0)] {
            out.push(KktConfig { tie_break, fallback_below, max_depth, seed: Some(4242) });
        }
    }
    out
}

fn check_against(g: &Graph, reference: &Graph, f: &Graph, what: &str) {
    assert_eq!(check_forest(g, f), Ok(()), "{what}");
    assert_eq!(check_weight(reference, f, TOL), Ok(()), "{what}");
}

#[test]
fn kkt_agrees_with_oracles() {
    for (n, m, seed) in GRAPHS {
        let g = random_euclidean_graph(n, m, seed);
        let (kruskal, prim) = rayon::join(
            || kruskal_msf::minimum_spanning_forest(&g),
            || prim_msf::minimum_spanning_forest(&g),
        );
        let boruvka = boruvka_msf::minimum_spanning_forest(&g);
        check_against(&g, &kruskal, &prim, "prim");
        check_against(&g, &kruskal, &boruvka, "boruvka");
        for cfg in configs() {
            let f = Kkt::new(cfg).run(&g);
            check_against(&g, &kruskal, &f, &format!("kkt {cfg:?} on ({n}, {m}, {seed})"));
        }
    }
}

#[test]
fn kkt_satisfies_cut_property() {
    for (n, m, seed) in &GRAPHS[..3] {
        let g = random_euclidean_graph(*n, *m, *seed);
        let f = Kkt::new(KktConfig { seed: Some(*seed), ..KktConfig::default() }).run(&g);
        assert_eq!(check_cut_property(&g, &f, TOL), Ok(()));
        assert_eq!(f.num_edges(), n - count_components(&g));
    }
}

#[test]
fn unseeded_runs_agree_on_weight() {
    let g = random_euclidean_graph(250, 1200, 329823);
    let reference = kruskal_msf::minimum_spanning_forest(&g);
    for _ in 0..4 {
        let f = Kkt::new(KktConfig::default()).run(&g);
        check_against(&g, &reference, &f, "unseeded");
    }
}

#[test]
fn tie_breaks_pick_different_forests_of_equal_weight() {
    // ids 2, 1, 0 are on the sides (0,1), (0,2), (1,2)
    let mut g = Graph::new(3);
    for (u, v, id) in [(0, 1, 2), (0, 2, 1), (1, 2, 0)] {
        g.insert_edge(msf::graph::WghEdge::new(u, v, 1.0, id)).unwrap();
    }
    let ids = |tie_break| {
        let f = boruvka_msf::minimum_spanning_forest_with(&g, tie_break);
        let mut ids: Vec<_> = f.edges().iter().map(|e| e.id).collect();
        ids.sort();
        ids
    };
    assert_eq!(ids(TieBreak::FirstSeen), vec![1, 2]);
    assert_eq!(ids(TieBreak::LowestId), vec![0, 1]);
}

#[test]
fn equal_weight_grid() {
    let side = 12u32;
    let mut es = vec![];
    for r in 0..side {
        for c in 0..side {
            let v = r * side + c;
            if c + 1 < side { es.push((v, v + 1, 1.0)); }
            if r + 1 < side { es.push((v, v + side, 1.0)); }
        }
    }
    let g = Graph::from_edges((side * side) as usize, &es).unwrap();
    for cfg in configs() {
        let f = Kkt::new(cfg).run(&g);
        assert_eq!(check_forest(&g, &f), Ok(()), "{cfg:?}");
        assert!((f.edge_weight_sum() - (side * side - 1) as f64).abs() < TOL);
    }
}
