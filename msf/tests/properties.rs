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

use proptest::prelude::*;

use msf::algorithm::contraction::{boruvka_step, TieBreak};
use msf::graph::Graph;
use msf::msf::kkt_msf::{drop_f_heavy, Kkt, KktConfig};
use msf::msf::{kruskal_msf, verify};
use msf::union_find::UnionFind;

fn arb_graph(max_n: usize, max_m: usize) -> impl Strategy<Value = Graph> {
    (1..=max_n).prop_flat_map(move |n| {
        let edge = (0..n as u32, 0..n as u32, 0u32..20);
        proptest::collection::vec(edge, 0..=max_m).prop_map(move |es| {
            let es: Vec<_> = es.into_iter().map(|(u, v, w)| (u, v, w as f64)).collect();
            Graph::from_edges(n, &es).unwrap()
        })
    })
}

fn arb_tie() -> impl Strategy<Value = TieBreak> {
    prop_oneof![Just(TieBreak::FirstSeen), Just(TieBreak::LowestId)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn kkt_is_a_minimum_spanning_forest(
        g in arb_graph(40, 120),
        tie_break in arb_tie(),
        fallback_below in 0usize..10,
        seed in any::<u64>(),
    ) {
        let cfg = KktConfig { tie_break, fallback_below, seed: Some(seed), ..KktConfig::default() };
        let f = Kkt::new(cfg).run(&g);
        let reference = kruskal_msf::minimum_spanning_forest(&g);
        prop_assert_eq!(verify::check_forest(&g, &f), Ok(()));
        prop_assert_eq!(verify::check_weight(&reference, &f, 1e-9), Ok(()));
        prop_assert_eq!(verify::check_cut_property(&g, &f, 1e-9), Ok(()));
    }

    #[test]
    fn boruvka_step_keeps_connectivity(g in arb_graph(30, 80), tie in arb_tie()) {
        let c = boruvka_step(&g, tie);
        prop_assert_eq!(c.supernode.len(), g.num_vertices());
        prop_assert!(c.graph.num_vertices() <= g.num_vertices().max(1));
        prop_assert_eq!(
            verify::count_components(&c.graph),
            verify::count_components(&g)
        );
        prop_assert_eq!(c.chosen.len(), g.num_vertices() - c.graph.num_vertices());

        // each contracted edge is the original one relabelled, and no pair repeats
        let mut pairs = std::collections::HashSet::new();
        for e in c.graph.edges() {
            let orig = g.edge_by_id(e.id).unwrap();
            prop_assert!(!e.is_loop());
            prop_assert_eq!(e.w, orig.w);
            prop_assert_eq!(c.supernode[orig.u as usize], e.u);
            prop_assert_eq!(c.supernode[orig.v as usize], e.v);
            prop_assert!(pairs.insert((e.u.min(e.v), e.u.max(e.v))));
        }
    }

    #[test]
    fn filtering_against_the_msf_keeps_its_weight(g in arb_graph(30, 90)) {
        let f = kruskal_msf::minimum_spanning_forest(&g);
        let kept = drop_f_heavy(&g, &f);
        let again = kruskal_msf::minimum_spanning_forest(&kept);
        prop_assert_eq!(verify::check_weight(&f, &again, 1e-9), Ok(()));
        for e in f.edges() { prop_assert!(kept.contains_edge(e.id)); }
    }

    #[test]
    fn union_find_counts_components(n in 1usize..50, pairs in proptest::collection::vec((0u32..50, 0u32..50), 0..80)) {
        let mut uf = UnionFind::new(n);
        let mut naive: Vec<usize> = (0..n).collect();
        for (a, b) in pairs.into_iter().filter(|&(a, b)| (a as usize) < n && (b as usize) < n) {
            uf.merge(a, b);
            let (la, lb) = (naive[a as usize], naive[b as usize]);
            for l in naive.iter_mut() { if *l == lb { *l = la; } }
        }
        let mut labels = naive.clone();
        labels.sort();
        labels.dedup();
        prop_assert_eq!(uf.num_components(), labels.len());
        for a in 0..n as u32 {
            for b in 0..n as u32 {
                prop_assert_eq!(uf.same_set(a, b), naive[a as usize] == naive[b as usize]);
            }
        }
    }
}
