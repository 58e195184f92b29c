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

use std::time::Duration;

use tracing::info;

use msf::{define_algs, define_args, finalize, init};
use msf::DefInt;
use msf::algorithm::contraction::TieBreak;
use msf::common::graph_io::read_graph_from_file;
use msf::common::io::write_slice_to_file_seq;
use msf::graph::Graph;
use msf::msf::{boruvka_msf, kruskal_msf, prim_msf};
use msf::msf::kkt_msf::{Kkt, KktConfig};

// `fmt` and `ValueEnum` come in with `define_algs!`
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
enum Tie { FirstSeen, LowestId }

impl fmt::Display for Tie {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Tie::FirstSeen => write!(f, "first-seen"),
            Tie::LowestId => write!(f, "lowest-id"),
        }
    }
}

impl From<Tie> for TieBreak {
    fn from(t: Tie) -> Self {
        match t {
            Tie::FirstSeen => TieBreak::FirstSeen,
            Tie::LowestId => TieBreak::LowestId,
        }
    }
}

define_args!(
    Algs::KKT,
    (tie_break, Tie, Tie::FirstSeen),
    (fallback_below, usize, KktConfig::default().fallback_below),
    (max_depth, usize, KktConfig::default().max_depth);
    (seed, u64)
);

define_algs!(
    (KKT, "kkt"),
    (BORUVKA, "boruvka"),
    (KRUSKAL, "kruskal"),
    (PRIM, "prim")
);

pub fn run(alg: Algs, rounds: usize, config: KktConfig, g: &Graph) -> (Graph, Duration) {
    let mut kkt = Kkt::new(config);
    if alg == Algs::KKT { info!(config = ?kkt.config(), "kkt"); }
    let mut r = Graph::new(g.num_vertices());

    let mean = time_loop(
        "msf",
        rounds,
        Duration::new(1, 0),
        || {},
        || {
            r = match alg {
                Algs::KKT       =>  kkt.run(g),
                Algs::BORUVKA   =>  boruvka_msf::minimum_spanning_forest_with(g, config.tie_break),
                Algs::KRUSKAL   =>  kruskal_msf::minimum_spanning_forest(g),
                Algs::PRIM      =>  prim_msf::minimum_spanning_forest(g),
            };
        },
        || {}
    );
    (r, mean)
}

fn main() {
    init!();

    let args = Args::parse();
    let g = match read_graph_from_file(&args.ifname) {
        Ok(g) => g,
        Err(e) => { eprintln!("{}: {e}", args.ifname); std::process::exit(1); }
    };
    let config = KktConfig {
        tie_break: args.tie_break.into(),
        fallback_below: args.fallback_below,
        max_depth: args.max_depth,
        seed: args.seed,
    };
    let (f, d) = run(args.algorithm, args.rounds, config, &g);

    println!("weight:  {}", f.edge_weight_sum());
    let r: Vec<DefInt> = f.edges().iter().map(|e| e.id).collect();
    finalize!(
        args,
        r,
        d,
        write_slice_to_file_seq(&r, &args.ofname)
    );
}
