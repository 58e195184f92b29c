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

use clap::Parser;

use msf::{DefInt, DefFloat};
use msf::init;
use msf::common::graph_io::read_graph_from_file;
use msf::common::io::read_file_to_vec_seq;
use msf::graph::Graph;
use msf::msf::{kruskal_msf, prim_msf};
use msf::msf::verify::{check_cut_property, check_forest, check_weight, CheckError};

const TOLERANCE: DefFloat = 1e-5;

#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Args {
    /// msf results filename (one edge id per line)
    #[clap(value_parser, required=true)]
    rfname: String,

    /// the input graph's filename
    #[clap(value_parser, required=true)]
    ifname: String,

    /// skip the O(nm) cut property check
    #[clap(long, value_parser, required=false, default_value_t=false)]
    no_cut: bool,
}

pub fn check(g: &Graph, out: &[DefInt], cut: bool) -> Result<(), CheckError> {
    let mut f = Graph::new(g.num_vertices());
    for &id in out {
        let e = g.edge_by_id(id).ok_or(CheckError::UnknownEdge(id))?;
        // a repeated id is a cycle of length two
        f.insert_edge(*e).map_err(|_| CheckError::Cycle(id))?;
    }
    check_forest(g, &f)?;

    // the references are independent of each other
    let (kruskal, prim) = rayon::join(
        || kruskal_msf::minimum_spanning_forest(g),
        || prim_msf::minimum_spanning_forest(g),
    );
    check_weight(&kruskal, &f, TOLERANCE)?;
    check_weight(&prim, &f, TOLERANCE)?;

    if cut { check_cut_property(g, &f, TOLERANCE)?; }
    Ok(())
}

fn main() {
    init!();

    let args = Args::parse();
    let g = match read_graph_from_file(&args.ifname) {
        Ok(g) => g,
        Err(e) => { eprintln!("{}: {e}", args.ifname); std::process::exit(1); }
    };
    let r: Vec<DefInt> = match read_file_to_vec_seq(&args.rfname) {
        Ok(r) => r,
        Err(e) => { eprintln!("{}: {e}", args.rfname); std::process::exit(1); }
    };
    match check(&g, &r, !args.no_cut) {
        Ok(()) => println!("OK"),
        Err(e) => { println!("ERR: {e}"); std::process::exit(1); }
    }
}
