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

use msf::init;
use msf::common::generators::random_euclidean_graph;
use msf::common::graph_io::write_graph_to_file;

#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Args {
    /// number of vertices
    #[clap(value_parser, required=true)]
    n: usize,

    /// number of edges
    #[clap(value_parser, required=true)]
    m: usize,

    /// the generator's seed
    #[clap(value_parser, required=true)]
    seed: u64,

    /// the output filename
    #[clap(value_parser, required=true)]
    ofname: String,
}

fn main() {
    init!();

    let args = Args::parse();
    let g = random_euclidean_graph(args.n, args.m, args.seed);
    if let Err(e) = write_graph_to_file(&g, &args.ofname) {
        eprintln!("{}: {e}", args.ofname);
        std::process::exit(1);
    }
    tracing::info!(n = args.n, m = args.m, weight = g.edge_weight_sum(), "written {}", args.ofname);
}
