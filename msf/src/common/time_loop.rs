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

use std::time::{Duration, Instant};

use parlay::Timer;
use tracing::info;


/// Runs `f` until `delay` has passed to warm up, then `rounds` more times,
/// calling `init` before and `end` after every run. Only `f` is timed.
/// Returns the mean of the timed rounds.
pub fn time_loop<I, F, E>(
    name: &str,
    rounds: usize,
    delay: Duration,
    mut init: I,
    mut f: F,
    mut end: E,
) -> Duration
where
    I: FnMut(),
    F: FnMut(),
    E: FnMut(),
{
    let warm = Instant::now();
    loop {
        init(); f(); end();
        if warm.elapsed() >= delay { break; }
    }

    let mut t = Timer::new(name);
    let mut total = Duration::ZERO;
    for i in 0..rounds {
        init();
        t.start();
        f();
        let d = t.stop();
        end();
        info!(round = i, secs = d.as_secs_f64(), "{name}");
        total += d;
    }
    t.total();
    if rounds == 0 { Duration::ZERO } else { total / rounds as u32 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_warmup_and_rounds() {
        let (mut inits, mut runs, mut ends) = (0, 0, 0);
        let mean = time_loop(
            "t",
            3,
            Duration::ZERO,
            || inits += 1,
            || runs += 1,
            || ends += 1,
        );
        assert_eq!((inits, runs, ends), (4, 4, 4));
        assert!(mean < Duration::from_secs(1));
    }
}
