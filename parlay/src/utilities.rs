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

use num_traits::PrimInt;


/// returns the smallest `a` such that 2^a is greater than or equal to i.
pub fn log2_up<T: PrimInt>(i: T) -> usize {
    debug_assert!(i > T::zero());
    let mut a = 0;
    let mut b = i - T::one();
    while b > T::zero() {
        b = b >> 1usize;
        a += 1;
    }
    a
}

/// calculates a hash of u based on numerical recipes.
#[inline(always)]
pub fn hash64(u: u64) -> u64 {
    let mut v = u.overflowing_mul(3_935_559_000_370_003_845).0;
    v = v.overflowing_add(2_691_343_689_449_507_681).0;
    v ^= v >> 21;
    v ^= v << 37;
    v ^= v >> 4;
    v = v.overflowing_mul(4_768_777_513_237_032_717).0;
    v ^= v << 20;
    v ^= v >> 41;
    v ^= v << 5;
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log2_up_small_values() {
        assert_eq!(log2_up(1u32), 0);
        assert_eq!(log2_up(2u32), 1);
        assert_eq!(log2_up(3u32), 2);
        assert_eq!(log2_up(8usize), 3);
        assert_eq!(log2_up(9usize), 4);
    }

    #[test]
    fn hash64_spreads_neighbours() {
        let hs: Vec<u64> = (0..64).map(hash64).collect();
        for i in 1..hs.len() { assert_ne!(hs[i - 1], hs[i]); }
    }
}
