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


/* -------------------- Pack -------------------- */
pub fn sum_bool_serial(flags: &[bool]) -> usize {
    flags.iter().filter(|&&f| f).count()
}

fn pack_serial_at<T, F>(arr_f: F, flags: &[bool], dest: &mut Vec<T>)
where
    F: Fn(usize) -> T,
{
    for (i, _) in flags.iter().enumerate().filter(|(_, &f)| f) {
        dest.push(arr_f(i));
    }
}

/// Collects `arr_f(i)` for every `i` with `flags[i]` set, in index order.
pub fn pack_serial<T, F>(arr_f: F, flags: &[bool], dest: &mut Vec<T>)
where
    F: Fn(usize) -> T,
{
    let m = sum_bool_serial(flags);
    *dest = Vec::with_capacity(m);
    pack_serial_at(arr_f, flags, dest);
}

/// Keeps the elements of `arr` whose flag is set. `flags` must be as long as
/// `arr`.
pub fn pack<T: Clone>(arr: &[T], flags: &[bool], dest: &mut Vec<T>) {
    debug_assert_eq!(arr.len(), flags.len());
    pack_serial(|i| arr[i].clone(), flags, dest);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_keeps_order() {
        let arr = [10, 11, 12, 13, 14];
        let flags = [true, false, true, true, false];
        let mut out = vec![];
        pack(&arr, &flags, &mut out);
        assert_eq!(out, vec![10, 12, 13]);
    }

    #[test]
    fn pack_empty() {
        let arr: [u8; 0] = [];
        let mut out = vec![1];
        pack(&arr, &[], &mut out);
        assert!(out.is_empty());
    }
}
