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

use std::{fs, io};
use std::path::Path;
use std::str::FromStr;


/// Writes one element per line.
pub fn write_slice_to_file_seq<T, P>(s: &[T], of: P) -> io::Result<()>
where
    T: ToString,
    P: AsRef<Path>,
{
    let s: Vec<String> = s
        .iter()
        .map(T::to_string)
        .collect();
    fs::write(of, s.join("\n"))
}

/// Reads one element per line. Blank lines are skipped; any other line that
/// does not parse is an `InvalidData` error naming its line number.
pub fn read_file_to_vec_seq<T, P>(fname: P) -> io::Result<Vec<T>>
where
    T: FromStr,
    P: AsRef<Path>,
{
    let s = fs::read_to_string(fname)?;
    s.lines()
        .enumerate()
        .map(|(i, l)| (i, l.trim()))
        .filter(|(_, l)| !l.is_empty())
        .map(|(i, l)| l.parse().map_err(|_| io::Error::new(
            io::ErrorKind::InvalidData,
            format!("line {}: cannot parse `{l}`", i + 1),
        )))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_survive_a_file() {
        let path = std::env::temp_dir()
            .join(format!("msf_io_test_{}.txt", std::process::id()));
        write_slice_to_file_seq(&[3u32, 1, 4, 1, 5], &path).unwrap();
        let back: Vec<u32> = read_file_to_vec_seq(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(back, vec![3, 1, 4, 1, 5]);
    }

    #[test]
    fn missing_file_is_an_error() {
        let r: io::Result<Vec<u32>> = read_file_to_vec_seq("/nonexistent/msf/ids.txt");
        assert!(r.is_err());
    }

    #[test]
    fn bad_line_is_invalid_data() {
        let path = std::env::temp_dir()
            .join(format!("msf_io_bad_{}.txt", std::process::id()));
        fs::write(&path, "3\n\n1\nx4\n5\n").unwrap();
        let r: io::Result<Vec<u32>> = read_file_to_vec_seq(&path);
        let _ = fs::remove_file(&path);
        let e = r.unwrap_err();
        assert_eq!(e.kind(), io::ErrorKind::InvalidData);
        assert!(e.to_string().contains("line 4"), "{e}");
    }

    #[test]
    fn blank_lines_are_skipped() {
        let path = std::env::temp_dir()
            .join(format!("msf_io_blank_{}.txt", std::process::id()));
        fs::write(&path, "7\n\n  8 \n").unwrap();
        let r: Vec<u32> = read_file_to_vec_seq(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(r, vec![7, 8]);
    }
}
