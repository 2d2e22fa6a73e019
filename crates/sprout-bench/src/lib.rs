//! Fixture builders shared by the sprout benchmarks.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use sprout_core::Vector;

/// Build a vector of `n` sequential integers through the append chain.
pub fn int_vector(n: usize) -> Vector<u64> {
    let mut v = Vector::new();
    for i in 0..n {
        v = v.append(i as u64);
    }
    v
}

/// An ASCII test string of `n` bytes.
pub fn ascii_string(n: usize) -> String {
    let alphabet = b"abcdefghijklmnopqrstuvwxyz";
    (0..n).map(|i| alphabet[i % alphabet.len()] as char).collect()
}
