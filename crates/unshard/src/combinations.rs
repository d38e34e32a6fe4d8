//! lazy lexicographic k-subset enumeration
//!
//! the emission order is load-bearing: the search keeps the first subset
//! that reaches a given agreement count, so ties resolve to the earliest
//! combination in this order.

/// iterator over all strictly increasing k-tuples of indices in `0..n`
#[derive(Clone, Debug)]
pub struct Combinations {
    n: usize,
    k: usize,
    idx: Vec<usize>,
    exhausted: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            k,
            idx: (0..k).collect(),
            exhausted: k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.exhausted {
            return None;
        }
        let current = self.idx.clone();
        // advance: bump the rightmost index not yet at its ceiling, then
        // re-pack everything to its right
        match (0..self.k).rev().find(|&i| self.idx[i] != i + self.n - self.k) {
            Some(i) => {
                self.idx[i] += 1;
                for j in i + 1..self.k {
                    self.idx[j] = self.idx[j - 1] + 1;
                }
            }
            None => self.exhausted = true,
        }
        Some(current)
    }
}
