//! Exact counting and combinadic unranking of k-subsets.
//!
//! Everything here is pure arithmetic on `u64`. Board axes never exceed ten
//! cells, far below the point where `n!` overflows (`n > 20`).

use tracing::instrument;

/// `P(n, k)`: ordered selections of `k` out of `n`.
pub fn permutation(n: u64, k: u64) -> u64 {
    if k == 0 {
        return 1;
    }
    if n < k {
        return 0;
    }
    (n - k + 1..=n).product()
}

/// `C(n, k)`: unordered selections of `k` out of `n`.
pub fn combination(n: u64, k: u64) -> u64 {
    if k == 0 || n == k {
        return 1;
    }
    if n < k {
        return 0;
    }
    permutation(n, k) / factorial(k)
}

/// `n!`, i.e. `P(n, n)`.
pub fn factorial(n: u64) -> u64 {
    permutation(n, n)
}

/// Unranks indices into the combinatorial number system for `C(n, k)`.
///
/// Rank 0 is the lexicographically smallest subset `[0, 1, .., k - 1]` and
/// the last rank is `[n - k, .., n - 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Combinadic {
    n: u64,
    k: u64,
    count: u64,
}

impl Combinadic {
    /// Unranker for `k`-subsets of `n` items.
    pub fn new(n: u64, k: u64) -> Self {
        Self {
            n,
            k,
            count: combination(n, k),
        }
    }

    /// Number of subsets, `C(n, k)`.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Ascending item indices of the subset with rank `m`, or `None` past the end.
    pub fn digits(&self, m: u64) -> Option<Vec<usize>> {
        if m >= self.count {
            return None;
        }

        let mut digits = Vec::with_capacity(self.k as usize);
        let mut a = self.n;
        let mut b = self.k;
        let mut x = self.count - 1 - m;
        for _ in 0..self.k {
            a -= 1;
            while x < combination(a, b) {
                a -= 1;
            }
            digits.push((self.n - 1 - a) as usize);
            x -= combination(a, b);
            b -= 1;
        }
        Some(digits)
    }
}

/// The `k`-subsets of a sequence, in combinadic order.
///
/// Each subset keeps the relative order of the seed. Iteration is exact-size,
/// and [`Iterator::nth`] jumps straight to the requested rank.
#[derive(Debug, Clone)]
pub struct Combinations<T> {
    seed: Vec<T>,
    combinadic: Combinadic,
    next: u64,
}

impl<T: Clone> Combinations<T> {
    /// Random access to the subset with rank `index`.
    pub fn get(&self, index: u64) -> Option<Vec<T>> {
        self.combinadic
            .digits(index)
            .map(|digits| digits.into_iter().map(|i| self.seed[i].clone()).collect())
    }

    /// Total number of subsets, regardless of iteration progress.
    pub fn count_all(&self) -> u64 {
        self.combinadic.count()
    }
}

impl<T: Clone> Iterator for Combinations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let subset = self.get(self.next)?;
        self.next += 1;
        Some(subset)
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.next = self.next.saturating_add(n as u64);
        self.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.combinadic.count().saturating_sub(self.next) as usize;
        (left, Some(left))
    }
}

impl<T: Clone> ExactSizeIterator for Combinations<T> {}

/// All `k`-subsets of `items` in combinadic order.
///
/// `k == 0` yields a single empty subset; `k > items.len()` yields nothing.
#[instrument(level = "trace", skip(items), fields(n = items.len()))]
pub fn combinations<T: Clone>(items: Vec<T>, k: usize) -> Combinations<T> {
    let combinadic = Combinadic::new(items.len() as u64, k as u64);
    Combinations {
        seed: items,
        combinadic,
        next: 0,
    }
}
