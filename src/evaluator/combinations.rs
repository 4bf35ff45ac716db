/// Number of ways to choose `k` items from `n`.
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

/// Iterator over every `k`-subset of the indices `0..n`, in lexicographic order.
///
/// ```
/// use hand_ranker::evaluator::Combinations;
///
/// let combos: Vec<Vec<usize>> = Combinations::new(4, 2).collect();
/// assert_eq!(combos.len(), 6);
/// assert_eq!(combos[0], vec![0, 1]);
/// assert_eq!(combos[5], vec![2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    remaining: usize,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self { n, indices: (0..k).collect(), remaining: binomial(n, k) }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let result = self.indices.clone();

        // Find the rightmost index that can still move right
        let k = self.indices.len();
        if let Some(i) = (0..k).rev().find(|&i| self.indices[i] < self.n - k + i) {
            self.indices[i] += 1;
            // Reset all indices to the right
            for j in (i + 1)..k {
                self.indices[j] = self.indices[j - 1] + 1;
            }
        }

        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Combinations {}
