//! π: the uncovered-combinations store for one active parameter prefix.

use super::bitmap::Bitmap;
use super::index::combination_rank;

/// An ordered tuple of parameter indices, strictly ascending.
pub type Combination = Vec<usize>;

/// π holds one bitmap per size-`t` combination whose largest index is the
/// currently active parameter `i` and whose other `t-1` indices are drawn
/// from `{0..i-1}`. A set bit means the corresponding value tuple of that
/// combination has not yet been covered by any row.
#[derive(Debug, Clone)]
pub struct Pi {
    combinations: Vec<Combination>,
    bitmaps: Vec<Bitmap>,
}

impl Pi {
    /// Construct π for active parameter `i` at strength `t`, over parameters
    /// whose domain sizes are `domain_sizes` (indexed by parameter index).
    pub fn construct(i: usize, t: usize, domain_sizes: &[usize]) -> Self {
        let free_combos = combinations_of(i, t - 1);

        let mut combinations = Vec::with_capacity(free_combos.len());
        let mut bitmaps = Vec::with_capacity(free_combos.len());

        for free in free_combos {
            let width: usize = free.iter().chain(std::iter::once(&i)).map(|&p| domain_sizes[p]).product();

            let mut combination = free;
            combination.push(i);

            combinations.push(combination);
            bitmaps.push(Bitmap::all_ones(width));
        }

        Pi { combinations, bitmaps }
    }

    pub fn combinations(&self) -> &[Combination] {
        &self.combinations
    }

    pub fn bitmaps(&self) -> &[Bitmap] {
        &self.bitmaps
    }

    pub fn bitmaps_mut(&mut self) -> &mut [Bitmap] {
        &mut self.bitmaps
    }

    pub fn replace_bitmaps(&mut self, bitmaps: Vec<Bitmap>) {
        debug_assert_eq!(bitmaps.len(), self.bitmaps.len());
        self.bitmaps = bitmaps;
    }

    /// Index into `combinations`/`bitmaps` of the combination `free ∪ {i}`,
    /// given just the free (non-`i`) parameters. Used by callers that only
    /// have the free part at hand (vertical extension re-derives indices by
    /// walking `combinations()` directly instead).
    pub fn index_of_free(&self, i: usize, free: &[usize]) -> usize {
        combination_rank(i, free)
    }

    pub fn len(&self) -> usize {
        self.combinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combinations.is_empty()
    }
}

/// All size-`k` subsets of `{0..n}`, in ascending lexicographic order. This
/// is the same enumeration order `combination_rank` assigns ranks to, so
/// `combinations_of(n, k)[r] `is always the combination of rank `r`.
fn combinations_of(n: usize, k: usize) -> Vec<Vec<usize>> {
    if k == 0 {
        return vec![Vec::new()];
    }
    if k > n {
        return Vec::new();
    }

    let mut result = Vec::new();
    let mut combo: Vec<usize> = (0..k).collect();

    loop {
        result.push(combo.clone());

        let mut i = k;
        loop {
            if i == 0 {
                return result;
            }
            i -= 1;
            if combo[i] != i + n - k {
                break;
            }
        }
        combo[i] += 1;
        for j in i + 1..k {
            combo[j] = combo[j - 1] + 1;
        }
    }
}
