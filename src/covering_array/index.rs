//! Index arithmetic: combination ranks and value-tuple bit indices.
//!
//! These are the pure functions π is built on top of. Nothing here owns
//! state or does I/O; everything is total on well-formed inputs and
//! debug-asserts on misuse rather than returning a `Result`, since the
//! driver is the only caller and it always constructs well-formed inputs.

/// `C(n, k)`, computed iteratively to stay exact without overflowing on the
/// way there (the naive `n! / (k! * (n - k)!)` factorial approach overflows
/// `u128` far sooner than the final result does).
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 0..k {
        result = result * (n - i) as u128 / (i + 1) as u128;
    }
    result as usize
}

/// Rank of `combo` (strictly ascending, drawn from `0..n`) in the standard
/// combinatorial number system, i.e. its position among all size-`k`
/// subsets of `{0..n}` enumerated in ascending lexicographic order.
///
/// `rank = C(n,k) - 1 - Σ_{m=0..k-1} C(n - combo[m] - 1, k - m)`
pub fn combination_rank(n: usize, combo: &[usize]) -> usize {
    let k = combo.len();
    if k == 0 {
        return 0;
    }
    debug_assert!(combo.windows(2).all(|w| w[0] < w[1]), "combo must be strictly ascending");
    debug_assert!(combo.iter().all(|&c| c < n), "combo entries must be < n");

    let mut rank = binomial(n, k) - 1;
    for m in 0..k {
        let c = combo[m];
        rank -= binomial(n - c - 1, k - m);
    }
    rank
}

/// Bit index of `values` (one per parameter of `combination`) within the
/// combination's bitmap, a mixed-radix number with the combination's last
/// parameter as the least significant digit.
pub fn value_tuple_bit_index(domain_sizes: &[usize], values: &[u32]) -> usize {
    debug_assert_eq!(domain_sizes.len(), values.len());
    let mut index = 0usize;
    for i in 0..values.len() {
        let suffix_product: usize = domain_sizes[i + 1..].iter().product();
        index += values[i] as usize * suffix_product;
    }
    index
}

/// Inverse of [`value_tuple_bit_index`]: decode a bit index back into the
/// value tuple over `domain_sizes`, most-significant digit first.
pub fn bit_index_to_values(mut index: usize, domain_sizes: &[usize]) -> Vec<u32> {
    let mut values = vec![0u32; domain_sizes.len()];
    for i in 0..domain_sizes.len() {
        let suffix_product: usize = domain_sizes[i + 1..].iter().product();
        values[i] = (index / suffix_product) as u32;
        index -= values[i] as usize * suffix_product;
    }
    values
}
