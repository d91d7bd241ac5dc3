//! Coverage evaluator: how many uncovered tuples would a candidate row
//! newly cover, and what does π look like afterward if it's chosen?

use super::bitmap::Bitmap;
use super::index::value_tuple_bit_index;
use super::pi::Pi;
use super::row::{concrete_combination_values, Cell};

/// Result of evaluating one candidate row against π: the total number of
/// newly-covered tuples across all of π's combinations, and the bitmap
/// sequence π would have if this candidate were committed.
pub struct CoverageResult {
    pub gain: u32,
    pub updated_bitmaps: Vec<Bitmap>,
}

/// Evaluate `row` (fully resolved — no don't-cares at any position touched
/// by a combination in `pi`) against `pi`, returning the total newly-covered
/// tuple count and the bitmap sequence that would result from committing it.
///
/// This does not reproduce the reference implementation's residual
/// subtraction (`coverage - current_coverage` of the last combination
/// processed) — see SPEC_FULL.md §4.4. That residual is a constant offset
/// added to every candidate evaluated for the same row, so it never changes
/// which candidate wins the `>=` comparison in horizontal extension; this
/// implementation only needs the plain total gain.
pub fn calculate_coverage(row: &[Cell], pi: &Pi, domain_sizes: &[usize]) -> CoverageResult {
    let mut gain: u32 = 0;
    let mut updated_bitmaps = Vec::with_capacity(pi.len());

    for (combination, bitmap) in pi.combinations().iter().zip(pi.bitmaps()) {
        let current_coverage = bitmap.count_ones();

        let values = concrete_combination_values(row, combination);
        let combo_domain_sizes: Vec<usize> = combination.iter().map(|&p| domain_sizes[p]).collect();
        let bit_index = value_tuple_bit_index(&combo_domain_sizes, &values);

        let mut new_bitmap = bitmap.clone();
        new_bitmap.clear_bit(bit_index);
        let new_coverage = new_bitmap.count_ones();

        gain += current_coverage - new_coverage;
        updated_bitmaps.push(new_bitmap);
    }

    CoverageResult { gain, updated_bitmaps }
}
