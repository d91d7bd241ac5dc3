//! Horizontal extension: extend every existing row by one parameter,
//! greedily choosing the value that covers the most still-uncovered tuples.

use super::coverage::calculate_coverage;
use super::pi::Pi;
use super::row::{Cell, Row};

/// Extend every row in `rows` by parameter `i` (whose domain has
/// `domain_size` values), committing the winning candidate's bitmap diff
/// into `pi` after each row. Rows are visited in their current order; for
/// each row every candidate value is tried in ascending order and the
/// candidate with the greatest gain wins, ties going to the *last* maximal
/// candidate scanned (`gain >= best`), matching the reference tie-break.
pub fn horizontal_extension(rows: &mut [Row], pi: &mut Pi, domain_size: usize, domain_sizes: &[usize]) {
    for row in rows.iter_mut() {
        let mut best_value = 0u32;
        let mut best_gain: Option<u32> = None;
        let mut best_bitmaps = None;

        for value in 0..domain_size as u32 {
            let mut candidate = row.clone();
            candidate.push(Cell::Value(value));

            let result = calculate_coverage(&candidate, pi, domain_sizes);

            if best_gain.is_none_or(|best| result.gain >= best) {
                best_value = value;
                best_gain = Some(result.gain);
                best_bitmaps = Some(result.updated_bitmaps);
            }
        }

        row.push(Cell::Value(best_value));
        pi.replace_bitmaps(best_bitmaps.expect("domain_size must be > 0"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extends_every_row_by_one_cell() {
        let domain_sizes = [2usize, 3, 2];
        let mut pi = Pi::construct(2, 2, &domain_sizes);
        let mut rows: Vec<Row> = vec![
            vec![Cell::Value(0), Cell::Value(0)],
            vec![Cell::Value(1), Cell::Value(2)],
        ];

        horizontal_extension(&mut rows, &mut pi, domain_sizes[2], &domain_sizes);

        assert_eq!(rows[0].len(), 3);
        assert_eq!(rows[1].len(), 3);
        assert!(rows.iter().all(|r| r.last().unwrap().value().is_some()));
    }

    #[test]
    fn ties_keep_the_last_maximal_candidate() {
        // Single row, single combination of width equal to the new
        // parameter's domain only (previous parameter domain size 1), so
        // every candidate value ties for gain (each clears exactly one
        // fresh bit). The winner must be the last value tried.
        let domain_sizes = [1usize, 4];
        let mut pi = Pi::construct(1, 2, &domain_sizes);
        let mut rows: Vec<Row> = vec![vec![Cell::Value(0)]];

        horizontal_extension(&mut rows, &mut pi, domain_sizes[1], &domain_sizes);

        assert_eq!(rows[0][1], Cell::Value(3));
    }
}
