//! Vertical extension: add rows (or fill in don't-cares on existing rows)
//! to cover whatever horizontal extension left uncovered.

use super::index::bit_index_to_values;
use super::pi::Pi;
use super::row::{combination_values, set_combination_values, Cell, Row};

/// Run vertical extension for active parameter `i` (0-indexed, so rows have
/// length `i+1` after this returns) against `pi`, appending new rows to
/// `rows` as needed and resolving every remaining don't-care to domain index
/// 0 once every combination has been processed.
pub fn vertical_extension(i: usize, rows: &mut Vec<Row>, pi: &Pi, domain_sizes: &[usize]) {
    for (combination, bitmap) in pi.combinations().iter().zip(pi.bitmaps()) {
        let combo_domain_sizes: Vec<usize> = combination.iter().map(|&p| domain_sizes[p]).collect();

        for bit_index in bitmap.iter_set_bits() {
            let values = bit_index_to_values(bit_index, &combo_domain_sizes);
            let target: Vec<Cell> = values.iter().map(|&v| Cell::Value(v)).collect();

            if cover_existing_row(rows, combination, &target) {
                continue;
            }

            let mut new_row = vec![Cell::DontCare; i + 1];
            set_combination_values(&mut new_row, &values, combination);
            rows.push(new_row);
        }
    }

    resolve_dont_cares(rows, domain_sizes);
}

/// Try to make an existing row cover `target` at `combination`'s positions,
/// either because it already matches or because every mismatching position
/// is a don't-care that can be pinned to the target value. Returns whether
/// some row now covers it.
fn cover_existing_row(rows: &mut [Row], combination: &[usize], target: &[Cell]) -> bool {
    for row in rows.iter_mut() {
        let existing = combination_values(row, combination);

        if existing == target {
            return true;
        }

        let can_change = existing.iter().zip(target).all(|(e, t)| e == t || e.is_dont_care());
        if can_change {
            let values: Vec<u32> = target.iter().map(|c| c.value().unwrap()).collect();
            set_combination_values(row, &values, combination);
            return true;
        }
    }
    false
}

fn resolve_dont_cares(rows: &mut [Row], domain_sizes: &[usize]) {
    for row in rows.iter_mut() {
        for (p, cell) in row.iter_mut().enumerate() {
            if cell.is_dont_care() {
                debug_assert!(domain_sizes[p] > 0);
                *cell = Cell::Value(0);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_new_row_when_nothing_else_can_cover() {
        let domain_sizes = [2usize, 2];
        let pi = Pi::construct(1, 2, &domain_sizes);
        // leave every bit set (nothing covered yet)
        let width = pi.bitmaps()[0].width();
        assert_eq!(width, 4);

        let mut rows: Vec<Row> = Vec::new();
        vertical_extension(1, &mut rows, &pi, &domain_sizes);

        assert_eq!(rows.len(), 4);
        for row in &rows {
            assert!(row.iter().all(|c| !c.is_dont_care()));
        }

        // every (a,b) pair in {0,1}x{0,1} must appear
        let mut pairs: Vec<(u32, u32)> = rows.iter().map(|r| (r[0].value().unwrap(), r[1].value().unwrap())).collect();
        pairs.sort();
        assert_eq!(pairs, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn reuses_a_dont_care_slot_instead_of_adding_a_row() {
        let domain_sizes = [2usize, 2, 2];
        let pi = Pi::construct(2, 2, &domain_sizes);

        // One row already covering parameter 0 and 1, parameter 2 don't-care.
        let mut rows: Vec<Row> = vec![vec![Cell::Value(0), Cell::Value(0), Cell::DontCare]];

        // All bitmaps start fully set (nothing covered for combos touching 2).
        for bitmap in pi.bitmaps() {
            assert_eq!(bitmap.count_ones() as usize, bitmap.width());
        }

        let before_len = rows.len();
        vertical_extension(2, &mut rows, &pi, &domain_sizes);

        // Row count can grow (other value tuples still need new rows), but
        // (0,_,0) for combo{0,2} and (0,_,0) for combo{1,2} reuse slot 0's
        // value-0 cells, so the first row should have parameter 2 resolved
        // rather than left as a fresh duplicate of an all-zero row.
        assert!(rows.len() >= before_len);
        assert!(rows[0].iter().all(|c| !c.is_dont_care()));
    }

    #[test]
    fn resolves_remaining_dont_cares_to_index_zero() {
        let domain_sizes = [3usize, 3];
        let mut rows: Vec<Row> = vec![vec![Cell::Value(1), Cell::DontCare]];
        resolve_dont_cares(&mut rows, &domain_sizes);
        assert_eq!(rows[0], vec![Cell::Value(1), Cell::Value(0)]);
    }

    #[test]
    fn fully_covered_pi_adds_no_rows() {
        let domain_sizes = [2usize, 2];
        let mut pi = Pi::construct(1, 2, &domain_sizes);
        for bitmap in pi.bitmaps_mut() {
            for i in 0..bitmap.width() {
                bitmap.clear_bit(i);
            }
        }

        let mut rows: Vec<Row> = vec![vec![Cell::Value(0), Cell::Value(0)]];
        vertical_extension(1, &mut rows, &pi, &domain_sizes);
        assert_eq!(rows.len(), 1);
    }
}
