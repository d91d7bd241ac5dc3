//! Driver: normalise parameters, seed rows, run the IPOG outer loop, decode.

use super::error::CoveringArrayError;
use super::horizontal::horizontal_extension;
use super::pi::Pi;
use super::row::{Cell, Row};
use super::vertical::vertical_extension;

/// A generated covering array: an ordered list of rows, each row holding
/// one concrete value per declared parameter, aligned with
/// `parameter_names`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoveringArray<V> {
    pub parameter_names: Vec<String>,
    pub rows: Vec<Vec<V>>,
}

impl<V> CoveringArray<V> {
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_parameters(&self) -> usize {
        self.parameter_names.len()
    }
}

/// Deduplicate `values` by first occurrence, returning the distinct values
/// in the order they first appeared.
fn dedupe_by_first_occurrence<V: Clone + PartialEq>(values: &[V]) -> Vec<V> {
    let mut out: Vec<V> = Vec::new();
    for v in values {
        if !out.contains(v) {
            out.push(v.clone());
        }
    }
    out
}

/// Generate a covering array of the requested `strength` for `parameters`,
/// an ordered list of `(name, values)` pairs. `strength` is clamped into
/// `[1, N]` where `N` is the number of parameters (§4.7); it is not an
/// error to request a strength outside that range.
///
/// Returns `CoveringArrayError::EmptyParameters` if `parameters` is empty.
pub fn generate<V: Clone + PartialEq>(
    parameters: &[(String, Vec<V>)],
    strength: i64,
) -> Result<CoveringArray<V>, CoveringArrayError> {
    if parameters.is_empty() {
        return Err(CoveringArrayError::EmptyParameters);
    }

    let n = parameters.len();
    let t = strength.clamp(1, n as i64) as usize;

    let parameter_names: Vec<String> = parameters.iter().map(|(name, _)| name.clone()).collect();
    let decode_maps: Vec<Vec<V>> = parameters.iter().map(|(_, values)| dedupe_by_first_occurrence(values)).collect();
    let domain_sizes: Vec<usize> = decode_maps.iter().map(|d| d.len()).collect();

    let mut rows: Vec<Row> = seed_rows(&domain_sizes[..t]);

    for i in t..n {
        let mut pi = Pi::construct(i, t, &domain_sizes);
        horizontal_extension(&mut rows, &mut pi, domain_sizes[i], &domain_sizes);
        vertical_extension(i, &mut rows, &pi, &domain_sizes);
    }

    Ok(decode(rows, parameter_names, decode_maps))
}

/// The exhaustive product of the first `t` parameter domains, as the
/// initial row set.
fn seed_rows(first_domain_sizes: &[usize]) -> Vec<Row> {
    let mut rows: Vec<Row> = vec![Vec::new()];

    for &domain_size in first_domain_sizes {
        let mut next = Vec::with_capacity(rows.len() * domain_size);
        for row in &rows {
            for value in 0..domain_size as u32 {
                let mut extended = row.clone();
                extended.push(Cell::Value(value));
                next.push(extended);
            }
        }
        rows = next;
    }

    rows
}

fn decode<V: Clone>(rows: Vec<Row>, parameter_names: Vec<String>, decode_maps: Vec<Vec<V>>) -> CoveringArray<V> {
    let decoded_rows = rows
        .into_iter()
        .map(|row| {
            row.into_iter()
                .enumerate()
                .map(|(p, cell)| {
                    let index = cell.value().expect("vertical extension resolves every don't-care") as usize;
                    decode_maps[p][index].clone()
                })
                .collect()
        })
        .collect();

    CoveringArray { parameter_names, rows: decoded_rows }
}
