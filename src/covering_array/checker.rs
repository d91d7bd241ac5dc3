//! Checker: an independent verifier for a generated covering array.

use super::driver::CoveringArray;
use super::error::CoveringArrayError;

/// Verify that `array` covers every size-`strength` combination of
/// `parameters`' names and every value tuple drawn from their domains.
///
/// Unlike the generator, this does not clamp `strength` — an explicit
/// strength outside `[1, N]` is reported as `InvalidStrength` rather than
/// silently reinterpreted, since "verify this exact strength" is a
/// deliberate request.
pub fn check<V: Clone + PartialEq + std::fmt::Debug>(
    parameters: &[(String, Vec<V>)],
    array: &CoveringArray<V>,
    strength: i64,
) -> Result<(), CoveringArrayError> {
    if array.rows.is_empty() {
        return Err(CoveringArrayError::EmptyCoveringArray);
    }

    let n = parameters.len();
    if strength < 1 || strength > n as i64 {
        return Err(CoveringArrayError::InvalidStrength { strength, num_parameters: n });
    }
    let t = strength as usize;

    let domains: Vec<Vec<V>> = parameters.iter().map(|(_, values)| dedupe(values)).collect();
    let parameter_names: Vec<&String> = parameters.iter().map(|(name, _)| name).collect();

    for combination in combinations_of_indices(n, t) {
        for values in cartesian_product(&combination, &domains) {
            let covered = array.rows.iter().any(|row| {
                combination.iter().zip(&values).all(|(&p, v)| &row[p] == v)
            });

            if !covered {
                return Err(CoveringArrayError::MissingCombination {
                    combination: combination.iter().map(|&p| parameter_names[p].clone()).collect(),
                    values: values.iter().map(|v| format!("{v:?}")).collect(),
                });
            }
        }
    }

    Ok(())
}

fn dedupe<V: Clone + PartialEq>(values: &[V]) -> Vec<V> {
    let mut out: Vec<V> = Vec::new();
    for v in values {
        if !out.contains(v) {
            out.push(v.clone());
        }
    }
    out
}

/// All size-`k` subsets of `{0..n}`, ascending lexicographic order.
fn combinations_of_indices(n: usize, k: usize) -> Vec<Vec<usize>> {
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

/// The Cartesian product of `domains[p]` for each `p` in `combination`, in
/// combination order.
fn cartesian_product<'a, V>(combination: &[usize], domains: &'a [Vec<V>]) -> Vec<Vec<&'a V>> {
    let mut result: Vec<Vec<&V>> = vec![Vec::new()];
    for &p in combination {
        let mut next = Vec::new();
        for partial in &result {
            for value in &domains[p] {
                let mut extended = partial.clone();
                extended.push(value);
                next.push(extended);
            }
        }
        result = next;
    }
    result
}
