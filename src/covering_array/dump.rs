//! Text dump format, for diagnostics and golden-format tests.
//!
//! Line 1: row count. Line 2: space-separated parameter names. Line 3: a
//! rule of `-` the same length as line 2. Then one line per row, values
//! space-separated in column order. No trailing blank line.

use std::fmt::Display;

use super::driver::CoveringArray;

pub fn dump<V: Display>(array: &CoveringArray<V>) -> String {
    let header = array.parameter_names.join(" ");
    let mut lines = vec![array.num_rows().to_string(), header.clone(), "-".repeat(header.len())];

    for row in &array.rows {
        let line = row.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(" ");
        lines.push(line);
    }

    lines.join("\n")
}
