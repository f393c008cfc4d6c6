use std::fmt;

use serde::{Deserialize, Serialize};

/// One row of the diagnostic DH table. `index` is the position in the chain.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct DhRow {
    pub index: usize,
    pub theta: f64,
    pub d: f64,
    pub a: f64,
    pub alpha: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct DhTable {
    pub rows: Vec<DhRow>,
}

const HEADER: [&str; 5] = ["Joint", "theta", "d", "a", "alpha"];

impl DhTable {
    /// Cell text per row; joints are numbered from 1.
    fn cells(&self) -> Vec<[String; 5]> {
        self.rows
            .iter()
            .map(|row| {
                [
                    (row.index + 1).to_string(),
                    format!("{:.4}", row.theta),
                    format!("{:.4}", row.d),
                    format!("{:.4}", row.a),
                    format!("{:.4}", row.alpha),
                ]
            })
            .collect()
    }
}

impl fmt::Display for DhTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells = self.cells();
        let mut widths = HEADER.map(str::len);
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.len());
            }
        }

        let border: String = widths
            .iter()
            .map(|w| format!("+{}", "-".repeat(w + 2)))
            .collect::<String>()
            + "+";

        writeln!(f, "{}", border)?;
        for (col, name) in HEADER.iter().enumerate() {
            write!(f, "| {:^width$} ", name, width = widths[col])?;
        }
        writeln!(f, "|")?;
        writeln!(f, "{}", border)?;
        for row in &cells {
            for (col, cell) in row.iter().enumerate() {
                write!(f, "| {:>width$} ", cell, width = widths[col])?;
            }
            writeln!(f, "|")?;
        }
        write!(f, "{}", border)
    }
}
