use crate::ingest::Grouped;
use crate::label::*;
use collapse_stats::Summary;
use log::*;
use std::collections::BTreeMap;
use std::fmt;

/// One collapsed output value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Cell {
    Value(f64),
    /// No parsable values were seen for this column
    Missing,
}
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            // "inf" and "-inf" already come out lowercase
            Cell::Value(x) if x.is_nan() => f.write_str("nan"),
            Cell::Value(x) => write!(f, "{:.3}", x),
            Cell::Missing => f.write_str("NA"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Collapsed {
    pub header: String,
    pub rows: BTreeMap<RowId, Vec<Cell>>,
}

pub fn collapse(grouped: Grouped, summary: Summary) -> Collapsed {
    info!("Collapsing repeated rows by computing their {}", summary);
    let rows = grouped
        .rows
        .into_iter()
        .map(|(id, columns)| {
            let cells = columns
                .iter()
                .map(|sample| summary.apply(sample).map_or(Cell::Missing, Cell::Value))
                .collect::<Vec<_>>();
            (id, cells)
        })
        .collect();
    Collapsed {
        header: grouped.header,
        rows,
    }
}
