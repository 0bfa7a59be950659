use crate::label::*;
use anyhow::*;
use collapse_stats::Sample;
use log::*;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// How a line is split into fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Delimiter {
    /// Any run of ASCII whitespace separates fields
    #[default]
    Whitespace,
    /// Only `\t` separates fields; empty fields are kept
    Tab,
}
impl Delimiter {
    fn split<'a>(self, line: &'a str) -> Box<dyn Iterator<Item = &'a str> + 'a> {
        match self {
            Delimiter::Whitespace => Box::new(line.split_ascii_whitespace()),
            Delimiter::Tab => Box::new(line.split('\t')),
        }
    }
}

/// The input table, with its values grouped by row id.
#[derive(Clone, Debug, PartialEq)]
pub struct Grouped {
    /// The first line of the input, minus its line terminator
    pub header: String,
    /// One sample per data column, sized by the first row seen for each id
    pub rows: BTreeMap<RowId, Vec<Sample>>,
    /// The number of data lines read
    pub data_rows: usize,
}
impl Grouped {
    pub fn new(header: String) -> Grouped {
        Grouped {
            header,
            rows: BTreeMap::new(),
            data_rows: 0,
        }
    }

    pub fn update<'a>(&mut self, id: RowId, cells: impl ExactSizeIterator<Item = &'a str>) {
        self.data_rows += 1;
        let n_cells = cells.len();
        let columns = self
            .rows
            .entry(id.clone())
            .or_insert_with(|| vec![Sample::new(); n_cells]);
        if n_cells > columns.len() {
            warn!(
                "{}: ignoring {} cells beyond the {} columns of its first row",
                id,
                n_cells - columns.len(),
                columns.len()
            );
        }
        for (cell, column) in cells.zip(columns.iter_mut()) {
            if let Some(x) = parse_cell(cell) {
                column.push(x);
            }
        }
    }
}

/// Missing readings ("NA", "", "-", "nan", ...) come out as `None`.
fn parse_cell(cell: &str) -> Option<f64> {
    let x = cell.trim().parse::<f64>().ok()?;
    if x.is_nan() {
        None
    } else {
        Some(x)
    }
}

pub fn parse_table(mut rdr: impl BufRead, delimiter: Delimiter) -> Result<Grouped> {
    let mut grouped: Option<Grouped> = None;
    let mut buf = String::new();
    let mut lineno = 0;
    loop {
        buf.clear();
        if rdr.read_line(&mut buf)? == 0 {
            break;
        }
        lineno += 1;
        // Blank, counting the terminator
        if buf.len() < 2 {
            continue;
        }
        let line = buf.trim_end_matches(&['\r', '\n'][..]);
        if line.trim().is_empty() {
            debug!("Line {}: blank, skipping", lineno);
            continue;
        }
        let Some(table) = grouped.as_mut() else {
            grouped = Some(Grouped::new(line.to_string()));
            continue;
        };
        let tokens = delimiter.split(line).collect::<Vec<&str>>();
        let Some((id, cells)) = tokens.split_first() else {
            continue;
        };
        table.update(RowId::from(*id), cells.iter().copied());
    }
    let grouped = grouped.ok_or_else(|| anyhow!("input has no header line"))?;
    info!(
        "Found {} unique row ids and {} total rows of data",
        grouped.rows.len(),
        grouped.data_rows
    );
    Ok(grouped)
}

pub fn read_table(path: &Path, delimiter: Delimiter) -> Result<Grouped> {
    if !path.exists() {
        bail!("can't find input file {}", path.display());
    }
    let file = File::open(path).with_context(|| format!("couldn't open {}", path.display()))?;
    parse_table(BufReader::new(file), delimiter)
        .with_context(|| format!("couldn't read {}", path.display()))
}
