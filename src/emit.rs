use crate::collapse::Collapsed;
use anyhow::*;
use log::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write the header line, then one tab-separated line per row id, in id
/// order.
pub fn write_table<W: Write>(mut out: W, collapsed: &Collapsed) -> Result<()> {
    writeln!(out, "{}", collapsed.header)?;
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .has_headers(false)
        // Rows for different ids can have different widths
        .flexible(true)
        .from_writer(out);
    for (id, cells) in &collapsed.rows {
        wtr.write_field(id.as_ref())?;
        for cell in cells {
            wtr.write_field(cell.to_string())?;
        }
        wtr.write_record(None::<&[u8]>)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Creates the file, or truncates it if it already exists.
pub fn write_table_to_path(path: &Path, collapsed: &Collapsed) -> Result<()> {
    info!("Writing the collapsed data to {}", path.display());
    let file = File::create(path).with_context(|| format!("couldn't create {}", path.display()))?;
    write_table(BufWriter::new(file), collapsed)
        .with_context(|| format!("couldn't write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collapse::Cell;
    use crate::label::RowId;
    use std::collections::BTreeMap;

    fn render(collapsed: &Collapsed) -> String {
        let mut buf = Vec::new();
        write_table(&mut buf, collapsed).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn rows_are_sorted_by_id() {
        let mut rows = BTreeMap::new();
        rows.insert(RowId::from("probeC"), vec![Cell::Value(3.)]);
        rows.insert(RowId::from("probeA"), vec![Cell::Value(1.)]);
        rows.insert(RowId::from("probeB"), vec![Cell::Missing]);
        let collapsed = Collapsed {
            header: "ID\tV1".into(),
            rows,
        };
        assert_eq!(
            render(&collapsed),
            "ID\tV1\nprobeA\t1.000\nprobeB\tNA\nprobeC\t3.000\n"
        );
    }

    #[test]
    fn header_is_written_verbatim() {
        let collapsed = Collapsed {
            header: "  \"ID\"  V1, V2 ".into(),
            rows: BTreeMap::new(),
        };
        assert_eq!(render(&collapsed), "  \"ID\"  V1, V2 \n");
    }

    #[test]
    fn fields_are_not_quoted() {
        let mut rows = BTreeMap::new();
        rows.insert(
            RowId::from("probe \"1\", x"),
            vec![Cell::Value(0.5), Cell::Missing, Cell::Value(-2.)],
        );
        rows.insert(RowId::from("short"), vec![Cell::Value(1.)]);
        let collapsed = Collapsed {
            header: "ID V1 V2 V3".into(),
            rows,
        };
        assert_eq!(
            render(&collapsed),
            "ID V1 V2 V3\nprobe \"1\", x\t0.500\tNA\t-2.000\nshort\t1.000\n"
        );
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "stale contents that are longer than the new ones\n").unwrap();
        let mut rows = BTreeMap::new();
        rows.insert(RowId::from("p"), vec![Cell::Value(1.)]);
        let collapsed = Collapsed {
            header: "ID V1".into(),
            rows,
        };
        write_table_to_path(&path, &collapsed).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "ID V1\np\t1.000\n");
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.txt");
        let collapsed = Collapsed {
            header: "ID".into(),
            rows: BTreeMap::new(),
        };
        let e = write_table_to_path(&path, &collapsed).unwrap_err();
        assert!(e.to_string().starts_with("couldn't create"));
    }
}
