use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use csv::{ReaderBuilder, Trim};

use crate::io::open_maybe_gz;
use crate::table::UploadTable;

/// Reads an uploaded CSV (optionally `.gz`) with a mandatory header row.
pub fn read_table(path: &Path) -> Result<UploadTable> {
    let reader = open_maybe_gz(path)?;
    read_table_from(reader, &path.display().to_string())
}

pub fn read_table_from<R: Read>(reader: R, source: &str) -> Result<UploadTable> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()
        .with_context(|| format!("{}: failed to read CSV header", source))?
        .iter()
        .map(str::to_string)
        .collect();
    if headers.iter().all(|h| h.is_empty()) {
        bail!("{}: CSV has no header row", source);
    }

    let mut rows = Vec::new();
    for (idx, record) in rdr.records().enumerate() {
        let record = record.with_context(|| format!("{}:{} malformed CSV row", source, idx + 2))?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    UploadTable::new(headers, rows).with_context(|| format!("{}: inconsistent table", source))
}
