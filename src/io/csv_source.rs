use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use encoding_rs::GBK;
use glob::glob;
use tracing::{debug, warn};
use crate::builder::RawBatch;
use crate::constants::{HEADER_TOKENS, RAW_ROW_ARITY};
use crate::error::FieldResult;

/// Station exports are GBK encoded; files that are already valid UTF-8 are taken as-is.
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => {
            let (text, _, had_errors) = GBK.decode(bytes);
            if had_errors {
                warn!("input is neither UTF-8 nor clean GBK, undecodable bytes replaced");
            }
            text
        }
    }
}

/// Reads CSV records into station rows, keeping records with exactly five fields whose value
/// field is not a header token. Quoted fields follow the usual CSV rules.
pub fn parse_rows(text: &str) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = vec![];
    for (line, record) in reader.records().enumerate() {
        match record {
            Ok(record) => {
                if record.len() == RAW_ROW_ARITY && !HEADER_TOKENS.contains(&&record[4]) {
                    rows.push(record.iter().map(str::to_string).collect());
                }
            }
            Err(e) => warn!("skipping unreadable csv record {line}: {e}"),
        }
    }
    rows
}

/// Reads one CSV file as a batch named after the file.
pub fn read_batch(path: &Path) -> FieldResult<RawBatch> {
    let bytes = fs::read(path)?;
    let text = decode_text(&bytes);
    let name = path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let rows = parse_rows(&text);
    debug!(batch = %name, rows = rows.len(), "read csv batch");
    Ok(RawBatch { name, rows })
}

/// All `*.csv` files directly inside `data_dir`, sorted by path.
pub fn discover_batches(data_dir: &Path) -> FieldResult<Vec<RawBatch>> {
    let pattern = data_dir.join("*.csv");
    let mut paths: Vec<PathBuf> = vec![];
    for entry in glob(&pattern.to_string_lossy())? {
        match entry {
            Ok(path) => paths.push(path),
            Err(e) => warn!("unreadable entry in {}: {e}", data_dir.display()),
        }
    }
    paths.sort();
    paths.iter().map(|path| read_batch(path)).collect()
}
