use crate::core::record::RaceYearRecord;
use crate::pre::check_stats_opts::{input_kind, InputKind};
use anyhow::Context;
use helpers::general::InputValueError;
use serde_json::Value;
use std::collections::HashMap;
use std::fs::OpenOptions;
use std::io::Read;
use std::path::Path;

/// Keys under which the record collection is accepted if the JSON document is an object.
const COLLECTION_KEYS: [&str; 2] = ["BATHURST_ROWS", "rows"];

/// read_race_rows reads the race records file. Ok(None) is returned if the file does not contain a
/// record collection, e.g. if the JSON document is neither an array nor an object carrying one.
pub fn read_race_rows(filepath: &Path) -> anyhow::Result<Option<Vec<RaceYearRecord>>> {
    let kind = input_kind(filepath).ok_or(InputValueError).context(format!(
        "Unsupported race records file {}!",
        filepath.display()
    ))?;

    // open file
    let fh = OpenOptions::new()
        .read(true)
        .open(filepath)
        .context(format!(
            "Failed to open race records file {}!",
            filepath.display()
        ))?;

    // read and parse file content
    match kind {
        InputKind::Json => {
            let doc: Value = serde_json::from_reader(&fh).context(format!(
                "Failed to parse race records file {}!",
                filepath.display()
            ))?;
            rows_from_json(doc).context(format!(
                "Failed to decode race records in {}!",
                filepath.display()
            ))
        }
        InputKind::Csv => rows_from_csv(&fh)
            .map(Some)
            .context(format!(
                "Failed to parse race records file {}!",
                filepath.display()
            )),
    }
}

/// rows_from_json extracts the record collection from a JSON document.
pub fn rows_from_json(doc: Value) -> anyhow::Result<Option<Vec<RaceYearRecord>>> {
    let rows = match doc {
        Value::Array(rows) => Value::Array(rows),
        Value::Object(mut map) => {
            match COLLECTION_KEYS.iter().find_map(|key| match map.remove(*key) {
                Some(rows @ Value::Array(_)) => Some(rows),
                _ => None,
            }) {
                Some(rows) => rows,
                None => return Ok(None),
            }
        }
        _ => return Ok(None),
    };

    Ok(Some(serde_json::from_value(rows)?))
}

/// rows_from_csv reads records from CSV data with a header row containing the field names.
pub fn rows_from_csv<R: Read>(reader: R) -> anyhow::Result<Vec<RaceYearRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut rows = vec![];

    for result in csv_reader.deserialize() {
        let row: HashMap<String, String> = result?;
        rows.push(RaceYearRecord::from_text_fields(row));
    }

    Ok(rows)
}
