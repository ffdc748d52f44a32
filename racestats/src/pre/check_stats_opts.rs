use crate::pre::stats_opts::{OutputFormat, StatsOpts};
use anyhow::Context;
use helpers::general::InputValueError;
use std::path::Path;

/// InputKind is derived from the extension of the race records file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Json,
    Csv,
}

/// input_kind returns the kind of the records file based on its extension (case-insensitive).
pub fn input_kind(filepath: &Path) -> Option<InputKind> {
    let ext = filepath.extension()?.to_str()?.to_ascii_lowercase();

    match ext.as_str() {
        "json" => Some(InputKind::Json),
        "csv" => Some(InputKind::Csv),
        _ => None,
    }
}

/// check_stats_opts assures that the inserted options are usable and raises an error if not.
pub fn check_stats_opts(stats_opts: &StatsOpts) -> anyhow::Result<()> {
    if input_kind(&stats_opts.input_path).is_none() {
        return Err(InputValueError).context(format!(
            "Race records file {} must have the extension .json or .csv!",
            stats_opts.input_path.display()
        ));
    }

    if stats_opts.summary && stats_opts.output_path.is_none() {
        return Err(InputValueError)
            .context("If summary is activated, output_path must be set (stdout carries the summary)!");
    }

    if let Some(output_path) = &stats_opts.output_path {
        let ext = output_path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        if stats_opts.format == OutputFormat::Html && ext.as_deref() != Some("html") {
            return Err(InputValueError).context(format!(
                "Output file {} must have the extension .html if format html is chosen!",
                output_path.display()
            ));
        }
    }

    Ok(())
}
