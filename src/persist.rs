use std::fs;
use std::path::Path;

use color_eyre::eyre::Result;
use log::{error, info};
use serde::Serialize;

use crate::args::Args;
use crate::download::Downloads;
use crate::scrape::Countries;

/// Serializes one document as pretty-printed JSON, replacing any prior
/// file at that path.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    fs::write(path, serde_json::to_string_pretty(value)?)?;
    Ok(())
}

/// Writes the display record and the audit record. The two writes are
/// independent; a failure in one still leaves the other attempted.
pub fn write_records(args: &Args, downloads: &Downloads, countries: &Countries) {
    report(&args.flags_data, write_json(&args.flags_data, downloads));
    report(&args.scrap_record, write_json(&args.scrap_record, countries));
}

fn report(path: &Path, result: Result<()>) {
    match result {
        Ok(()) => info!("written to JSON file {}", path.display()),
        Err(e) => error!("data was not written to {}: {e}", path.display()),
    }
}
