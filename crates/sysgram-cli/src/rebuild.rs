//! Incremental rebuild decisions.

use std::{fs, path::Path};

/// Whether `output` exists and was modified no earlier than `input`.
///
/// Missing files and platforms without modification times always count as
/// stale.
pub fn is_up_to_date(input: &Path, output: &Path) -> bool {
    let (Ok(input_meta), Ok(output_meta)) = (fs::metadata(input), fs::metadata(output)) else {
        return false;
    };
    match (input_meta.modified(), output_meta.modified()) {
        (Ok(input_time), Ok(output_time)) => output_time >= input_time,
        _ => false,
    }
}
