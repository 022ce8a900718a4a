//! Input discovery: `.xlsx` files from a path or a flat directory listing.

use std::path::{Path, PathBuf};

use anyhow::Context;

/// True for workbook files the batch should pick up. Office lock/temp files
/// (`~$name.xlsx`) are skipped.
fn is_workbook_file(path: &Path) -> bool {
    let if_xlsx = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xlsx"));
    let if_temp = path
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with("~$"));
    if_xlsx && !if_temp
}

/// List input workbooks for one path.
///
/// A file path yields itself when it is a workbook; a directory yields its
/// direct `.xlsx` children (no recursion), sorted for stable batch order.
pub fn discover_input_files(path: &Path) -> anyhow::Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(if is_workbook_file(path) {
            vec![path.to_path_buf()]
        } else {
            Vec::new()
        });
    }

    let entries = std::fs::read_dir(path)
        .with_context(|| format!("failed to list input directory {}", path.display()))?;
    let mut l_files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|entry_path| entry_path.is_file() && is_workbook_file(entry_path))
        .collect();
    l_files.sort();
    Ok(l_files)
}
