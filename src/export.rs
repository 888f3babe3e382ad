//! Export generated batches to disk

use std::path::Path;

use chrono::Local;

use crate::error::{AliasForgeError, Result};
use crate::types::BatchResult;

const FILE_STEM: &str = "generated_usernames";

/// Default timestamped export name, e.g. `generated_usernames_20250131_093042.txt`
pub fn default_file_name(extension: &str) -> String {
    format!(
        "{}_{}.{}",
        FILE_STEM,
        Local::now().format("%Y%m%d_%H%M%S"),
        extension
    )
}

/// Write the batch as plain text, one username per line
pub fn save_txt(result: &BatchResult, path: &Path) -> Result<()> {
    write_file(path, result.to_text())
}

/// Write the whole batch with its metadata as pretty-printed JSON
pub fn save_json(result: &BatchResult, path: &Path) -> Result<()> {
    let content = serde_json::to_string_pretty(result)
        .map_err(|e| AliasForgeError::parse(e.to_string()))?;
    write_file(path, content)
}

fn write_file(path: &Path, content: String) -> Result<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            AliasForgeError::io(e.to_string(), Some(parent.to_string_lossy().to_string()))
        })?;
    }

    std::fs::write(path, content)
        .map_err(|e| AliasForgeError::io(e.to_string(), Some(path.to_string_lossy().to_string())))
}
