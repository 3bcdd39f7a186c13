//! Document output

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Writes document to file, creating parent directories as needed.
///
/// A trailing newline is appended so the file ends like any other text file.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_document(path: &Path, document: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    fs::write(path, with_trailing_newline(document))
        .with_context(|| format!("Failed to write document to {}", path.display()))?;
    Ok(())
}

/// Writes document to any writer, such as standard output.
///
/// # Errors
///
/// Returns error if writing fails
pub fn print_document(mut writer: impl Write, document: &str) -> Result<()> {
    writer
        .write_all(with_trailing_newline(document).as_bytes())
        .context("Failed to write document")?;
    writer.flush().context("Failed to flush document")?;
    Ok(())
}

fn with_trailing_newline(document: &str) -> String {
    let mut text = String::with_capacity(document.len() + 1);
    text.push_str(document);
    text.push('\n');
    text
}
