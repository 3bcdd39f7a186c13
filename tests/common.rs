//! Shared test utilities for integration tests.
//!
//! Provides form builders and scratch file helpers used across multiple
//! test files.

#![allow(dead_code)]

use anyhow::Result;
use formdoc::{Form, Property};
use std::path::{Path, PathBuf};

/// Returns path of a file under `tests/fixtures`.
pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Builds property with label, type and description.
pub fn property(name: &str, label: &str, optional: bool, default: Option<&str>) -> Property {
    Property {
        name: name.to_string(),
        label: label.to_string(),
        kind: "string".to_string(),
        description: format!("Sets {}", name),
        optional,
        default: default.map(String::from),
    }
}

/// Builds form whose description is derived from its label.
pub fn form(label: &str, properties: Vec<Property>) -> Form {
    Form {
        name: label.to_lowercase(),
        label: label.to_string(),
        description: format!("{} options.", label),
        properties,
    }
}

/// Returns labels of level two headings that precede the brokerpak section.
pub fn form_headings(document: &str) -> Vec<&str> {
    document
        .lines()
        .take_while(|line| *line != "## Install Brokerpaks")
        .filter_map(|line| line.strip_prefix("## "))
        .collect()
}

/// Returns table rows between the brokerpak table header and its legend.
pub fn brokerpak_rows(document: &str) -> Vec<&str> {
    document
        .lines()
        .skip_while(|line| !line.starts_with("| Property | Type | Description |"))
        .skip(2)
        .take_while(|line| line.starts_with('|'))
        .collect()
}

/// Writes file, creating parent directories as needed.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_file(dir: &Path, path: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&file_path, content)?;
    Ok(file_path)
}
