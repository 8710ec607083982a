// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::consts::{CSV_FILENAME, CSV_MIME};
use crate::csv::{convert_to_csv, with_bom};
use crate::record::TranslationRecord;

/// A file waiting for the user to pick where it goes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Download {
    pub filename: String,
    pub mime: &'static str,
    pub contents: String,
}

impl Download {
    pub fn csv(records: &[TranslationRecord]) -> Self {
        Self {
            filename: s!(CSV_FILENAME),
            mime: CSV_MIME,
            contents: with_bom(&convert_to_csv(records)),
        }
    }

    pub fn line_count(&self) -> usize {
        self.contents.lines().count()
    }
}

/// Write the download to the path the user confirmed.
pub fn write_download(download: &Download, path: &Path) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, download.contents.as_bytes())?;
    Ok(path.to_path_buf())
}

/// Turn what the user typed into a file path. Empty → `default_filename`;
/// a directory (existing, or ending in a separator) → `<dir>/<default_filename>`.
pub fn resolve_save_path(user_text: &str, default_filename: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let user_text = user_text.trim();
    if user_text.is_empty() { return Ok(PathBuf::from(default_filename)); }
    let p = PathBuf::from(normalize_separators(user_text));
    if looks_like_dir_hint(user_text) || p.is_dir() {
        ensure_directory(&p)?;
        Ok(p.join(default_filename))
    } else {
        Ok(p)
    }
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

fn looks_like_dir_hint(s: &str) -> bool {
    s.ends_with('/') || s.ends_with('\\')
}
